// SPDX-License-Identifier: MPL-2.0
//! Visitor accessibility preferences: root font size and high contrast.
//!
//! Both preferences are read from the key-value store at startup and
//! written back on every change.

use crate::application::port::{KeyValueStore, StorageError, StorageKey};
use crate::domain::ui::newtypes::FontSize;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, text, Row};
use iced::{alignment, Element};

/// Messages emitted by the accessibility toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    IncreaseFont,
    DecreaseFont,
    ToggleContrast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    font_size: FontSize,
    high_contrast: bool,
}

impl Preferences {
    /// Reads stored preferences. Missing or malformed values fall back to
    /// the defaults; contrast is on only for the exact value `"true"`.
    #[must_use]
    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self {
            font_size: FontSize::parse_or_default(store.get(StorageKey::FontSize).as_deref()),
            high_contrast: store.get(StorageKey::ContrastMode).as_deref() == Some("true"),
        }
    }

    #[must_use]
    pub fn font_size(&self) -> FontSize {
        self.font_size
    }

    #[must_use]
    pub fn is_high_contrast(&self) -> bool {
        self.high_contrast
    }

    /// Steps the font size by `delta` pixels and stores it.
    ///
    /// Steps that would leave the 12–22px range are ignored and return
    /// `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns the store's error when the new size could not be persisted.
    /// The size is applied regardless.
    pub fn change_font_size(
        &mut self,
        delta: i8,
        store: &mut dyn KeyValueStore,
    ) -> Result<bool, StorageError> {
        let Some(next) = self.font_size.step(delta) else {
            return Ok(false);
        };
        self.font_size = next;
        store.set(StorageKey::FontSize, &next.value().to_string())?;
        Ok(true)
    }

    /// Flips high contrast and stores the new value.
    ///
    /// # Errors
    ///
    /// Returns the store's error when the value could not be persisted.
    pub fn toggle_contrast(&mut self, store: &mut dyn KeyValueStore) -> Result<bool, StorageError> {
        self.high_contrast = !self.high_contrast;
        store.set(
            StorageKey::ContrastMode,
            if self.high_contrast { "true" } else { "false" },
        )?;
        Ok(self.high_contrast)
    }

    /// Applies a toolbar message.
    ///
    /// # Errors
    ///
    /// See [`Self::change_font_size`] and [`Self::toggle_contrast`].
    pub fn update(
        &mut self,
        message: Message,
        store: &mut dyn KeyValueStore,
    ) -> Result<(), StorageError> {
        match message {
            Message::IncreaseFont => self.change_font_size(1, store).map(|_| ()),
            Message::DecreaseFont => self.change_font_size(-1, store).map(|_| ()),
            Message::ToggleContrast => self.toggle_contrast(store).map(|_| ()),
        }
    }

    /// Font size scaled by the visitor preference.
    #[must_use]
    pub fn scaled(&self, size: f32) -> f32 {
        size * self.font_size.scale()
    }
}

/// Renders the `A-` / `A+` / contrast toolbar.
pub fn view<'a>(i18n: &I18n, preferences: &Preferences) -> Element<'a, Message> {
    let font = preferences.font_size();
    let decrease = button(text("A-").size(typography::BODY_SM))
        .on_press_maybe((!font.is_min()).then_some(Message::DecreaseFont))
        .padding(spacing::XXS);
    let increase = button(text("A+").size(typography::BODY_SM))
        .on_press_maybe((!font.is_max()).then_some(Message::IncreaseFont))
        .padding(spacing::XXS);
    let contrast = button(text(i18n.tr("a11y-contrast")).size(typography::BODY_SM))
        .on_press(Message::ToggleContrast)
        .padding(spacing::XXS)
        .style(if preferences.is_high_contrast() {
            button::primary
        } else {
            button::secondary
        });

    Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(decrease)
        .push(increase)
        .push(contrast)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryStore;

    #[test]
    fn defaults_without_stored_values() {
        let prefs = Preferences::load(&MemoryStore::new());
        assert_eq!(prefs.font_size().value(), 16);
        assert!(!prefs.is_high_contrast());
    }

    #[test]
    fn loads_stored_values() {
        let store = MemoryStore::new()
            .with(StorageKey::FontSize, "20")
            .with(StorageKey::ContrastMode, "true");
        let prefs = Preferences::load(&store);
        assert_eq!(prefs.font_size().value(), 20);
        assert!(prefs.is_high_contrast());
    }

    #[test]
    fn font_steps_are_persisted() {
        let mut store = MemoryStore::new();
        let mut prefs = Preferences::load(&store);
        assert_eq!(prefs.change_font_size(1, &mut store), Ok(true));
        assert_eq!(store.get(StorageKey::FontSize).as_deref(), Some("17"));
    }

    #[test]
    fn steps_outside_range_are_ignored() {
        let mut store = MemoryStore::new().with(StorageKey::FontSize, "22");
        let mut prefs = Preferences::load(&store);
        assert_eq!(prefs.change_font_size(1, &mut store), Ok(false));
        assert_eq!(prefs.font_size().value(), 22);

        let mut store = MemoryStore::new().with(StorageKey::FontSize, "12");
        let mut prefs = Preferences::load(&store);
        prefs.update(Message::DecreaseFont, &mut store).unwrap();
        assert_eq!(prefs.font_size().value(), 12);
    }

    #[test]
    fn contrast_toggle_is_persisted() {
        let mut store = MemoryStore::new();
        let mut prefs = Preferences::load(&store);
        prefs.update(Message::ToggleContrast, &mut store).unwrap();
        assert_eq!(store.get(StorageKey::ContrastMode).as_deref(), Some("true"));
        prefs.update(Message::ToggleContrast, &mut store).unwrap();
        assert_eq!(store.get(StorageKey::ContrastMode).as_deref(), Some("false"));
    }

    #[test]
    fn scaled_sizes_follow_preference() {
        let store = MemoryStore::new().with(StorageKey::FontSize, "20");
        let prefs = Preferences::load(&store);
        approx::assert_relative_eq!(prefs.scaled(16.0), 20.0);
    }
}
