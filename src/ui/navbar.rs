// SPDX-License-Identifier: MPL-2.0
//! Fixed navigation bar: section links, the mobile menu and the scrolled
//! appearance.
//!
//! On narrow windows the links collapse behind a hamburger button. The
//! menu closes when a link is followed or when the user clicks anywhere
//! outside it.

use crate::config::defaults::NAVBAR_SCROLL_THRESHOLD_PX;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::page::Section;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, text, Column, Container, Row, Space, Text},
    Border, Color, Element, Length, Theme,
};

/// Window width below which the links collapse into the mobile menu.
pub const COMPACT_WIDTH_PX: f32 = 768.0;

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Icon of the menu button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Hamburger,
    Close,
}

impl MenuIcon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            MenuIcon::Hamburger => "☰",
            MenuIcon::Close => "✕",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct State {
    menu_open: bool,
    scrolled: bool,
    compact: bool,
}

impl State {
    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Value of the menu button's `aria-expanded` attribute.
    #[must_use]
    pub fn aria_expanded(&self) -> &'static str {
        if self.menu_open {
            "true"
        } else {
            "false"
        }
    }

    #[must_use]
    pub fn menu_icon(&self) -> MenuIcon {
        if self.menu_open {
            MenuIcon::Close
        } else {
            MenuIcon::Hamburger
        }
    }

    /// Whether the scrolled appearance (opaque background, shadow) applies.
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    pub fn on_scroll(&mut self, offset_y: f32) {
        self.scrolled = offset_y > NAVBAR_SCROLL_THRESHOLD_PX;
    }

    /// Tracks the window width. Leaving compact mode closes the menu.
    pub fn on_resize(&mut self, width: f32) {
        self.compact = width < COMPACT_WIDTH_PX;
        if !self.compact {
            self.menu_open = false;
        }
    }
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    /// A click landed outside the open menu.
    OutsideClick,
    Navigate(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    MenuToggled { open: bool },
    ScrollTo(Section),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::ToggleMenu => {
            state.menu_open = !state.menu_open;
            Event::MenuToggled {
                open: state.menu_open,
            }
        }
        Message::CloseMenu | Message::OutsideClick => {
            if !state.menu_open {
                return Event::None;
            }
            state.menu_open = false;
            Event::MenuToggled { open: false }
        }
        Message::Navigate(section) => {
            state.menu_open = false;
            Event::ScrollTo(section)
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("site-brand"))
        .size(typography::TITLE_MD)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().primary),
        });

    let mut bar = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if ctx.state.compact {
        let menu_button = button(Text::new(ctx.state.menu_icon().glyph()).size(typography::TITLE_MD))
            .on_press(Message::ToggleMenu)
            .padding(spacing::XS)
            .style(link_style);
        bar = bar.push(menu_button);
    } else {
        for section in Section::NAV {
            bar = bar.push(build_link(ctx.i18n, section));
        }
    }

    let scrolled = ctx.state.scrolled;
    let top_bar = Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .style(move |theme: &Theme| bar_style(theme, scrolled));

    let mut content = Column::new().width(Length::Fill).push(top_bar);
    if ctx.state.compact && ctx.state.menu_open {
        content = content.push(build_mobile_menu(ctx.i18n));
    }
    content.into()
}

fn build_link<'a>(i18n: &I18n, section: Section) -> Element<'a, Message> {
    button(Text::new(i18n.tr(section.nav_label_key())).size(typography::BODY_SM))
        .on_press(Message::Navigate(section))
        .padding([spacing::XXS, spacing::XS])
        .style(link_style)
        .into()
}

fn build_mobile_menu<'a>(i18n: &I18n) -> Element<'a, Message> {
    let links = Section::NAV
        .into_iter()
        .fold(Column::new().spacing(spacing::XXS), |column, section| {
            column.push(
                button(Text::new(i18n.tr(section.nav_label_key())))
                    .on_press(Message::Navigate(section))
                    .padding([spacing::XS, spacing::SM])
                    .width(Length::Fill)
                    .style(link_style),
            )
        });

    Container::new(links)
        .padding(spacing::XS)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.base.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        })
        .into()
}

fn bar_style(theme: &Theme, scrolled: bool) -> container::Style {
    let base = theme.extended_palette().background.base.color;
    let alpha = if scrolled { opacity::SURFACE } else { opacity::OPAQUE };
    container::Style {
        background: Some(Color { a: alpha, ..base }.into()),
        shadow: if scrolled {
            crate::ui::design_tokens::shadow::MD
        } else {
            crate::ui::design_tokens::shadow::NONE
        },
        ..Default::default()
    }
}

fn link_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette_ext = theme.extended_palette();

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Color { a: opacity::OVERLAY_SUBTLE, ..palette::GOLD_500 }.into()),
            text_color: palette_ext.primary.base.color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: palette_ext.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}
