// SPDX-License-Identifier: MPL-2.0
//! Page sections and their vertical layout.
//!
//! Sections are stacked in a single scrollable column below a fixed
//! navbar. Each section renders at a fixed height, so the page layout (and
//! with it every anchor target and observed element) is known without
//! querying the renderer.

use crate::ui::design_tokens::sizing;
use crate::ui::intersection::Span;

/// Identifier of the page's scrollable, used by scroll operations.
pub const PAGE_SCROLL_ID: &str = "page";

/// A page section, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Home,
    About,
    PracticeAreas,
    Team,
    Testimonials,
    Faq,
    Contact,
    Footer,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::About,
        Section::PracticeAreas,
        Section::Team,
        Section::Testimonials,
        Section::Faq,
        Section::Contact,
        Section::Footer,
    ];

    /// Sections linked from the navbar.
    pub const NAV: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::PracticeAreas,
        Section::Team,
        Section::Testimonials,
        Section::Faq,
        Section::Contact,
    ];

    /// Anchor name, as in `#contato`.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "inicio",
            Section::About => "sobre",
            Section::PracticeAreas => "areas",
            Section::Team => "equipe",
            Section::Testimonials => "depoimentos",
            Section::Faq => "faq",
            Section::Contact => "contato",
            Section::Footer => "rodape",
        }
    }

    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.strip_prefix('#').unwrap_or(anchor);
        Self::ALL.into_iter().find(|section| section.anchor() == anchor)
    }

    #[must_use]
    pub fn nav_label_key(self) -> &'static str {
        match self {
            Section::Home => "nav-home",
            Section::About => "nav-about",
            Section::PracticeAreas => "nav-practice-areas",
            Section::Team => "nav-team",
            Section::Testimonials => "nav-testimonials",
            Section::Faq => "nav-faq",
            Section::Contact => "nav-contact",
            Section::Footer => "nav-footer",
        }
    }

    /// Rendered height in pixels.
    #[must_use]
    pub fn height(self) -> f32 {
        match self {
            Section::Home => 640.0,
            Section::About => 900.0,
            Section::PracticeAreas => 720.0,
            Section::Team => 620.0,
            Section::Testimonials => 480.0,
            Section::Faq => 760.0,
            Section::Contact => 1040.0,
            Section::Footer => 240.0,
        }
    }
}

/// Stats block inside the about section: offset from the section top and height.
pub const STATS_BLOCK: (f32, f32) = (620.0, 200.0);

/// Team photo row inside the team section.
pub const TEAM_PHOTOS: (f32, f32) = (160.0, 280.0);

/// Page coordinates of every section.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    /// Space above the first section, covered by the fixed navbar.
    header_height: f32,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::new(sizing::NAVBAR_HEIGHT)
    }
}

impl PageLayout {
    #[must_use]
    pub fn new(header_height: f32) -> Self {
        Self { header_height }
    }

    #[must_use]
    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    /// Extent of `section` in page coordinates.
    #[must_use]
    pub fn span(&self, section: Section) -> Span {
        let top = self.header_height
            + Section::ALL
                .iter()
                .take_while(|candidate| **candidate != section)
                .map(|candidate| candidate.height())
                .sum::<f32>();
        Span::new(top, section.height())
    }

    /// Extent of a block given by its offset inside `section`.
    #[must_use]
    pub fn block(&self, section: Section, (offset, height): (f32, f32)) -> Span {
        Span::new(self.span(section).top + offset, height)
    }

    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.header_height + Section::ALL.iter().map(|section| section.height()).sum::<f32>()
    }

    /// Section under the given scroll offset, below the header.
    #[must_use]
    pub fn section_at(&self, offset: f32) -> Section {
        let marker = offset + self.header_height;
        Section::ALL
            .into_iter()
            .find(|section| self.span(*section).bottom > marker)
            .unwrap_or(Section::Footer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sections_are_stacked_below_header() {
        let layout = PageLayout::new(80.0);
        assert_relative_eq!(layout.span(Section::Home).top, 80.0);
        assert_relative_eq!(layout.span(Section::About).top, 80.0 + 640.0);
        let last = layout.span(Section::Footer);
        assert_relative_eq!(last.bottom, layout.content_height());
    }

    #[test]
    fn anchors_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(Section::from_anchor("#contato"), Some(Section::Contact));
        assert_eq!(Section::from_anchor("#nada"), None);
    }

    #[test]
    fn section_at_tracks_offset() {
        let layout = PageLayout::default();
        assert_eq!(layout.section_at(0.0), Section::Home);
        let about = layout.span(Section::About);
        assert_eq!(layout.section_at(about.top - layout.header_height() + 1.0), Section::About);
        assert_eq!(layout.section_at(1.0e6), Section::Footer);
    }

    #[test]
    fn stats_block_lies_inside_about() {
        let layout = PageLayout::default();
        let about = layout.span(Section::About);
        let stats = layout.block(Section::About, STATS_BLOCK);
        assert!(stats.top >= about.top && stats.bottom <= about.bottom);
    }
}
