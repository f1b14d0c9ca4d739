// SPDX-License-Identifier: MPL-2.0
//! Typed registry of every page widget, built once at startup.
//!
//! Each widget owns its own state machine; the registry only decides what
//! content they start with and where on the page they sit.

use crate::application::port::KeyValueStore;
use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::ui::accessibility::Preferences;
use crate::ui::carousel::{Carousel, Testimonial};
use crate::ui::contact_form;
use crate::ui::cookie_banner::CookieBanner;
use crate::ui::counters::{CounterSpec, Counters};
use crate::ui::faq::{Accordion, FaqItem};
use crate::ui::lazy_images::{LazyImage, LazyImages};
use crate::ui::loading_overlay::LoadingOverlay;
use crate::ui::navbar;
use crate::ui::page::{PageLayout, Section, TEAM_PHOTOS};
use crate::ui::scroll_reveal::{RevealId, RevealKind, ScrollReveal};
use crate::ui::smooth_scroll::SmoothScroll;
use std::time::Instant;

/// Number of FAQ entries in the translation files (`faq-1` .. `faq-N`).
pub const FAQ_COUNT: usize = 5;

/// Number of testimonials in the translation files.
pub const TESTIMONIAL_COUNT: usize = 3;

/// Practice areas, as i18n key stems (`area-<stem>-title`, `area-<stem>-text`).
pub const PRACTICE_AREAS: [&str; 6] = [
    "civil",
    "trabalhista",
    "empresarial",
    "familia",
    "tributario",
    "consumidor",
];

/// Intro text inside the about section.
pub const ABOUT_TEXT_BLOCK: (f32, f32) = (100.0, 480.0);
/// Card grid inside the practice areas section.
pub const AREAS_GRID_BLOCK: (f32, f32) = (120.0, 560.0);

/// A lawyer shown in the team section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role_key: &'static str,
    /// Deferred photo source, relative to the assets directory.
    pub photo: Option<&'static str>,
}

pub const TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Dr. Ricardo Silva",
        role_key: "team-role-founder",
        photo: Some("images/team/ricardo-silva.jpg"),
    },
    TeamMember {
        name: "Dra. Helena Souza",
        role_key: "team-role-partner",
        photo: Some("images/team/helena-souza.jpg"),
    },
    TeamMember {
        name: "Dr. Paulo Andrade",
        role_key: "team-role-partner",
        photo: Some("images/team/paulo-andrade.jpg"),
    },
    TeamMember {
        name: "Dra. Camila Rocha",
        role_key: "team-role-associate",
        photo: None,
    },
];

/// Reveal blocks registered on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealIds {
    pub about: RevealId,
    pub areas: RevealId,
    pub team: RevealId,
}

/// Every page widget.
pub struct Widgets {
    pub navbar: navbar::State,
    pub scroll: SmoothScroll,
    pub counters: Counters,
    pub carousel: Carousel,
    pub faq: Accordion,
    pub preferences: Preferences,
    pub reveal: ScrollReveal,
    pub reveal_ids: RevealIds,
    pub team_photos: LazyImages,
    pub cookie_banner: CookieBanner,
    pub loading: LoadingOverlay,
    pub contact: contact_form::State,
}

impl Widgets {
    /// Builds and initializes every widget.
    ///
    /// The carousel starts autoplaying and the cookie banner is scheduled
    /// when no choice is stored.
    pub fn build(
        now: Instant,
        config: &Config,
        i18n: &I18n,
        layout: &PageLayout,
        store: &dyn KeyValueStore,
    ) -> Self {
        let mut carousel = Carousel::new(testimonials(), config.carousel.autoplay_interval());
        carousel.start_autoplay(now);

        let mut cookie_banner = CookieBanner::default();
        cookie_banner.init(now, store);

        let mut reveal = ScrollReveal::new();
        let reveal_ids = RevealIds {
            about: reveal.register(
                RevealKind::SlideInLeft,
                layout.block(Section::About, ABOUT_TEXT_BLOCK),
            ),
            areas: reveal.register(
                RevealKind::FadeIn,
                layout.block(Section::PracticeAreas, AREAS_GRID_BLOCK),
            ),
            team: reveal.register(
                RevealKind::SlideInRight,
                layout.block(Section::Team, TEAM_PHOTOS),
            ),
        };

        let photo_span = layout.block(Section::Team, TEAM_PHOTOS);
        let team_photos = LazyImages::new(
            TEAM.iter()
                .map(|member| LazyImage::new(member.photo.map(str::to_owned), photo_span))
                .collect(),
        );

        Self {
            navbar: navbar::State::default(),
            scroll: SmoothScroll::default(),
            counters: Counters::new(counters()),
            carousel,
            faq: Accordion::new(faq_items(i18n)),
            preferences: Preferences::load(store),
            reveal,
            reveal_ids,
            team_photos,
            cookie_banner,
            loading: LoadingOverlay::default(),
            contact: contact_form::State::default(),
        }
    }

    /// Re-reads translated content after a locale change.
    pub fn relocalize(&mut self, i18n: &I18n) {
        self.faq.set_items(faq_items(i18n));
    }
}

fn counters() -> Vec<CounterSpec> {
    vec![
        CounterSpec::new(25, "+", "stats-years"),
        CounterSpec::new(1500, "+", "stats-cases"),
        CounterSpec::new(98, "%", "stats-success"),
        CounterSpec::new(12, "", "stats-lawyers"),
    ]
}

fn testimonials() -> Vec<Testimonial> {
    (1..=TESTIMONIAL_COUNT)
        .map(|n| Testimonial {
            quote_key: format!("testimonial-{n}-quote"),
            author_key: format!("testimonial-{n}-author"),
        })
        .collect()
}

/// FAQ entries from the translation files.
#[must_use]
pub fn faq_items(i18n: &I18n) -> Vec<FaqItem> {
    (1..=FAQ_COUNT)
        .map(|n| FaqItem::from_i18n(i18n, &format!("faq-{n}")))
        .collect()
}
