// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one vertical scrollable under a fixed navbar. Sections have
//! fixed heights so that [`PageLayout`](crate::ui::page::PageLayout) can
//! compute where every observed block sits. Toasts, the cookie banner, the
//! accessibility toolbar and the loading overlay are stacked on top.

use super::widgets::{TeamMember, ABOUT_TEXT_BLOCK, AREAS_GRID_BLOCK, PRACTICE_AREAS, TEAM};
use super::{App, Message};
use crate::ui::accessibility::{self, Preferences};
use crate::ui::contact_form;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::lazy_images::LoadState;
use crate::ui::navbar;
use crate::ui::notifications::Toast;
use crate::ui::page::{Section, PAGE_SCROLL_ID, STATS_BLOCK, TEAM_PHOTOS};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, container, image, mouse_area, scrollable, text, Column, Container, Id, Row, Space,
    Stack,
};
use iced::{Element, Length, Theme};

/// Height of a section heading block.
const HEADING_HEIGHT: f32 = 100.0;

/// Side of a team photo.
const PHOTO_SIZE: f32 = 160.0;

/// Renders the whole page.
pub(super) fn view(app: &App) -> Element<'_, Message> {
    let page = Section::ALL.into_iter().fold(
        Column::new()
            .width(Length::Fill)
            .push(Space::new().height(app.layout.header_height())),
        |column, section| column.push(view_section(app, section)),
    );

    let scroll = scrollable(page)
        .id(Id::new(PAGE_SCROLL_ID))
        .on_scroll(Message::PageScrolled)
        .width(Length::Fill)
        .height(Length::Fill);

    let page_layer: Element<'_, Message> = if app.widgets.navbar.is_menu_open() {
        mouse_area(scroll)
            .on_press(Message::Navbar(navbar::Message::OutsideClick))
            .into()
    } else {
        scroll.into()
    };

    let navbar_layer = navbar::view(navbar::ViewContext {
        i18n: &app.i18n,
        state: &app.widgets.navbar,
    })
    .map(Message::Navbar);

    let toolbar_layer = Container::new(
        accessibility::view(&app.i18n, &app.widgets.preferences).map(Message::Accessibility),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Left)
    .align_y(Vertical::Center)
    .padding(spacing::XS);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page_layer)
        .push(navbar_layer)
        .push(toolbar_layer)
        .push(Toast::view_overlay(&app.notifications).map(Message::Notification));

    if app.widgets.cookie_banner.is_visible() {
        stack = stack.push(
            app.widgets
                .cookie_banner
                .view(&app.i18n)
                .map(Message::CookieBanner),
        );
    }
    if app.widgets.loading.is_visible() {
        let overlay: Element<'_, Message> = app.widgets.loading.view(&app.i18n);
        stack = stack.push(overlay);
    }

    stack.into()
}

fn view_section(app: &App, section: Section) -> Element<'_, Message> {
    let content: Element<'_, Message> = match section {
        Section::Home => view_home(app),
        Section::About => view_about(app),
        Section::PracticeAreas => view_practice_areas(app),
        Section::Team => view_team(app),
        Section::Testimonials => view_titled(
            app,
            "testimonials-title",
            app.widgets
                .carousel
                .view(&app.i18n)
                .map(Message::Carousel),
        ),
        Section::Faq => view_titled(app, "faq-title", app.widgets.faq.view().map(Message::Faq)),
        Section::Contact => view_titled(
            app,
            "contact-title",
            container(
                contact_form::view(contact_form::ViewContext {
                    i18n: &app.i18n,
                    state: &app.widgets.contact,
                })
                .map(Message::Contact),
            )
            .width(Length::Fill)
            .center_x(Length::Fill),
        ),
        Section::Footer => view_footer(app),
    };

    let alternate = matches!(
        section,
        Section::About | Section::Team | Section::Faq | Section::Footer
    );

    container(
        Column::new()
            .push(content)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(section.height())
    .center_x(Length::Fill)
    .padding([0.0, spacing::LG])
    .clip(true)
    .style(move |theme: &Theme| styles::container::section(theme, alternate))
    .into()
}

/// Heading followed by `body`.
fn view_titled<'a>(
    app: &'a App,
    title_key: &str,
    body: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    Column::new()
        .push(heading(app.widgets.preferences, app.i18n.tr(title_key)))
        .push(body)
        .width(Length::Fill)
        .into()
}

fn heading<'a>(preferences: Preferences, label: String) -> Element<'a, Message> {
    container(text(label).size(preferences.scaled(typography::TITLE_LG)))
        .width(Length::Fill)
        .height(HEADING_HEIGHT)
        .align_y(Vertical::Center)
        .into()
}

fn body_text<'a>(preferences: Preferences, label: String) -> Element<'a, Message> {
    text(label)
        .size(preferences.scaled(typography::BODY))
        .into()
}

fn view_home(app: &App) -> Element<'_, Message> {
    let preferences = app.widgets.preferences;
    let cta = button(text(app.i18n.tr("hero-cta")).size(preferences.scaled(typography::BODY)))
        .padding([spacing::SM, spacing::LG])
        .on_press(Message::Navbar(navbar::Message::Navigate(Section::Contact)))
        .style(styles::button::primary);

    container(
        Column::new()
            .spacing(spacing::LG)
            .push(text(app.i18n.tr("hero-title")).size(preferences.scaled(typography::HERO)))
            .push(body_text(preferences, app.i18n.tr("hero-subtitle")))
            .push(cta),
    )
    .width(Length::Fill)
    .height(Section::Home.height())
    .align_y(Vertical::Center)
    .into()
}

fn view_about(app: &App) -> Element<'_, Message> {
    let preferences = app.widgets.preferences;
    let now = app.now;
    let reveal = &app.widgets.reveal;

    let intro: Element<'_, Message> = reveal.wrap(
        app.widgets.reveal_ids.about,
        now,
        ABOUT_TEXT_BLOCK.1,
        container(
            Column::new()
                .spacing(spacing::MD)
                .push(body_text(preferences, app.i18n.tr("about-text-1")))
                .push(body_text(preferences, app.i18n.tr("about-text-2"))),
        )
        .height(ABOUT_TEXT_BLOCK.1),
    );

    let counters = &app.widgets.counters;
    let stats = counters.items().iter().enumerate().fold(
        Row::new().spacing(spacing::MD).width(Length::Fill),
        |row, (index, spec)| {
            row.push(
                container(
                    Column::new()
                        .spacing(spacing::XS)
                        .align_x(Horizontal::Center)
                        .push(
                            text(counters.display(index, now))
                                .size(preferences.scaled(typography::HERO)),
                        )
                        .push(
                            text(app.i18n.tr(&spec.label_key))
                                .size(preferences.scaled(typography::BODY_SM)),
                        ),
                )
                .width(Length::Fill)
                .height(STATS_BLOCK.1)
                .center_x(Length::Fill)
                .center_y(STATS_BLOCK.1)
                .style(styles::container::card),
            )
        },
    );

    Column::new()
        .push(heading(preferences, app.i18n.tr("about-title")))
        .push(Space::new().height(ABOUT_TEXT_BLOCK.0 - HEADING_HEIGHT))
        .push(intro)
        .push(Space::new().height(STATS_BLOCK.0 - ABOUT_TEXT_BLOCK.0 - ABOUT_TEXT_BLOCK.1))
        .push(stats)
        .into()
}

fn view_practice_areas(app: &App) -> Element<'_, Message> {
    let preferences = app.widgets.preferences;
    let card_height = (AREAS_GRID_BLOCK.1 - spacing::MD) / 2.0;

    let cards: Vec<Element<'_, Message>> = PRACTICE_AREAS
        .iter()
        .map(|stem| {
            container(
                Column::new()
                    .spacing(spacing::XS)
                    .push(
                        text(app.i18n.tr(&format!("area-{stem}-title")))
                            .size(preferences.scaled(typography::TITLE_SM)),
                    )
                    .push(
                        text(app.i18n.tr(&format!("area-{stem}-text")))
                            .size(preferences.scaled(typography::BODY_SM)),
                    ),
            )
            .width(Length::Fill)
            .height(card_height)
            .padding(spacing::MD)
            .style(styles::container::card)
            .into()
        })
        .collect();

    let mut grid = Column::new().spacing(spacing::MD);
    let mut cards = cards.into_iter();
    loop {
        let row: Vec<_> = cards.by_ref().take(3).collect();
        if row.is_empty() {
            break;
        }
        grid = grid.push(Row::with_children(row).spacing(spacing::MD));
    }

    let revealed: Element<'_, Message> = app.widgets.reveal.wrap(
        app.widgets.reveal_ids.areas,
        app.now,
        AREAS_GRID_BLOCK.1,
        grid,
    );

    Column::new()
        .push(heading(preferences, app.i18n.tr("areas-title")))
        .push(Space::new().height(AREAS_GRID_BLOCK.0 - HEADING_HEIGHT))
        .push(revealed)
        .into()
}

fn view_team(app: &App) -> Element<'_, Message> {
    let preferences = app.widgets.preferences;

    let members = TEAM.iter().enumerate().fold(
        Row::new().spacing(spacing::LG).width(Length::Fill),
        |row, (index, member)| row.push(view_member(app, index, member)),
    );

    let revealed: Element<'_, Message> =
        app.widgets
            .reveal
            .wrap(app.widgets.reveal_ids.team, app.now, TEAM_PHOTOS.1, members);

    Column::new()
        .push(heading(preferences, app.i18n.tr("team-title")))
        .push(Space::new().height(TEAM_PHOTOS.0 - HEADING_HEIGHT))
        .push(revealed)
        .into()
}

fn view_member<'a>(app: &'a App, index: usize, member: &TeamMember) -> Element<'a, Message> {
    let preferences = app.widgets.preferences;

    let photo: Element<'a, Message> = match app.widgets.team_photos.get(index).map(|i| i.state()) {
        Some(LoadState::Loaded(handle)) => image(handle.clone())
            .width(PHOTO_SIZE)
            .height(PHOTO_SIZE)
            .into(),
        _ => container(text(initials(member.name)).size(typography::TITLE_LG))
            .width(PHOTO_SIZE)
            .height(PHOTO_SIZE)
            .center_x(PHOTO_SIZE)
            .center_y(PHOTO_SIZE)
            .style(styles::container::card)
            .into(),
    };

    Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(photo)
        .push(text(member.name).size(preferences.scaled(typography::TITLE_SM)))
        .push(
            text(app.i18n.tr(member.role_key))
                .size(preferences.scaled(typography::BODY_SM)),
        )
        .into()
}

/// Photo placeholder: first letter of the first and last name.
fn initials(name: &str) -> String {
    let words: Vec<&str> = name
        .split_whitespace()
        .filter(|word| !word.ends_with('.'))
        .collect();
    match (words.first(), words.last()) {
        (Some(first), Some(last)) if words.len() > 1 => first
            .chars()
            .take(1)
            .chain(last.chars().take(1))
            .collect(),
        (Some(first), _) => first.chars().take(1).collect(),
        _ => String::new(),
    }
}

fn view_footer(app: &App) -> Element<'_, Message> {
    let preferences = app.widgets.preferences;
    container(
        Column::new()
            .spacing(spacing::SM)
            .push(text(app.i18n.tr("site-brand")).size(preferences.scaled(typography::TITLE_MD)))
            .push(body_text(preferences, app.i18n.tr("footer-address")))
            .push(
                text(app.i18n.tr("footer-rights"))
                    .size(preferences.scaled(typography::CAPTION)),
            ),
    )
    .width(Length::Fill)
    .height(Section::Footer.height())
    .align_y(Vertical::Center)
    .into()
}
