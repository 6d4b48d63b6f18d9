//! Home component
//!
//! Navbar, hero, live card grid and the all-channels badge grid.

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::{
    core::state::{ui::HomeSection, AppState},
    presentation::{
        config::Styles,
        widgets::{
            channel_badge::ChannelBadgeWidget, grid::grid_rects, hero::HeroWidget,
            navbar::NavbarWidget, stream_card::StreamCardWidget,
        },
    },
};

pub const LIVE_SECTION_TITLE: &str = "Live now";
pub const ALL_SECTION_TITLE: &str = "All channels";
pub const NO_LIVE_MESSAGE: &str = "No live channels right now. Press r to check again.";
pub const DETECTING_MESSAGE: &str = "Checking which channels are live...";

const HERO_HEIGHT: u16 = 5;
const CARD_HEIGHT: u16 = 5;

/// Home component
///
/// Stateless; everything it draws comes from `AppState`.
#[derive(Debug, Default)]
pub struct HomeComponent;

impl HomeComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let badge_rows = all_channels_height(state, area.width);
        let [navbar, hero, live, all] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(HERO_HEIGHT),
            Constraint::Min(CARD_HEIGHT + 1),
            Constraint::Length(badge_rows + 1),
        ])
        .areas(area);

        frame.render_widget(
            NavbarWidget {
                live_count: state.catalog.live_count(),
                total: state.channel_count(),
                layout: state.player.layout,
                detecting: state.catalog.is_detecting(),
                styles,
            },
            navbar,
        );

        let focus = state.ui.focus;
        frame.render_widget(
            HeroWidget {
                channel: state.ui.hero.as_ref(),
                focused: (focus.section == HomeSection::Hero).then_some(focus.hero_button),
                detecting: state.catalog.is_detecting(),
                styles,
            },
            hero,
        );

        self.render_live_grid(state, frame, live, styles);
        self.render_all_channels(state, frame, all, styles);
    }

    fn render_live_grid(&self, state: &AppState, frame: &mut Frame, area: Rect, styles: &Styles) {
        let [title, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        frame.render_widget(
            section_title(LIVE_SECTION_TITLE, state.catalog.live_count(), styles),
            title,
        );

        let live = &state.catalog.live;
        if live.is_empty() {
            let message = if state.catalog.is_detecting() {
                DETECTING_MESSAGE
            } else {
                NO_LIVE_MESSAGE
            };
            frame.render_widget(
                Paragraph::new(Line::styled(message, styles.get_or_default("muted")))
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true }),
                body,
            );
            return;
        }

        let cols = state.player.layout.card_columns();
        let visible_rows = (body.height / CARD_HEIGHT).max(1) as usize;
        let focused = (state.ui.focus.section == HomeSection::Live)
            .then_some(state.ui.focus.live_index);
        // Scroll whole rows so the focused card stays on screen
        let first_row = focused
            .map(|i| (i / cols).saturating_sub(visible_rows - 1))
            .unwrap_or(0);

        let grid_area = Rect {
            height: (visible_rows as u16 * CARD_HEIGHT).min(body.height),
            ..body
        };
        let rects = grid_rects(grid_area, visible_rows, cols);
        for (rect, (index, channel)) in rects
            .into_iter()
            .zip(live.iter().enumerate().skip(first_row * cols))
        {
            frame.render_widget(
                StreamCardWidget {
                    channel,
                    focused: focused == Some(index),
                    styles,
                },
                rect,
            );
        }
    }

    fn render_all_channels(
        &self,
        state: &AppState,
        frame: &mut Frame,
        area: Rect,
        styles: &Styles,
    ) {
        let [title, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        frame.render_widget(
            section_title(ALL_SECTION_TITLE, state.channel_count(), styles),
            title,
        );

        let cols = badge_columns(state, body.width);
        let focused = (state.ui.focus.section == HomeSection::All)
            .then_some(state.ui.focus.all_index);
        let rows = body.height.max(1) as usize;
        let first_row = focused
            .map(|i| (i / cols).saturating_sub(rows - 1))
            .unwrap_or(0);

        let badges = state.catalog.annotated();
        let rects = grid_rects(body, rows, cols);
        for (rect, (index, badge)) in rects
            .into_iter()
            .zip(badges.iter().enumerate().skip(first_row * cols))
        {
            frame.render_widget(
                ChannelBadgeWidget {
                    channel: &badge.channel,
                    live: badge.live,
                    focused: focused == Some(index),
                    active: state.player.active.contains(&badge.channel.id),
                    styles,
                },
                rect,
            );
        }
    }
}

fn section_title<'a>(title: &'a str, count: usize, styles: &Styles) -> Line<'a> {
    Line::from(vec![
        Span::styled(title, styles.get_or_default("hero")),
        Span::styled(format!(" ({count})"), styles.get_or_default("muted")),
    ])
}

fn badge_columns(state: &AppState, width: u16) -> usize {
    let widest = state
        .catalog
        .registry
        .iter()
        .map(ChannelBadgeWidget::preferred_width)
        .max()
        .unwrap_or(1)
        .max(1);
    (width / widest).max(1) as usize
}

/// Rows needed to show every badge, capped at eight
fn all_channels_height(state: &AppState, width: u16) -> u16 {
    let cols = badge_columns(state, width);
    let rows = state.channel_count().div_ceil(cols).max(1);
    (rows as u16).min(8)
}
