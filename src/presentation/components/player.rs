//! Player component
//!
//! Title bar, the pane grid and the channel bar.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    core::state::AppState,
    domain::text::truncate_to_width,
    presentation::{
        config::Styles,
        widgets::{
            channel_badge::ChannelBadgeWidget, grid::grid_rects, player_pane::PlayerPaneWidget,
        },
    },
};

pub const NOTHING_SELECTED: &str = "No channel selected";

#[derive(Debug, Default)]
pub struct PlayerComponent;

impl PlayerComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let [title, panes, bar] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_title(state, frame, title, styles);
        self.render_panes(state, frame, panes, styles);
        self.render_channel_bar(state, frame, bar, styles);
    }

    fn render_title(&self, state: &AppState, frame: &mut Frame, area: Rect, styles: &Styles) {
        let title = if state.player.active.is_empty() {
            NOTHING_SELECTED.to_string()
        } else {
            state.player.title()
        };
        let layout = format!(" layout {} ", state.player.layout);
        let [left, right] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(layout.len() as u16),
        ])
        .areas(area);

        let title = truncate_to_width(&title, left.width.saturating_sub(10) as usize);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" ◀ Esc ", styles.get_or_default("muted")),
                Span::styled(format!(" {title}"), styles.get_or_default("title")),
            ])),
            left,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(layout, styles.get_or_default("muted"))),
            right,
        );
    }

    fn render_panes(&self, state: &AppState, frame: &mut Frame, area: Rect, styles: &Styles) {
        let (rows, cols) = state.player.layout.grid();
        let focused = state
            .player
            .focused_channel(&state.catalog)
            .map(|c| &c.id);
        let slots = state.player.active.slots(state.player.layout);
        for (slot, (rect, channel)) in grid_rects(area, rows, cols)
            .into_iter()
            .zip(slots)
            .enumerate()
        {
            frame.render_widget(
                PlayerPaneWidget {
                    slot,
                    channel,
                    highlighted: channel.is_some_and(|c| Some(&c.id) == focused),
                    styles,
                },
                rect,
            );
        }
    }

    fn render_channel_bar(
        &self,
        state: &AppState,
        frame: &mut Frame,
        area: Rect,
        styles: &Styles,
    ) {
        let registry = &state.catalog.registry;
        let widths: Vec<u16> = registry
            .iter()
            .map(ChannelBadgeWidget::preferred_width)
            .collect();
        let cursor = state.player.cursor.min(widths.len().saturating_sub(1));
        let first = first_visible(&widths, cursor, area.width);

        let mut x = area.x;
        for (index, channel) in registry.iter().enumerate().skip(first) {
            let width = widths[index].min(area.right().saturating_sub(x));
            if width == 0 {
                break;
            }
            frame.render_widget(
                ChannelBadgeWidget {
                    channel,
                    live: state.catalog.is_live(&channel.id),
                    focused: index == cursor,
                    active: state.player.active.contains(&channel.id),
                    styles,
                },
                Rect::new(x, area.y, width, area.height),
            );
            x += width;
        }
    }
}

/// First badge index to draw so that the cursor badge fits in `width`
fn first_visible(widths: &[u16], cursor: usize, width: u16) -> usize {
    let mut first = 0;
    while first < cursor {
        let used: u32 = widths[first..=cursor].iter().map(|w| u32::from(*w)).sum();
        if used <= u32::from(width) {
            break;
        }
        first += 1;
    }
    first
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{
        presentation::widgets::player_pane::EMPTY_SLOT,
        test_helpers::{buffer_text, AppTestHelper},
    };

    fn draw(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| PlayerComponent::new().view(state, frame, frame.area()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_first_visible_keeps_cursor_on_screen() {
        let widths = [10, 10, 10, 10];
        assert_eq!(first_visible(&widths, 0, 25), 0);
        assert_eq!(first_visible(&widths, 1, 25), 0);
        assert_eq!(first_visible(&widths, 2, 25), 1);
        assert_eq!(first_visible(&widths, 3, 25), 2);
    }

    #[test]
    fn test_player_renders_exactly_layout_size_panes() {
        let mut helper =
            AppTestHelper::with_channels(&[("a", "Alpha"), ("b", "Bravo"), ("c", "Charlie")]);
        helper.detect(&["a", "b"]);
        helper.char('w');
        assert!(helper.state.player.is_open);

        let text = draw(&helper.state, 160, 30);
        assert!(text.contains("Alpha, Bravo"));
        assert!(text.contains("1 · Alpha"));
        assert!(text.contains("2 · Bravo"));
        assert_eq!(text.matches(EMPTY_SLOT).count(), 2);
        assert!(text.contains("layout 4 (2x2)"));
    }

    #[test]
    fn test_single_layout_has_one_pane() {
        let mut helper = AppTestHelper::with_channels(&[("a", "Alpha"), ("b", "Bravo")]);
        helper.detect(&["a", "b"]);
        helper.char('1');
        helper.key(KeyCode::Enter);

        let text = draw(&helper.state, 120, 20);
        assert!(text.contains("1 · Alpha"));
        assert!(!text.contains("2 · Bravo"));
        assert!(!text.contains(EMPTY_SLOT));
    }

    #[test]
    fn test_empty_player_title() {
        let helper = AppTestHelper::with_channels(&[("a", "Alpha")]);
        let text = draw(&helper.state, 80, 12);
        assert!(text.contains(NOTHING_SELECTED));
    }
}
