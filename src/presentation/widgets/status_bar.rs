use ratatui::{prelude::*, widgets::Paragraph};

use crate::presentation::config::Styles;

/// Bottom two lines: key hints for the current surface, then the status message
pub struct StatusBarWidget<'a> {
    pub hints: &'a str,
    pub message: Option<&'a str>,
    pub loading: bool,
    pub styles: &'a Styles,
}

const SPINNER: &str = "⟳ ";

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),    // Main content area (not used by status bar)
                Constraint::Length(1), // Key hints
                Constraint::Length(1), // Status message
            ],
        )
        .split(area);

        Paragraph::new(Span::styled(self.hints, self.styles.get_or_default("muted")))
            .render(layout[1], buf);

        let mut spans = vec![];
        if self.loading {
            spans.push(Span::raw(SPINNER));
        }
        if let Some(message) = self.message {
            spans.push(Span::raw(message));
        }
        Paragraph::new(Line::from(spans)).render(layout[2], buf);
    }
}
