use ratatui::{prelude::*, widgets::Paragraph};

use crate::{domain::layout::Layout as GridLayout, presentation::config::Styles};

/// Top bar: app title, live/total counts and the current layout
pub struct NavbarWidget<'a> {
    pub live_count: usize,
    pub total: usize,
    pub layout: GridLayout,
    pub detecting: bool,
    pub styles: &'a Styles,
}

impl NavbarWidget<'_> {
    pub fn summary(&self) -> String {
        if self.detecting {
            format!("checking {} channels", self.total)
        } else {
            format!("{} live / {} channels", self.live_count, self.total)
        }
    }
}

impl Widget for NavbarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Span::styled(" MULTIWATCH ", self.styles.get_or_default("title"));
        let summary = Span::styled(
            format!(" ● {} ", self.summary()),
            self.styles.get_or_default("live"),
        );
        let layout = Span::styled(
            format!(" layout {} ", self.layout),
            self.styles.get_or_default("muted"),
        );

        let [left, right] = Layout::horizontal([Constraint::Fill(1), Constraint::Length(20)])
            .areas(area);
        Paragraph::new(Line::from(vec![title, summary])).render(left, buf);
        Paragraph::new(Line::from(layout).right_aligned()).render(right, buf);
    }
}
