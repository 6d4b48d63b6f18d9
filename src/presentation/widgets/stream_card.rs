use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{
    domain::{channel::Channel, text::truncate_to_width},
    presentation::config::Styles,
};

pub const LIVE_BADGE: &str = " LIVE ";
pub const OFFLINE_BADGE: &str = " Offline ";

/// Card in the home view's live grid
pub struct StreamCardWidget<'a> {
    pub channel: &'a Channel,
    pub focused: bool,
    pub styles: &'a Styles,
}

impl Widget for StreamCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.styles.get_or_default("focused")
        } else {
            self.styles.get_or_default("muted")
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.focused {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border_style)
            .title(Line::styled(LIVE_BADGE, self.styles.get_or_default("live")));
        let inner = block.inner(area);
        block.render(area, buf);

        let name = truncate_to_width(&self.channel.name, inner.width as usize);
        let lines = vec![
            Line::styled(self.channel.initials(), self.styles.get_or_default("hero")),
            Line::raw(name),
        ];
        let [body] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(inner);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(body, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_helpers::buffer_lines;

    #[test]
    fn test_card_shows_badge_initials_and_name() {
        let styles = Styles::default();
        let channel = Channel::new("UC1", "Eko D Libra");
        let widget = StreamCardWidget {
            channel: &channel,
            focused: false,
            styles: &styles,
        };

        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 6));
        widget.render(buf.area, &mut buf);
        let lines = buffer_lines(&buf);

        assert!(lines[0].contains("LIVE"));
        let body: Vec<_> = lines[1..5]
            .iter()
            .map(|l| l.trim_matches(|c: char| c == '│' || c.is_whitespace()))
            .filter(|l| !l.is_empty())
            .collect();
        assert_eq!(body, vec!["ED", "Eko D Libra"]);
    }

    #[test]
    fn test_long_name_is_truncated() {
        let styles = Styles::default();
        let channel = Channel::new("UC1", "A Very Long Channel Name Indeed");
        let widget = StreamCardWidget {
            channel: &channel,
            focused: true,
            styles: &styles,
        };

        let mut buf = Buffer::empty(Rect::new(0, 0, 12, 4));
        widget.render(buf.area, &mut buf);

        assert!(buffer_lines(&buf).iter().any(|l| l.contains('…')));
    }
}
