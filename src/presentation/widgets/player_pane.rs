use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::{
    domain::{channel::Channel, text::truncate_to_width},
    presentation::{config::Styles, widgets::stream_card::LIVE_BADGE},
};

pub const EMPTY_SLOT: &str = "Empty slot";

/// One pane of the player grid
pub struct PlayerPaneWidget<'a> {
    /// 0-based slot index
    pub slot: usize,
    pub channel: Option<&'a Channel>,
    /// The channel bar cursor is on this pane's channel
    pub highlighted: bool,
    pub styles: &'a Styles,
}

impl Widget for PlayerPaneWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.channel {
            Some(channel) => format!(" {} · {} ", self.slot + 1, channel.name),
            None => format!(" {} ", self.slot + 1),
        };
        let title = truncate_to_width(&title, area.width.saturating_sub(2) as usize);
        let border_style = if self.highlighted {
            self.styles.get_or_default("active")
        } else {
            self.styles.get_or_default("muted")
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = match self.channel {
            Some(channel) => vec![
                Line::from(vec![
                    Span::styled(LIVE_BADGE, self.styles.get_or_default("live")),
                    Span::raw(" "),
                    Span::styled(channel.initials(), self.styles.get_or_default("hero")),
                ]),
                Line::default(),
                Line::styled(
                    channel.id.player_embed_url(),
                    self.styles.get_or_default("muted"),
                ),
            ],
            None => vec![Line::styled(EMPTY_SLOT, self.styles.get_or_default("offline"))],
        };
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
