use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    domain::{channel::Channel, text::truncate_to_width},
    presentation::{
        config::Styles,
        widgets::stream_card::{LIVE_BADGE, OFFLINE_BADGE},
    },
};

/// One-line channel entry: initials, name and live state
pub struct ChannelBadgeWidget<'a> {
    pub channel: &'a Channel,
    pub live: bool,
    pub focused: bool,
    /// Shown in the player right now
    pub active: bool,
    pub styles: &'a Styles,
}

impl ChannelBadgeWidget<'_> {
    /// Cells needed to show the badge without truncation
    pub fn preferred_width(channel: &Channel) -> u16 {
        let name = unicode_width::UnicodeWidthStr::width(channel.name.as_str());
        // "*[XX] " + name + " " + badge
        (6 + name + 1 + OFFLINE_BADGE.len()).min(u16::MAX as usize) as u16
    }
}

impl Widget for ChannelBadgeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (badge, badge_style) = if self.live {
            (LIVE_BADGE, self.styles.get_or_default("live"))
        } else {
            (OFFLINE_BADGE, self.styles.get_or_default("offline"))
        };
        let name_style = match (self.focused, self.active, self.live) {
            (true, _, _) => self.styles.get_or_default("focused"),
            (false, true, _) => self.styles.get_or_default("active"),
            (false, false, false) => self.styles.get_or_default("offline"),
            (false, false, true) => Style::default(),
        };

        let marker = if self.active { "*" } else { " " };
        let head = format!("{marker}[{:<2}] ", self.channel.initials());
        let room = (area.width as usize).saturating_sub(head.len() + badge.len() + 1);
        let name = truncate_to_width(&self.channel.name, room);

        Paragraph::new(Line::from(vec![
            Span::styled(head, name_style),
            Span::styled(name, name_style),
            Span::raw(" "),
            Span::styled(badge, badge_style),
        ]))
        .render(area, buf);
    }
}
