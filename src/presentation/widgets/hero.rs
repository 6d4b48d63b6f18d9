use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    core::state::ui::HeroButton, domain::channel::Channel, presentation::config::Styles,
};

pub const HERO_SUBTITLE: &str = "Watch live now";

/// Featured channel with its Watch and Info buttons
pub struct HeroWidget<'a> {
    pub channel: Option<&'a Channel>,
    /// Button under focus, if the hero section has focus
    pub focused: Option<HeroButton>,
    pub detecting: bool,
    pub styles: &'a Styles,
}

impl HeroWidget<'_> {
    pub fn headline(&self) -> String {
        match self.channel {
            Some(channel) => channel.display_title(),
            None if self.detecting => "LOOKING FOR LIVE CHANNELS".to_string(),
            None => "NO LIVE CHANNELS".to_string(),
        }
    }

    fn button(&self, label: &str, button: HeroButton) -> Span<'static> {
        let style = if self.focused == Some(button) {
            self.styles.get_or_default("focused")
        } else {
            self.styles.get_or_default("muted")
        };
        Span::styled(format!("[ {label} ]"), style)
    }
}

impl Widget for HeroWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::BOTTOM);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::styled(self.headline(), self.styles.get_or_default("hero")),
            Line::styled(HERO_SUBTITLE, self.styles.get_or_default("muted")),
            Line::default(),
            Line::from(vec![
                self.button("▶ Watch", HeroButton::Watch),
                Span::raw("  "),
                self.button("Info", HeroButton::Info),
            ]),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
