use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{domain::layout::Layout as GridLayout, presentation::config::Styles};

/// Popup listing every supported layout
pub struct LayoutPickerWidget<'a> {
    pub current: GridLayout,
    /// Index into `GridLayout::ALL`
    pub cursor: usize,
    pub styles: &'a Styles,
}

impl LayoutPickerWidget<'_> {
    pub const WIDTH: u16 = 24;
    pub const HEIGHT: u16 = GridLayout::ALL.len() as u16 + 2;
}

impl Widget for LayoutPickerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Layout ");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = GridLayout::ALL
            .iter()
            .enumerate()
            .map(|(i, layout)| {
                let marker = if *layout == self.current { "●" } else { " " };
                let style = if i == self.cursor {
                    self.styles.get_or_default("focused")
                } else {
                    Style::default()
                };
                Line::styled(format!(" {marker} {layout}"), style)
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}
