use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Modal notice drawn over the board until the user dismisses it.
pub struct NoticeWidget<'a> {
    pub message: &'a str,
    pub detail: Option<&'a str>,
    pub theme: &'a Theme,
}

impl NoticeWidget<'_> {
    pub fn dialog_area(area: Rect) -> Rect {
        let dialog_width = 34;
        let dialog_height = 7;
        let x = area.width.saturating_sub(dialog_width) / 2;
        let y = area.height.saturating_sub(dialog_height) / 2;

        Rect {
            x: area.x + x,
            y: area.y + y,
            width: dialog_width.min(area.width),
            height: dialog_height.min(area.height),
        }
    }
}

impl Widget for NoticeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog_area = Self::dialog_area(area);
        Clear.render(dialog_area, buf);

        let block = Block::default()
            .title("Notice")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.dialog_border))
            .style(Style::default().bg(self.theme.dialog_bg));

        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        let mut lines = vec![Line::from(Span::styled(
            self.message,
            Style::default()
                .fg(self.theme.negative)
                .add_modifier(Modifier::BOLD),
        ))];
        if let Some(detail) = self.detail {
            lines.push(Line::styled(detail, Style::default().fg(self.theme.text_primary)));
        }
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "Enter / Esc / click to dismiss",
            Style::default().fg(self.theme.muted),
        ));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
