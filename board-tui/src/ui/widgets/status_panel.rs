use crate::ui::theme::Theme;
use chess::Square;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct StatusPanel<'a> {
    pub placement: &'a str,
    pub last_move: Option<(Square, Square)>,
    pub status: Option<&'a str>,
    pub input: &'a str,
    pub theme: &'a Theme,
}

impl Widget for StatusPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label = Style::default().fg(self.theme.board_label);
        let last_move = self
            .last_move
            .map(|(from, to)| format!("{from}-{to}"))
            .unwrap_or_else(|| "-".to_string());

        let lines = vec![
            Line::from(vec![
                Span::styled("Position: ", label),
                Span::raw(self.placement),
            ]),
            Line::from(vec![
                Span::styled("Last move: ", label),
                Span::raw(last_move),
            ]),
            Line::from(vec![
                Span::styled("Status: ", label),
                Span::styled(
                    self.status.unwrap_or("Ready"),
                    Style::default().fg(self.theme.info),
                ),
            ]),
            Line::from(format!("> {}", self.input)),
            Line::styled(
                "Drag a piece | type 'e2 e3' + Enter | t theme | q quit",
                Style::default().fg(self.theme.muted),
            ),
        ];

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Game Info")
                    .border_style(Style::default().fg(self.theme.panel_border)),
            )
            .render(area, buf);
    }
}
