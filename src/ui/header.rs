use crate::ui::stopwatch::StopwatchState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_IDLE, STATUS_OK};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &StopwatchState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (marker, status_style) = if state.running {
            ("●", Style::default().fg(STATUS_OK))
        } else {
            ("○", Style::default().fg(STATUS_IDLE))
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(marker, status_style),
            Span::styled("  ", text_style),
            Span::styled("Stopwatch", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(state.status_label(), status_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
