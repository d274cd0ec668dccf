use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::stopwatch::{toggle_label, Readout};
use crate::ui::theme::{ACCENT, BUTTON_BG, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let state = app.state();
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(&state), header);

    frame.render_widget(Clear, body);
    let block = Block::default()
        .title(Span::styled(" Elapsed ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(body);
    frame.render_widget(block, body);

    let readout = Readout::from_state(&state).to_string();
    let button = format!("[ {} ]", toggle_label(&state));
    let lines = vec![
        Line::from(Span::styled(
            readout,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            button,
            Style::default().fg(ACCENT).bg(BUTTON_BG),
        )),
    ];
    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let area = centered_rect_by_size(inner, width, lines.len() as u16);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);

    frame.render_widget(Footer::new().widget(footer), footer);
}
