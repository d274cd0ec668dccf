use crate::ui::input::key_hints;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINT_SEPARATOR: &str = " │ ";

/// Bottom bar: key hints from the key map on the left, version on the right.
pub struct Footer {
    hints: String,
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        let hints = key_hints()
            .into_iter()
            .map(|(keys, action)| format!("{keys}: {}", action.label()))
            .collect::<Vec<_>>()
            .join(HINT_SEPARATOR);
        Self {
            hints: format!(" {hints}"),
        }
    }

    pub fn hints(&self) -> &str {
        &self.hints
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let version = format!("v{VERSION} ");
        let inner_width = area.width.saturating_sub(2) as usize;
        // Char count, the separator is multi-byte.
        let padding = inner_width
            .saturating_sub(self.hints.chars().count())
            .saturating_sub(version.chars().count());

        let style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::raw(self.hints.clone()),
            Span::raw(" ".repeat(padding)),
            Span::raw(version),
        ]);

        Paragraph::new(line).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::input::KEY_BINDINGS;

    #[test]
    fn hints_follow_the_key_map() {
        assert_eq!(Footer::new().hints(), " Space/Enter: Start/Stop │ q/Esc/Ctrl+C: Quit");
    }

    #[test]
    fn every_bound_key_is_hinted() {
        let footer = Footer::new();
        for binding in KEY_BINDINGS {
            assert!(footer.hints().contains(binding.label), "{} missing", binding.label);
            assert!(footer.hints().contains(binding.action.label()));
        }
    }
}
