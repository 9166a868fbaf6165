use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{GLOBAL_BORDER, MUTED_TEXT, PANE_TEXT};

pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let key_style = Style::default().fg(PANE_TEXT);
        let hint_style = Style::default().fg(MUTED_TEXT);

        let line = Line::from(vec![
            Span::styled("  Tab", key_style),
            Span::styled(" switch pane   ", hint_style),
            Span::styled("Enter", key_style),
            Span::styled(" fetch   ", hint_style),
            Span::styled("Ctrl+U", key_style),
            Span::styled(" clear   ", hint_style),
            Span::styled("Esc", key_style),
            Span::styled(" quit", hint_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
