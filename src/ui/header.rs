use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{GLOBAL_BORDER, MUTED_TEXT, PANE_TEXT, POKE_YELLOW};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, trainer_name: &str) -> Paragraph<'static> {
        let title_style = Style::default().fg(POKE_YELLOW).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(PANE_TEXT);
        let separator_style = Style::default().fg(MUTED_TEXT);

        let trainer = if trainer_name.is_empty() {
            "new trainer".to_string()
        } else {
            trainer_name.to_string()
        };

        let line = Line::from(vec![
            Span::styled("  Pocketdex", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(trainer, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
