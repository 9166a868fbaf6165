//! Rendering for the trainer pane.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::theme::{FOCUS_BORDER, GLOBAL_BORDER, MUTED_TEXT, PANE_TEXT, STATUS_OK};

use super::state::GreetingState;

pub fn draw_greeting(frame: &mut Frame<'_>, state: &GreetingState, focused: bool, area: Rect) {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    let cursor = if focused { "█" } else { "" };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Name: ", Style::default().fg(MUTED_TEXT)),
            Span::styled(
                format!("{}{}", state.name, cursor),
                Style::default().fg(PANE_TEXT),
            ),
        ]),
        Line::from(""),
    ];

    if state.has_name() {
        lines.push(Line::from(Span::styled(
            format!("Hello, {}!", state.name),
            Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Please type your name",
            Style::default().fg(MUTED_TEXT),
        )));
    }

    let block = Block::default()
        .title(" Trainer ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
