//! Rendering for the lookup pane.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::theme::{
    FOCUS_BORDER, GLOBAL_BORDER, MUTED_TEXT, PANE_TEXT, POKE_YELLOW, STATUS_ERROR,
};

use super::state::LookupState;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw_lookup(
    frame: &mut Frame<'_>,
    input: &str,
    state: &LookupState,
    focused: bool,
    area: Rect,
) {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    let cursor = if focused { "█" } else { "" };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Pokémon: ", Style::default().fg(MUTED_TEXT)),
            Span::styled(
                format!("{input}{cursor}"),
                Style::default().fg(PANE_TEXT),
            ),
        ]),
        Line::from(""),
    ];
    lines.extend(status_lines(state));

    let block = Block::default()
        .title(" Pokédex ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// One block of lines per lifecycle state. The match is exhaustive: a
/// lookup that is in none of the four states cannot be represented.
fn status_lines(state: &LookupState) -> Vec<Line<'static>> {
    match state {
        LookupState::Idle => vec![Line::from(Span::styled(
            "Submit a pokémon",
            Style::default().fg(MUTED_TEXT),
        ))],

        LookupState::Pending {
            name,
            animation_tick,
            ..
        } => {
            let frame = SPINNER[*animation_tick as usize % SPINNER.len()];
            vec![Line::from(vec![
                Span::styled(frame.to_string(), Style::default().fg(POKE_YELLOW)),
                Span::styled(
                    format!(" Loading {name}..."),
                    Style::default().fg(PANE_TEXT),
                ),
            ])]
        }

        LookupState::Resolved { pokemon } => {
            let mut lines = vec![
                Line::from(Span::styled(
                    format!("#{:03}  {}", pokemon.id, pokemon.name),
                    Style::default().fg(POKE_YELLOW).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("Types: {}", pokemon.type_names().join(", ")),
                    Style::default().fg(PANE_TEXT),
                )),
                Line::from(Span::styled(
                    format!(
                        "Height: {} dm   Weight: {} hg",
                        pokemon.height, pokemon.weight
                    ),
                    Style::default().fg(PANE_TEXT),
                )),
            ];
            if !pokemon.stats.is_empty() {
                lines.push(Line::from(""));
                for slot in &pokemon.stats {
                    lines.push(Line::from(Span::styled(
                        format!("{:<16} {:>3}", slot.stat.name, slot.base_stat),
                        Style::default().fg(PANE_TEXT),
                    )));
                }
            }
            lines
        }

        LookupState::Rejected { message } => vec![
            Line::from(Span::styled(
                "There was an error:",
                Style::default().fg(MUTED_TEXT),
            )),
            Line::from(Span::styled(
                message.clone(),
                Style::default().fg(STATUS_ERROR),
            )),
        ],
    }
}
