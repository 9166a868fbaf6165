//! Intents for the trainer pane.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum GreetingIntent {
    /// A printable character was typed into the field.
    TypeChar(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Clear the whole field.
    Clear,
}

impl Intent for GreetingIntent {}
