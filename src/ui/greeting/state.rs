//! State for the trainer pane.

use crate::ui::mvi::UiState;

/// State of the trainer name field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GreetingState {
    /// Current contents of the name field.
    pub name: String,
}

impl UiState for GreetingState {}

impl GreetingState {
    pub fn with_name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// True when there is a name to greet.
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}
