//! State for the lookup pane.

use crate::pokeapi::Pokemon;
use crate::ui::mvi::UiState;

/// Lifecycle of the current pokémon lookup.
///
/// A closed sum type: the pane is always in exactly one of these states,
/// and rendering matches exhaustively, so an undefined status cannot exist.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LookupState {
    /// No lookup submitted yet.
    #[default]
    Idle,

    /// A fetch is in flight.
    Pending {
        /// Name being fetched, shown in the loading placeholder.
        name: String,
        /// Token of the fetch this state belongs to. Completions carrying
        /// any other token are stale and must be ignored.
        generation: u64,
        /// Animation tick for the spinner.
        animation_tick: u8,
    },

    /// The fetch succeeded.
    Resolved { pokemon: Pokemon },

    /// The fetch failed.
    Rejected { message: String },
}

impl UiState for LookupState {}

impl LookupState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// Generation of the in-flight fetch, if any.
    pub fn pending_generation(&self) -> Option<u64> {
        match self {
            Self::Pending { generation, .. } => Some(*generation),
            _ => None,
        }
    }

    /// The error message, if the lookup was rejected.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_is_default() {
        assert_eq!(LookupState::default(), LookupState::Idle);
    }

    #[test]
    fn pending_generation_only_while_pending() {
        assert_eq!(LookupState::Idle.pending_generation(), None);
        let pending = LookupState::Pending {
            name: "pikachu".into(),
            generation: 3,
            animation_tick: 0,
        };
        assert_eq!(pending.pending_generation(), Some(3));
        assert!(pending.is_pending());
    }

    #[test]
    fn error_message_only_when_rejected() {
        assert_eq!(LookupState::Idle.error_message(), None);
        let rejected = LookupState::Rejected {
            message: "boom".into(),
        };
        assert_eq!(rejected.error_message(), Some("boom"));
    }
}
