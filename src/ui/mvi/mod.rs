//! Model-View-Intent (MVI) architecture primitives.
//!
//! Base traits for unidirectional data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of a pane's state
//! - **Intent**: User actions or system events (key presses, fetch results)
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
