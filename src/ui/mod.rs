pub mod app;
pub mod events;
pub mod footer;
pub mod greeting;
pub mod header;
pub mod input;
pub mod layout;
pub mod lookup;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
