pub mod cli;
pub mod logging;
pub mod pokeapi;
pub mod storage;
pub mod ui;
