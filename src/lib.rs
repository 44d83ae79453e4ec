pub mod app_state;
pub mod commands;
pub mod logging;
pub mod repl;
