pub mod app;
pub mod cli;
pub mod config;
pub mod derive;
pub mod error;
pub mod format;
pub mod logging;
pub mod summary;
pub mod system;
pub mod ui;
