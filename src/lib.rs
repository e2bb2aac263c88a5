pub mod app;
pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod state;
pub mod ui;

pub use checker::http::HttpChecker;
pub use checker::{resolve_message, CheckReply, SymptomChecker};
pub use config::Config;
pub use error::CheckError;
pub use state::{DisplayMode, UiState};
