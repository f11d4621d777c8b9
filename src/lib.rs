pub mod agents;
pub mod client;
pub mod config;
pub mod daemon;
pub mod domains;
pub mod error;
pub mod factories;
pub mod iced_ui;
pub mod interfaces;
pub mod logging;
pub mod providers;
pub mod services;
pub mod session;

pub type Result<T> = std::result::Result<T, error::ChatError>;
