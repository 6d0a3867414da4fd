pub mod app;
pub mod config;
pub mod console;

pub use app::{App, Reply};
pub use config::Config;
pub use console::Command;
