// Module declarations
mod app;
mod home;
mod language_select;
pub mod splash;

// Re-exports for external use
pub use app::{App, UiConfig, run};
