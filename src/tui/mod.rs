//! TUI module: Terminal User Interface using Ratatui.
//!
//! Three screens in order:
//! - Patient characteristics input
//! - Treatment options
//! - Result with recommendations and evidence

mod app;
pub mod evidence;
mod styles;
mod ui;

pub use app::App;
pub use styles::MedicalTheme;
