//! Savory TUI - terminal front end for the Savory Haven booking wizard
//!
//! # Overview
//!
//! A full-screen, keyboard-driven rendering of the three-step reservation
//! wizard: floor-plan table selection, the reservation form, and the
//! confirmation screen. All reservation semantics live in `savory-core`;
//! this crate maps key events onto the flow machine and draws the active
//! step.
//!
//! # Module structure
//!
//! ```text
//! savory-tui/src/
//! ├── app.rs        # wizard shell, event loop, key dispatch
//! ├── config.rs     # environment-variable configuration
//! ├── logger.rs     # rolling file logging
//! ├── theme.rs      # palette and shared styles
//! └── views/        # one view per wizard step + banner
//! ```

pub mod app;
pub mod config;
pub mod logger;
pub mod theme;
pub mod views;

// Re-export the application surface
pub use app::{run, App};
pub use config::Config;
