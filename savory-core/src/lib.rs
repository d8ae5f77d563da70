//! Savory Core - reservation domain for the Savory Haven booking wizard
//!
//! # Overview
//!
//! Everything here is terminal-free and side-effect-free: the floor plan
//! catalog, the reservation form model, and the three-step wizard state
//! machine. The TUI crate drives these types; nothing in here draws.
//!
//! # Module structure
//!
//! ```text
//! savory-core/src/
//! ├── catalog.rs      # dining tables, seating areas, availability
//! ├── reservation.rs  # draft form state and the finished reservation
//! ├── flow.rs         # selection → form → confirmation state machine
//! └── format.rs       # long dates, guest pluralization
//! ```

pub mod catalog;
pub mod flow;
pub mod format;
pub mod reservation;

// Re-export the wizard surface
pub use catalog::{Catalog, CatalogError, Table, TableType};
pub use flow::{transition, Flow, FlowError, FlowEvent, Step};
pub use format::{guests_label, long_date, medium_date};
pub use reservation::{
    DraftError, Reservation, ReservationDraft, MAX_GUESTS, MIN_GUESTS, TIME_SLOTS,
};
