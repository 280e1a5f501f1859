// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button, Card, InlineError)
// - navbar.rs: Top navigation with active-link highlighting
// - inventory.rs: Smart-entry form and parsed item table

pub mod common;
pub mod inventory;
pub mod navbar;

// Re-export commonly used components for convenience
pub use common::*;
pub use inventory::*;
pub use navbar::*;
