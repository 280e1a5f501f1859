// web_app/pages/mod.rs - Page components module
//
// This module contains page-level Leptos components:
// - HomePage: Landing page with the feature cards
// - SmartExpiryPage: Free-text item entry and parsed item table

pub mod home;
pub mod smart_expiry;

// Re-export page components
pub use home::HomePage;
pub use smart_expiry::SmartExpiryPage;
