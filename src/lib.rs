//! Lender Match - eligibility matching and AI Q&A service
//!
//! This library filters a catalog of mortgage lender records against borrower
//! criteria and forwards questions about lenders (or full borrower profiles)
//! to a chat-completion model, interpreting structured replies defensively.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{interpret, EligibilityFilter, Interpretation, MatchResult};
pub use models::{BorrowerProfile, FilterCriteria, LenderRecord, PrequalAnswer};
pub use services::{Catalog, ChatClient};
