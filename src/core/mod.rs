// Core pipeline exports
pub mod filters;
pub mod interpret;
pub mod matcher;
pub mod prompt;

pub use filters::{contains_keyword, matches_membership, matches_text, meets_numeric_floors};
pub use interpret::{interpret, Interpretation};
pub use matcher::{EligibilityFilter, MatchResult};
pub use prompt::{
    compose_lender_question, compose_prequalification, serialize_lender, serialize_profile,
    SYSTEM_PROMPT,
};
