// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{BorrowerProfile, FilterCriteria, LenderRecord, PrequalAnswer, NA};
pub use requests::{AskLenderRequest, FilterLendersRequest, PrequalifyRequest};
pub use responses::{
    AskLenderResponse, ErrorResponse, FilterLendersResponse, HealthResponse, PrequalifyResponse,
};
