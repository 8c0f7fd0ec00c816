use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{BorrowerProfile, FilterCriteria};

/// Request to filter the lender catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterLendersRequest {
    #[serde(flatten)]
    pub criteria: FilterCriteria,
    #[serde(default = "default_limit")]
    pub limit: u16,
}

fn default_limit() -> u16 {
    50
}

/// Request to ask the model a question about one lender
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AskLenderRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "lender_name", rename = "lenderName")]
    pub lender_name: String,
    #[validate(length(min = 1))]
    pub question: String,
}

/// Request to prequalify a borrower profile (structured mode)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PrequalifyRequest {
    #[validate(length(min = 2))]
    pub state: String,
    #[serde(rename = "creditScore", alias = "credit_score")]
    pub credit_score: u16,
    #[serde(rename = "annualIncome", alias = "annual_income")]
    pub annual_income: f64,
    #[serde(rename = "loanAmount", alias = "loan_amount")]
    pub loan_amount: f64,
    #[serde(rename = "propertyValue", alias = "property_value")]
    pub property_value: f64,
    #[serde(rename = "downPayment", alias = "down_payment")]
    pub down_payment: f64,
    #[serde(rename = "loanProgram", alias = "loan_program", default)]
    pub loan_program: Option<String>,
    #[serde(rename = "propertyType", alias = "property_type", default)]
    pub property_type: Option<String>,
}

impl PrequalifyRequest {
    pub fn into_profile(self) -> BorrowerProfile {
        BorrowerProfile {
            credit_score: self.credit_score,
            annual_income: self.annual_income,
            loan_amount: self.loan_amount,
            property_value: self.property_value,
            down_payment: self.down_payment,
            state: self.state,
            loan_program: self.loan_program,
            property_type: self.property_type,
        }
    }
}
