use crate::models::{BorrowerProfile, LenderRecord};

/// System prompt shared by both modes.
pub const SYSTEM_PROMPT: &str = "You are a helpful mortgage lending assistant.";

/// Serialize a lender to pretty JSON for embedding in a prompt.
///
/// Struct fields serialize in declaration order, so the output is stable
/// byte-for-byte for identical input.
pub fn serialize_lender(lender: &LenderRecord) -> String {
    serde_json::to_string_pretty(lender).unwrap_or_default()
}

/// Serialize a borrower profile to pretty JSON for embedding in a prompt.
pub fn serialize_profile(profile: &BorrowerProfile) -> String {
    serde_json::to_string_pretty(profile).unwrap_or_default()
}

/// Free-text mode: ask the model a question about one lender.
pub fn compose_lender_question(lender: &LenderRecord, question: &str) -> String {
    format!(
        "You are a mortgage advisor assistant. Based on the following lender information:\n\
         {}\n\n\
         User question: {}\n\
         Answer concisely and professionally.",
        serialize_lender(lender),
        question
    )
}

/// Structured mode: ask the model to prequalify a borrower and reply with a
/// single JSON object carrying exactly the expected keys.
pub fn compose_prequalification(profile: &BorrowerProfile) -> String {
    format!(
        "You are a mortgage advisor assistant. Based on the following borrower profile:\n\
         {}\n\n\
         Estimate the borrower's prequalification outcome. Respond with a single JSON \
         object containing exactly these keys and nothing else (no prose, no markdown):\n\
         \"maximum_eligible_loan_amount\" (number), \
         \"rate_range_estimate\" (string), \
         \"monthly_payment_estimate\" (number), \
         \"combined_dti_estimate\" (string), \
         \"program_fit\" (string), \
         \"pre_approval_status\" (string), \
         \"summary\" (string).",
        serialize_profile(profile)
    )
}
