use serde::{Deserialize, Deserializer, Serialize};

/// A single lender entry from the catalog.
///
/// Numeric eligibility floors are optional: a lender that does not publish a
/// floor is treated as failing any criterion that references it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LenderRecord {
    pub name: String,
    #[serde(rename = "loanTypes", default)]
    pub loan_types: Vec<String>,
    #[serde(rename = "topNiche", default)]
    pub top_niche: Option<String>,
    #[serde(rename = "minIncome", default)]
    pub min_income: Option<f64>,
    #[serde(rename = "minCreditScore", default)]
    pub min_credit_score: Option<u16>,
    #[serde(rename = "interestRate", default)]
    pub interest_rate: Option<f64>,
    #[serde(rename = "minDownPayment", default)]
    pub min_down_payment: Option<f64>,
    #[serde(rename = "eligibleStates", default)]
    pub eligible_states: Vec<String>,
    #[serde(rename = "eligiblePropertyTypes", default)]
    pub eligible_property_types: Vec<String>,
    #[serde(default)]
    pub comp: Option<String>,
    #[serde(rename = "aeFirst", default)]
    pub ae_first: Option<String>,
    #[serde(rename = "aeLast", default)]
    pub ae_last: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(rename = "uwFee", default)]
    pub uw_fee: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Applicant-supplied borrower data, built fresh per request and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorrowerProfile {
    #[serde(rename = "creditScore")]
    pub credit_score: u16,
    #[serde(rename = "annualIncome")]
    pub annual_income: f64,
    #[serde(rename = "loanAmount")]
    pub loan_amount: f64,
    #[serde(rename = "propertyValue")]
    pub property_value: f64,
    #[serde(rename = "downPayment")]
    pub down_payment: f64,
    pub state: String,
    #[serde(rename = "loanProgram", default)]
    pub loan_program: Option<String>,
    #[serde(rename = "propertyType", default)]
    pub property_type: Option<String>,
}

/// The subset of borrower/query fields used for matching.
///
/// Every field is optional; a `None` (or blank string) criterion places no
/// constraint on the catalog. `Default` therefore matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Borrower annual income, checked against the lender's income floor.
    #[serde(rename = "annualIncome", default)]
    pub annual_income: Option<f64>,
    /// Borrower credit score, checked against the lender's credit floor.
    #[serde(rename = "creditScore", default)]
    pub credit_score: Option<u16>,
    /// Borrower down payment, checked against the lender's minimum.
    #[serde(rename = "downPayment", default)]
    pub down_payment: Option<f64>,
    /// Property state, checked for membership in the lender's eligible states.
    #[serde(default)]
    pub state: Option<String>,
    /// Property type, checked for membership in the lender's eligible types.
    #[serde(rename = "propertyType", default)]
    pub property_type: Option<String>,
    /// Case-insensitive substring match on the lender name.
    #[serde(rename = "lenderName", default)]
    pub lender_name: Option<String>,
    /// Case-insensitive substring match on the lender's loan types.
    #[serde(rename = "loanType", default)]
    pub loan_type: Option<String>,
    /// Case-insensitive substring match on the lender's top niche field.
    #[serde(rename = "nicheKeyword", default)]
    pub niche_keyword: Option<String>,
}

/// Fixed-shape prequalification answer demanded from the model in
/// structured mode.
///
/// All fields are optional; an absent key is not an error and is rendered
/// as "N/A". The deserializers tolerate the usual model sloppiness:
/// numbers quoted as strings and strings delivered as bare numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrequalAnswer {
    #[serde(default, deserialize_with = "lenient_number")]
    pub maximum_eligible_loan_amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rate_range_estimate: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub monthly_payment_estimate: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub combined_dti_estimate: Option<String>,
    #[serde(default)]
    pub program_fit: Option<String>,
    #[serde(default)]
    pub pre_approval_status: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Display placeholder for absent answer fields.
pub const NA: &str = "N/A";

impl PrequalAnswer {
    pub fn status_label(&self) -> &str {
        self.pre_approval_status.as_deref().unwrap_or(NA)
    }

    pub fn program_fit_label(&self) -> &str {
        self.program_fit.as_deref().unwrap_or(NA)
    }

    pub fn loan_amount_label(&self) -> String {
        self.maximum_eligible_loan_amount
            .map(|v| format!("{v}"))
            .unwrap_or_else(|| NA.to_string())
    }
}

/// Accept a JSON number or a numeric string ("425000", "$425,000").
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => {
            let cleaned: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            cleaned.parse::<f64>().ok()
        }
        _ => None,
    })
}

/// Accept a JSON string or render a bare number as its string form.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criteria_default_is_unconstrained() {
        let criteria = FilterCriteria::default();
        assert!(criteria.annual_income.is_none());
        assert!(criteria.credit_score.is_none());
        assert!(criteria.state.is_none());
        assert!(criteria.lender_name.is_none());
    }

    #[test]
    fn test_prequal_answer_lenient_number_from_string() {
        let answer: PrequalAnswer =
            serde_json::from_str(r#"{"maximum_eligible_loan_amount": "$425,000"}"#).unwrap();
        assert_eq!(answer.maximum_eligible_loan_amount, Some(425000.0));
    }

    #[test]
    fn test_prequal_answer_lenient_string_from_number() {
        let answer: PrequalAnswer =
            serde_json::from_str(r#"{"combined_dti_estimate": 42}"#).unwrap();
        assert_eq!(answer.combined_dti_estimate.as_deref(), Some("42"));
    }

    #[test]
    fn test_prequal_answer_labels_default_to_na() {
        let answer = PrequalAnswer::default();
        assert_eq!(answer.status_label(), NA);
        assert_eq!(answer.program_fit_label(), NA);
        assert_eq!(answer.loan_amount_label(), NA);
    }
}
