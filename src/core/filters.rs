use crate::models::{FilterCriteria, LenderRecord};

/// Case-insensitive substring check used by all text criteria.
#[inline]
pub fn contains_keyword(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Check the lender's numeric floors against the borrower's figures.
///
/// Inactive criteria (None) always pass. An active criterion against a
/// lender that does not publish the corresponding floor fails: an unknown
/// floor cannot be shown to be met.
#[inline]
pub fn meets_numeric_floors(lender: &LenderRecord, criteria: &FilterCriteria) -> bool {
    if let Some(income) = criteria.annual_income {
        match lender.min_income {
            Some(floor) if income >= floor => {}
            _ => return false,
        }
    }

    if let Some(score) = criteria.credit_score {
        match lender.min_credit_score {
            Some(floor) if score >= floor => {}
            _ => return false,
        }
    }

    if let Some(down) = criteria.down_payment {
        match lender.min_down_payment {
            Some(floor) if down >= floor => {}
            _ => return false,
        }
    }

    true
}

/// Check state and property-type membership against the lender's lists.
#[inline]
pub fn matches_membership(lender: &LenderRecord, criteria: &FilterCriteria) -> bool {
    if let Some(state) = non_blank(&criteria.state) {
        if !lender
            .eligible_states
            .iter()
            .any(|s| s.eq_ignore_ascii_case(state))
        {
            return false;
        }
    }

    if let Some(property_type) = non_blank(&criteria.property_type) {
        if !lender
            .eligible_property_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(property_type))
        {
            return false;
        }
    }

    true
}

/// Check the free-text criteria: lender name, loan type, niche keyword.
#[inline]
pub fn matches_text(lender: &LenderRecord, criteria: &FilterCriteria) -> bool {
    if let Some(name) = non_blank(&criteria.lender_name) {
        if !contains_keyword(&lender.name, name) {
            return false;
        }
    }

    if let Some(loan_type) = non_blank(&criteria.loan_type) {
        if !lender
            .loan_types
            .iter()
            .any(|t| contains_keyword(t, loan_type))
        {
            return false;
        }
    }

    if let Some(keyword) = non_blank(&criteria.niche_keyword) {
        let niche = lender.top_niche.as_deref().unwrap_or("");
        if !contains_keyword(niche, keyword) {
            return false;
        }
    }

    true
}

/// A blank string criterion is treated the same as an absent one.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
