use crate::core::filters::{matches_membership, matches_text, meets_numeric_floors};
use crate::models::{FilterCriteria, LenderRecord};

/// Result of filtering the catalog
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub matches: Vec<LenderRecord>,
    pub total_candidates: usize,
}

/// Eligibility filter - applies every active criterion as a logical AND
///
/// # Pipeline stages
/// 1. Numeric floors (income, credit score, down payment)
/// 2. Membership (state, property type)
/// 3. Free-text substring (name, loan type, niche keyword)
///
/// Catalog order is preserved; there is no scoring or ranking.
#[derive(Debug, Clone, Default)]
pub struct EligibilityFilter;

impl EligibilityFilter {
    pub fn new() -> Self {
        Self
    }

    /// True iff `lender` satisfies every active criterion.
    pub fn is_eligible(&self, lender: &LenderRecord, criteria: &FilterCriteria) -> bool {
        meets_numeric_floors(lender, criteria)
            && matches_membership(lender, criteria)
            && matches_text(lender, criteria)
    }

    /// Filter the catalog against the criteria.
    ///
    /// Pure and deterministic: identical (catalog, criteria) always produce
    /// the same result, and matches keep their catalog position order.
    pub fn filter(&self, catalog: &[LenderRecord], criteria: &FilterCriteria) -> MatchResult {
        let total_candidates = catalog.len();

        let matches: Vec<LenderRecord> = catalog
            .iter()
            .filter(|lender| self.is_eligible(lender, criteria))
            .cloned()
            .collect();

        MatchResult {
            matches,
            total_candidates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lender(name: &str, min_income: f64, min_credit: u16) -> LenderRecord {
        LenderRecord {
            name: name.to_string(),
            loan_types: vec!["Conventional".to_string()],
            top_niche: None,
            min_income: Some(min_income),
            min_credit_score: Some(min_credit),
            interest_rate: None,
            min_down_payment: None,
            eligible_states: vec!["TX".to_string()],
            eligible_property_types: vec![],
            comp: None,
            ae_first: None,
            ae_last: None,
            email: None,
            phone: None,
            uw_fee: None,
            notes: None,
        }
    }

    #[test]
    fn test_filter_below_floors_returns_empty() {
        let filter = EligibilityFilter::new();
        let catalog = vec![lender("Bank A", 30000.0, 650)];
        let criteria = FilterCriteria {
            annual_income: Some(35000.0),
            credit_score: Some(700),
            ..Default::default()
        };

        // Income and credit both clear Bank A's floors only when the
        // borrower figures meet or exceed them; here they do.
        let result = filter.filter(&catalog, &criteria);
        assert_eq!(result.matches.len(), 1);

        // Borrower below the income floor matches nothing.
        let criteria = FilterCriteria {
            annual_income: Some(25000.0),
            credit_score: Some(700),
            ..Default::default()
        };
        let result = filter.filter(&catalog, &criteria);
        assert!(result.matches.is_empty());
        assert_eq!(result.total_candidates, 1);
    }

    #[test]
    fn test_filter_above_floors_matches() {
        let filter = EligibilityFilter::new();
        let catalog = vec![lender("Bank A", 30000.0, 650)];
        let criteria = FilterCriteria {
            annual_income: Some(31000.0),
            credit_score: Some(660),
            ..Default::default()
        };

        let result = filter.filter(&catalog, &criteria);
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].name, "Bank A");
    }

    #[test]
    fn test_default_criteria_returns_whole_catalog() {
        let filter = EligibilityFilter::new();
        let catalog = vec![
            lender("Bank A", 30000.0, 650),
            lender("Bank B", 50000.0, 700),
            lender("Bank C", 20000.0, 600),
        ];

        let result = filter.filter(&catalog, &FilterCriteria::default());
        assert_eq!(result.matches, catalog);
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let filter = EligibilityFilter::new();
        let catalog = vec![
            lender("Bank C", 20000.0, 600),
            lender("Bank A", 30000.0, 650),
            lender("Bank B", 50000.0, 700),
        ];
        let criteria = FilterCriteria {
            credit_score: Some(660),
            ..Default::default()
        };

        let result = filter.filter(&catalog, &criteria);
        let names: Vec<&str> = result.matches.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Bank C", "Bank A"]);
    }

    #[test]
    fn test_stricter_threshold_never_widens() {
        let filter = EligibilityFilter::new();
        let catalog = vec![
            lender("Bank A", 30000.0, 650),
            lender("Bank B", 50000.0, 700),
            lender("Bank C", 20000.0, 600),
        ];

        let loose = FilterCriteria {
            credit_score: Some(720),
            ..Default::default()
        };
        let mut strict = loose.clone();
        strict.annual_income = Some(25000.0);

        let loose_count = filter.filter(&catalog, &loose).matches.len();
        let strict_count = filter.filter(&catalog, &strict).matches.len();
        assert!(strict_count <= loose_count);
    }
}
