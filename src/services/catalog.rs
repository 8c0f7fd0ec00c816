use crate::models::LenderRecord;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading the lender catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file not found: {0}")]
    NotFound(String),

    #[error("failed to read catalog: {0}")]
    Read(#[from] csv::Error),

    #[error("catalog is missing the required '{0}' column")]
    MissingColumn(&'static str),
}

/// The lender catalog, loaded once at startup and read-only thereafter.
#[derive(Debug, Clone)]
pub struct Catalog {
    lenders: Vec<LenderRecord>,
}

impl Catalog {
    pub fn new(lenders: Vec<LenderRecord>) -> Self {
        Self { lenders }
    }

    /// Load the catalog from a CSV file.
    ///
    /// Column headers are normalized (trimmed, embedded newlines collapsed
    /// to a space, uppercased) before lookup, matching the messy headers the
    /// source spreadsheets carry.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CatalogError::NotFound(path.display().to_string()));
        }

        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(normalize_header)
            .collect();
        let columns: HashMap<&str, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.as_str(), i))
            .collect();

        if !columns.contains_key("LENDER") {
            return Err(CatalogError::MissingColumn("LENDER"));
        }

        let mut lenders = Vec::new();
        for record in reader.records() {
            let record = record?;
            let cell = |name: &str| -> Option<String> {
                columns
                    .get(name)
                    .and_then(|&i| record.get(i))
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            };

            let name = match cell("LENDER") {
                Some(name) => name,
                None => continue, // blank row
            };

            lenders.push(LenderRecord {
                name,
                loan_types: cell("TYPE OF LOAN").map(split_list).unwrap_or_default(),
                top_niche: cell("TOP NICHE"),
                min_income: cell("MIN INCOME").and_then(|v| parse_amount(&v)),
                min_credit_score: cell("MIN CREDIT SCORE")
                    .and_then(|v| parse_amount(&v))
                    .map(|v| v as u16),
                interest_rate: cell("INTEREST RATE").and_then(|v| parse_amount(&v)),
                min_down_payment: cell("MIN DOWN PAYMENT").and_then(|v| parse_amount(&v)),
                eligible_states: cell("ELIGIBLE STATES").map(split_list).unwrap_or_default(),
                eligible_property_types: cell("PROPERTY TYPES")
                    .map(split_list)
                    .unwrap_or_default(),
                comp: cell("COMP"),
                ae_first: cell("AE FIRST"),
                ae_last: cell("AE LAST"),
                email: cell("EMAIL"),
                phone: cell("CELL PHONE").or_else(|| cell("CELL PHO")),
                uw_fee: cell("UW FEE"),
                notes: cell("NOTES"),
            });
        }

        tracing::info!("Loaded {} lenders from {}", lenders.len(), path.display());

        Ok(Self { lenders })
    }

    pub fn lenders(&self) -> &[LenderRecord] {
        &self.lenders
    }

    pub fn len(&self) -> usize {
        self.lenders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lenders.is_empty()
    }

    /// Exact (case-insensitive) lender lookup by name.
    pub fn find_by_name(&self, name: &str) -> Option<&LenderRecord> {
        self.lenders
            .iter()
            .find(|l| l.name.eq_ignore_ascii_case(name.trim()))
    }
}

/// Trim, collapse embedded newlines to a space, uppercase.
fn normalize_header(raw: &str) -> String {
    raw.trim().replace('\n', " ").to_uppercase()
}

/// Split a delimited cell ("TX, FL" or "Conventional / FHA") into items.
fn split_list(raw: String) -> Vec<String> {
    raw.split(|c| c == ',' || c == ';' || c == '/')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lenient numeric parse: strips currency/percent decoration.
fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_normalizes_headers_and_values() {
        // Header cells arrive with stray spaces and embedded newlines.
        let csv = "LENDER ,\"TYPE OF\nLOAN\",MIN INCOME,MIN CREDIT SCORE,ELIGIBLE STATES\n\
                   Bank A,\"Conventional, FHA\",\"$30,000\",650,\"TX, FL\"\n";
        let tmp = write_csv(csv);

        let catalog = Catalog::load(tmp.path()).unwrap();
        assert_eq!(catalog.len(), 1);

        let lender = &catalog.lenders()[0];
        assert_eq!(lender.name, "Bank A");
        assert_eq!(lender.loan_types, vec!["Conventional", "FHA"]);
        assert_eq!(lender.min_income, Some(30000.0));
        assert_eq!(lender.min_credit_score, Some(650));
        assert_eq!(lender.eligible_states, vec!["TX", "FL"]);
    }

    #[test]
    fn test_load_skips_blank_lender_rows() {
        let csv = "LENDER,MIN INCOME\nBank A,30000\n,99999\nBank B,\n";
        let tmp = write_csv(csv);

        let catalog = Catalog::load(tmp.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lenders()[1].name, "Bank B");
        assert_eq!(catalog.lenders()[1].min_income, None);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let result = Catalog::load("/nonexistent/lenders.csv");
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[test]
    fn test_missing_lender_column_is_reported() {
        let tmp = write_csv("NAME,MIN INCOME\nBank A,30000\n");
        let result = Catalog::load(tmp.path());
        assert!(matches!(result, Err(CatalogError::MissingColumn("LENDER"))));
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        let tmp = write_csv("LENDER\nBank A\nBank B\n");
        let catalog = Catalog::load(tmp.path()).unwrap();

        assert!(catalog.find_by_name("bank a").is_some());
        assert!(catalog.find_by_name("  Bank B ").is_some());
        assert!(catalog.find_by_name("Bank C").is_none());
    }
}
