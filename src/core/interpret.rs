use crate::models::PrequalAnswer;

/// Outcome of interpreting a structured-mode model reply.
#[derive(Debug, Clone, PartialEq)]
pub enum Interpretation {
    Parsed(PrequalAnswer),
    /// Neither the strict parse nor the span recovery produced JSON; the
    /// verbatim reply is kept for display.
    Unparsed(String),
}

impl Interpretation {
    pub fn answer(&self) -> Option<&PrequalAnswer> {
        match self {
            Interpretation::Parsed(answer) => Some(answer),
            Interpretation::Unparsed(_) => None,
        }
    }
}

/// Two-stage parse of a structured-mode reply.
///
/// Stage 1 is a strict JSON parse. Stage 2 extracts the span from the first
/// `{` to the last `}` and retries, which handles models that wrap the
/// object in prose or markdown fences. Never panics and never fails upward.
pub fn interpret(raw: &str) -> Interpretation {
    if let Ok(answer) = serde_json::from_str::<PrequalAnswer>(raw) {
        return Interpretation::Parsed(answer);
    }

    if let Some(span) = json_span(raw) {
        if let Ok(answer) = serde_json::from_str::<PrequalAnswer>(span) {
            return Interpretation::Parsed(answer);
        }
    }

    Interpretation::Unparsed(raw.to_string())
}

/// The inclusive substring between the first `{` and the last `}`.
fn json_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}
