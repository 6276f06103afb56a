use serde::{Deserialize, Serialize};

/// An academic period, e.g. a semester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    #[serde(rename = "ID")]
    pub id: i64,
    pub description: String,
    pub code: String,
    pub start: String,
    pub end: String,
    pub current: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermsResponse {
    pub terms: Vec<Term>,
}
