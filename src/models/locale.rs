use serde::{Deserialize, Serialize};

/// UI strings for one language. Unknown languages get the all-empty default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageStrings {
    pub section: String,
    pub crn: String,
    pub credits: String,
    pub course_details: String,
    pub course_title: String,
    pub department: String,
    pub grade: String,
    pub description: String,
    pub close: String,
    pub courses: String,
    pub calendar: String,
    pub grades: String,
}
