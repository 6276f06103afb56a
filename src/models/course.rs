use serde::{Deserialize, Serialize};

/// A course offered in a term, joined to its dependents by `crn`.
///
/// `instructors`, `meetings` and `grade` are not columns of the `courses`
/// table; they start out empty and are filled in by the aggregator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "ID")]
    pub id: i64,
    pub crn: String,
    #[serde(rename = "waitlistPost")]
    pub waitlist_pos: String,
    pub registration_status: String,
    pub registration_status_description: String,
    pub department_code: String,
    pub department_description: String,
    pub course_title: String,
    pub course_description: String,
    pub term_code: String,
    pub subject_code: String,
    pub subject_number: String,
    pub section: String,
    pub credit: String,
    pub meetings: Vec<Meeting>,
    pub instructors: Vec<Instructor>,
    pub grade: Grade,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    #[serde(rename = "ID")]
    pub id: i64,
    pub crn: String,
    pub first_name: String,
    pub last_name: String,
    pub office: String,
    pub email: String,
}

/// When and where a course gathers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    #[serde(rename = "ID")]
    pub id: i64,
    pub crn: String,
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    pub course_type: String,
    pub course_type_code: String,
    pub building_room: String,
    pub campus: String,
    pub meet_days: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    #[serde(rename = "ID")]
    pub id: i64,
    pub credit: String,
    pub grade: String,
    pub crn: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoursesRequest {
    #[serde(default)]
    pub code: Option<String>,
}

impl CoursesRequest {
    /// Term code to look up; an absent or null `code` means the empty term.
    pub fn term_code(&self) -> &str {
        self.code.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoursesResponse {
    pub courses: Vec<Course>,
}
