use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub address: String,
    pub email: String,
    pub gid: String,
    pub legal_name: String,
    pub phone_number: String,
    pub pidm: String,
    pub pref_first_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub class_standing: String,
    pub major1: String,
    pub degree_type: String,
    pub college: String,
    pub level: String,
    pub major1concentration1: String,
    pub major1concentration2: String,
    pub major1concentration3: String,
    pub major2: String,
    pub major2_department: String,
    pub major2concentration1: String,
    pub major2concentration2: String,
    pub major2concentration3: String,
    pub minor1: String,
    pub minor2: String,
}

/// Overall credits and grade point average for one academic level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gpa {
    #[serde(rename = "ID")]
    pub id: i64,
    pub level: String,
    pub credits: String,
    pub gpa: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonResponse {
    pub person: Person,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentDetailsResponse {
    #[serde(rename = "studentDetails")]
    pub student_details: Vec<Student>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditsResponse {
    pub gpa: Vec<Gpa>,
}
