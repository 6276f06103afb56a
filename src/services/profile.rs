//! Fixed demo payloads for the profile screens. None of these touch the store.

use crate::models::{
    CreditsResponse, Gpa, Person, PersonResponse, Student, StudentDetailsResponse,
};

pub fn person() -> PersonResponse {
    PersonResponse {
        person: Person {
            address: "318 Meadow Brook Rd, Rochester, MI 48309".to_string(),
            email: "grizz@oakland.edu".to_string(),
            gid: "G00000000".to_string(),
            legal_name: "Grizz OU".to_string(),
            phone_number: "(248) 370-2100".to_string(),
            pidm: "111111".to_string(),
            pref_first_name: "Grizz".to_string(),
        },
    }
}

pub fn student_details() -> StudentDetailsResponse {
    StudentDetailsResponse {
        student_details: vec![Student {
            class_standing: "Senior".to_string(),
            major1: "computer science".to_string(),
            degree_type: "Bach of Sci".to_string(),
            college: "School CS".to_string(),
            level: "Undergrad".to_string(),
            ..Default::default()
        }],
    }
}

pub fn credits() -> CreditsResponse {
    CreditsResponse {
        gpa: vec![Gpa {
            id: 2,
            level: "Undergraduate".to_string(),
            credits: "88".to_string(),
            gpa: "3.2".to_string(),
        }],
    }
}
