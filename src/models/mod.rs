pub mod course;
pub mod locale;
pub mod profile;
pub mod term;

pub use course::{Course, CoursesRequest, CoursesResponse, Grade, Instructor, Meeting};
pub use locale::LanguageStrings;
pub use profile::{CreditsResponse, Gpa, Person, PersonResponse, Student, StudentDetailsResponse};
pub use term::{Term, TermsResponse};
