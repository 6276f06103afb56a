//! Row decoding for the records tables.
//!
//! Every column is read as `Option<_>` and a NULL is rejected with
//! `sqlx::Error::ColumnDecode`. The SQLite driver would otherwise hand back
//! an empty string for a NULL text column.

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};
use thiserror::Error;

use crate::models::{Course, Grade, Instructor, Meeting, Term};

#[derive(Debug, Error)]
#[error("unexpected NULL in column {0}")]
pub struct UnexpectedNull(pub &'static str);

fn required<'r, T>(row: &'r SqliteRow, column: &'static str) -> Result<T, sqlx::Error>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get::<Option<T>, _>(column)?
        .ok_or_else(|| sqlx::Error::ColumnDecode {
            index: column.to_string(),
            source: Box::new(UnexpectedNull(column)),
        })
}

impl<'r> FromRow<'r, SqliteRow> for Term {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: required(row, "id")?,
            description: required(row, "description")?,
            code: required(row, "code")?,
            start: required(row, "starttime")?,
            end: required(row, "endtime")?,
            current: required(row, "current")?,
        })
    }
}

impl<'r> FromRow<'r, SqliteRow> for Course {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: required(row, "id")?,
            crn: required(row, "crn")?,
            waitlist_pos: required(row, "waitlistpos")?,
            registration_status: required(row, "registrationstatus")?,
            registration_status_description: required(row, "registrationdescription")?,
            department_code: required(row, "departmentcode")?,
            department_description: required(row, "departmentdescription")?,
            course_title: required(row, "coursetitle")?,
            course_description: required(row, "coursedescription")?,
            term_code: required(row, "termcode")?,
            subject_code: required(row, "subjectcode")?,
            subject_number: required(row, "subjectnumber")?,
            section: required(row, "section")?,
            credit: required(row, "credit")?,
            meetings: Vec::new(),
            instructors: Vec::new(),
            grade: Grade::default(),
        })
    }
}

impl<'r> FromRow<'r, SqliteRow> for Instructor {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: required(row, "id")?,
            crn: required(row, "crn")?,
            first_name: required(row, "firstname")?,
            last_name: required(row, "lastname")?,
            office: required(row, "office")?,
            email: required(row, "email")?,
        })
    }
}

impl<'r> FromRow<'r, SqliteRow> for Meeting {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: required(row, "id")?,
            crn: required(row, "crn")?,
            start_date: required(row, "startdate")?,
            end_date: required(row, "enddate")?,
            start_time: required(row, "starttime")?,
            end_time: required(row, "endtime")?,
            course_type: required(row, "coursetype")?,
            course_type_code: required(row, "coursetypecode")?,
            building_room: required(row, "buildingroom")?,
            campus: required(row, "campus")?,
            meet_days: required(row, "meetday")?,
        })
    }
}

impl<'r> FromRow<'r, SqliteRow> for Grade {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: required(row, "id")?,
            credit: required(row, "credit")?,
            grade: required(row, "grade")?,
            crn: required(row, "crn")?,
        })
    }
}
