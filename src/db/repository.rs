use sqlx::SqlitePool;

use crate::models::{Course, Grade, Instructor, Meeting, Term};

pub async fn fetch_terms(db: &SqlitePool) -> Result<Vec<Term>, sqlx::Error> {
    sqlx::query_as::<_, Term>(
        "SELECT id, description, code, starttime, endtime, current FROM terms ORDER BY id"
    )
    .fetch_all(db)
    .await
}

pub async fn fetch_courses_by_term(db: &SqlitePool, term_code: &str) -> Result<Vec<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>(
        r#"
        SELECT
            id, crn, waitlistpos, registrationstatus, registrationdescription,
            departmentcode, departmentdescription, coursetitle, coursedescription,
            termcode, subjectcode, subjectnumber, credit, section
        FROM courses
        WHERE termcode = ?
        ORDER BY id
        "#
    )
    .bind(term_code)
    .fetch_all(db)
    .await
}

pub async fn fetch_instructors_by_crn(db: &SqlitePool, crn: &str) -> Result<Vec<Instructor>, sqlx::Error> {
    sqlx::query_as::<_, Instructor>(
        "SELECT id, crn, firstname, lastname, office, email FROM instructors WHERE crn = ? ORDER BY id"
    )
    .bind(crn)
    .fetch_all(db)
    .await
}

pub async fn fetch_meetings_by_crn(db: &SqlitePool, crn: &str) -> Result<Vec<Meeting>, sqlx::Error> {
    sqlx::query_as::<_, Meeting>(
        r#"
        SELECT
            id, crn, startdate, enddate, starttime, endtime,
            coursetype, coursetypecode, buildingroom, campus, meetday
        FROM meetings
        WHERE crn = ?
        ORDER BY id
        "#
    )
    .bind(crn)
    .fetch_all(db)
    .await
}

/// First grade row for `crn` in storage order, if any.
pub async fn find_grade_by_crn(db: &SqlitePool, crn: &str) -> Result<Option<Grade>, sqlx::Error> {
    sqlx::query_as::<_, Grade>(
        "SELECT id, credit, grade, crn FROM grades WHERE crn = ? ORDER BY id LIMIT 1"
    )
    .bind(crn)
    .fetch_optional(db)
    .await
}
