#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use academic_records::api::router;
use academic_records::db;
use academic_records::state::AppState;
use academic_records::store::SqliteRecordStore;
use axum::Router;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

pub async fn memory_db() -> SqlitePool {
    // A single long-lived connection keeps the in-memory database alive.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create database");

    db::bootstrap(&pool).await.expect("Failed to bootstrap schema");
    pool
}

pub fn app(db: SqlitePool) -> Router {
    let store = Arc::new(SqliteRecordStore::new(db.clone()));
    router(AppState::new(db, store, Duration::from_secs(5)))
}

pub async fn insert_term(db: &SqlitePool, code: &str, description: &str) {
    sqlx::query(
        "INSERT INTO terms (description, code, starttime, endtime, current) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(description)
    .bind(code)
    .bind("2023-01-09")
    .bind("2023-04-28")
    .bind("false")
    .execute(db)
    .await
    .expect("Failed to insert term");
}

pub async fn insert_course(db: &SqlitePool, crn: &str, term_code: &str, title: &str) {
    sqlx::query(
        r#"
        INSERT INTO courses
            (crn, waitlistpos, registrationstatus, registrationdescription,
            departmentcode, departmentdescription, coursetitle, coursedescription,
            termcode, subjectcode, subjectnumber, credit, section)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(crn)
    .bind("0")
    .bind("RW")
    .bind("Registered")
    .bind("CSE")
    .bind("Computer Science and Engineering")
    .bind(title)
    .bind(format!("{} description", title))
    .bind(term_code)
    .bind("CSI")
    .bind("2300")
    .bind("4")
    .bind("001")
    .execute(db)
    .await
    .expect("Failed to insert course");
}

pub async fn insert_instructor(db: &SqlitePool, crn: &str, first_name: &str, last_name: &str) {
    sqlx::query(
        "INSERT INTO instructors (crn, firstname, lastname, office, email) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(crn)
    .bind(first_name)
    .bind(last_name)
    .bind("EC 546")
    .bind(format!("{}@example.edu", last_name.to_lowercase()))
    .execute(db)
    .await
    .expect("Failed to insert instructor");
}

pub async fn insert_meeting(db: &SqlitePool, crn: &str, meet_days: &str, building_room: &str) {
    sqlx::query(
        r#"
        INSERT INTO meetings
            (crn, startdate, enddate, starttime, endtime, coursetype,
            coursetypecode, buildingroom, campus, meetday)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(crn)
    .bind("2023-01-09")
    .bind("2023-04-28")
    .bind("1300")
    .bind("1447")
    .bind("Lecture")
    .bind("LEC")
    .bind(building_room)
    .bind("Main")
    .bind(meet_days)
    .execute(db)
    .await
    .expect("Failed to insert meeting");
}

pub async fn insert_grade(db: &SqlitePool, crn: &str, grade: &str) {
    sqlx::query("INSERT INTO grades (credit, grade, crn) VALUES (?, ?, ?)")
        .bind("4")
        .bind(grade)
        .bind(crn)
        .execute(db)
        .await
        .expect("Failed to insert grade");
}
