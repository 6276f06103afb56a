use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::db::repository;
use crate::error::AppError;
use crate::models::{Course, Grade, Instructor, Meeting, Term};

/// Parameterized read access to the records tables.
///
/// Every dependent lookup is keyed on `crn`, never on a row id.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn terms(&self) -> Result<Vec<Term>, AppError>;
    async fn courses_by_term(&self, term_code: &str) -> Result<Vec<Course>, AppError>;
    async fn instructors_by_crn(&self, crn: &str) -> Result<Vec<Instructor>, AppError>;
    async fn meetings_by_crn(&self, crn: &str) -> Result<Vec<Meeting>, AppError>;
    async fn grade_by_crn(&self, crn: &str) -> Result<Option<Grade>, AppError>;
}

#[derive(Clone)]
pub struct SqliteRecordStore {
    db: SqlitePool,
}

impl SqliteRecordStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn terms(&self) -> Result<Vec<Term>, AppError> {
        Ok(repository::fetch_terms(&self.db).await?)
    }

    async fn courses_by_term(&self, term_code: &str) -> Result<Vec<Course>, AppError> {
        Ok(repository::fetch_courses_by_term(&self.db, term_code).await?)
    }

    async fn instructors_by_crn(&self, crn: &str) -> Result<Vec<Instructor>, AppError> {
        Ok(repository::fetch_instructors_by_crn(&self.db, crn).await?)
    }

    async fn meetings_by_crn(&self, crn: &str) -> Result<Vec<Meeting>, AppError> {
        Ok(repository::fetch_meetings_by_crn(&self.db, crn).await?)
    }

    async fn grade_by_crn(&self, crn: &str) -> Result<Option<Grade>, AppError> {
        Ok(repository::find_grade_by_crn(&self.db, crn).await?)
    }
}
