use std::sync::Arc;

use tracing::debug;

use crate::error::AppError;
use crate::models::{Course, Term};
use crate::store::RecordStore;

/// Read path over terms and courses.
pub struct CatalogService {
    store: Arc<dyn RecordStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn all_terms(&self) -> Result<Vec<Term>, AppError> {
        self.store.terms().await
    }

    /// Courses in `term_code`, each joined by crn to its instructors,
    /// meetings and grade.
    ///
    /// Courses keep storage order and so do their instructors and meetings.
    /// A course without a grade row fails the whole call with
    /// [`AppError::MissingGrade`]; no partial list is ever returned.
    pub async fn courses_by_term(&self, term_code: &str) -> Result<Vec<Course>, AppError> {
        let rows = self.store.courses_by_term(term_code).await?;
        debug!("term {} has {} courses", term_code, rows.len());

        let mut courses = Vec::with_capacity(rows.len());
        for course in rows {
            courses.push(self.assemble(course).await?);
        }

        Ok(courses)
    }

    async fn assemble(&self, mut course: Course) -> Result<Course, AppError> {
        course
            .instructors
            .extend(self.store.instructors_by_crn(&course.crn).await?);
        course
            .meetings
            .extend(self.store.meetings_by_crn(&course.crn).await?);

        course.grade = self
            .store
            .grade_by_crn(&course.crn)
            .await?
            .ok_or_else(|| AppError::MissingGrade { crn: course.crn.clone() })?;

        debug!(
            "assembled crn {} with {} instructors, {} meetings",
            course.crn,
            course.instructors.len(),
            course.meetings.len()
        );
        Ok(course)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::models::{Grade, Instructor, Meeting};

    #[derive(Default)]
    struct FakeStore {
        courses: Vec<Course>,
        instructors: HashMap<String, Vec<Instructor>>,
        meetings: HashMap<String, Vec<Meeting>>,
        grades: HashMap<String, Grade>,
        fail_meetings: bool,
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl RecordStore for FakeStore {
        async fn terms(&self) -> Result<Vec<Term>, AppError> {
            Ok(Vec::new())
        }

        async fn courses_by_term(&self, term_code: &str) -> Result<Vec<Course>, AppError> {
            self.calls.lock().unwrap().push(format!("courses:{}", term_code));
            Ok(self
                .courses
                .iter()
                .filter(|c| c.term_code == term_code)
                .cloned()
                .collect())
        }

        async fn instructors_by_crn(&self, crn: &str) -> Result<Vec<Instructor>, AppError> {
            self.calls.lock().unwrap().push(format!("instructors:{}", crn));
            Ok(self.instructors.get(crn).cloned().unwrap_or_default())
        }

        async fn meetings_by_crn(&self, crn: &str) -> Result<Vec<Meeting>, AppError> {
            self.calls.lock().unwrap().push(format!("meetings:{}", crn));
            if self.fail_meetings {
                return Err(AppError::Database(sqlx::Error::PoolTimedOut));
            }
            Ok(self.meetings.get(crn).cloned().unwrap_or_default())
        }

        async fn grade_by_crn(&self, crn: &str) -> Result<Option<Grade>, AppError> {
            self.calls.lock().unwrap().push(format!("grade:{}", crn));
            Ok(self.grades.get(crn).cloned())
        }
    }

    fn course(id: i64, crn: &str, term: &str) -> Course {
        Course {
            id,
            crn: crn.to_string(),
            term_code: term.to_string(),
            ..Default::default()
        }
    }

    fn grade(crn: &str, letter: &str) -> Grade {
        Grade {
            id: 1,
            credit: "4".to_string(),
            grade: letter.to_string(),
            crn: crn.to_string(),
        }
    }

    #[tokio::test]
    async fn test_queries_run_per_crn_in_order() {
        let mut store = FakeStore::default();
        store.courses = vec![course(1, "100", "202310"), course(2, "200", "202310")];
        store.grades.insert("100".to_string(), grade("100", "A"));
        store.grades.insert("200".to_string(), grade("200", "B"));
        let store = Arc::new(store);

        let service = CatalogService::new(store.clone());
        let courses = service.courses_by_term("202310").await.expect("aggregation failed");

        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].grade.grade, "A");
        assert_eq!(courses[1].grade.grade, "B");
        assert_eq!(
            *store.calls.lock().unwrap(),
            vec![
                "courses:202310",
                "instructors:100",
                "meetings:100",
                "grade:100",
                "instructors:200",
                "meetings:200",
                "grade:200",
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_grade_fails_the_whole_term() {
        let mut store = FakeStore::default();
        store.courses = vec![course(1, "100", "202310"), course(2, "200", "202310")];
        store.grades.insert("100".to_string(), grade("100", "A"));

        let service = CatalogService::new(Arc::new(store));
        let err = service.courses_by_term("202310").await.unwrap_err();

        assert!(matches!(err, AppError::MissingGrade { ref crn } if crn == "200"));
    }

    #[tokio::test]
    async fn test_store_failure_stops_before_grade_lookup() {
        let mut store = FakeStore::default();
        store.courses = vec![course(1, "100", "202310")];
        store.grades.insert("100".to_string(), grade("100", "A"));
        store.fail_meetings = true;
        let store = Arc::new(store);

        let service = CatalogService::new(store.clone());
        let result = service.courses_by_term("202310").await;

        assert!(matches!(result, Err(AppError::Database(_))));
        assert!(!store.calls.lock().unwrap().iter().any(|c| c.starts_with("grade:")));
    }

    #[tokio::test]
    async fn test_unknown_term_is_empty_not_an_error() {
        let service = CatalogService::new(Arc::new(FakeStore::default()));
        let courses = service.courses_by_term("").await.expect("empty term should succeed");
        assert!(courses.is_empty());
    }
}
