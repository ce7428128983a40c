use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::ServiceError;

/// Author carried inline with a course. Descriptive payload only; it has no
/// identity of its own and no endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Author {
    pub author_id: i64,
    pub name: String,
}

/// A catalog entry. `course_id` is the lookup key; uniqueness is by
/// convention only and never enforced.
///
/// All fields default on deserialization, so a body missing `price` or
/// `author` still parses and a missing id/title falls through to the
/// presence check instead of a parse error.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Course {
    pub course_id: String,
    pub title: String,
    pub author: Option<Author>,
    pub price: f64,
}

impl Course {
    /// Presence check applied at the write boundary. Stored records are never
    /// re-checked on read.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.course_id.is_empty() || self.title.is_empty() {
            return Err(ServiceError::Validation);
        }
        Ok(())
    }
}

/// Decode a raw request body into a validated course.
///
/// The three failure modes map onto the public 400 taxonomy: missing body,
/// undecodable JSON (malformed or wrong shape), and failed presence check.
pub fn decode_course(body: &[u8]) -> Result<Course, ServiceError> {
    if body.is_empty() {
        return Err(ServiceError::EmptyBody);
    }
    let course: Course = serde_json::from_slice(body).map_err(|_| ServiceError::InvalidJson)?;
    course.validate()?;
    Ok(course)
}

/// In-memory course catalog.
///
/// An ordered `Vec` behind an rwlock: list/get share the read guard while
/// create/update/delete serialize under the write guard. Insertion order is
/// observable through `list`, and id lookups bind to the first match, so a
/// duplicate id appended by `create` stays shadowed until the earlier entry
/// is deleted.
#[derive(Clone)]
pub struct CourseStore {
    inner: Arc<RwLock<Vec<Course>>>,
}

impl CourseStore {
    /// Empty store.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: Arc::new(RwLock::new(Vec::new())),
        })
    }

    /// Store pre-loaded with the fixed startup records.
    pub fn seeded() -> Arc<Self> {
        let seed = vec![
            Course {
                course_id: "1".into(),
                title: "First Course".into(),
                author: Some(Author {
                    author_id: 1,
                    name: "John Doe".into(),
                }),
                price: 10.00,
            },
            Course {
                course_id: "2".into(),
                title: "Second Course".into(),
                author: Some(Author {
                    author_id: 2,
                    name: "Jane Smith".into(),
                }),
                price: 20.00,
            },
        ];
        Arc::new(Self {
            inner: Arc::new(RwLock::new(seed)),
        })
    }

    /// All courses in collection order.
    pub async fn list(&self) -> Vec<Course> {
        let courses = self.inner.read().await;
        courses.clone()
    }

    /// First course whose id matches.
    pub async fn get(&self, id: &str) -> Result<Course, ServiceError> {
        let courses = self.inner.read().await;
        courses
            .iter()
            .find(|c| c.course_id == id)
            .cloned()
            .ok_or(ServiceError::NotFound)
    }

    /// Decode, validate and append. Duplicate ids are accepted.
    pub async fn create(&self, body: &[u8]) -> Result<Course, ServiceError> {
        let course = decode_course(body)?;
        let mut courses = self.inner.write().await;
        courses.push(course.clone());
        debug!(course_id = %course.course_id, total = courses.len(), "course created");
        Ok(course)
    }

    /// Replace the first course matching `id` in place, preserving its
    /// position. The replacement is the decoded body as-is; its own
    /// `course_id` wins when it differs from the path id.
    pub async fn update(&self, id: &str, body: &[u8]) -> Result<Course, ServiceError> {
        let mut courses = self.inner.write().await;
        let slot = courses
            .iter_mut()
            .find(|c| c.course_id == id)
            .ok_or(ServiceError::NotFound)?;
        let course = decode_course(body)?;
        *slot = course.clone();
        debug!(course_id = %course.course_id, "course updated");
        Ok(course)
    }

    /// Remove the first course matching `id`, shifting the tail down.
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let mut courses = self.inner.write().await;
        let idx = courses
            .iter()
            .position(|c| c.course_id == id)
            .ok_or(ServiceError::NotFound)?;
        courses.remove(idx);
        debug!(course_id = %id, remaining = courses.len(), "course deleted");
        Ok(())
    }
}
