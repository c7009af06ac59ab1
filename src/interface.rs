#![allow(async_fn_in_trait)]

use serde_json::Value;

use crate::error::Result;
use crate::model::structs::{Course, User};

/// Common trait for HTTP client construction
pub trait HttpClient {
    /// Create a new HTTP client instance
    async fn new() -> Result<Self>
    where
        Self: Sized;
}

/// One method per upstream operation. Every call is a single attempt:
/// no retries, no timeouts, no backoff. Implementations return the
/// parsed JSON body (Null for empty 2xx bodies); the app layer
/// deserializes into model types.
pub trait RequestApi {
    /// GET the full user list
    async fn fetch_users(&self) -> Result<Value>;

    /// POST a new user; the backend assigns id and creation timestamp
    async fn create_user(&self, user: &User) -> Result<Value>;

    /// PUT a full user body (id included) to the user resource
    async fn update_user(&self, id: i64, user: &User) -> Result<Value>;

    /// DELETE a user
    async fn delete_user(&self, id: i64) -> Result<Value>;

    /// GET the full course list, embedded enrollment links included
    async fn fetch_courses(&self) -> Result<Value>;

    /// POST a new course
    async fn create_course(&self, course: &Course) -> Result<Value>;

    /// PUT a full course body (id included) to the course resource
    async fn update_course(&self, id: i64, course: &Course) -> Result<Value>;

    /// DELETE a course
    async fn delete_course(&self, id: i64) -> Result<Value>;

    /// Enroll a user by POSTing the full user JSON to the course
    /// resource; the upstream has no dedicated enrollment endpoint
    async fn enroll_user(&self, curso_id: i64, user: &User) -> Result<Value>;

    /// DELETE one enrollment link
    async fn remove_enrollment(&self, curso_id: i64, usuario_id: i64) -> Result<Value>;
}
