//! Page controllers. One module per view; every controller is generic
//! over `C: RequestApi`, so the network boundary can be mocked in
//! tests. Each page owns its own state record; nothing is shared
//! between pages.

use crate::error::Result;
use crate::interface::RequestApi;
use crate::model::structs::{Course, User};

pub mod courses;
pub mod enrollments;
pub mod users;

pub(crate) async fn fetch_user_list<C: RequestApi>(client: &C) -> Result<Vec<User>> {
    let value = client.fetch_users().await?;
    Ok(serde_json::from_value(value)?)
}

pub(crate) async fn fetch_course_list<C: RequestApi>(client: &C) -> Result<Vec<Course>> {
    let value = client.fetch_courses().await?;
    Ok(serde_json::from_value(value)?)
}
