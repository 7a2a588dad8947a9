use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: i64,
    pub name: String, // unique
    pub description: String,
    pub is_active: bool,
    pub client_user_id: Option<i64>,
    pub created_at: NaiveDateTime,
}
