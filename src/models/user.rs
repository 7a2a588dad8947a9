use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,               // ⇔ users.email (TEXT, UNIQUE)
    pub is_admin: bool,              // ⇔ users.is_admin (INT 0/1)
    pub is_client: bool,             // ⇔ users.is_client (INT 0/1)
    pub is_active: bool,             // ⇔ users.is_active (INT 0/1)
    pub created_at: NaiveDateTime,   // ⇔ users.created_at (TEXT "YYYY-MM-DD HH:MM:SS")
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn created_at_str(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
