use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EntryKind {
    Work,
    Meeting,
    Break,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Work => "work",
            EntryKind::Meeting => "meeting",
            EntryKind::Break => "break",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.as_str()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "work" => Some(EntryKind::Work),
            "meeting" => Some(EntryKind::Meeting),
            "break" => Some(EntryKind::Break),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        EntryKind::from_db_str(&code.to_lowercase())
    }
}
