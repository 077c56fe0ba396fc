use std::time::SystemTime;

use uuid::Uuid;

/// Identity and timestamps shared by game entities, embedded by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordMetadata {
    id: Uuid,
    created_at: SystemTime,
    updated_at: Option<SystemTime>,
}

impl RecordMetadata {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: SystemTime::now(),
            updated_at: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<SystemTime> {
        self.updated_at
    }

    pub fn touch(&mut self) {
        self.updated_at = Some(SystemTime::now());
    }
}

impl Default for RecordMetadata {
    fn default() -> Self {
        Self::new()
    }
}
