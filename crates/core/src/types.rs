/// Project identifiers are UUIDv4, assigned once at creation.
pub type ProjectId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
