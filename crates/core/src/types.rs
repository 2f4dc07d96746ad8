/// All entity primary keys are UUIDv4, minted app-side at creation.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
