/// Entity identifiers are opaque strings (time-ordered UUIDs in practice).
pub type EntityId = String;

/// User identifiers as carried in the session token.
pub type UserId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
