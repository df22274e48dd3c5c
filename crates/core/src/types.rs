/// All primary keys are SQLite INTEGER PRIMARY KEY (64-bit rowid).
pub type DbId = i64;

/// Identity value of a record that has not been inserted yet.
pub const UNSAVED_ID: DbId = 0;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Wall-clock date-time as stored in the database, without zone.
pub type LocalDateTime = chrono::NaiveDateTime;
