/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse a raw path segment into a [`DbId`].
///
/// Returns `None` for blank input so callers can tell a missing identifier
/// apart from a malformed one.
pub fn parse_db_id(raw: &str) -> Option<Result<DbId, std::num::ParseIntError>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.parse())
}
