//! Typed field lookups on a single track record.
//!
//! Each lookup either yields the value or says why it could not; callers
//! decide whether that means skipping the record.

use plist::Value;

use crate::error::ExtractError;

pub const NAME: &str = "Name";
pub const ALBUM_RATING: &str = "Album Rating";
pub const TOTAL_TIME: &str = "Total Time";

fn field<'a>(record: &'a Value, key: &'static str) -> Result<&'a Value, ExtractError> {
    record
        .as_dictionary()
        .ok_or(ExtractError::NotARecord)?
        .get(key)
        .ok_or(ExtractError::Missing(key))
}

fn unsigned(record: &Value, key: &'static str) -> Result<u64, ExtractError> {
    field(record, key)?
        .as_unsigned_integer()
        .ok_or(ExtractError::WrongType(key))
}

/// Track title (`Name`).
pub fn name(record: &Value) -> Result<&str, ExtractError> {
    field(record, NAME)?
        .as_string()
        .ok_or(ExtractError::WrongType(NAME))
}

/// Album rating on the 0-100 scale (`Album Rating`).
pub fn album_rating(record: &Value) -> Result<u64, ExtractError> {
    unsigned(record, ALBUM_RATING)
}

/// Track length in milliseconds (`Total Time`).
pub fn total_time(record: &Value) -> Result<u64, ExtractError> {
    unsigned(record, TOTAL_TIME)
}
