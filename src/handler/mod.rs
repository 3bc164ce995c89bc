pub mod users;
pub mod wallet;

use crate::error::{ErrorMessage, HttpError};

/// Path ids are plain integers; anything else is a 400 with `message`.
pub(crate) fn parse_id(raw: &str, message: ErrorMessage) -> Result<i32, HttpError> {
    raw.parse::<i32>()
        .map_err(|_| HttpError::bad_request(message.to_string()))
}
