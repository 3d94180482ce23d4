/// Error codes shared across the API boundary.
pub mod api_error;
/// Embed colors shared across notifications and command replies.
pub mod embed;
/// Shared formatting helpers (mentions, case labels, punishment names).
pub mod formatting;
/// Pure parser helpers.
pub mod parse;
/// Permission helper utilities.
pub mod permissions;
/// Shared time helpers.
pub mod time;

pub use api_error::ApiError;
