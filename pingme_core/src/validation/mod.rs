//! Request gates applied by handlers before any business logic

pub mod validators;

pub use validators::{ensure_json_content_type, ensure_method, ensure_non_empty};
