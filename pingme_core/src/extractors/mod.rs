pub mod json;

pub use json::StrictJson;
