// Shared utilities

pub mod constants;
pub mod storage;
pub mod text;
pub mod validation;

pub use constants::*;
pub use storage::{load_json, save_json, KeyValueStore, LocalStore, MemoryStore};
pub use text::{extract_file_name, matches_search};
pub use validation::{validate_email, validate_login, validate_registration};
