/// localStorage key holding the serialized [`Session`](crate::models::Session).
pub const STORAGE_KEY_SESSION: &str = "user";

/// localStorage key holding the light/dark preference.
pub const STORAGE_KEY_THEME: &str = "campusMaterials_theme";

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

pub const UPLOAD_UNDER_REVIEW_MESSAGE: &str =
    "Your uploaded material is under revision. Once approved, it will be available on the website.";
