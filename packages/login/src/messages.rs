//! User-facing text. The form ships in a single locale.

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";

pub const INVALID_CREDENTIALS: &str = "Invalid login details. Please try again.";
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong. Please try again later.";
pub const UNEXPECTED_ERROR: &str = "Unexpected error. Please try again.";

pub const SESSION_REQUIRED: &str = "You need to log in to use this site";

pub const TITLE: &str = "Log in";
pub const SUBMIT_IDLE: &str = "Log in";
pub const SUBMIT_BUSY: &str = "Logging in...";
