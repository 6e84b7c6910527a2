pub mod format;
pub mod url_validator;

pub use format::{DATE_FORMAT, format_local, format_timestamp, truncate_url};
pub use url_validator::validate_target_url;
