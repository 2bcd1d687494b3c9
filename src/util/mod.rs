//! Utility functions for common operations.
//!
//! - **URL validation**: checks a post image URL before it is opened
//! - **Text processing**: Unicode-aware width, truncation, wrapping and
//!   control-character stripping for terminal output
//!
//! # Examples
//!
//! ```
//! use trekgram::util::{display_width, truncate_to_width, validate_url};
//!
//! let url = validate_url("https://images.unsplash.com/photo.jpg").unwrap();
//! let width = display_width("Nandi Hills");
//! let short = truncate_to_width("Snowy trails of Hampta Pass", 12);
//! ```

mod text;
mod url_validator;

pub use text::{display_width, strip_control_chars, truncate_to_width, wrap_to_width};
pub use url_validator::{validate_url, validate_url_for_open, UrlValidationError};
