//! Appender and transport implementations

#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "file")]
pub mod file;
#[cfg(feature = "http")]
pub mod http;
#[cfg(feature = "file")]
pub mod json;

#[cfg(feature = "console")]
pub use console::ConsoleAppender;
#[cfg(feature = "file")]
pub use file::FileAppender;
#[cfg(feature = "http")]
pub use http::{HttpTransport, APP_VERSION_HEADER};
#[cfg(feature = "file")]
pub use json::JsonAppender;

pub use crate::core::{Appender, LogTransport};
