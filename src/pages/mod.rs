//! Page documents, their loading policies and the page loader.

mod document;
mod loader;
mod page;

pub use document::*;
pub use loader::{parse, LoadedPage, PageLoader};
pub use page::{MissingPolicy, Page, ViolationPolicy};
