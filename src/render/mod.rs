//! HTML rendering: section renderers, raw-section dispatch and pages.

mod dispatch;
mod html;
mod page;
mod sections;

pub use dispatch::{dispatch_all, dispatch_value};
pub use html::Markup;
pub use page::render_page;
pub use sections::{render_keyed, render_section};
