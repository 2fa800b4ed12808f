//! Embedded artifact templates and rendering

mod render;
mod sets;

pub use render::{TemplateContext, render_set};
pub use sets::{TemplateFile, template_set};
