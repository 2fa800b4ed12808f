//! TypeScript source parsing and declaration discovery

mod locator;
mod ts_parser;
pub mod utils;

pub use locator::{DeclarationSite, find_declaration};
pub use ts_parser::{SourceTree, TsParser};
pub use utils::node_text;
