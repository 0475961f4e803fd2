//! XML layer: document model, parser, escaping and pretty printing

pub mod cursor;
pub mod model;
pub mod parser;
pub mod writer;

pub use cursor::Cursor;
pub use model::{Content, Document, Element};
pub use parser::Parser;
pub use writer::{escape_text, pretty};
