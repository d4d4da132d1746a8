// Parser module for extracting top-level structure from source files

pub mod ast;
mod python;

pub use ast::*;
pub use python::PythonParser;

/// Extension of files handed to the parser
pub const SOURCE_EXTENSION: &str = ".py";
