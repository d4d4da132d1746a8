// Per-file structure extracted from Python source
//
// These records keep the raw source text of each top-level item so that
// renderers can run their own text heuristics over it.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A top-level function or class definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Declaration {
    /// Identifier of the definition
    pub name: String,
    /// 1-based starting line
    pub line: usize,
    /// Exact source text spanned by the definition node
    pub source_text: String,
}

impl Declaration {
    pub fn new(name: &str, line: usize, source_text: &str) -> Self {
        Self {
            name: name.to_string(),
            line,
            source_text: source_text.to_string(),
        }
    }

    /// Check if this is a private name (starts with _)
    pub fn is_private(&self) -> bool {
        self.name.starts_with('_')
    }
}

/// An `import x` or `from x import y` statement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportRecord {
    /// 1-based starting line
    pub line: usize,
    /// Exact source text of the statement
    pub source_text: String,
}

impl ImportRecord {
    pub fn new(line: usize, source_text: &str) -> Self {
        Self {
            line,
            source_text: source_text.to_string(),
        }
    }
}

/// Everything extracted from one source file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileAnalysis {
    pub file_path: PathBuf,
    pub functions: Vec<Declaration>,
    pub classes: Vec<Declaration>,
    pub imports: Vec<ImportRecord>,
    /// Read or parse failures for this file only
    pub errors: Vec<String>,
}

impl FileAnalysis {
    /// Create an empty analysis for a file
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            functions: Vec::new(),
            classes: Vec::new(),
            imports: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Check if the file failed to read or parse
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if nothing was extracted
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.classes.is_empty() && self.imports.is_empty()
    }
}
