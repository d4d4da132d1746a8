// Python structure extractor using tree-sitter

use crate::error::{Error, Result};
use crate::parser::ast::*;
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Parser};

/// Parser for Python source files
///
/// Owns its tree-sitter parser; create one per thread of work and pass it
/// to whatever needs to extract files.
pub struct PythonParser {
    parser: Parser,
}

impl PythonParser {
    /// Create a new Python parser
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        let language = tree_sitter_python::language();
        parser
            .set_language(&language)
            .map_err(|e| Error::parser(format!("Failed to set Python language: {}", e)))?;
        Ok(Self { parser })
    }

    /// Parse a Python file
    ///
    /// Never fails: read and parse failures are recorded in the returned
    /// record's `errors`, alongside whatever was extracted before them.
    pub fn parse_file(&mut self, path: &Path) -> FileAnalysis {
        let mut file = FileAnalysis::new(path.to_path_buf());

        let result = std::fs::read_to_string(path)
            .map_err(Error::from)
            .and_then(|source| self.extract(&source, &mut file));

        if let Err(e) = result {
            tracing::debug!("Failed to parse {}: {}", path.display(), e);
            file.errors.push(e.to_string());
        }

        file
    }

    /// Parse Python source code held in memory
    pub fn parse_source(&mut self, source: &str, path: PathBuf) -> FileAnalysis {
        let mut file = FileAnalysis::new(path);
        if let Err(e) = self.extract(source, &mut file) {
            file.errors.push(e.to_string());
        }
        file
    }

    fn extract(&mut self, source: &str, file: &mut FileAnalysis) -> Result<()> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| Error::parser("Failed to parse source"))?;

        let root = tree.root_node();
        let bytes = source.as_bytes();

        // Only direct children of the module; nested definitions stay out
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            match child.kind() {
                "function_definition" => {
                    if let Some(decl) = parse_declaration(&child, bytes) {
                        file.functions.push(decl);
                    }
                }
                "class_definition" => {
                    if let Some(decl) = parse_declaration(&child, bytes) {
                        file.classes.push(decl);
                    }
                }
                "import_statement" | "import_from_statement" => {
                    let text = child
                        .utf8_text(bytes)
                        .map_err(|e| Error::parser(e.to_string()))?;
                    file.imports.push(ImportRecord::new(start_line(&child), text));
                }
                _ => {}
            }
        }

        Ok(())
    }
}

/// 1-based line where a node starts
fn start_line(node: &Node) -> usize {
    node.start_position().row + 1
}

/// Build a declaration from a definition node, named by its first identifier child
fn parse_declaration(node: &Node, source: &[u8]) -> Option<Declaration> {
    let mut cursor = node.walk();
    let name_node = node
        .children(&mut cursor)
        .find(|child| child.kind() == "identifier")?;

    let name = name_node.utf8_text(source).ok()?;
    let text = node.utf8_text(source).ok()?;

    Some(Declaration::new(name, start_line(node), text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(source: &str) -> FileAnalysis {
        let mut parser = PythonParser::new().unwrap();
        parser.parse_source(source, PathBuf::from("test.py"))
    }

    #[test]
    fn test_parser_new() {
        let parser = PythonParser::new();
        assert!(parser.is_ok());
    }

    #[test]
    fn test_empty_file() {
        let file = parse("");
        assert!(file.is_empty());
        assert!(!file.has_errors());
    }

    #[test]
    fn test_simple_function() {
        let file = parse("def hello():\n    return 1\n");
        assert_eq!(file.functions.len(), 1);
        assert_eq!(file.functions[0].name, "hello");
        assert_eq!(file.functions[0].line, 1);
        assert_eq!(file.functions[0].source_text, "def hello():\n    return 1");
    }

    #[test]
    fn test_async_function() {
        let file = parse("async def fetch(url):\n    pass\n");
        assert_eq!(file.functions.len(), 1);
        assert_eq!(file.functions[0].name, "fetch");
    }

    #[test]
    fn test_class_keeps_source_text() {
        let source = "import os\n\nclass Widget(Base):\n    def draw(self):\n        pass\n";
        let file = parse(source);
        assert_eq!(file.classes.len(), 1);
        let class = &file.classes[0];
        assert_eq!(class.name, "Widget");
        assert_eq!(class.line, 3);
        assert!(class.source_text.starts_with("class Widget(Base):"));
        assert!(class.source_text.contains("def draw(self):"));
    }

    #[test]
    fn test_methods_are_not_functions() {
        let file = parse("class A:\n    def method(self):\n        pass\n");
        assert_eq!(file.classes.len(), 1);
        assert!(file.functions.is_empty());
    }

    #[test]
    fn test_nested_functions_not_extracted() {
        let file = parse("def outer():\n    def inner():\n        pass\n    return inner\n");
        assert_eq!(file.functions.len(), 1);
        assert_eq!(file.functions[0].name, "outer");
    }

    #[test]
    fn test_both_import_forms() {
        let file = parse("import os\nfrom typing import List, Dict\nimport numpy as np\n");
        assert_eq!(file.imports.len(), 3);
        assert_eq!(file.imports[0].source_text, "import os");
        assert_eq!(file.imports[1].line, 2);
        assert_eq!(file.imports[1].source_text, "from typing import List, Dict");
        assert_eq!(file.imports[2].source_text, "import numpy as np");
    }

    #[test]
    fn test_imports_inside_functions_ignored() {
        let file = parse("def lazy():\n    import json\n    return json\n");
        assert!(file.imports.is_empty());
        assert_eq!(file.functions.len(), 1);
    }

    #[test]
    fn test_decorated_definitions_are_skipped() {
        let file = parse("@cache\ndef cached():\n    pass\n\ndef plain():\n    pass\n");
        assert_eq!(file.functions.len(), 1);
        assert_eq!(file.functions[0].name, "plain");
        assert_eq!(file.functions[0].line, 5);
    }

    #[test]
    fn test_line_numbers_with_unicode() {
        let file = parse("# héllo wörld\n\ndef greet():\n    return \"ünïcode\"\n");
        assert_eq!(file.functions[0].line, 3);
        assert!(file.functions[0].source_text.contains("ünïcode"));
    }

    #[test]
    fn test_parse_file_reads_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mod.py");
        fs::write(&path, "class A:\n    pass\n\ndef f():\n    pass\n").unwrap();

        let mut parser = PythonParser::new().unwrap();
        let file = parser.parse_file(&path);
        assert_eq!(file.file_path, path);
        assert_eq!(file.classes.len(), 1);
        assert_eq!(file.functions.len(), 1);
        assert!(!file.has_errors());
    }

    #[test]
    fn test_parse_file_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.py");
        fs::write(&path, [0x64, 0x65, 0x66, 0x20, 0xff, 0xfe, 0x28, 0x29]).unwrap();

        let mut parser = PythonParser::new().unwrap();
        let file = parser.parse_file(&path);
        assert!(file.has_errors());
        assert!(file.is_empty());
    }

    #[test]
    fn test_parse_file_missing() {
        let mut parser = PythonParser::new().unwrap();
        let file = parser.parse_file(Path::new("/nonexistent/missing.py"));
        assert_eq!(file.errors.len(), 1);
        assert!(file.errors[0].contains("IO error"));
    }

    #[test]
    fn test_parser_reusable_across_files() {
        let mut parser = PythonParser::new().unwrap();
        let a = parser.parse_source("def a(): pass", PathBuf::from("a.py"));
        let b = parser.parse_source("class B: pass", PathBuf::from("b.py"));
        assert_eq!(a.functions[0].name, "a");
        assert_eq!(b.classes[0].name, "B");
        assert!(b.functions.is_empty());
    }
}
