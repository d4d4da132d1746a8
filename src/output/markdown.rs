// Markdown document assembly

use crate::analysis::CodebaseAnalysis;
use crate::config::Config;
use crate::output::diagrams::*;

/// README lines quoted in the overview
const README_EXCERPT_LINES: usize = 20;
/// Parse failures listed before summarizing the rest
const MAX_LISTED_ERRORS: usize = 10;

/// What goes into a generated document
#[derive(Debug, Clone)]
pub struct DocumentOptions {
    pub title: String,
    pub diagrams: bool,
    pub tree_depth: usize,
}

impl DocumentOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            diagrams: true,
            tree_depth: DEFAULT_DIAGRAM_DEPTH,
        }
    }

    /// Take diagram settings from the config
    pub fn from_config(title: impl Into<String>, config: &Config) -> Self {
        Self {
            title: title.into(),
            diagrams: config.diagrams.enabled,
            tree_depth: config.diagrams.tree_depth,
        }
    }
}

/// Render an analysis as a Markdown document
pub fn render_markdown(
    analysis: &CodebaseAnalysis,
    readme: Option<&str>,
    options: &DocumentOptions,
) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", options.title));

    md.push_str("## Project Statistics\n\n");
    md.push_str(&format!("- **Files:** {}\n", analysis.total_files));
    md.push_str(&format!("- **Python files:** {}\n", analysis.python_files.len()));
    md.push_str(&format!("- **Functions:** {}\n", analysis.total_functions));
    md.push_str(&format!("- **Classes:** {}\n", analysis.total_classes));
    md.push('\n');

    if let Some(text) = readme {
        md.push_str("## Overview\n\n");
        for line in text.lines().take(README_EXCERPT_LINES) {
            if line.trim().is_empty() {
                md.push_str(">\n");
            } else {
                md.push_str(&format!("> {}\n", line));
            }
        }
        md.push('\n');
    }

    if options.diagrams {
        let modules = analysis.module_names();
        if !modules.is_empty() {
            md.push_str("## Architecture\n\n");
            md.push_str(&architecture_diagram(&modules));
            md.push('\n');
        }

        md.push_str("## File Structure\n\n");
        md.push_str(&tree_diagram(&analysis.file_tree, options.tree_depth));
        md.push('\n');

        let classes = analysis.all_classes();
        if !classes.is_empty() {
            md.push_str("## Classes\n\n");
            md.push_str(&class_hierarchy_diagram(&classes));
            md.push('\n');
        }

        let functions = analysis.all_functions();
        if !functions.is_empty() {
            md.push_str("## Functions\n\n");
            md.push_str(&function_call_diagram(&functions));
            md.push('\n');
        }
    }

    let failed: Vec<_> = analysis.files_with_errors().collect();
    if !failed.is_empty() {
        md.push_str(&format!("## Parse Errors ({})\n\n", failed.len()));
        for file in failed.iter().take(MAX_LISTED_ERRORS) {
            let relative = file
                .file_path
                .strip_prefix(&analysis.root)
                .unwrap_or(&file.file_path);
            md.push_str(&format!("- `{}`: {}\n", relative.display(), file.errors.join("; ")));
        }
        if failed.len() > MAX_LISTED_ERRORS {
            md.push_str(&format!("- ... and {} more\n", failed.len() - MAX_LISTED_ERRORS));
        }
        md.push('\n');
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{NodeKind, TreeNode};
    use crate::parser::{Declaration, FileAnalysis};
    use std::path::PathBuf;

    fn sample() -> CodebaseAnalysis {
        let root = PathBuf::from("/project");
        let mut good = FileAnalysis::new(root.join("pkg").join("core.py"));
        good.functions.push(Declaration::new("main", 1, "def main(): pass"));
        good.classes
            .push(Declaration::new("Engine", 3, "class Engine:\n    def start(self): pass"));
        let mut bad = FileAnalysis::new(root.join("broken.py"));
        bad.errors.push("IO error: stream did not contain valid UTF-8".to_string());

        CodebaseAnalysis {
            file_tree: vec![TreeNode {
                name: "pkg".to_string(),
                path: root.join("pkg"),
                kind: NodeKind::Directory,
                children: Vec::new(),
            }],
            root,
            python_files: vec![bad, good],
            total_files: 3,
            total_functions: 1,
            total_classes: 1,
        }
    }

    #[test]
    fn test_render_sections() {
        let md = render_markdown(&sample(), None, &DocumentOptions::new("demo"));

        assert!(md.starts_with("# demo\n\n## Project Statistics\n"));
        assert!(md.contains("- **Files:** 3\n"));
        assert!(md.contains("- **Python files:** 2\n"));
        assert!(md.contains("## Architecture\n\n```mermaid\ngraph LR\n"));
        assert!(md.contains("module_1[\"pkg.core\"]"));
        assert!(md.contains("## File Structure\n\n```mermaid\ngraph TD\n"));
        assert!(md.contains("        +start()\n"));
        assert!(md.contains("main[\"main\"]"));
        assert!(!md.contains("## Overview"));
    }

    #[test]
    fn test_render_parse_errors_relative() {
        let md = render_markdown(&sample(), None, &DocumentOptions::new("demo"));
        assert!(md.contains("## Parse Errors (1)\n"));
        assert!(md.contains("- `broken.py`: IO error"));
    }

    #[test]
    fn test_render_readme_excerpt() {
        let readme: String = (0..30).map(|i| format!("line {}\n", i)).collect();
        let md = render_markdown(&sample(), Some(&readme), &DocumentOptions::new("demo"));
        assert!(md.contains("## Overview\n\n> line 0\n"));
        assert!(md.contains("> line 19\n"));
        assert!(!md.contains("line 20"));
    }

    #[test]
    fn test_render_without_diagrams() {
        let mut options = DocumentOptions::new("demo");
        options.diagrams = false;
        let md = render_markdown(&sample(), None, &options);
        assert!(!md.contains("```mermaid"));
        assert!(md.contains("## Project Statistics"));
    }

    #[test]
    fn test_options_from_config() {
        let mut config = Config::default();
        config.diagrams.enabled = false;
        config.diagrams.tree_depth = 5;
        let options = DocumentOptions::from_config("x", &config);
        assert!(!options.diagrams);
        assert_eq!(options.tree_depth, 5);
    }

    #[test]
    fn test_render_is_deterministic() {
        let analysis = sample();
        let options = DocumentOptions::new("demo");
        assert_eq!(
            render_markdown(&analysis, Some("# hi"), &options),
            render_markdown(&analysis, Some("# hi"), &options)
        );
    }
}
