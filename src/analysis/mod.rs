// Analysis module: file tree, source scan and codebase totals

pub mod ignore;
pub mod tree;

pub use ignore::*;
pub use tree::*;

use crate::config::Config;
use crate::error::Result;
use crate::parser::{Declaration, FileAnalysis, PythonParser, SOURCE_EXTENSION};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// README candidates, checked in order
const README_NAMES: &[&str] = &["README.md", "README.rst", "readme.md", "readme.txt"];

/// Result of analyzing a codebase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodebaseAnalysis {
    /// Directory that was analyzed
    pub root: PathBuf,
    pub file_tree: Vec<TreeNode>,
    pub python_files: Vec<FileAnalysis>,
    /// Every non-ignored file, source or not
    pub total_files: usize,
    pub total_functions: usize,
    pub total_classes: usize,
}

impl CodebaseAnalysis {
    fn empty(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            file_tree: Vec::new(),
            python_files: Vec::new(),
            total_files: 0,
            total_functions: 0,
            total_classes: 0,
        }
    }

    fn add_source_file(&mut self, file: FileAnalysis) {
        self.total_functions += file.functions.len();
        self.total_classes += file.classes.len();
        self.python_files.push(file);
    }

    /// All top-level functions, in file order
    pub fn all_functions(&self) -> Vec<Declaration> {
        self.python_files
            .iter()
            .flat_map(|f| f.functions.iter().cloned())
            .collect()
    }

    /// All top-level classes, in file order
    pub fn all_classes(&self) -> Vec<Declaration> {
        self.python_files
            .iter()
            .flat_map(|f| f.classes.iter().cloned())
            .collect()
    }

    /// Dotted module names of the source files, without duplicates
    pub fn module_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for file in &self.python_files {
            let name = path_to_module_name(&file.file_path, &self.root);
            if !name.is_empty() && !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Source files that failed to read or parse
    pub fn files_with_errors(&self) -> impl Iterator<Item = &FileAnalysis> {
        self.python_files.iter().filter(|f| f.has_errors())
    }

    pub fn error_count(&self) -> usize {
        self.files_with_errors().count()
    }
}

/// Walks a directory and extracts every source file it finds
pub struct Analyzer {
    parser: PythonParser,
    max_depth: usize,
    verbose: bool,
}

impl Analyzer {
    /// Create a new analyzer with the given configuration
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_parser(PythonParser::new()?, config))
    }

    /// Create an analyzer around an existing parser
    pub fn with_parser(parser: PythonParser, config: &Config) -> Self {
        Self {
            parser,
            max_depth: config.walk.max_depth,
            verbose: false,
        }
    }

    /// Show a progress spinner while parsing
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Analyze a codebase at the given path
    ///
    /// The source scan and the file tree are independent walks. Neither
    /// fails: unreadable directories are skipped and per-file problems land
    /// in that file's `errors`.
    pub fn analyze(&mut self, root: &Path) -> CodebaseAnalysis {
        let mut analysis = CodebaseAnalysis::empty(root);
        analysis.file_tree = build_tree(root, self.max_depth);

        let progress = if self.verbose {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) =
                ProgressStyle::default_spinner().template("{spinner:.green} {pos} files {msg}")
            {
                pb.set_style(style);
            }
            Some(pb)
        } else {
            None
        };

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
                entry.depth() == 0 || !should_ignore(relative)
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!("Skipping entry: {}", e);
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            analysis.total_files += 1;

            let path = entry.path();
            let is_source = entry
                .file_name()
                .to_str()
                .map_or(false, |name| name.ends_with(SOURCE_EXTENSION));
            if !is_source {
                continue;
            }

            if let Some(ref pb) = progress {
                pb.set_message(entry.file_name().to_string_lossy().to_string());
                pb.inc(1);
            }

            let parsed = self.parser.parse_file(path);
            analysis.add_source_file(parsed);
        }

        if let Some(pb) = progress {
            pb.finish_with_message("parsing complete");
        }

        analysis
    }
}

/// Convert a file path to a dotted Python module name
fn path_to_module_name(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let mut parts: Vec<&str> = relative.iter().filter_map(|s| s.to_str()).collect();

    if let Some(last) = parts.last_mut() {
        if let Some(stem) = last.strip_suffix(SOURCE_EXTENSION) {
            *last = stem;
        }
    }

    // pkg/__init__.py is the package itself
    if parts.last() == Some(&"__init__") {
        parts.pop();
    }

    parts.join(".")
}

/// Read the project README, if there is a readable one
pub fn read_readme(dir: &Path) -> Option<String> {
    README_NAMES
        .iter()
        .map(|name| dir.join(name))
        .filter(|path| path.exists())
        .find_map(|path| std::fs::read_to_string(path).ok())
}
