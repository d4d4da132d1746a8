//! CLI module for Codesketch

mod args;

pub use args::{Args, Command};

use crate::analysis::{read_readme, Analyzer};
use crate::config::{CliOverrides, Config, OutputFormat};
use crate::error::{Error, Result};
use crate::output::{render_markdown, DocumentOptions};
use crate::repo::{cleanup, repository_name, validate_url, RepoFetcher};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Config file picked up from the working directory
const DEFAULT_CONFIG_FILE: &str = "codesketch.toml";

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();
    init_tracing(args.verbosity());

    match execute(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn execute(args: Args) -> Result<()> {
    match args.command {
        Command::Analyze {
            source,
            output,
            format,
            depth,
            diagram_depth,
            no_diagrams,
            keep_clone,
            config,
            verbose,
        } => {
            let mut cfg = match &config {
                Some(path) => Config::load(path)?,
                None => Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE)),
            };

            cfg.merge_cli(CliOverrides {
                output,
                format,
                depth,
                diagram_depth,
                no_diagrams,
                keep_clone,
            });
            cfg.validate()?;

            let source = Source::resolve(&source)?;
            let root = match &source {
                Source::Local(path) => path.clone(),
                Source::Remote(url) => {
                    println!("Cloning {}...", url);
                    RepoFetcher::new(&cfg.repository).clone_repository(url, None)?
                }
            };

            let result = document(&cfg, &source, &root, verbose > 0);

            if let Source::Remote(_) = source {
                if cfg.repository.keep_clone {
                    println!("Clone kept at: {}", root.display());
                } else if let Err(e) = cleanup(&root) {
                    eprintln!("Warning: {}", e);
                }
            }

            result
        }

        Command::Version => {
            println!("codesketch {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Where the codebase comes from
enum Source {
    Local(PathBuf),
    Remote(String),
}

impl Source {
    fn resolve(source: &str) -> Result<Self> {
        if validate_url(source) {
            return Ok(Source::Remote(source.to_string()));
        }

        if source.contains("://") {
            return Err(Error::InvalidUrl(source.to_string()));
        }

        let path = PathBuf::from(source);
        if !path.is_dir() {
            return Err(Error::PathNotFound(path));
        }
        Ok(Source::Local(path))
    }

    /// Title used when the config does not name the project
    fn title(&self) -> String {
        match self {
            Source::Remote(url) => repository_name(url),
            Source::Local(path) => path
                .canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
                .unwrap_or_else(|| "Project".to_string()),
        }
    }
}

/// Analyze `root` and write the configured output file
fn document(cfg: &Config, source: &Source, root: &Path, verbose: bool) -> Result<()> {
    let mut analyzer = Analyzer::new(cfg)?.with_verbose(verbose);

    println!("Analyzing codebase...");
    let analysis = analyzer.analyze(root);

    println!(
        "Analysis complete: {} files, {} classes, {} functions",
        analysis.total_files, analysis.total_classes, analysis.total_functions
    );

    let errors = analysis.error_count();
    if errors > 0 {
        println!("Files with parse errors: {}", errors);
    }

    std::fs::create_dir_all(&cfg.output.directory)?;
    let output_path = cfg.output.directory.join(cfg.output.format.file_name());

    match cfg.output.format {
        OutputFormat::Markdown => {
            let title = cfg.project.name.clone().unwrap_or_else(|| source.title());
            let options = DocumentOptions::from_config(title, cfg);
            let readme = read_readme(root);
            let md = render_markdown(&analysis, readme.as_deref(), &options);
            std::fs::write(&output_path, md)?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&analysis)?;
            std::fs::write(&output_path, json)?;
        }
    }

    println!("Written to: {}", output_path.display());
    Ok(())
}
