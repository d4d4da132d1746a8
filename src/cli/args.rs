//! CLI argument parsing

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Summarize a Python codebase as Mermaid diagrams
#[derive(Parser, Debug)]
#[command(name = "codesketch")]
#[command(about = "Summarize a Python codebase as Mermaid diagrams")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Verbosity requested on the command line
    pub fn verbosity(&self) -> u8 {
        match self.command {
            Command::Analyze { verbose, .. } => verbose,
            Command::Version => 0,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a local directory or a repository URL
    Analyze {
        /// Directory path or repository URL
        source: String,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (markdown, json)
        #[arg(long, value_parser = ["markdown", "json"])]
        format: Option<String>,

        /// Max directory depth collected for the file tree
        #[arg(long)]
        depth: Option<usize>,

        /// Levels of the file tree drawn in the diagram
        #[arg(long)]
        diagram_depth: Option<usize>,

        /// Skip diagram generation
        #[arg(long)]
        no_diagrams: bool,

        /// Keep the cloned repository on disk
        #[arg(long)]
        keep_clone: bool,

        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Verbose output (repeat for more)
        #[arg(short, long, action = ArgAction::Count)]
        verbose: u8,
    },

    /// Show version information
    Version,
}
