use clap::Parser;
use std::path::PathBuf;

use crate::adapters::outbound::formatters::{GithubJsonFormatter, MarkdownFormatter};
use crate::ports::outbound::ManifestFormatter;
use crate::repository::RepositoryInfo;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json' or 'markdown'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `repository` - Repository metadata shown by report-style formats
    ///
    /// # Returns
    /// A boxed ManifestFormatter trait object appropriate for this format
    pub fn create_formatter(&self, repository: Option<RepositoryInfo>) -> Box<dyn ManifestFormatter> {
        match self {
            OutputFormat::Json => Box::new(GithubJsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new().with_repository(repository)),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(&self) -> &'static str {
        match self {
            OutputFormat::Json => "📝 Generating dependency-submission JSON output...",
            OutputFormat::Markdown => "📝 Generating Markdown report output...",
        }
    }
}

/// Generate dependency submission manifests from resolved dependency graphs
#[derive(Parser, Debug)]
#[command(name = "dep-manifest")]
#[command(version)]
#[command(about = "Generate dependency submission manifests from resolved dependency graphs", long_about = None)]
pub struct Args {
    /// Path to the resolved-graph JSON document exported by the build
    #[arg(value_name = "GRAPH")]
    pub graph: PathBuf,

    /// Output format: json or markdown
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Module name recorded in the manifest (overrides the graph document)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Build file path recorded as the manifest's source location
    #[arg(short, long)]
    pub source_location: Option<String>,

    /// Repository toplevel the source location is relativized against
    #[arg(long, requires = "source_location")]
    pub source_root: Option<PathBuf>,

    /// Git remote URL used to derive the repository slug for reporting
    #[arg(long)]
    pub git_remote_url: Option<String>,

    /// Fully-qualified git ref (e.g. refs/tags/v1.0) used to derive the tag
    #[arg(long)]
    pub git_ref: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
