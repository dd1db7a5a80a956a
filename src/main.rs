use dep_manifest::adapters::outbound::console::StderrProgressReporter;
use dep_manifest::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, StdoutPresenter,
};
use dep_manifest::application::dto::ManifestRequest;
use dep_manifest::application::use_cases::GenerateManifestUseCase;
use dep_manifest::cli::Args;
use dep_manifest::ports::outbound::OutputPresenter;
use dep_manifest::repository::{self, RepositoryInfo};
use dep_manifest::shared::error::ExitCode;
use dep_manifest::shared::Result;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    // Repository metadata for CI reporting (markdown header)
    let repository_info =
        RepositoryInfo::detect(args.git_remote_url.as_deref(), args.git_ref.as_deref());
    if let Some(info) = &repository_info {
        match info.tag() {
            Some(tag) => eprintln!("📦 Repository: {} (tag {})", info.slug(), tag),
            None => eprintln!("📦 Repository: {}", info.slug()),
        }
    }

    let source_location = resolve_source_location(&args);

    let use_case = GenerateManifestUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());

    let request = ManifestRequest::new(args.graph.clone(), args.name.clone(), source_location);
    let response = use_case.execute(request)?;

    eprintln!("{}", args.format.progress_message());

    let formatter = args.format.create_formatter(repository_info);
    let formatted_output = formatter.format(&response.manifest)?;

    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = args.output.clone() {
        Box::new(FileSystemWriter::new(output_path))
    } else {
        Box::new(StdoutPresenter::new())
    };

    presenter.present(&formatted_output)?;

    Ok(())
}

/// Resolves the source-location override from the CLI arguments.
///
/// When a source root is given, the build file path is relativized
/// against it, matching how manifests reference build files from the
/// repository toplevel.
fn resolve_source_location(args: &Args) -> Option<String> {
    let source_location = args.source_location.as_ref()?;

    match &args.source_root {
        Some(source_root) => Some(repository::relative_source_location(
            source_location.as_ref(),
            source_root,
        )),
        None => Some(source_location.clone()),
    }
}
