/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod graph_reader;
pub mod manifest_formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use graph_reader::{GraphDocument, GraphNode, GraphReader, ResolvedClasspaths};
pub use manifest_formatter::ManifestFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
