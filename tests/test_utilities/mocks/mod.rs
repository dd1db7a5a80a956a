pub mod mock_graph_reader;
pub mod mock_progress_reporter;

pub use mock_graph_reader::MockGraphReader;
pub use mock_progress_reporter::MockProgressReporter;
