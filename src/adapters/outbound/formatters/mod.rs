pub mod github_json_formatter;
pub mod markdown_formatter;

pub use github_json_formatter::GithubJsonFormatter;
pub use markdown_formatter::MarkdownFormatter;
