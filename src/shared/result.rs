/// Common result type used throughout the application
pub type Result<T> = anyhow::Result<T>;
