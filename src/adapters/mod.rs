/// Adapters layer - Concrete implementations of ports
///
/// Contains the infrastructure adapters that implement the outbound
/// ports (file system, console, output formats).
pub mod outbound;
