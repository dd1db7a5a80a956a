/// Ports layer - Interface definitions
///
/// Contains the port (interface) definitions that decouple the
/// application core from infrastructure concerns.
pub mod outbound;
