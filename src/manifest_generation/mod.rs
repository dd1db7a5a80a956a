/// Manifest generation domain
///
/// Pure domain models and services for turning resolved dependency
/// graphs into dependency manifests. No I/O lives here.
pub mod domain;
pub mod services;
