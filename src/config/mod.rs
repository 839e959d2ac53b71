//! Configuration and path management for divvy

pub mod paths;

pub use paths::DivvyPaths;
