// Crate root library declaration and module exports.
pub mod config;
pub mod engine;
pub mod model;
pub mod prompt;
