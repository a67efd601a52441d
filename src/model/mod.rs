// File: ./src/model/mod.rs
pub mod dates;
pub mod item;
pub mod matcher;
pub mod parser;
pub mod section;

pub use item::{ALL_MEMBERS, Category, LineOutcome, Person, SkipReason, TaskRecord};
