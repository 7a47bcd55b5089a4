//! Core of the homework tracker.
//!
//! - `assignment`, `class`, `document`: the stored data model
//! - `date`: calendar helpers and recurrence advancement
//! - `lifecycle`: create/edit/complete rules for classes and assignments
//! - `reset`: purging finished work and rolling recurring work forward
//! - `store`: owns the document and persists it after every change

pub mod assignment;
pub mod class;
pub mod clock;
pub mod config;
pub mod constants;
pub mod date;
pub mod document;
pub mod error;
pub mod lifecycle;
pub mod reset;
pub mod storage;
pub mod store;

pub use assignment::{Assignment, RecurringSchedule};
pub use class::{Class, Progress, StickyColor};
pub use date::Frequency;
pub use document::Document;
pub use error::{HomeworkError, HomeworkResult};
pub use store::Store;
