//! examdesk-core: Exam catalog, session state, and grading.
//!
//! This crate defines the data model and the request-independent logic that
//! the examdesk server builds on: reading the exam directory, the per-browser
//! session state machine, and the placeholder grader.

pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod grader;
pub mod model;
pub mod session;
