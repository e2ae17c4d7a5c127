//! examdesk-report: HTML views.
//!
//! Every page is a self-contained HTML document with its CSS and JS inlined.

pub mod html;
pub mod wrapper;

pub use html::{render_index, render_results};
pub use wrapper::render_exam;
