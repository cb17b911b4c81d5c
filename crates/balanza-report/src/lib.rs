//! Presentation layer for balanza.
//!
//! Everything between a user and the ratio engine lives here:
//! - [`form`]: form state with calculate and clear actions
//! - [`currency`]: recognised currency codes and their display symbols
//! - [`format`]: number grouping, ratio and date formatting
//! - [`report`]: the report model shared by all output formats
//! - [`render`]: text, HTML and JSON renderers behind [`ReportRenderer`]
//!
//! # Example
//!
//! ```
//! use balanza_report::{FormState, OutputFormat, renderer_for};
//! use balanza_traits::{Date, Field};
//!
//! let mut form = FormState::new(Date::from_ymd_opt(2026, 10, 18).unwrap());
//! for (field, value) in Field::ALL.into_iter().zip(["150", "100", "30", "500", "250", "100"]) {
//!     form.set_field(field, value);
//! }
//! form.calculate().unwrap();
//!
//! let report = form.report().unwrap();
//! let text = renderer_for(OutputFormat::Text).render(&report).unwrap();
//! assert!(text.contains("Current Ratio"));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod currency;
pub mod form;
pub mod format;
pub mod render;
pub mod report;

// Re-export key types
pub use currency::{Currency, currency_symbol};
pub use form::FormState;
pub use render::{
    HtmlRenderer, JsonRenderer, OutputFormat, ReportRenderer, TextRenderer, renderer_for,
};
pub use report::Report;
