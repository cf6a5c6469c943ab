#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Structured REST API errors as data
//!
//! A small immutable error value (message, status, kind tag, optional
//! causes) with constructors for the common HTTP error classes and a
//! fixed JSON wire encoding. An outer HTTP layer is expected to set
//! the response status from [`RestErr::status`] and write the JSON
//! encoding as the body; this crate performs no I/O itself.

mod error;
mod types;

pub use error::{ParseError, RestErr};
pub use types::{RestError, kind};
