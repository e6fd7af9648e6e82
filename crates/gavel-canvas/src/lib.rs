//! Canvas LMS access for GAVEL.
//!
//! The rest of the workspace depends only on the [`CanvasClient`] trait, which
//! exposes a single capability: fetch a course and its module listing by
//! numeric course id.
//!
//! # Implementations
//!
//! - [`HttpCanvasClient`] talks to a Canvas instance over its REST API using a
//!   bearer token. Module listings follow `Link: rel="next"` pagination.
//! - [`UnconfiguredCanvasClient`] stands in when no base URL or token is
//!   configured; every call fails with [`CanvasError::NotConfigured`].
//! - [`StaticCanvasClient`] serves a fixed course, for tests and offline use.
//!
//! # Example
//!
//! ```no_run
//! use gavel_canvas::{CanvasApiConfig, CanvasClient, HttpCanvasClient};
//!
//! fn show() -> gavel_canvas::Result<()> {
//!     let config = CanvasApiConfig::new("https://canvas.example.edu", "secret-token");
//!     let client = HttpCanvasClient::new(config)?;
//!     let data = client.fetch_course_data(1234)?;
//!     println!("{} has {} modules", data.course.name, data.modules.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod error;
pub mod stub;
pub mod types;

pub use client::{CanvasClient, HttpCanvasClient};
pub use config::CanvasApiConfig;
pub use error::{CanvasError, Result};
pub use stub::{StaticCanvasClient, UnconfiguredCanvasClient};
