//! Tabular record extraction for GAVEL.
//!
//! This crate turns spreadsheet exports into typed, immutable record batches.
//!
//! # Features
//!
//! - **Roster loading**: twelve exact-name columns mapped onto [`RosterStudent`]
//! - **Consent forms**: Canvas quiz exports mapped onto [`ConsentFormEntry`],
//!   with two question columns located by substring at load time
//! - **Column resolution**: [`resolve_column`] finds the single header that
//!   contains a fragment, or reports every candidate it saw
//!
//! Every load either returns the whole file or fails; no partial batch is
//! ever handed back.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use gavel_ingest::{CanvasConsentFormReader, ConsentFormReader, CsvRosterReader, RosterReader};
//!
//! let roster = CsvRosterReader::new().read(Path::new("roster.csv"))?;
//! let consent = CanvasConsentFormReader::new().load(Path::new("consent.csv"))?;
//! println!("{} students, {} attempts", roster.len(), consent.len());
//! ```
//!
//! [`RosterStudent`]: gavel_model::RosterStudent
//! [`ConsentFormEntry`]: gavel_model::ConsentFormEntry

mod consent;
mod csv;
mod error;
mod roster;

// === Error Types ===
pub use error::{IngestError, Result};

// === Header Handling ===
pub use csv::{CsvHeaders, resolve_column};

// === Readers ===
pub use consent::{
    CONSENT_COLUMN_FRAGMENT, CanvasConsentFormReader, ConsentFormReader, NAME_RESPONSE_FRAGMENT,
};
pub use roster::{CsvRosterReader, ROSTER_HEADERS, RosterReader};
