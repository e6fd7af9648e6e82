//! Record types shared across the GAVEL crates.
//!
//! Every record is an immutable value produced by one load or fetch call.
//! Readers hand their rows back inside a [`RecordBatch`], which only exposes
//! read access once built.

pub mod batch;
pub mod canvas;
pub mod consent;
pub mod roster;

pub use batch::RecordBatch;
pub use canvas::{CanvasCourse, CanvasCourseData, CanvasModule};
pub use consent::ConsentFormEntry;
pub use roster::RosterStudent;
