//! Canvas course records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasCourse {
    pub id: i64,
    pub name: String,
    pub course_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasModule {
    pub id: i64,
    pub name: String,
}

/// A course together with its ordered module listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasCourseData {
    pub course: CanvasCourse,
    pub modules: Vec<CanvasModule>,
}

impl CanvasCourseData {
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }
}
