//! Canvas API payloads and their mapping onto GAVEL records.

use gavel_model::{CanvasCourse, CanvasModule};
use serde::Deserialize;

/// Course object as returned by `GET /api/v1/courses/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCourse {
    /// Canvas course id.
    pub id: i64,
    /// Course title; Canvas may omit it for restricted courses.
    #[serde(default)]
    pub name: Option<String>,
    /// Short course code.
    #[serde(default)]
    pub course_code: Option<String>,
}

impl ApiCourse {
    /// Converts to a record, falling back to the course code (then empty) for the name.
    #[must_use]
    pub fn into_course(self) -> CanvasCourse {
        let name = self
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .or_else(|| self.course_code.clone().filter(|c| !c.is_empty()))
            .unwrap_or_default();
        CanvasCourse {
            id: self.id,
            name,
            course_code: self.course_code,
        }
    }
}

/// Module object as returned by `GET /api/v1/courses/:id/modules`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiModule {
    /// Canvas module id.
    pub id: i64,
    /// Module title.
    #[serde(default)]
    pub name: Option<String>,
}

impl ApiModule {
    /// Converts to a record, naming unnamed modules `Module {id}`.
    #[must_use]
    pub fn into_module(self) -> CanvasModule {
        let name = self
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("Module {}", self.id));
        CanvasModule { id: self.id, name }
    }
}
