//! Load an enrollment roster.

use std::path::PathBuf;

use gavel_ingest::RosterReader;
use gavel_model::{RecordBatch, RosterStudent};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRosterRequest {
    pub path: PathBuf,
}

pub struct LoadRosterUseCase {
    reader: Box<dyn RosterReader>,
}

impl LoadRosterUseCase {
    pub fn new(reader: Box<dyn RosterReader>) -> Self {
        Self { reader }
    }

    pub fn execute(&self, request: &LoadRosterRequest) -> Result<RecordBatch<RosterStudent>> {
        Ok(self.reader.read(&request.path)?)
    }

    /// Loads the roster and projects it to a table.
    pub fn execute_frame(&self, request: &LoadRosterRequest) -> Result<DataFrame> {
        let students = self.execute(request)?;
        roster_frame(&students)
    }
}

/// One column per [`RosterStudent`] field, rows in roster order.
///
/// `units` becomes an `Int64` column; everything else is text.
pub fn roster_frame(students: &RecordBatch<RosterStudent>) -> Result<DataFrame> {
    let rows = students.as_slice();
    let [
        id,
        posting_id,
        first_name,
        last_name,
        status,
        units,
        grade_basis,
        program_and_plan,
        academic_level,
        asurite,
        residency,
        zoom_email,
    ] = RosterStudent::FIELD_NAMES;

    let units_values: Vec<i64> = rows.iter().map(|s| s.units).collect();
    let columns = vec![
        text_column(id, rows, |s| &s.id),
        text_column(posting_id, rows, |s| &s.posting_id),
        text_column(first_name, rows, |s| &s.first_name),
        text_column(last_name, rows, |s| &s.last_name),
        text_column(status, rows, |s| &s.status),
        Series::new(units.into(), units_values).into_column(),
        text_column(grade_basis, rows, |s| &s.grade_basis),
        text_column(program_and_plan, rows, |s| &s.program_and_plan),
        text_column(academic_level, rows, |s| &s.academic_level),
        text_column(asurite, rows, |s| &s.asurite),
        text_column(residency, rows, |s| &s.residency),
        text_column(zoom_email, rows, |s| &s.zoom_email),
    ];

    Ok(DataFrame::new(columns)?)
}

fn text_column<F>(name: &str, rows: &[RosterStudent], field: F) -> Column
where
    F: Fn(&RosterStudent) -> &String,
{
    let values: Vec<&str> = rows.iter().map(|s| field(s).as_str()).collect();
    Series::new(name.into(), values).into_column()
}
