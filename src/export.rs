//! CSV export of a selected combination.
//!
//! One row per selected option with columns
//! `component,option,mass,cost,<metric>`, where `<metric>` is the
//! objective metric's name.

use std::io;
use std::path::Path;

use crate::model::DesignSpace;
use crate::solution::Solution;

/// Writes `solution` as CSV to `writer`.
pub fn write_csv<W: io::Write>(
    writer: W,
    space: &DesignSpace,
    solution: &Solution<'_>,
) -> crate::Result<()> {
    let metric = space.objective.metric.as_str();
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["component", "option", "mass", "cost", metric])?;
    for pick in solution.combination.picks() {
        wtr.write_record([
            pick.component.to_string(),
            pick.option.name.clone(),
            pick.option.mass.to_string(),
            pick.option.cost.to_string(),
            pick.option.metric(metric).to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `solution` as CSV to the file at `path`, replacing it.
pub fn save_csv(
    path: impl AsRef<Path>,
    space: &DesignSpace,
    solution: &Solution<'_>,
) -> crate::Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(io::BufWriter::new(file), space, solution)
}
