#[cfg(test)]
#[path = "../../tests/unit/ttp/writer_test.rs"]
mod writer_test;

use pareto_core::prelude::*;
use std::io::{BufWriter, Write};

/// Writes the front of the results identified by `name` as a single line.
pub fn write_text_front<W: Write>(writer: &mut BufWriter<W>, name: &str, front: &[Point]) -> FrontResult<()> {
    writer.write_all(format!("{name} : {}\n", format_points(front)).as_bytes())?;

    Ok(())
}

/// Writes all fronts of the results identified by `name`, one line per front ordered by rank.
pub fn write_text_fronts<W: Write>(
    writer: &mut BufWriter<W>,
    name: &str,
    fronts: &[Vec<Point>],
) -> FrontResult<()> {
    fronts.iter().enumerate().try_for_each(|(rank, front)| {
        writer.write_all(format!("{name} : front {rank} : {}\n", format_points(front)).as_bytes())
    })?;

    Ok(())
}

/// Formats points as a list of tuples, e.g. `[(1, -5), (3, -1)]`.
pub fn format_points(points: &[Point]) -> String {
    let points = points
        .iter()
        .map(|point| format!("({})", point.iter().map(|value| value.to_string()).collect::<Vec<_>>().join(", ")))
        .collect::<Vec<_>>()
        .join(", ");

    format!("[{points}]")
}
