#[cfg(test)]
#[path = "../../../tests/unit/extensions/analyze/plot_test.rs"]
mod plot_test;

use pareto_core::Point;
use pareto_results::ttp::Solutions;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

/// Type alias for the result of a drawing function.
pub type DrawResult<T> = Result<T, Box<dyn std::error::Error>>;

const PLOT_SIZE: (u32, u32) = (1024, 768);
const MARKER_SIZE: i32 = 4;

/// Axis key points are placed using powers of ten of the axis width, which overflow near `f64::MAX`.
const MAX_AXIS_VALUE: f64 = 1e300;

/// Draws a scatter plot of all `solutions` (unfilled markers) against the Pareto `front` (filled
/// markers) into svg file at `path`. Front points are expected to be `(travel_time, negative_profit)`.
pub fn draw_front_plot(path: &Path, title: &str, solutions: &Solutions, front: &[Point]) -> DrawResult<()> {
    let x_range = get_axis_range(solutions.travel_times())?;
    let y_range = get_axis_range(solutions.negative_profits())?;

    let area = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
    area.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&area)
        .caption(title, ("sans-serif", 20))
        .set_label_area_size(LabelAreaPosition::Left, 80)
        .set_label_area_size(LabelAreaPosition::Bottom, 50)
        .margin(20)
        .build_cartesian_2d(x_range, y_range)?;

    chart.configure_mesh().x_desc("Travel time").y_desc("Negative Profit").draw()?;

    let solution_style = BLUE.mix(0.7).stroke_width(1);
    chart
        .draw_series(
            solutions
                .travel_times()
                .zip(solutions.negative_profits())
                .map(|coordinate| Circle::new(coordinate, MARKER_SIZE, solution_style)),
        )?
        .label("Solutions")
        .legend(move |(x, y)| Circle::new((x, y), MARKER_SIZE, solution_style));

    let front_style = RED.filled();
    chart
        .draw_series(front.iter().map(|point| Circle::new((point[0], point[1]), MARKER_SIZE, front_style)))?
        .label("Pareto Front")
        .legend(move |(x, y)| Circle::new((x, y), MARKER_SIZE, front_style));

    chart.configure_series_labels().background_style(WHITE.mix(0.8)).border_style(BLACK).draw()?;

    area.present()?;

    Ok(())
}

/// Returns an axis range which fits all values with a small margin around them.
fn get_axis_range(values: impl Iterator<Item = f64>) -> DrawResult<Range<f64>> {
    let (min, max) =
        values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| (min.min(value), max.max(value)));

    if min > max {
        return Ok(0. ..1.);
    }

    let margin = match (max - min) * 0.05 {
        margin if margin > 0. => margin,
        _ => min.abs().max(1.) * 0.05,
    };
    let range = (min - margin)..(max + margin);

    if [range.start, range.end].iter().any(|bound| !bound.is_finite() || bound.abs() > MAX_AXIS_VALUE) {
        return Err(format!("values in [{min:e}, {max:e}] are too large to be plotted").into());
    }

    Ok(range)
}
