// src/visualisation.rs

use plotters::prelude::*;

use crate::histogram::RadialHistogram;
use crate::output::TrajectoryRecord;

/// Pad a data range so flat or degenerate extents still draw.
fn padded(lo: f64, hi: f64) -> (f64, f64) {
    if !lo.is_finite() || !hi.is_finite() {
        return (-1.0, 1.0);
    }
    let span = hi - lo;
    if span.abs() < 1e-12 {
        return (lo - 1.0, hi + 1.0);
    }
    (lo - 0.05 * span, hi + 0.05 * span)
}

/// Orbit projection onto the x1-x2 plane: one polyline through the samples.
pub fn save_orbit_plot(
    records: &[TrajectoryRecord],
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if records.is_empty() {
        return Ok(()); // nothing to plot
    }

    let mut x_lo = f64::INFINITY;
    let mut x_hi = f64::NEG_INFINITY;
    let mut y_lo = f64::INFINITY;
    let mut y_hi = f64::NEG_INFINITY;
    for r in records {
        x_lo = x_lo.min(r.x[1]);
        x_hi = x_hi.max(r.x[1]);
        y_lo = y_lo.min(r.x[2]);
        y_hi = y_hi.max(r.x[2]);
    }
    let (x_lo, x_hi) = padded(x_lo, x_hi);
    let (y_lo, y_hi) = padded(y_lo, y_hi);

    let root = BitMapBackend::new(filename, (900, 900)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(40)
        .caption("orbit projection (x1, x2)", ("sans-serif", 20))
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc("x1")
        .y_desc("x2")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    chart.draw_series(LineSeries::new(
        records.iter().map(|r| (r.x[1], r.x[2])),
        &BLUE,
    ))?;

    Ok(())
}

/// Radial distribution as a bar chart, one bar per histogram bin.
pub fn save_radial_histogram_plot(
    hist: &RadialHistogram,
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let max_count = hist.counts.iter().copied().max().unwrap_or(0);
    if max_count == 0 {
        return Ok(()); // nothing to plot
    }

    let root = BitMapBackend::new(filename, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(40)
        .caption("radial distribution", ("sans-serif", 20))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(hist.r_min..hist.r_max, 0u64..(max_count + max_count / 10 + 1))?;

    chart
        .configure_mesh()
        .x_desc("r")
        .y_desc("samples")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    let dr = hist.dr();
    chart.draw_series(hist.counts.iter().enumerate().map(|(i, &c)| {
        let x0 = hist.edge(i);
        Rectangle::new([(x0, 0), (x0 + dr, c)], BLUE.filled())
    }))?;

    Ok(())
}
