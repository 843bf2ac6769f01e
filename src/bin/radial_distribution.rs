// src/bin/radial_distribution.rs
//
// Post-processing for trajectory record streams: builds the radial
// distribution of the orbit (cylindrical radius in the x1-x2 plane) and
// renders the orbit and the distribution as PNGs.
//
// Run:
//   cargo run --bin radial_distribution
//
// Output:
//   Trajectories/
//     ├── radial_distribution_<run>.csv    (r_left, count, cumulative)
//     ├── radial_distribution_<run>.png
//     └── orbit_<run>.png

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use bz_sim::histogram::RadialHistogram;
use bz_sim::output::{TrajectoryRecord, TrajectoryWriter};
use bz_sim::visualisation::{save_orbit_plot, save_radial_histogram_plot};

// --- post-processing configuration (keep in sync with the producing run) ---
const RUN_INDEX: u32 = 2;
const N_BINS: usize = 1000;
const R_MIN: f64 = 3.74;
const R_MAX: f64 = 8.54;
// ---------------------------------------------------------------------------

fn main() -> std::io::Result<()> {
    let dir = Path::new("Trajectories");
    let path = dir.join(TrajectoryWriter::file_name(RUN_INDEX));

    let file = File::open(&path)?;
    let reader = BufReader::new(file);

    let mut records: Vec<TrajectoryRecord> = Vec::new();
    let mut skipped = 0usize;
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match TrajectoryRecord::parse_line(&line) {
            Some(rec) => records.push(rec),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        eprintln!(
            "Warning: skipped {} malformed line(s) in {}",
            skipped,
            path.display()
        );
    }
    println!("Read {} samples from {}", records.len(), path.display());

    let mut hist = RadialHistogram::new(R_MIN, R_MAX, N_BINS);
    let mut outside = 0usize;
    for rec in &records {
        let r = (rec.x[1] * rec.x[1] + rec.x[2] * rec.x[2]).sqrt();
        if !hist.add(r) {
            outside += 1;
        }
    }
    if outside > 0 {
        println!(
            "{} sample(s) fell outside [{}, {}) and were not binned",
            outside, R_MIN, R_MAX
        );
    }

    let csv_path = dir.join(format!("radial_distribution_{}.csv", RUN_INDEX));
    let mut w = BufWriter::new(File::create(&csv_path)?);
    writeln!(w, "r,count,cumulative")?;
    let cumulative = hist.cumulative();
    for (i, (&count, &cum)) in hist.counts.iter().zip(cumulative.iter()).enumerate() {
        writeln!(w, "{:.6e},{},{}", hist.edge(i), count, cum)?;
    }

    let hist_png = dir.join(format!("radial_distribution_{}.png", RUN_INDEX));
    let hist_png = hist_png.to_string_lossy().to_string();
    if let Err(e) = save_radial_histogram_plot(&hist, &hist_png) {
        eprintln!("Warning: could not render {}: {}", hist_png, e);
    }

    let orbit_png = dir.join(format!("orbit_{}.png", RUN_INDEX));
    let orbit_png = orbit_png.to_string_lossy().to_string();
    if let Err(e) = save_orbit_plot(&records, &orbit_png) {
        eprintln!("Warning: could not render {}: {}", orbit_png, e);
    }

    println!("Wrote {}", csv_path.display());
    Ok(())
}
