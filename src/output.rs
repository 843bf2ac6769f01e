// src/output.rs
//
// Trajectory record stream: one line per sampled step, 23 space-separated
// fields in the fixed order the downstream tooling reads:
//
//   t H x0 x1 x2 x3 p0 p1 p2 p3 zr0..zr3 zi0..zi3 xdot0..xdot3 alpha
//
// Numbers use printf-"%e" formatting (six fractional digits, signed
// two-digit exponent) so existing consumers see byte-identical lines.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::dynamics::{hamiltonian, spinor_pseudo_norm};
use crate::state::ChargeState;
use crate::vec4::Vec4;

/// Fields per record line.
pub const RECORD_FIELDS: usize = 23;

/// Format like C's "%e": d.dddddde+XX with at least two exponent digits.
pub fn fmt_e(v: f64) -> String {
    let s = format!("{:.6e}", v);
    match s.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(exp) => format!(
                "{}e{}{:02}",
                mantissa,
                if exp < 0 { '-' } else { '+' },
                exp.abs()
            ),
            Err(_) => s,
        },
        // NaN / infinities carry no exponent
        None => s,
    }
}

/// One sampled step of the trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryRecord {
    pub t: f64,
    pub h: f64,
    pub x: Vec4,
    pub p: Vec4,
    pub zr: Vec4,
    pub zi: Vec4,
    pub xdot: Vec4,
    pub alpha: f64,
}

impl TrajectoryRecord {
    /// Snapshot the pre-step state together with its stage-0 velocity.
    pub fn sample(t: f64, state: &ChargeState, xdot: Vec4) -> Self {
        Self {
            t,
            h: hamiltonian(state.p, xdot),
            x: state.x,
            p: state.p,
            zr: state.zr,
            zi: state.zi,
            xdot,
            alpha: spinor_pseudo_norm(state.zr, state.zi),
        }
    }

    /// Space-separated record line, without the trailing newline.
    pub fn to_line(&self) -> String {
        let mut fields: Vec<String> = Vec::with_capacity(RECORD_FIELDS);
        fields.push(fmt_e(self.t));
        fields.push(fmt_e(self.h));
        for v in [self.x, self.p, self.zr, self.zi, self.xdot] {
            for c in v {
                fields.push(fmt_e(c));
            }
        }
        fields.push(fmt_e(self.alpha));
        fields.join(" ")
    }

    /// Parse a line written by `to_line`. Returns None on a malformed or
    /// truncated line.
    pub fn parse_line(line: &str) -> Option<Self> {
        let vals: Vec<f64> = line
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .ok()?;
        if vals.len() != RECORD_FIELDS {
            return None;
        }
        let v4 = |i: usize| -> Vec4 { [vals[i], vals[i + 1], vals[i + 2], vals[i + 3]] };
        Some(Self {
            t: vals[0],
            h: vals[1],
            x: v4(2),
            p: v4(6),
            zr: v4(10),
            zi: v4(14),
            xdot: v4(18),
            alpha: vals[22],
        })
    }
}

/// Sink for trajectory lines.
///
/// Opening the file can fail; matching the original tool's behavior this
/// is reported and the run proceeds with the sink disabled rather than
/// aborting.
pub struct TrajectoryWriter {
    out: Option<BufWriter<File>>,
}

impl TrajectoryWriter {
    /// Conventional file name read by the downstream tooling.
    pub fn file_name(run_index: u32) -> String {
        format!("CE_trajectory_RK_{}_.dat", run_index)
    }

    pub fn create(path: &Path) -> Self {
        match File::create(path) {
            Ok(f) => Self {
                out: Some(BufWriter::new(f)),
            },
            Err(err) => {
                eprintln!(
                    "Warning: could not open {}: {}; records will be dropped",
                    path.display(),
                    err
                );
                Self { out: None }
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.out.is_some()
    }

    /// Write one record line. A disabled sink accepts and drops records.
    pub fn write_record(&mut self, rec: &TrajectoryRecord) -> io::Result<()> {
        if let Some(out) = self.out.as_mut() {
            writeln!(out, "{}", rec.to_line())?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        if let Some(out) = self.out.as_mut() {
            out.flush()?;
        }
        Ok(())
    }
}
