// src/main.rs
//
// Classical Dirac-electron (Barut-Zanghi) trajectory integration with
// fixed-step RK4. Configuration is the block of constants below; there
// are no command-line options; edit and rebuild.
//
// Run:
//   cargo run --release
//
// Output:
//   Trajectories/
//     ├── config.json
//     └── CE_trajectory_RK_<run>_.dat    (23-column record stream)

use std::fs::create_dir_all;
use std::path::Path;

use bz_sim::config::RunConfig;
use bz_sim::initial_states::default_state;
use bz_sim::output::{fmt_e, TrajectoryWriter};
use bz_sim::params::{FieldKind, SimParams};
use bz_sim::run::{evolve, StopReason};

// --- run configuration ---
const RUN_INDEX: u32 = 2;
const LAMBDA: f64 = 1.0; // spin-momentum coupling
const Q: f64 = 1.0; // particle charge
const QC: f64 = 0.0; // radial-field source charge
const EX: f64 = 0.0;
const EZ: f64 = 0.0;
const BZ: f64 = -0.9;
const DT0: f64 = 1e-4;
const T_TOTAL: f64 = 30.0 * std::f64::consts::PI;
const SAVE_EVERY: usize = 20;
const SHELL_FLOOR: f64 = -0.1;
const FIELD: FieldKind = FieldKind::Constant;
// -------------------------

fn main() -> std::io::Result<()> {
    let params = SimParams {
        run_index: RUN_INDEX,
        lambda: LAMBDA,
        q: Q,
        qc: QC,
        ex: EX,
        ez: EZ,
        bz: BZ,
        dt: DT0,
        t_total: T_TOTAL,
        save_every: SAVE_EVERY,
        shell_floor: SHELL_FLOOR,
        field: FIELD,
    };
    let field = params.field_model();
    let mut state = default_state();

    let out_dir = Path::new("Trajectories");
    create_dir_all(out_dir)?;

    println!("--- bz-sim run config ---");
    println!(
        "field:  kind={} EX={:.3e} EZ={:.3e} BZ={:.3e} QC={:.3e}",
        params.field.as_str(),
        params.ex,
        params.ez,
        params.bz,
        params.qc
    );
    println!("model:  lambda={:.3e} q={:.3e}", params.lambda, params.q);
    println!(
        "run:    dt={:.3e} T={:.6e} stride={} shell_floor={}",
        params.dt, params.t_total, params.save_every, params.shell_floor
    );
    println!("seed:   p={:?} zr={:?} zi={:?}", state.p, state.zr, state.zi);
    println!("-------------------------");

    RunConfig::from_params("bz-sim", &params).write_to_dir(out_dir)?;

    let path = out_dir.join(TrajectoryWriter::file_name(params.run_index));
    let mut writer = TrajectoryWriter::create(&path);

    // About 100 progress lines over a full-length run
    let print_every = (params.max_steps() / params.save_every / 100).max(1);
    let mut emitted = 0usize;

    let report = evolve(&mut state, &field, &params, |rec| {
        writer.write_record(rec)?;
        if emitted % print_every == 0 {
            println!(
                "{} {} {} {} {}",
                fmt_e(rec.t),
                fmt_e(rec.x[0]),
                fmt_e(rec.x[1]),
                fmt_e(rec.x[2]),
                fmt_e(rec.x[3])
            );
        }
        emitted += 1;
        Ok(())
    })?;
    writer.flush()?;

    match report.stop_reason {
        StopReason::TimeLimit => println!(
            "Reached t = {:.6e} after {} steps ({} samples).",
            report.final_t, report.steps, report.samples
        ),
        StopReason::MassShellViolation => eprintln!(
            "Stopped at t = {:.6e} after {} steps: p.p fell below {}.",
            report.final_t, report.steps, params.shell_floor
        ),
    }
    if writer.is_active() {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
