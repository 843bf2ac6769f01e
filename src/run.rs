// src/run.rs
//
// Driving loop: repeated RK4 steps under the configured field, with the
// two stopping conditions and pre-step record sampling.

use std::io;

use crate::dynamics::{eval_rates, mass_shell};
use crate::field::FieldModel;
use crate::output::TrajectoryRecord;
use crate::params::SimParams;
use crate::state::ChargeState;
use crate::stepper::step_rk4;

/// Why the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Evolved through the full configured time span.
    TimeLimit,
    /// p.p fell to the shell floor: the trajectory left the mass shell.
    MassShellViolation,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Copy)]
pub struct RunReport {
    pub steps: usize,
    pub samples: usize,
    pub final_t: f64,
    pub stop_reason: StopReason,
}

/// Evolve `state` in place until the time limit is reached or the
/// mass-shell guard trips.
///
/// `emit` receives one record every `params.save_every`-th step, starting
/// with step 0. Records reflect the state *before* that step's update and
/// the stage-0 velocity, so the first record is the initial condition at
/// t = 0.
pub fn evolve<F>(
    state: &mut ChargeState,
    field: &FieldModel,
    params: &SimParams,
    mut emit: F,
) -> io::Result<RunReport>
where
    F: FnMut(&TrajectoryRecord) -> io::Result<()>,
{
    let mut t = 0.0;
    let mut steps = 0usize;
    let mut samples = 0usize;

    loop {
        if t >= params.t_total {
            return Ok(RunReport {
                steps,
                samples,
                final_t: t,
                stop_reason: StopReason::TimeLimit,
            });
        }
        if mass_shell(state.p) <= params.shell_floor {
            return Ok(RunReport {
                steps,
                samples,
                final_t: t,
                stop_reason: StopReason::MassShellViolation,
            });
        }

        let k0 = eval_rates(state, field, params.lambda, params.q);

        if steps % params.save_every == 0 {
            emit(&TrajectoryRecord::sample(t, state, k0.xdot))?;
            samples += 1;
        }

        step_rk4(state, &k0, field, params);
        t += params.dt;
        steps += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initial_states::default_state;

    #[test]
    fn step_and_sample_counting() {
        // dt and T chosen as exact binary fractions so t accumulates
        // without rounding: exactly 40 steps, samples at steps 0 and 20.
        // Null field so the coarse dt cannot push p off the mass shell.
        let params = SimParams {
            dt: 0.125,
            t_total: 5.0,
            bz: 0.0,
            ..SimParams::default()
        };
        let field = params.field_model();
        let mut state = default_state();

        let report = evolve(&mut state, &field, &params, |_| Ok(())).unwrap();
        assert_eq!(report.stop_reason, StopReason::TimeLimit);
        assert_eq!(report.steps, 40);
        assert_eq!(report.samples, 2);
        assert_eq!(report.final_t, 5.0);
    }

    #[test]
    fn mass_shell_guard_stops_before_the_first_step() {
        let params = SimParams::default();
        let field = params.field_model();
        let mut state = default_state();
        state.p = [0.0, 1.0, 0.0, 0.0]; // p.p = -1, below the floor

        let mut emitted = 0usize;
        let report = evolve(&mut state, &field, &params, |_| {
            emitted += 1;
            Ok(())
        })
        .unwrap();

        assert_eq!(report.stop_reason, StopReason::MassShellViolation);
        assert_eq!(report.steps, 0);
        assert_eq!(emitted, 0);
    }
}
