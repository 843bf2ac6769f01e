// src/params.rs

use std::f64::consts::PI;

use crate::field::FieldModel;

/// Which field source drives the momentum equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Uniform E/B, built once at startup.
    Constant,
    /// Coulomb-like 1/r^2 electric field, rebuilt at every RHS evaluation.
    RadialE,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Constant => "constant",
            Self::RadialE => "radial",
        }
    }
}

/// Immutable run configuration. The defaults are the literal constants the
/// reference trajectories were produced with.
#[derive(Debug, Clone, Copy)]
pub struct SimParams {
    /// Run index embedded in the trajectory file name.
    pub run_index: u32,
    /// Spin-momentum coupling constant.
    pub lambda: f64,
    /// Particle charge.
    pub q: f64,
    /// Source charge of the radial field.
    pub qc: f64,
    /// Uniform electric field along x (ey is always zero).
    pub ex: f64,
    /// Uniform electric field along z.
    pub ez: f64,
    /// Uniform magnetic field along z.
    pub bz: f64,
    /// Fixed integration step.
    pub dt: f64,
    /// Total evolution time.
    pub t_total: f64,
    /// Emit one record every `save_every`-th step, starting at step 0.
    pub save_every: usize,
    /// Abort once p.p (Minkowski) falls to this value or below.
    pub shell_floor: f64,
    pub field: FieldKind,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            run_index: 2,
            lambda: 1.0,
            q: 1.0,
            qc: 0.0,
            ex: 0.0,
            ez: 0.0,
            bz: -0.9,
            dt: 1e-4,
            t_total: 30.0 * PI,
            save_every: 20,
            shell_floor: -0.1,
            field: FieldKind::Constant,
        }
    }
}

impl SimParams {
    /// Build the field source selected by `self.field`.
    pub fn field_model(&self) -> FieldModel {
        match self.field {
            FieldKind::Constant => FieldModel::constant_eb(self.ex, self.ez, self.bz),
            FieldKind::RadialE => FieldModel::radial_e(self.qc),
        }
    }

    /// Steps a full-length run takes if the mass-shell guard never trips.
    pub fn max_steps(&self) -> usize {
        (self.t_total / self.dt).ceil() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_run_length_in_steps() {
        let params = SimParams::default();
        // T / dt = 300000 * pi
        let expected = (300_000.0 * PI).ceil() as usize;
        assert_eq!(params.max_steps(), expected);
    }

    #[test]
    fn field_model_follows_the_kind() {
        let params = SimParams {
            field: FieldKind::RadialE,
            qc: 4.0,
            ..SimParams::default()
        };
        match params.field_model() {
            FieldModel::RadialE { qc } => assert_eq!(qc, 4.0),
            _ => panic!("expected the radial field"),
        }

        match SimParams::default().field_model() {
            FieldModel::Constant(_) => {}
            _ => panic!("expected the constant field"),
        }
    }
}
