// src/initial_states.rs
//
// Seed states for the charge. The default reproduces the configuration the
// reference trajectories start from: particle at the origin, spinor
// zr = (1, 0, 0, -1), zi = 0, momentum at rest on the mass shell.

use std::f64::consts::PI;

use crate::state::ChargeState;
use crate::vec4::Vec4;

/// Default seed: origin, rest momentum, the (1, 0, 0, -1) spinor.
pub fn default_state() -> ChargeState {
    ChargeState {
        x: [0.0; 4],
        p: momentum_polar(0.0, 0.5 * PI, 0.0),
        zr: [1.0, 0.0, 0.0, -1.0],
        zi: [0.0; 4],
    }
}

/// Momentum from a magnitude and polar/azimuthal angles. The time
/// component is solved from the mass-shell condition p0 = sqrt(1 + |p|^2).
pub fn momentum_polar(magnitude: f64, polar: f64, azimuth: f64) -> Vec4 {
    let p1 = magnitude * polar.cos();
    let p2 = magnitude * polar.sin() * azimuth.sin();
    let p3 = magnitude * polar.sin() * azimuth.cos();
    let p0 = (1.0 + p1 * p1 + p2 * p2 + p3 * p3).sqrt();
    [p0, p1, p2, p3]
}

/// Unit-norm spinor from seven hyperspherical angles. theta[0] splits the
/// weight between the real and imaginary parts; theta[1..4] and theta[4..7]
/// fan each part out over its four components.
pub fn spinor_hyperspherical(theta: [f64; 7]) -> (Vec4, Vec4) {
    let (c0, s0) = (theta[0].cos(), theta[0].sin());
    let zr = [
        c0 * theta[1].cos(),
        c0 * theta[1].sin() * theta[2].cos(),
        c0 * theta[1].sin() * theta[2].sin() * theta[3].cos(),
        c0 * theta[1].sin() * theta[2].sin() * theta[3].sin(),
    ];
    let zi = [
        s0 * theta[4].cos(),
        s0 * theta[4].sin() * theta[5].cos(),
        s0 * theta[4].sin() * theta[5].sin() * theta[6].cos(),
        s0 * theta[4].sin() * theta[5].sin() * theta[6].sin(),
    ];
    (zr, zi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::mass_shell;

    #[test]
    fn default_seed_sits_on_the_mass_shell_at_the_origin() {
        let state = default_state();
        assert_eq!(state.x, [0.0; 4]);
        assert_eq!(state.p, [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(mass_shell(state.p), 1.0);
    }

    #[test]
    fn polar_momentum_is_on_shell_for_any_magnitude() {
        for magnitude in [0.0, 0.3, 1.0, 2.5] {
            let p = momentum_polar(magnitude, 0.25 * PI, 0.7);
            assert!(
                (mass_shell(p) - 1.0).abs() < 1e-14,
                "p.p = {} for |p| = {}",
                mass_shell(p),
                magnitude
            );
        }
    }

    #[test]
    fn hyperspherical_spinor_has_unit_norm() {
        let theta = [
            0.25 * PI,
            0.25 * PI,
            0.5 * PI,
            0.5 * PI,
            0.5 * PI,
            0.25 * PI,
            0.0,
        ];
        let (zr, zi) = spinor_hyperspherical(theta);
        let norm: f64 = zr.iter().chain(zi.iter()).map(|v| v * v).sum();
        assert!((norm - 1.0).abs() < 1e-14, "|z|^2 = {}", norm);
    }
}
