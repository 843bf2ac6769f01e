// src/dynamics.rs
//
// Right-hand side of the Barut-Zanghi equations of motion:
//
//   dx/dt = zbar gamma^mu z        (velocity from spinor bilinears)
//   dz/dt = -(i/lambda) p.gamma z  (spinor precession driven by momentum)
//   dp/dt = q F^mu_nu dx^nu/dt     (Lorentz force on the charge)
//
// written out over the 8 real spinor components. The coefficient patterns
// below are the model's equations of motion; their signs and index
// pairings must not be "simplified".

use crate::field::{FieldModel, FieldTensor};
use crate::state::ChargeState;
use crate::vec4::{minkowski_dot, Vec4};

/// Instantaneous time-derivatives of all four sub-vectors.
#[derive(Debug, Clone, Copy)]
pub struct Rates {
    pub xdot: Vec4,
    pub pdot: Vec4,
    pub zrdot: Vec4,
    pub zidot: Vec4,
}

/// Velocity from spinor bilinears. The time component is the squared
/// spinor norm and is never negative.
#[inline]
pub fn position_rate(zr: Vec4, zi: Vec4) -> Vec4 {
    [
        zr[0] * zr[0] + zr[1] * zr[1] + zr[2] * zr[2] + zr[3] * zr[3]
            + zi[0] * zi[0] + zi[1] * zi[1] + zi[2] * zi[2] + zi[3] * zi[3],
        2.0 * (zr[0] * zr[3] + zi[0] * zi[3] + zr[1] * zr[2] + zi[1] * zi[2]),
        2.0 * (zr[0] * zi[3] - zi[0] * zr[3] - zr[1] * zi[2] + zi[1] * zr[2]),
        2.0 * (zr[0] * zr[2] + zi[0] * zi[2] - zr[1] * zr[3] - zi[1] * zi[3]),
    ]
}

/// Spinor precession. Each component is a fixed signed sum of
/// momentum-times-spinor products, scaled by 1/lambda for the real part
/// and -1/lambda for the imaginary part.
#[inline]
pub fn spinor_rate(zr: Vec4, zi: Vec4, p: Vec4, lambda: f64) -> (Vec4, Vec4) {
    let zrdot = [
        (-p[0] * zi[0] + p[1] * zi[3] - p[2] * zr[3] + p[3] * zi[2]) / lambda,
        (-p[0] * zi[1] + p[1] * zi[2] + p[2] * zr[2] - p[3] * zi[3]) / lambda,
        (p[0] * zi[2] - p[1] * zi[1] + p[2] * zr[1] - p[3] * zi[0]) / lambda,
        (p[0] * zi[3] - p[1] * zi[0] - p[2] * zr[0] + p[3] * zi[1]) / lambda,
    ];
    let zidot = [
        (-p[0] * zr[0] + p[1] * zr[3] + p[2] * zi[3] + p[3] * zr[2]) / (-lambda),
        (-p[0] * zr[1] + p[1] * zr[2] - p[2] * zi[2] - p[3] * zr[3]) / (-lambda),
        (p[0] * zr[2] - p[1] * zr[1] - p[2] * zi[1] - p[3] * zr[0]) / (-lambda),
        (p[0] * zr[3] - p[1] * zr[0] + p[2] * zi[0] + p[3] * zr[1]) / (-lambda),
    ];
    (zrdot, zidot)
}

#[inline]
fn row_dot(row: [f64; 4], v: Vec4) -> f64 {
    row[0] * v[0] + row[1] * v[1] + row[2] * v[2] + row[3] * v[3]
}

/// Lorentz-force coupling of the field tensor to the velocity. The sign
/// split between the time row and the spatial rows carries the (+,-,-,-)
/// signature.
#[inline]
pub fn momentum_rate(f: &FieldTensor, xdot: Vec4, q: f64) -> Vec4 {
    [
        q * row_dot(f[0], xdot),
        -q * row_dot(f[1], xdot),
        -q * row_dot(f[2], xdot),
        -q * row_dot(f[3], xdot),
    ]
}

/// All rates at `state`, with the field tensor taken at the state's own
/// position (the radial mode rebuilds it here; the constant mode is a copy).
pub fn eval_rates(state: &ChargeState, field: &FieldModel, lambda: f64, q: f64) -> Rates {
    let f = field.tensor_at(state.x);
    let xdot = position_rate(state.zr, state.zi);
    let (zrdot, zidot) = spinor_rate(state.zr, state.zi, state.p, lambda);
    let pdot = momentum_rate(&f, xdot, q);
    Rates {
        xdot,
        pdot,
        zrdot,
        zidot,
    }
}

/// Minkowski square of the momentum; stays near 1 on the mass shell.
#[inline]
pub fn mass_shell(p: Vec4) -> f64 {
    minkowski_dot(p, p)
}

/// Hamiltonian-like monitor H = -p0 xdot0 + p1 xdot1 + p2 xdot2 + p3 xdot3,
/// evaluated with the pre-step momentum and velocity. Recorded for
/// inspection only; the discretization does not conserve it exactly.
#[inline]
pub fn hamiltonian(p: Vec4, xdot: Vec4) -> f64 {
    -p[0] * xdot[0] + p[1] * xdot[1] + p[2] * xdot[2] + p[3] * xdot[3]
}

/// Spinor pseudo-norm zbar z = |z0|^2 + |z1|^2 - |z2|^2 - |z3|^2.
#[inline]
pub fn spinor_pseudo_norm(zr: Vec4, zi: Vec4) -> f64 {
    zr[0] * zr[0] + zr[1] * zr[1] - zr[2] * zr[2] - zr[3] * zr[3]
        + zi[0] * zi[0] + zi[1] * zi[1] - zi[2] * zi[2] - zi[3] * zi[3]
}
