// src/state.rs

use crate::dynamics::Rates;
use crate::vec4::{add_scaled, Vec4};

/// Complete simulation state: lab-frame 4-position, conjugate 4-momentum,
/// and the internal spinor z = zr + i*zi.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargeState {
    pub x: Vec4,
    pub p: Vec4,
    pub zr: Vec4,
    pub zi: Vec4,
}

impl ChargeState {
    /// Independent stage state `self + s * k`. Each sub-vector advances
    /// with its own derivative; nothing aliases the base state.
    #[inline]
    pub fn add_scaled(&self, s: f64, k: &Rates) -> ChargeState {
        ChargeState {
            x: add_scaled(self.x, s, k.xdot),
            p: add_scaled(self.p, s, k.pdot),
            zr: add_scaled(self.zr, s, k.zrdot),
            zi: add_scaled(self.zi, s, k.zidot),
        }
    }
}
