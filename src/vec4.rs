// src/vec4.rs

/// Lab-frame 4-vector. Component 0 is time-like, components 1..3 spatial.
pub type Vec4 = [f64; 4];

/// Minkowski inner product with signature (+,-,-,-).
#[inline]
pub fn minkowski_dot(a: Vec4, b: Vec4) -> f64 {
    a[0] * b[0] - a[1] * b[1] - a[2] * b[2] - a[3] * b[3]
}

/// a + s * b, componentwise.
#[inline]
pub fn add_scaled(a: Vec4, s: f64, b: Vec4) -> Vec4 {
    [
        a[0] + s * b[0],
        a[1] + s * b[1],
        a[2] + s * b[2],
        a[3] + s * b[3],
    ]
}

/// Classic RK4 stage combination: (k1 + 2 k2 + 2 k3 + k4) / 6.
#[inline]
pub fn combo_rk4(k1: Vec4, k2: Vec4, k3: Vec4, k4: Vec4) -> Vec4 {
    [
        (k1[0] + 2.0 * k2[0] + 2.0 * k3[0] + k4[0]) / 6.0,
        (k1[1] + 2.0 * k2[1] + 2.0 * k3[1] + k4[1]) / 6.0,
        (k1[2] + 2.0 * k2[2] + 2.0 * k3[2] + k4[2]) / 6.0,
        (k1[3] + 2.0 * k2[3] + 2.0 * k3[3] + k4[3]) / 6.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minkowski_dot_uses_plus_minus_minus_minus() {
        let p = [2.0, 1.0, 0.5, -0.25];
        assert_eq!(minkowski_dot(p, p), 4.0 - 1.0 - 0.25 - 0.0625);

        // Rest momentum on the mass shell
        assert_eq!(minkowski_dot([1.0, 0.0, 0.0, 0.0], [1.0, 0.0, 0.0, 0.0]), 1.0);
    }

    #[test]
    fn add_scaled_is_componentwise() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [1.0, -1.0, 0.5, 0.0];
        assert_eq!(add_scaled(a, 2.0, b), [3.0, 0.0, 4.0, 4.0]);
    }

    #[test]
    fn rk4_stage_combination_is_exact_for_cubic_rates() {
        // For a purely time-dependent rate the RK4 stages reduce to
        // Simpson's rule, which integrates polynomials up to degree 3
        // exactly. Drive one step of y' = (1, 2t, 3t^2, 4t^3) from t = 0
        // and compare against the analytic update (h, h^2, h^3, h^4).
        let rate = |t: f64| -> Vec4 { [1.0, 2.0 * t, 3.0 * t * t, 4.0 * t * t * t] };

        let h = 0.3;
        let y0: Vec4 = [0.0; 4];

        let k1 = rate(0.0);
        let k2 = rate(0.5 * h);
        let k3 = rate(0.5 * h);
        let k4 = rate(h);
        let y1 = add_scaled(y0, h, combo_rk4(k1, k2, k3, k4));

        let exact = [h, h * h, h * h * h, h * h * h * h];
        for i in 0..4 {
            assert!(
                (y1[i] - exact[i]).abs() < 1e-15,
                "component {}: got {}, expected {}",
                i,
                y1[i],
                exact[i]
            );
        }
    }
}
