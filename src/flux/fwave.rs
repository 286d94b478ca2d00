//! F-wave approximate Riemann solver for the shallow water equations.
//!
//! The flux jump across an edge, corrected by the bathymetry source term,
//! is decomposed onto the Roe eigenvectors:
//!
//! Δf − Δxψ = α₁ r₁ + α₂ r₂,   r_p = (1, λ_p)ᵀ
//!
//! Each wave `α_p r_p` is a net update for the cell it travels into
//! (left for λ_p < 0, right for λ_p > 0).
//!
//! Reference: Bale, LeVeque, Mitran, Rossmanith, "A wave propagation
//! method for conservation laws and balance laws with spatially varying
//! flux functions", SIAM J. Sci. Comput. 24 (2003).

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f64 = 9.81;

/// One side of an edge as seen by the solver.
///
/// `hu` is the momentum component normal to the edge (x-momentum on
/// vertical edges, y-momentum on horizontal ones).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeState {
    pub h: f64,
    pub hu: f64,
    pub b: f64,
}

impl EdgeState {
    #[inline]
    pub const fn new(h: f64, hu: f64, b: f64) -> Self {
        Self { h, hu, b }
    }

    /// Non-positive height marks a dry cell.
    #[inline]
    pub fn is_dry(&self) -> bool {
        self.h <= 0.0
    }

    /// Mirror image used in place of a dry neighbour: same height and
    /// bathymetry, reversed momentum.
    #[inline]
    fn reflected(&self) -> Self {
        Self::new(self.h, -self.hu, self.b)
    }
}

/// Net updates of one edge plus its fastest signal speed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NetUpdates {
    /// Height update for the left cell
    pub h_left: f64,
    /// Height update for the right cell
    pub h_right: f64,
    /// Momentum update for the left cell
    pub hu_left: f64,
    /// Momentum update for the right cell
    pub hu_right: f64,
    /// max(|λ₁|, |λ₂|)
    pub max_wave_speed: f64,
}

impl NetUpdates {
    pub const ZERO: Self = Self {
        h_left: 0.0,
        h_right: 0.0,
        hu_left: 0.0,
        hu_right: 0.0,
        max_wave_speed: 0.0,
    };
}

/// Compute f-wave net updates for the edge between `left` and `right`.
///
/// A dry side is replaced by the reflection of its wet neighbour (a wall
/// at the shoreline); the updates destined for the dry side are then
/// discarded so it never receives flux. Two dry sides produce
/// [`NetUpdates::ZERO`].
///
/// # Arguments
/// * `left` - State of the cell with the lower index
/// * `right` - State of the cell with the higher index
/// * `g` - Gravitational acceleration
///
/// # Returns
/// Net updates for both cells and the edge's maximum wave speed.
///
/// # Panics
/// Panics if the eigenvector matrix is singular, which requires
/// coinciding eigenvalues and cannot happen for wet states.
pub fn fwave_net_updates(left: EdgeState, right: EdgeState, g: f64) -> NetUpdates {
    let left_dry = left.is_dry();
    let right_dry = right.is_dry();

    if left_dry && right_dry {
        return NetUpdates::ZERO;
    }

    let (l, r) = if left_dry {
        (right.reflected(), right)
    } else if right_dry {
        (left, left.reflected())
    } else {
        (left, right)
    };

    let u_l = l.hu / l.h;
    let u_r = r.hu / r.h;
    let sqrt_h_l = l.h.sqrt();
    let sqrt_h_r = r.h.sqrt();

    // Roe averages
    let h_roe = 0.5 * (l.h + r.h);
    let u_roe = (u_l * sqrt_h_l + u_r * sqrt_h_r) / (sqrt_h_l + sqrt_h_r);
    let c_roe = (g * h_roe).sqrt();
    let lambda_1 = u_roe - c_roe;
    let lambda_2 = u_roe + c_roe;

    // Flux jump minus bathymetry source: (0, -g Δb h̄)
    let source_hu = -g * (r.b - l.b) * 0.5 * (l.h + r.h);
    let delta_h = r.hu - l.hu;
    let delta_hu =
        (r.hu * u_r + 0.5 * g * r.h * r.h) - (l.hu * u_l + 0.5 * g * l.h * l.h) - source_hu;

    let (alpha_1, alpha_2) = decompose(lambda_1, lambda_2, delta_h, delta_hu);

    let mut updates = NetUpdates {
        max_wave_speed: lambda_1.abs().max(lambda_2.abs()),
        ..NetUpdates::ZERO
    };
    for (alpha, lambda) in [(alpha_1, lambda_1), (alpha_2, lambda_2)] {
        if lambda < 0.0 {
            updates.h_left += alpha;
            updates.hu_left += alpha * lambda;
        } else if lambda > 0.0 {
            updates.h_right += alpha;
            updates.hu_right += alpha * lambda;
        }
    }

    if left_dry {
        updates.h_left = 0.0;
        updates.hu_left = 0.0;
    }
    if right_dry {
        updates.h_right = 0.0;
        updates.hu_right = 0.0;
    }

    updates
}

/// Solve `[[1, 1], [λ₁, λ₂]] · α = Δ` for the wave strengths.
#[inline]
fn decompose(lambda_1: f64, lambda_2: f64, delta_h: f64, delta_hu: f64) -> (f64, f64) {
    let det = lambda_2 - lambda_1;
    assert!(
        det != 0.0,
        "degenerate eigenvector matrix: λ₁ = λ₂ = {}",
        lambda_1
    );
    let inv_det = 1.0 / det;
    (
        inv_det * (lambda_2 * delta_h - delta_hu),
        inv_det * (delta_hu - lambda_1 * delta_h),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-10;

    #[test]
    fn test_both_dry_is_zero() {
        let u = fwave_net_updates(
            EdgeState::new(0.0, 3.0, 5.0),
            EdgeState::new(-1.0, -2.0, 1.0),
            GRAVITY,
        );
        assert_eq!(u, NetUpdates::ZERO);
    }

    #[test]
    fn test_identical_states_have_no_updates() {
        let q = EdgeState::new(4.0, 2.5, -10.0);
        let u = fwave_net_updates(q, q, GRAVITY);
        assert!(u.h_left.abs() < TOL && u.h_right.abs() < TOL);
        assert!(u.hu_left.abs() < TOL && u.hu_right.abs() < TOL);
        assert!(u.max_wave_speed > 0.0);
    }

    #[test]
    fn test_lake_at_rest_over_step() {
        // h + b = 0 on both sides
        let u = fwave_net_updates(
            EdgeState::new(10.0, 0.0, -10.0),
            EdgeState::new(4.0, 0.0, -4.0),
            GRAVITY,
        );
        assert!(u.h_left.abs() < TOL, "h_left = {}", u.h_left);
        assert!(u.h_right.abs() < TOL, "h_right = {}", u.h_right);
        assert!(u.hu_left.abs() < TOL, "hu_left = {}", u.hu_left);
        assert!(u.hu_right.abs() < TOL, "hu_right = {}", u.hu_right);
    }

    #[test]
    fn test_dam_break_values() {
        // h̄ = 9, ū = 0, c = √(9.81·9)
        let c = (GRAVITY * 9.0).sqrt();
        let u = fwave_net_updates(
            EdgeState::new(10.0, 0.0, 0.0),
            EdgeState::new(8.0, 0.0, 0.0),
            GRAVITY,
        );
        assert_relative_eq!(u.h_left, c, epsilon = TOL);
        assert_relative_eq!(u.h_right, -c, epsilon = TOL);
        assert_relative_eq!(u.hu_left, -0.5 * GRAVITY * 36.0 / 2.0, epsilon = TOL);
        assert_relative_eq!(u.hu_right, -0.5 * GRAVITY * 36.0 / 2.0, epsilon = TOL);
        assert_relative_eq!(u.max_wave_speed, c, epsilon = TOL);
    }

    #[test]
    fn test_updates_sum_to_flux_jump() {
        let left = EdgeState::new(3.0, 1.5, -7.0);
        let right = EdgeState::new(2.0, -0.5, -6.5);
        let u = fwave_net_updates(left, right, GRAVITY);

        let flux = |q: EdgeState| (q.hu, q.hu * q.hu / q.h + 0.5 * GRAVITY * q.h * q.h);
        let (fl_h, fl_hu) = flux(left);
        let (fr_h, fr_hu) = flux(right);
        let source = -GRAVITY * (right.b - left.b) * 0.5 * (left.h + right.h);

        assert_relative_eq!(u.h_left + u.h_right, fr_h - fl_h, epsilon = 1e-9);
        assert_relative_eq!(u.hu_left + u.hu_right, fr_hu - fl_hu - source, epsilon = 1e-9);
    }

    #[test]
    fn test_supercritical_flow_only_updates_right() {
        let u = fwave_net_updates(
            EdgeState::new(1.0, 10.0, 0.0),
            EdgeState::new(2.0, 20.0, 0.0),
            GRAVITY,
        );
        assert_eq!(u.h_left, 0.0);
        assert_eq!(u.hu_left, 0.0);
        assert!(u.h_right != 0.0);
    }

    #[test]
    fn test_dry_left_reflects_right_state() {
        let c = (GRAVITY * 5.0).sqrt();
        let u = fwave_net_updates(
            EdgeState::new(0.0, 0.0, 10.0),
            EdgeState::new(5.0, 2.0, -5.0),
            GRAVITY,
        );
        assert_eq!(u.h_left, 0.0);
        assert_eq!(u.hu_left, 0.0);
        assert_relative_eq!(u.h_right, 2.0, epsilon = TOL);
        assert_relative_eq!(u.hu_right, 2.0 * c, epsilon = TOL);
        assert_relative_eq!(u.max_wave_speed, c, epsilon = TOL);
    }

    #[test]
    fn test_dry_right_mirrors_dry_left() {
        let wet = EdgeState::new(5.0, 2.0, -5.0);
        let dry = EdgeState::new(0.0, 0.0, 10.0);
        let a = fwave_net_updates(dry, wet, GRAVITY);
        // Mirror the configuration: swap sides and flip momentum
        let b = fwave_net_updates(EdgeState::new(5.0, -2.0, -5.0), dry, GRAVITY);
        assert_relative_eq!(b.h_left, a.h_right, epsilon = TOL);
        assert_relative_eq!(b.hu_left, -a.hu_right, epsilon = TOL);
        assert_eq!(b.h_right, 0.0);
        assert_eq!(b.hu_right, 0.0);
    }
}
