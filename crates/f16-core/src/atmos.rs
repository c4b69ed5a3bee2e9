/// Closed-form (altitude, true airspeed) → (Mach, dynamic pressure, static
/// pressure) mapping.
///
/// The 35000 ft threshold uses `<` (not `<=`) on purpose, to match
/// published reference outputs bit for bit.
pub fn atmos(alt: f64, vt: f64) -> (f64, f64, f64) {
    let tfac = 1.0 - 0.703e-5 * alt;
    let t = if alt < 35000.0 { 519.0 * tfac } else { 390.0 };
    let rho = 2.377e-3 * tfac.powf(4.14);
    let mach = vt / (1.4 * 1716.3 * t).sqrt();
    let qbar = 0.5 * rho * vt * vt;
    let mut ps = 1715.0 * rho * t;
    if ps == 0.0 {
        ps = 1715.0;
    }
    (mach, qbar, ps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_airspeed_gives_zero_mach_and_qbar() {
        let (mach, qbar, ps) = atmos(15000.0, 0.0);
        assert_eq!(mach, 0.0);
        assert_eq!(qbar, 0.0);
        assert!(ps > 0.0);
    }

    #[test]
    fn altitude_clamp_above_35000() {
        // At alt >= 35000 the temperature term is pinned to 390 R, so the
        // Mach computed from vt must match that fixed-T formula exactly.
        let alt = 50000.0;
        let vt = 800.0;
        let (mach, _, _) = atmos(alt, vt);
        let expected_mach = vt / (1.4 * 1716.3 * 390.0_f64).sqrt();
        assert_relative_eq!(mach, expected_mach, epsilon = 1e-12);
    }

    #[test]
    fn below_threshold_uses_lapsed_temperature() {
        let alt = 34999.0;
        let vt = 500.0;
        let tfac = 1.0 - 0.703e-5 * alt;
        let expected_mach = vt / (1.4 * 1716.3 * (519.0 * tfac)).sqrt();
        let (mach, _, _) = atmos(alt, vt);
        assert_relative_eq!(mach, expected_mach, epsilon = 1e-12);
    }

    #[test]
    fn static_pressure_never_reported_as_zero() {
        // ps can only be exactly zero if rho or T vanish; the substitution
        // guards against a degenerate read.
        let (_, _, ps) = atmos(0.0, 100.0);
        assert!(ps > 0.0);
    }
}
