use std::path::Path;

use f16_core::{Control, NullLogSink, State};
use f16_dynamics::FlightModel;
use f16_tables::{AxisId, AxisVector, TensorId};

fn write_fixture(dir: &Path) {
    let axes = [
        (AxisId::Alpha1, 20),
        (AxisId::Alpha2, 14),
        (AxisId::Beta1, 19),
        (AxisId::Dh1, 5),
        (AxisId::Dh2, 3),
    ];
    for (id, len) in axes {
        let start = -((len as f64 - 1.0) / 2.0);
        let values: Vec<f64> = (0..len).map(|i| start + i as f64).collect();
        AxisVector::from_values(values)
            .write_to(&dir.join(id.file_name()))
            .unwrap();
    }
    for id in TensorId::ALL {
        let n_points: Vec<usize> = id
            .axis_set()
            .axes()
            .iter()
            .map(|&a| a.expected_len())
            .collect();
        let total: usize = n_points.iter().product();
        let body = vec!["0.0"; total].join(" ");
        std::fs::write(dir.join(id.file_name()), body).unwrap();
    }
}

/// A near-trim point at 15000 ft / 500 ft/s with `theta == alpha`, zero
/// sideslip and zero body rates. The navigation and kinematic derivatives
/// below hold regardless of what the aero tables say, since they only
/// depend on `state`, not on any coefficient lookup.
#[test]
fn trim_point_navigation_and_atmosphere_match_closed_form() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());

    let mut model = FlightModel::new(Box::new(NullLogSink));
    model.install(dir.path()).unwrap();

    let alpha = 0.0790758040827099;
    let state = State {
        north: 0.0,
        east: 0.0,
        alt: 15000.0,
        phi: 0.0,
        theta: alpha,
        psi: 0.0,
        vt: 500.0,
        alpha,
        beta: 0.0,
        p: 0.0,
        q: 0.0,
        r: 0.0,
    };
    let control = Control {
        thrust: 2109.41286903712,
        elevator_deg: -2.24414978017729,
        aileron_deg: -0.0935778861396136,
        rudder_deg: 0.0944687551889544,
    };
    let d_lef = 6.28161378774449;

    let (state_dot, extras) = model.step(&state, &control, d_lef).unwrap();

    // Heading-aligned, no sideslip: north_dot collapses to vt*cos(alpha)*cos(theta)
    // and east_dot vanishes.
    let expected_north_dot = state.vt * state.alpha.cos() * state.theta.cos();
    assert!((state_dot.north_dot - expected_north_dot).abs() < 1e-6);
    assert!(state_dot.east_dot.abs() < 1e-9);

    // Zero body rates and zero bank give zero Euler rates regardless of the
    // aero tables.
    assert!(state_dot.phi_dot.abs() < 1e-9);
    assert!(state_dot.theta_dot.abs() < 1e-9);
    assert!(state_dot.psi_dot.abs() < 1e-9);

    for d in [
        state_dot.vt_dot,
        state_dot.alpha_dot,
        state_dot.beta_dot,
        state_dot.p_dot,
        state_dot.q_dot,
        state_dot.r_dot,
    ] {
        assert!(d.is_finite());
    }

    // Mach/qbar/ps come straight out of the closed-form atmosphere model and
    // do not depend on any coefficient lookup.
    let tfac = 1.0 - 0.703e-5 * state.alt;
    let t = 519.0 * tfac;
    let expected_mach = state.vt / (1.4 * 1716.3 * t).sqrt();
    let rho = 2.377e-3 * tfac.powf(4.14);
    let expected_qbar = 0.5 * rho * state.vt * state.vt;
    let expected_ps = 1715.0 * rho * t;
    assert!((extras.mach - expected_mach).abs() < 1e-9);
    assert!((extras.qbar - expected_qbar).abs() < 1e-9);
    assert!((extras.ps - expected_ps).abs() < 1e-9);

    model.uninstall();
}

/// Running the same scenario twice through independently installed models
/// must produce identical outputs — no hidden shared mutable state.
#[test]
fn two_independent_installations_agree() {
    let dir_a = tempfile::tempdir().unwrap();
    write_fixture(dir_a.path());
    let dir_b = tempfile::tempdir().unwrap();
    write_fixture(dir_b.path());

    let mut model_a = FlightModel::new(Box::new(NullLogSink));
    let mut model_b = FlightModel::new(Box::new(NullLogSink));
    model_a.install(dir_a.path()).unwrap();
    model_b.install(dir_b.path()).unwrap();

    let state = State {
        north: 0.0,
        east: 0.0,
        alt: 15000.0,
        phi: 0.0,
        theta: 0.0790758040827099,
        psi: 0.0,
        vt: 500.0,
        alpha: 0.0790758040827099,
        beta: 0.0,
        p: 0.0,
        q: 0.0,
        r: 0.0,
    };
    let control = Control {
        thrust: 2109.41286903712,
        elevator_deg: -2.24414978017729,
        aileron_deg: -0.0935778861396136,
        rudder_deg: 0.0944687551889544,
    };
    let d_lef = 6.28161378774449;

    let (dot_a, extras_a) = model_a.step(&state, &control, d_lef).unwrap();
    let (dot_b, extras_b) = model_b.step(&state, &control, d_lef).unwrap();

    assert_eq!(dot_a.to_array(), dot_b.to_array());
    assert_eq!(extras_a.mach, extras_b.mach);
    assert_eq!(extras_a.qbar, extras_b.qbar);
    assert_eq!(extras_a.ps, extras_b.ps);
}

/// A query well outside the loaded angle-of-attack envelope degrades to
/// NaN coefficients rather than aborting the whole step.
#[test]
fn out_of_grid_alpha_does_not_abort_step() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let mut model = FlightModel::new(Box::new(NullLogSink));
    model.install(dir.path()).unwrap();

    let state = State {
        north: 0.0,
        east: 0.0,
        alt: 15000.0,
        phi: 0.0,
        theta: 0.0,
        psi: 0.0,
        vt: 500.0,
        alpha: -30.0_f64.to_radians(),
        beta: 0.0,
        p: 0.0,
        q: 0.0,
        r: 0.0,
    };
    let control = Control {
        thrust: 1000.0,
        elevator_deg: 0.0,
        aileron_deg: 0.0,
        rudder_deg: 0.0,
    };

    let (state_dot, _extras) = model.step(&state, &control, 0.0).unwrap();
    // The out-of-grid coefficient lookups degrade to NaN and propagate
    // through the force/moment buildup rather than panicking or silently
    // clamping to zero.
    assert!(state_dot.q_dot.is_nan());
    assert!(state_dot.vt_dot.is_nan());
    // Kinematics that never touch a coefficient table stay finite.
    assert!(state_dot.phi_dot.is_finite());
    assert!(state_dot.psi_dot.is_finite());
}
