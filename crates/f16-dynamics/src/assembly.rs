use f16_aero::CoefficientSet;
use f16_core::{accels, atmos, Control, Extras, PlantConstants, State, StateDot};

/// Deep-stall pitching-moment correction. Always zero on the high-fidelity
/// path; kept as a named function so its place in the `Cm_tot` sum stays
/// visible rather than disappearing as a silent `0.0` literal.
fn delta_cm_ds(_alpha_deg: f64) -> f64 {
    0.0
}

/// Synthesizes the six total aerodynamic coefficients and the rigid-body
/// equations of motion into one state derivative, following the
/// coefficient buildup on NASA report p.37-40 and the Udot/Vdot/Wdot,
/// Pdot/Qdot/Rdot equations on p.32/p.36/p.82 of Stevens & Lewis.
pub fn evaluate(
    state: &State,
    control: &Control,
    d_lef_deg: f64,
    consts: &PlantConstants,
    coeffs: &CoefficientSet<'_>,
) -> (StateDot, Extras) {
    let vt = state.vt_clamped();
    let (sa, ca) = state.alpha.sin_cos();
    let (sb, cb) = state.beta.sin_cos();
    let (st, ct) = state.theta.sin_cos();
    let tt = state.theta.tan();
    let (sphi, cphi) = state.phi.sin_cos();
    let (spsi, cpsi) = state.psi.sin_cos();

    let alpha_deg = state.alpha.to_degrees();
    let beta_deg = state.beta.to_degrees();
    let el = control.elevator_deg;

    let dail = control.aileron_deg / 21.5;
    let drud = control.rudder_deg / 30.0;
    let dlef = 1.0 - d_lef_deg / 25.0;

    let (mach, qbar, ps) = atmos(state.alt, vt);

    // Navigation equations.
    let u = vt * ca * cb;
    let v = vt * sb;
    let w = vt * sa * cb;

    let north_dot =
        u * (ct * cpsi) + v * (sphi * cpsi * st - cphi * spsi) + w * (cphi * st * cpsi + sphi * spsi);
    let east_dot =
        u * (ct * spsi) + v * (sphi * spsi * st + cphi * cpsi) + w * (cphi * st * spsi - sphi * cpsi);
    let alt_dot = u * st - v * (sphi * ct) - w * (cphi * ct);

    // Euler-rate kinematics.
    let phi_dot = state.p + tt * (state.q * sphi + state.r * cphi);
    let theta_dot = state.q * cphi - state.r * sphi;
    let psi_dot = (state.q * sphi + state.r * cphi) / ct;

    // Base aero, over (alpha, beta, elevator).
    let cx = coeffs.cx(alpha_deg, beta_deg, el);
    let cz = coeffs.cz(alpha_deg, beta_deg, el);
    let cm = coeffs.cm(alpha_deg, beta_deg, el);
    let cy = coeffs.cy(alpha_deg, beta_deg);
    let cn = coeffs.cn(alpha_deg, beta_deg, el);
    let cl = coeffs.cl(alpha_deg, beta_deg, el);

    // Damping, over alpha only.
    let cxq = coeffs.cxq(alpha_deg);
    let cyr = coeffs.cyr(alpha_deg);
    let cyp = coeffs.cyp(alpha_deg);
    let czq = coeffs.czq(alpha_deg);
    let clr = coeffs.clr(alpha_deg);
    let clp = coeffs.clp(alpha_deg);
    let cmq = coeffs.cmq(alpha_deg);
    let cnr = coeffs.cnr(alpha_deg);
    let cnp = coeffs.cnp(alpha_deg);

    // Leading-edge-flap deltas, over (alpha, beta).
    let delta_cx_lef = coeffs.cx_lef(alpha_deg, beta_deg);
    let delta_cz_lef = coeffs.cz_lef(alpha_deg, beta_deg);
    let delta_cm_lef = coeffs.cm_lef(alpha_deg, beta_deg);
    let delta_cy_lef = coeffs.cy_lef(alpha_deg, beta_deg);
    let delta_cn_lef = coeffs.cn_lef(alpha_deg, beta_deg);
    let delta_cl_lef = coeffs.cl_lef(alpha_deg, beta_deg);

    // Leading-edge-flap damping deltas, over alpha only.
    let delta_cxq_lef = coeffs.cxq_lef(alpha_deg);
    let delta_cyr_lef = coeffs.cyr_lef(alpha_deg);
    let delta_cyp_lef = coeffs.cyp_lef(alpha_deg);
    let delta_clr_lef = coeffs.clr_lef(alpha_deg);
    let delta_clp_lef = coeffs.clp_lef(alpha_deg);
    let delta_cmq_lef = coeffs.cmq_lef(alpha_deg);
    let delta_cnr_lef = coeffs.cnr_lef(alpha_deg);
    let delta_cnp_lef = coeffs.cnp_lef(alpha_deg);

    // Rudder and aileron deltas.
    let delta_cy_r30 = coeffs.cy_r30(alpha_deg, beta_deg);
    let delta_cn_r30 = coeffs.cn_r30(alpha_deg, beta_deg);
    let delta_cl_r30 = coeffs.cl_r30(alpha_deg, beta_deg);
    let delta_cy_a20 = coeffs.cy_a20(alpha_deg, beta_deg);
    let delta_cy_a20_lef = coeffs.cy_a20_lef(alpha_deg, beta_deg);
    let delta_cn_a20 = coeffs.cn_a20(alpha_deg, beta_deg);
    let delta_cn_a20_lef = coeffs.cn_a20_lef(alpha_deg, beta_deg);
    let delta_cl_a20 = coeffs.cl_a20(alpha_deg, beta_deg);
    let delta_cl_a20_lef = coeffs.cl_a20_lef(alpha_deg, beta_deg);

    // Residuals.
    let delta_cnbeta = coeffs.dcn_beta(alpha_deg);
    let delta_clbeta = coeffs.dcl_beta(alpha_deg);
    let delta_cm = coeffs.dcm(alpha_deg);
    let eta_el = coeffs.eta_el(el);
    let delta_cm_ds = delta_cm_ds(alpha_deg);

    let span = consts.span;
    let cbar = consts.mean_chord;

    let dxdq = (cbar / (2.0 * vt)) * (cxq + delta_cxq_lef * dlef);
    let cx_tot = cx + delta_cx_lef * dlef + dxdq * state.q;

    // Note: dZdQ reuses delta_Cz_lef, not delta_Czq_lef, matching the
    // aero data set this model's tables were distilled from.
    let dzdq = (cbar / (2.0 * vt)) * (czq + delta_cz_lef * dlef);
    let cz_tot = cz + delta_cz_lef * dlef + dzdq * state.q;

    let dmdq = (cbar / (2.0 * vt)) * (cmq + delta_cmq_lef * dlef);
    let cm_tot = cm * eta_el
        + cz_tot * (consts.x_cg_ref - consts.x_cg)
        + delta_cm_lef * dlef
        + dmdq * state.q
        + delta_cm
        + delta_cm_ds;

    let dydail = delta_cy_a20 + delta_cy_a20_lef * dlef;
    let dydr = (span / (2.0 * vt)) * (cyr + delta_cyr_lef * dlef);
    let dydp = (span / (2.0 * vt)) * (cyp + delta_cyp_lef * dlef);
    let cy_tot = cy
        + delta_cy_lef * dlef
        + dydail * dail
        + delta_cy_r30 * drud
        + dydr * state.r
        + dydp * state.p;

    let dndail = delta_cn_a20 + delta_cn_a20_lef * dlef;
    let dndr = (span / (2.0 * vt)) * (cnr + delta_cnr_lef * dlef);
    let dndp = (span / (2.0 * vt)) * (cnp + delta_cnp_lef * dlef);
    let cn_tot = cn + delta_cn_lef * dlef - cy_tot * (consts.x_cg_ref - consts.x_cg) * (cbar / span)
        + dndail * dail
        + delta_cn_r30 * drud
        + dndr * state.r
        + dndp * state.p
        + delta_cnbeta * beta_deg;

    let dldail = delta_cl_a20 + delta_cl_a20_lef * dlef;
    let dldr = (span / (2.0 * vt)) * (clr + delta_clr_lef * dlef);
    let dldp = (span / (2.0 * vt)) * (clp + delta_clp_lef * dlef);
    let cl_tot = cl
        + delta_cl_lef * dlef
        + dldail * dail
        + delta_cl_r30 * drud
        + dldr * state.r
        + dldp * state.p
        + delta_clbeta * beta_deg;

    let g = consts.gravity;
    let m = consts.mass;
    let s = consts.planform_area;

    let u_dot = state.r * v - state.q * w - g * st + qbar * s * cx_tot / m + control.thrust / m;
    let v_dot = state.p * w - state.r * u + g * ct * sphi + qbar * s * cy_tot / m;
    let w_dot = state.q * u - state.p * v + g * ct * cphi + qbar * s * cz_tot / m;

    let vt_dot = (u * u_dot + v * v_dot + w * w_dot) / vt;
    let alpha_dot = (u * w_dot - w * u_dot) / (u * u + w * w);
    let beta_dot = (v_dot * vt - v * vt_dot) / (vt * vt * cb);

    let l_tot = cl_tot * qbar * s * span;
    let m_tot = cm_tot * qbar * s * cbar;
    let n_tot = cn_tot * qbar * s * span;

    let jx = consts.jx;
    let jy = consts.jy;
    let jz = consts.jz;
    let jxz = consts.jxz;
    let heng = consts.engine_angular_momentum;
    let denom = jx * jz - jxz * jxz;

    let p_dot = (jz * l_tot + jxz * n_tot
        - (jz * (jz - jy) + jxz * jxz) * state.q * state.r
        + jxz * (jx - jy + jz) * state.p * state.q
        + jxz * state.q * heng)
        / denom;
    let q_dot =
        (m_tot + (jz - jx) * state.p * state.r - jxz * (state.p * state.p - state.r * state.r)
            - state.r * heng)
            / jy;
    let r_dot = (jx * n_tot + jxz * l_tot
        + (jx * (jx - jy) + jxz * jxz) * state.p * state.q
        - jxz * (jx - jy + jz) * state.q * state.r
        + jx * state.q * heng)
        / denom;

    let state_dot = StateDot {
        north_dot,
        east_dot,
        alt_dot,
        phi_dot,
        theta_dot,
        psi_dot,
        vt_dot,
        alpha_dot,
        beta_dot,
        p_dot,
        q_dot,
        r_dot,
    };

    let (anx, any, anz) = accels(state, &state_dot);
    let extras = Extras {
        anx,
        any,
        anz,
        mach,
        qbar,
        ps,
    };

    (state_dot, extras)
}
