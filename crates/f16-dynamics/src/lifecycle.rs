use std::path::Path;

use f16_core::{load_control_limits, load_plant_constants, Control, ControlLimit, Error, Extras,
    LogSink, PlantConstants, State, StateDot};
use f16_tables::{AxisRegistry, TensorCatalog};

use crate::assembly;
use f16_aero::CoefficientSet;

struct Installation {
    axes: AxisRegistry,
    catalog: TensorCatalog,
    consts: PlantConstants,
    limits: ControlLimit,
}

/// The install/step/uninstall surface a host drives this model through.
///
/// Holds at most one `Installation`. `install` replaces it wholesale —
/// there is no way to mutate a loaded catalog in place, so once `step`
/// starts reading it, it cannot change out from underneath a call. A
/// failed `install` leaves any previous installation untouched (the new
/// axes/catalog are built into locals and only swapped in once loading
/// fully succeeds, so a mid-load error just drops the partially built
/// locals).
pub struct FlightModel {
    log: Box<dyn LogSink>,
    installation: Option<Installation>,
}

impl FlightModel {
    pub fn new(log: Box<dyn LogSink>) -> Self {
        Self {
            log,
            installation: None,
        }
    }

    pub fn is_installed(&self) -> bool {
        self.installation.is_some()
    }

    /// Loads the five axis files and 44 coefficient tables out of
    /// `data_dir`. On success, replaces any prior installation; on
    /// failure, the model is left exactly as it was.
    pub fn install(&mut self, data_dir: &Path) -> Result<(), Error> {
        let axes = AxisRegistry::load(data_dir)?;
        let catalog = TensorCatalog::load(data_dir, &axes)?;
        self.installation = Some(Installation {
            axes,
            catalog,
            consts: load_plant_constants(),
            limits: load_control_limits(),
        });
        Ok(())
    }

    /// Drops the current installation. Calling this when nothing is
    /// installed is not an error.
    pub fn uninstall(&mut self) {
        self.installation = None;
    }

    pub fn control_limits(&self) -> Option<&ControlLimit> {
        self.installation.as_ref().map(|i| &i.limits)
    }

    pub fn plant_constants(&self) -> Option<&PlantConstants> {
        self.installation.as_ref().map(|i| &i.consts)
    }

    /// Evaluates one state derivative. Requires a prior successful
    /// `install`; otherwise returns `Error::NotInitialized`.
    pub fn step(
        &self,
        state: &State,
        control: &Control,
        d_lef_deg: f64,
    ) -> Result<(StateDot, Extras), Error> {
        let installation = self.installation.as_ref().ok_or(Error::NotInitialized)?;
        let coeffs = CoefficientSet::new(&installation.axes, &installation.catalog, self.log.as_ref());
        Ok(assembly::evaluate(
            state,
            control,
            d_lef_deg,
            &installation.consts,
            &coeffs,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use f16_core::NullLogSink;
    use f16_tables::{AxisId, AxisVector, TensorId};
    use std::path::Path as StdPath;

    fn write_fixture(dir: &StdPath) {
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

    fn trim_state() -> State {
        State {
            north: 0.0,
            east: 0.0,
            alt: 15000.0,
            phi: 0.0,
            theta: 0.0,
            psi: 0.0,
            vt: 500.0,
            alpha: 0.05,
            beta: 0.0,
            p: 0.0,
            q: 0.0,
            r: 0.0,
        }
    }

    #[test]
    fn step_before_install_is_not_initialized() {
        let model = FlightModel::new(Box::new(NullLogSink));
        let control = Control {
            thrust: 0.0,
            elevator_deg: 0.0,
            aileron_deg: 0.0,
            rudder_deg: 0.0,
        };
        let err = model.step(&trim_state(), &control, 0.0).unwrap_err();
        assert!(matches!(err, Error::NotInitialized));
    }

    #[test]
    fn install_then_step_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());
        let mut model = FlightModel::new(Box::new(NullLogSink));
        model.install(dir.path()).unwrap();
        assert!(model.is_installed());

        let control = Control {
            thrust: 1000.0,
            elevator_deg: 0.0,
            aileron_deg: 0.0,
            rudder_deg: 0.0,
        };
        let (state_dot, _extras) = model.step(&trim_state(), &control, 0.0).unwrap();
        assert!(state_dot.vt_dot.is_finite());
    }

    #[test]
    fn uninstall_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());
        let mut model = FlightModel::new(Box::new(NullLogSink));
        model.install(dir.path()).unwrap();
        model.uninstall();
        model.uninstall();
        assert!(!model.is_installed());
    }

    #[test]
    fn failed_install_does_not_disturb_existing_installation() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());
        let mut model = FlightModel::new(Box::new(NullLogSink));
        model.install(dir.path()).unwrap();

        let bad_dir = tempfile::tempdir().unwrap();
        let err = model.install(bad_dir.path()).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
        assert!(model.is_installed());
    }
}
