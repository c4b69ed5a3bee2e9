use f16_core::LogSink;
use f16_tables::{AxisRegistry, Interpolator, TensorCatalog, TensorId};

/// Every named coefficient the dynamics assembly reads out of the aero
/// tables. One variant per lookup a hand-written wrapper function would
/// expose (`hifi_C`, `hifi_damping`, ...) — kept as a flat list plus a
/// single dispatcher instead of 43 near-identical functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoefficientId {
    Cx,
    CxLef,
    Cxq,
    CxqLef,
    Cz,
    CzLef,
    Czq,
    CzqLef,
    Cm,
    CmLef,
    Cmq,
    CmqLef,
    DCm,
    Cy,
    CyLef,
    CyA20,
    CyA20Lef,
    CyR30,
    Cyp,
    Cyr,
    CypLef,
    CyrLef,
    Cn,
    CnLef,
    CnA20,
    CnA20Lef,
    CnR30,
    Cnr,
    Cnp,
    CnrLef,
    CnpLef,
    DCnBeta,
    Cl,
    ClLef,
    ClA20,
    ClA20Lef,
    ClR30,
    Clp,
    Clr,
    ClpLef,
    ClrLef,
    DClBeta,
    EtaEl,
}

impl CoefficientId {
    fn tensor(self) -> TensorId {
        use CoefficientId::*;
        match self {
            Cx => TensorId::Cx0120,
            CxLef => TensorId::Cx0820,
            Cxq => TensorId::Cx1120,
            CxqLef => TensorId::Cx1420,
            Cz => TensorId::Cz0120,
            CzLef => TensorId::Cz0820,
            Czq => TensorId::Cz1120,
            CzqLef => TensorId::Cz1420,
            Cm => TensorId::Cm0120,
            CmLef => TensorId::Cm0820,
            Cmq => TensorId::Cm1120,
            CmqLef => TensorId::Cm1420,
            DCm => TensorId::Cm9999,
            Cy => TensorId::Cy0320,
            CyLef => TensorId::Cy0820,
            CyA20 => TensorId::Cy0620,
            CyA20Lef => TensorId::Cy0920,
            CyR30 => TensorId::Cy0720,
            Cyp => TensorId::Cy1220,
            Cyr => TensorId::Cy1320,
            CypLef => TensorId::Cy1520,
            CyrLef => TensorId::Cy1620,
            Cn => TensorId::Cn0120,
            CnLef => TensorId::Cn0820,
            CnA20 => TensorId::Cn0620,
            CnA20Lef => TensorId::Cn0920,
            CnR30 => TensorId::Cn0720,
            Cnr => TensorId::Cn1320,
            Cnp => TensorId::Cn1220,
            CnrLef => TensorId::Cn1620,
            CnpLef => TensorId::Cn1520,
            DCnBeta => TensorId::Cn9999,
            Cl => TensorId::Cl0120,
            ClLef => TensorId::Cl0820,
            ClA20 => TensorId::Cl0620,
            ClA20Lef => TensorId::Cl0920,
            ClR30 => TensorId::Cl0720,
            Clp => TensorId::Cl1220,
            Clr => TensorId::Cl1320,
            ClpLef => TensorId::Cl1520,
            ClrLef => TensorId::Cl1620,
            DClBeta => TensorId::Cl9999,
            EtaEl => TensorId::EtaDh1,
        }
    }

    fn name(self) -> &'static str {
        self.tensor().file_name()
    }
}

/// Borrowed view over a loaded catalog, used to evaluate the 43 named
/// coefficients the dynamics assembly needs. `TensorId::Cm1020` has no
/// variant here — the catalog still loads and validates it, nothing ever
/// queries it.
pub struct CoefficientSet<'a> {
    axes: &'a AxisRegistry,
    catalog: &'a TensorCatalog,
    log: &'a dyn LogSink,
}

impl<'a> CoefficientSet<'a> {
    pub fn new(axes: &'a AxisRegistry, catalog: &'a TensorCatalog, log: &'a dyn LogSink) -> Self {
        Self { axes, catalog, log }
    }

    /// Evaluates one coefficient at `(alpha, beta, dh)` (degrees), picking
    /// up only the coordinates the table's axis set actually declares.
    pub fn query(&self, id: CoefficientId, alpha: f64, beta: f64, dh: f64) -> f64 {
        let tensor_id = id.tensor();
        let axis_set = tensor_id.axis_set();
        let tensor = self.catalog.get(tensor_id);
        let point = match axis_set.axes().len() {
            1 if matches!(axis_set, f16_tables::AxisSetId::Dh1) => vec![dh],
            1 => vec![alpha],
            2 => vec![alpha, beta],
            3 => vec![alpha, beta, dh],
            n => unreachable!("no axis set has {n} dimensions"),
        };
        Interpolator::interpolate(tensor, self.axes, axis_set, &point, id.name(), self.log)
    }

    pub fn cx(&self, alpha: f64, beta: f64, dh: f64) -> f64 {
        self.query(CoefficientId::Cx, alpha, beta, dh)
    }
    pub fn cx_lef(&self, alpha: f64, beta: f64) -> f64 {
        self.query(CoefficientId::CxLef, alpha, beta, 0.0)
    }
    pub fn cxq(&self, alpha: f64) -> f64 {
        self.query(CoefficientId::Cxq, alpha, 0.0, 0.0)
    }
    pub fn cxq_lef(&self, alpha: f64) -> f64 {
        self.query(CoefficientId::CxqLef, alpha, 0.0, 0.0)
    }

    pub fn cz(&self, alpha: f64, beta: f64, dh: f64) -> f64 {
        self.query(CoefficientId::Cz, alpha, beta, dh)
    }
    pub fn cz_lef(&self, alpha: f64, beta: f64) -> f64 {
        self.query(CoefficientId::CzLef, alpha, beta, 0.0)
    }
    pub fn czq(&self, alpha: f64) -> f64 {
        self.query(CoefficientId::Czq, alpha, 0.0, 0.0)
    }
    pub fn czq_lef(&self, alpha: f64) -> f64 {
        self.query(CoefficientId::CzqLef, alpha, 0.0, 0.0)
    }

    pub fn cm(&self, alpha: f64, beta: f64, dh: f64) -> f64 {
        self.query(CoefficientId::Cm, alpha, beta, dh)
    }
    pub fn cm_lef(&self, alpha: f64, beta: f64) -> f64 {
        self.query(CoefficientId::CmLef, alpha, beta, 0.0)
    }
    pub fn cmq(&self, alpha: f64) -> f64 {
        self.query(CoefficientId::Cmq, alpha, 0.0, 0.0)
    }
    pub fn cmq_lef(&self, alpha: f64) -> f64 {
        self.query(CoefficientId::CmqLef, alpha, 0.0, 0.0)
    }
    pub fn dcm(&self, alpha: f64) -> f64 {
        self.query(CoefficientId::DCm, alpha, 0.0, 0.0)
    }

    pub fn cy(&self, alpha: f64, beta: f64) -> f64 {
        self.query(CoefficientId::Cy, alpha, beta, 0.0)
    }
    pub fn cy_lef(&self, alpha: f64, beta: f64) -> f64 {
        self.query(CoefficientId::CyLef, alpha, beta, 0.0)
    }
    pub fn cy_a20(&self, alpha: f64, beta: f64) -> f64 {
        self.query(CoefficientId::CyA20, alpha, beta, 0.0)
    }
    pub fn cy_a20_lef(&self, alpha: f64, beta: f64) -> f64 {
        self.query(CoefficientId::CyA20Lef, alpha, beta, 0.0)
    }
    pub fn cy_r30(&self, alpha: f64, beta: f64) -> f64 {
        self.query(CoefficientId::CyR30, alpha, beta, 0.0)
    }
    pub fn cyp(&self, alpha: f64) -> f64 {
        self.query(CoefficientId::Cyp, alpha, 0.0, 0.0)
    }
    pub fn cyr(&self, alpha: f64) -> f64 {
        self.query(CoefficientId::Cyr, alpha, 0.0, 0.0)
    }
    pub fn cyp_lef(&self, alpha: f64) -> f64 {
        self.query(CoefficientId::CypLef, alpha, 0.0, 0.0)
    }
    pub fn cyr_lef(&self, alpha: f64) -> f64 {
        self.query(CoefficientId::CyrLef, alpha, 0.0, 0.0)
    }

    pub fn cn(&self, alpha: f64, beta: f64, dh: f64) -> f64 {
        self.query(CoefficientId::Cn, alpha, beta, dh)
    }
    pub fn cn_lef(&self, alpha: f64, beta: f64) -> f64 {
        self.query(CoefficientId::CnLef, alpha, beta, 0.0)
    }
    pub fn cn_a20(&self, alpha: f64, beta: f64) -> f64 {
        self.query(CoefficientId::CnA20, alpha, beta, 0.0)
    }
    pub fn cn_a20_lef(&self, alpha: f64, beta: f64) -> f64 {
        self.query(CoefficientId::CnA20Lef, alpha, beta, 0.0)
    }
    pub fn cn_r30(&self, alpha: f64, beta: f64) -> f64 {
        self.query(CoefficientId::CnR30, alpha, beta, 0.0)
    }
    pub fn cnr(&self, alpha: f64) -> f64 {
        self.query(CoefficientId::Cnr, alpha, 0.0, 0.0)
    }
    pub fn cnp(&self, alpha: f64) -> f64 {
        self.query(CoefficientId::Cnp, alpha, 0.0, 0.0)
    }
    pub fn cnr_lef(&self, alpha: f64) -> f64 {
        self.query(CoefficientId::CnrLef, alpha, 0.0, 0.0)
    }
    pub fn cnp_lef(&self, alpha: f64) -> f64 {
        self.query(CoefficientId::CnpLef, alpha, 0.0, 0.0)
    }
    pub fn dcn_beta(&self, alpha: f64) -> f64 {
        self.query(CoefficientId::DCnBeta, alpha, 0.0, 0.0)
    }

    pub fn cl(&self, alpha: f64, beta: f64, dh: f64) -> f64 {
        self.query(CoefficientId::Cl, alpha, beta, dh)
    }
    pub fn cl_lef(&self, alpha: f64, beta: f64) -> f64 {
        self.query(CoefficientId::ClLef, alpha, beta, 0.0)
    }
    pub fn cl_a20(&self, alpha: f64, beta: f64) -> f64 {
        self.query(CoefficientId::ClA20, alpha, beta, 0.0)
    }
    pub fn cl_a20_lef(&self, alpha: f64, beta: f64) -> f64 {
        self.query(CoefficientId::ClA20Lef, alpha, beta, 0.0)
    }
    pub fn cl_r30(&self, alpha: f64, beta: f64) -> f64 {
        self.query(CoefficientId::ClR30, alpha, beta, 0.0)
    }
    pub fn clp(&self, alpha: f64) -> f64 {
        self.query(CoefficientId::Clp, alpha, 0.0, 0.0)
    }
    pub fn clr(&self, alpha: f64) -> f64 {
        self.query(CoefficientId::Clr, alpha, 0.0, 0.0)
    }
    pub fn clp_lef(&self, alpha: f64) -> f64 {
        self.query(CoefficientId::ClpLef, alpha, 0.0, 0.0)
    }
    pub fn clr_lef(&self, alpha: f64) -> f64 {
        self.query(CoefficientId::ClrLef, alpha, 0.0, 0.0)
    }
    pub fn dcl_beta(&self, alpha: f64) -> f64 {
        self.query(CoefficientId::DClBeta, alpha, 0.0, 0.0)
    }

    pub fn eta_el(&self, dh: f64) -> f64 {
        self.query(CoefficientId::EtaEl, 0.0, 0.0, dh)
    }
}
