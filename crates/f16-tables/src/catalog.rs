use std::collections::HashMap;
use std::path::Path;

use f16_core::Error;

use crate::registry::{AxisRegistry, AxisSetId};
use crate::tensor::Tensor;

/// One named coefficient table, mirroring the 44 `.dat` files shipped with
/// the HIFI aero data set (`hifi_F16_AeroData.c`'s `loadAerodynamicData`
/// call list). The variant name matches the file's family prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TensorId {
    // 3-D: base aero over (alpha, beta, flap deflection).
    Cx0120,
    Cz0120,
    Cm0120,
    Cn0120,
    Cl0120,
    // 2-D: base Cy, rudder/aileron deltas, LEF deltas.
    Cy0320,
    Cx0820,
    Cz0820,
    Cm0820,
    Cy0820,
    Cn0820,
    Cl0820,
    Cy0620,
    Cn0620,
    Cl0620,
    Cy0720,
    Cn0720,
    Cl0720,
    Cy0920,
    Cn0920,
    Cl0920,
    // 1-D over ALPHA1: damping and residuals.
    Cx1120,
    Cz1120,
    Cm1020,
    Cm1120,
    Cy1220,
    Cy1320,
    Cn1220,
    Cn1320,
    Cl1220,
    Cl1320,
    Cl9999,
    Cm9999,
    Cn9999,
    // 1-D over ALPHA2: LEF damping deltas.
    Cx1420,
    Cz1420,
    Cm1420,
    Cy1520,
    Cy1620,
    Cn1520,
    Cn1620,
    Cl1520,
    Cl1620,
    // 1-D over DH1: elevator effectiveness.
    EtaDh1,
}

impl TensorId {
    pub const ALL: [TensorId; 44] = [
        TensorId::Cx0120,
        TensorId::Cz0120,
        TensorId::Cm0120,
        TensorId::Cn0120,
        TensorId::Cl0120,
        TensorId::Cy0320,
        TensorId::Cx0820,
        TensorId::Cz0820,
        TensorId::Cm0820,
        TensorId::Cy0820,
        TensorId::Cn0820,
        TensorId::Cl0820,
        TensorId::Cy0620,
        TensorId::Cn0620,
        TensorId::Cl0620,
        TensorId::Cy0720,
        TensorId::Cn0720,
        TensorId::Cl0720,
        TensorId::Cy0920,
        TensorId::Cn0920,
        TensorId::Cl0920,
        TensorId::Cx1120,
        TensorId::Cz1120,
        TensorId::Cm1020,
        TensorId::Cm1120,
        TensorId::Cy1220,
        TensorId::Cy1320,
        TensorId::Cn1220,
        TensorId::Cn1320,
        TensorId::Cl1220,
        TensorId::Cl1320,
        TensorId::Cl9999,
        TensorId::Cm9999,
        TensorId::Cn9999,
        TensorId::Cx1420,
        TensorId::Cz1420,
        TensorId::Cm1420,
        TensorId::Cy1520,
        TensorId::Cy1620,
        TensorId::Cn1520,
        TensorId::Cn1620,
        TensorId::Cl1520,
        TensorId::Cl1620,
        TensorId::EtaDh1,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            TensorId::Cx0120 => "CX0120_ALPHA1_BETA1_DH1_201.dat",
            TensorId::Cz0120 => "CZ0120_ALPHA1_BETA1_DH1_301.dat",
            TensorId::Cm0120 => "CM0120_ALPHA1_BETA1_DH1_101.dat",
            TensorId::Cn0120 => "CN0120_ALPHA1_BETA1_DH2_501.dat",
            TensorId::Cl0120 => "CL0120_ALPHA1_BETA1_DH2_601.dat",
            TensorId::Cy0320 => "CY0320_ALPHA1_BETA1_401.dat",
            TensorId::Cx0820 => "CX0820_ALPHA2_BETA1_202.dat",
            TensorId::Cz0820 => "CZ0820_ALPHA2_BETA1_302.dat",
            TensorId::Cm0820 => "CM0820_ALPHA2_BETA1_102.dat",
            TensorId::Cy0820 => "CY0820_ALPHA2_BETA1_402.dat",
            TensorId::Cn0820 => "CN0820_ALPHA2_BETA1_502.dat",
            TensorId::Cl0820 => "CL0820_ALPHA2_BETA1_602.dat",
            TensorId::Cy0620 => "CY0620_ALPHA1_BETA1_403.dat",
            TensorId::Cn0620 => "CN0620_ALPHA1_BETA1_504.dat",
            TensorId::Cl0620 => "CL0620_ALPHA1_BETA1_604.dat",
            TensorId::Cy0720 => "CY0720_ALPHA1_BETA1_405.dat",
            TensorId::Cn0720 => "CN0720_ALPHA1_BETA1_503.dat",
            TensorId::Cl0720 => "CL0720_ALPHA1_BETA1_603.dat",
            TensorId::Cy0920 => "CY0920_ALPHA2_BETA1_404.dat",
            TensorId::Cn0920 => "CN0920_ALPHA2_BETA1_505.dat",
            TensorId::Cl0920 => "CL0920_ALPHA2_BETA1_605.dat",
            TensorId::Cx1120 => "CX1120_ALPHA1_204.dat",
            TensorId::Cz1120 => "CZ1120_ALPHA1_304.dat",
            TensorId::Cm1120 => "CM1120_ALPHA1_104.dat",
            TensorId::Cm1020 => "CM1020_ALPHA1_108.dat",
            TensorId::Cy1220 => "CY1220_ALPHA1_408.dat",
            TensorId::Cy1320 => "CY1320_ALPHA1_406.dat",
            TensorId::Cn1220 => "CN1220_ALPHA1_508.dat",
            TensorId::Cn1320 => "CN1320_ALPHA1_506.dat",
            TensorId::Cl1220 => "CL1220_ALPHA1_608.dat",
            TensorId::Cl1320 => "CL1320_ALPHA1_606.dat",
            TensorId::Cl9999 => "CL9999_ALPHA1_brett.dat",
            TensorId::Cm9999 => "CM9999_ALPHA1_brett.dat",
            TensorId::Cn9999 => "CN9999_ALPHA1_brett.dat",
            TensorId::Cx1420 => "CX1420_ALPHA2_205.dat",
            TensorId::Cz1420 => "CZ1420_ALPHA2_305.dat",
            TensorId::Cm1420 => "CM1420_ALPHA2_105.dat",
            TensorId::Cy1520 => "CY1520_ALPHA2_409.dat",
            TensorId::Cy1620 => "CY1620_ALPHA2_407.dat",
            TensorId::Cn1520 => "CN1520_ALPHA2_509.dat",
            TensorId::Cn1620 => "CN1620_ALPHA2_507.dat",
            TensorId::Cl1520 => "CL1520_ALPHA2_609.dat",
            TensorId::Cl1620 => "CL1620_ALPHA2_607.dat",
            TensorId::EtaDh1 => "ETA_DH1_brett.dat",
        }
    }

    pub fn axis_set(self) -> AxisSetId {
        use TensorId::*;
        match self {
            Cx0120 | Cz0120 | Cm0120 => AxisSetId::Alpha1Beta1Dh1,
            Cn0120 | Cl0120 => AxisSetId::Alpha1Beta1Dh2,
            Cy0320 | Cy0620 | Cn0620 | Cl0620 | Cy0720 | Cn0720 | Cl0720 => {
                AxisSetId::Alpha1Beta1
            }
            Cx1120 | Cz1120 | Cm1020 | Cm1120 | Cy1220 | Cy1320 | Cn1220 | Cn1320 | Cl1220
            | Cl1320 | Cl9999 | Cm9999 | Cn9999 => AxisSetId::Alpha1,
            Cx0820 | Cz0820 | Cm0820 | Cy0820 | Cn0820 | Cl0820 | Cy0920 | Cn0920 | Cl0920 => {
                AxisSetId::Alpha2Beta1
            }
            Cx1420 | Cz1420 | Cm1420 | Cy1520 | Cy1620 | Cn1520 | Cn1620 | Cl1520 | Cl1620 => {
                AxisSetId::Alpha2
            }
            EtaDh1 => AxisSetId::Dh1,
        }
    }
}

/// The full set of 44 loaded coefficient tables, immutable once built.
///
/// `TensorId::Cm1020` has no corresponding lookup in the coefficient
/// façade — nothing downstream reads it, and it is loaded and validated
/// here anyway so a truncated or corrupt copy of that file still fails
/// install the same as any other table.
pub struct TensorCatalog {
    tensors: HashMap<TensorId, Tensor>,
}

impl TensorCatalog {
    pub fn load(data_dir: &Path, axes: &AxisRegistry) -> Result<Self, Error> {
        let mut tensors = HashMap::new();
        for id in TensorId::ALL {
            let n_points = axes.lens(id.axis_set());
            let path = data_dir.join(id.file_name());
            let tensor = Tensor::load(&path, &n_points)?;
            tensors.insert(id, tensor);
        }
        Ok(Self { tensors })
    }

    pub fn get(&self, id: TensorId) -> &Tensor {
        self.tensors
            .get(&id)
            .expect("TensorCatalog::load populates every TensorId")
    }
}
