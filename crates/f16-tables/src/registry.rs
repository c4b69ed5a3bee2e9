use std::collections::HashMap;
use std::path::Path;

use f16_core::Error;

use crate::axis::AxisVector;

/// The five breakpoint vectors the HIFI tables are built from.
///
/// Lengths are fixed by the data set, not discovered: each file is
/// validated against a hardcoded expected length rather than trusting
/// whatever the file happens to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisId {
    Alpha1,
    Alpha2,
    Beta1,
    Dh1,
    Dh2,
}

impl AxisId {
    pub const ALL: [AxisId; 5] = [
        AxisId::Alpha1,
        AxisId::Alpha2,
        AxisId::Beta1,
        AxisId::Dh1,
        AxisId::Dh2,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            AxisId::Alpha1 => "ALPHA1.dat",
            AxisId::Alpha2 => "ALPHA2.dat",
            AxisId::Beta1 => "BETA1.dat",
            AxisId::Dh1 => "DH1.dat",
            AxisId::Dh2 => "DH2.dat",
        }
    }

    pub fn expected_len(self) -> usize {
        match self {
            AxisId::Alpha1 => 20,
            AxisId::Alpha2 => 14,
            AxisId::Beta1 => 19,
            AxisId::Dh1 => 5,
            AxisId::Dh2 => 3,
        }
    }
}

/// One of the seven axis combinations the catalog's 44 tensors are built
/// over. Every tensor declares one of these; there is no eighth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisSetId {
    Alpha1,
    Alpha2,
    Dh1,
    Alpha1Beta1,
    Alpha2Beta1,
    Alpha1Beta1Dh1,
    Alpha1Beta1Dh2,
}

impl AxisSetId {
    /// Axis order matches the dimension order the tensor data was packed
    /// in: fastest-varying axis first, consistent with the column-major
    /// stride convention `tensor::index` uses.
    pub fn axes(self) -> &'static [AxisId] {
        match self {
            AxisSetId::Alpha1 => &[AxisId::Alpha1],
            AxisSetId::Alpha2 => &[AxisId::Alpha2],
            AxisSetId::Dh1 => &[AxisId::Dh1],
            AxisSetId::Alpha1Beta1 => &[AxisId::Alpha1, AxisId::Beta1],
            AxisSetId::Alpha2Beta1 => &[AxisId::Alpha2, AxisId::Beta1],
            AxisSetId::Alpha1Beta1Dh1 => &[AxisId::Alpha1, AxisId::Beta1, AxisId::Dh1],
            AxisSetId::Alpha1Beta1Dh2 => &[AxisId::Alpha1, AxisId::Beta1, AxisId::Dh2],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AxisSetId::Alpha1 => "ALPHA1",
            AxisSetId::Alpha2 => "ALPHA2",
            AxisSetId::Dh1 => "DH1",
            AxisSetId::Alpha1Beta1 => "ALPHA1*BETA1",
            AxisSetId::Alpha2Beta1 => "ALPHA2*BETA1",
            AxisSetId::Alpha1Beta1Dh1 => "ALPHA1*BETA1*DH1",
            AxisSetId::Alpha1Beta1Dh2 => "ALPHA1*BETA1*DH2",
        }
    }
}

/// Owns the five loaded breakpoint vectors. Built once at install time and
/// never mutated afterwards.
pub struct AxisRegistry {
    axes: HashMap<AxisId, AxisVector>,
}

impl AxisRegistry {
    pub fn load(data_dir: &Path) -> Result<Self, Error> {
        let mut axes = HashMap::new();
        for id in AxisId::ALL {
            let path = data_dir.join(id.file_name());
            let vector = AxisVector::load(&path, id.expected_len())?;
            axes.insert(id, vector);
        }
        Ok(Self { axes })
    }

    pub fn get(&self, id: AxisId) -> &AxisVector {
        self.axes
            .get(&id)
            .expect("AxisRegistry::load populates every AxisId")
    }

    pub fn lens(&self, set: AxisSetId) -> Vec<usize> {
        set.axes().iter().map(|&id| self.get(id).len()).collect()
    }
}
