//! # Beam Definition
//!
//! The single prismatic span shared by the bending and torsion solves:
//! length, end conditions, cross-section and material.
//!
//! A solve resolves the section and material against the injected
//! [`Catalog`] snapshot before any numerics start, so the rest of the run
//! works on plain values.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "length_mm": 1000.0,
//!   "left": "FIXED",
//!   "right": "FREE",
//!   "section": { "shape": "Rectangular", "b_mm": 20.0, "h_mm": 10.0 },
//!   "material": { "source": "Catalog", "name": "S235JR" }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::supports::EndCondition;
use crate::catalog::{Catalog, MaterialProperties};
use crate::errors::CalcResult;
use crate::section::{SectionProperties, SectionShape};

/// Where the material values come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source")]
pub enum MaterialSelection {
    /// Catalog entry by code or name
    Catalog { name: String },
    /// Values entered or edited by the caller
    Custom(MaterialProperties),
}

impl MaterialSelection {
    /// Select a catalog material by code or name
    pub fn catalog(name: impl Into<String>) -> Self {
        MaterialSelection::Catalog { name: name.into() }
    }

    /// Resolve to validated material values
    pub fn resolve(&self, catalog: &Catalog) -> CalcResult<MaterialProperties> {
        let props = match self {
            MaterialSelection::Catalog { name } => catalog.lookup_material(name)?.properties(),
            MaterialSelection::Custom(props) => *props,
        };
        props.validate()?;
        Ok(props)
    }
}

/// A single straight span
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    /// Span length (mm)
    pub length_mm: f64,
    pub left: EndCondition,
    pub right: EndCondition,
    pub section: SectionShape,
    pub material: MaterialSelection,
}

impl Beam {
    pub fn new(
        length_mm: f64,
        left: EndCondition,
        right: EndCondition,
        section: SectionShape,
        material: MaterialSelection,
    ) -> Self {
        Beam {
            length_mm,
            left,
            right,
            section,
            material,
        }
    }

    /// Section properties from the analytic formulas or the catalog
    pub fn section_properties(&self, catalog: &Catalog) -> CalcResult<SectionProperties> {
        catalog.lookup_section(&self.section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    #[test]
    fn test_catalog_material_resolves() {
        let catalog = Catalog::builtin();
        let props = MaterialSelection::catalog("s235jr").resolve(&catalog).unwrap();
        assert_eq!(props.e_mpa, 210_000.0);
    }

    #[test]
    fn test_custom_material_validated() {
        let catalog = Catalog::builtin();
        let bad = MaterialSelection::Custom(MaterialProperties {
            e_mpa: 206_000.0,
            g_mpa: 0.0,
            sigma_amm_mpa: 160.0,
            tau_amm_mpa: 95.0,
        });
        match bad.resolve(&catalog) {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "material.g_mpa"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_material() {
        let catalog = Catalog::builtin();
        let err = MaterialSelection::catalog("Unobtainium").resolve(&catalog).unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_beam_json_shape() {
        let json = r#"{
            "length_mm": 1000.0,
            "left": "FIXED",
            "right": "FREE",
            "section": { "shape": "Rectangular", "b_mm": 20.0, "h_mm": 10.0 },
            "material": { "source": "Catalog", "name": "S235JR" }
        }"#;
        let beam: Beam = serde_json::from_str(json).unwrap();
        assert_eq!(beam.left, EndCondition::Fixed);
        let props = beam.section_properties(&Catalog::builtin()).unwrap();
        assert!((props.inertia_mm4 - 20.0 * 1000.0 / 12.0).abs() < 1e-9);
    }
}
