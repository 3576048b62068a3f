//! # Section and Material Catalog
//!
//! Read-only lookup tables for materials and standard profiles. A
//! [`Catalog`] is a plain value: build it once, pass a reference into each
//! solve. Nothing in the engine reaches for global catalog state.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::catalog::Catalog;
//! use beam_core::section::SectionShape;
//!
//! let catalog = Catalog::builtin();
//! let steel = catalog.lookup_material("s235jr").unwrap();
//! assert_eq!(steel.e_mpa, 210_000.0);
//!
//! let ipe = catalog
//!     .lookup_section(&SectionShape::Standard { name: "IPE 100".into() })
//!     .unwrap();
//! assert_eq!(ipe.section_modulus_mm3, 34_200.0);
//! ```
//!
//! ## JSON Format
//!
//! ```json
//! {
//!   "materials": [
//!     { "code": "S235JR", "name": "Steel S235JR", "e_mpa": 210000.0, "g_mpa": 81000.0,
//!       "sigma_amm_mpa": 160.0, "tau_amm_mpa": 95.0 }
//!   ],
//!   "sections": []
//! }
//! ```

pub mod materials;
pub mod sections;

pub use materials::{builtin_materials, MaterialProperties, MaterialRecord};
pub use sections::{builtin_sections, StandardSection};

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::section::{SectionProperties, SectionShape};

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog::new(builtin_materials(), builtin_sections()));

/// Serialized form of a catalog file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub materials: Vec<MaterialRecord>,
    #[serde(default)]
    pub sections: Vec<StandardSection>,
}

/// Immutable snapshot of materials and standard profiles
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    materials: Vec<MaterialRecord>,
    sections: Vec<StandardSection>,

    /// Normalized code and name -> index into `materials`
    material_index: HashMap<String, usize>,

    /// Normalized code and name -> index into `sections`
    section_index: HashMap<String, usize>,
}

/// Uppercase with whitespace removed, so "IPE 100", "ipe100" and "IPE100" agree
fn normalize_key(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

impl Catalog {
    /// Build a catalog from records. Later duplicates shadow earlier ones.
    pub fn new(materials: Vec<MaterialRecord>, sections: Vec<StandardSection>) -> Self {
        let mut material_index = HashMap::new();
        for (i, m) in materials.iter().enumerate() {
            material_index.insert(normalize_key(&m.code), i);
            material_index.insert(normalize_key(&m.name), i);
        }
        let mut section_index = HashMap::new();
        for (i, s) in sections.iter().enumerate() {
            section_index.insert(normalize_key(&s.code), i);
            section_index.insert(normalize_key(&s.name), i);
        }
        Catalog {
            materials,
            sections,
            material_index,
            section_index,
        }
    }

    /// The built-in catalog (13 materials, IPE 80-160)
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Load a catalog from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        let data: CatalogData = serde_json::from_str(&text)?;
        for m in &data.materials {
            m.properties().validate()?;
        }
        for section in &data.sections {
            section.validate()?;
        }
        log::debug!(
            "Loaded catalog from {}: {} materials, {} sections",
            path.display(),
            data.materials.len(),
            data.sections.len()
        );
        Ok(Catalog::new(data.materials, data.sections))
    }

    /// Export the catalog contents
    pub fn to_data(&self) -> CatalogData {
        CatalogData {
            materials: self.materials.clone(),
            sections: self.sections.clone(),
        }
    }

    /// Look up a material by code or display name (case-insensitive)
    pub fn lookup_material(&self, name: &str) -> CalcResult<&MaterialRecord> {
        self.material_index
            .get(&normalize_key(name))
            .map(|&i| &self.materials[i])
            .ok_or_else(|| CalcError::material_not_found(name))
    }

    /// Look up a standard profile by code or display name (case-insensitive)
    pub fn lookup_standard_section(&self, name: &str) -> CalcResult<&StandardSection> {
        self.section_index
            .get(&normalize_key(name))
            .map(|&i| &self.sections[i])
            .ok_or_else(|| CalcError::section_not_found(name))
    }

    /// Resolve any section shape to its properties
    pub fn lookup_section(&self, shape: &SectionShape) -> CalcResult<SectionProperties> {
        match shape {
            SectionShape::Standard { name } => {
                let section = self.lookup_standard_section(name)?;
                section.validate()?;
                Ok(section.properties())
            }
            _ => shape.analytic_properties(),
        }
    }

    /// All material records in insertion order
    pub fn materials(&self) -> &[MaterialRecord] {
        &self.materials
    }

    /// All standard profiles in insertion order
    pub fn sections(&self) -> &[StandardSection] {
        &self.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_lookup_by_code_and_name() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.lookup_material("C45").unwrap().sigma_amm_mpa, 260.0);
        assert_eq!(catalog.lookup_material("aisi 304").unwrap().code, "AISI304");
        assert_eq!(catalog.lookup_material("Titanium Grade 5").unwrap().code, "TI-GR5");
    }

    #[test]
    fn test_material_not_found() {
        let err = Catalog::builtin().lookup_material("Unobtainium").unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_section_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.lookup_standard_section("ipe80").unwrap().h_mm, 80.0);
        assert!(matches!(
            catalog.lookup_standard_section("HEA 100"),
            Err(CalcError::SectionNotFound { .. })
        ));
    }

    #[test]
    fn test_lookup_section_dispatches_analytic_shapes() {
        let catalog = Catalog::default();
        let props = catalog
            .lookup_section(&SectionShape::Round { d_mm: 10.0 })
            .unwrap();
        assert!(props.torsion.is_some());
        assert!(catalog
            .lookup_section(&SectionShape::Standard { name: "IPE 80".into() })
            .is_err());
    }

    #[test]
    fn test_json_round_trip_through_data() {
        let data = Catalog::builtin().to_data();
        let json = serde_json::to_string(&data).unwrap();
        let parsed: CatalogData = serde_json::from_str(&json).unwrap();
        let catalog = Catalog::new(parsed.materials, parsed.sections);
        assert_eq!(catalog.materials().len(), 13);
        assert_eq!(catalog.sections().len(), 5);
    }

    #[test]
    fn test_zero_inertia_profile_rejected_on_lookup() {
        let mut sections = builtin_sections();
        sections[0].ix_mm4 = 0.0;
        sections[0].wx_mm3 = 0.0;
        let catalog = Catalog::new(builtin_materials(), sections);

        let err = catalog
            .lookup_section(&SectionShape::Standard { name: "IPE 80".into() })
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.is_user_facing());
        // untouched profiles still resolve
        assert!(catalog
            .lookup_section(&SectionShape::Standard { name: "IPE 100".into() })
            .is_ok());
    }

    #[test]
    fn test_catalog_file_with_bad_section_rejected() {
        let mut data = Catalog::builtin().to_data();
        data.sections[2].area_mm2 = -1.0;
        let path = std::env::temp_dir().join(format!("beam_core_bad_section_{}.json", std::process::id()));
        std::fs::write(&path, serde_json::to_string(&data).unwrap()).unwrap();

        let result = Catalog::from_json_file(&path);
        std::fs::remove_file(&path).ok();
        match result {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "sections[IPE120].area_mm2"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_catalog_file() {
        let err = Catalog::from_json_file("/nonexistent/catalog.json").unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
