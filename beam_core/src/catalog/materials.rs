//! Beam materials
//!
//! Elastic constants and allowable stresses for the metals commonly used
//! for shafts and beams. Allowable values are working stresses, not yield.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Catalog entry for a material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    /// Short code (e.g., "S235JR")
    pub code: String,
    /// Display name
    pub name: String,
    /// Young's modulus E (MPa)
    pub e_mpa: f64,
    /// Shear modulus G (MPa)
    pub g_mpa: f64,
    /// Allowable bending stress σ_amm (MPa)
    pub sigma_amm_mpa: f64,
    /// Allowable shear stress τ_amm (MPa)
    pub tau_amm_mpa: f64,
    #[serde(default)]
    pub notes: String,
}

impl MaterialRecord {
    /// Properties used by a solve
    pub fn properties(&self) -> MaterialProperties {
        MaterialProperties {
            e_mpa: self.e_mpa,
            g_mpa: self.g_mpa,
            sigma_amm_mpa: self.sigma_amm_mpa,
            tau_amm_mpa: self.tau_amm_mpa,
        }
    }
}

impl std::fmt::Display for MaterialRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (E={} MPa, σamm={} MPa, τamm={} MPa)",
            self.name, self.e_mpa, self.sigma_amm_mpa, self.tau_amm_mpa
        )
    }
}

/// Material values handed to the solver.
///
/// Callers may start from a catalog record and edit any field before the
/// solve; the engine never reads the catalog mid-solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Young's modulus E (MPa)
    pub e_mpa: f64,
    /// Shear modulus G (MPa)
    pub g_mpa: f64,
    /// Allowable bending stress σ_amm (MPa)
    pub sigma_amm_mpa: f64,
    /// Allowable shear stress τ_amm (MPa)
    pub tau_amm_mpa: f64,
}

impl MaterialProperties {
    /// All four values must be finite and positive
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("material.e_mpa", self.e_mpa),
            ("material.g_mpa", self.g_mpa),
            ("material.sigma_amm_mpa", self.sigma_amm_mpa),
            ("material.tau_amm_mpa", self.tau_amm_mpa),
        ];
        for (field, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(CalcError::invalid_input(field, value.to_string(), "Must be > 0"));
            }
        }
        Ok(())
    }
}

// Steel and titanium share G ≈ E / 2.6
#[rustfmt::skip]
const BUILTIN: [(&str, &str, f64, f64, f64, f64, &str); 13] = [
    ("S235JR",       "Steel S235JR",                210_000.0, 81_000.0, 160.0,  95.0, "General structural steel"),
    ("S275JR",       "Steel S275JR",                210_000.0, 81_000.0, 180.0, 105.0, "Intermediate structural steel"),
    ("S355JR",       "Steel S355JR",                210_000.0, 81_000.0, 230.0, 135.0, "High strength structural steel"),
    ("C45",          "Steel C45",                   210_000.0, 81_000.0, 260.0, 150.0, "Quench and temper steel for shafts"),
    ("42CRMO4",      "Steel 42CrMo4",               210_000.0, 81_000.0, 550.0, 320.0, "Alloy quench and temper steel"),
    ("AISI304",      "AISI 304",                    193_000.0, 77_000.0, 170.0, 100.0, "Austenitic stainless"),
    ("AISI316",      "AISI 316",                    193_000.0, 77_000.0, 175.0, 105.0, "Austenitic stainless with molybdenum"),
    ("EN-AW6060-T6", "Aluminium EN AW-6060 T6",      69_000.0, 26_000.0, 100.0,  60.0, "Standard extrusion alloy"),
    ("EN-AW6082-T6", "Aluminium EN AW-6082 T6",      70_000.0, 26_000.0, 160.0,  95.0, "Structural extrusion alloy"),
    ("EN-AW7075-T6", "Aluminium EN AW-7075 T6",      71_000.0, 27_000.0, 330.0, 190.0, "High strength alloy (Ergal)"),
    ("GJL-250",      "Grey cast iron GJL-250",      105_000.0, 40_000.0,  80.0,  50.0, "Lamellar cast iron for bases"),
    ("GJS-400",      "Ductile cast iron GJS-400",   169_000.0, 65_000.0, 160.0,  95.0, "Spheroidal graphite cast iron"),
    ("TI-GR5",       "Titanium Grade 5",            114_000.0, 44_000.0, 550.0, 320.0, "Ti-6Al-4V"),
];

/// Built-in material records
pub fn builtin_materials() -> Vec<MaterialRecord> {
    BUILTIN
        .iter()
        .map(|&(code, name, e, g, sigma, tau, notes)| MaterialRecord {
            code: code.to_string(),
            name: name.to_string(),
            e_mpa: e,
            g_mpa: g,
            sigma_amm_mpa: sigma,
            tau_amm_mpa: tau,
            notes: notes.to_string(),
        })
        .collect()
}
