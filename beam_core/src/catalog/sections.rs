//! Standard profiles
//!
//! Strong-axis properties of the IPE series (EN 10365). Torsion data is
//! not carried; open thin-walled profiles are not checked in torsion.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::section::SectionProperties;

/// Catalog entry for a standard profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardSection {
    /// Short code (e.g., "IPE100")
    pub code: String,
    /// Display name (e.g., "IPE 100")
    pub name: String,
    /// Series (e.g., "IPE")
    pub series: String,
    /// Depth (mm)
    pub h_mm: f64,
    /// Flange width (mm)
    pub b_mm: f64,
    /// Web thickness (mm)
    pub tw_mm: f64,
    /// Flange thickness (mm)
    pub tf_mm: f64,
    /// Area (mm²)
    pub area_mm2: f64,
    /// Strong-axis moment of inertia (mm⁴)
    pub ix_mm4: f64,
    /// Strong-axis elastic section modulus (mm³)
    pub wx_mm3: f64,
}

impl StandardSection {
    /// Area, inertia and modulus must be finite and > 0
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("area_mm2", self.area_mm2),
            ("ix_mm4", self.ix_mm4),
            ("wx_mm3", self.wx_mm3),
        ];
        for (field, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(CalcError::invalid_input(
                    format!("sections[{}].{}", self.code, field),
                    value.to_string(),
                    "Must be > 0",
                ));
            }
        }
        Ok(())
    }

    /// Bending properties about the strong axis
    pub fn properties(&self) -> SectionProperties {
        SectionProperties {
            area_mm2: self.area_mm2,
            inertia_mm4: self.ix_mm4,
            section_modulus_mm3: self.wx_mm3,
            torsion: None,
        }
    }
}

#[rustfmt::skip]
const IPE: [(&str, &str, f64, f64, f64, f64, f64, f64, f64); 5] = [
    //  code      name       h      b     tw    tf     A        Ix            Wx
    ("IPE80",  "IPE 80",   80.0, 46.0, 3.8, 5.2,   764.0,   801_400.0,  20_030.0),
    ("IPE100", "IPE 100", 100.0, 55.0, 4.1, 5.7, 1_032.0, 1_710_000.0,  34_200.0),
    ("IPE120", "IPE 120", 120.0, 64.0, 4.4, 6.3, 1_321.0, 3_178_000.0,  52_960.0),
    ("IPE140", "IPE 140", 140.0, 73.0, 4.7, 6.9, 1_643.0, 5_412_000.0,  77_320.0),
    ("IPE160", "IPE 160", 160.0, 82.0, 5.0, 7.4, 2_009.0, 8_693_000.0, 108_700.0),
];

/// Built-in standard profiles
pub fn builtin_sections() -> Vec<StandardSection> {
    IPE.iter()
        .map(|&(code, name, h, b, tw, tf, a, ix, wx)| StandardSection {
            code: code.to_string(),
            name: name.to_string(),
            series: "IPE".to_string(),
            h_mm: h,
            b_mm: b,
            tw_mm: tw,
            tf_mm: tf,
            area_mm2: a,
            ix_mm4: ix,
            wx_mm3: wx,
        })
        .collect()
}
