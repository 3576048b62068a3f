//! # Section Property Provider
//!
//! Resolves a section choice into the geometric properties the solver
//! needs. Analytic shapes are computed here; standard profiles come from
//! the catalog snapshot (see [`Catalog::lookup_section`](crate::catalog::Catalog::lookup_section)).
//!
//! ## JSON Format
//!
//! ```json
//! { "shape": "Rectangular", "b_mm": 20.0, "h_mm": 10.0 }
//! { "shape": "Tube", "outer_d_mm": 40.0, "wall_mm": 3.0 }
//! { "shape": "Standard", "name": "IPE 100" }
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::section as eq;
use crate::errors::{CalcError, CalcResult};

/// Section shape with its dimensions (mm) or catalog reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum SectionShape {
    /// Solid round bar
    Round { d_mm: f64 },
    /// Round tube
    Tube { outer_d_mm: f64, wall_mm: f64 },
    /// Solid rectangle, bending about the axis parallel to `b`
    Rectangular { b_mm: f64, h_mm: f64 },
    /// Rectangular hollow section with uniform wall
    RectangularTube { b_mm: f64, h_mm: f64, wall_mm: f64 },
    /// Standard profile from the catalog (strong axis)
    Standard { name: String },
}

impl SectionShape {
    /// Short label for reports
    pub fn display_name(&self) -> String {
        match self {
            SectionShape::Round { d_mm } => format!("Round d={} mm", d_mm),
            SectionShape::Tube { outer_d_mm, wall_mm } => format!("Tube D={} t={} mm", outer_d_mm, wall_mm),
            SectionShape::Rectangular { b_mm, h_mm } => format!("Rectangle {}x{} mm", b_mm, h_mm),
            SectionShape::RectangularTube { b_mm, h_mm, wall_mm } => {
                format!("Rect. tube {}x{} s={} mm", b_mm, h_mm, wall_mm)
            }
            SectionShape::Standard { name } => name.clone(),
        }
    }

    /// Whether properties can be computed without the catalog
    pub fn is_analytic(&self) -> bool {
        !matches!(self, SectionShape::Standard { .. })
    }

    /// Compute properties of an analytic shape.
    ///
    /// Standard profiles return `SectionNotSupported`; resolve them through the catalog.
    pub fn analytic_properties(&self) -> CalcResult<SectionProperties> {
        match *self {
            SectionShape::Round { d_mm } => {
                require_positive("section.d_mm", d_mm)?;
                let inertia = eq::round_moment_of_inertia(d_mm);
                let jt = eq::round_torsion_constant(d_mm);
                let r_max = d_mm / 2.0;
                Ok(SectionProperties {
                    area_mm2: eq::round_area(d_mm),
                    inertia_mm4: inertia,
                    section_modulus_mm3: eq::section_modulus(inertia, r_max),
                    torsion: Some(TorsionProperties::new(jt, r_max)),
                })
            }
            SectionShape::Tube { outer_d_mm, wall_mm } => {
                require_positive("section.outer_d_mm", outer_d_mm)?;
                require_positive("section.wall_mm", wall_mm)?;
                let inner = outer_d_mm - 2.0 * wall_mm;
                if inner <= 0.0 {
                    return Err(CalcError::invalid_input(
                        "section.wall_mm",
                        wall_mm.to_string(),
                        "Wall too thick: inner diameter <= 0",
                    ));
                }
                let inertia = eq::tube_moment_of_inertia(outer_d_mm, inner);
                let r_max = outer_d_mm / 2.0;
                Ok(SectionProperties {
                    area_mm2: eq::tube_area(outer_d_mm, inner),
                    inertia_mm4: inertia,
                    section_modulus_mm3: eq::section_modulus(inertia, r_max),
                    torsion: Some(TorsionProperties::new(eq::tube_torsion_constant(outer_d_mm, inner), r_max)),
                })
            }
            SectionShape::Rectangular { b_mm, h_mm } => {
                require_positive("section.b_mm", b_mm)?;
                require_positive("section.h_mm", h_mm)?;
                let inertia = eq::rectangular_moment_of_inertia(b_mm, h_mm);
                Ok(SectionProperties {
                    area_mm2: eq::rectangular_area(b_mm, h_mm),
                    inertia_mm4: inertia,
                    section_modulus_mm3: eq::section_modulus(inertia, h_mm / 2.0),
                    torsion: Some(TorsionProperties::new(
                        eq::rectangular_torsion_constant(b_mm, h_mm),
                        eq::rectangular_corner_radius(b_mm, h_mm),
                    )),
                })
            }
            SectionShape::RectangularTube { b_mm, h_mm, wall_mm } => {
                require_positive("section.b_mm", b_mm)?;
                require_positive("section.h_mm", h_mm)?;
                require_positive("section.wall_mm", wall_mm)?;
                if b_mm - 2.0 * wall_mm <= 0.0 || h_mm - 2.0 * wall_mm <= 0.0 {
                    return Err(CalcError::invalid_input(
                        "section.wall_mm",
                        wall_mm.to_string(),
                        "Wall too thick: inner dimensions <= 0",
                    ));
                }
                let inertia = eq::rectangular_tube_moment_of_inertia(b_mm, h_mm, wall_mm);
                Ok(SectionProperties {
                    area_mm2: eq::rectangular_tube_area(b_mm, h_mm, wall_mm),
                    inertia_mm4: inertia,
                    section_modulus_mm3: eq::section_modulus(inertia, h_mm / 2.0),
                    torsion: Some(TorsionProperties::new(
                        eq::rectangular_tube_torsion_constant(b_mm, h_mm, wall_mm),
                        eq::rectangular_corner_radius(b_mm, h_mm),
                    )),
                })
            }
            SectionShape::Standard { ref name } => Err(CalcError::section_not_supported(
                name.clone(),
                "Standard profiles are resolved through the catalog",
            )),
        }
    }
}

fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !(value > 0.0) || !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Must be > 0"));
    }
    Ok(())
}

/// Torsional properties of a section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorsionProperties {
    /// Torsion constant Jt (mm⁴)
    pub torsion_constant_mm4: f64,
    /// Farthest fiber distance used for the peak shear stress (mm)
    pub r_max_mm: f64,
    /// Torsional section modulus Wt = Jt / r_max (mm³)
    pub torsional_modulus_mm3: f64,
}

impl TorsionProperties {
    /// Build from torsion constant and farthest fiber distance
    pub fn new(torsion_constant_mm4: f64, r_max_mm: f64) -> Self {
        TorsionProperties {
            torsion_constant_mm4,
            r_max_mm,
            torsional_modulus_mm3: torsion_constant_mm4 / r_max_mm,
        }
    }
}

/// Resolved section properties
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Area A (mm²)
    pub area_mm2: f64,
    /// Moment of inertia about the bending axis I (mm⁴)
    pub inertia_mm4: f64,
    /// Section modulus W (mm³)
    pub section_modulus_mm3: f64,
    /// Torsional properties; `None` for catalog profiles without torsion data
    pub torsion: Option<TorsionProperties>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_properties() {
        let props = SectionShape::Rectangular { b_mm: 20.0, h_mm: 10.0 }
            .analytic_properties()
            .unwrap();
        assert!((props.inertia_mm4 - 1666.6667).abs() < 1e-3);
        assert!((props.section_modulus_mm3 - 333.3333).abs() < 1e-3);
        assert!(props.torsion.is_some());
    }

    #[test]
    fn test_round_torsional_modulus() {
        // Wt = πd³/16
        let props = SectionShape::Round { d_mm: 20.0 }.analytic_properties().unwrap();
        let wt = props.torsion.unwrap().torsional_modulus_mm3;
        assert!((wt - std::f64::consts::PI * 8000.0 / 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_tube_wall_too_thick() {
        let err = SectionShape::Tube { outer_d_mm: 20.0, wall_mm: 10.0 }
            .analytic_properties()
            .unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "section.wall_mm"));
    }

    #[test]
    fn test_rect_tube_wall_too_thick() {
        let shape = SectionShape::RectangularTube { b_mm: 20.0, h_mm: 40.0, wall_mm: 12.0 };
        assert!(shape.analytic_properties().is_err());
    }

    #[test]
    fn test_non_positive_dimension() {
        let err = SectionShape::Rectangular { b_mm: 0.0, h_mm: 10.0 }
            .analytic_properties()
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_standard_needs_catalog() {
        let shape = SectionShape::Standard { name: "IPE 100".into() };
        assert!(!shape.is_analytic());
        assert_eq!(shape.analytic_properties().unwrap_err().error_code(), "SECTION_NOT_SUPPORTED");
    }

    #[test]
    fn test_shape_serialization() {
        let json = r#"{ "shape": "Tube", "outer_d_mm": 40.0, "wall_mm": 3.0 }"#;
        let shape: SectionShape = serde_json::from_str(json).unwrap();
        assert_eq!(shape, SectionShape::Tube { outer_d_mm: 40.0, wall_mm: 3.0 });
    }
}
