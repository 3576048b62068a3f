//! # Load Model
//!
//! Point loads and uniformly distributed zones along a single span, plus
//! the validation that runs before any solve.
//!
//! User-facing load sets ([`BendingLoads`], [`TorsionLoads`]) are
//! validated against the span length and normalized into a [`LoadSet`]:
//! zero loads dropped, full-span totals turned into zones, torques
//! converted to N·m. The solver only ever sees a `LoadSet`.
//!
//! ## Sign Convention
//!
//! Forces are positive upward, so a gravity load is entered negative.
//! Torques are positive right-hand about the beam axis.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::loads::{BendingLoads, LoadPoint, LoadZone};
//!
//! let loads = BendingLoads::new()
//!     .with_point(LoadPoint::new(250.0, -400.0))
//!     .with_zone(LoadZone::new(500.0, 1000.0, -1000.0));
//!
//! let set = loads.normalize(1000.0).unwrap();
//! assert_eq!(set.points.len(), 1);
//! assert_eq!(set.total(), -1400.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::TorqueUnit;

/// Concentrated load at a position along the span
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadPoint {
    /// Distance from the left end (mm)
    pub position_mm: f64,
    /// Signed magnitude (N for forces, torque unit of the set for torques)
    pub magnitude: f64,
}

impl LoadPoint {
    pub fn new(position_mm: f64, magnitude: f64) -> Self {
        LoadPoint { position_mm, magnitude }
    }
}

/// Load spread uniformly over [start, end]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadZone {
    /// Zone start from the left end (mm)
    pub start_mm: f64,
    /// Zone end from the left end (mm)
    pub end_mm: f64,
    /// Signed total over the zone (N, or torque unit of the set)
    pub total: f64,
}

impl LoadZone {
    pub fn new(start_mm: f64, end_mm: f64, total: f64) -> Self {
        LoadZone { start_mm, end_mm, total }
    }

    /// Zone length (mm)
    pub fn length(&self) -> f64 {
        self.end_mm - self.start_mm
    }

    /// Equivalent line intensity (total per mm)
    pub fn intensity(&self) -> f64 {
        self.total / self.length()
    }

    /// Position of the resultant (mm)
    pub fn centroid(&self) -> f64 {
        (self.start_mm + self.end_mm) / 2.0
    }
}

/// Transverse loads on a beam in bending
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BendingLoads {
    #[serde(default)]
    pub point_loads: Vec<LoadPoint>,
    #[serde(default)]
    pub zones: Vec<LoadZone>,
    /// Total force spread over the whole span (N)
    #[serde(default)]
    pub full_span_total_n: f64,
}

impl BendingLoads {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a point load (builder pattern)
    pub fn with_point(mut self, load: LoadPoint) -> Self {
        self.point_loads.push(load);
        self
    }

    /// Add a zone load (builder pattern)
    pub fn with_zone(mut self, zone: LoadZone) -> Self {
        self.zones.push(zone);
        self
    }

    /// Set the full-span total (builder pattern)
    pub fn with_full_span_total(mut self, total_n: f64) -> Self {
        self.full_span_total_n = total_n;
        self
    }

    /// Validate against the span and convert to the solver's load set
    pub fn normalize(&self, length_mm: f64) -> CalcResult<LoadSet> {
        validate_length(length_mm)?;
        validate_points("point_loads", &self.point_loads, length_mm)?;
        validate_zones("zones", &self.zones, length_mm)?;
        require_finite("full_span_total_n", self.full_span_total_n)?;

        Ok(LoadSet::from_parts(
            self.point_loads.iter().copied(),
            self.zones.iter().copied(),
            self.full_span_total_n,
            length_mm,
        ))
    }
}

/// Torques applied along a shaft
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TorsionLoads {
    #[serde(default)]
    pub point_torques: Vec<LoadPoint>,
    #[serde(default)]
    pub zones: Vec<LoadZone>,
    /// Torque spread over the whole span
    #[serde(default)]
    pub full_span_total: f64,
    /// Input unit for every torque in this set; solver default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<TorqueUnit>,
}

impl TorsionLoads {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a point torque (builder pattern)
    pub fn with_point(mut self, torque: LoadPoint) -> Self {
        self.point_torques.push(torque);
        self
    }

    /// Add a distributed torque (builder pattern)
    pub fn with_zone(mut self, zone: LoadZone) -> Self {
        self.zones.push(zone);
        self
    }

    /// Set the input unit (builder pattern)
    pub fn with_unit(mut self, unit: TorqueUnit) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Validate against the span and convert to a load set in N·m
    pub fn normalize(&self, length_mm: f64, default_unit: TorqueUnit) -> CalcResult<LoadSet> {
        validate_length(length_mm)?;
        validate_points("point_torques", &self.point_torques, length_mm)?;
        validate_zones("zones", &self.zones, length_mm)?;
        require_finite("full_span_total", self.full_span_total)?;

        let unit = self.unit.unwrap_or(default_unit);
        let to_nm = |v: f64| unit.to_newton_meters(v).0;

        Ok(LoadSet::from_parts(
            self.point_torques
                .iter()
                .map(|p| LoadPoint::new(p.position_mm, to_nm(p.magnitude))),
            self.zones
                .iter()
                .map(|z| LoadZone::new(z.start_mm, z.end_mm, to_nm(z.total))),
            to_nm(self.full_span_total),
            length_mm,
        ))
    }
}

/// Validated, normalized loads on one span
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadSet {
    pub points: Vec<LoadPoint>,
    pub zones: Vec<LoadZone>,
}

impl LoadSet {
    fn from_parts(
        points: impl Iterator<Item = LoadPoint>,
        zones: impl Iterator<Item = LoadZone>,
        full_span_total: f64,
        length_mm: f64,
    ) -> Self {
        let points: Vec<LoadPoint> = points.filter(|p| p.magnitude != 0.0).collect();
        let mut zones: Vec<LoadZone> = zones.filter(|z| z.total != 0.0).collect();
        if full_span_total != 0.0 {
            zones.push(LoadZone::new(0.0, length_mm, full_span_total));
        }
        LoadSet { points, zones }
    }

    /// True when nothing is applied
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.zones.is_empty()
    }

    /// Sum of point magnitudes
    pub fn total_points(&self) -> f64 {
        self.points.iter().map(|p| p.magnitude).sum()
    }

    /// Sum of zone totals
    pub fn total_zones(&self) -> f64 {
        self.zones.iter().map(|z| z.total).sum()
    }

    /// Resultant of every load
    pub fn total(&self) -> f64 {
        self.total_points() + self.total_zones()
    }

    /// Moment of every load about x = 0, counter-clockwise positive
    pub fn moment_about_origin(&self) -> f64 {
        let points: f64 = self.points.iter().map(|p| p.magnitude * p.position_mm).sum();
        let zones: f64 = self.zones.iter().map(|z| z.total * z.centroid()).sum();
        points + zones
    }

    /// Sum of absolute magnitudes, used to scale residual checks
    pub fn magnitude_scale(&self) -> f64 {
        self.points.iter().map(|p| p.magnitude.abs()).sum::<f64>()
            + self.zones.iter().map(|z| z.total.abs()).sum::<f64>()
    }

    /// Largest absolute point magnitude
    pub fn max_abs_point(&self) -> f64 {
        self.points.iter().map(|p| p.magnitude.abs()).fold(0.0, f64::max)
    }

    /// Sorted segment boundaries: 0, L, every point position and zone edge.
    ///
    /// Positions closer than a relative 1e-12 of L collapse into one.
    pub fn boundaries(&self, length_mm: f64) -> Vec<f64> {
        let mut xs = Vec::with_capacity(2 + self.points.len() + 2 * self.zones.len());
        xs.push(0.0);
        xs.push(length_mm);
        xs.extend(self.points.iter().map(|p| p.position_mm));
        for z in &self.zones {
            xs.push(z.start_mm);
            xs.push(z.end_mm);
        }
        xs.sort_by(f64::total_cmp);

        let merge = merge_tolerance(length_mm);
        let mut out: Vec<f64> = Vec::with_capacity(xs.len());
        for x in xs {
            match out.last() {
                Some(&last) if x - last <= merge => {}
                _ => out.push(x),
            }
        }
        // keep L exact when a load sits a hair below it
        if let Some(last) = out.last_mut() {
            *last = length_mm;
        }
        out
    }
}

/// Distance below which two load positions share a segment boundary
pub fn merge_tolerance(length_mm: f64) -> f64 {
    1e-12 * length_mm
}

/// Span length must be finite and positive
pub fn validate_length(length_mm: f64) -> CalcResult<()> {
    if !(length_mm.is_finite() && length_mm > 0.0) {
        return Err(CalcError::invalid_input(
            "length_mm",
            length_mm.to_string(),
            "Beam length must be > 0",
        ));
    }
    Ok(())
}

fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Must be a finite number"));
    }
    Ok(())
}

fn validate_points(kind: &str, points: &[LoadPoint], length_mm: f64) -> CalcResult<()> {
    for (i, p) in points.iter().enumerate() {
        if !p.position_mm.is_finite() || p.position_mm < 0.0 || p.position_mm > length_mm {
            return Err(CalcError::invalid_input(
                format!("{}[{}].position_mm", kind, i),
                p.position_mm.to_string(),
                format!("Position must be within [0, {}] mm", length_mm),
            ));
        }
        require_finite(&format!("{}[{}].magnitude", kind, i), p.magnitude)?;
    }
    Ok(())
}

fn validate_zones(kind: &str, zones: &[LoadZone], length_mm: f64) -> CalcResult<()> {
    for (i, z) in zones.iter().enumerate() {
        if !z.start_mm.is_finite() || z.start_mm < 0.0 || z.start_mm > length_mm {
            return Err(CalcError::invalid_input(
                format!("{}[{}].start_mm", kind, i),
                z.start_mm.to_string(),
                format!("Zone start must be within [0, {}] mm", length_mm),
            ));
        }
        if !z.end_mm.is_finite() || z.end_mm < 0.0 || z.end_mm > length_mm {
            return Err(CalcError::invalid_input(
                format!("{}[{}].end_mm", kind, i),
                z.end_mm.to_string(),
                format!("Zone end must be within [0, {}] mm", length_mm),
            ));
        }
        if z.start_mm >= z.end_mm {
            return Err(CalcError::invalid_input(
                format!("{}[{}].end_mm", kind, i),
                z.end_mm.to_string(),
                "Zone end must be greater than zone start",
            ));
        }
        require_finite(&format!("{}[{}].total", kind, i), z.total)?;
    }
    Ok(())
}
