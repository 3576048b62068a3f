//! # Diagram Sampler
//!
//! Lazy, restartable sample sequences for plotting internal functions.
//!
//! A [`Diagram`] holds the function and a sample plan; values are only
//! computed while iterating, and every call to [`Diagram::iter`] starts
//! over with identical output. The plan is a uniform grid merged with
//! every segment boundary and every interior stationary point. Where the
//! function jumps, two samples share the same position: the left limit
//! first, then the right limit.
//!
//! ## JSON Format
//!
//! A diagram serializes as the array of its samples:
//!
//! ```json
//! [ { "x_mm": 0.0, "value": 100.0 }, { "x_mm": 4.166, "value": 100.0 } ]
//! ```

use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::calculations::piecewise::PiecewiseFunction;

/// Jumps smaller than this share of the function's magnitude are treated as continuous
const JUMP_THRESHOLD: f64 = 1e-9;

/// One plotted point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramSample {
    pub x_mm: f64,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Probe {
    /// Continuous position: one sample
    At(f64),
    /// Discontinuity: left limit then right limit
    Jump(f64),
}

/// Sampled view of an internal function
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    name: String,
    unit: String,
    function: PiecewiseFunction,
    plan: Vec<Probe>,
}

/// Sorted sample positions: `grid_count` uniform points, segment boundaries
/// and interior stationary points, with grid points that crowd a special
/// point dropped.
pub fn sample_positions(function: &PiecewiseFunction, grid_count: usize) -> Vec<f64> {
    let (start, end) = (function.start(), function.end());
    let span = end - start;

    let mut special = function.boundaries();
    special.extend(function.critical_points());
    special.sort_by(f64::total_cmp);
    special.dedup_by(|a, b| (*a - *b).abs() <= 1e-12 * span);

    let crowd = 1e-9 * span;
    let n = grid_count.max(2);
    let mut xs = special.clone();
    for i in 0..n {
        let x = start + span * i as f64 / (n - 1) as f64;
        let k = special.partition_point(|&s| s < x);
        let near_right = special.get(k).is_some_and(|&s| s - x <= crowd);
        let near_left = k > 0 && x - special[k - 1] <= crowd;
        if !near_right && !near_left {
            xs.push(x);
        }
    }
    xs.sort_by(f64::total_cmp);
    log::trace!("Sample plan: {} positions ({} grid)", xs.len(), n);
    xs
}

impl Diagram {
    pub fn new(name: impl Into<String>, unit: impl Into<String>, function: PiecewiseFunction, grid_count: usize) -> Self {
        let positions = sample_positions(&function, grid_count);
        let scale = function.extreme_abs().abs();
        let (start, end) = (function.start(), function.end());
        let plan = positions
            .into_iter()
            .map(|x| {
                let interior = x > start && x < end;
                if interior && function.jump_at(x).abs() > JUMP_THRESHOLD * scale {
                    Probe::Jump(x)
                } else {
                    Probe::At(x)
                }
            })
            .collect();
        Diagram {
            name: name.into(),
            unit: unit.into(),
            function,
            plan,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn function(&self) -> &PiecewiseFunction {
        &self.function
    }

    /// Number of samples the iterator yields
    pub fn len(&self) -> usize {
        self.plan
            .iter()
            .map(|p| match p {
                Probe::At(_) => 1,
                Probe::Jump(_) => 2,
            })
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.plan.is_empty()
    }

    /// Positions in the plan, one per probe
    pub fn positions(&self) -> Vec<f64> {
        self.plan
            .iter()
            .map(|p| match *p {
                Probe::At(x) | Probe::Jump(x) => x,
            })
            .collect()
    }

    /// Fresh pass over the samples
    pub fn iter(&self) -> DiagramIter<'_> {
        DiagramIter {
            diagram: self,
            index: 0,
            pending_right: None,
        }
    }
}

impl<'a> IntoIterator for &'a Diagram {
    type Item = DiagramSample;
    type IntoIter = DiagramIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`Diagram`]'s samples
#[derive(Debug, Clone)]
pub struct DiagramIter<'a> {
    diagram: &'a Diagram,
    index: usize,
    pending_right: Option<f64>,
}

impl Iterator for DiagramIter<'_> {
    type Item = DiagramSample;

    fn next(&mut self) -> Option<DiagramSample> {
        let f = &self.diagram.function;
        if let Some(x) = self.pending_right.take() {
            return Some(DiagramSample { x_mm: x, value: f.right_limit(x) });
        }
        let probe = *self.diagram.plan.get(self.index)?;
        self.index += 1;
        let sample = match probe {
            Probe::At(x) => DiagramSample { x_mm: x, value: f.value_at(x) },
            Probe::Jump(x) => {
                self.pending_right = Some(x);
                DiagramSample { x_mm: x, value: f.left_limit(x) }
            }
        };
        Some(sample)
    }
}

impl Serialize for Diagram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for sample in self.iter() {
            seq.serialize_element(&sample)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::piecewise::{Polynomial, Segment};

    fn step() -> PiecewiseFunction {
        PiecewiseFunction::from_segments(vec![
            Segment { start_mm: 0.0, end_mm: 300.0, poly: Polynomial::constant(70.0) },
            Segment { start_mm: 300.0, end_mm: 1000.0, poly: Polynomial::constant(-30.0) },
        ])
    }

    #[test]
    fn test_jump_yields_two_samples() {
        let d = Diagram::new("V", "N", step(), 11);
        let at_jump: Vec<DiagramSample> = d.iter().filter(|s| s.x_mm == 300.0).collect();
        assert_eq!(at_jump.len(), 2);
        assert_eq!(at_jump[0].value, 70.0);
        assert_eq!(at_jump[1].value, -30.0);
        assert_eq!(d.iter().count(), d.len());
    }

    #[test]
    fn test_includes_boundaries_and_grid() {
        let d = Diagram::new("V", "N", step(), 11);
        let xs = d.positions();
        assert_eq!(xs.first(), Some(&0.0));
        assert_eq!(xs.last(), Some(&1000.0));
        assert!(xs.contains(&300.0));
        assert!(xs.contains(&500.0));
        // 11 grid points, 300 is not on the grid
        assert_eq!(xs.len(), 12);
    }

    #[test]
    fn test_includes_critical_points() {
        // peak of 2t − t²/1000 at t = 1000 inside [0, 1500]
        let f = PiecewiseFunction::from_segments(vec![Segment {
            start_mm: 0.0,
            end_mm: 1500.0,
            poly: Polynomial::new(vec![0.0, 2.0, -0.001]),
        }]);
        let xs = sample_positions(&f, 7);
        assert!(xs.iter().any(|&x| (x - 1000.0).abs() < 1e-6));
    }

    #[test]
    fn test_restartable_and_deterministic() {
        let d = Diagram::new("M", "N·mm", step().integral(0.0), 41);
        let first: Vec<DiagramSample> = d.iter().collect();
        let second: Vec<DiagramSample> = d.iter().collect();
        assert_eq!(first, second);
        assert_eq!(serde_json::to_string(&d).unwrap(), serde_json::to_string(&d).unwrap());
    }

    #[test]
    fn test_serializes_as_array() {
        let d = Diagram::new("V", "N", step(), 11);
        let value = serde_json::to_value(&d).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), d.len());
        assert_eq!(arr[0]["x_mm"], 0.0);
        assert_eq!(arr[0]["value"], 70.0);
    }
}
