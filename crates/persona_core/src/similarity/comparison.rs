//! Per-axis comparison of two personas (for "how do these two differ" panels)

use crate::models::{PersonaVector, TraitAxis, TRAIT_COUNT};
use serde::{Deserialize, Serialize};

/// Signed trait differences `a - b` in canonical axis order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitComparison {
    pub differences: [f64; TRAIT_COUNT],
}

pub fn compare(a: &PersonaVector, b: &PersonaVector) -> TraitComparison {
    let (va, vb) = (a.values(), b.values());
    let mut differences = [0.0; TRAIT_COUNT];
    for (slot, (x, y)) in differences.iter_mut().zip(va.iter().zip(vb.iter())) {
        *slot = x - y;
    }
    TraitComparison { differences }
}

impl TraitComparison {
    pub fn difference(&self, axis: TraitAxis) -> f64 {
        self.differences[axis.index()]
    }

    /// Sum of absolute differences (L1)
    pub fn total_gap(&self) -> f64 {
        self.differences.iter().map(|d| d.abs()).sum()
    }

    /// Axis with the largest absolute difference; earliest axis wins ties
    pub fn largest_gap(&self) -> (TraitAxis, f64) {
        let mut best = (TraitAxis::ALL[0], self.differences[0]);
        for axis in TraitAxis::ALL.iter().skip(1) {
            let diff = self.difference(*axis);
            if diff.abs() > best.1.abs() {
                best = (*axis, diff);
            }
        }
        best
    }

    /// Axis where `a` exceeds `b` the most, if any
    pub fn biggest_strength(&self) -> Option<(TraitAxis, f64)> {
        TraitAxis::ALL
            .iter()
            .map(|axis| (*axis, self.difference(*axis)))
            .filter(|(_, diff)| *diff > 0.0)
            .fold(None, |best, cur| match best {
                Some((_, d)) if d >= cur.1 => best,
                _ => Some(cur),
            })
    }

    /// Axis where `a` falls short of `b` the most, if any
    pub fn biggest_weakness(&self) -> Option<(TraitAxis, f64)> {
        TraitAxis::ALL
            .iter()
            .map(|axis| (*axis, self.difference(*axis)))
            .filter(|(_, diff)| *diff < 0.0)
            .fold(None, |best, cur| match best {
                Some((_, d)) if d <= cur.1 => best,
                _ => Some(cur),
            })
    }
}
