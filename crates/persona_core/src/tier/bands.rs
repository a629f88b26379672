//! Threshold-band classifier
//!
//! An ordered list of `(upper_bound, label)` bands partitioning
//! `[floor, ceiling]`. Lower bounds are inclusive, upper bounds exclusive,
//! except the last band which also holds `ceiling` itself.
//! Both the aura scale and the battle-tier scale are instances of this.

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// One band: every score below `upper` (and at/above the previous band's
/// upper bound) maps to `label`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band<T> {
    pub upper: f64,
    pub label: T,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdBands<T> {
    name: String,
    floor: f64,
    ceiling: f64,
    bands: Vec<Band<T>>,
    top: T,
}

impl<T: Copy + PartialEq> ThresholdBands<T> {
    /// Build from interior cut points.
    ///
    /// `labels` are lowest first; `cut_points` must hold exactly
    /// `labels.len() - 1` strictly increasing values inside `(floor, ceiling)`.
    pub fn from_cut_points(
        name: &str,
        floor: f64,
        ceiling: f64,
        cut_points: &[f64],
        labels: &[T],
    ) -> Result<Self> {
        let Some(top) = labels.last().copied() else {
            return Err(EngineError::invalid_bands(name, "no labels"));
        };
        if !(floor.is_finite() && ceiling.is_finite() && floor < ceiling) {
            return Err(EngineError::invalid_bands(
                name,
                format!("bad range [{floor}, {ceiling}]"),
            ));
        }
        if cut_points.len() + 1 != labels.len() {
            return Err(EngineError::invalid_bands(
                name,
                format!(
                    "expected {} cut points for {} labels, found {}",
                    labels.len() - 1,
                    labels.len(),
                    cut_points.len()
                ),
            ));
        }

        let mut previous = floor;
        for &cut in cut_points {
            if !cut.is_finite() || cut <= previous || cut >= ceiling {
                return Err(EngineError::invalid_bands(
                    name,
                    format!(
                        "cut point {cut} must be strictly increasing inside ({floor}, {ceiling})"
                    ),
                ));
            }
            previous = cut;
        }

        let bands = labels
            .iter()
            .enumerate()
            .map(|(i, label)| Band {
                upper: cut_points.get(i).copied().unwrap_or(ceiling),
                label: *label,
            })
            .collect();

        Ok(Self {
            name: name.to_string(),
            floor,
            ceiling,
            bands,
            top,
        })
    }

    /// Label for `score`. Out-of-range scores clamp to the end bands; NaN maps
    /// to the lowest band.
    pub fn classify(&self, score: f64) -> T {
        let clamped = if score.is_nan() {
            self.floor
        } else {
            score.clamp(self.floor, self.ceiling)
        };
        if clamped != score {
            trace!(table = %self.name, score, clamped, "score clamped into band range");
        }

        self.bands
            .iter()
            .find(|band| clamped < band.upper)
            .map(|band| band.label)
            .unwrap_or(self.top)
    }

    /// `[lower, upper)` of the band carrying `label` (upper is inclusive for the top band)
    pub fn range_of(&self, label: T) -> Option<(f64, f64)> {
        let mut lower = self.floor;
        for band in &self.bands {
            if band.label == label {
                return Some((lower, band.upper));
            }
            lower = band.upper;
        }
        None
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    pub fn ceiling(&self) -> f64 {
        self.ceiling
    }

    pub fn bands(&self) -> &[Band<T>] {
        &self.bands
    }

    /// Interior cut points (upper bounds of all bands but the last)
    pub fn cut_points(&self) -> Vec<f64> {
        self.bands[..self.bands.len() - 1]
            .iter()
            .map(|b| b.upper)
            .collect()
    }
}
