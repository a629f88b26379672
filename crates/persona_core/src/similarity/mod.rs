//! Distance / similarity engine
//!
//! Euclidean distance over the 16 raw trait values. Axes are compared in raw
//! units with no weighting or normalization, so the narrower tendency axes
//! (-50..=50 but typically closer to 0) weigh in less than virtues and
//! capabilities. Existing similarity lists depend on that, keep it.

mod comparison;

pub use comparison::{compare, TraitComparison};

use crate::models::{PersonaId, PersonaVector, TraitAxis};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Largest distance between two in-domain vectors (every axis at opposite ends)
pub static MAX_DISTANCE: Lazy<f64> = Lazy::new(|| {
    TraitAxis::ALL
        .iter()
        .map(|axis| {
            let (lo, hi) = axis.domain();
            (hi - lo).powi(2)
        })
        .sum::<f64>()
        .sqrt()
});

/// One entry of a nearest-neighbor result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarPersona {
    pub id: PersonaId,
    pub distance: f64,
}

impl SimilarPersona {
    pub fn similarity_percent(&self) -> f64 {
        similarity_percent(self.distance)
    }
}

/// Result of a nearest-neighbor query addressed by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NeighborLookup {
    Found {
        target: PersonaId,
        neighbors: Vec<SimilarPersona>,
    },
    TargetNotFound {
        target: PersonaId,
    },
}

impl NeighborLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, NeighborLookup::Found { .. })
    }

    /// Neighbors, or an empty slice when the target was not found
    pub fn neighbors(&self) -> &[SimilarPersona] {
        match self {
            NeighborLookup::Found { neighbors, .. } => neighbors,
            NeighborLookup::TargetNotFound { .. } => &[],
        }
    }

    pub fn into_neighbors(self) -> Vec<SimilarPersona> {
        match self {
            NeighborLookup::Found { neighbors, .. } => neighbors,
            NeighborLookup::TargetNotFound { .. } => Vec::new(),
        }
    }
}

/// Euclidean distance between two persona vectors.
///
/// Symmetric, and zero iff all 16 traits are pairwise equal.
pub fn distance(a: &PersonaVector, b: &PersonaVector) -> f64 {
    (a.as_vector() - b.as_vector()).norm()
}

/// Map a distance to 0..=100 relative to [`MAX_DISTANCE`]. Identical = 100.
pub fn similarity_percent(distance: f64) -> f64 {
    if distance.is_nan() {
        return 0.0;
    }
    ((1.0 - distance / *MAX_DISTANCE).clamp(0.0, 1.0)) * 100.0
}

/// The `k` members of `population` closest to `target`, ascending by distance.
///
/// Members sharing the target's id are skipped. Equal distances keep their
/// population order. Asking for more than available returns everything.
pub fn nearest_neighbors(
    target: &PersonaVector,
    population: &[PersonaVector],
    k: usize,
) -> Vec<SimilarPersona> {
    if k == 0 || population.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<SimilarPersona> = population
        .iter()
        .filter(|candidate| candidate.id != target.id)
        .map(|candidate| SimilarPersona {
            id: candidate.id,
            distance: distance(target, candidate),
        })
        .collect();

    // stable: ties keep population order
    scored.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    scored.truncate(k);

    trace!(
        target = target.id,
        population = population.len(),
        k,
        returned = scored.len(),
        "nearest neighbor scan"
    );

    scored
}

/// [`nearest_neighbors`] with the target looked up inside `population` by id
pub fn nearest_neighbors_by_id(
    target_id: PersonaId,
    population: &[PersonaVector],
    k: usize,
) -> NeighborLookup {
    match population.iter().find(|p| p.id == target_id) {
        Some(target) => NeighborLookup::Found {
            target: target_id,
            neighbors: nearest_neighbors(target, population, k),
        },
        None => {
            trace!(target = target_id, "nearest neighbor target not in population");
            NeighborLookup::TargetNotFound { target: target_id }
        }
    }
}
