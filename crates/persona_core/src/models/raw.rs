//! Persisted row shapes and their normalization into engine structs.
//!
//! Rows coming out of the archive's store may have any trait or score column
//! null (joined tables, partially curated entries). This is the only place
//! `Option` fields exist; everything past `normalize()` is strict.

use crate::models::influence::InfluenceScore;
use crate::models::persona::{
    CapabilityTraits, PersonaId, PersonaVector, TendencyTraits, VirtueTraits,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Persona row as persisted; every trait may be missing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPersonaRow {
    pub id: PersonaId,
    pub name: Option<String>,
    // Virtue
    pub temperance: Option<f64>,
    pub diligence: Option<f64>,
    pub reflection: Option<f64>,
    pub courage: Option<f64>,
    pub loyalty: Option<f64>,
    pub benevolence: Option<f64>,
    pub fairness: Option<f64>,
    pub humility: Option<f64>,
    // Capability
    pub command: Option<f64>,
    pub martial: Option<f64>,
    pub intellect: Option<f64>,
    pub charisma: Option<f64>,
    // Tendency
    pub optimism: Option<f64>,
    pub progressivism: Option<f64>,
    pub sociality: Option<f64>,
    pub boldness: Option<f64>,
}

impl RawPersonaRow {
    /// Missing traits become 0 so the vector is complete for distance math
    pub fn normalize(&self) -> PersonaVector {
        let z = |v: Option<f64>| v.unwrap_or(0.0);
        PersonaVector::new(
            self.id,
            VirtueTraits {
                temperance: z(self.temperance),
                diligence: z(self.diligence),
                reflection: z(self.reflection),
                courage: z(self.courage),
                loyalty: z(self.loyalty),
                benevolence: z(self.benevolence),
                fairness: z(self.fairness),
                humility: z(self.humility),
            },
            CapabilityTraits {
                command: z(self.command),
                martial: z(self.martial),
                intellect: z(self.intellect),
                charisma: z(self.charisma),
            },
            TendencyTraits {
                optimism: z(self.optimism),
                progressivism: z(self.progressivism),
                sociality: z(self.sociality),
                boldness: z(self.boldness),
            },
        )
    }

    /// Number of trait columns that were null
    pub fn missing_count(&self) -> usize {
        [
            self.temperance,
            self.diligence,
            self.reflection,
            self.courage,
            self.loyalty,
            self.benevolence,
            self.fairness,
            self.humility,
            self.command,
            self.martial,
            self.intellect,
            self.charisma,
            self.optimism,
            self.progressivism,
            self.sociality,
            self.boldness,
        ]
        .iter()
        .filter(|v| v.is_none())
        .count()
    }
}

impl From<&RawPersonaRow> for PersonaVector {
    fn from(row: &RawPersonaRow) -> Self {
        row.normalize()
    }
}

/// Influence row as persisted.
///
/// `total_score` is a denormalized column some writers fill in. It is read so
/// that mismatches can be reported, never used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInfluenceRow {
    pub id: PersonaId,
    pub name: Option<String>,
    pub political: Option<f64>,
    pub strategic: Option<f64>,
    pub tech: Option<f64>,
    pub social: Option<f64>,
    pub economic: Option<f64>,
    pub cultural: Option<f64>,
    pub transhistoricity: Option<f64>,
    pub total_score: Option<f64>,
}

impl RawInfluenceRow {
    pub fn normalize(&self) -> InfluenceScore {
        let z = |v: Option<f64>| v.unwrap_or(0.0);
        let score = InfluenceScore::new(
            self.id,
            z(self.political),
            z(self.strategic),
            z(self.tech),
            z(self.social),
            z(self.economic),
            z(self.cultural),
            z(self.transhistoricity),
        );

        if let Some(stored) = self.total_score {
            let derived = score.total_score();
            if (stored - derived).abs() > f64::EPSILON {
                debug!(
                    id = self.id,
                    stored, derived, "stored total_score disagrees with components; using derived"
                );
            }
        }

        score
    }
}

impl From<&RawInfluenceRow> for InfluenceScore {
    fn from(row: &RawInfluenceRow) -> Self {
        row.normalize()
    }
}
