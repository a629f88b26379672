//! Persona trait vector
//!
//! Each notable individual is described by 16 numeric traits:
//! - Virtue (8): temperance, diligence, reflection, courage, loyalty,
//!               benevolence, fairness, humility, all 0..=100
//! - Capability (4): command, martial, intellect, charisma, all 0..=100
//! - Tendency (4): signed axes, -50..=+50, negative pole first:
//!   optimism (pessimism↔optimism), progressivism (conservative↔progressive),
//!   sociality (individual↔social), boldness (cautious↔bold)
//!
//! The vector is always complete. Absent source values are normalized to 0
//! before a `PersonaVector` is built (see [`super::raw`]).

use nalgebra::SVector;
use serde::{Deserialize, Serialize};

/// Identifier of an individual in the archive.
pub type PersonaId = u64;

/// Number of trait axes in a persona vector.
pub const TRAIT_COUNT: usize = 16;

/// Trait grouping, each with its own value domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitGroup {
    Virtue,
    Capability,
    Tendency,
}

impl TraitGroup {
    /// Inclusive (min, max) domain of every axis in this group
    pub fn domain(self) -> (f64, f64) {
        match self {
            TraitGroup::Virtue | TraitGroup::Capability => (0.0, 100.0),
            TraitGroup::Tendency => (-50.0, 50.0),
        }
    }
}

/// The 16 trait axes in canonical order (virtues, capabilities, tendencies).
///
/// The discriminant is the axis' index into [`PersonaVector::values`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitAxis {
    Temperance = 0,
    Diligence = 1,
    Reflection = 2,
    Courage = 3,
    Loyalty = 4,
    Benevolence = 5,
    Fairness = 6,
    Humility = 7,
    Command = 8,
    Martial = 9,
    Intellect = 10,
    Charisma = 11,
    Optimism = 12,
    Progressivism = 13,
    Sociality = 14,
    Boldness = 15,
}

impl TraitAxis {
    pub const ALL: [TraitAxis; TRAIT_COUNT] = [
        TraitAxis::Temperance,
        TraitAxis::Diligence,
        TraitAxis::Reflection,
        TraitAxis::Courage,
        TraitAxis::Loyalty,
        TraitAxis::Benevolence,
        TraitAxis::Fairness,
        TraitAxis::Humility,
        TraitAxis::Command,
        TraitAxis::Martial,
        TraitAxis::Intellect,
        TraitAxis::Charisma,
        TraitAxis::Optimism,
        TraitAxis::Progressivism,
        TraitAxis::Sociality,
        TraitAxis::Boldness,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn group(self) -> TraitGroup {
        match self.index() {
            0..=7 => TraitGroup::Virtue,
            8..=11 => TraitGroup::Capability,
            _ => TraitGroup::Tendency,
        }
    }

    /// Column / display name (snake_case)
    pub fn name(self) -> &'static str {
        match self {
            TraitAxis::Temperance => "temperance",
            TraitAxis::Diligence => "diligence",
            TraitAxis::Reflection => "reflection",
            TraitAxis::Courage => "courage",
            TraitAxis::Loyalty => "loyalty",
            TraitAxis::Benevolence => "benevolence",
            TraitAxis::Fairness => "fairness",
            TraitAxis::Humility => "humility",
            TraitAxis::Command => "command",
            TraitAxis::Martial => "martial",
            TraitAxis::Intellect => "intellect",
            TraitAxis::Charisma => "charisma",
            TraitAxis::Optimism => "optimism",
            TraitAxis::Progressivism => "progressivism",
            TraitAxis::Sociality => "sociality",
            TraitAxis::Boldness => "boldness",
        }
    }

    pub fn domain(self) -> (f64, f64) {
        self.group().domain()
    }
}

/// Virtue traits (0-100)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VirtueTraits {
    pub temperance: f64,
    pub diligence: f64,
    pub reflection: f64,
    pub courage: f64,
    pub loyalty: f64,
    pub benevolence: f64,
    pub fairness: f64,
    pub humility: f64,
}

/// Capability traits (0-100)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CapabilityTraits {
    pub command: f64,
    pub martial: f64,
    pub intellect: f64,
    pub charisma: f64,
}

/// Tendency traits (-50..=+50, negative = first pole)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TendencyTraits {
    /// pessimism (-) ↔ optimism (+)
    pub optimism: f64,
    /// conservative (-) ↔ progressive (+)
    pub progressivism: f64,
    /// individual (-) ↔ social (+)
    pub sociality: f64,
    /// cautious (-) ↔ bold (+)
    pub boldness: f64,
}

/// Complete 16-trait profile of one individual
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonaVector {
    pub id: PersonaId,
    pub virtues: VirtueTraits,
    pub capabilities: CapabilityTraits,
    pub tendencies: TendencyTraits,
}

impl PersonaVector {
    pub fn new(
        id: PersonaId,
        virtues: VirtueTraits,
        capabilities: CapabilityTraits,
        tendencies: TendencyTraits,
    ) -> Self {
        Self {
            id,
            virtues,
            capabilities,
            tendencies,
        }
    }

    /// Build from values in canonical [`TraitAxis`] order
    pub fn from_values(id: PersonaId, v: [f64; TRAIT_COUNT]) -> Self {
        Self {
            id,
            virtues: VirtueTraits {
                temperance: v[0],
                diligence: v[1],
                reflection: v[2],
                courage: v[3],
                loyalty: v[4],
                benevolence: v[5],
                fairness: v[6],
                humility: v[7],
            },
            capabilities: CapabilityTraits {
                command: v[8],
                martial: v[9],
                intellect: v[10],
                charisma: v[11],
            },
            tendencies: TendencyTraits {
                optimism: v[12],
                progressivism: v[13],
                sociality: v[14],
                boldness: v[15],
            },
        }
    }

    /// All 16 values in canonical [`TraitAxis`] order
    pub fn values(&self) -> [f64; TRAIT_COUNT] {
        let v = &self.virtues;
        let c = &self.capabilities;
        let t = &self.tendencies;
        [
            v.temperance,
            v.diligence,
            v.reflection,
            v.courage,
            v.loyalty,
            v.benevolence,
            v.fairness,
            v.humility,
            c.command,
            c.martial,
            c.intellect,
            c.charisma,
            t.optimism,
            t.progressivism,
            t.sociality,
            t.boldness,
        ]
    }

    pub fn get(&self, axis: TraitAxis) -> f64 {
        self.values()[axis.index()]
    }

    /// Fixed-size column vector used by the distance math
    pub fn as_vector(&self) -> SVector<f64, TRAIT_COUNT> {
        SVector::<f64, TRAIT_COUNT>::from(self.values())
    }

    /// Whether every trait lies inside its group's domain.
    ///
    /// Informational only: the engine computes on raw values either way.
    pub fn is_in_domain(&self) -> bool {
        TraitAxis::ALL.iter().all(|axis| {
            let (lo, hi) = axis.domain();
            let value = self.get(*axis);
            value >= lo && value <= hi
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_values() -> [f64; TRAIT_COUNT] {
        let mut v = [0.0; TRAIT_COUNT];
        for (i, slot) in v.iter_mut().enumerate() {
            *slot = i as f64 * 3.0;
        }
        v[12] = -40.0;
        v[15] = 25.0;
        v
    }

    #[test]
    fn test_values_follow_axis_order() {
        let persona = PersonaVector::from_values(7, sample_values());

        assert_eq!(persona.values(), sample_values());
        assert_eq!(persona.virtues.temperance, 0.0);
        assert_eq!(persona.capabilities.martial, 27.0);
        assert_eq!(persona.tendencies.optimism, -40.0);
        for axis in TraitAxis::ALL {
            assert_eq!(persona.get(axis), sample_values()[axis.index()], "{}", axis.name());
        }
    }

    #[test]
    fn test_axis_groups() {
        let virtues = TraitAxis::ALL.iter().filter(|a| a.group() == TraitGroup::Virtue);
        let capabilities = TraitAxis::ALL
            .iter()
            .filter(|a| a.group() == TraitGroup::Capability);
        let tendencies = TraitAxis::ALL.iter().filter(|a| a.group() == TraitGroup::Tendency);

        assert_eq!(virtues.count(), 8);
        assert_eq!(capabilities.count(), 4);
        assert_eq!(tendencies.count(), 4);
        assert_eq!(TraitAxis::Humility.group(), TraitGroup::Virtue);
        assert_eq!(TraitAxis::Command.group(), TraitGroup::Capability);
        assert_eq!(TraitAxis::Boldness.domain(), (-50.0, 50.0));
    }

    #[test]
    fn test_default_is_all_zero() {
        let persona = PersonaVector::default();
        assert!(persona.values().iter().all(|v| *v == 0.0));
        assert!(persona.is_in_domain());
    }

    #[test]
    fn test_is_in_domain_detects_tendency_overflow() {
        let mut persona = PersonaVector::from_values(1, sample_values());
        assert!(persona.is_in_domain());

        persona.tendencies.boldness = 60.0;
        assert!(!persona.is_in_domain());
    }

    #[test]
    fn test_as_vector_matches_values() {
        let persona = PersonaVector::from_values(1, sample_values());
        let vector = persona.as_vector();
        assert_eq!(vector.len(), TRAIT_COUNT);
        assert_eq!(vector[9], 27.0);
    }
}
