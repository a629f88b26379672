//! Reference anchors
//!
//! Labeled historical reference points on the 0-100 ability scales, used to
//! explain a raw score ("martial 96 ≈ Zhao Yun"). Lookup is a floor: the first
//! anchor at or below the query wins, never the closest one above it.

mod tables;

use crate::error::EngineError;
use crate::models::{PersonaVector, TraitAxis};
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ability axes that may carry anchor tables (the capability traits)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityAxis {
    Command,
    Martial,
    Intellect,
    Charisma,
}

impl AbilityAxis {
    pub const ALL: [AbilityAxis; 4] = [
        AbilityAxis::Command,
        AbilityAxis::Martial,
        AbilityAxis::Intellect,
        AbilityAxis::Charisma,
    ];

    pub fn name(self) -> &'static str {
        self.trait_axis().name()
    }

    pub fn trait_axis(self) -> TraitAxis {
        match self {
            AbilityAxis::Command => TraitAxis::Command,
            AbilityAxis::Martial => TraitAxis::Martial,
            AbilityAxis::Intellect => TraitAxis::Intellect,
            AbilityAxis::Charisma => TraitAxis::Charisma,
        }
    }
}

impl fmt::Display for AbilityAxis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AbilityAxis {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        AbilityAxis::ALL
            .into_iter()
            .find(|axis| axis.name() == needle)
            .ok_or_else(|| EngineError::UnknownAxis(s.to_string()))
    }
}

/// A labeled point on an ability scale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceAnchor {
    pub score: u8,
    pub label: String,
}

impl ReferenceAnchor {
    pub fn new(score: u8, label: impl Into<String>) -> Self {
        Self {
            score: score.min(100),
            label: label.into(),
        }
    }
}

/// Immutable set of per-axis anchor lists, each sorted descending by score
#[derive(Debug, Clone, Default)]
pub struct AnchorBook {
    tables: FxHashMap<AbilityAxis, Vec<ReferenceAnchor>>,
}

impl AnchorBook {
    /// Build a book; each list is sorted descending here, so callers may pass
    /// anchors in any order. Equal scores keep their given order.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (AbilityAxis, Vec<ReferenceAnchor>)>,
    {
        let mut tables = FxHashMap::default();
        for (axis, mut anchors) in entries {
            anchors.sort_by(|a, b| b.score.cmp(&a.score));
            tables.insert(axis, anchors);
        }
        Self { tables }
    }

    /// Anchors configured for an axis, highest first
    pub fn anchors(&self, axis: AbilityAxis) -> Option<&[ReferenceAnchor]> {
        self.tables.get(&axis).map(Vec::as_slice)
    }

    pub fn is_annotated(&self, axis: AbilityAxis) -> bool {
        self.anchors(axis).is_some_and(|list| !list.is_empty())
    }

    /// Floor lookup.
    ///
    /// - first anchor with `anchor.score <= score`
    /// - below every anchor (or NaN): the lowest anchor
    /// - axis without anchors: `None`
    pub fn resolve(&self, axis: AbilityAxis, score: f64) -> Option<&ReferenceAnchor> {
        let list = self.tables.get(&axis)?;
        list.iter()
            .find(|anchor| f64::from(anchor.score) <= score)
            .or_else(|| list.last())
    }

    /// Resolve every annotated capability of a persona
    pub fn explain(&self, persona: &PersonaVector) -> Vec<(AbilityAxis, &ReferenceAnchor)> {
        AbilityAxis::ALL
            .iter()
            .filter_map(|axis| {
                self.resolve(*axis, persona.get(axis.trait_axis()))
                    .map(|anchor| (*axis, anchor))
            })
            .collect()
    }
}

/// Built-in anchor tables, loaded once
pub static DEFAULT_ANCHORS: Lazy<AnchorBook> = Lazy::new(tables::default_book);

/// Floor lookup against the built-in tables
pub fn resolve_anchor(axis: AbilityAxis, score: f64) -> Option<&'static ReferenceAnchor> {
    DEFAULT_ANCHORS.resolve(axis, score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TRAIT_COUNT;

    fn martial_book() -> AnchorBook {
        AnchorBook::from_entries([(
            AbilityAxis::Martial,
            vec![
                ReferenceAnchor::new(100, "A"),
                ReferenceAnchor::new(98, "B"),
                ReferenceAnchor::new(97, "C"),
            ],
        )])
    }

    fn label(anchor: Option<&ReferenceAnchor>) -> Option<&str> {
        anchor.map(|a| a.label.as_str())
    }

    #[test]
    fn test_floor_lookup() {
        let book = martial_book();
        assert_eq!(label(book.resolve(AbilityAxis::Martial, 96.0)), Some("C"));
        assert_eq!(label(book.resolve(AbilityAxis::Martial, 100.0)), Some("A"));
        assert_eq!(label(book.resolve(AbilityAxis::Martial, 99.5)), Some("B"));
        assert_eq!(label(book.resolve(AbilityAxis::Martial, 98.0)), Some("B"));
        assert_eq!(label(book.resolve(AbilityAxis::Martial, 10.0)), Some("C"));
        assert_eq!(label(book.resolve(AbilityAxis::Martial, 250.0)), Some("A"));
        assert_eq!(label(book.resolve(AbilityAxis::Martial, f64::NAN)), Some("C"));
    }

    #[test]
    fn test_unannotated_axis_is_none() {
        let book = martial_book();
        assert!(book.resolve(AbilityAxis::Charisma, 50.0).is_none());
        assert!(!book.is_annotated(AbilityAxis::Charisma));

        let empty = AnchorBook::from_entries([(AbilityAxis::Command, Vec::new())]);
        assert!(empty.resolve(AbilityAxis::Command, 50.0).is_none());
        assert!(!empty.is_annotated(AbilityAxis::Command));
    }

    #[test]
    fn test_unsorted_input_is_sorted_descending() {
        let book = AnchorBook::from_entries([(
            AbilityAxis::Intellect,
            vec![
                ReferenceAnchor::new(60, "mid"),
                ReferenceAnchor::new(90, "high"),
                ReferenceAnchor::new(30, "low"),
            ],
        )]);
        let scores: Vec<u8> = book
            .anchors(AbilityAxis::Intellect)
            .unwrap()
            .iter()
            .map(|a| a.score)
            .collect();
        assert_eq!(scores, vec![90, 60, 30]);
        assert_eq!(label(book.resolve(AbilityAxis::Intellect, 75.0)), Some("mid"));
    }

    #[test]
    fn test_default_tables_sorted_and_charisma_unannotated() {
        for axis in AbilityAxis::ALL {
            if let Some(list) = DEFAULT_ANCHORS.anchors(axis) {
                assert!(list.windows(2).all(|w| w[0].score >= w[1].score), "{axis}");
                assert!(list.iter().all(|a| a.score <= 100));
            }
        }
        assert!(DEFAULT_ANCHORS.is_annotated(AbilityAxis::Command));
        assert!(DEFAULT_ANCHORS.is_annotated(AbilityAxis::Martial));
        assert!(DEFAULT_ANCHORS.is_annotated(AbilityAxis::Intellect));
        assert!(resolve_anchor(AbilityAxis::Charisma, 80.0).is_none());
    }

    #[test]
    fn test_default_martial_lookup() {
        let anchor = resolve_anchor(AbilityAxis::Martial, 96.0).unwrap();
        assert_eq!(anchor.score, 95);
        assert_eq!(anchor.label, "Zhao Yun");
    }

    #[test]
    fn test_explain_persona() {
        let mut values = [0.0; TRAIT_COUNT];
        values[TraitAxis::Command.index()] = 97.5;
        values[TraitAxis::Martial.index()] = 5.0;
        values[TraitAxis::Charisma.index()] = 99.0;
        let persona = PersonaVector::from_values(1, values);

        let book = martial_book();
        let explained = book.explain(&persona);
        assert_eq!(explained.len(), 1);
        assert_eq!(explained[0].0, AbilityAxis::Martial);
        assert_eq!(explained[0].1.label, "C");

        let axes: Vec<AbilityAxis> = DEFAULT_ANCHORS
            .explain(&persona)
            .iter()
            .map(|e| e.0)
            .collect();
        assert_eq!(
            axes,
            vec![AbilityAxis::Command, AbilityAxis::Martial, AbilityAxis::Intellect]
        );
    }

    #[test]
    fn test_axis_from_str() {
        assert_eq!("Martial".parse::<AbilityAxis>().ok(), Some(AbilityAxis::Martial));
        assert!(matches!(
            "luck".parse::<AbilityAxis>(),
            Err(EngineError::UnknownAxis(_))
        ));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the resolved anchor is at or below the query and no
            /// closer anchor at or below exists
            #[test]
            fn prop_floor(q in 0.0f64..=100.0) {
                for axis in AbilityAxis::ALL {
                    let Some(list) = DEFAULT_ANCHORS.anchors(axis) else { continue };
                    let Some(anchor) = resolve_anchor(axis, q) else { continue };
                    let lowest = list.last().map(|a| a.score).unwrap_or(0);
                    if q >= f64::from(lowest) {
                        prop_assert!(f64::from(anchor.score) <= q);
                        let closer = list.iter().any(|a| {
                            f64::from(a.score) <= q && a.score > anchor.score
                        });
                        prop_assert!(!closer);
                    } else {
                        prop_assert_eq!(anchor.score, lowest);
                    }
                }
            }
        }
    }
}
