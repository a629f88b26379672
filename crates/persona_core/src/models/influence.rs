//! Influence scores
//!
//! Six domain scores (0-10 each) plus transhistoricity (0-40).
//! The total (0-100) is always derived from the components; it is not stored.

use crate::error::EngineError;
use crate::models::persona::PersonaId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound of a single domain score
pub const DOMAIN_MAX: f64 = 10.0;

/// Upper bound of the transhistoricity score
pub const TRANSHISTORICITY_MAX: f64 = 40.0;

/// Influence domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfluenceDomain {
    Political,
    Strategic,
    Tech,
    Social,
    Economic,
    Cultural,
}

impl InfluenceDomain {
    pub const ALL: [InfluenceDomain; 6] = [
        InfluenceDomain::Political,
        InfluenceDomain::Strategic,
        InfluenceDomain::Tech,
        InfluenceDomain::Social,
        InfluenceDomain::Economic,
        InfluenceDomain::Cultural,
    ];

    pub fn name(self) -> &'static str {
        match self {
            InfluenceDomain::Political => "political",
            InfluenceDomain::Strategic => "strategic",
            InfluenceDomain::Tech => "tech",
            InfluenceDomain::Social => "social",
            InfluenceDomain::Economic => "economic",
            InfluenceDomain::Cultural => "cultural",
        }
    }
}

impl fmt::Display for InfluenceDomain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InfluenceDomain {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        InfluenceDomain::ALL
            .into_iter()
            .find(|d| d.name() == needle)
            .ok_or_else(|| EngineError::UnknownDomain(s.to_string()))
    }
}

/// Domain influence of one individual
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InfluenceScore {
    pub id: PersonaId,
    pub political: f64,
    pub strategic: f64,
    pub tech: f64,
    pub social: f64,
    pub economic: f64,
    pub cultural: f64,
    pub transhistoricity: f64,
}

impl InfluenceScore {
    pub fn new(
        id: PersonaId,
        political: f64,
        strategic: f64,
        tech: f64,
        social: f64,
        economic: f64,
        cultural: f64,
        transhistoricity: f64,
    ) -> Self {
        Self {
            id,
            political,
            strategic,
            tech,
            social,
            economic,
            cultural,
            transhistoricity,
        }
    }

    pub fn domain(&self, domain: InfluenceDomain) -> f64 {
        match domain {
            InfluenceDomain::Political => self.political,
            InfluenceDomain::Strategic => self.strategic,
            InfluenceDomain::Tech => self.tech,
            InfluenceDomain::Social => self.social,
            InfluenceDomain::Economic => self.economic,
            InfluenceDomain::Cultural => self.cultural,
        }
    }

    /// Sum of the six domain scores
    pub fn domain_sum(&self) -> f64 {
        InfluenceDomain::ALL.iter().map(|d| self.domain(*d)).sum()
    }

    /// Six domains + transhistoricity (0-100 for in-range inputs)
    pub fn total_score(&self) -> f64 {
        self.domain_sum() + self.transhistoricity
    }

    /// Domain with the highest score; earliest domain wins ties
    pub fn strongest_domain(&self) -> InfluenceDomain {
        let mut best = InfluenceDomain::Political;
        for domain in InfluenceDomain::ALL {
            if self.domain(domain) > self.domain(best) {
                best = domain;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum_of_components() {
        let score = InfluenceScore::new(1, 9.0, 8.0, 3.0, 7.0, 5.0, 6.0, 35.0);
        assert_eq!(score.domain_sum(), 38.0);
        assert_eq!(score.total_score(), 73.0);
    }

    #[test]
    fn test_maximum_total_is_one_hundred() {
        let score = InfluenceScore::new(
            1,
            DOMAIN_MAX,
            DOMAIN_MAX,
            DOMAIN_MAX,
            DOMAIN_MAX,
            DOMAIN_MAX,
            DOMAIN_MAX,
            TRANSHISTORICITY_MAX,
        );
        assert_eq!(score.total_score(), 100.0);
    }

    #[test]
    fn test_total_tracks_component_changes() {
        let mut score = InfluenceScore::new(1, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 10.0);
        assert_eq!(score.total_score(), 16.0);
        score.cultural = 9.0;
        assert_eq!(score.total_score(), 24.0);
    }

    #[test]
    fn test_strongest_domain() {
        let score = InfluenceScore::new(1, 4.0, 9.0, 2.0, 9.0, 1.0, 3.0, 0.0);
        assert_eq!(score.strongest_domain(), InfluenceDomain::Strategic);

        let flat = InfluenceScore::default();
        assert_eq!(flat.strongest_domain(), InfluenceDomain::Political);
    }

    #[test]
    fn test_domain_from_str() {
        assert_eq!("Tech".parse::<InfluenceDomain>().ok(), Some(InfluenceDomain::Tech));
        assert_eq!(
            " cultural ".parse::<InfluenceDomain>().ok(),
            Some(InfluenceDomain::Cultural)
        );
        assert!(matches!(
            "military".parse::<InfluenceDomain>(),
            Err(EngineError::UnknownDomain(_))
        ));
    }
}
