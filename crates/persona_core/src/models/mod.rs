//! Data model: persona vectors, influence scores, and the persisted-row
//! shapes they are normalized from.

pub mod influence;
pub mod persona;
pub mod raw;

pub use influence::{InfluenceDomain, InfluenceScore, DOMAIN_MAX, TRANSHISTORICITY_MAX};
pub use persona::{
    CapabilityTraits, PersonaId, PersonaVector, TendencyTraits, TraitAxis, TraitGroup,
    VirtueTraits, TRAIT_COUNT,
};
pub use raw::{RawInfluenceRow, RawPersonaRow};
