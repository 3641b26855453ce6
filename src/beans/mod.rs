//! # Property Beans
//!
//! Typed descriptions of the metadata a caller wants to store. Three
//! disjoint families share one envelope, [`PropertyBean`]:
//!
//! - [`ClassificationProperties`]: flat set of classification kinds
//! - [`ElementProperties`]: nested entity hierarchy rooted at Referenceable
//! - [`RelationshipProperties`]: flat set of relationship kinds
//!
//! Beans are plain data. Projection into property maps lives in
//! [`crate::projection`].

pub mod classification;
pub mod element;
pub mod relationship;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use classification::*;
pub use element::*;
pub use relationship::*;

/// Envelope carried by every bean regardless of family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyBean<P> {
    /// Start of the effectivity window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_from: Option<DateTime<Utc>>,
    /// End of the effectivity window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_to: Option<DateTime<Utc>>,
    /// Free-form fields not modelled by any typed variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_properties: Option<BTreeMap<String, String>>,
    pub properties: P,
}

pub type ClassificationBean = PropertyBean<ClassificationProperties>;
pub type ElementBean = PropertyBean<ElementProperties>;
pub type RelationshipBean = PropertyBean<RelationshipProperties>;

impl<P> PropertyBean<P> {
    pub fn new(properties: P) -> Self {
        Self {
            effective_from: None,
            effective_to: None,
            extended_properties: None,
            properties,
        }
    }

    pub fn with_effectivity(
        mut self,
        effective_from: Option<DateTime<Utc>>,
        effective_to: Option<DateTime<Utc>>,
    ) -> Self {
        self.effective_from = effective_from;
        self.effective_to = effective_to;
        self
    }

    pub fn with_extended_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extended_properties
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }
}

impl<P> From<P> for PropertyBean<P> {
    fn from(properties: P) -> Self {
        Self::new(properties)
    }
}
