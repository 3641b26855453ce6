//! Classification beans.
//!
//! Classifications do not specialize one another: each kind is a leaf
//! and a bean is exactly one of them.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{LatestChangeAction, LatestChangeTarget};

/// One classification kind with its typed fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum ClassificationProperties {
    Governance(GovernanceClassificationProperties),
    Retention(RetentionClassificationProperties),
    Ownership(OwnershipProperties),
    SecurityTags(SecurityTagsProperties),
    Anchors(AnchorsProperties),
    Taxonomy(TaxonomyProperties),
    CanonicalVocabulary(CanonicalVocabularyProperties),
    SubjectArea(SubjectAreaProperties),
    TypeEmbeddedAttribute(TypeEmbeddedAttributeProperties),
    Memento(MementoProperties),
    Template(TemplateProperties),
    DataScope(DataScopeProperties),
    FixedLocation(FixedLocationProperties),
    DigitalResourceOrigin(DigitalResourceOriginProperties),
    ZoneMembership(ZoneMembershipProperties),
    LatestChange(LatestChangeProperties),
    /// Marks an element as the hub of a spine of related data; no fields.
    SpineObject,
    ProcessingState(ProcessingStateProperties),
    GovernanceExpectations(GovernanceExpectationsProperties),
    GovernanceMeasurements(GovernanceMeasurementsProperties),
    DataAssetEncoding(DataAssetEncodingProperties),
}

impl ClassificationProperties {
    /// Open metadata type name of the classification.
    pub fn type_name(&self) -> &'static str {
        match self {
            ClassificationProperties::Governance(g) => g.kind.type_name(),
            ClassificationProperties::Retention(_) => "Retention",
            ClassificationProperties::Ownership(_) => "Ownership",
            ClassificationProperties::SecurityTags(_) => "SecurityTags",
            ClassificationProperties::Anchors(_) => "Anchors",
            ClassificationProperties::Taxonomy(_) => "Taxonomy",
            ClassificationProperties::CanonicalVocabulary(_) => "CanonicalVocabulary",
            ClassificationProperties::SubjectArea(_) => "SubjectArea",
            ClassificationProperties::TypeEmbeddedAttribute(_) => "TypeEmbeddedAttribute",
            ClassificationProperties::Memento(_) => "Memento",
            ClassificationProperties::Template(_) => "Template",
            ClassificationProperties::DataScope(_) => "DataScope",
            ClassificationProperties::FixedLocation(_) => "FixedLocation",
            ClassificationProperties::DigitalResourceOrigin(_) => "DigitalResourceOrigin",
            ClassificationProperties::ZoneMembership(_) => "AssetZoneMembership",
            ClassificationProperties::LatestChange(_) => "LatestChange",
            ClassificationProperties::SpineObject => "SpineObject",
            ClassificationProperties::ProcessingState(_) => "ProcessingState",
            ClassificationProperties::GovernanceExpectations(_) => "GovernanceExpectations",
            ClassificationProperties::GovernanceMeasurements(_) => "GovernanceMeasurements",
            ClassificationProperties::DataAssetEncoding(_) => "DataAssetEncoding",
        }
    }
}

// ============================================================================
// Governance classifications
// ============================================================================

/// Which governance-level classification a bean describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GovernanceClassificationKind {
    #[default]
    Confidentiality,
    Confidence,
    Criticality,
    Impact,
}

impl GovernanceClassificationKind {
    pub fn type_name(self) -> &'static str {
        match self {
            GovernanceClassificationKind::Confidentiality => "Confidentiality",
            GovernanceClassificationKind::Confidence => "Confidence",
            GovernanceClassificationKind::Criticality => "Criticality",
            GovernanceClassificationKind::Impact => "Impact",
        }
    }
}

/// Fields shared by every governance-level classification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GovernanceClassificationBase {
    pub status_identifier: Option<i32>,
    pub confidence: Option<i32>,
    pub steward: Option<String>,
    pub steward_type_name: Option<String>,
    pub steward_property_name: Option<String>,
    pub source: Option<String>,
    pub notes: Option<String>,
    pub level_identifier: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GovernanceClassificationProperties {
    pub kind: GovernanceClassificationKind,
    #[serde(flatten)]
    pub base: GovernanceClassificationBase,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RetentionClassificationProperties {
    #[serde(flatten)]
    pub base: GovernanceClassificationBase,
    #[serde(rename = "associatedGUID")]
    pub associated_guid: Option<String>,
    pub archive_after: Option<DateTime<Utc>>,
    pub store_until: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OwnershipProperties {
    pub owner: Option<String>,
    pub owner_type_name: Option<String>,
    pub owner_property_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecurityTagsProperties {
    pub security_labels: Option<Vec<String>>,
    pub security_properties: Option<BTreeMap<String, String>>,
    /// Operation name → groups allowed to perform it.
    pub access_groups: Option<BTreeMap<String, Vec<String>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZoneMembershipProperties {
    pub zone_membership: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GovernanceExpectationsProperties {
    pub counts: Option<BTreeMap<String, i32>>,
    pub values: Option<BTreeMap<String, String>>,
    pub flags: Option<BTreeMap<String, bool>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GovernanceMeasurementsProperties {
    pub measurement_counts: Option<BTreeMap<String, i32>>,
    pub measurement_values: Option<BTreeMap<String, String>>,
    pub measurement_flags: Option<BTreeMap<String, bool>>,
}

// ============================================================================
// Anchoring and organization
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnchorsProperties {
    #[serde(rename = "anchorGUID")]
    pub anchor_guid: Option<String>,
    pub anchor_type_name: Option<String>,
    pub anchor_domain_name: Option<String>,
    #[serde(rename = "anchorScopeGUID")]
    pub anchor_scope_guid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxonomyProperties {
    pub organizing_principle: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CanonicalVocabularyProperties {
    pub scope: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubjectAreaProperties {
    pub subject_area_name: Option<String>,
}

/// Schema type details folded into an attribute rather than stored separately.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeEmbeddedAttributeProperties {
    pub schema_type_name: Option<String>,
    pub data_type: Option<String>,
    pub default_value: Option<String>,
    pub fixed_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateProperties {
    pub name: Option<String>,
    pub version_identifier: Option<String>,
    pub description: Option<String>,
    pub additional_properties: Option<BTreeMap<String, String>>,
}

// ============================================================================
// Lifecycle and provenance
// ============================================================================

/// Records that an element has been archived.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MementoProperties {
    pub archive_date: Option<DateTime<Utc>>,
    pub archive_user: Option<String>,
    pub archive_process: Option<String>,
    pub archive_service: Option<String>,
    pub archive_method: Option<String>,
    pub archive_properties: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DigitalResourceOriginProperties {
    pub organization: Option<String>,
    pub organization_property_name: Option<String>,
    pub business_capability: Option<String>,
    pub business_capability_property_name: Option<String>,
    pub other_origin_values: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LatestChangeProperties {
    pub change_target: Option<LatestChangeTarget>,
    pub change_action: Option<LatestChangeAction>,
    pub classification_name: Option<String>,
    #[serde(rename = "attachmentGUID")]
    pub attachment_guid: Option<String>,
    pub attachment_type_name: Option<String>,
    pub relationship_type_name: Option<String>,
    pub user: Option<String>,
    pub description: Option<String>,
}

/// Synchronization checkpoints, keyed by target, in epoch milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessingStateProperties {
    pub sync_states: Option<BTreeMap<String, i64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataAssetEncodingProperties {
    pub encoding_type: Option<String>,
    pub encoding_language: Option<String>,
    pub encoding_description: Option<String>,
    pub encoding_properties: Option<BTreeMap<String, String>>,
}

// ============================================================================
// Location
// ============================================================================

/// Geographic and temporal bounds of the data held in an asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataScopeProperties {
    pub min_longitude: Option<f64>,
    pub min_latitude: Option<f64>,
    pub max_longitude: Option<f64>,
    pub max_latitude: Option<f64>,
    pub min_height: Option<f64>,
    pub max_height: Option<f64>,
    pub data_collection_start_time: Option<DateTime<Utc>>,
    pub data_collection_end_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FixedLocationProperties {
    pub coordinates: Option<String>,
    pub map_projection: Option<String>,
    pub postal_address: Option<String>,
    pub time_zone: Option<String>,
}
