//! Element (entity) beans.
//!
//! Entities specialize one another: a DeployedSoftwareComponent is a
//! Process, which is an Asset, which is a Referenceable. Each level is a
//! struct holding its own fields plus a `kind` naming the next, more
//! specific level (or `Plain` when the bean stops there).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::model::{CommentType, DataItemSortOrder, PropertyMap};

/// Type names of every matched level, root first.
pub type TypeLineage<'a> = SmallVec<[&'a str; 6]>;

/// Root of the element family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum ElementProperties {
    /// Already-generic properties, passed through verbatim.
    #[serde(rename_all = "camelCase")]
    Raw { type_name: String, properties: PropertyMap },
    /// Typed bean rooted at Referenceable.
    Referenceable(ReferenceableProperties),
}

impl ElementProperties {
    /// Type names from the root to the most specific matched level.
    pub fn type_lineage(&self) -> TypeLineage<'_> {
        match self {
            ElementProperties::Raw { type_name, .. } => smallvec![type_name.as_str()],
            ElementProperties::Referenceable(r) => {
                let mut out: TypeLineage<'_> = smallvec!["Referenceable"];
                r.kind.lineage(&mut out);
                out
            }
        }
    }

    /// Open metadata type name of the most specific level.
    pub fn type_name(&self) -> &str {
        match self {
            ElementProperties::Raw { type_name, .. } => type_name,
            ElementProperties::Referenceable(r) => r.kind.leaf_name().unwrap_or("Referenceable"),
        }
    }
}

impl From<ReferenceableProperties> for ElementProperties {
    fn from(r: ReferenceableProperties) -> Self {
        ElementProperties::Referenceable(r)
    }
}

// ============================================================================
// Referenceable
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferenceableProperties {
    pub qualified_name: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub version_identifier: Option<String>,
    pub category: Option<String>,
    pub additional_properties: Option<BTreeMap<String, String>>,
    pub kind: ReferenceableKind,
}

impl ReferenceableProperties {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: Some(qualified_name.into()),
            ..Default::default()
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_kind(mut self, kind: ReferenceableKind) -> Self {
        self.kind = kind;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum ReferenceableKind {
    #[default]
    Plain,
    Asset(AssetProperties),
    ActorProfile(ActorProfileProperties),
    PersonRole(PersonRoleProperties),
    Collection(CollectionProperties),
    Project(ProjectProperties),
    Community(CommunityProperties),
    Location(LocationProperties),
    Glossary(GlossaryProperties),
    GlossaryTerm(GlossaryTermProperties),
    GovernanceDefinition(GovernanceDefinitionProperties),
    SchemaElement(SchemaElementProperties),
    ValidValueDefinition(ValidValueDefinitionProperties),
    ExternalReference(ExternalReferenceProperties),
    Comment(CommentProperties),
    Endpoint(EndpointProperties),
    Connection(ConnectionProperties),
    SoftwareCapability(SoftwareCapabilityProperties),
    Annotation(AnnotationProperties),
}

impl ReferenceableKind {
    fn leaf_name(&self) -> Option<&'static str> {
        let name = match self {
            ReferenceableKind::Plain => return None,
            ReferenceableKind::Asset(a) => a.kind.leaf_name().unwrap_or("Asset"),
            ReferenceableKind::ActorProfile(a) => a.kind.leaf_name().unwrap_or("ActorProfile"),
            ReferenceableKind::PersonRole(_) => "PersonRole",
            ReferenceableKind::Collection(c) => c.kind.leaf_name().unwrap_or("Collection"),
            ReferenceableKind::Project(_) => "Project",
            ReferenceableKind::Community(_) => "Community",
            ReferenceableKind::Location(_) => "Location",
            ReferenceableKind::Glossary(_) => "Glossary",
            ReferenceableKind::GlossaryTerm(_) => "GlossaryTerm",
            ReferenceableKind::GovernanceDefinition(g) => g.kind.leaf_name().unwrap_or("GovernanceDefinition"),
            ReferenceableKind::SchemaElement(s) => s.kind.leaf_name().unwrap_or("SchemaElement"),
            ReferenceableKind::ValidValueDefinition(_) => "ValidValueDefinition",
            ReferenceableKind::ExternalReference(_) => "ExternalReference",
            ReferenceableKind::Comment(_) => "Comment",
            ReferenceableKind::Endpoint(_) => "Endpoint",
            ReferenceableKind::Connection(_) => "Connection",
            ReferenceableKind::SoftwareCapability(_) => "SoftwareCapability",
            ReferenceableKind::Annotation(a) => a.kind.leaf_name().unwrap_or("Annotation"),
        };
        Some(name)
    }

    fn lineage<'a>(&self, out: &mut TypeLineage<'a>) {
        match self {
            ReferenceableKind::Plain => {}
            ReferenceableKind::Asset(a) => {
                out.push("Asset");
                a.kind.lineage(out);
            }
            ReferenceableKind::ActorProfile(a) => {
                out.push("ActorProfile");
                a.kind.lineage(out);
            }
            ReferenceableKind::PersonRole(_) => out.push("PersonRole"),
            ReferenceableKind::Collection(c) => {
                out.push("Collection");
                c.kind.lineage(out);
            }
            ReferenceableKind::Project(_) => out.push("Project"),
            ReferenceableKind::Community(_) => out.push("Community"),
            ReferenceableKind::Location(_) => out.push("Location"),
            ReferenceableKind::Glossary(_) => out.push("Glossary"),
            ReferenceableKind::GlossaryTerm(_) => out.push("GlossaryTerm"),
            ReferenceableKind::GovernanceDefinition(g) => {
                out.push("GovernanceDefinition");
                g.kind.lineage(out);
            }
            ReferenceableKind::SchemaElement(s) => {
                out.push("SchemaElement");
                s.kind.lineage(out);
            }
            ReferenceableKind::ValidValueDefinition(_) => out.push("ValidValueDefinition"),
            ReferenceableKind::ExternalReference(_) => out.push("ExternalReference"),
            ReferenceableKind::Comment(_) => out.push("Comment"),
            ReferenceableKind::Endpoint(_) => out.push("Endpoint"),
            ReferenceableKind::Connection(_) => out.push("Connection"),
            ReferenceableKind::SoftwareCapability(_) => out.push("SoftwareCapability"),
            ReferenceableKind::Annotation(a) => {
                out.push("Annotation");
                a.kind.lineage(out);
            }
        }
    }
}

// ============================================================================
// Assets
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetProperties {
    pub resource_name: Option<String>,
    pub namespace: Option<String>,
    pub deployed_implementation_type: Option<String>,
    pub source: Option<String>,
    pub kind: AssetKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum AssetKind {
    #[default]
    Plain,
    Process(ProcessProperties),
    DataStore(DataStoreProperties),
    DataSet(DataSetProperties),
    ITInfrastructure(InfrastructureProperties),
}

impl AssetKind {
    fn leaf_name(&self) -> Option<&'static str> {
        match self {
            AssetKind::Plain => None,
            AssetKind::Process(p) => Some(p.kind.leaf_name().unwrap_or("Process")),
            AssetKind::DataStore(d) => Some(d.kind.leaf_name().unwrap_or("DataStore")),
            AssetKind::DataSet(_) => Some("DataSet"),
            AssetKind::ITInfrastructure(i) => Some(i.kind.leaf_name().unwrap_or("ITInfrastructure")),
        }
    }

    fn lineage<'a>(&self, out: &mut TypeLineage<'a>) {
        match self {
            AssetKind::Plain => {}
            AssetKind::Process(p) => {
                out.push("Process");
                p.kind.lineage(out);
            }
            AssetKind::DataStore(d) => {
                out.push("DataStore");
                d.kind.lineage(out);
            }
            AssetKind::DataSet(_) => out.push("DataSet"),
            AssetKind::ITInfrastructure(i) => {
                out.push("ITInfrastructure");
                i.kind.lineage(out);
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessProperties {
    pub formula: Option<String>,
    pub formula_type: Option<String>,
    pub kind: ProcessKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum ProcessKind {
    #[default]
    Plain,
    DeployedSoftwareComponent(DeployedSoftwareComponentProperties),
}

impl ProcessKind {
    fn leaf_name(&self) -> Option<&'static str> {
        match self {
            ProcessKind::Plain => None,
            ProcessKind::DeployedSoftwareComponent(d) => {
                Some(d.kind.leaf_name().unwrap_or("DeployedSoftwareComponent"))
            }
        }
    }

    fn lineage<'a>(&self, out: &mut TypeLineage<'a>) {
        match self {
            ProcessKind::Plain => {}
            ProcessKind::DeployedSoftwareComponent(d) => {
                out.push("DeployedSoftwareComponent");
                d.kind.lineage(out);
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeployedSoftwareComponentProperties {
    pub implementation_language: Option<String>,
    pub kind: DeployedSoftwareComponentKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum DeployedSoftwareComponentKind {
    #[default]
    Plain,
    IntegrationConnector(IntegrationConnectorProperties),
}

impl DeployedSoftwareComponentKind {
    fn leaf_name(&self) -> Option<&'static str> {
        match self {
            DeployedSoftwareComponentKind::Plain => None,
            DeployedSoftwareComponentKind::IntegrationConnector(_) => Some("IntegrationConnector"),
        }
    }

    fn lineage<'a>(&self, out: &mut TypeLineage<'a>) {
        if let DeployedSoftwareComponentKind::IntegrationConnector(_) = self {
            out.push("IntegrationConnector");
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntegrationConnectorProperties {
    pub uses_blocking_calls: Option<bool>,
    /// Minutes between refresh calls.
    pub refresh_time_interval: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataStoreProperties {
    pub path_name: Option<String>,
    pub store_create_time: Option<DateTime<Utc>>,
    pub store_update_time: Option<DateTime<Utc>>,
    pub kind: DataStoreKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum DataStoreKind {
    #[default]
    Plain,
    DataFile(DataFileProperties),
    Database(DatabaseProperties),
}

impl DataStoreKind {
    fn leaf_name(&self) -> Option<&'static str> {
        match self {
            DataStoreKind::Plain => None,
            DataStoreKind::DataFile(_) => Some("DataFile"),
            DataStoreKind::Database(_) => Some("Database"),
        }
    }

    fn lineage<'a>(&self, out: &mut TypeLineage<'a>) {
        match self {
            DataStoreKind::Plain => {}
            DataStoreKind::DataFile(_) => out.push("DataFile"),
            DataStoreKind::Database(_) => out.push("Database"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataFileProperties {
    pub file_name: Option<String>,
    pub file_type: Option<String>,
    pub file_extension: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatabaseProperties {
    pub database_type: Option<String>,
    pub database_version: Option<String>,
    pub database_instance: Option<String>,
    pub database_imported_from: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataSetProperties {
    pub formula: Option<String>,
    pub formula_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InfrastructureProperties {
    pub kind: InfrastructureKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum InfrastructureKind {
    #[default]
    Plain,
    Host(HostProperties),
    SoftwareServer(SoftwareServerProperties),
}

impl InfrastructureKind {
    fn leaf_name(&self) -> Option<&'static str> {
        match self {
            InfrastructureKind::Plain => None,
            InfrastructureKind::Host(_) => Some("Host"),
            InfrastructureKind::SoftwareServer(_) => Some("SoftwareServer"),
        }
    }

    fn lineage<'a>(&self, out: &mut TypeLineage<'a>) {
        match self {
            InfrastructureKind::Plain => {}
            InfrastructureKind::Host(_) => out.push("Host"),
            InfrastructureKind::SoftwareServer(_) => out.push("SoftwareServer"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostProperties {
    pub operating_system: Option<String>,
    pub operating_system_patch_level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SoftwareServerProperties {
    pub software_server_user_id: Option<String>,
}

// ============================================================================
// Actors
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActorProfileProperties {
    pub known_name: Option<String>,
    pub kind: ActorProfileKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum ActorProfileKind {
    #[default]
    Plain,
    Person(PersonProperties),
    Team(TeamProperties),
}

impl ActorProfileKind {
    fn leaf_name(&self) -> Option<&'static str> {
        match self {
            ActorProfileKind::Plain => None,
            ActorProfileKind::Person(_) => Some("Person"),
            ActorProfileKind::Team(_) => Some("Team"),
        }
    }

    fn lineage<'a>(&self, out: &mut TypeLineage<'a>) {
        match self {
            ActorProfileKind::Plain => {}
            ActorProfileKind::Person(_) => out.push("Person"),
            ActorProfileKind::Team(_) => out.push("Team"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonProperties {
    pub courtesy_title: Option<String>,
    pub initials: Option<String>,
    pub given_names: Option<String>,
    pub surname: Option<String>,
    pub full_name: Option<String>,
    pub preferred_language: Option<String>,
    pub job_title: Option<String>,
    pub employee_number: Option<String>,
    pub employee_type: Option<String>,
    pub pronouns: Option<String>,
    pub is_public: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamProperties {
    pub team_type: Option<String>,
    pub identifier: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonRoleProperties {
    pub identifier: Option<String>,
    pub scope: Option<String>,
    pub domain_identifier: Option<i32>,
    pub head_count: Option<i32>,
    pub head_count_limit_set: Option<bool>,
}

// ============================================================================
// Collections, projects, communities, locations
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionProperties {
    pub collection_type: Option<String>,
    pub kind: CollectionKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum CollectionKind {
    #[default]
    Plain,
    DigitalProduct(DigitalProductProperties),
}

impl CollectionKind {
    fn leaf_name(&self) -> Option<&'static str> {
        match self {
            CollectionKind::Plain => None,
            CollectionKind::DigitalProduct(_) => Some("DigitalProduct"),
        }
    }

    fn lineage<'a>(&self, out: &mut TypeLineage<'a>) {
        if let CollectionKind::DigitalProduct(_) = self {
            out.push("DigitalProduct");
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DigitalProductProperties {
    pub product_name: Option<String>,
    pub product_type: Option<String>,
    pub introduction_date: Option<DateTime<Utc>>,
    pub maturity: Option<String>,
    pub service_life: Option<String>,
    pub current_version: Option<String>,
    pub next_version: Option<String>,
    pub withdraw_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectProperties {
    pub identifier: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub planned_end_date: Option<DateTime<Utc>>,
    pub project_status: Option<String>,
    pub project_phase: Option<String>,
    pub project_health: Option<String>,
    pub priority: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommunityProperties {
    pub mission: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationProperties {
    pub identifier: Option<String>,
}

// ============================================================================
// Glossaries and governance definitions
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlossaryProperties {
    pub language: Option<String>,
    pub usage: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlossaryTermProperties {
    pub summary: Option<String>,
    pub examples: Option<String>,
    pub abbreviation: Option<String>,
    pub usage: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GovernanceDefinitionProperties {
    pub document_identifier: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub scope: Option<String>,
    pub domain_identifier: Option<i32>,
    pub importance: Option<String>,
    pub implications: Option<Vec<String>>,
    pub outcomes: Option<Vec<String>>,
    pub results: Option<Vec<String>>,
    pub kind: GovernanceDefinitionKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum GovernanceDefinitionKind {
    #[default]
    Plain,
    GovernancePolicy,
    GovernanceControl(GovernanceControlProperties),
    GovernanceMetric(GovernanceMetricProperties),
}

impl GovernanceDefinitionKind {
    fn leaf_name(&self) -> Option<&'static str> {
        match self {
            GovernanceDefinitionKind::Plain => None,
            GovernanceDefinitionKind::GovernancePolicy => Some("GovernancePolicy"),
            GovernanceDefinitionKind::GovernanceControl(_) => Some("GovernanceControl"),
            GovernanceDefinitionKind::GovernanceMetric(_) => Some("GovernanceMetric"),
        }
    }

    fn lineage<'a>(&self, out: &mut TypeLineage<'a>) {
        match self {
            GovernanceDefinitionKind::Plain => {}
            GovernanceDefinitionKind::GovernancePolicy => out.push("GovernancePolicy"),
            GovernanceDefinitionKind::GovernanceControl(_) => out.push("GovernanceControl"),
            GovernanceDefinitionKind::GovernanceMetric(_) => out.push("GovernanceMetric"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GovernanceControlProperties {
    pub implementation_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GovernanceMetricProperties {
    pub measurement: Option<String>,
    pub target: Option<String>,
}

// ============================================================================
// Schemas and valid values
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchemaElementProperties {
    pub is_deprecated: Option<bool>,
    pub kind: SchemaElementKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum SchemaElementKind {
    #[default]
    Plain,
    SchemaType(SchemaTypeProperties),
    SchemaAttribute(SchemaAttributeProperties),
}

impl SchemaElementKind {
    fn leaf_name(&self) -> Option<&'static str> {
        match self {
            SchemaElementKind::Plain => None,
            SchemaElementKind::SchemaType(_) => Some("SchemaType"),
            SchemaElementKind::SchemaAttribute(_) => Some("SchemaAttribute"),
        }
    }

    fn lineage<'a>(&self, out: &mut TypeLineage<'a>) {
        match self {
            SchemaElementKind::Plain => {}
            SchemaElementKind::SchemaType(_) => out.push("SchemaType"),
            SchemaElementKind::SchemaAttribute(_) => out.push("SchemaAttribute"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchemaTypeProperties {
    pub author: Option<String>,
    pub usage: Option<String>,
    pub encoding_standard: Option<String>,
    pub namespace: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchemaAttributeProperties {
    pub element_position: Option<i32>,
    pub min_cardinality: Option<i32>,
    pub max_cardinality: Option<i32>,
    pub allows_duplicate_values: Option<bool>,
    pub ordered_values: Option<bool>,
    pub default_value_override: Option<String>,
    pub sort_order: Option<DataItemSortOrder>,
    pub minimum_length: Option<i32>,
    pub length: Option<i32>,
    pub precision: Option<i32>,
    pub is_nullable: Option<bool>,
    pub native_class: Option<String>,
    pub aliases: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidValueDefinitionProperties {
    pub usage: Option<String>,
    pub scope: Option<String>,
    pub preferred_value: Option<String>,
    pub data_type: Option<String>,
    pub is_deprecated: Option<bool>,
    pub is_case_sensitive: Option<bool>,
}

// ============================================================================
// References, feedback, connectivity
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExternalReferenceProperties {
    pub reference_title: Option<String>,
    pub reference_abstract: Option<String>,
    pub authors: Option<Vec<String>>,
    pub url: Option<String>,
    pub sources: Option<BTreeMap<String, String>>,
    pub license: Option<String>,
    pub copyright: Option<String>,
    pub attribution: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentProperties {
    pub comment_type: Option<CommentType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EndpointProperties {
    pub network_address: Option<String>,
    pub protocol: Option<String>,
    pub encryption_method: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectionProperties {
    pub user_id: Option<String>,
    pub clear_password: Option<String>,
    pub encrypted_password: Option<String>,
    pub secured_properties: Option<BTreeMap<String, String>>,
    pub configuration_properties: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SoftwareCapabilityProperties {
    pub deployed_implementation_type: Option<String>,
    pub capability_version: Option<String>,
    pub patch_level: Option<String>,
    pub source: Option<String>,
}

// ============================================================================
// Annotations
// ============================================================================

/// Result of a survey or analysis step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnnotationProperties {
    pub annotation_type: Option<String>,
    pub summary: Option<String>,
    pub confidence_level: Option<i32>,
    pub expression: Option<String>,
    pub explanation: Option<String>,
    pub analysis_step: Option<String>,
    pub json_properties: Option<String>,
    pub kind: AnnotationKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum AnnotationKind {
    #[default]
    Plain,
    ResourceProfile(ResourceProfileAnnotationProperties),
    DataClass(DataClassAnnotationProperties),
}

impl AnnotationKind {
    fn leaf_name(&self) -> Option<&'static str> {
        match self {
            AnnotationKind::Plain => None,
            AnnotationKind::ResourceProfile(_) => Some("ResourceProfileAnnotation"),
            AnnotationKind::DataClass(_) => Some("DataClassAnnotation"),
        }
    }

    fn lineage<'a>(&self, out: &mut TypeLineage<'a>) {
        match self {
            AnnotationKind::Plain => {}
            AnnotationKind::ResourceProfile(_) => out.push("ResourceProfileAnnotation"),
            AnnotationKind::DataClass(_) => out.push("DataClassAnnotation"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceProfileAnnotationProperties {
    pub profile_properties: Option<BTreeMap<String, String>>,
    pub profile_flags: Option<BTreeMap<String, bool>>,
    pub profile_counts: Option<BTreeMap<String, i64>>,
    pub profile_doubles: Option<BTreeMap<String, f64>>,
    pub profile_dates: Option<BTreeMap<String, DateTime<Utc>>>,
    pub profile_start_date: Option<DateTime<Utc>>,
    pub profile_end_date: Option<DateTime<Utc>>,
    pub value_list: Option<Vec<String>>,
    pub value_count: Option<BTreeMap<String, i32>>,
    pub value_range_from: Option<String>,
    pub value_range_to: Option<String>,
    pub average_value: Option<String>,
    pub length: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataClassAnnotationProperties {
    #[serde(rename = "candidateDataClassGUIDs")]
    pub candidate_data_class_guids: Option<Vec<String>>,
    pub matching_values: Option<i64>,
    pub non_matching_values: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn integration_connector() -> ElementProperties {
        ReferenceableProperties::new("connector:1")
            .with_kind(ReferenceableKind::Asset(AssetProperties {
                kind: AssetKind::Process(ProcessProperties {
                    kind: ProcessKind::DeployedSoftwareComponent(DeployedSoftwareComponentProperties {
                        kind: DeployedSoftwareComponentKind::IntegrationConnector(
                            IntegrationConnectorProperties::default(),
                        ),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }))
            .into()
    }

    #[test]
    fn test_lineage_five_levels() {
        let props = integration_connector();
        assert_eq!(
            props.type_lineage().as_slice(),
            ["Referenceable", "Asset", "Process", "DeployedSoftwareComponent", "IntegrationConnector"]
        );
        assert_eq!(props.type_name(), "IntegrationConnector");
    }

    #[test]
    fn test_lineage_plain_and_raw() {
        let plain: ElementProperties = ReferenceableProperties::new("x").into();
        assert_eq!(plain.type_lineage().as_slice(), ["Referenceable"]);

        let raw = ElementProperties::Raw { type_name: "Meeting".into(), properties: PropertyMap::new() };
        assert_eq!(raw.type_name(), "Meeting");
        assert_eq!(raw.type_lineage().len(), 1);
    }

    #[test]
    fn test_type_name_matches_lineage_leaf() {
        let cases: Vec<ElementProperties> = vec![
            ReferenceableProperties::new("x").into(),
            ReferenceableProperties::new("x")
                .with_kind(ReferenceableKind::Asset(AssetProperties {
                    kind: AssetKind::ITInfrastructure(InfrastructureProperties::default()),
                    ..Default::default()
                }))
                .into(),
            ReferenceableProperties::new("x")
                .with_kind(ReferenceableKind::Annotation(AnnotationProperties {
                    kind: AnnotationKind::DataClass(DataClassAnnotationProperties::default()),
                    ..Default::default()
                }))
                .into(),
            ReferenceableProperties::new("x")
                .with_kind(ReferenceableKind::GovernanceDefinition(GovernanceDefinitionProperties {
                    kind: GovernanceDefinitionKind::GovernancePolicy,
                    ..Default::default()
                }))
                .into(),
            integration_connector(),
        ];
        for props in &cases {
            assert_eq!(Some(&props.type_name()), props.type_lineage().last());
        }
        assert_eq!(cases[1].type_name(), "ITInfrastructure");
        assert_eq!(cases[2].type_name(), "DataClassAnnotation");
    }

    #[test]
    fn test_raw_serializes_camel_case() {
        let raw = ElementProperties::Raw { type_name: "Meeting".into(), properties: PropertyMap::new() };
        let json = serde_json::to_value(&raw).unwrap();
        assert_eq!(json["class"], "Raw");
        assert_eq!(json["typeName"], "Meeting");
        assert!(json.get("type_name").is_none());
    }
}
