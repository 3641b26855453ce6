//! Relationship beans.
//!
//! Relationship kinds form a flat set; none specializes another.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{
    ActivityStatus, CollectionMemberStatus, DeleteMethod, PermittedSynchronization,
    TermAssignmentStatus, TermRelationshipStatus,
};

/// One relationship kind with its typed fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum RelationshipProperties {
    // Agreements, certifications, licenses
    AgreementActor(AgreementActorProperties),
    AgreementItem(AgreementItemProperties),
    Certification(CertificationProperties),
    License(LicenseProperties),
    ContractLink(ContractLinkProperties),
    DigitalSubscriber(DigitalSubscriberProperties),

    // Collections, glossaries, valid values
    CollectionMembership(CollectionMembershipProperties),
    SemanticAssignment(SemanticAssignmentProperties),
    GlossaryTermRelationship(GlossaryTermRelationshipProperties),
    ValidValuesMapping(ValidValuesMappingProperties),
    ValidValueMember(ValidValueMemberProperties),
    ReferenceValueAssignment(ReferenceValueAssignmentProperties),

    // Resources and references
    ResourceList(ResourceListProperties),
    ExternalReferenceLink(ExternalReferenceLinkProperties),
    MediaReference(MediaReferenceProperties),
    AttachedTag(AttachedTagProperties),
    ProfileLocation(ProfileLocationProperties),

    // People, teams, projects
    AssignmentScope(AssignmentScopeProperties),
    PersonRoleAppointment(PersonRoleAppointmentProperties),
    TeamMembership(TeamMembershipProperties),
    TeamLeadership(TeamMembershipProperties),
    Stakeholder(StakeholderProperties),
    ProjectDependency(ProjectDependencyProperties),
    ProjectHierarchy,
    ProjectManagement,

    // Lineage and design
    DataContentForDataSet(DataContentForDataSetProperties),
    ProcessCall(ProcessCallProperties),
    DataFlow(DataFlowProperties),
    ControlFlow(ControlFlowProperties),
    LineageMapping(LineageMappingProperties),
    ImplementedBy(ImplementedByProperties),
    ForeignKey(ForeignKeyProperties),
    SupplementaryProperties,

    // Integration
    RegisteredIntegrationConnector(RegisteredIntegrationConnectorProperties),
    CatalogTarget(CatalogTargetProperties),
    ActionTarget(ActionTargetProperties),

    // Governance
    GovernanceImplementation(GovernanceRationaleProperties),
    GovernanceResponse(GovernanceRationaleProperties),
    GovernanceMechanism(GovernanceRationaleProperties),
    GovernanceDefinitionLink(GovernanceDefinitionLinkProperties),
}

impl RelationshipProperties {
    /// Open metadata type name of the relationship.
    pub fn type_name(&self) -> &'static str {
        match self {
            RelationshipProperties::AgreementActor(_) => "AgreementActor",
            RelationshipProperties::AgreementItem(_) => "AgreementItem",
            RelationshipProperties::Certification(_) => "Certification",
            RelationshipProperties::License(_) => "License",
            RelationshipProperties::ContractLink(_) => "ContractLink",
            RelationshipProperties::DigitalSubscriber(_) => "DigitalSubscriber",
            RelationshipProperties::CollectionMembership(_) => "CollectionMembership",
            RelationshipProperties::SemanticAssignment(_) => "SemanticAssignment",
            RelationshipProperties::GlossaryTermRelationship(g) => g.kind.type_name(),
            RelationshipProperties::ValidValuesMapping(_) => "ValidValuesMapping",
            RelationshipProperties::ValidValueMember(_) => "ValidValueMember",
            RelationshipProperties::ReferenceValueAssignment(_) => "ReferenceValueAssignment",
            RelationshipProperties::ResourceList(_) => "ResourceList",
            RelationshipProperties::ExternalReferenceLink(_) => "ExternalReferenceLink",
            RelationshipProperties::MediaReference(_) => "MediaReference",
            RelationshipProperties::AttachedTag(_) => "AttachedTag",
            RelationshipProperties::ProfileLocation(_) => "ProfileLocation",
            RelationshipProperties::AssignmentScope(_) => "AssignmentScope",
            RelationshipProperties::PersonRoleAppointment(_) => "PersonRoleAppointment",
            RelationshipProperties::TeamMembership(_) => "TeamMembership",
            RelationshipProperties::TeamLeadership(_) => "TeamLeadership",
            RelationshipProperties::Stakeholder(_) => "Stakeholder",
            RelationshipProperties::ProjectDependency(_) => "ProjectDependency",
            RelationshipProperties::ProjectHierarchy => "ProjectHierarchy",
            RelationshipProperties::ProjectManagement => "ProjectManagement",
            RelationshipProperties::DataContentForDataSet(_) => "DataContentForDataSet",
            RelationshipProperties::ProcessCall(_) => "ProcessCall",
            RelationshipProperties::DataFlow(_) => "DataFlow",
            RelationshipProperties::ControlFlow(_) => "ControlFlow",
            RelationshipProperties::LineageMapping(_) => "LineageMapping",
            RelationshipProperties::ImplementedBy(_) => "ImplementedBy",
            RelationshipProperties::ForeignKey(_) => "ForeignKey",
            RelationshipProperties::SupplementaryProperties => "SupplementaryProperties",
            RelationshipProperties::RegisteredIntegrationConnector(_) => "RegisteredIntegrationConnector",
            RelationshipProperties::CatalogTarget(_) => "CatalogTarget",
            RelationshipProperties::ActionTarget(_) => "ActionTarget",
            RelationshipProperties::GovernanceImplementation(_) => "GovernanceImplementation",
            RelationshipProperties::GovernanceResponse(_) => "GovernanceResponse",
            RelationshipProperties::GovernanceMechanism(_) => "GovernanceMechanism",
            RelationshipProperties::GovernanceDefinitionLink(_) => "GovernancePolicyLink",
        }
    }
}

// ============================================================================
// Agreements, certifications, licenses
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgreementActorProperties {
    pub actor_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgreementItemProperties {
    pub agreement_item_id: Option<String>,
    pub agreement_start: Option<DateTime<Utc>>,
    pub agreement_end: Option<DateTime<Utc>>,
    pub restrictions: Option<BTreeMap<String, String>>,
    pub obligations: Option<BTreeMap<String, String>>,
    pub entitlements: Option<BTreeMap<String, String>>,
    pub usage_measurements: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationProperties {
    #[serde(rename = "certificateGUID")]
    pub certificate_guid: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub conditions: Option<String>,
    pub certified_by: Option<String>,
    pub certified_by_type_name: Option<String>,
    pub certified_by_property_name: Option<String>,
    pub custodian: Option<String>,
    pub custodian_type_name: Option<String>,
    pub custodian_property_name: Option<String>,
    pub recipient: Option<String>,
    pub recipient_type_name: Option<String>,
    pub recipient_property_name: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LicenseProperties {
    #[serde(rename = "licenseGUID")]
    pub license_guid: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub conditions: Option<String>,
    pub licensed_by: Option<String>,
    pub licensed_by_type_name: Option<String>,
    pub licensed_by_property_name: Option<String>,
    pub custodian: Option<String>,
    pub custodian_type_name: Option<String>,
    pub custodian_property_name: Option<String>,
    pub licensee: Option<String>,
    pub licensee_type_name: Option<String>,
    pub licensee_property_name: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContractLinkProperties {
    pub contract_id: Option<String>,
    pub contract_liaison: Option<String>,
    pub contract_liaison_type_name: Option<String>,
    pub contract_liaison_property_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DigitalSubscriberProperties {
    pub subscriber_id: Option<String>,
}

// ============================================================================
// Collections, glossaries, valid values
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionMembershipProperties {
    pub membership_rationale: Option<String>,
    pub expression: Option<String>,
    pub confidence: Option<i32>,
    pub membership_status: Option<CollectionMemberStatus>,
    pub user_defined_status: Option<String>,
    pub steward: Option<String>,
    pub steward_type_name: Option<String>,
    pub steward_property_name: Option<String>,
    pub source: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SemanticAssignmentProperties {
    pub expression: Option<String>,
    pub description: Option<String>,
    pub term_assignment_status: Option<TermAssignmentStatus>,
    pub confidence: Option<i32>,
    pub created_by: Option<String>,
    pub steward: Option<String>,
    pub steward_type_name: Option<String>,
    pub steward_property_name: Option<String>,
    pub source: Option<String>,
    pub notes: Option<String>,
}

/// Term-to-term relationship types that share one field set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GlossaryTermRelationshipKind {
    #[default]
    RelatedTerm,
    Synonym,
    Antonym,
    ReplacementTerm,
    Translation,
    IsA,
}

impl GlossaryTermRelationshipKind {
    pub fn type_name(self) -> &'static str {
        match self {
            GlossaryTermRelationshipKind::RelatedTerm => "RelatedTerm",
            GlossaryTermRelationshipKind::Synonym => "Synonym",
            GlossaryTermRelationshipKind::Antonym => "Antonym",
            GlossaryTermRelationshipKind::ReplacementTerm => "ReplacementTerm",
            GlossaryTermRelationshipKind::Translation => "Translation",
            GlossaryTermRelationshipKind::IsA => "ISARelationship",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlossaryTermRelationshipProperties {
    pub kind: GlossaryTermRelationshipKind,
    pub expression: Option<String>,
    pub description: Option<String>,
    pub status: Option<TermRelationshipStatus>,
    pub steward: Option<String>,
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidValuesMappingProperties {
    pub association_description: Option<String>,
    pub confidence: Option<i32>,
    pub steward: Option<String>,
    pub steward_type_name: Option<String>,
    pub steward_property_name: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidValueMemberProperties {
    pub is_default_value: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferenceValueAssignmentProperties {
    pub attribute_name: Option<String>,
    pub confidence: Option<i32>,
    pub steward: Option<String>,
    pub steward_type_name: Option<String>,
    pub steward_property_name: Option<String>,
    pub notes: Option<String>,
}

// ============================================================================
// Resources and references
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceListProperties {
    pub resource_use: Option<String>,
    pub resource_use_description: Option<String>,
    pub resource_use_properties: Option<BTreeMap<String, String>>,
    pub watch_resource: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExternalReferenceLinkProperties {
    pub link_id: Option<String>,
    pub link_description: Option<String>,
    pub pages: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaReferenceProperties {
    pub media_id: Option<String>,
    pub media_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttachedTagProperties {
    pub is_public: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileLocationProperties {
    pub association_type: Option<String>,
}

// ============================================================================
// People, teams, projects
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssignmentScopeProperties {
    pub assignment_type: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonRoleAppointmentProperties {
    pub is_public: Option<bool>,
    pub expected_time_allocation_percent: Option<i32>,
}

/// Shared by TeamMembership and TeamLeadership.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamMembershipProperties {
    pub position: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StakeholderProperties {
    pub stakeholder_role: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDependencyProperties {
    pub dependency_summary: Option<String>,
}

// ============================================================================
// Lineage and design
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataContentForDataSetProperties {
    pub query_id: Option<String>,
    pub query: Option<String>,
    pub query_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessCallProperties {
    pub qualified_name: Option<String>,
    pub description: Option<String>,
    pub formula: Option<String>,
    pub formula_type: Option<String>,
    pub line_number: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataFlowProperties {
    pub qualified_name: Option<String>,
    pub description: Option<String>,
    pub formula: Option<String>,
    pub formula_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ControlFlowProperties {
    pub qualified_name: Option<String>,
    pub description: Option<String>,
    pub guard: Option<String>,
    pub mandatory_guard: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineageMappingProperties {
    pub qualified_name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImplementedByProperties {
    pub design_step: Option<String>,
    pub role: Option<String>,
    pub transformation: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForeignKeyProperties {
    pub name: Option<String>,
    pub description: Option<String>,
    pub confidence: Option<i32>,
    pub steward: Option<String>,
    pub source: Option<String>,
}

// ============================================================================
// Integration
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisteredIntegrationConnectorProperties {
    pub connector_name: Option<String>,
    pub connector_user_id: Option<String>,
    pub metadata_source_qualified_name: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    /// Minutes between refresh calls.
    pub refresh_time_interval: Option<i64>,
    pub stop_date: Option<DateTime<Utc>>,
    pub permitted_synchronization: Option<PermittedSynchronization>,
    pub generate_integration_report: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogTargetProperties {
    pub catalog_target_name: Option<String>,
    pub metadata_source_qualified_name: Option<String>,
    pub connection_name: Option<String>,
    pub templates: Option<BTreeMap<String, String>>,
    pub configuration_properties: Option<BTreeMap<String, String>>,
    pub permitted_synchronization: Option<PermittedSynchronization>,
    pub delete_method: Option<DeleteMethod>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionTargetProperties {
    pub action_target_name: Option<String>,
    pub activity_status: Option<ActivityStatus>,
    pub completion_message: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub completion_time: Option<DateTime<Utc>>,
}

// ============================================================================
// Governance
// ============================================================================

/// Shared by GovernanceImplementation, GovernanceResponse and GovernanceMechanism.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GovernanceRationaleProperties {
    pub rationale: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GovernanceDefinitionLinkProperties {
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        let synonym = RelationshipProperties::GlossaryTermRelationship(GlossaryTermRelationshipProperties {
            kind: GlossaryTermRelationshipKind::Synonym,
            ..Default::default()
        });
        assert_eq!(synonym.type_name(), "Synonym");
        assert_eq!(
            RelationshipProperties::TeamLeadership(TeamMembershipProperties::default()).type_name(),
            "TeamLeadership"
        );
        assert_eq!(RelationshipProperties::ProjectHierarchy.type_name(), "ProjectHierarchy");
    }
}
