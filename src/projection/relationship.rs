//! Relationship field contributor.

use crate::beans::RelationshipProperties;
use crate::model::PropertyMap;
use crate::model::names::*;

use super::helper::*;

/// Encode the typed fields of a relationship into `props`.
pub(crate) fn contribute(
    props: Option<PropertyMap>,
    relationship: &RelationshipProperties,
) -> Option<PropertyMap> {
    use RelationshipProperties as R;

    match relationship {
        R::AgreementActor(a) => add_string(props, ACTOR_NAME, a.actor_name.as_deref()),
        R::AgreementItem(a) => {
            let props = add_string(props, AGREEMENT_ITEM_ID, a.agreement_item_id.as_deref());
            let props = add_date(props, AGREEMENT_START, a.agreement_start);
            let props = add_date(props, AGREEMENT_END, a.agreement_end);
            let props = add_string_map(props, RESTRICTIONS, a.restrictions.as_ref());
            let props = add_string_map(props, OBLIGATIONS, a.obligations.as_ref());
            let props = add_string_map(props, ENTITLEMENTS, a.entitlements.as_ref());
            add_string_map(props, USAGE_MEASUREMENTS, a.usage_measurements.as_ref())
        }
        R::Certification(c) => {
            let props = add_string(props, CERTIFICATE_GUID, c.certificate_guid.as_deref());
            let props = add_date(props, START, c.start);
            let props = add_date(props, END, c.end);
            let props = add_string(props, CONDITIONS, c.conditions.as_deref());
            let props = add_string(props, CERTIFIED_BY, c.certified_by.as_deref());
            let props = add_string(props, CERTIFIED_BY_TYPE_NAME, c.certified_by_type_name.as_deref());
            let props = add_string(props, CERTIFIED_BY_PROPERTY_NAME, c.certified_by_property_name.as_deref());
            let props = add_string(props, CUSTODIAN, c.custodian.as_deref());
            let props = add_string(props, CUSTODIAN_TYPE_NAME, c.custodian_type_name.as_deref());
            let props = add_string(props, CUSTODIAN_PROPERTY_NAME, c.custodian_property_name.as_deref());
            let props = add_string(props, RECIPIENT, c.recipient.as_deref());
            let props = add_string(props, RECIPIENT_TYPE_NAME, c.recipient_type_name.as_deref());
            let props = add_string(props, RECIPIENT_PROPERTY_NAME, c.recipient_property_name.as_deref());
            add_string(props, NOTES, c.notes.as_deref())
        }
        R::License(l) => {
            let props = add_string(props, LICENSE_GUID, l.license_guid.as_deref());
            let props = add_date(props, START, l.start);
            let props = add_date(props, END, l.end);
            let props = add_string(props, CONDITIONS, l.conditions.as_deref());
            let props = add_string(props, LICENSED_BY, l.licensed_by.as_deref());
            let props = add_string(props, LICENSED_BY_TYPE_NAME, l.licensed_by_type_name.as_deref());
            let props = add_string(props, LICENSED_BY_PROPERTY_NAME, l.licensed_by_property_name.as_deref());
            let props = add_string(props, CUSTODIAN, l.custodian.as_deref());
            let props = add_string(props, CUSTODIAN_TYPE_NAME, l.custodian_type_name.as_deref());
            let props = add_string(props, CUSTODIAN_PROPERTY_NAME, l.custodian_property_name.as_deref());
            let props = add_string(props, LICENSEE, l.licensee.as_deref());
            let props = add_string(props, LICENSEE_TYPE_NAME, l.licensee_type_name.as_deref());
            let props = add_string(props, LICENSEE_PROPERTY_NAME, l.licensee_property_name.as_deref());
            add_string(props, NOTES, l.notes.as_deref())
        }
        R::ContractLink(c) => {
            let props = add_string(props, CONTRACT_ID, c.contract_id.as_deref());
            let props = add_string(props, CONTRACT_LIAISON, c.contract_liaison.as_deref());
            let props = add_string(props, CONTRACT_LIAISON_TYPE_NAME, c.contract_liaison_type_name.as_deref());
            add_string(props, CONTRACT_LIAISON_PROPERTY_NAME, c.contract_liaison_property_name.as_deref())
        }
        R::DigitalSubscriber(d) => add_string(props, SUBSCRIBER_ID, d.subscriber_id.as_deref()),

        R::CollectionMembership(c) => {
            let props = add_string(props, MEMBERSHIP_RATIONALE, c.membership_rationale.as_deref());
            let props = add_string(props, EXPRESSION, c.expression.as_deref());
            let props = add_int(props, CONFIDENCE, c.confidence);
            let props = add_enum_value(props, MEMBERSHIP_STATUS, c.membership_status);
            let props = add_string(props, USER_DEFINED_STATUS, c.user_defined_status.as_deref());
            let props = add_string(props, STEWARD, c.steward.as_deref());
            let props = add_string(props, STEWARD_TYPE_NAME, c.steward_type_name.as_deref());
            let props = add_string(props, STEWARD_PROPERTY_NAME, c.steward_property_name.as_deref());
            let props = add_string(props, SOURCE, c.source.as_deref());
            add_string(props, NOTES, c.notes.as_deref())
        }
        R::SemanticAssignment(s) => {
            let props = add_string(props, EXPRESSION, s.expression.as_deref());
            let props = add_string(props, DESCRIPTION, s.description.as_deref());
            let props = add_enum_value(props, TERM_ASSIGNMENT_STATUS, s.term_assignment_status);
            let props = add_int(props, CONFIDENCE, s.confidence);
            let props = add_string(props, CREATED_BY, s.created_by.as_deref());
            let props = add_string(props, STEWARD, s.steward.as_deref());
            let props = add_string(props, STEWARD_TYPE_NAME, s.steward_type_name.as_deref());
            let props = add_string(props, STEWARD_PROPERTY_NAME, s.steward_property_name.as_deref());
            let props = add_string(props, SOURCE, s.source.as_deref());
            add_string(props, NOTES, s.notes.as_deref())
        }
        R::GlossaryTermRelationship(g) => {
            let props = add_string(props, EXPRESSION, g.expression.as_deref());
            let props = add_string(props, DESCRIPTION, g.description.as_deref());
            let props = add_enum_value(props, STATUS, g.status);
            let props = add_string(props, STEWARD, g.steward.as_deref());
            add_string(props, SOURCE, g.source.as_deref())
        }
        R::ValidValuesMapping(v) => {
            let props = add_string(props, ASSOCIATION_DESCRIPTION, v.association_description.as_deref());
            let props = add_int(props, CONFIDENCE, v.confidence);
            let props = add_string(props, STEWARD, v.steward.as_deref());
            let props = add_string(props, STEWARD_TYPE_NAME, v.steward_type_name.as_deref());
            let props = add_string(props, STEWARD_PROPERTY_NAME, v.steward_property_name.as_deref());
            add_string(props, NOTES, v.notes.as_deref())
        }
        R::ValidValueMember(v) => add_boolean(props, IS_DEFAULT_VALUE, v.is_default_value),
        R::ReferenceValueAssignment(r) => {
            let props = add_string(props, ATTRIBUTE_NAME, r.attribute_name.as_deref());
            let props = add_int(props, CONFIDENCE, r.confidence);
            let props = add_string(props, STEWARD, r.steward.as_deref());
            let props = add_string(props, STEWARD_TYPE_NAME, r.steward_type_name.as_deref());
            let props = add_string(props, STEWARD_PROPERTY_NAME, r.steward_property_name.as_deref());
            add_string(props, NOTES, r.notes.as_deref())
        }

        R::ResourceList(r) => {
            let props = add_string(props, RESOURCE_USE, r.resource_use.as_deref());
            let props = add_string(props, RESOURCE_USE_DESCRIPTION, r.resource_use_description.as_deref());
            let props = add_string_map(props, RESOURCE_USE_PROPERTIES, r.resource_use_properties.as_ref());
            add_boolean(props, WATCH_RESOURCE, r.watch_resource)
        }
        R::ExternalReferenceLink(e) => {
            let props = add_string(props, LINK_ID, e.link_id.as_deref());
            let props = add_string(props, LINK_DESCRIPTION, e.link_description.as_deref());
            add_string(props, PAGES, e.pages.as_deref())
        }
        R::MediaReference(m) => {
            let props = add_string(props, MEDIA_ID, m.media_id.as_deref());
            add_string(props, MEDIA_DESCRIPTION, m.media_description.as_deref())
        }
        R::AttachedTag(t) => add_boolean(props, IS_PUBLIC, t.is_public),
        R::ProfileLocation(p) => add_string(props, ASSOCIATION_TYPE, p.association_type.as_deref()),

        R::AssignmentScope(a) => {
            let props = add_string(props, ASSIGNMENT_TYPE, a.assignment_type.as_deref());
            add_string(props, DESCRIPTION, a.description.as_deref())
        }
        R::PersonRoleAppointment(p) => {
            let props = add_boolean(props, IS_PUBLIC, p.is_public);
            add_int(props, EXPECTED_TIME_ALLOCATION_PERCENT, p.expected_time_allocation_percent)
        }
        R::TeamMembership(t) | R::TeamLeadership(t) => add_string(props, POSITION, t.position.as_deref()),
        R::Stakeholder(s) => add_string(props, STAKEHOLDER_ROLE, s.stakeholder_role.as_deref()),
        R::ProjectDependency(p) => add_string(props, DEPENDENCY_SUMMARY, p.dependency_summary.as_deref()),
        R::ProjectHierarchy | R::ProjectManagement => props,

        R::DataContentForDataSet(d) => {
            let props = add_string(props, QUERY_ID, d.query_id.as_deref());
            let props = add_string(props, QUERY, d.query.as_deref());
            add_string(props, QUERY_TYPE, d.query_type.as_deref())
        }
        R::ProcessCall(p) => {
            let props = add_string(props, QUALIFIED_NAME, p.qualified_name.as_deref());
            let props = add_string(props, DESCRIPTION, p.description.as_deref());
            let props = add_string(props, FORMULA, p.formula.as_deref());
            let props = add_string(props, FORMULA_TYPE, p.formula_type.as_deref());
            add_int(props, LINE_NUMBER, p.line_number)
        }
        R::DataFlow(d) => {
            let props = add_string(props, QUALIFIED_NAME, d.qualified_name.as_deref());
            let props = add_string(props, DESCRIPTION, d.description.as_deref());
            let props = add_string(props, FORMULA, d.formula.as_deref());
            add_string(props, FORMULA_TYPE, d.formula_type.as_deref())
        }
        R::ControlFlow(c) => {
            let props = add_string(props, QUALIFIED_NAME, c.qualified_name.as_deref());
            let props = add_string(props, DESCRIPTION, c.description.as_deref());
            let props = add_string(props, GUARD, c.guard.as_deref());
            add_boolean(props, MANDATORY_GUARD, c.mandatory_guard)
        }
        R::LineageMapping(l) => {
            let props = add_string(props, QUALIFIED_NAME, l.qualified_name.as_deref());
            add_string(props, DESCRIPTION, l.description.as_deref())
        }
        R::ImplementedBy(i) => {
            let props = add_string(props, DESIGN_STEP, i.design_step.as_deref());
            let props = add_string(props, ROLE, i.role.as_deref());
            let props = add_string(props, TRANSFORMATION, i.transformation.as_deref());
            add_string(props, DESCRIPTION, i.description.as_deref())
        }
        R::ForeignKey(f) => {
            let props = add_string(props, NAME, f.name.as_deref());
            let props = add_string(props, DESCRIPTION, f.description.as_deref());
            let props = add_int(props, CONFIDENCE, f.confidence);
            let props = add_string(props, STEWARD, f.steward.as_deref());
            add_string(props, SOURCE, f.source.as_deref())
        }
        R::SupplementaryProperties => props,

        R::RegisteredIntegrationConnector(r) => {
            let props = add_string(props, CONNECTOR_NAME, r.connector_name.as_deref());
            let props = add_string(props, CONNECTOR_USER_ID, r.connector_user_id.as_deref());
            let props = add_string(props, METADATA_SOURCE_QUALIFIED_NAME, r.metadata_source_qualified_name.as_deref());
            let props = add_date(props, START_DATE, r.start_date);
            let props = add_long(props, REFRESH_TIME_INTERVAL, r.refresh_time_interval);
            let props = add_date(props, STOP_DATE, r.stop_date);
            let props = add_enum_value(props, PERMITTED_SYNCHRONIZATION, r.permitted_synchronization);
            add_boolean(props, GENERATE_INTEGRATION_REPORT, r.generate_integration_report)
        }
        R::CatalogTarget(c) => {
            let props = add_string(props, CATALOG_TARGET_NAME, c.catalog_target_name.as_deref());
            let props = add_string(props, METADATA_SOURCE_QUALIFIED_NAME, c.metadata_source_qualified_name.as_deref());
            let props = add_string(props, CONNECTION_NAME, c.connection_name.as_deref());
            let props = add_string_map(props, TEMPLATES, c.templates.as_ref());
            let props = add_string_map(props, CONFIGURATION_PROPERTIES, c.configuration_properties.as_ref());
            let props = add_enum_value(props, PERMITTED_SYNCHRONIZATION, c.permitted_synchronization);
            add_enum_value(props, DELETE_METHOD, c.delete_method)
        }
        R::ActionTarget(a) => {
            let props = add_string(props, ACTION_TARGET_NAME, a.action_target_name.as_deref());
            let props = add_enum_value(props, ACTIVITY_STATUS, a.activity_status);
            let props = add_string(props, COMPLETION_MESSAGE, a.completion_message.as_deref());
            let props = add_date(props, START_TIME, a.start_time);
            add_date(props, COMPLETION_TIME, a.completion_time)
        }

        R::GovernanceImplementation(g) | R::GovernanceResponse(g) | R::GovernanceMechanism(g) => {
            add_string(props, RATIONALE, g.rationale.as_deref())
        }
        R::GovernanceDefinitionLink(g) => add_string(props, DESCRIPTION, g.description.as_deref()),
    }
}
