//! Classification field contributor.
//!
//! One arm per classification kind; exactly one arm runs per bean.

use crate::beans::{ClassificationProperties, GovernanceClassificationBase};
use crate::model::PropertyMap;
use crate::model::names::*;

use super::helper::*;

/// Encode the typed fields of a classification into `props`.
pub(crate) fn contribute(
    props: Option<PropertyMap>,
    classification: &ClassificationProperties,
) -> Option<PropertyMap> {
    match classification {
        ClassificationProperties::Governance(g) => governance_base(props, &g.base),
        ClassificationProperties::Retention(r) => {
            let props = governance_base(props, &r.base);
            let props = add_string(props, ASSOCIATED_GUID, r.associated_guid.as_deref());
            let props = add_date(props, ARCHIVE_AFTER, r.archive_after);
            add_date(props, STORE_UNTIL, r.store_until)
        }
        ClassificationProperties::Ownership(o) => {
            let props = add_string(props, OWNER, o.owner.as_deref());
            let props = add_string(props, OWNER_TYPE_NAME, o.owner_type_name.as_deref());
            add_string(props, OWNER_PROPERTY_NAME, o.owner_property_name.as_deref())
        }
        ClassificationProperties::SecurityTags(s) => {
            let props = add_string_array(props, SECURITY_LABELS, s.security_labels.as_deref());
            let props = add_string_map(props, SECURITY_PROPERTIES, s.security_properties.as_ref());
            add_string_array_map(props, ACCESS_GROUPS, s.access_groups.as_ref())
        }
        ClassificationProperties::Anchors(a) => {
            let props = add_string(props, ANCHOR_GUID, a.anchor_guid.as_deref());
            let props = add_string(props, ANCHOR_TYPE_NAME, a.anchor_type_name.as_deref());
            let props = add_string(props, ANCHOR_DOMAIN_NAME, a.anchor_domain_name.as_deref());
            add_string(props, ANCHOR_SCOPE_GUID, a.anchor_scope_guid.as_deref())
        }
        ClassificationProperties::Taxonomy(t) => {
            add_string(props, ORGANIZING_PRINCIPLE, t.organizing_principle.as_deref())
        }
        ClassificationProperties::CanonicalVocabulary(c) => add_string(props, SCOPE, c.scope.as_deref()),
        ClassificationProperties::SubjectArea(s) => {
            add_string(props, SUBJECT_AREA_NAME, s.subject_area_name.as_deref())
        }
        ClassificationProperties::TypeEmbeddedAttribute(t) => {
            let props = add_string(props, SCHEMA_TYPE_NAME, t.schema_type_name.as_deref());
            let props = add_string(props, DATA_TYPE, t.data_type.as_deref());
            let props = add_string(props, DEFAULT_VALUE, t.default_value.as_deref());
            add_string(props, FIXED_VALUE, t.fixed_value.as_deref())
        }
        ClassificationProperties::Memento(m) => {
            let props = add_date(props, ARCHIVE_DATE, m.archive_date);
            let props = add_string(props, ARCHIVE_USER, m.archive_user.as_deref());
            let props = add_string(props, ARCHIVE_PROCESS, m.archive_process.as_deref());
            let props = add_string(props, ARCHIVE_SERVICE, m.archive_service.as_deref());
            let props = add_string(props, ARCHIVE_METHOD, m.archive_method.as_deref());
            add_string_map(props, ARCHIVE_PROPERTIES, m.archive_properties.as_ref())
        }
        ClassificationProperties::Template(t) => {
            let props = add_string(props, NAME, t.name.as_deref());
            let props = add_string(props, VERSION_IDENTIFIER, t.version_identifier.as_deref());
            let props = add_string(props, DESCRIPTION, t.description.as_deref());
            add_string_map(props, ADDITIONAL_PROPERTIES, t.additional_properties.as_ref())
        }
        ClassificationProperties::DataScope(d) => {
            let props = add_double(props, MIN_LONGITUDE, d.min_longitude);
            let props = add_double(props, MIN_LATITUDE, d.min_latitude);
            let props = add_double(props, MAX_LONGITUDE, d.max_longitude);
            let props = add_double(props, MAX_LATITUDE, d.max_latitude);
            let props = add_double(props, MIN_HEIGHT, d.min_height);
            let props = add_double(props, MAX_HEIGHT, d.max_height);
            let props = add_date(props, DATA_COLLECTION_START_TIME, d.data_collection_start_time);
            add_date(props, DATA_COLLECTION_END_TIME, d.data_collection_end_time)
        }
        ClassificationProperties::FixedLocation(f) => {
            let props = add_string(props, COORDINATES, f.coordinates.as_deref());
            let props = add_string(props, MAP_PROJECTION, f.map_projection.as_deref());
            let props = add_string(props, POSTAL_ADDRESS, f.postal_address.as_deref());
            add_string(props, TIME_ZONE, f.time_zone.as_deref())
        }
        ClassificationProperties::DigitalResourceOrigin(d) => {
            let props = add_string(props, ORGANIZATION, d.organization.as_deref());
            let props = add_string(props, ORGANIZATION_PROPERTY_NAME, d.organization_property_name.as_deref());
            let props = add_string(props, BUSINESS_CAPABILITY, d.business_capability.as_deref());
            let props = add_string(
                props,
                BUSINESS_CAPABILITY_PROPERTY_NAME,
                d.business_capability_property_name.as_deref(),
            );
            add_string_map(props, OTHER_ORIGIN_VALUES, d.other_origin_values.as_ref())
        }
        ClassificationProperties::ZoneMembership(z) => {
            add_string_array(props, ZONE_MEMBERSHIP, z.zone_membership.as_deref())
        }
        ClassificationProperties::LatestChange(l) => {
            let props = add_enum_value(props, CHANGE_TARGET, l.change_target);
            let props = add_enum_value(props, CHANGE_ACTION, l.change_action);
            let props = add_string(props, CLASSIFICATION_NAME, l.classification_name.as_deref());
            let props = add_string(props, ATTACHMENT_GUID, l.attachment_guid.as_deref());
            let props = add_string(props, ATTACHMENT_TYPE_NAME, l.attachment_type_name.as_deref());
            let props = add_string(props, RELATIONSHIP_TYPE_NAME, l.relationship_type_name.as_deref());
            let props = add_string(props, USER, l.user.as_deref());
            add_string(props, DESCRIPTION, l.description.as_deref())
        }
        ClassificationProperties::SpineObject => props,
        ClassificationProperties::ProcessingState(p) => {
            add_long_map(props, SYNC_STATES, p.sync_states.as_ref())
        }
        ClassificationProperties::GovernanceExpectations(g) => {
            let props = add_int_map(props, COUNTS, g.counts.as_ref());
            let props = add_string_map(props, VALUES, g.values.as_ref());
            add_boolean_map(props, FLAGS, g.flags.as_ref())
        }
        ClassificationProperties::GovernanceMeasurements(g) => {
            let props = add_int_map(props, MEASUREMENT_COUNTS, g.measurement_counts.as_ref());
            let props = add_string_map(props, MEASUREMENT_VALUES, g.measurement_values.as_ref());
            add_boolean_map(props, MEASUREMENT_FLAGS, g.measurement_flags.as_ref())
        }
        ClassificationProperties::DataAssetEncoding(d) => {
            let props = add_string(props, ENCODING_TYPE, d.encoding_type.as_deref());
            let props = add_string(props, ENCODING_LANGUAGE, d.encoding_language.as_deref());
            let props = add_string(props, ENCODING_DESCRIPTION, d.encoding_description.as_deref());
            add_string_map(props, ENCODING_PROPERTIES, d.encoding_properties.as_ref())
        }
    }
}

fn governance_base(props: Option<PropertyMap>, g: &GovernanceClassificationBase) -> Option<PropertyMap> {
    let props = add_int(props, STATUS_IDENTIFIER, g.status_identifier);
    let props = add_int(props, CONFIDENCE, g.confidence);
    let props = add_string(props, STEWARD, g.steward.as_deref());
    let props = add_string(props, STEWARD_TYPE_NAME, g.steward_type_name.as_deref());
    let props = add_string(props, STEWARD_PROPERTY_NAME, g.steward_property_name.as_deref());
    let props = add_string(props, SOURCE, g.source.as_deref());
    let props = add_string(props, NOTES, g.notes.as_deref());
    add_int(props, LEVEL_IDENTIFIER, g.level_identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beans::*;
    use crate::model::TypedValue;
    use std::collections::BTreeMap;

    fn keys(props: &Option<PropertyMap>) -> Vec<&str> {
        props.iter().flat_map(|p| p.keys().map(String::as_str)).collect()
    }

    #[test]
    fn test_governance_fields() {
        let props = contribute(None, &ClassificationProperties::Governance(GovernanceClassificationProperties {
            kind: GovernanceClassificationKind::Confidentiality,
            base: GovernanceClassificationBase {
                status_identifier: Some(5),
                steward: Some("Jane".into()),
                ..Default::default()
            },
        }))
        .unwrap();
        assert_eq!(props.len(), 2);
        assert_eq!(props[STATUS_IDENTIFIER], TypedValue::Int(5));
        assert_eq!(props[STEWARD], TypedValue::from("Jane"));
    }

    #[test]
    fn test_retention_includes_governance_base() {
        let props = contribute(None, &ClassificationProperties::Retention(RetentionClassificationProperties {
            base: GovernanceClassificationBase { level_identifier: Some(2), ..Default::default() },
            associated_guid: Some("guid-1".into()),
            ..Default::default()
        }));
        assert_eq!(keys(&props), vec![ASSOCIATED_GUID, LEVEL_IDENTIFIER]);
    }

    #[test]
    fn test_security_tags_collections() {
        let mut groups = BTreeMap::new();
        groups.insert("read".to_string(), vec!["analysts".to_string()]);
        let props = contribute(None, &ClassificationProperties::SecurityTags(SecurityTagsProperties {
            security_labels: Some(vec![]),
            security_properties: None,
            access_groups: Some(groups.clone()),
        }))
        .unwrap();
        assert_eq!(props.len(), 1);
        assert_eq!(props[ACCESS_GROUPS], TypedValue::StringArrayMap(groups));
    }

    #[test]
    fn test_digital_resource_origin_reads_own_fields() {
        let props = contribute(None, &ClassificationProperties::DigitalResourceOrigin(DigitalResourceOriginProperties {
            organization: Some("org-guid".into()),
            organization_property_name: Some("guid".into()),
            ..Default::default()
        }))
        .unwrap();
        assert_eq!(props[ORGANIZATION], TypedValue::from("org-guid"));
        assert_eq!(props[ORGANIZATION_PROPERTY_NAME], TypedValue::from("guid"));
    }

    #[test]
    fn test_latest_change_enums() {
        let props = contribute(None, &ClassificationProperties::LatestChange(LatestChangeProperties {
            change_target: Some(crate::model::LatestChangeTarget::EntityProperty),
            change_action: Some(crate::model::LatestChangeAction::Updated),
            ..Default::default()
        }))
        .unwrap();
        assert_eq!(props[CHANGE_TARGET], TypedValue::Enum {
            type_name: "LatestChangeTarget".into(),
            symbolic_name: "EntityProperty".into(),
        });
        assert_eq!(props[CHANGE_ACTION].as_enum_symbol(), Some("Updated"));
    }

    #[test]
    fn test_spine_object_contributes_nothing() {
        assert_eq!(contribute(None, &ClassificationProperties::SpineObject), None);
    }
}
