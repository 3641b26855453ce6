//! Element field contributor.
//!
//! Walks the entity hierarchy top-down. Each level writes its own fields,
//! then hands the map to the next matched level, so a leaf bean carries
//! the fields of every ancestor as well as its own.

use crate::beans::*;
use crate::model::PropertyMap;
use crate::model::names::*;

use super::helper::*;

/// Encode the typed fields of an element into `props`.
pub(crate) fn contribute(props: Option<PropertyMap>, element: &ElementProperties) -> Option<PropertyMap> {
    match element {
        ElementProperties::Raw { properties, .. } => {
            let mut props = props.unwrap_or_default();
            props.extend(properties.iter().map(|(k, v)| (k.clone(), v.clone())));
            Some(props)
        }
        ElementProperties::Referenceable(r) => referenceable(props, r),
    }
}

fn referenceable(props: Option<PropertyMap>, r: &ReferenceableProperties) -> Option<PropertyMap> {
    let props = add_string(props, QUALIFIED_NAME, r.qualified_name.as_deref());
    let props = add_string(props, DISPLAY_NAME, r.display_name.as_deref());
    let props = add_string(props, DESCRIPTION, r.description.as_deref());
    let props = add_string(props, VERSION_IDENTIFIER, r.version_identifier.as_deref());
    let props = add_string(props, CATEGORY, r.category.as_deref());
    let props = add_string_map(props, ADDITIONAL_PROPERTIES, r.additional_properties.as_ref());

    match &r.kind {
        ReferenceableKind::Plain => props,
        ReferenceableKind::Asset(a) => asset(props, a),
        ReferenceableKind::ActorProfile(a) => actor_profile(props, a),
        ReferenceableKind::PersonRole(p) => {
            let props = add_string(props, IDENTIFIER, p.identifier.as_deref());
            let props = add_string(props, SCOPE, p.scope.as_deref());
            let props = add_int(props, DOMAIN_IDENTIFIER, p.domain_identifier);
            let props = add_int(props, HEAD_COUNT, p.head_count);
            add_boolean(props, HEAD_COUNT_LIMIT_SET, p.head_count_limit_set)
        }
        ReferenceableKind::Collection(c) => collection(props, c),
        ReferenceableKind::Project(p) => {
            let props = add_string(props, IDENTIFIER, p.identifier.as_deref());
            let props = add_date(props, START_DATE, p.start_date);
            let props = add_date(props, PLANNED_END_DATE, p.planned_end_date);
            let props = add_string(props, PROJECT_STATUS, p.project_status.as_deref());
            let props = add_string(props, PROJECT_PHASE, p.project_phase.as_deref());
            let props = add_string(props, PROJECT_HEALTH, p.project_health.as_deref());
            add_int(props, PRIORITY, p.priority)
        }
        ReferenceableKind::Community(c) => add_string(props, MISSION, c.mission.as_deref()),
        ReferenceableKind::Location(l) => add_string(props, IDENTIFIER, l.identifier.as_deref()),
        ReferenceableKind::Glossary(g) => {
            let props = add_string(props, LANGUAGE, g.language.as_deref());
            add_string(props, USAGE, g.usage.as_deref())
        }
        ReferenceableKind::GlossaryTerm(t) => {
            let props = add_string(props, SUMMARY, t.summary.as_deref());
            let props = add_string(props, EXAMPLES, t.examples.as_deref());
            let props = add_string(props, ABBREVIATION, t.abbreviation.as_deref());
            add_string(props, USAGE, t.usage.as_deref())
        }
        ReferenceableKind::GovernanceDefinition(g) => governance_definition(props, g),
        ReferenceableKind::SchemaElement(s) => schema_element(props, s),
        ReferenceableKind::ValidValueDefinition(v) => {
            let props = add_string(props, USAGE, v.usage.as_deref());
            let props = add_string(props, SCOPE, v.scope.as_deref());
            let props = add_string(props, PREFERRED_VALUE, v.preferred_value.as_deref());
            let props = add_string(props, DATA_TYPE, v.data_type.as_deref());
            let props = add_boolean(props, IS_DEPRECATED, v.is_deprecated);
            add_boolean(props, IS_CASE_SENSITIVE, v.is_case_sensitive)
        }
        ReferenceableKind::ExternalReference(e) => {
            let props = add_string(props, REFERENCE_TITLE, e.reference_title.as_deref());
            let props = add_string(props, REFERENCE_ABSTRACT, e.reference_abstract.as_deref());
            let props = add_string_array(props, AUTHORS, e.authors.as_deref());
            let props = add_string(props, URL, e.url.as_deref());
            let props = add_string_map(props, SOURCES, e.sources.as_ref());
            let props = add_string(props, LICENSE, e.license.as_deref());
            let props = add_string(props, COPYRIGHT, e.copyright.as_deref());
            add_string(props, ATTRIBUTION, e.attribution.as_deref())
        }
        ReferenceableKind::Comment(c) => add_enum_value(props, COMMENT_TYPE, c.comment_type),
        ReferenceableKind::Endpoint(e) => {
            let props = add_string(props, NETWORK_ADDRESS, e.network_address.as_deref());
            let props = add_string(props, PROTOCOL, e.protocol.as_deref());
            add_string(props, ENCRYPTION_METHOD, e.encryption_method.as_deref())
        }
        ReferenceableKind::Connection(c) => {
            let props = add_string(props, USER_ID, c.user_id.as_deref());
            let props = add_string(props, CLEAR_PASSWORD, c.clear_password.as_deref());
            let props = add_string(props, ENCRYPTED_PASSWORD, c.encrypted_password.as_deref());
            let props = add_string_map(props, SECURED_PROPERTIES, c.secured_properties.as_ref());
            add_string_map(props, CONFIGURATION_PROPERTIES, c.configuration_properties.as_ref())
        }
        ReferenceableKind::SoftwareCapability(s) => {
            let props = add_string(props, DEPLOYED_IMPLEMENTATION_TYPE, s.deployed_implementation_type.as_deref());
            let props = add_string(props, CAPABILITY_VERSION, s.capability_version.as_deref());
            let props = add_string(props, PATCH_LEVEL, s.patch_level.as_deref());
            add_string(props, SOURCE, s.source.as_deref())
        }
        ReferenceableKind::Annotation(a) => annotation(props, a),
    }
}

// ============================================================================
// Assets
// ============================================================================

fn asset(props: Option<PropertyMap>, a: &AssetProperties) -> Option<PropertyMap> {
    let props = add_string(props, RESOURCE_NAME, a.resource_name.as_deref());
    let props = add_string(props, NAMESPACE, a.namespace.as_deref());
    let props = add_string(props, DEPLOYED_IMPLEMENTATION_TYPE, a.deployed_implementation_type.as_deref());
    let props = add_string(props, SOURCE, a.source.as_deref());

    match &a.kind {
        AssetKind::Plain => props,
        AssetKind::Process(p) => process(props, p),
        AssetKind::DataStore(d) => data_store(props, d),
        AssetKind::DataSet(d) => {
            let props = add_string(props, FORMULA, d.formula.as_deref());
            add_string(props, FORMULA_TYPE, d.formula_type.as_deref())
        }
        AssetKind::ITInfrastructure(i) => match &i.kind {
            InfrastructureKind::Plain => props,
            InfrastructureKind::Host(h) => {
                let props = add_string(props, OPERATING_SYSTEM, h.operating_system.as_deref());
                add_string(props, OPERATING_SYSTEM_PATCH_LEVEL, h.operating_system_patch_level.as_deref())
            }
            InfrastructureKind::SoftwareServer(s) => {
                add_string(props, SOFTWARE_SERVER_USER_ID, s.software_server_user_id.as_deref())
            }
        },
    }
}

fn process(props: Option<PropertyMap>, p: &ProcessProperties) -> Option<PropertyMap> {
    let props = add_string(props, FORMULA, p.formula.as_deref());
    let props = add_string(props, FORMULA_TYPE, p.formula_type.as_deref());

    match &p.kind {
        ProcessKind::Plain => props,
        ProcessKind::DeployedSoftwareComponent(d) => deployed_software_component(props, d),
    }
}

fn deployed_software_component(
    props: Option<PropertyMap>,
    d: &DeployedSoftwareComponentProperties,
) -> Option<PropertyMap> {
    let props = add_string(props, IMPLEMENTATION_LANGUAGE, d.implementation_language.as_deref());

    match &d.kind {
        DeployedSoftwareComponentKind::Plain => props,
        DeployedSoftwareComponentKind::IntegrationConnector(c) => {
            let props = add_boolean(props, USES_BLOCKING_CALLS, c.uses_blocking_calls);
            add_long(props, REFRESH_TIME_INTERVAL, c.refresh_time_interval)
        }
    }
}

fn data_store(props: Option<PropertyMap>, d: &DataStoreProperties) -> Option<PropertyMap> {
    let props = add_string(props, PATH_NAME, d.path_name.as_deref());
    let props = add_date(props, STORE_CREATE_TIME, d.store_create_time);
    let props = add_date(props, STORE_UPDATE_TIME, d.store_update_time);

    match &d.kind {
        DataStoreKind::Plain => props,
        DataStoreKind::DataFile(f) => {
            let props = add_string(props, FILE_NAME, f.file_name.as_deref());
            let props = add_string(props, FILE_TYPE, f.file_type.as_deref());
            add_string(props, FILE_EXTENSION, f.file_extension.as_deref())
        }
        DataStoreKind::Database(db) => {
            let props = add_string(props, DATABASE_TYPE, db.database_type.as_deref());
            let props = add_string(props, DATABASE_VERSION, db.database_version.as_deref());
            let props = add_string(props, DATABASE_INSTANCE, db.database_instance.as_deref());
            add_string(props, DATABASE_IMPORTED_FROM, db.database_imported_from.as_deref())
        }
    }
}

// ============================================================================
// Actors and collections
// ============================================================================

fn actor_profile(props: Option<PropertyMap>, a: &ActorProfileProperties) -> Option<PropertyMap> {
    let props = add_string(props, KNOWN_NAME, a.known_name.as_deref());

    match &a.kind {
        ActorProfileKind::Plain => props,
        ActorProfileKind::Person(p) => {
            let props = add_string(props, COURTESY_TITLE, p.courtesy_title.as_deref());
            let props = add_string(props, INITIALS, p.initials.as_deref());
            let props = add_string(props, GIVEN_NAMES, p.given_names.as_deref());
            let props = add_string(props, SURNAME, p.surname.as_deref());
            let props = add_string(props, FULL_NAME, p.full_name.as_deref());
            let props = add_string(props, PREFERRED_LANGUAGE, p.preferred_language.as_deref());
            let props = add_string(props, JOB_TITLE, p.job_title.as_deref());
            let props = add_string(props, EMPLOYEE_NUMBER, p.employee_number.as_deref());
            let props = add_string(props, EMPLOYEE_TYPE, p.employee_type.as_deref());
            let props = add_string(props, PRONOUNS, p.pronouns.as_deref());
            add_boolean(props, IS_PUBLIC, p.is_public)
        }
        ActorProfileKind::Team(t) => {
            let props = add_string(props, TEAM_TYPE, t.team_type.as_deref());
            add_string(props, IDENTIFIER, t.identifier.as_deref())
        }
    }
}

fn collection(props: Option<PropertyMap>, c: &CollectionProperties) -> Option<PropertyMap> {
    let props = add_string(props, COLLECTION_TYPE, c.collection_type.as_deref());

    match &c.kind {
        CollectionKind::Plain => props,
        CollectionKind::DigitalProduct(d) => {
            let props = add_string(props, PRODUCT_NAME, d.product_name.as_deref());
            let props = add_string(props, PRODUCT_TYPE, d.product_type.as_deref());
            let props = add_date(props, INTRODUCTION_DATE, d.introduction_date);
            let props = add_string(props, MATURITY, d.maturity.as_deref());
            let props = add_string(props, SERVICE_LIFE, d.service_life.as_deref());
            let props = add_string(props, CURRENT_VERSION, d.current_version.as_deref());
            let props = add_string(props, NEXT_VERSION, d.next_version.as_deref());
            add_date(props, WITHDRAW_DATE, d.withdraw_date)
        }
    }
}

// ============================================================================
// Governance, schemas, annotations
// ============================================================================

fn governance_definition(props: Option<PropertyMap>, g: &GovernanceDefinitionProperties) -> Option<PropertyMap> {
    let props = add_string(props, DOCUMENT_IDENTIFIER, g.document_identifier.as_deref());
    let props = add_string(props, TITLE, g.title.as_deref());
    let props = add_string(props, SUMMARY, g.summary.as_deref());
    let props = add_string(props, SCOPE, g.scope.as_deref());
    let props = add_int(props, DOMAIN_IDENTIFIER, g.domain_identifier);
    let props = add_string(props, IMPORTANCE, g.importance.as_deref());
    let props = add_string_array(props, IMPLICATIONS, g.implications.as_deref());
    let props = add_string_array(props, OUTCOMES, g.outcomes.as_deref());
    let props = add_string_array(props, RESULTS, g.results.as_deref());

    match &g.kind {
        GovernanceDefinitionKind::Plain | GovernanceDefinitionKind::GovernancePolicy => props,
        GovernanceDefinitionKind::GovernanceControl(c) => {
            add_string(props, IMPLEMENTATION_DESCRIPTION, c.implementation_description.as_deref())
        }
        GovernanceDefinitionKind::GovernanceMetric(m) => {
            let props = add_string(props, MEASUREMENT, m.measurement.as_deref());
            add_string(props, TARGET, m.target.as_deref())
        }
    }
}

fn schema_element(props: Option<PropertyMap>, s: &SchemaElementProperties) -> Option<PropertyMap> {
    let props = add_boolean(props, IS_DEPRECATED, s.is_deprecated);

    match &s.kind {
        SchemaElementKind::Plain => props,
        SchemaElementKind::SchemaType(t) => {
            let props = add_string(props, AUTHOR, t.author.as_deref());
            let props = add_string(props, USAGE, t.usage.as_deref());
            let props = add_string(props, ENCODING_STANDARD, t.encoding_standard.as_deref());
            add_string(props, NAMESPACE, t.namespace.as_deref())
        }
        SchemaElementKind::SchemaAttribute(a) => {
            let props = add_int(props, ELEMENT_POSITION, a.element_position);
            let props = add_int(props, MIN_CARDINALITY, a.min_cardinality);
            let props = add_int(props, MAX_CARDINALITY, a.max_cardinality);
            let props = add_boolean(props, ALLOWS_DUPLICATE_VALUES, a.allows_duplicate_values);
            let props = add_boolean(props, ORDERED_VALUES, a.ordered_values);
            let props = add_string(props, DEFAULT_VALUE_OVERRIDE, a.default_value_override.as_deref());
            let props = add_enum_value(props, SORT_ORDER, a.sort_order);
            let props = add_int(props, MINIMUM_LENGTH, a.minimum_length);
            let props = add_int(props, LENGTH, a.length);
            let props = add_int(props, PRECISION, a.precision);
            let props = add_boolean(props, IS_NULLABLE, a.is_nullable);
            let props = add_string(props, NATIVE_CLASS, a.native_class.as_deref());
            add_string_array(props, ALIASES, a.aliases.as_deref())
        }
    }
}

fn annotation(props: Option<PropertyMap>, a: &AnnotationProperties) -> Option<PropertyMap> {
    let props = add_string(props, ANNOTATION_TYPE, a.annotation_type.as_deref());
    let props = add_string(props, SUMMARY, a.summary.as_deref());
    let props = add_int(props, CONFIDENCE_LEVEL, a.confidence_level);
    let props = add_string(props, EXPRESSION, a.expression.as_deref());
    let props = add_string(props, EXPLANATION, a.explanation.as_deref());
    let props = add_string(props, ANALYSIS_STEP, a.analysis_step.as_deref());
    let props = add_string(props, JSON_PROPERTIES, a.json_properties.as_deref());

    match &a.kind {
        AnnotationKind::Plain => props,
        AnnotationKind::ResourceProfile(r) => {
            let props = add_string_map(props, PROFILE_PROPERTIES, r.profile_properties.as_ref());
            let props = add_boolean_map(props, PROFILE_FLAGS, r.profile_flags.as_ref());
            let props = add_long_map(props, PROFILE_COUNTS, r.profile_counts.as_ref());
            let props = add_double_map(props, PROFILE_DOUBLES, r.profile_doubles.as_ref());
            let props = add_date_map(props, PROFILE_DATES, r.profile_dates.as_ref());
            let props = add_date(props, PROFILE_START_DATE, r.profile_start_date);
            let props = add_date(props, PROFILE_END_DATE, r.profile_end_date);
            let props = add_string_array(props, VALUE_LIST, r.value_list.as_deref());
            let props = add_int_map(props, VALUE_COUNT, r.value_count.as_ref());
            let props = add_string(props, VALUE_RANGE_FROM, r.value_range_from.as_deref());
            let props = add_string(props, VALUE_RANGE_TO, r.value_range_to.as_deref());
            let props = add_string(props, AVERAGE_VALUE, r.average_value.as_deref());
            add_int(props, LENGTH, r.length)
        }
        AnnotationKind::DataClass(d) => {
            let props = add_string_array(props, CANDIDATE_DATA_CLASS_GUIDS, d.candidate_data_class_guids.as_deref());
            let props = add_long(props, MATCHING_VALUES, d.matching_values);
            add_long(props, NON_MATCHING_VALUES, d.non_matching_values)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypedValue;

    fn keys(props: &PropertyMap) -> Vec<&str> {
        props.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_governance_definition_arrays_kept_apart() {
        let props = contribute(None, &ReferenceableProperties::default()
            .with_kind(ReferenceableKind::GovernanceDefinition(GovernanceDefinitionProperties {
                implications: Some(vec!["i".into()]),
                outcomes: Some(vec!["o".into()]),
                results: Some(vec!["r".into()]),
                ..Default::default()
            }))
            .into())
        .unwrap();
        assert_eq!(props[IMPLICATIONS], TypedValue::StringArray(vec!["i".into()]));
        assert_eq!(props[OUTCOMES], TypedValue::StringArray(vec!["o".into()]));
        assert_eq!(props[RESULTS], TypedValue::StringArray(vec!["r".into()]));
    }

    #[test]
    fn test_data_file_descends_through_data_store() {
        let props = contribute(None, &ReferenceableProperties::new("file:1")
            .with_kind(ReferenceableKind::Asset(AssetProperties {
                resource_name: Some("orders.csv".into()),
                kind: AssetKind::DataStore(DataStoreProperties {
                    path_name: Some("/data/orders.csv".into()),
                    kind: DataStoreKind::DataFile(DataFileProperties {
                        file_type: Some("csv".into()),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }))
            .into())
        .unwrap();
        assert_eq!(keys(&props), vec![FILE_TYPE, PATH_NAME, QUALIFIED_NAME, RESOURCE_NAME]);
    }

    #[test]
    fn test_raw_passes_through() {
        let mut raw = PropertyMap::new();
        raw.insert("anything".into(), TypedValue::Long(1));
        let props = contribute(None, &ElementProperties::Raw { type_name: "Meeting".into(), properties: raw.clone() });
        assert_eq!(props, Some(raw));
    }

    #[test]
    fn test_empty_referenceable_stays_none() {
        assert_eq!(contribute(None, &ReferenceableProperties::default().into()), None);
    }
}
