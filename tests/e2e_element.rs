//! End-to-end tests for element projection.
//!
//! Each test builds an element bean, projects it through the public API and
//! checks the exact key set of the resulting property map.

use std::collections::BTreeSet;

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{Value, json};

use openmeta_projection::model::names::*;
use openmeta_projection::{
    ActorProfileKind, ActorProfileProperties, AssetKind, AssetProperties,
    DeployedSoftwareComponentKind, DeployedSoftwareComponentProperties, ElementBean,
    ElementProperties, ExtendedPropertyPolicy, GovernanceDefinitionKind,
    GovernanceDefinitionProperties, IntegrationConnectorProperties, PersonProperties,
    ProcessKind, ProcessProperties, ProjectionConfig, Projector, PropertyMap,
    ReferenceableKind, ReferenceableProperties, TypedValue, element_properties, project_element,
};

fn keys(props: &PropertyMap) -> Vec<&str> {
    props.keys().map(String::as_str).collect()
}

fn person(qualified_name: &str, display_name: &str, courtesy_title: &str) -> ElementBean {
    ElementBean::new(
        ReferenceableProperties::new(qualified_name)
            .with_display_name(display_name)
            .with_kind(ReferenceableKind::ActorProfile(ActorProfileProperties {
                kind: ActorProfileKind::Person(PersonProperties {
                    courtesy_title: Some(courtesy_title.into()),
                    ..Default::default()
                }),
                ..Default::default()
            }))
            .into(),
    )
}

fn integration_connector() -> ElementBean {
    let connector = DeployedSoftwareComponentProperties {
        implementation_language: Some("Rust".into()),
        kind: DeployedSoftwareComponentKind::IntegrationConnector(IntegrationConnectorProperties {
            uses_blocking_calls: Some(false),
            refresh_time_interval: Some(60),
        }),
    };
    let process = ProcessProperties {
        formula: Some("sync()".into()),
        kind: ProcessKind::DeployedSoftwareComponent(connector),
        ..Default::default()
    };
    ElementBean::new(
        ReferenceableProperties::new("connector:files")
            .with_kind(ReferenceableKind::Asset(AssetProperties {
                resource_name: Some("files".into()),
                kind: AssetKind::Process(process),
                ..Default::default()
            }))
            .into(),
    )
}

// ============================================================================
// 1. Cumulative descent
// ============================================================================

#[test]
fn person_carries_referenceable_and_person_fields() {
    let props = element_properties(Some(&person("emp:42", "Ada", "Dr"))).unwrap();

    assert_eq!(keys(&props), vec![COURTESY_TITLE, DISPLAY_NAME, QUALIFIED_NAME]);
    assert_eq!(props[QUALIFIED_NAME], TypedValue::from("emp:42"));
    assert_eq!(props[DISPLAY_NAME], TypedValue::from("Ada"));
    assert_eq!(props[COURTESY_TITLE], TypedValue::from("Dr"));
    assert!(!props.contains_key(TEAM_TYPE));
}

#[test]
fn five_level_descent_collects_every_level() {
    let bean = integration_connector();
    assert_eq!(
        bean.properties.type_lineage().as_slice(),
        &["Referenceable", "Asset", "Process", "DeployedSoftwareComponent", "IntegrationConnector"]
    );
    assert_eq!(bean.properties.type_name(), "IntegrationConnector");

    let props = element_properties(Some(&bean)).unwrap();
    assert_eq!(
        keys(&props),
        vec![
            FORMULA,
            IMPLEMENTATION_LANGUAGE,
            QUALIFIED_NAME,
            REFRESH_TIME_INTERVAL,
            RESOURCE_NAME,
            USES_BLOCKING_CALLS,
        ]
    );
    assert_eq!(props[REFRESH_TIME_INTERVAL], TypedValue::Long(60));
    assert_eq!(props[USES_BLOCKING_CALLS], TypedValue::Boolean(false));
}

#[test]
fn governance_definition_keeps_collections_apart() {
    let bean = ElementBean::new(
        ReferenceableProperties::new("policy:1")
            .with_kind(ReferenceableKind::GovernanceDefinition(GovernanceDefinitionProperties {
                implications: Some(vec!["a".into()]),
                outcomes: Some(vec!["b".into()]),
                results: Some(vec![]),
                kind: GovernanceDefinitionKind::GovernancePolicy,
                ..Default::default()
            }))
            .into(),
    );
    let props = element_properties(Some(&bean)).unwrap();
    assert_eq!(props[IMPLICATIONS], TypedValue::StringArray(vec!["a".into()]));
    assert_eq!(props[OUTCOMES], TypedValue::StringArray(vec!["b".into()]));
    assert!(!props.contains_key(RESULTS));
}

#[test]
fn raw_properties_pass_through() {
    let mut raw = PropertyMap::new();
    raw.insert("anything".into(), TypedValue::Int(7));
    let bean = ElementBean::new(ElementProperties::Raw {
        type_name: "CustomType".into(),
        properties: raw.clone(),
    });
    assert_eq!(bean.properties.type_name(), "CustomType");
    assert_eq!(element_properties(Some(&bean)), Some(raw));
}

// ============================================================================
// 2. Absent beans, empty beans, extended properties
// ============================================================================

#[test]
fn absent_bean_yields_nothing() {
    assert_eq!(element_properties(None), None);
    assert_eq!(project_element(None), None);
}

#[test]
fn extended_properties_merge_last() {
    let bean = ElementBean::new(ReferenceableProperties::default().with_display_name("X").into())
        .with_extended_property("custom1", "v");
    let props = element_properties(Some(&bean)).unwrap();

    let mut expected = PropertyMap::new();
    expected.insert(DISPLAY_NAME.into(), TypedValue::from("X"));
    expected.insert("custom1".into(), TypedValue::from("v"));
    assert_eq!(props, expected);
}

#[test]
fn extended_property_collision_follows_policy() {
    let bean = person("emp:42", "Ada", "Dr").with_extended_property(DISPLAY_NAME, "Countess");

    let overwritten = element_properties(Some(&bean)).unwrap();
    assert_eq!(overwritten[DISPLAY_NAME], TypedValue::from("Countess"));

    let preserving = Projector::new(ProjectionConfig {
        extended_property_policy: ExtendedPropertyPolicy::PreserveTyped,
    });
    let kept = preserving.element_properties(Some(&bean)).unwrap();
    assert_eq!(kept[DISPLAY_NAME], TypedValue::from("Ada"));
    assert_eq!(kept.len(), overwritten.len());
}

#[test]
fn empty_strings_are_emitted() {
    let bean = ElementBean::new(ReferenceableProperties::new("").into());
    let props = element_properties(Some(&bean)).unwrap();
    assert_eq!(props[QUALIFIED_NAME], TypedValue::from(""));
}

// ============================================================================
// 3. Effectivity
// ============================================================================

#[test]
fn project_element_carries_effectivity() {
    let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let bean = person("emp:1", "Grace", "Rear Admiral").with_effectivity(Some(from), Some(to));

    let result = project_element(Some(&bean)).unwrap();
    assert_eq!(result.effective_from, Some(from));
    assert_eq!(result.effective_to, Some(to));
    assert_eq!(result.get_as::<String>(DISPLAY_NAME).unwrap(), "Grace");
    assert!(result.is_effective_at(from));
    assert!(!result.is_effective_at(to));
}

#[test]
fn bean_survives_json_round_trip() {
    let bean = integration_connector().with_extended_property("owner", "ops");
    let json = serde_json::to_string(&bean).unwrap();
    let back: ElementBean = serde_json::from_str(&json).unwrap();
    assert_eq!(back, bean);
    assert_eq!(element_properties(Some(&back)), element_properties(Some(&bean)));
}

// ============================================================================
// 4. Properties
// ============================================================================

proptest! {
    #[test]
    fn projection_is_idempotent(
        qualified_name in "[a-z:]{0,12}",
        display_name in proptest::option::of("[A-Za-z ]{0,12}"),
        extended in proptest::collection::btree_map("[a-z]{1,6}", "[a-z]{0,6}", 0..4),
    ) {
        let mut properties = ReferenceableProperties::new(qualified_name);
        properties.display_name = display_name;
        let mut bean = ElementBean::new(properties.into());
        bean.extended_properties = Some(extended);

        let first = element_properties(Some(&bean));
        let second = element_properties(Some(&bean));
        prop_assert_eq!(first, second);
    }
}

// ============================================================================
// 5. Key sets: every element type with every field set
// ============================================================================

const DATE: &str = "2024-01-01T00:00:00Z";

fn referenceable() -> Value {
    json!({
        "class": "Referenceable", "qualifiedName": "q", "displayName": "d", "description": "desc",
        "versionIdentifier": "1", "category": "c", "additionalProperties": {"k": "v"}
    })
}

fn asset() -> Value {
    json!({
        "class": "Asset", "resourceName": "r", "namespace": "ns", "deployedImplementationType": "t",
        "source": "src"
    })
}

fn process() -> Value {
    json!({"class": "Process", "formula": "f", "formulaType": "t"})
}

fn deployed_software_component() -> Value {
    json!({"class": "DeployedSoftwareComponent", "implementationLanguage": "Rust"})
}

fn integration_connector_level() -> Value {
    json!({"class": "IntegrationConnector", "usesBlockingCalls": true, "refreshTimeInterval": 60})
}

fn data_store() -> Value {
    json!({"class": "DataStore", "pathName": "/data", "storeCreateTime": DATE, "storeUpdateTime": DATE})
}

fn actor_profile() -> Value {
    json!({"class": "ActorProfile", "knownName": "k"})
}

fn collection() -> Value {
    json!({"class": "Collection", "collectionType": "t"})
}

fn governance_definition() -> Value {
    json!({
        "class": "GovernanceDefinition", "documentIdentifier": "d", "title": "t", "summary": "s",
        "scope": "sc", "domainIdentifier": 1, "importance": "high", "implications": ["i"],
        "outcomes": ["o"], "results": ["r"]
    })
}

fn schema_element() -> Value {
    json!({"class": "SchemaElement", "isDeprecated": false})
}

fn annotation() -> Value {
    json!({
        "class": "Annotation", "annotationType": "t", "summary": "s", "confidenceLevel": 80,
        "expression": "e", "explanation": "x", "analysisStep": "a", "jsonProperties": "{}"
    })
}

/// One element per leaf type, as the chain of levels from Referenceable down.
fn all_fields_chains() -> Vec<Vec<Value>> {
    vec![
        vec![referenceable()],
        vec![referenceable(), asset()],
        vec![referenceable(), asset(), process()],
        vec![referenceable(), asset(), process(), deployed_software_component()],
        vec![referenceable(), asset(), process(), deployed_software_component(), integration_connector_level()],
        vec![referenceable(), asset(), data_store()],
        vec![
            referenceable(),
            asset(),
            data_store(),
            json!({"class": "DataFile", "fileName": "a.csv", "fileType": "csv", "fileExtension": "csv"}),
        ],
        vec![
            referenceable(),
            asset(),
            data_store(),
            json!({
                "class": "Database", "databaseType": "pg", "databaseVersion": "16",
                "databaseInstance": "main", "databaseImportedFrom": "dump"
            }),
        ],
        vec![referenceable(), asset(), json!({"class": "DataSet", "formula": "f", "formulaType": "t"})],
        vec![referenceable(), asset(), json!({"class": "ITInfrastructure"})],
        vec![
            referenceable(),
            asset(),
            json!({"class": "ITInfrastructure"}),
            json!({"class": "Host", "operatingSystem": "linux", "operatingSystemPatchLevel": "6.1"}),
        ],
        vec![
            referenceable(),
            asset(),
            json!({"class": "ITInfrastructure"}),
            json!({"class": "SoftwareServer", "softwareServerUserId": "svc"}),
        ],
        vec![referenceable(), actor_profile()],
        vec![
            referenceable(),
            actor_profile(),
            json!({
                "class": "Person", "courtesyTitle": "Dr", "initials": "A", "givenNames": "Ada",
                "surname": "L", "fullName": "Ada L", "preferredLanguage": "en", "jobTitle": "eng",
                "employeeNumber": "1", "employeeType": "ft", "pronouns": "they/them", "isPublic": true
            }),
        ],
        vec![referenceable(), actor_profile(), json!({"class": "Team", "teamType": "squad", "identifier": "t1"})],
        vec![
            referenceable(),
            json!({
                "class": "PersonRole", "identifier": "r", "scope": "s", "domainIdentifier": 2,
                "headCount": 3, "headCountLimitSet": true
            }),
        ],
        vec![referenceable(), collection()],
        vec![
            referenceable(),
            collection(),
            json!({
                "class": "DigitalProduct", "productName": "p", "productType": "t", "introductionDate": DATE,
                "maturity": "m", "serviceLife": "s", "currentVersion": "1", "nextVersion": "2",
                "withdrawDate": DATE
            }),
        ],
        vec![
            referenceable(),
            json!({
                "class": "Project", "identifier": "p", "startDate": DATE, "plannedEndDate": DATE,
                "projectStatus": "active", "projectPhase": "build", "projectHealth": "green", "priority": 1
            }),
        ],
        vec![referenceable(), json!({"class": "Community", "mission": "m"})],
        vec![referenceable(), json!({"class": "Location", "identifier": "l"})],
        vec![referenceable(), json!({"class": "Glossary", "language": "en", "usage": "u"})],
        vec![
            referenceable(),
            json!({"class": "GlossaryTerm", "summary": "s", "examples": "e", "abbreviation": "a", "usage": "u"}),
        ],
        vec![referenceable(), governance_definition()],
        vec![referenceable(), governance_definition(), json!({"class": "GovernancePolicy"})],
        vec![
            referenceable(),
            governance_definition(),
            json!({"class": "GovernanceControl", "implementationDescription": "i"}),
        ],
        vec![
            referenceable(),
            governance_definition(),
            json!({"class": "GovernanceMetric", "measurement": "m", "target": "t"}),
        ],
        vec![referenceable(), schema_element()],
        vec![
            referenceable(),
            schema_element(),
            json!({"class": "SchemaType", "author": "a", "usage": "u", "encodingStandard": "e", "namespace": "n"}),
        ],
        vec![
            referenceable(),
            schema_element(),
            json!({
                "class": "SchemaAttribute", "elementPosition": 1, "minCardinality": 0, "maxCardinality": 1,
                "allowsDuplicateValues": false, "orderedValues": true, "defaultValueOverride": "x",
                "sortOrder": "Ascending", "minimumLength": 1, "length": 10, "precision": 2,
                "isNullable": true, "nativeClass": "String", "aliases": ["alt"]
            }),
        ],
        vec![
            referenceable(),
            json!({
                "class": "ValidValueDefinition", "usage": "u", "scope": "s", "preferredValue": "p",
                "dataType": "string", "isDeprecated": false, "isCaseSensitive": true
            }),
        ],
        vec![
            referenceable(),
            json!({
                "class": "ExternalReference", "referenceTitle": "t", "referenceAbstract": "a",
                "authors": ["x"], "url": "https://example.org", "sources": {"k": "v"}, "license": "l",
                "copyright": "c", "attribution": "at"
            }),
        ],
        vec![referenceable(), json!({"class": "Comment", "commentType": "Question"})],
        vec![
            referenceable(),
            json!({"class": "Endpoint", "networkAddress": "host:1", "protocol": "https", "encryptionMethod": "tls"}),
        ],
        vec![
            referenceable(),
            json!({
                "class": "Connection", "userId": "u", "clearPassword": "p", "encryptedPassword": "e",
                "securedProperties": {"k": "v"}, "configurationProperties": {"k": "v"}
            }),
        ],
        vec![
            referenceable(),
            json!({
                "class": "SoftwareCapability", "deployedImplementationType": "t", "capabilityVersion": "1",
                "patchLevel": "p", "source": "s"
            }),
        ],
        vec![referenceable(), annotation()],
        vec![
            referenceable(),
            annotation(),
            json!({
                "class": "ResourceProfile", "profileProperties": {"k": "v"}, "profileFlags": {"k": true},
                "profileCounts": {"k": 1}, "profileDoubles": {"k": 0.5}, "profileDates": {"k": DATE},
                "profileStartDate": DATE, "profileEndDate": DATE, "valueList": ["a"], "valueCount": {"a": 1},
                "valueRangeFrom": "a", "valueRangeTo": "z", "averageValue": "m", "length": 4
            }),
        ],
        vec![
            referenceable(),
            annotation(),
            json!({
                "class": "DataClass", "candidateDataClassGUIDs": ["g"], "matchingValues": 9,
                "nonMatchingValues": 1
            }),
        ],
    ]
}

/// Nest each level under the `kind` field of the level above it.
fn nest(chain: &[Value]) -> Value {
    let mut levels = chain.iter().rev().cloned();
    let mut inner = levels.next().unwrap();
    for mut outer in levels {
        outer["kind"] = inner;
        inner = outer;
    }
    inner
}

/// Wire names declared by the levels, less the `class` and `kind` selectors.
fn wire_names(chain: &[Value]) -> Vec<String> {
    let names: BTreeSet<String> = chain
        .iter()
        .flat_map(|level| level.as_object().unwrap().keys())
        .filter(|k| *k != "class" && *k != "kind")
        .cloned()
        .collect();
    names.into_iter().collect()
}

#[test]
fn every_element_type_yields_its_catalogue_keys() {
    let chains = all_fields_chains();
    assert_eq!(chains.len(), 39);

    for chain in chains {
        let bean: ElementBean = serde_json::from_value(json!({ "properties": nest(&chain) })).unwrap();
        let leaf = chain.last().unwrap()["class"].clone();
        let actual: Vec<String> = element_properties(Some(&bean)).unwrap().into_keys().collect();
        assert_eq!(actual, wire_names(&chain), "leaf {leaf}");
    }
}

#[test]
fn raw_element_passes_its_map_through() {
    let bean: ElementBean = serde_json::from_value(json!({
        "properties": {
            "class": "Raw",
            "typeName": "Meeting",
            "properties": {
                "agenda": {"type": "String", "value": "plan"},
                "attendees": {"type": "Int", "value": 4}
            }
        }
    }))
    .unwrap();
    assert_eq!(bean.properties.type_name(), "Meeting");
    let props = element_properties(Some(&bean)).unwrap();
    assert_eq!(keys(&props), vec!["agenda", "attendees"]);
    assert_eq!(props["attendees"], TypedValue::Int(4));
}
