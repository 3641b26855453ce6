//! Property names as they appear in a projected property map.

// Referenceable and shared
pub const QUALIFIED_NAME: &str = "qualifiedName";
pub const DISPLAY_NAME: &str = "displayName";
pub const DESCRIPTION: &str = "description";
pub const VERSION_IDENTIFIER: &str = "versionIdentifier";
pub const CATEGORY: &str = "category";
pub const ADDITIONAL_PROPERTIES: &str = "additionalProperties";
pub const NAME: &str = "name";
pub const IDENTIFIER: &str = "identifier";
pub const SCOPE: &str = "scope";
pub const USAGE: &str = "usage";
pub const SOURCE: &str = "source";
pub const NOTES: &str = "notes";
pub const NAMESPACE: &str = "namespace";
pub const EXPRESSION: &str = "expression";
pub const CONFIDENCE: &str = "confidence";
pub const STEWARD: &str = "steward";
pub const STEWARD_TYPE_NAME: &str = "stewardTypeName";
pub const STEWARD_PROPERTY_NAME: &str = "stewardPropertyName";
pub const IS_PUBLIC: &str = "isPublic";
pub const IS_DEPRECATED: &str = "isDeprecated";
pub const LENGTH: &str = "length";
pub const DATA_TYPE: &str = "dataType";
pub const USER_ID: &str = "userId";
pub const FORMULA: &str = "formula";
pub const FORMULA_TYPE: &str = "formulaType";
pub const DEPLOYED_IMPLEMENTATION_TYPE: &str = "deployedImplementationType";
pub const SUMMARY: &str = "summary";
pub const DOMAIN_IDENTIFIER: &str = "domainIdentifier";
pub const CONFIGURATION_PROPERTIES: &str = "configurationProperties";
pub const START_DATE: &str = "startDate";
pub const PERMITTED_SYNCHRONIZATION: &str = "permittedSynchronization";
pub const METADATA_SOURCE_QUALIFIED_NAME: &str = "metadataSourceQualifiedName";
pub const REFRESH_TIME_INTERVAL: &str = "refreshTimeInterval";
pub const POSITION: &str = "position";
pub const RATIONALE: &str = "rationale";

// Governance classifications
pub const STATUS_IDENTIFIER: &str = "statusIdentifier";
pub const LEVEL_IDENTIFIER: &str = "levelIdentifier";
pub const ASSOCIATED_GUID: &str = "associatedGUID";
pub const ARCHIVE_AFTER: &str = "archiveAfter";
pub const STORE_UNTIL: &str = "storeUntil";
pub const OWNER: &str = "owner";
pub const OWNER_TYPE_NAME: &str = "ownerTypeName";
pub const OWNER_PROPERTY_NAME: &str = "ownerPropertyName";
pub const SECURITY_LABELS: &str = "securityLabels";
pub const SECURITY_PROPERTIES: &str = "securityProperties";
pub const ACCESS_GROUPS: &str = "accessGroups";
pub const ZONE_MEMBERSHIP: &str = "zoneMembership";
pub const COUNTS: &str = "counts";
pub const VALUES: &str = "values";
pub const FLAGS: &str = "flags";
pub const MEASUREMENT_COUNTS: &str = "measurementCounts";
pub const MEASUREMENT_VALUES: &str = "measurementValues";
pub const MEASUREMENT_FLAGS: &str = "measurementFlags";

// Anchors, organization and lifecycle classifications
pub const ANCHOR_GUID: &str = "anchorGUID";
pub const ANCHOR_TYPE_NAME: &str = "anchorTypeName";
pub const ANCHOR_DOMAIN_NAME: &str = "anchorDomainName";
pub const ANCHOR_SCOPE_GUID: &str = "anchorScopeGUID";
pub const ORGANIZING_PRINCIPLE: &str = "organizingPrinciple";
pub const SUBJECT_AREA_NAME: &str = "subjectAreaName";
pub const SCHEMA_TYPE_NAME: &str = "schemaTypeName";
pub const DEFAULT_VALUE: &str = "defaultValue";
pub const FIXED_VALUE: &str = "fixedValue";
pub const ARCHIVE_DATE: &str = "archiveDate";
pub const ARCHIVE_USER: &str = "archiveUser";
pub const ARCHIVE_PROCESS: &str = "archiveProcess";
pub const ARCHIVE_SERVICE: &str = "archiveService";
pub const ARCHIVE_METHOD: &str = "archiveMethod";
pub const ARCHIVE_PROPERTIES: &str = "archiveProperties";
pub const MIN_LONGITUDE: &str = "minLongitude";
pub const MIN_LATITUDE: &str = "minLatitude";
pub const MAX_LONGITUDE: &str = "maxLongitude";
pub const MAX_LATITUDE: &str = "maxLatitude";
pub const MIN_HEIGHT: &str = "minHeight";
pub const MAX_HEIGHT: &str = "maxHeight";
pub const DATA_COLLECTION_START_TIME: &str = "dataCollectionStartTime";
pub const DATA_COLLECTION_END_TIME: &str = "dataCollectionEndTime";
pub const COORDINATES: &str = "coordinates";
pub const MAP_PROJECTION: &str = "mapProjection";
pub const POSTAL_ADDRESS: &str = "postalAddress";
pub const TIME_ZONE: &str = "timeZone";
pub const ORGANIZATION: &str = "organization";
pub const ORGANIZATION_PROPERTY_NAME: &str = "organizationPropertyName";
pub const BUSINESS_CAPABILITY: &str = "businessCapability";
pub const BUSINESS_CAPABILITY_PROPERTY_NAME: &str = "businessCapabilityPropertyName";
pub const OTHER_ORIGIN_VALUES: &str = "otherOriginValues";
pub const CHANGE_TARGET: &str = "changeTarget";
pub const CHANGE_ACTION: &str = "changeAction";
pub const CLASSIFICATION_NAME: &str = "classificationName";
pub const ATTACHMENT_GUID: &str = "attachmentGUID";
pub const ATTACHMENT_TYPE_NAME: &str = "attachmentTypeName";
pub const RELATIONSHIP_TYPE_NAME: &str = "relationshipTypeName";
pub const USER: &str = "user";
pub const SYNC_STATES: &str = "syncStates";
pub const ENCODING_TYPE: &str = "encodingType";
pub const ENCODING_LANGUAGE: &str = "encodingLanguage";
pub const ENCODING_DESCRIPTION: &str = "encodingDescription";
pub const ENCODING_PROPERTIES: &str = "encodingProperties";

// Assets
pub const RESOURCE_NAME: &str = "resourceName";
pub const IMPLEMENTATION_LANGUAGE: &str = "implementationLanguage";
pub const USES_BLOCKING_CALLS: &str = "usesBlockingCalls";
pub const PATH_NAME: &str = "pathName";
pub const STORE_CREATE_TIME: &str = "storeCreateTime";
pub const STORE_UPDATE_TIME: &str = "storeUpdateTime";
pub const FILE_NAME: &str = "fileName";
pub const FILE_TYPE: &str = "fileType";
pub const FILE_EXTENSION: &str = "fileExtension";
pub const DATABASE_TYPE: &str = "databaseType";
pub const DATABASE_VERSION: &str = "databaseVersion";
pub const DATABASE_INSTANCE: &str = "databaseInstance";
pub const DATABASE_IMPORTED_FROM: &str = "databaseImportedFrom";
pub const OPERATING_SYSTEM: &str = "operatingSystem";
pub const OPERATING_SYSTEM_PATCH_LEVEL: &str = "operatingSystemPatchLevel";
pub const SOFTWARE_SERVER_USER_ID: &str = "softwareServerUserId";

// Actors
pub const KNOWN_NAME: &str = "knownName";
pub const COURTESY_TITLE: &str = "courtesyTitle";
pub const INITIALS: &str = "initials";
pub const GIVEN_NAMES: &str = "givenNames";
pub const SURNAME: &str = "surname";
pub const FULL_NAME: &str = "fullName";
pub const PREFERRED_LANGUAGE: &str = "preferredLanguage";
pub const JOB_TITLE: &str = "jobTitle";
pub const EMPLOYEE_NUMBER: &str = "employeeNumber";
pub const EMPLOYEE_TYPE: &str = "employeeType";
pub const PRONOUNS: &str = "pronouns";
pub const TEAM_TYPE: &str = "teamType";
pub const HEAD_COUNT: &str = "headCount";
pub const HEAD_COUNT_LIMIT_SET: &str = "headCountLimitSet";

// Collections, projects, communities
pub const COLLECTION_TYPE: &str = "collectionType";
pub const PRODUCT_NAME: &str = "productName";
pub const PRODUCT_TYPE: &str = "productType";
pub const INTRODUCTION_DATE: &str = "introductionDate";
pub const MATURITY: &str = "maturity";
pub const SERVICE_LIFE: &str = "serviceLife";
pub const CURRENT_VERSION: &str = "currentVersion";
pub const NEXT_VERSION: &str = "nextVersion";
pub const WITHDRAW_DATE: &str = "withdrawDate";
pub const PLANNED_END_DATE: &str = "plannedEndDate";
pub const PROJECT_STATUS: &str = "projectStatus";
pub const PROJECT_PHASE: &str = "projectPhase";
pub const PROJECT_HEALTH: &str = "projectHealth";
pub const PRIORITY: &str = "priority";
pub const MISSION: &str = "mission";

// Glossaries and governance definitions
pub const LANGUAGE: &str = "language";
pub const EXAMPLES: &str = "examples";
pub const ABBREVIATION: &str = "abbreviation";
pub const DOCUMENT_IDENTIFIER: &str = "documentIdentifier";
pub const TITLE: &str = "title";
pub const IMPORTANCE: &str = "importance";
pub const IMPLICATIONS: &str = "implications";
pub const OUTCOMES: &str = "outcomes";
pub const RESULTS: &str = "results";
pub const IMPLEMENTATION_DESCRIPTION: &str = "implementationDescription";
pub const MEASUREMENT: &str = "measurement";
pub const TARGET: &str = "target";

// Schemas and valid values
pub const AUTHOR: &str = "author";
pub const ENCODING_STANDARD: &str = "encodingStandard";
pub const ELEMENT_POSITION: &str = "elementPosition";
pub const MIN_CARDINALITY: &str = "minCardinality";
pub const MAX_CARDINALITY: &str = "maxCardinality";
pub const ALLOWS_DUPLICATE_VALUES: &str = "allowsDuplicateValues";
pub const ORDERED_VALUES: &str = "orderedValues";
pub const DEFAULT_VALUE_OVERRIDE: &str = "defaultValueOverride";
pub const SORT_ORDER: &str = "sortOrder";
pub const MINIMUM_LENGTH: &str = "minimumLength";
pub const PRECISION: &str = "precision";
pub const IS_NULLABLE: &str = "isNullable";
pub const NATIVE_CLASS: &str = "nativeClass";
pub const ALIASES: &str = "aliases";
pub const PREFERRED_VALUE: &str = "preferredValue";
pub const IS_CASE_SENSITIVE: &str = "isCaseSensitive";

// External references, comments, connectivity
pub const REFERENCE_TITLE: &str = "referenceTitle";
pub const REFERENCE_ABSTRACT: &str = "referenceAbstract";
pub const AUTHORS: &str = "authors";
pub const URL: &str = "url";
pub const SOURCES: &str = "sources";
pub const LICENSE: &str = "license";
pub const COPYRIGHT: &str = "copyright";
pub const ATTRIBUTION: &str = "attribution";
pub const COMMENT_TYPE: &str = "commentType";
pub const NETWORK_ADDRESS: &str = "networkAddress";
pub const PROTOCOL: &str = "protocol";
pub const ENCRYPTION_METHOD: &str = "encryptionMethod";
pub const CLEAR_PASSWORD: &str = "clearPassword";
pub const ENCRYPTED_PASSWORD: &str = "encryptedPassword";
pub const SECURED_PROPERTIES: &str = "securedProperties";
pub const CAPABILITY_VERSION: &str = "capabilityVersion";
pub const PATCH_LEVEL: &str = "patchLevel";

// Annotations
pub const ANNOTATION_TYPE: &str = "annotationType";
pub const CONFIDENCE_LEVEL: &str = "confidenceLevel";
pub const EXPLANATION: &str = "explanation";
pub const ANALYSIS_STEP: &str = "analysisStep";
pub const JSON_PROPERTIES: &str = "jsonProperties";
pub const PROFILE_PROPERTIES: &str = "profileProperties";
pub const PROFILE_FLAGS: &str = "profileFlags";
pub const PROFILE_COUNTS: &str = "profileCounts";
pub const PROFILE_DOUBLES: &str = "profileDoubles";
pub const PROFILE_DATES: &str = "profileDates";
pub const PROFILE_START_DATE: &str = "profileStartDate";
pub const PROFILE_END_DATE: &str = "profileEndDate";
pub const VALUE_LIST: &str = "valueList";
pub const VALUE_COUNT: &str = "valueCount";
pub const VALUE_RANGE_FROM: &str = "valueRangeFrom";
pub const VALUE_RANGE_TO: &str = "valueRangeTo";
pub const AVERAGE_VALUE: &str = "averageValue";
pub const CANDIDATE_DATA_CLASS_GUIDS: &str = "candidateDataClassGUIDs";
pub const MATCHING_VALUES: &str = "matchingValues";
pub const NON_MATCHING_VALUES: &str = "nonMatchingValues";

// Relationships
pub const ACTOR_NAME: &str = "actorName";
pub const AGREEMENT_ITEM_ID: &str = "agreementItemId";
pub const AGREEMENT_START: &str = "agreementStart";
pub const AGREEMENT_END: &str = "agreementEnd";
pub const RESTRICTIONS: &str = "restrictions";
pub const OBLIGATIONS: &str = "obligations";
pub const ENTITLEMENTS: &str = "entitlements";
pub const USAGE_MEASUREMENTS: &str = "usageMeasurements";
pub const CERTIFICATE_GUID: &str = "certificateGUID";
pub const START: &str = "start";
pub const END: &str = "end";
pub const CONDITIONS: &str = "conditions";
pub const CERTIFIED_BY: &str = "certifiedBy";
pub const CERTIFIED_BY_TYPE_NAME: &str = "certifiedByTypeName";
pub const CERTIFIED_BY_PROPERTY_NAME: &str = "certifiedByPropertyName";
pub const CUSTODIAN: &str = "custodian";
pub const CUSTODIAN_TYPE_NAME: &str = "custodianTypeName";
pub const CUSTODIAN_PROPERTY_NAME: &str = "custodianPropertyName";
pub const RECIPIENT: &str = "recipient";
pub const RECIPIENT_TYPE_NAME: &str = "recipientTypeName";
pub const RECIPIENT_PROPERTY_NAME: &str = "recipientPropertyName";
pub const LICENSE_GUID: &str = "licenseGUID";
pub const LICENSED_BY: &str = "licensedBy";
pub const LICENSED_BY_TYPE_NAME: &str = "licensedByTypeName";
pub const LICENSED_BY_PROPERTY_NAME: &str = "licensedByPropertyName";
pub const LICENSEE: &str = "licensee";
pub const LICENSEE_TYPE_NAME: &str = "licenseeTypeName";
pub const LICENSEE_PROPERTY_NAME: &str = "licenseePropertyName";
pub const MEMBERSHIP_RATIONALE: &str = "membershipRationale";
pub const MEMBERSHIP_STATUS: &str = "membershipStatus";
pub const USER_DEFINED_STATUS: &str = "userDefinedStatus";
pub const TERM_ASSIGNMENT_STATUS: &str = "termAssignmentStatus";
pub const CREATED_BY: &str = "createdBy";
pub const ASSOCIATION_DESCRIPTION: &str = "associationDescription";
pub const IS_DEFAULT_VALUE: &str = "isDefaultValue";
pub const ATTRIBUTE_NAME: &str = "attributeName";
pub const RESOURCE_USE: &str = "resourceUse";
pub const RESOURCE_USE_DESCRIPTION: &str = "resourceUseDescription";
pub const RESOURCE_USE_PROPERTIES: &str = "resourceUseProperties";
pub const WATCH_RESOURCE: &str = "watchResource";
pub const LINK_ID: &str = "linkId";
pub const LINK_DESCRIPTION: &str = "linkDescription";
pub const PAGES: &str = "pages";
pub const MEDIA_ID: &str = "mediaId";
pub const MEDIA_DESCRIPTION: &str = "mediaDescription";
pub const ASSIGNMENT_TYPE: &str = "assignmentType";
pub const EXPECTED_TIME_ALLOCATION_PERCENT: &str = "expectedTimeAllocationPercent";
pub const DEPENDENCY_SUMMARY: &str = "dependencySummary";
pub const QUERY_ID: &str = "queryId";
pub const QUERY: &str = "query";
pub const QUERY_TYPE: &str = "queryType";
pub const LINE_NUMBER: &str = "lineNumber";
pub const GUARD: &str = "guard";
pub const MANDATORY_GUARD: &str = "mandatoryGuard";
pub const CONNECTOR_NAME: &str = "connectorName";
pub const CONNECTOR_USER_ID: &str = "connectorUserId";
pub const STOP_DATE: &str = "stopDate";
pub const GENERATE_INTEGRATION_REPORT: &str = "generateIntegrationReport";
pub const CATALOG_TARGET_NAME: &str = "catalogTargetName";
pub const CONNECTION_NAME: &str = "connectionName";
pub const TEMPLATES: &str = "templates";
pub const DELETE_METHOD: &str = "deleteMethod";
pub const ACTION_TARGET_NAME: &str = "actionTargetName";
pub const ACTIVITY_STATUS: &str = "activityStatus";
pub const COMPLETION_MESSAGE: &str = "completionMessage";
pub const START_TIME: &str = "startTime";
pub const COMPLETION_TIME: &str = "completionTime";
pub const STATUS: &str = "status";
pub const SUBSCRIBER_ID: &str = "subscriberId";
pub const DESIGN_STEP: &str = "designStep";
pub const ROLE: &str = "role";
pub const TRANSFORMATION: &str = "transformation";
pub const STAKEHOLDER_ROLE: &str = "stakeholderRole";
pub const CONTRACT_ID: &str = "contractId";
pub const CONTRACT_LIAISON: &str = "contractLiaison";
pub const CONTRACT_LIAISON_TYPE_NAME: &str = "contractLiaisonTypeName";
pub const CONTRACT_LIAISON_PROPERTY_NAME: &str = "contractLiaisonPropertyName";
pub const ASSOCIATION_TYPE: &str = "associationType";
