//! # Store Requests
//!
//! Request bodies a client sends to a metadata store to create elements,
//! relationships and classifications. Each request carries projected
//! property maps rather than beans, so the store never sees the typed
//! bean model.

use chrono::{DateTime, Utc};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::beans::{ClassificationBean, ElementBean, RelationshipBean};
use crate::model::{ElementStatus, PropertyMap};
use crate::projection::{self, ProjectionResult};
use crate::{Error, Result};

// ============================================================================
// Elements
// ============================================================================

/// Request to create a new element, optionally anchored and linked to a parent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewElementRequest {
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_status: Option<ElementStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_classifications: Option<HashMap<String, ProjectionResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_guid: Option<String>,
    #[serde(default)]
    pub is_own_anchor: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_scope_guid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_from: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_to: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropertyMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_guid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_relationship_type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_relationship_properties: Option<ProjectionResult>,
    #[serde(default)]
    pub parent_at_end1: bool,
}

impl NewElementRequest {
    /// Build a request whose type name, properties and effectivity come from `bean`.
    pub fn from_bean(bean: &ElementBean) -> Self {
        Self {
            type_name: bean.properties.type_name().to_string(),
            effective_from: bean.effective_from,
            effective_to: bean.effective_to,
            properties: projection::element_properties(Some(bean)),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: ElementStatus) -> Self {
        self.initial_status = Some(status);
        self
    }

    /// Project and attach initial classifications. Absent beans are dropped.
    pub fn with_classifications<'a, I, N>(mut self, classifications: I) -> Self
    where
        I: IntoIterator<Item = (N, Option<&'a ClassificationBean>)>,
        N: Into<Option<String>>,
    {
        let projected = projection::project_classifications(classifications);
        if !projected.is_empty() {
            self.initial_classifications = Some(projected);
        }
        self
    }

    pub fn anchored_to(mut self, anchor_guid: impl Into<String>, anchor_scope_guid: Option<String>) -> Self {
        self.anchor_guid = Some(anchor_guid.into());
        self.anchor_scope_guid = anchor_scope_guid;
        self.is_own_anchor = false;
        self
    }

    pub fn own_anchor(mut self) -> Self {
        self.anchor_guid = None;
        self.is_own_anchor = true;
        self
    }

    /// Link the new element to `parent_guid` through `relationship`.
    pub fn with_parent(
        mut self,
        parent_guid: impl Into<String>,
        relationship: &RelationshipBean,
        parent_at_end1: bool,
    ) -> Self {
        self.parent_guid = Some(parent_guid.into());
        self.parent_relationship_type_name = Some(relationship.properties.type_name().to_string());
        self.parent_relationship_properties = projection::project_relationship(Some(relationship));
        self.parent_at_end1 = parent_at_end1;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.type_name.is_empty() {
            return Err(Error::InvalidRequest("element type name is empty".into()));
        }
        if self.is_own_anchor && self.anchor_guid.is_some() {
            return Err(Error::InvalidRequest(
                "element cannot be its own anchor and anchored elsewhere".into(),
            ));
        }
        if self.parent_guid.is_some() != self.parent_relationship_type_name.is_some() {
            return Err(Error::InvalidRequest(
                "parent guid and parent relationship type must be set together".into(),
            ));
        }
        check_finite(&self.type_name, self.properties.as_ref())?;
        for (name, classification) in self.initial_classifications.iter().flatten() {
            check_finite(name, Some(&classification.properties))?;
        }
        if let (Some(type_name), Some(parent)) =
            (&self.parent_relationship_type_name, &self.parent_relationship_properties)
        {
            check_finite(type_name, Some(&parent.properties))?;
        }
        Ok(())
    }

    /// Validate and serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        self.validate()?;
        Ok(serde_json::to_string(self)?)
    }
}

// ============================================================================
// Relationships
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRelationshipRequest {
    pub type_name: String,
    pub end1_guid: String,
    pub end2_guid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_from: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_to: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropertyMap>,
}

impl NewRelationshipRequest {
    pub fn from_bean(end1_guid: impl Into<String>, end2_guid: impl Into<String>, bean: &RelationshipBean) -> Self {
        Self {
            type_name: bean.properties.type_name().to_string(),
            end1_guid: end1_guid.into(),
            end2_guid: end2_guid.into(),
            effective_from: bean.effective_from,
            effective_to: bean.effective_to,
            properties: projection::relationship_properties(Some(bean)),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.end1_guid.is_empty() || self.end2_guid.is_empty() {
            return Err(Error::InvalidRequest(format!(
                "{} needs both end guids",
                self.type_name
            )));
        }
        check_finite(&self.type_name, self.properties.as_ref())
    }

    pub fn to_json(&self) -> Result<String> {
        self.validate()?;
        Ok(serde_json::to_string(self)?)
    }
}

// ============================================================================
// Classifications
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClassificationRequest {
    pub classification_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_from: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_to: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropertyMap>,
}

impl NewClassificationRequest {
    pub fn from_bean(bean: &ClassificationBean) -> Self {
        Self {
            classification_name: bean.properties.type_name().to_string(),
            effective_from: bean.effective_from,
            effective_to: bean.effective_to,
            properties: projection::classification_properties(Some(bean)),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.classification_name.is_empty() {
            return Err(Error::InvalidRequest("classification name is empty".into()));
        }
        check_finite(&self.classification_name, self.properties.as_ref())
    }

    pub fn to_json(&self) -> Result<String> {
        self.validate()?;
        Ok(serde_json::to_string(self)?)
    }
}

/// Reject NaN and infinite numbers, which serialize to `null` and cannot be read back.
fn check_finite(owner: &str, properties: Option<&PropertyMap>) -> Result<()> {
    match properties
        .into_iter()
        .flatten()
        .find(|(_, value)| !value.is_finite())
    {
        Some((name, value)) => Err(Error::InvalidRequest(format!(
            "{owner}.{name} holds a non-finite {}",
            value.type_name()
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beans::*;

    #[test]
    fn test_parent_requires_relationship_type() {
        let request = NewElementRequest {
            type_name: "Glossary".into(),
            parent_guid: Some("p-1".into()),
            ..Default::default()
        };
        assert!(matches!(request.validate(), Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn test_own_anchor_clears_anchor_guid() {
        let bean = ElementBean::new(ReferenceableProperties::new("x").into());
        let request = NewElementRequest::from_bean(&bean).anchored_to("a-1", None).own_anchor();
        assert!(request.is_own_anchor);
        assert_eq!(request.anchor_guid, None);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_relationship_request_needs_ends() {
        let bean = RelationshipBean::new(RelationshipProperties::ProjectHierarchy);
        let request = NewRelationshipRequest::from_bean("", "g-2", &bean);
        assert!(request.to_json().is_err());
    }

    #[test]
    fn test_non_finite_double_is_rejected() {
        let bean = ClassificationBean::new(ClassificationProperties::DataScope(DataScopeProperties {
            min_longitude: Some(f64::NAN),
            max_longitude: Some(10.0),
            ..Default::default()
        }));
        let request = NewClassificationRequest::from_bean(&bean);
        match request.to_json() {
            Err(Error::InvalidRequest(msg)) => assert!(msg.contains("minLongitude"), "{msg}"),
            other => panic!("expected InvalidRequest, got {other:?}"),
        }

        let mut element = NewElementRequest::from_bean(&ElementBean::new(ReferenceableProperties::new("x").into()))
            .with_classifications([("DataScope".to_string(), Some(&bean))]);
        assert!(matches!(element.validate(), Err(Error::InvalidRequest(_))));

        element.initial_classifications = None;
        assert!(element.to_json().is_ok());
    }

    #[test]
    fn test_classification_request_json() {
        let bean = ClassificationBean::new(ClassificationProperties::SpineObject);
        let json = NewClassificationRequest::from_bean(&bean).to_json().unwrap();
        assert_eq!(json, r#"{"classificationName":"SpineObject","properties":{}}"#);
    }
}
