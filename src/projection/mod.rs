//! # Property Projection
//!
//! Turns beans into [`PropertyMap`]s. Each family has one contributor that
//! encodes its typed fields; the [`Projector`] then merges the bean's
//! extended properties on top and, for the `project_*` entry points, wraps
//! the result with the bean's effectivity window.
//!
//! A `None` bean yields `None`. A present bean always yields a map, which
//! may be empty when no field is set.

pub mod helper;

mod classification;
mod element;
mod relationship;
mod result;

pub use result::{ProjectionResult, with_effectivity};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::beans::{ClassificationBean, ElementBean, RelationshipBean};
use crate::model::{PropertyMap, TypedValue};

// ============================================================================
// Configuration
// ============================================================================

/// What happens when an extended property shares a name with a typed field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtendedPropertyPolicy {
    /// The extended property replaces the typed value.
    #[default]
    Overwrite,
    /// The typed value is kept; the extended property is dropped.
    PreserveTyped,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectionConfig {
    pub extended_property_policy: ExtendedPropertyPolicy,
}

// ============================================================================
// Projector
// ============================================================================

/// Stateless projection engine. Cheap to copy and safe to share.
#[derive(Debug, Clone, Copy, Default)]
pub struct Projector {
    config: ProjectionConfig,
}

impl Projector {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    // ---- Classifications ----

    /// Property map for a classification bean.
    pub fn classification_properties(&self, bean: Option<&ClassificationBean>) -> Option<PropertyMap> {
        let bean = bean?;
        let props = classification::contribute(None, &bean.properties).unwrap_or_default();
        Some(self.merge_extended(props, bean.extended_properties.as_ref()))
    }

    /// Property map plus effectivity window for a classification bean.
    pub fn project_classification(&self, bean: Option<&ClassificationBean>) -> Option<ProjectionResult> {
        let bean = bean?;
        trace!(classification = bean.properties.type_name(), "projecting classification");
        with_effectivity(
            self.classification_properties(Some(bean)),
            bean.effective_from,
            bean.effective_to,
        )
    }

    /// Project a batch of named classifications.
    ///
    /// Entries without a name or without a bean are left out. When a name
    /// repeats, the later entry wins.
    pub fn project_classifications<'a, I, N>(&self, beans: I) -> hashbrown::HashMap<String, ProjectionResult>
    where
        I: IntoIterator<Item = (N, Option<&'a ClassificationBean>)>,
        N: Into<Option<String>>,
    {
        let mut out = hashbrown::HashMap::new();
        for (name, bean) in beans {
            let Some(name) = name.into() else {
                trace!("skipping unnamed classification");
                continue;
            };
            match self.project_classification(bean) {
                Some(result) => {
                    out.insert(name, result);
                }
                None => trace!(classification = %name, "skipping absent classification"),
            }
        }
        out
    }

    // ---- Elements ----

    /// Property map for an element bean, accumulated along its type lineage.
    pub fn element_properties(&self, bean: Option<&ElementBean>) -> Option<PropertyMap> {
        let bean = bean?;
        let props = element::contribute(None, &bean.properties).unwrap_or_default();
        Some(self.merge_extended(props, bean.extended_properties.as_ref()))
    }

    pub fn project_element(&self, bean: Option<&ElementBean>) -> Option<ProjectionResult> {
        let bean = bean?;
        trace!(
            element = bean.properties.type_name(),
            depth = bean.properties.type_lineage().len(),
            "projecting element"
        );
        with_effectivity(self.element_properties(Some(bean)), bean.effective_from, bean.effective_to)
    }

    // ---- Relationships ----

    pub fn relationship_properties(&self, bean: Option<&RelationshipBean>) -> Option<PropertyMap> {
        let bean = bean?;
        let props = relationship::contribute(None, &bean.properties).unwrap_or_default();
        Some(self.merge_extended(props, bean.extended_properties.as_ref()))
    }

    pub fn project_relationship(&self, bean: Option<&RelationshipBean>) -> Option<ProjectionResult> {
        let bean = bean?;
        trace!(relationship = bean.properties.type_name(), "projecting relationship");
        with_effectivity(
            self.relationship_properties(Some(bean)),
            bean.effective_from,
            bean.effective_to,
        )
    }

    fn merge_extended(&self, mut props: PropertyMap, extended: Option<&BTreeMap<String, String>>) -> PropertyMap {
        let Some(extended) = extended else {
            return props;
        };

        for key in extended.keys().filter(|k| props.contains_key(k.as_str())) {
            debug!(
                property = %key,
                policy = ?self.config.extended_property_policy,
                "extended property collides with typed field"
            );
        }

        match self.config.extended_property_policy {
            ExtendedPropertyPolicy::Overwrite => {
                helper::merge_string_map(Some(props), Some(extended)).unwrap_or_default()
            }
            ExtendedPropertyPolicy::PreserveTyped => {
                for (key, value) in extended {
                    props
                        .entry(key.clone())
                        .or_insert_with(|| TypedValue::String(value.clone()));
                }
                props
            }
        }
    }
}

// ============================================================================
// Free functions (default configuration)
// ============================================================================

pub fn classification_properties(bean: Option<&ClassificationBean>) -> Option<PropertyMap> {
    Projector::default().classification_properties(bean)
}

pub fn project_classification(bean: Option<&ClassificationBean>) -> Option<ProjectionResult> {
    Projector::default().project_classification(bean)
}

pub fn project_classifications<'a, I, N>(beans: I) -> hashbrown::HashMap<String, ProjectionResult>
where
    I: IntoIterator<Item = (N, Option<&'a ClassificationBean>)>,
    N: Into<Option<String>>,
{
    Projector::default().project_classifications(beans)
}

pub fn element_properties(bean: Option<&ElementBean>) -> Option<PropertyMap> {
    Projector::default().element_properties(bean)
}

pub fn project_element(bean: Option<&ElementBean>) -> Option<ProjectionResult> {
    Projector::default().project_element(bean)
}

pub fn relationship_properties(bean: Option<&RelationshipBean>) -> Option<PropertyMap> {
    Projector::default().relationship_properties(bean)
}

pub fn project_relationship(bean: Option<&RelationshipBean>) -> Option<ProjectionResult> {
    Projector::default().project_relationship(bean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beans::*;
    use crate::model::names::{DISPLAY_NAME, QUALIFIED_NAME};

    fn glossary(display: &str) -> ElementBean {
        ElementBean::new(
            ReferenceableProperties::new("glossary:1")
                .with_display_name(display)
                .with_kind(ReferenceableKind::Glossary(GlossaryProperties::default()))
                .into(),
        )
    }

    #[test]
    fn test_present_bean_with_no_fields_yields_empty_map() {
        let bean = ElementBean::new(ReferenceableProperties::default().into());
        assert_eq!(element_properties(Some(&bean)), Some(PropertyMap::new()));
        let hierarchy = RelationshipBean::new(RelationshipProperties::ProjectHierarchy);
        assert_eq!(relationship_properties(Some(&hierarchy)), Some(PropertyMap::new()));
    }

    #[test]
    fn test_overwrite_policy_lets_extended_win() {
        let bean = glossary("typed").with_extended_property(DISPLAY_NAME, "extended");
        let props = Projector::default().element_properties(Some(&bean)).unwrap();
        assert_eq!(props[DISPLAY_NAME], TypedValue::from("extended"));
    }

    #[test]
    fn test_preserve_typed_policy_keeps_typed() {
        let bean = glossary("typed")
            .with_extended_property(DISPLAY_NAME, "extended")
            .with_extended_property("custom", "x");
        let projector = Projector::new(ProjectionConfig {
            extended_property_policy: ExtendedPropertyPolicy::PreserveTyped,
        });
        let props = projector.element_properties(Some(&bean)).unwrap();
        assert_eq!(props[DISPLAY_NAME], TypedValue::from("typed"));
        assert_eq!(props["custom"], TypedValue::from("x"));
        assert_eq!(props[QUALIFIED_NAME], TypedValue::from("glossary:1"));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: ProjectionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.extended_property_policy, ExtendedPropertyPolicy::Overwrite);

        let config: ProjectionConfig =
            serde_json::from_str(r#"{"extendedPropertyPolicy":"preserveTyped"}"#).unwrap();
        assert_eq!(config.extended_property_policy, ExtendedPropertyPolicy::PreserveTyped);
    }

    #[test]
    fn test_batch_skips_unnamed_entries() {
        let bean = ClassificationBean::new(ClassificationProperties::SpineObject);
        let out = project_classifications([
            (None, Some(&bean)),
            (Some("spine".to_string()), Some(&bean)),
        ]);
        assert_eq!(out.len(), 1);
        assert!(out["spine"].properties.is_empty());
    }
}
