//! Projection result and the effectivity wrapper.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{FromTypedValue, PropertyMap, TypedValue, get_as};
use crate::Result;

/// A projected property map scoped by its effectivity window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub properties: PropertyMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_from: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_to: Option<DateTime<Utc>>,
}

impl ProjectionResult {
    pub fn get(&self, key: &str) -> Option<&TypedValue> {
        self.properties.get(key)
    }

    /// Get a typed value from the projected properties.
    pub fn get_as<T: FromTypedValue>(&self, key: &str) -> Result<T> {
        get_as(&self.properties, key)
    }

    /// Whether `when` falls inside `[effective_from, effective_to)`.
    /// Open ends are unbounded.
    pub fn is_effective_at(&self, when: DateTime<Utc>) -> bool {
        self.effective_from.is_none_or(|from| from <= when)
            && self.effective_to.is_none_or(|to| when < to)
    }
}

/// Attach an effectivity window to a property map.
///
/// A missing map yields no result: dates are never attached to nothing.
pub fn with_effectivity(
    properties: Option<PropertyMap>,
    effective_from: Option<DateTime<Utc>>,
    effective_to: Option<DateTime<Utc>>,
) -> Option<ProjectionResult> {
    properties.map(|properties| ProjectionResult {
        properties,
        effective_from,
        effective_to,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_none_map_yields_none() {
        let t1 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(with_effectivity(None, Some(t1), None), None);
    }

    #[test]
    fn test_empty_map_keeps_dates() {
        let t1 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let result = with_effectivity(Some(PropertyMap::new()), Some(t1), Some(t2)).unwrap();
        assert!(result.properties.is_empty());
        assert_eq!(result.effective_from, Some(t1));
        assert_eq!(result.effective_to, Some(t2));
    }

    #[test]
    fn test_is_effective_at() {
        let t1 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let mid = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let result = with_effectivity(Some(PropertyMap::new()), Some(t1), Some(t2)).unwrap();

        assert!(result.is_effective_at(t1));
        assert!(result.is_effective_at(mid));
        assert!(!result.is_effective_at(t2));

        let open = with_effectivity(Some(PropertyMap::new()), None, None).unwrap();
        assert!(open.is_effective_at(t2));
    }
}
