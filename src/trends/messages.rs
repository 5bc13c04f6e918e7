//! Trends service wire types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One keyword entry of an explore request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonItem {
    pub keyword: String,
    pub time: String,
    pub geo: String,
}

/// Payload serialized into the `req` parameter of the explore endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExploreRequest {
    #[serde(rename = "comparisonItem")]
    pub comparison_item: Vec<ComparisonItem>,
    pub category: u32,
    pub property: String,
}

/// Response of the explore endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ExploreResponse {
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

/// A widget descriptor; the TIMESERIES widget carries the interest-over-time token
#[derive(Debug, Clone, Deserialize)]
pub struct Widget {
    pub id: String,
    #[serde(default)]
    pub token: Option<String>,
    /// Opaque request object echoed back to the data endpoint
    #[serde(default)]
    pub request: Option<Value>,
}

/// Widget id of the interest-over-time widget
pub const TIMESERIES_WIDGET: &str = "TIMESERIES";

/// Response of the multiline widget data endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct MultilineResponse {
    pub default: MultilineData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MultilineData {
    #[serde(rename = "timelineData", default)]
    pub timeline_data: Vec<TimelinePoint>,
}

/// One row of interest-over-time data
#[derive(Debug, Clone, Deserialize)]
pub struct TimelinePoint {
    /// Unix timestamp in seconds, sent as a string
    pub time: String,
    #[serde(rename = "formattedTime", default)]
    pub formatted_time: Option<String>,
    /// One value per keyword, in request order
    #[serde(default)]
    pub value: Vec<f64>,
    /// Per-keyword availability flags
    #[serde(rename = "hasData", default)]
    pub has_data: Option<Vec<bool>>,
    /// Set on the trailing, still incomplete period
    #[serde(rename = "isPartial", default)]
    pub is_partial: Option<bool>,
}

/// Strip the anti-hijacking guard (`)]}'` or `)]}',`) in front of a JSON body
pub fn strip_guard(body: &str) -> &str {
    match body.find('{') {
        Some(start) => &body[start..],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_guard() {
        assert_eq!(strip_guard(")]}'\n{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_guard(")]}',\n{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_guard("{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn test_explore_request_serialization() {
        let req = ExploreRequest {
            comparison_item: vec![ComparisonItem {
                keyword: "Tennis".to_string(),
                time: "today 3-m".to_string(),
                geo: String::new(),
            }],
            category: 0,
            property: String::new(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["comparisonItem"][0]["keyword"], "Tennis");
        assert_eq!(json["comparisonItem"][0]["time"], "today 3-m");
        assert_eq!(json["category"], 0);
    }

    #[test]
    fn test_timeline_point_optional_fields() {
        let point: TimelinePoint =
            serde_json::from_str(r#"{"time":"1700000000","value":[10,20]}"#).unwrap();
        assert_eq!(point.value, vec![10.0, 20.0]);
        assert!(point.is_partial.is_none());
        assert!(point.has_data.is_none());
    }
}
