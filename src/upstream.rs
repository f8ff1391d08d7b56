//! Autocomplete upstream client and the city transform.
//!
//! [`AutocompleteClient`] owns the single reusable `reqwest::Client` and
//! knows how to fetch the raw suggestion list for a query string.
//! [`cities_from_results`] is the pure projection from that list into the
//! [`City`] records the service returns; keeping it free of I/O is what
//! makes the filter rules unit-testable.

use crate::error::UpstreamError;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Default base URL of the Wunderground autocomplete service.
pub const DEFAULT_BASE_URL: &str = "http://autocomplete.wunderground.com";

/// Place names containing this fragment are hidden from the browse route.
const SCHOOL_FRAGMENT: &str = "School";

/// A single city suggestion as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct City {
    #[serde(rename = "cityName")]
    pub city_name: String,
}

/// HTTP client for the autocomplete service.
pub struct AutocompleteClient {
    http: reqwest::Client,
    base_url: String,
}

impl AutocompleteClient {
    /// Build a client against `base_url` with a bounded request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url: String = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the raw suggestion objects for `query`, in upstream order.
    ///
    /// The query string goes out as a percent-encoded `query` parameter,
    /// never concatenated into the URL. Anything other than a 200 with a
    /// JSON body holding a `RESULTS` array is an error.
    pub async fn suggestions(&self, query: &str) -> Result<Vec<Value>, UpstreamError> {
        let url = format!("{}/aq", self.base_url);

        let resp = self
            .http
            .get(&url)
            .query(&[("query", query)])
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(UpstreamError::Unavailable)?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(UpstreamError::Status(status));
        }

        let body = resp.text().await.map_err(UpstreamError::Unavailable)?;
        let parsed: Value = serde_json::from_str(&body).map_err(UpstreamError::Malformed)?;

        match parsed.get("RESULTS").and_then(Value::as_array) {
            Some(results) => Ok(results.clone()),
            None => Err(UpstreamError::MissingResults),
        }
    }
}

/// Project raw suggestion objects into the response cities, preserving order.
///
/// Keeps elements whose `type` field is the literal `"city"`. With
/// `hide_schools` set (the bare `/locations` route only), names containing
/// "School" are dropped as well. A malformed element — not an object,
/// missing fields, empty name — is skipped, never fatal.
pub fn cities_from_results(results: &[Value], hide_schools: bool) -> Vec<City> {
    let mut cities = Vec::new();

    for entry in results {
        let Some(kind) = field_string(entry, "type") else {
            continue;
        };
        if kind != "city" {
            continue;
        }
        let Some(name) = field_string(entry, "name") else {
            continue;
        };
        if name.is_empty() {
            continue;
        }
        if hide_schools && name.contains(SCHOOL_FRAGMENT) {
            continue;
        }
        cities.push(City { city_name: name });
    }

    cities
}

/// Stringified view of a field in a loosely typed upstream object: strings
/// pass through, other non-null values render as their JSON text.
fn field_string(entry: &Value, key: &str) -> Option<String> {
    match entry.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn results(value: Value) -> Vec<Value> {
        value.as_array().unwrap().clone()
    }

    #[test]
    fn keeps_city_entries_in_upstream_order() {
        let raw = results(json!([
            {"type": "city", "name": "Paris"},
            {"type": "city", "name": "Parma"},
            {"type": "city", "name": "Pasadena"},
        ]));
        let cities = cities_from_results(&raw, true);
        let names: Vec<_> = cities.iter().map(|c| c.city_name.as_str()).collect();
        assert_eq!(names, ["Paris", "Parma", "Pasadena"]);
    }

    #[test]
    fn drops_non_city_entries() {
        let raw = results(json!([
            {"type": "state", "name": "Texas"},
            {"type": "country", "name": "France"},
            {"type": "city", "name": "Austin"},
        ]));
        assert_eq!(cities_from_results(&raw, false).len(), 1);
        assert_eq!(cities_from_results(&raw, true).len(), 1);
    }

    #[test]
    fn school_names_hidden_only_when_requested() {
        let raw = results(json!([
            {"type": "city", "name": "Paris"},
            {"type": "state", "name": "Texas"},
            {"type": "city", "name": "Paris School"},
        ]));

        let browse = cities_from_results(&raw, true);
        assert_eq!(browse.len(), 1);
        assert_eq!(browse[0].city_name, "Paris");

        let search = cities_from_results(&raw, false);
        let names: Vec<_> = search.iter().map(|c| c.city_name.as_str()).collect();
        assert_eq!(names, ["Paris", "Paris School"]);
    }

    #[test]
    fn empty_results_give_empty_list() {
        assert!(cities_from_results(&[], true).is_empty());
        assert!(cities_from_results(&[], false).is_empty());
    }

    #[test]
    fn malformed_elements_are_skipped_not_fatal() {
        let raw = results(json!([
            "not an object",
            {"name": "no type field"},
            {"type": "city"},
            {"type": "city", "name": null},
            {"type": "city", "name": ""},
            {"type": "city", "name": "Lyon"},
        ]));
        let cities = cities_from_results(&raw, true);
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].city_name, "Lyon");
    }

    #[test]
    fn non_string_fields_are_stringified() {
        // Upstream is loosely typed; a numeric name still comes through.
        let raw = results(json!([
            {"type": "city", "name": 1770},
        ]));
        let cities = cities_from_results(&raw, true);
        assert_eq!(cities[0].city_name, "1770");
    }

    #[test]
    fn city_serializes_with_camel_case_key() {
        let city = City {
            city_name: "Paris".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&city).unwrap(),
            r#"{"cityName":"Paris"}"#
        );
    }

    #[test]
    fn transform_is_deterministic() {
        let raw = results(json!([
            {"type": "city", "name": "Paris"},
            {"type": "city", "name": "Parma"},
        ]));
        assert_eq!(
            cities_from_results(&raw, true),
            cities_from_results(&raw, true)
        );
    }
}
