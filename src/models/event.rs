use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// HTTP-style invocation event. Only the query string is consulted; any other
/// fields an API gateway sends along are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationEvent {
    #[serde(rename = "queryStringParameters", default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl RecommendationEvent {
    pub fn from_params(params: HashMap<String, String>) -> Self {
        RecommendationEvent {
            query_string_parameters: Some(params),
        }
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get(name))
            .map(String::as_str)
    }
}

/// Response object handed back to the invoking platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl HandlerResponse {
    /// JSON response with the content-type and CORS headers applied.
    pub fn json(status_code: u16, body: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());

        HandlerResponse {
            status_code,
            headers,
            body,
        }
    }
}
