use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parameters passed to the function, always a JSON object
pub type Request = Map<String, Value>;

/// Envelope around whatever the function returned
#[derive(Debug, Deserialize, Serialize)]
pub struct Response {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub response: Value,
}
