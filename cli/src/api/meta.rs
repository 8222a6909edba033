use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Shown in place of a name the service did not report
pub const UNKNOWN_NAME: &str = "<unknown>";

/// Metadata the control service keeps about a zeta
///
/// Kept as an ordered JSON map; only `name` is interpreted by the client.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record(pub Map<String, Value>);

impl Record {
    pub fn name(&self) -> Option<&Value> {
        self.0.get("name")
    }

    /// Name as printed in listings
    ///
    /// Strings are printed raw, other JSON values in compact form, missing or null as `<unknown>`.
    pub fn display_name(&self) -> String {
        match self.name() {
            Some(Value::String(name)) => name.to_owned(),
            None | Some(Value::Null) => UNKNOWN_NAME.to_string(),
            Some(other) => other.to_string(),
        }
    }
}
