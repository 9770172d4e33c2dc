// Request and response payloads for the /process endpoint

use serde::{Deserialize, Deserializer, Serialize};

/// Text submitted for processing. Unknown fields are ignored; a missing or
/// `null` message decodes as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InboundMessage {
    #[serde(default, alias = "Message", deserialize_with = "null_as_empty")]
    pub message: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundResult {
    pub processed_message: String,
}
