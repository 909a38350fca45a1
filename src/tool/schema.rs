//! Input schema for guided generation

use crate::search::Location;
use serde_json::{json, Value};

/// Schema of the search tool input: a list of queries and a location code
pub fn input_schema() -> Value {
    let codes = Location::codes();
    let available = codes
        .iter()
        .map(|c| format!("'{}'", c))
        .collect::<Vec<_>>()
        .join(", ");

    json!({
        "type": "object",
        "properties": {
            "queries": {
                "type": "array",
                "items": {
                    "type": "string",
                    "description": "A search query string."
                },
                "description": "A list of search query strings."
            },
            "location": {
                "type": "string",
                "enum": codes,
                "description": format!(
                    "The geographic location for the search results. Available locations: {}.",
                    available
                )
            }
        },
        "required": ["queries", "location"],
        "additionalProperties": false
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_shape() {
        let schema = input_schema();

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["additionalProperties"], false);
        assert_eq!(schema["required"], json!(["queries", "location"]));
        assert_eq!(schema["properties"]["queries"]["type"], "array");
        assert_eq!(schema["properties"]["queries"]["items"]["type"], "string");
        assert_eq!(
            schema["properties"]["location"]["enum"],
            json!(["us", "gb", "nl", "ca"])
        );
        assert!(schema["properties"]["location"]["description"]
            .as_str()
            .unwrap()
            .contains("'us', 'gb', 'nl', 'ca'"));
    }
}
