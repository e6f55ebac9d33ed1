use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
// The @context property defines the vocabulary used in the JSON-LD document.
// It provides a way to map the keys in the JSON structure to specific terms,
// properties, and classes from external vocabularies.
pub enum Context {
    SingleString(String),
    SetOfString(Vec<String>),
    JsonObject(Value),
}

impl Default for Context {
    fn default() -> Self {
        Context::SingleString(String::from("https://www.w3.org/ns/did/v1"))
    }
}

impl Context {
    /// Lists the remote context URLs this value refers to.
    ///
    /// Embedded context objects carry their own definitions and are skipped,
    /// while the URL entries of a mixed array are still listed.
    pub fn urls(&self) -> Vec<&str> {
        match self {
            Context::SingleString(url) => vec![url.as_str()],
            Context::SetOfString(urls) => urls.iter().map(String::as_str).collect(),
            Context::JsonObject(Value::String(url)) => vec![url.as_str()],
            Context::JsonObject(Value::Array(entries)) => entries.iter().filter_map(Value::as_str).collect(),
            Context::JsonObject(_) => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_urls() {
        let single: Context = serde_json::from_str(r#""https://www.w3.org/ns/did/v1""#).unwrap();
        assert_eq!(single.urls(), vec!["https://www.w3.org/ns/did/v1"]);

        let set: Context = serde_json::from_str(
            r#"["https://www.w3.org/2018/credentials/v1", "https://w3id.org/security/data-integrity/v2"]"#,
        )
        .unwrap();
        assert_eq!(set.urls().len(), 2);

        let embedded: Context = serde_json::from_str(r#"{"@vocab": "https://example.org/"}"#).unwrap();
        assert!(embedded.urls().is_empty());
    }

    #[test]
    fn test_mixed_context_urls() {
        let mixed: Context = serde_json::from_str(
            r#"[
                "https://www.w3.org/2018/credentials/v1",
                "https://example.com/unknown/v1",
                {"@vocab": "https://example.org/"}
            ]"#,
        )
        .unwrap();

        assert!(matches!(mixed, Context::JsonObject(_)));
        assert_eq!(
            mixed.urls(),
            vec!["https://www.w3.org/2018/credentials/v1", "https://example.com/unknown/v1"]
        );
    }
}
