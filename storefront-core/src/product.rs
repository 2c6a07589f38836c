use serde::{Deserialize, Serialize};

/// A catalog item. Owned entirely by the relational store; this service
/// only ever reads products, it never creates or mutates them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Store-assigned key.
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price in minor currency units (cents).
    pub price: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_without_null_description() {
        let product = Product {
            id: 1,
            name: "Runner".to_string(),
            description: None,
            price: 5000,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Runner", "price": 5000})
        );
    }

    #[test]
    fn serializes_description_when_present() {
        let product = Product {
            id: 2,
            name: "Trail".to_string(),
            description: Some("Waterproof".to_string()),
            price: 7500,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["description"], "Waterproof");
    }
}
