//! Sweet record model for the remote stock store.
//!
//! The store table (`estoque_doces`) uses Portuguese column names; the serde
//! renames below keep the wire format intact while the Rust structs use
//! English field names.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Status label the store writes for newly registered rows.
///
/// The table carries a `status` column, but readers always recompute the
/// status from `data_validade`; the column value itself is never trusted.
pub const DEFAULT_STATUS_LABEL: &str = "Disponível";

/// One batch of a confectionery product, as stored in the remote table.
///
/// Rows are created through registration, read in bulk on view load, and
/// destroyed by id. There is no in-place update operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweetRecord {
    /// Opaque unique identifier, assigned by the store.
    pub id: String,

    /// Product name.
    #[serde(rename = "nome")]
    pub name: String,

    /// Flavor description.
    #[serde(rename = "sabor")]
    pub flavor: String,

    /// Product category (e.g. "Brigadeiro").
    #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Units in stock for this batch.
    #[serde(rename = "quantidade")]
    pub quantity: u32,

    /// Unit price.
    #[serde(rename = "preco")]
    pub price: f64,

    /// Date the batch was made.
    #[serde(
        rename = "data_fabricacao",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub manufacture_date: Option<NaiveDate>,

    /// Expiry date of the batch.
    #[serde(rename = "data_validade")]
    pub expiry_date: NaiveDate,

    /// Persisted status column. Present in the schema but stale by
    /// construction; readers derive the real status from the expiry date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Free-text notes.
    #[serde(rename = "observacoes", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// When the row was created, per the store. Used only to order listings
    /// by recency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert payload for registering a new sweet.
///
/// Carries no `id` or `created_at`; the store assigns both. The `status`
/// field exists because the table has the column, and is always written with
/// the default label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSweet {
    /// Product name.
    #[serde(rename = "nome")]
    pub name: String,

    /// Flavor description.
    #[serde(rename = "sabor")]
    pub flavor: String,

    /// Product category.
    #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Units in stock.
    #[serde(rename = "quantidade")]
    pub quantity: u32,

    /// Unit price.
    #[serde(rename = "preco")]
    pub price: f64,

    /// Date the batch was made.
    #[serde(
        rename = "data_fabricacao",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub manufacture_date: Option<NaiveDate>,

    /// Expiry date of the batch.
    #[serde(rename = "data_validade")]
    pub expiry_date: NaiveDate,

    /// Status column value, always the default label on insert.
    #[serde(default = "default_status")]
    pub status: String,

    /// Free-text notes.
    #[serde(rename = "observacoes", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn default_status() -> String {
    DEFAULT_STATUS_LABEL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record_json() -> &'static str {
        r#"{
            "id": "3f0a9c2e-1d4b-4f6a-8b5c-000000000001",
            "nome": "Brigadeiro Gourmet",
            "sabor": "Chocolate",
            "categoria": "Brigadeiro",
            "quantidade": 24,
            "preco": 3.5,
            "data_fabricacao": "2025-08-01",
            "data_validade": "2025-08-15",
            "status": "Disponível",
            "observacoes": "Embalagem individual",
            "created_at": "2025-08-01T14:30:00Z"
        }"#
    }

    #[test]
    fn test_record_deserializes_portuguese_columns() {
        let record: SweetRecord = serde_json::from_str(sample_record_json()).unwrap();

        assert_eq!(record.name, "Brigadeiro Gourmet");
        assert_eq!(record.flavor, "Chocolate");
        assert_eq!(record.category.as_deref(), Some("Brigadeiro"));
        assert_eq!(record.quantity, 24);
        assert_eq!(record.price, 3.5);
        assert_eq!(
            record.expiry_date,
            NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()
        );
        assert_eq!(record.status.as_deref(), Some("Disponível"));
    }

    #[test]
    fn test_record_deserializes_minimal_row() {
        // Optional columns may be missing or null in older rows.
        let json = r#"{
            "id": "abc",
            "nome": "Beijinho",
            "sabor": "Coco",
            "categoria": null,
            "quantidade": 0,
            "preco": 2.0,
            "data_validade": "2025-12-01"
        }"#;

        let record: SweetRecord = serde_json::from_str(json).unwrap();
        assert!(record.category.is_none());
        assert!(record.manufacture_date.is_none());
        assert!(record.notes.is_none());
        assert!(record.created_at.is_none());
    }

    #[test]
    fn test_record_rejects_negative_quantity() {
        let json = r#"{
            "id": "abc",
            "nome": "Beijinho",
            "sabor": "Coco",
            "quantidade": -1,
            "preco": 2.0,
            "data_validade": "2025-12-01"
        }"#;

        assert!(serde_json::from_str::<SweetRecord>(json).is_err());
    }

    #[test]
    fn test_new_sweet_serializes_wire_names() {
        let new = NewSweet {
            name: "Palha Italiana".to_string(),
            flavor: "Chocolate".to_string(),
            category: Some("Doce de corte".to_string()),
            quantity: 12,
            price: 6.0,
            manufacture_date: None,
            expiry_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            status: DEFAULT_STATUS_LABEL.to_string(),
            notes: None,
        };

        let json = serde_json::to_value(&new).unwrap();
        assert_eq!(json["nome"], "Palha Italiana");
        assert_eq!(json["sabor"], "Chocolate");
        assert_eq!(json["quantidade"], 12);
        assert_eq!(json["preco"], 6.0);
        assert_eq!(json["data_validade"], "2025-09-01");
        assert_eq!(json["status"], "Disponível");
        // Unset optionals stay off the wire entirely.
        assert!(json.get("data_fabricacao").is_none());
        assert!(json.get("observacoes").is_none());
    }

}
