//! Registration validation for new stock batches.
//!
//! The registration form hands over raw text for every field. Validation
//! walks a statically declared field table: each entry names its store
//! column, its kind, and whether it is required. On failure the caller gets
//! the offending column names, in table order, and nothing is registered.

use chrono::NaiveDate;
use doceria_api_rs::models::{NewSweet, DEFAULT_STATUS_LABEL};

/// Wire format for date fields.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw registration input, one string per form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweetDraft {
    pub name: String,
    pub flavor: String,
    pub category: String,
    pub quantity: String,
    pub price: String,
    pub manufacture_date: String,
    pub expiry_date: String,
    pub notes: String,
}

/// How a field's raw text must parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    /// Any non-empty text.
    Text,
    /// Non-negative integer.
    Count,
    /// Non-negative decimal.
    Price,
    /// Calendar date, `YYYY-MM-DD`.
    Date,
}

/// One entry of the registration field table.
struct RegistrationField {
    /// Store column name, used verbatim in error reports.
    name: &'static str,
    kind: FieldKind,
    required: bool,
}

/// The registration form, in display order.
const REGISTRATION_FIELDS: &[RegistrationField] = &[
    RegistrationField {
        name: "nome",
        kind: FieldKind::Text,
        required: true,
    },
    RegistrationField {
        name: "sabor",
        kind: FieldKind::Text,
        required: true,
    },
    RegistrationField {
        name: "categoria",
        kind: FieldKind::Text,
        required: false,
    },
    RegistrationField {
        name: "quantidade",
        kind: FieldKind::Count,
        required: true,
    },
    RegistrationField {
        name: "preco",
        kind: FieldKind::Price,
        required: true,
    },
    RegistrationField {
        name: "data_fabricacao",
        kind: FieldKind::Date,
        required: false,
    },
    RegistrationField {
        name: "data_validade",
        kind: FieldKind::Date,
        required: true,
    },
    RegistrationField {
        name: "observacoes",
        kind: FieldKind::Text,
        required: false,
    },
];

/// A draft failed validation; `fields` lists the offending store columns.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing or invalid fields: {}", .fields.join(", "))]
pub struct RegistrationError {
    pub fields: Vec<&'static str>,
}

/// Returns the draft's raw text for a field-table entry.
fn field_value<'a>(draft: &'a SweetDraft, name: &str) -> &'a str {
    match name {
        "nome" => &draft.name,
        "sabor" => &draft.flavor,
        "categoria" => &draft.category,
        "quantidade" => &draft.quantity,
        "preco" => &draft.price,
        "data_fabricacao" => &draft.manufacture_date,
        "data_validade" => &draft.expiry_date,
        "observacoes" => &draft.notes,
        _ => "",
    }
}

/// Validates a draft and converts it into an insert payload.
///
/// Required fields must be present and non-empty; counts, prices, and dates
/// must also parse. Optional fields that are present but unparseable are
/// invalid too. The draft is either fully accepted or fully rejected.
pub fn validate(draft: &SweetDraft) -> Result<NewSweet, RegistrationError> {
    let mut invalid: Vec<&'static str> = Vec::new();
    let mut quantity: Option<u32> = None;
    let mut price: Option<f64> = None;
    let mut expiry_date: Option<NaiveDate> = None;
    let mut manufacture_date: Option<NaiveDate> = None;

    for field in REGISTRATION_FIELDS {
        let raw = field_value(draft, field.name).trim();
        if raw.is_empty() {
            if field.required {
                invalid.push(field.name);
            }
            continue;
        }

        match field.kind {
            FieldKind::Text => {}
            FieldKind::Count => match raw.parse::<u32>() {
                Ok(value) => quantity = Some(value),
                Err(_) => invalid.push(field.name),
            },
            FieldKind::Price => match raw.parse::<f64>() {
                Ok(value) if value >= 0.0 && value.is_finite() => price = Some(value),
                _ => invalid.push(field.name),
            },
            FieldKind::Date => match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
                Ok(value) => {
                    if field.name == "data_validade" {
                        expiry_date = Some(value);
                    } else {
                        manufacture_date = Some(value);
                    }
                }
                Err(_) => invalid.push(field.name),
            },
        }
    }

    if !invalid.is_empty() {
        return Err(RegistrationError { fields: invalid });
    }

    // Every required field passed the table walk, so the typed values are
    // all present.
    let (Some(quantity), Some(price), Some(expiry_date)) = (quantity, price, expiry_date) else {
        return Err(RegistrationError {
            fields: vec!["quantidade", "preco", "data_validade"],
        });
    };

    Ok(NewSweet {
        name: draft.name.trim().to_string(),
        flavor: draft.flavor.trim().to_string(),
        category: non_empty(&draft.category),
        quantity,
        price,
        manufacture_date,
        expiry_date,
        status: DEFAULT_STATUS_LABEL.to_string(),
        notes: non_empty(&draft.notes),
    })
}

/// Trims a raw field; empty text becomes `None` rather than an empty column.
fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> SweetDraft {
        SweetDraft {
            name: "Brigadeiro Gourmet".to_string(),
            flavor: "Chocolate".to_string(),
            category: "Brigadeiro".to_string(),
            quantity: "24".to_string(),
            price: "3.50".to_string(),
            manufacture_date: "2025-08-01".to_string(),
            expiry_date: "2025-08-15".to_string(),
            notes: "Embalagem individual".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_converts_to_insert_payload() {
        let new = validate(&valid_draft()).unwrap();

        assert_eq!(new.name, "Brigadeiro Gourmet");
        assert_eq!(new.flavor, "Chocolate");
        assert_eq!(new.category.as_deref(), Some("Brigadeiro"));
        assert_eq!(new.quantity, 24);
        assert_eq!(new.price, 3.50);
        assert_eq!(
            new.manufacture_date,
            Some(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap())
        );
        assert_eq!(
            new.expiry_date,
            NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()
        );
        assert_eq!(new.status, DEFAULT_STATUS_LABEL);
        assert_eq!(new.notes.as_deref(), Some("Embalagem individual"));
    }

    #[test]
    fn test_missing_quantity_reports_exactly_that_field() {
        let draft = SweetDraft {
            quantity: String::new(),
            ..valid_draft()
        };

        let err = validate(&draft).unwrap_err();
        assert_eq!(err.fields, vec!["quantidade"]);
    }

    #[test]
    fn test_empty_draft_reports_all_required_fields_in_form_order() {
        let err = validate(&SweetDraft::default()).unwrap_err();
        assert_eq!(
            err.fields,
            vec!["nome", "sabor", "quantidade", "preco", "data_validade"]
        );
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let draft = SweetDraft {
            name: "   ".to_string(),
            ..valid_draft()
        };

        let err = validate(&draft).unwrap_err();
        assert_eq!(err.fields, vec!["nome"]);
    }

    #[test]
    fn test_non_integer_quantity_is_invalid() {
        for bad in ["3.5", "-1", "vinte", "12x"] {
            let draft = SweetDraft {
                quantity: bad.to_string(),
                ..valid_draft()
            };
            let err = validate(&draft).unwrap_err();
            assert_eq!(err.fields, vec!["quantidade"], "input: {bad}");
        }
    }

    #[test]
    fn test_negative_or_malformed_price_is_invalid() {
        for bad in ["-2.50", "caro", "NaN"] {
            let draft = SweetDraft {
                price: bad.to_string(),
                ..valid_draft()
            };
            let err = validate(&draft).unwrap_err();
            assert_eq!(err.fields, vec!["preco"], "input: {bad}");
        }
    }

    #[test]
    fn test_zero_quantity_and_price_are_accepted() {
        let draft = SweetDraft {
            quantity: "0".to_string(),
            price: "0".to_string(),
            ..valid_draft()
        };

        let new = validate(&draft).unwrap();
        assert_eq!(new.quantity, 0);
        assert_eq!(new.price, 0.0);
    }

    #[test]
    fn test_malformed_expiry_date_is_invalid() {
        let draft = SweetDraft {
            expiry_date: "15/08/2025".to_string(),
            ..valid_draft()
        };

        let err = validate(&draft).unwrap_err();
        assert_eq!(err.fields, vec!["data_validade"]);
    }

    #[test]
    fn test_unparseable_optional_date_is_invalid_not_ignored() {
        let draft = SweetDraft {
            manufacture_date: "ontem".to_string(),
            ..valid_draft()
        };

        let err = validate(&draft).unwrap_err();
        assert_eq!(err.fields, vec!["data_fabricacao"]);
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let draft = SweetDraft {
            category: String::new(),
            manufacture_date: String::new(),
            notes: String::new(),
            ..valid_draft()
        };

        let new = validate(&draft).unwrap();
        assert!(new.category.is_none());
        assert!(new.manufacture_date.is_none());
        assert!(new.notes.is_none());
    }

    #[test]
    fn test_multiple_problems_are_all_reported() {
        let draft = SweetDraft {
            flavor: String::new(),
            quantity: "muitos".to_string(),
            ..valid_draft()
        };

        let err = validate(&draft).unwrap_err();
        assert_eq!(err.fields, vec!["sabor", "quantidade"]);
    }

    #[test]
    fn test_error_display_names_the_fields() {
        let err = RegistrationError {
            fields: vec!["quantidade", "preco"],
        };
        assert_eq!(
            err.to_string(),
            "missing or invalid fields: quantidade, preco"
        );
    }
}
