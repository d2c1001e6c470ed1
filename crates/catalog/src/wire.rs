//! Raw catalog wire format.
//!
//! The catalog endpoint returns records whose scalar fields arrive in two
//! shapes: a bare JSON value, or an attribute-value wrapper carrying a type
//! discriminator (`{"S": "..."}` for strings, `{"N": "..."}` for numbers,
//! the number payload itself encoded as text). `WireScalar` models all of
//! them as one sum type so resolution happens in exactly one place.

use serde::{Deserialize, Serialize};

/// One scalar field as it appears on the wire.
///
/// The tagged arms must come first: an untagged deserialize tries variants
/// in order, and only objects with the matching discriminator key satisfy
/// them. Everything else falls through to `Bare`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireScalar {
    /// String-tagged wrapper: `{"S": "Classic Tee"}`.
    StringTagged {
        #[serde(rename = "S")]
        value: String,
    },
    /// Number-tagged wrapper: `{"N": "19.99"}`.
    NumberTagged {
        #[serde(rename = "N")]
        value: String,
    },
    /// Plain value: string, number, or anything else the backend sends.
    Bare(serde_json::Value),
}

impl WireScalar {
    /// Resolve to canonical text.
    ///
    /// Bare numbers render to their decimal form so a numeric id and its
    /// string spelling compare equal after normalization.
    pub fn as_text(&self) -> Option<String> {
        match self {
            WireScalar::StringTagged { value } | WireScalar::NumberTagged { value } => {
                Some(value.clone())
            }
            WireScalar::Bare(serde_json::Value::String(s)) => Some(s.clone()),
            WireScalar::Bare(serde_json::Value::Number(n)) => Some(n.to_string()),
            WireScalar::Bare(_) => None,
        }
    }

    /// Resolve to a canonical number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            WireScalar::StringTagged { value } | WireScalar::NumberTagged { value } => {
                value.trim().parse().ok()
            }
            WireScalar::Bare(serde_json::Value::Number(n)) => n.as_f64(),
            WireScalar::Bare(serde_json::Value::String(s)) => s.trim().parse().ok(),
            WireScalar::Bare(_) => None,
        }
    }
}

/// One catalog entry exactly as the catalog endpoint returns it, before
/// normalization. Every field may be bare, tagged, or missing; unknown
/// fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProductRecord {
    pub id: Option<WireScalar>,
    pub name: Option<WireScalar>,
    pub price: Option<WireScalar>,
    pub category: Option<WireScalar>,
    pub gender: Option<WireScalar>,
    pub image: Option<WireScalar>,
}
