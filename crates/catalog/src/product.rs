//! Canonical products and record normalization.

use serde::{Deserialize, Serialize};

use clothy_core::{ProductId, StoreError, StoreResult};

use crate::wire::{RawProductRecord, WireScalar};

/// A catalog product after normalization. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub gender: String,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none", default)]
    pub image_url: Option<String>,
}

/// Normalize one raw catalog record into its canonical product.
///
/// `id` and `name` must resolve to usable text; the record fails with
/// `MalformedRecord` naming the first field that does not. Every other
/// field degrades instead: `price` to `0.0` when missing, unparseable,
/// negative, or non-finite, `category`/`gender` to the empty string, and
/// `image` to no image at all.
///
/// Pure function over one record; callers decide what a failure means for
/// the rest of the catalog.
pub fn normalize(raw: &RawProductRecord) -> StoreResult<Product> {
    let id = resolve_text(&raw.id).ok_or_else(|| StoreError::malformed("id"))?;
    let name = resolve_text(&raw.name).ok_or_else(|| StoreError::malformed("name"))?;

    let price = raw
        .price
        .as_ref()
        .and_then(WireScalar::as_number)
        .filter(|p| p.is_finite() && *p >= 0.0)
        .unwrap_or(0.0);

    let category = resolve_text(&raw.category).unwrap_or_default();
    let gender = resolve_text(&raw.gender).unwrap_or_default();
    let image_url = raw.image.as_ref().and_then(WireScalar::as_text);

    Ok(Product {
        id: ProductId::new(id),
        name,
        price,
        category,
        gender,
        image_url,
    })
}

fn resolve_text(field: &Option<WireScalar>) -> Option<String> {
    field
        .as_ref()
        .and_then(WireScalar::as_text)
        .filter(|s| !s.trim().is_empty())
}
