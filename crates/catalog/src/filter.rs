//! Client-side filter/search engine.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Active catalog filters. An empty string means "no constraint".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filters {
    pub gender: String,
    pub category: String,
    /// Inclusive price bounds, `min <= max`.
    pub price_range: (f64, f64),
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            gender: String::new(),
            category: String::new(),
            price_range: (0.0, 0.0),
        }
    }
}

impl Filters {
    /// Unconstrained filters whose price range spans the observed catalog
    /// prices. An empty catalog keeps the `(0, 0)` default.
    pub fn from_catalog(products: &[Product]) -> Self {
        let mut filters = Self::default();
        filters.reset_price_range(products);
        filters
    }

    /// Re-derive the price bounds from a (re)loaded catalog, keeping the
    /// other constraints as they are. An empty catalog leaves the bounds
    /// untouched.
    pub fn reset_price_range(&mut self, products: &[Product]) {
        let mut prices = products.iter().map(|p| p.price);
        let Some(first) = prices.next() else {
            return;
        };
        let (min, max) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        self.price_range = (min, max);
    }

    /// Set the price bounds. Arguments are ordered, so `min <= max` holds
    /// whichever way around the caller passes them.
    pub fn set_price_range(&mut self, a: f64, b: f64) {
        self.price_range = if a <= b { (a, b) } else { (b, a) };
    }

    /// Whether `product` satisfies every active constraint.
    ///
    /// `search_lower` must already be lowercased; `visible` folds it once
    /// for the whole pass.
    fn admits(&self, product: &Product, search_lower: &str) -> bool {
        if !self.gender.is_empty() && product.gender != self.gender {
            return false;
        }
        if !self.category.is_empty() && product.category != self.category {
            return false;
        }
        let (min, max) = self.price_range;
        if product.price < min || product.price > max {
            return false;
        }
        if !search_lower.is_empty() && !product.name.to_lowercase().contains(search_lower) {
            return false;
        }
        true
    }
}

/// The visible subset of `products` under `filters` and `search`.
///
/// Pure and order-preserving: the result is a stable subsequence of the
/// input. Search is a case-insensitive substring match on the product name.
pub fn visible<'a>(products: &'a [Product], filters: &Filters, search: &str) -> Vec<&'a Product> {
    let search_lower = search.to_lowercase();
    products
        .iter()
        .filter(|p| filters.admits(p, &search_lower))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clothy_core::ProductId;

    fn product(id: &str, name: &str, price: f64, category: &str, gender: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price,
            category: category.to_string(),
            gender: gender.to_string(),
            image_url: None,
        }
    }

    fn sample_catalog() -> Vec<Product> {
        vec![
            product("1", "Classic Tee", 19.99, "Shirt", "Unisex"),
            product("2", "Elegant Skirt", 39.90, "Skirt", "Women"),
            product("3", "Running Sneakers", 59.99, "Shoes", "Men"),
        ]
    }

    #[test]
    fn unconstrained_search_matches_by_name_substring() {
        let catalog = sample_catalog();
        let filters = Filters {
            price_range: (0.0, 100.0),
            ..Filters::default()
        };

        let result = visible(&catalog, &filters, "tee");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Classic Tee");
    }

    #[test]
    fn gender_filter_is_exact_and_case_sensitive() {
        let catalog = sample_catalog();
        let mut filters = Filters::from_catalog(&catalog);

        filters.gender = "Women".to_string();
        assert_eq!(visible(&catalog, &filters, "").len(), 1);

        filters.gender = "women".to_string();
        assert!(visible(&catalog, &filters, "").is_empty());
    }

    #[test]
    fn category_filter_narrows_the_catalog() {
        let catalog = sample_catalog();
        let mut filters = Filters::from_catalog(&catalog);
        filters.category = "Shoes".to_string();

        let result = visible(&catalog, &filters, "");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, ProductId::new("3"));
    }

    #[test]
    fn price_bounds_are_inclusive_on_both_ends() {
        let catalog = sample_catalog();
        let mut filters = Filters::default();
        filters.set_price_range(19.99, 39.90);

        let names: Vec<_> = visible(&catalog, &filters, "")
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["Classic Tee", "Elegant Skirt"]);
    }

    #[test]
    fn degenerate_range_admits_only_exact_price() {
        let catalog = sample_catalog();
        let mut filters = Filters::default();
        filters.set_price_range(39.90, 39.90);

        let result = visible(&catalog, &filters, "");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Elegant Skirt");
    }

    #[test]
    fn set_price_range_orders_its_arguments() {
        let mut filters = Filters::default();
        filters.set_price_range(80.0, 20.0);
        assert_eq!(filters.price_range, (20.0, 80.0));
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        let filters = Filters::default();
        assert!(visible(&[], &filters, "anything").is_empty());
    }

    #[test]
    fn from_catalog_spans_observed_prices() {
        let filters = Filters::from_catalog(&sample_catalog());
        assert_eq!(filters.price_range, (19.99, 59.99));
    }

    #[test]
    fn from_empty_catalog_keeps_zero_bounds() {
        let filters = Filters::from_catalog(&[]);
        assert_eq!(filters.price_range, (0.0, 0.0));
    }

    #[test]
    fn result_preserves_input_order() {
        let catalog = sample_catalog();
        let filters = Filters::from_catalog(&catalog);

        let ids: Vec<_> = visible(&catalog, &filters, "")
            .iter()
            .map(|p| p.id.clone())
            .collect();
        assert_eq!(
            ids,
            [ProductId::new("1"), ProductId::new("2"), ProductId::new("3")]
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_product() -> impl Strategy<Value = Product> {
            (
                "[a-z0-9]{1,8}",
                "[A-Za-z ]{1,20}",
                0.0f64..200.0,
                prop_oneof![Just("Shirt"), Just("Skirt"), Just("Shoes")],
                prop_oneof![Just("Men"), Just("Women"), Just("Unisex")],
            )
                .prop_map(|(id, name, price, category, gender)| Product {
                    id: clothy_core::ProductId::new(id),
                    name,
                    price,
                    category: category.to_string(),
                    gender: gender.to_string(),
                    image_url: None,
                })
        }

        fn arb_filters() -> impl Strategy<Value = Filters> {
            (
                prop_oneof![Just(""), Just("Men"), Just("Women")],
                prop_oneof![Just(""), Just("Shirt"), Just("Shoes")],
                0.0f64..100.0,
                100.0f64..200.0,
            )
                .prop_map(|(gender, category, min, max)| Filters {
                    gender: gender.to_string(),
                    category: category.to_string(),
                    price_range: (min, max),
                })
        }

        proptest! {
            /// Property: filtering an already-filtered catalog changes
            /// nothing.
            #[test]
            fn filtering_is_idempotent(
                catalog in proptest::collection::vec(arb_product(), 0..24),
                filters in arb_filters(),
                search in "[a-zA-Z]{0,6}",
            ) {
                let once: Vec<Product> = visible(&catalog, &filters, &search)
                    .into_iter()
                    .cloned()
                    .collect();
                let twice: Vec<Product> = visible(&once, &filters, &search)
                    .into_iter()
                    .cloned()
                    .collect();
                prop_assert_eq!(once, twice);
            }

            /// Property: every admitted product satisfies all four
            /// predicates, and every excluded product violates at least one.
            #[test]
            fn admission_is_sound_and_complete(
                catalog in proptest::collection::vec(arb_product(), 0..24),
                filters in arb_filters(),
                search in "[a-zA-Z]{0,6}",
            ) {
                let shown = visible(&catalog, &filters, &search);
                let satisfies = |p: &Product| {
                    (filters.gender.is_empty() || p.gender == filters.gender)
                        && (filters.category.is_empty() || p.category == filters.category)
                        && p.price >= filters.price_range.0
                        && p.price <= filters.price_range.1
                        && (search.is_empty()
                            || p.name.to_lowercase().contains(&search.to_lowercase()))
                };

                for p in &shown {
                    prop_assert!(satisfies(p));
                }
                prop_assert_eq!(shown.len(), catalog.iter().filter(|p| satisfies(p)).count());
            }
        }
    }
}
