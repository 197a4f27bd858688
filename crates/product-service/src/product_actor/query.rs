//! Derived queries over products.
//!
//! The store only knows how to run a predicate. This module is where query
//! shapes live: each [`ProductQuery`] variant is one "find by" condition, and
//! `And` / `Or` combine them.

use crate::model::Product;

/// A condition over a [`Product`].
#[derive(Debug, Clone, PartialEq)]
pub enum ProductQuery {
    /// Matches every product.
    All,
    /// Exact, case-sensitive name match.
    NameEquals(String),
    /// Case-insensitive substring match on the name.
    NameContains(String),
    /// `price < limit`
    PriceBelow(f64),
    /// `price > limit`
    PriceAbove(f64),
    /// `min <= price <= max`
    PriceBetween { min: f64, max: f64 },
    /// `quantity > limit`
    QuantityAbove(u32),
    And(Box<ProductQuery>, Box<ProductQuery>),
    Or(Box<ProductQuery>, Box<ProductQuery>),
}

impl ProductQuery {
    pub fn and(self, other: ProductQuery) -> ProductQuery {
        ProductQuery::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: ProductQuery) -> ProductQuery {
        ProductQuery::Or(Box::new(self), Box::new(other))
    }

    /// Conjunction of every query in `parts`; `All` when there are none.
    pub fn all_of(parts: impl IntoIterator<Item = ProductQuery>) -> ProductQuery {
        parts
            .into_iter()
            .reduce(ProductQuery::and)
            .unwrap_or(ProductQuery::All)
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ProductQuery::All => true,
            ProductQuery::NameEquals(name) => product.name == *name,
            ProductQuery::NameContains(fragment) => product
                .name
                .to_lowercase()
                .contains(&fragment.to_lowercase()),
            ProductQuery::PriceBelow(limit) => product.price < *limit,
            ProductQuery::PriceAbove(limit) => product.price > *limit,
            ProductQuery::PriceBetween { min, max } => {
                product.price >= *min && product.price <= *max
            }
            ProductQuery::QuantityAbove(limit) => product.quantity > *limit,
            ProductQuery::And(left, right) => left.matches(product) && right.matches(product),
            ProductQuery::Or(left, right) => left.matches(product) || right.matches(product),
        }
    }

    /// Turns the query into a predicate the store can run.
    pub fn into_predicate(self) -> impl Fn(&Product) -> bool + Send + 'static {
        move |product: &Product| self.matches(product)
    }
}
