//! Customer orders keyed by product.
//!
//! An [`Order`] maps product keys to requested quantities. Construction
//! validates every quantity so downstream cost arithmetic never sees a
//! negative or non-finite value.

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors returned by [`Order::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    /// A product key was empty or whitespace.
    #[error("product keys must not be blank")]
    EmptyProductKey,
    /// A quantity was below zero.
    #[error("quantity {quantity} for product {product:?} is negative")]
    NegativeQuantity {
        /// Offending product key.
        product: String,
        /// Value supplied by the caller.
        quantity: f64,
    },
    /// A quantity was NaN or infinite.
    #[error("quantity for product {product:?} is not a finite number")]
    NonFiniteQuantity {
        /// Offending product key.
        product: String,
    },
}

/// Requested quantities keyed by product.
///
/// Products absent from the order are treated as a quantity of zero.
///
/// # Examples
/// ```
/// use hubroute_core::Order;
///
/// # fn main() -> Result<(), hubroute_core::OrderError> {
/// let order = Order::new([("A", 2.0), ("D", 0.0)])?;
/// assert_eq!(order.quantity("A"), 2.0);
/// assert_eq!(order.quantity("Z"), 0.0);
/// assert!(!order.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "BTreeMap<String, f64>",
        into = "BTreeMap<String, f64>"
    )
)]
pub struct Order {
    quantities: BTreeMap<String, f64>,
}

impl Order {
    /// Validate and construct an [`Order`].
    ///
    /// Later entries for a repeated product replace earlier ones.
    ///
    /// # Errors
    /// Returns [`OrderError`] when a product key is blank or a quantity is
    /// negative, NaN or infinite.
    pub fn new<I, K>(entries: I) -> Result<Self, OrderError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let mut quantities = BTreeMap::new();
        for (key, quantity) in entries {
            let product: String = key.into();
            if product.trim().is_empty() {
                return Err(OrderError::EmptyProductKey);
            }
            if !quantity.is_finite() {
                return Err(OrderError::NonFiniteQuantity { product });
            }
            if quantity < 0.0 {
                return Err(OrderError::NegativeQuantity { product, quantity });
            }
            quantities.insert(product, quantity);
        }
        Ok(Self { quantities })
    }

    /// An order requesting nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Requested quantity for `product`, zero when absent.
    #[must_use]
    pub fn quantity(&self, product: &str) -> f64 {
        self.quantities.get(product).copied().unwrap_or(0.0)
    }

    /// Return `true` when `product` has a positive requested quantity.
    #[must_use]
    pub fn requests(&self, product: &str) -> bool {
        self.quantity(product) > 0.0
    }

    /// Products with a positive quantity, in key order.
    pub fn requested_products(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.quantities
            .iter()
            .filter(|(_, quantity)| **quantity > 0.0)
            .map(|(product, quantity)| (product.as_str(), *quantity))
    }

    /// Return `true` when no product has a positive quantity.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requested_products().next().is_none()
    }
}

impl TryFrom<BTreeMap<String, f64>> for Order {
    type Error = OrderError;

    fn try_from(value: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Order> for BTreeMap<String, f64> {
    fn from(value: Order) -> Self {
        value.quantities
    }
}
