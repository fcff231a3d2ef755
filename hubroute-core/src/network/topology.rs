//! Warehouses, their stock, and the hub.

use std::collections::{BTreeMap, BTreeSet};

use crate::{CenterId, Order};

use super::error::NetworkError;

/// The hub together with the product keys each warehouse can supply.
///
/// Stock lists may overlap between warehouses. Iteration follows identifier
/// order, so every query on a topology is deterministic.
///
/// # Examples
/// ```
/// use std::collections::{BTreeMap, BTreeSet};
/// use hubroute_core::{CenterId, Order, Topology};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut warehouses = BTreeMap::new();
/// warehouses.insert(CenterId::from("C1"), BTreeSet::from(["A".to_owned()]));
/// warehouses.insert(CenterId::from("C2"), BTreeSet::from(["D".to_owned()]));
/// let topology = Topology::new(CenterId::from("L1"), warehouses)?;
///
/// let order = Order::new([("D", 1.0)])?;
/// assert_eq!(topology.required_centers(&order), vec![CenterId::from("C2")]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    hub: CenterId,
    warehouses: BTreeMap<CenterId, BTreeSet<String>>,
}

impl Topology {
    /// Validate and construct a [`Topology`].
    ///
    /// # Errors
    /// Returns [`NetworkError`] when identifiers or product keys are blank,
    /// no warehouse is configured, or the hub doubles as a warehouse.
    pub fn new(
        hub: CenterId,
        warehouses: BTreeMap<CenterId, BTreeSet<String>>,
    ) -> Result<Self, NetworkError> {
        if hub.is_blank() {
            return Err(NetworkError::BlankHub);
        }
        if warehouses.is_empty() {
            return Err(NetworkError::NoWarehouses);
        }
        if warehouses.contains_key(&hub) {
            return Err(NetworkError::HubIsWarehouse { hub });
        }
        for (warehouse, stock) in &warehouses {
            if warehouse.is_blank() {
                return Err(NetworkError::BlankWarehouse);
            }
            if stock.iter().any(|product| product.trim().is_empty()) {
                return Err(NetworkError::BlankProduct {
                    warehouse: warehouse.clone(),
                });
            }
        }
        Ok(Self { hub, warehouses })
    }

    /// The delivery hub.
    #[must_use]
    pub const fn hub(&self) -> &CenterId {
        &self.hub
    }

    /// Return `true` when `center` is the hub.
    #[must_use]
    pub fn is_hub(&self, center: &CenterId) -> bool {
        *center == self.hub
    }

    /// Return `true` when `center` is a configured warehouse.
    #[must_use]
    pub fn is_warehouse(&self, center: &CenterId) -> bool {
        self.warehouses.contains_key(center)
    }

    /// Return `true` when `center` is the hub or a warehouse.
    #[must_use]
    pub fn contains(&self, center: &CenterId) -> bool {
        self.is_hub(center) || self.is_warehouse(center)
    }

    /// Configured warehouses with their stock, in identifier order.
    pub fn warehouses(&self) -> impl Iterator<Item = (&CenterId, &BTreeSet<String>)> + '_ {
        self.warehouses.iter()
    }

    /// Products stocked by `warehouse`, or `None` for unknown centers.
    #[must_use]
    pub fn stock(&self, warehouse: &CenterId) -> Option<&BTreeSet<String>> {
        self.warehouses.get(warehouse)
    }

    /// Return `true` when any warehouse stocks `product`.
    #[must_use]
    pub fn stocks(&self, product: &str) -> bool {
        self.warehouses.values().any(|stock| stock.contains(product))
    }

    /// Warehouses stocking at least one product requested in `order`.
    ///
    /// The result is sorted by identifier.
    #[must_use]
    pub fn required_centers(&self, order: &Order) -> Vec<CenterId> {
        self.warehouses
            .iter()
            .filter(|(_, stock)| stock.iter().any(|product| order.requests(product)))
            .map(|(warehouse, _)| warehouse.clone())
            .collect()
    }

    /// First requested product, in key order, that no warehouse stocks.
    #[must_use]
    pub fn unstocked_product<'o>(&self, order: &'o Order) -> Option<&'o str> {
        order
            .requested_products()
            .map(|(product, _)| product)
            .find(|product| !self.stocks(product))
    }
}
