use thiserror::Error;

use crate::CenterId;

/// Errors raised while validating a [`crate::Network`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    /// The hub identifier was empty or whitespace.
    #[error("hub identifier must not be blank")]
    BlankHub,
    /// A warehouse identifier was empty or whitespace.
    #[error("warehouse identifiers must not be blank")]
    BlankWarehouse,
    /// A warehouse listed an empty or whitespace product key.
    #[error("warehouse {warehouse} lists a blank product key")]
    BlankProduct {
        /// Warehouse whose stock list is malformed.
        warehouse: CenterId,
    },
    /// The hub was also configured as a warehouse.
    #[error("hub {hub} must not also be a warehouse")]
    HubIsWarehouse {
        /// Conflicting identifier.
        hub: CenterId,
    },
    /// No warehouses were configured.
    #[error("at least one warehouse is required")]
    NoWarehouses,
    /// A distance entry referenced a center that is neither hub nor warehouse.
    #[error("distance table references unknown center {center}")]
    UnknownCenter {
        /// Unrecognised identifier.
        center: CenterId,
    },
    /// A distance was negative, NaN or infinite.
    #[error("distance from {from} to {to} must be finite and non-negative, got {distance}")]
    InvalidDistance {
        /// Leg origin.
        from: CenterId,
        /// Leg destination.
        to: CenterId,
        /// Configured value.
        distance: f64,
    },
    /// A cost coefficient was negative, NaN or infinite.
    #[error("rate {name} must be finite and non-negative, got {value}")]
    InvalidRate {
        /// Coefficient name as it appears in configuration.
        name: &'static str,
        /// Configured value.
        value: f64,
    },
}
