//! Candidate delivery routes.
//!
//! A route is an ordered list of stops finishing at the hub. Every hub
//! occurrence is an unload event.

use thiserror::Error;

use crate::CenterId;

/// Errors returned by [`Route::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No stops were supplied.
    #[error("route must contain at least one stop")]
    Empty,
    /// The final stop was not the hub.
    #[error("route must finish at hub {hub}, found {last}")]
    MissingFinalHub {
        /// Hub the route was expected to reach.
        hub: CenterId,
        /// Actual final stop.
        last: CenterId,
    },
}

/// An ordered sequence of stops that ends at the hub.
///
/// # Examples
/// ```
/// use hubroute_core::{CenterId, Route};
///
/// # fn main() -> Result<(), hubroute_core::RouteError> {
/// let hub = CenterId::from("L1");
/// let route = Route::new(vec!["C1".into(), "L1".into(), "C2".into(), "L1".into()], &hub)?;
/// assert_eq!(route.len(), 4);
/// assert_eq!(route.unload_count(&hub), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Route {
    stops: Vec<CenterId>,
}

impl Route {
    /// Validate and construct a [`Route`] ending at `hub`.
    ///
    /// # Errors
    /// Returns [`RouteError::Empty`] for an empty stop list and
    /// [`RouteError::MissingFinalHub`] when the last stop is not `hub`.
    pub fn new(stops: Vec<CenterId>, hub: &CenterId) -> Result<Self, RouteError> {
        let Some(last) = stops.last() else {
            return Err(RouteError::Empty);
        };
        if last != hub {
            return Err(RouteError::MissingFinalHub {
                hub: hub.clone(),
                last: last.clone(),
            });
        }
        Ok(Self { stops })
    }

    /// Stops in visiting order.
    #[must_use]
    pub fn stops(&self) -> &[CenterId] {
        &self.stops
    }

    /// Number of stops, counting every hub visit.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always `false`; a validated route has at least one stop.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Number of times the route unloads at `hub`.
    #[must_use]
    pub fn unload_count(&self, hub: &CenterId) -> usize {
        self.stops.iter().filter(|stop| *stop == hub).count()
    }

    /// Iterate over the directed legs of the route.
    pub fn legs(&self) -> impl Iterator<Item = (&CenterId, &CenterId)> + '_ {
        self.stops.windows(2).filter_map(|pair| match pair {
            [from, to] => Some((from, to)),
            _ => None,
        })
    }
}
