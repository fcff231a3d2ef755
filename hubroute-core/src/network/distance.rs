//! Directed leg distances between centers.

use std::collections::BTreeMap;

use crate::CenterId;

/// Directed distances between centers, in kilometres.
///
/// The table is neither assumed symmetric nor complete. A missing entry means
/// there is no direct leg. A leg from a center to itself is zero unless the
/// table configures it explicitly, which gives the trailing hub-to-hub leg of
/// a single-trip route a defined cost.
///
/// # Examples
/// ```
/// use hubroute_core::{CenterId, DistanceTable};
///
/// let c1 = CenterId::from("C1");
/// let hub = CenterId::from("L1");
/// let table = DistanceTable::new().with_leg(c1.clone(), hub.clone(), 10.0);
///
/// assert_eq!(table.get(&c1, &hub), Some(10.0));
/// assert_eq!(table.get(&hub, &c1), None);
/// assert_eq!(table.get(&hub, &hub), Some(0.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistanceTable {
    legs: BTreeMap<CenterId, BTreeMap<CenterId, f64>>,
}

impl DistanceTable {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            legs: BTreeMap::new(),
        }
    }

    /// Add or replace the leg `from -> to`.
    #[must_use]
    pub fn with_leg(mut self, from: CenterId, to: CenterId, distance: f64) -> Self {
        self.insert(from, to, distance);
        self
    }

    /// Add or replace both `a -> b` and `b -> a`.
    #[must_use]
    pub fn with_symmetric_leg(self, a: CenterId, b: CenterId, distance: f64) -> Self {
        self.with_leg(a.clone(), b.clone(), distance)
            .with_leg(b, a, distance)
    }

    /// Add or replace the leg `from -> to` in place.
    pub fn insert(&mut self, from: CenterId, to: CenterId, distance: f64) {
        self.legs.entry(from).or_default().insert(to, distance);
    }

    /// Distance of the leg `from -> to`, if one exists.
    #[must_use]
    pub fn get(&self, from: &CenterId, to: &CenterId) -> Option<f64> {
        self.legs
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .or_else(|| (from == to).then_some(0.0))
    }

    /// Every configured leg as `(from, to, distance)`.
    pub fn legs(&self) -> impl Iterator<Item = (&CenterId, &CenterId, f64)> + '_ {
        self.legs
            .iter()
            .flat_map(|(from, row)| row.iter().map(move |(to, distance)| (from, to, *distance)))
    }

    /// Number of configured legs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.legs.values().map(BTreeMap::len).sum()
    }

    /// Return `true` when no leg is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return `true` when every configured leg has an equal reverse leg.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.legs()
            .all(|(from, to, distance)| self.get(to, from) == Some(distance))
    }
}
