//! Port traits shared between domain crates
//!
//! Cross-domain seams are defined here so that the billing domain can price
//! any cost-bearing entity without depending on the patient crate directly.
//! Each domain depends only on core_kernel; adapters meet at these traits.

use crate::money::Money;

/// An entity that carries a deterministic base cost
///
/// The billing engine prices implementors of this trait. The base cost must
/// be derived solely from the entity's immutable state, so repeated calls
/// always return the same amount.
pub trait CostBearer {
    /// Returns the name used when notifying subscribers about this entity
    fn display_name(&self) -> &str;

    /// Returns the base cost before any billing strategy is applied
    fn base_cost(&self) -> Money;
}
