//! Multi-hop swap routing.
//!
//! [`SwapRouter`] chains pools from a [`PoolRegistry`](crate::registry::PoolRegistry)
//! along an asset path and executes the whole path atomically.

mod swap_router;

pub use swap_router::{ExactInRoute, ExactOutRoute, SwapRouter};
