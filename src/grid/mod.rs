//! Connectivity core: a weighted disjoint-set structure and the N×N
//! percolation model built on top of it.

pub mod dsu;
pub mod ids;
pub mod index_vec;
pub mod model;

pub use dsu::{DisjointSet, DsuError};
pub use ids::{ElementId, SiteId};
pub use model::{GridError, Percolation};
