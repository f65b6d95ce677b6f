//! Contains the implementation of the wait-free [disjoint-sets/union-find].
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure

mod early;
mod find;
pub mod forest;
pub mod node;
pub mod unions;
