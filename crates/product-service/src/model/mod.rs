//! Pure data structures: the stored [`Product`] and the drafts that create or replace it.

pub mod product;

pub use product::*;
