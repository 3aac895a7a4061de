//! Pure transforms from the loaded datasets to what gets displayed.

pub mod filter;
pub mod grid;
pub mod page;
pub mod rank;
