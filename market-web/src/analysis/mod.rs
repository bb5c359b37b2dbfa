//! Pure derived computations over already-fetched data.

pub mod advice;
pub mod trends;
pub mod weather;
