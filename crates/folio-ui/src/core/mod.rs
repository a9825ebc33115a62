//! Core, DOM-free primitives and helpers for the portfolio UI.
pub mod breakpoints;
pub mod error;
pub mod responsive;
pub mod scales;
pub mod theme;
