//! Lunar return search engine.
//!
//! This crate provides:
//! - The return locator: coarse scan + bisection on the wrap-aware
//!   delta between the Moon's longitude and a natal target
//! - Cycle search: a return and the next one closing it, giving the
//!   validity window of a monthly forecast

pub mod error;
pub mod lunar_return;
pub mod types;

pub use error::SearchError;
pub use lunar_return::{find_cycle, find_return};
pub use types::{LunarReturn, ReturnConfig, ReturnCycle};
