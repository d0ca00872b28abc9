//! txview
//!
//! Derived-state view engine for a transactions table: free-text filter,
//! click-to-toggle column sort, and paginated display with a sliding page
//! window.
//!
//! Pure Core / Impure Shell:
//! - [`model`], [`pipeline`], [`state`]: pure types and transforms
//! - [`parser`], [`source`]: record loading at the boundary
//! - [`view`]: text rendering
//! - [`config`], [`logging`]: process setup for the binary

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;
