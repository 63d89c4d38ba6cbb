//! Grove - theme components and link tooling for a markdown digital garden.
//!
//! The crate has two halves:
//!
//! - [`component`]: the page title renderer (logo linking back to the site
//!   root from any page depth) and the component stylesheet bundle
//! - [`check`]: a link health checker for the garden's markdown sources,
//!   with fuzzy suggestions and optional fixing
//!
//! [`cli`] wires both into the `grove` binary.

pub mod logger;

pub mod asset;
pub mod check;
pub mod cli;
pub mod component;
pub mod config;
pub mod utils;
