//! # Syntax Tour
//!
//! An interactive, menu-driven tour of Rust syntax. Each topic prints
//! annotated code samples next to the live output of the same code.
//!
//! Run the `tour` executable and pick a topic by number. `0` leaves the
//! tour, and so does closing standard input.
//! ```text
//!    1. Variables              2. Constants
//!    3. Data Types             4. Arrays
//!   ...
//!    0. Exit Tutorial
//! ```
//!
//! Set `RUST_LOG=debug` to trace dispatch decisions on stderr.

pub mod menu;
pub mod term;
pub mod topics;
