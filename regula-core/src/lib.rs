//! Core traits for the regula root-finding crates.
//!
//! This crate defines the shared abstractions that solvers and their
//! callers build on:
//!
//! - [`RealFn`] — a real-valued function of one real variable
//! - [`Observer`] — receives solver events and optionally returns
//!   control actions
//!
//! Expression parsers, prompt loops, and other front ends supply a
//! [`RealFn`] and consume solver output; they never need the solver
//! crates' internals.

mod function;
mod observer;

pub use function::RealFn;
pub use observer::Observer;
