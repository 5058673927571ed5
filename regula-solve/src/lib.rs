//! False-position (regula falsi) root finding for real functions of
//! one variable.
//!
//! Two components compose sequentially: [`bracket::find`] locates an
//! initial sign-changing interval around a seed point, and
//! [`falsi::solve`] runs the false-position iteration within a given
//! bracket, returning the root estimate together with the full
//! iteration trace.

pub mod bracket;
pub mod falsi;
