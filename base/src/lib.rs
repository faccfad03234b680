#![warn(missing_debug_implementations)]
//! Leaf primitives shared by `fxplot` and its surfaces:
//! color resolution and 2D geometry.

pub mod color;
pub mod geom;

pub use color::{ColorSpec, Rgba};
