//! High-level operations on the numbers.

pub mod consts;
mod pow;
mod sqrt;
