//! Motion primitives
//!
//! - `easing`: named curves remapping normalized progress
//! - `interpolate`: scalar, vector and whole-pose lerp
//! - `library`: the catalog of named pose generators

pub mod easing;
pub mod interpolate;
pub mod library;

pub use easing::Easing;
pub use interpolate::{lerp, lerp_pose};
