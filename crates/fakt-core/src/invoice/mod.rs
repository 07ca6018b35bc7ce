//! Invoice field normalization.

mod normalizer;
pub mod rules;

pub use normalizer::{full_text, normalize};
