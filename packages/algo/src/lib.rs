//! # phonofeat-algo - Phonetic common feature engine
//!
//! Pure Rust implementation of the English consonant/vowel common feature
//! finder:
//!
//! - **Feature tables** - symbol identifier to feature value, per axis
//! - **Flat reducer** - single-level consensus fold (voicing, height,
//!   backness, tenseness, roundedness)
//! - **Hierarchical reducer** - two-level general/specific fold (place,
//!   manner, simple-vowel/diphthong)
//!
//! ## Design goals
//!
//! - **No I/O** - the engine returns structured data; prompting and
//!   printing belong to the driver
//! - **Total** - every failure mode (out-of-range identifier, feature
//!   mismatch, incompatible hierarchy levels) is a `None` axis outcome,
//!   never a panic or error
//! - **Stateless** - each axis evaluation owns its local consensus and
//!   reads immutable tables; classifying twice gives identical results
//!
//! ## Module structure
//!
//! - [`types`] - categories, axis labels, hierarchical values, results
//! - [`tables`] - per-(category, axis) symbol feature tables
//! - [`reduce`] - the two consensus reducers
//! - [`classify`] - per-category entry points
//!
//! ## Usage
//!
//! ```rust
//! use phonofeat_algo::{classify_consonants, Place, Voicing};
//!
//! // p (1) and f (4): different sub-places, both labial, both voiceless.
//! let features = classify_consonants(&[1, 4]);
//! assert_eq!(features.place, Some(Place::Labial));
//! assert_eq!(features.voicing, Some(Voicing::Voiceless));
//! ```

// ============================================================================
// Module declarations
// ============================================================================

pub mod classify;
pub mod reduce;
pub mod tables;
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

pub use classify::{classify, classify_consonants, classify_vowels};
pub use reduce::{reduce_flat, reduce_hierarchical};
pub use types::*;
