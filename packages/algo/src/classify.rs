//! Classification Entry Points
//!
//! Runs every axis of the selected category over one symbol sequence. Axes
//! are independent: each one re-scans the slice with its own table, so an
//! out-of-range identifier (or a mismatch) nulls out exactly the axes that
//! encounter it and nothing else.

use crate::reduce::{reduce_flat, reduce_hierarchical};
use crate::tables;
use crate::types::{AxisResults, Category, ConsonantFeatures, VowelFeatures};

/// Evaluate Place, Manner and Voicing over a consonant sequence.
pub fn classify_consonants(symbols: &[u8]) -> ConsonantFeatures {
    ConsonantFeatures {
        place: reduce_hierarchical(symbols, tables::consonant_place),
        manner: reduce_hierarchical(symbols, tables::consonant_manner),
        voicing: reduce_flat(symbols, tables::consonant_voicing),
    }
}

/// Evaluate Height, Backness, Tenseness, Roundedness and Shape over a
/// vowel sequence.
pub fn classify_vowels(symbols: &[u8]) -> VowelFeatures {
    VowelFeatures {
        height: reduce_flat(symbols, tables::vowel_height),
        backness: reduce_flat(symbols, tables::vowel_backness),
        tenseness: reduce_flat(symbols, tables::vowel_tenseness),
        roundedness: reduce_flat(symbols, tables::vowel_roundedness),
        shape: reduce_hierarchical(symbols, tables::vowel_shape),
    }
}

/// Evaluate every axis of `category` over `symbols`.
///
/// Total over its input domain: any slice (including an empty one, or one
/// holding identifiers outside the category's range) yields a result, with
/// unresolvable axes reported as `None`.
pub fn classify(category: Category, symbols: &[u8]) -> AxisResults {
    match category {
        Category::Consonant => AxisResults::Consonant(classify_consonants(symbols)),
        Category::Vowel => AxisResults::Vowel(classify_vowels(symbols)),
    }
}
