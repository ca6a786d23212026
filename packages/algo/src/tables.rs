//! Symbol Feature Tables
//!
//! One lookup function per (category, axis) pair, mapping a symbol
//! identifier to its feature value on that axis. Tables are total over the
//! category's identifier range (consonants 1..=25, vowels 1..=15) and return
//! `None` outside it; the reducers treat that miss as an aborted axis.
//!
//! Identifier assignment follows the classic input chart:
//!
//! consonants: 1 p, 2 b, 3 m, 4 f, 5 v, 6 θ, 7 ð, 8 t, 9 d, 10 n, 11 s,
//! 12 z, 13 l, 14 r, 15 ʃ, 16 ʒ, 17 ʧ, 18 ʤ, 19 j, 20 k, 21 g, 22 ŋ,
//! 23 w, 24 ʔ, 25 h
//!
//! vowels: 1 i, 2 ɪ, 3 u, 4 ʊ, 5 e/ej, 6 ɛ, 7 ə, 8 ʌ, 9 o/ow, 10 ɔj,
//! 11 ɔ, 12 æ, 13 aj, 14 aw, 15 ɑ

use crate::types::{
    Backness, Height, Hier, Manner, Place, Roundedness, Tenseness, Voicing, VowelShape,
};

// ==================== Consonant Axes ====================

/// Place of articulation. w is treated as Labial with a Velar sub-place,
/// matching the chart convention rather than a plain Bilabial reading.
pub fn consonant_place(id: u8) -> Option<Hier<Place>> {
    match id {
        1..=3 => Some(Hier::refined(Place::Labial, Place::Bilabial)),
        4 | 5 => Some(Hier::refined(Place::Labial, Place::Labiodental)),
        6 | 7 => Some(Hier::new(Place::Dental)),
        8..=14 => Some(Hier::new(Place::Alveolar)),
        15..=18 => Some(Hier::new(Place::Alveopalatal)),
        19 => Some(Hier::new(Place::Palatal)),
        20..=22 => Some(Hier::new(Place::Velar)),
        23 => Some(Hier::refined(Place::Labial, Place::Velar)),
        24 | 25 => Some(Hier::new(Place::Glottal)),
        _ => None,
    }
}

/// Manner of articulation. The nasals carry Stop as their sub-manner so
/// that a nasal can still merge with the plain stops.
pub fn consonant_manner(id: u8) -> Option<Hier<Manner>> {
    match id {
        1 | 2 | 8 | 9 | 20 | 21 | 24 => Some(Hier::new(Manner::Stop)),
        3 | 10 | 22 => Some(Hier::refined(Manner::Nasal, Manner::Stop)),
        4..=7 | 11 | 12 | 15 | 16 | 25 => Some(Hier::new(Manner::Fricative)),
        17 | 18 => Some(Hier::new(Manner::Affricate)),
        13 | 14 => Some(Hier::new(Manner::Liquid)),
        19 | 23 => Some(Hier::new(Manner::Glide)),
        _ => None,
    }
}

pub fn consonant_voicing(id: u8) -> Option<Voicing> {
    match id {
        1 | 4 | 6 | 8 | 11 | 15 | 17 | 20 | 24 | 25 => Some(Voicing::Voiceless),
        2 | 3 | 5 | 7 | 9 | 10 | 12..=14 | 16 | 18 | 19 | 21..=23 => Some(Voicing::Voiced),
        _ => None,
    }
}

// ==================== Vowel Axes ====================

pub fn vowel_height(id: u8) -> Option<Height> {
    match id {
        1..=4 => Some(Height::High),
        5..=11 => Some(Height::Mid),
        12..=15 => Some(Height::Low),
        _ => None,
    }
}

pub fn vowel_backness(id: u8) -> Option<Backness> {
    match id {
        1 | 2 | 5 | 6 | 12 => Some(Backness::Front),
        7 | 8 | 13 | 14 => Some(Backness::Central),
        3 | 4 | 9..=11 | 15 => Some(Backness::Back),
        _ => None,
    }
}

pub fn vowel_tenseness(id: u8) -> Option<Tenseness> {
    match id {
        1 | 3 | 5 | 9 | 10 | 13..=15 => Some(Tenseness::Tensed),
        2 | 4 | 6..=8 | 11 | 12 => Some(Tenseness::Laxed),
        _ => None,
    }
}

pub fn vowel_roundedness(id: u8) -> Option<Roundedness> {
    match id {
        3 | 4 | 9..=11 => Some(Roundedness::Rounded),
        1 | 2 | 5..=8 | 12..=15 => Some(Roundedness::Unrounded),
        _ => None,
    }
}

/// Simple vowel vs. diphthong. ɔj, aj, aw are the major diphthongs; e/ej
/// and o/ow carry an off-glide only, so they refine to minor diphthongs.
pub fn vowel_shape(id: u8) -> Option<Hier<VowelShape>> {
    match id {
        1..=4 | 6..=8 | 11 | 12 | 15 => Some(Hier::new(VowelShape::Simple)),
        10 | 13 | 14 => Some(Hier::refined(VowelShape::Diphthong, VowelShape::MajorDiphthong)),
        5 | 9 => Some(Hier::refined(VowelShape::Diphthong, VowelShape::MinorDiphthong)),
        _ => None,
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CONSONANT_SYMBOLS, VOWEL_SYMBOLS};

    // ============ Totality over the identifier ranges ============

    #[test]
    fn test_consonant_tables_total_in_range() {
        for id in 1..=CONSONANT_SYMBOLS {
            assert!(consonant_place(id).is_some(), "place missing for {}", id);
            assert!(consonant_manner(id).is_some(), "manner missing for {}", id);
            assert!(consonant_voicing(id).is_some(), "voicing missing for {}", id);
        }
    }

    #[test]
    fn test_vowel_tables_total_in_range() {
        for id in 1..=VOWEL_SYMBOLS {
            assert!(vowel_height(id).is_some(), "height missing for {}", id);
            assert!(vowel_backness(id).is_some(), "backness missing for {}", id);
            assert!(vowel_tenseness(id).is_some(), "tenseness missing for {}", id);
            assert!(vowel_roundedness(id).is_some(), "roundedness missing for {}", id);
            assert!(vowel_shape(id).is_some(), "shape missing for {}", id);
        }
    }

    #[test]
    fn test_tables_reject_out_of_range() {
        for id in [0u8, CONSONANT_SYMBOLS + 1, 100, 255] {
            assert_eq!(consonant_place(id), None);
            assert_eq!(consonant_manner(id), None);
            assert_eq!(consonant_voicing(id), None);
        }
        for id in [0u8, VOWEL_SYMBOLS + 1, 100, 255] {
            assert_eq!(vowel_height(id), None);
            assert_eq!(vowel_backness(id), None);
            assert_eq!(vowel_tenseness(id), None);
            assert_eq!(vowel_roundedness(id), None);
            assert_eq!(vowel_shape(id), None);
        }
    }

    // ============ Spot checks against the chart ============

    #[test]
    fn test_place_spot_checks() {
        // p is a bilabial labial, f a labiodental labial
        assert_eq!(consonant_place(1), Some(Hier::refined(Place::Labial, Place::Bilabial)));
        assert_eq!(consonant_place(4), Some(Hier::refined(Place::Labial, Place::Labiodental)));
        // θ has no sub-place
        assert_eq!(consonant_place(6), Some(Hier::new(Place::Dental)));
        // w is labial-velar
        assert_eq!(consonant_place(23), Some(Hier::refined(Place::Labial, Place::Velar)));
        // ʔ and h are glottal
        assert_eq!(consonant_place(24), Some(Hier::new(Place::Glottal)));
        assert_eq!(consonant_place(25), Some(Hier::new(Place::Glottal)));
    }

    #[test]
    fn test_manner_spot_checks() {
        // m, n, ŋ are nasal stops
        for id in [3, 10, 22] {
            assert_eq!(consonant_manner(id), Some(Hier::refined(Manner::Nasal, Manner::Stop)));
        }
        // ʧ, ʤ are affricates; l, r liquids; j, w glides
        assert_eq!(consonant_manner(17), Some(Hier::new(Manner::Affricate)));
        assert_eq!(consonant_manner(13), Some(Hier::new(Manner::Liquid)));
        assert_eq!(consonant_manner(19), Some(Hier::new(Manner::Glide)));
        // h patterns as a fricative here
        assert_eq!(consonant_manner(25), Some(Hier::new(Manner::Fricative)));
    }

    #[test]
    fn test_voicing_partition() {
        let voiceless: Vec<u8> = (1..=CONSONANT_SYMBOLS)
            .filter(|&id| consonant_voicing(id) == Some(Voicing::Voiceless))
            .collect();
        assert_eq!(voiceless, vec![1, 4, 6, 8, 11, 15, 17, 20, 24, 25]);
    }

    #[test]
    fn test_vowel_spot_checks() {
        // i is a high front tensed unrounded simple vowel
        assert_eq!(vowel_height(1), Some(Height::High));
        assert_eq!(vowel_backness(1), Some(Backness::Front));
        assert_eq!(vowel_tenseness(1), Some(Tenseness::Tensed));
        assert_eq!(vowel_roundedness(1), Some(Roundedness::Unrounded));
        assert_eq!(vowel_shape(1), Some(Hier::new(VowelShape::Simple)));

        // ɔj is a rounded back major diphthong
        assert_eq!(vowel_backness(10), Some(Backness::Back));
        assert_eq!(vowel_roundedness(10), Some(Roundedness::Rounded));
        assert_eq!(
            vowel_shape(10),
            Some(Hier::refined(VowelShape::Diphthong, VowelShape::MajorDiphthong))
        );

        // e/ej is a minor diphthong
        assert_eq!(
            vowel_shape(5),
            Some(Hier::refined(VowelShape::Diphthong, VowelShape::MinorDiphthong))
        );
    }
}
