//! Common Types and Constants
//!
//! Shared data structures used across the feature tables and reducers.

use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Number of consonant symbols (identifiers 1..=25: p b m f v θ ð t d n s z
/// l r ʃ ʒ ʧ ʤ j k g ŋ w ʔ h)
pub const CONSONANT_SYMBOLS: u8 = 25;

/// Number of vowel symbols (identifiers 1..=15: i ɪ u ʊ e/ej ɛ ə ʌ o/ow ɔj
/// ɔ æ aj aw ɑ)
pub const VOWEL_SYMBOLS: u8 = 15;

/// Historical input limit of the comparison prompt. The engine itself
/// accepts slices of any length; drivers enforce this bound.
pub const MAX_SEQUENCE: usize = 7;

// ==================== Category ====================

/// Symbol category; identifiers are scoped to one category and the axis set
/// is determined by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Consonant,
    Vowel,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Consonant => "consonant",
            Self::Vowel => "vowel",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "consonant" => Some(Self::Consonant),
            "vowel" => Some(Self::Vowel),
            _ => None,
        }
    }

    /// Largest valid symbol identifier for this category.
    pub fn symbol_limit(&self) -> u8 {
        match self {
            Self::Consonant => CONSONANT_SYMBOLS,
            Self::Vowel => VOWEL_SYMBOLS,
        }
    }
}

// ==================== Flat Axis Labels ====================

/// Consonant voicing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Voicing {
    Voiced,
    Voiceless,
}

impl Voicing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Voiced => "Voiced",
            Self::Voiceless => "Voiceless",
        }
    }
}

/// Height of the tongue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Height {
    High,
    Mid,
    Low,
}

impl Height {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Mid => "Mid",
            Self::Low => "Low",
        }
    }
}

/// Backness of the tongue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Backness {
    Front,
    Central,
    Back,
}

impl Backness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Front => "Front",
            Self::Central => "Central",
            Self::Back => "Back",
        }
    }
}

/// Tenseness of the vocal tract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tenseness {
    Tensed,
    Laxed,
}

impl Tenseness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tensed => "Tensed",
            Self::Laxed => "Laxed",
        }
    }
}

/// Roundedness of the lips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Roundedness {
    Rounded,
    Unrounded,
}

impl Roundedness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rounded => "Rounded",
            Self::Unrounded => "Unrounded",
        }
    }
}

// ==================== Hierarchical Axis Labels ====================

/// Place of articulation. General and specific labels share one namespace:
/// a specific label can be promoted to general position while merging
/// (e.g. Velar is the sub-place of w but the place of k, g, ŋ).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Place {
    Labial,
    Bilabial,
    Labiodental,
    Dental,
    Alveolar,
    Alveopalatal,
    Palatal,
    Velar,
    Glottal,
}

impl Place {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Labial => "Labial",
            Self::Bilabial => "Bilabial",
            Self::Labiodental => "Labiodental",
            Self::Dental => "Dental",
            Self::Alveolar => "Alveolar",
            Self::Alveopalatal => "Alveopalatal",
            Self::Palatal => "Palatal",
            Self::Velar => "Velar",
            Self::Glottal => "Glottal",
        }
    }
}

/// Manner of articulation. Stop doubles as the sub-manner of the nasals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Manner {
    Stop,
    Nasal,
    Fricative,
    Affricate,
    Liquid,
    Glide,
}

impl Manner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stop => "Stop",
            Self::Nasal => "Nasal",
            Self::Fricative => "Fricative",
            Self::Affricate => "Affricate",
            Self::Liquid => "Liquid",
            Self::Glide => "Glide",
        }
    }
}

/// Simple vowel vs. diphthong, with the diphthongs split into major and
/// minor subclasses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VowelShape {
    Simple,
    Diphthong,
    MajorDiphthong,
    MinorDiphthong,
}

impl VowelShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "Simple Vowel",
            Self::Diphthong => "Diphthong",
            Self::MajorDiphthong => "Major Diphthong",
            Self::MinorDiphthong => "Minor Diphthong",
        }
    }
}

// ==================== Hierarchical Value ====================

/// A two-level feature value: a general label with an optional specific
/// refinement. `specific == None` means the general label is already the
/// finest classification for that symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hier<L> {
    pub general: L,
    pub specific: Option<L>,
}

impl<L> Hier<L> {
    pub fn new(general: L) -> Self {
        Self {
            general,
            specific: None,
        }
    }

    pub fn refined(general: L, specific: L) -> Self {
        Self {
            general,
            specific: Some(specific),
        }
    }
}

// ==================== Axis Results ====================

/// Per-axis outcome for a consonant sequence. `None` on an axis means the
/// symbols share no common value there (or an identifier was out of range
/// while that axis scanned it). It never means "axis not evaluated"; the
/// vowel axes simply do not appear on this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsonantFeatures {
    pub place: Option<Place>,
    pub manner: Option<Manner>,
    pub voicing: Option<Voicing>,
}

/// Per-axis outcome for a vowel sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VowelFeatures {
    pub height: Option<Height>,
    pub backness: Option<Backness>,
    pub tenseness: Option<Tenseness>,
    pub roundedness: Option<Roundedness>,
    pub shape: Option<VowelShape>,
}

/// Result of one classification call, tagged by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum AxisResults {
    Consonant(ConsonantFeatures),
    Vowel(VowelFeatures),
}

// ==================== Tests ====================
