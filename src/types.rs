//! Core types for spark-passcode.
//!
//! These are the shared vocabulary of the coordinator, the field interpreters
//! and any rendering host: the character class applied to every field, the
//! alphabet bitflags it resolves to, and the focus cursor.

// =============================================================================
// Focus Cursor
// =============================================================================

/// Index of the field that should hold input focus, or `None`.
///
/// The cursor is advisory. It may point one past the last field after the
/// last character is typed; hosts find no field there and leave focus alone.
pub type FocusCursor = Option<usize>;

// =============================================================================
// Alphabet (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// ASCII character groups a field may accept.
    ///
    /// Combine with bitwise OR: `Alphabet::DIGIT | Alphabet::LETTER`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Alphabet: u8 {
        /// `0-9`
        const DIGIT = 1 << 0;
        /// `A-Z` and `a-z`
        const LETTER = 1 << 1;
    }
}

impl Alphabet {
    /// Whether `c` belongs to any group in this alphabet.
    pub fn contains_char(self, c: char) -> bool {
        (self.contains(Alphabet::DIGIT) && c.is_ascii_digit())
            || (self.contains(Alphabet::LETTER) && c.is_ascii_alphabetic())
    }
}

// =============================================================================
// Character Class
// =============================================================================

/// Allowed-character policy, applied uniformly to every field of a passcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CharacterClass {
    /// Anything goes.
    #[default]
    Unrestricted,
    /// `[0-9]`
    Digit,
    /// `[A-Za-z]`
    Letter,
    /// `[A-Za-z0-9]`
    Alphanumeric,
}

impl CharacterClass {
    /// The alphabet this class restricts to, or `None` when unrestricted.
    pub fn alphabet(self) -> Option<Alphabet> {
        match self {
            CharacterClass::Unrestricted => None,
            CharacterClass::Digit => Some(Alphabet::DIGIT),
            CharacterClass::Letter => Some(Alphabet::LETTER),
            CharacterClass::Alphanumeric => Some(Alphabet::DIGIT | Alphabet::LETTER),
        }
    }

    /// Whether this class restricts input at all.
    pub fn is_restricted(self) -> bool {
        self.alphabet().is_some()
    }

    /// HTML `pattern` attribute for a single field of this class.
    pub fn pattern(self) -> Option<&'static str> {
        match self {
            CharacterClass::Unrestricted => None,
            CharacterClass::Digit => Some("[0-9]"),
            CharacterClass::Letter => Some("[a-zA-Z]"),
            CharacterClass::Alphanumeric => Some("[a-zA-Z0-9]"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
