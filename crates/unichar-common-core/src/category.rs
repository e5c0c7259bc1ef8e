//! Unicode general category.

use num_enum::TryFromPrimitive;

/// General category of a code point.
///
/// The ordinals are fixed and externally visible (`Category::value`), so
/// the numbering must not change. The letter categories are contiguous:
/// a category is a letter iff it lies in
/// `UppercaseLetter..=OtherLetter`. Ordinal 17 is unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Category {
    Unassigned = 0,
    UppercaseLetter = 1,
    LowercaseLetter = 2,
    TitlecaseLetter = 3,
    ModifierLetter = 4,
    OtherLetter = 5,
    NonSpacingMark = 6,
    EnclosingMark = 7,
    CombiningSpacingMark = 8,
    DecimalDigitNumber = 9,
    LetterNumber = 10,
    OtherNumber = 11,
    SpaceSeparator = 12,
    LineSeparator = 13,
    ParagraphSeparator = 14,
    Control = 15,
    Format = 16,
    PrivateUse = 18,
    Surrogate = 19,
    DashPunctuation = 20,
    StartPunctuation = 21,
    EndPunctuation = 22,
    ConnectorPunctuation = 23,
    OtherPunctuation = 24,
    MathSymbol = 25,
    CurrencySymbol = 26,
    ModifierSymbol = 27,
    OtherSymbol = 28,
    InitialQuotePunctuation = 29,
    FinalQuotePunctuation = 30,
}

impl Category {
    /// Create a Category from its u8 representation.
    /// Unknown ordinals map to `Unassigned`.
    #[inline]
    pub fn from_u8(v: u8) -> Self {
        Self::try_from(v).unwrap_or(Category::Unassigned)
    }

    /// Ordinal value of this category.
    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Is this one of the five letter categories?
    #[inline]
    pub fn is_letter(self) -> bool {
        (Self::UppercaseLetter..=Self::OtherLetter).contains(&self)
    }

    /// Two-letter abbreviation as used in the Unicode character database.
    pub fn code(self) -> &'static str {
        match self {
            Self::Unassigned => "Cn",
            Self::UppercaseLetter => "Lu",
            Self::LowercaseLetter => "Ll",
            Self::TitlecaseLetter => "Lt",
            Self::ModifierLetter => "Lm",
            Self::OtherLetter => "Lo",
            Self::NonSpacingMark => "Mn",
            Self::EnclosingMark => "Me",
            Self::CombiningSpacingMark => "Mc",
            Self::DecimalDigitNumber => "Nd",
            Self::LetterNumber => "Nl",
            Self::OtherNumber => "No",
            Self::SpaceSeparator => "Zs",
            Self::LineSeparator => "Zl",
            Self::ParagraphSeparator => "Zp",
            Self::Control => "Cc",
            Self::Format => "Cf",
            Self::PrivateUse => "Co",
            Self::Surrogate => "Cs",
            Self::DashPunctuation => "Pd",
            Self::StartPunctuation => "Ps",
            Self::EndPunctuation => "Pe",
            Self::ConnectorPunctuation => "Pc",
            Self::OtherPunctuation => "Po",
            Self::MathSymbol => "Sm",
            Self::CurrencySymbol => "Sc",
            Self::ModifierSymbol => "Sk",
            Self::OtherSymbol => "So",
            Self::InitialQuotePunctuation => "Pi",
            Self::FinalQuotePunctuation => "Pf",
        }
    }
}
