// Core declension types: harmony classes, the six cases, and inflected forms.
//
// The type hierarchy is:
// - `Harmony`: hard/soft vowel class of a word, or unset when it has no vowel
// - `Septik`: one of the six cases handled here, with numeric code 1..=6
// - `Declined`: a word with one case suffix attached
// - `Paradigm`: all six declined forms of one word
//
// `Declined` and `Paradigm` serialize to JSON for the `septik --format json`
// output. `Septik` and `Harmony` serialize as lowercase English names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseSeptikError;

/// Vowel harmony class, taken from the last hard or soft vowel in a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Harmony {
    /// Back vowels (а, о, у, ұ, ы, я).
    Hard,
    /// Front vowels (ә, е, и, ө, ү, і, э).
    Soft,
    /// No vowel from either class anywhere in the word.
    Unset,
}

/// A grammatical case of Kazakh noun declension.
///
/// Codes follow the traditional ordering (ілік = 1 … көмектес = 6). The
/// nominative is not modeled because it takes no suffix.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Septik {
    /// Ілік септік.
    Genitive,
    /// Барыс септік.
    Dative,
    /// Табыс септік.
    Accusative,
    /// Жатыс септік.
    Locative,
    /// Шығыс септік.
    Ablative,
    /// Көмектес септік.
    #[default]
    Instrumental,
}

impl Septik {
    /// All six cases in code order.
    pub const ALL: [Septik; 6] = [
        Septik::Genitive,
        Septik::Dative,
        Septik::Accusative,
        Septik::Locative,
        Septik::Ablative,
        Septik::Instrumental,
    ];

    /// Numeric case code, 1..=6.
    pub fn code(self) -> u8 {
        match self {
            Septik::Genitive => 1,
            Septik::Dative => 2,
            Septik::Accusative => 3,
            Septik::Locative => 4,
            Septik::Ablative => 5,
            Septik::Instrumental => 6,
        }
    }

    /// Look up a case by numeric code. Anything outside 1..=6 is `None`.
    pub fn from_code(code: i64) -> Option<Septik> {
        match code {
            1 => Some(Septik::Genitive),
            2 => Some(Septik::Dative),
            3 => Some(Septik::Accusative),
            4 => Some(Septik::Locative),
            5 => Some(Septik::Ablative),
            6 => Some(Septik::Instrumental),
            _ => None,
        }
    }

    /// Lowercase English name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Septik::Genitive => "genitive",
            Septik::Dative => "dative",
            Septik::Accusative => "accusative",
            Septik::Locative => "locative",
            Septik::Ablative => "ablative",
            Septik::Instrumental => "instrumental",
        }
    }

    /// Kazakh name of the case, without the word "септік".
    pub fn kazakh_name(self) -> &'static str {
        match self {
            Septik::Genitive => "ілік",
            Septik::Dative => "барыс",
            Septik::Accusative => "табыс",
            Septik::Locative => "жатыс",
            Septik::Ablative => "шығыс",
            Septik::Instrumental => "көмектес",
        }
    }
}

impl fmt::Display for Septik {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Septik {
    type Err = ParseSeptikError;

    /// Accepts a numeric code ("3"), an English name ("accusative"), or a
    /// Kazakh name with or without "септік" ("табыс", "Табыс септік").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return Septik::from_code(code).ok_or(ParseSeptikError::CodeOutOfRange(code));
        }

        let lowered = trimmed.to_lowercase();
        let name = lowered
            .strip_suffix("септік")
            .map(str::trim_end)
            .unwrap_or(&lowered);

        Septik::ALL
            .into_iter()
            .find(|septik| septik.name() == name || septik.kazakh_name() == name)
            .ok_or_else(|| ParseSeptikError::UnknownName(trimmed.to_string()))
    }
}

/// A word with one case suffix attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declined {
    /// The original word (casing untouched) followed by the suffix.
    pub text: String,
    /// The suffix that was appended. Empty when no rule matched.
    pub suffix: String,
    /// Which case was applied.
    pub septik: Septik,
    /// Harmony class the suffix variant was chosen by.
    pub harmony: Harmony,
}

impl Declined {
    pub(crate) fn new(word: &str, suffix: &str, septik: Septik, harmony: Harmony) -> Self {
        let mut text = String::with_capacity(word.len() + suffix.len());
        text.push_str(word);
        text.push_str(suffix);
        Declined {
            text,
            suffix: suffix.to_string(),
            septik,
            harmony,
        }
    }

    /// The word as given, without the suffix.
    pub fn stem(&self) -> &str {
        self.text.strip_suffix(&self.suffix).unwrap_or(&self.text)
    }

    /// Whether any suffix was attached.
    pub fn is_inflected(&self) -> bool {
        !self.suffix.is_empty()
    }
}

/// All six declined forms of one word, in case-code order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paradigm {
    /// The word as given.
    pub word: String,
    /// One entry per case, genitive first.
    pub forms: Vec<Declined>,
}

impl Paradigm {
    /// The form for a given case, if present.
    pub fn get(&self, septik: Septik) -> Option<&Declined> {
        self.forms.iter().find(|form| form.septik == septik)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for septik in Septik::ALL {
            assert_eq!(Septik::from_code(i64::from(septik.code())), Some(septik));
        }
    }

    #[test]
    fn test_codes_are_in_order() {
        let codes: Vec<u8> = Septik::ALL.iter().map(|s| s.code()).collect();
        assert_eq!(codes, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_from_code_out_of_range() {
        assert_eq!(Septik::from_code(0), None);
        assert_eq!(Septik::from_code(7), None);
        assert_eq!(Septik::from_code(-1), None);
        assert_eq!(Septik::from_code(i64::MAX), None);
    }

    #[test]
    fn test_default_is_instrumental() {
        assert_eq!(Septik::default(), Septik::Instrumental);
    }

    #[test]
    fn test_parse_code() {
        assert_eq!("1".parse::<Septik>(), Ok(Septik::Genitive));
        assert_eq!(" 6 ".parse::<Septik>(), Ok(Septik::Instrumental));
        assert_eq!(
            "0".parse::<Septik>(),
            Err(ParseSeptikError::CodeOutOfRange(0))
        );
    }

    #[test]
    fn test_parse_english_name() {
        assert_eq!("dative".parse::<Septik>(), Ok(Septik::Dative));
        assert_eq!("Ablative".parse::<Septik>(), Ok(Septik::Ablative));
    }

    #[test]
    fn test_parse_kazakh_name() {
        assert_eq!("табыс".parse::<Septik>(), Ok(Septik::Accusative));
        assert_eq!("Жатыс септік".parse::<Septik>(), Ok(Septik::Locative));
        assert_eq!("КӨМЕКТЕС".parse::<Septik>(), Ok(Septik::Instrumental));
    }

    #[test]
    fn test_parse_unknown_name() {
        assert_eq!(
            "vocative".parse::<Septik>(),
            Err(ParseSeptikError::UnknownName("vocative".to_string()))
        );
        assert!("".parse::<Septik>().is_err());
    }

    #[test]
    fn test_septik_serde() {
        let json = serde_json::to_string(&Septik::Genitive).unwrap();
        assert_eq!(json, "\"genitive\"");
        let parsed: Septik = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Septik::Genitive);
    }

    #[test]
    fn test_harmony_serde() {
        let json = serde_json::to_string(&Harmony::Unset).unwrap();
        assert_eq!(json, "\"unset\"");
        let parsed: Harmony = serde_json::from_str("\"soft\"").unwrap();
        assert_eq!(parsed, Harmony::Soft);
    }

    #[test]
    fn test_display_uses_english_name() {
        assert_eq!(Septik::Locative.to_string(), "locative");
    }

    #[test]
    fn test_declined_stem() {
        let declined = Declined::new("Алма", "ның", Septik::Genitive, Harmony::Hard);
        assert_eq!(declined.text, "Алманың");
        assert_eq!(declined.stem(), "Алма");
        assert!(declined.is_inflected());

        let bare = Declined::new("Аю", "", Septik::Dative, Harmony::Hard);
        assert_eq!(bare.stem(), "Аю");
        assert!(!bare.is_inflected());
    }

    #[test]
    fn test_paradigm_get() {
        let paradigm = Paradigm {
            word: "Гүл".to_string(),
            forms: vec![Declined::new("Гүл", "ден", Septik::Ablative, Harmony::Soft)],
        };
        assert_eq!(paradigm.get(Septik::Ablative).unwrap().text, "Гүлден");
        assert!(paradigm.get(Septik::Dative).is_none());
    }
}
