// Kazakh case-suffix rules: letter classes, harmony scan, and per-case tables.
//
// Every case is an ordered slice of `Rule`s. A rule pairs a `Condition` on
// the word's last one or two letters with a `SuffixForm` that picks a
// hard/soft variant. The first rule whose condition holds decides the
// suffix; if none holds the word takes no suffix at all.
//
// Genitive and instrumental end in an unconditional rule, so they always
// inflect. Dative through ablative can run off the end of their table for
// words ending in letters none of the classes mention (Latin letters, digits,
// and a few Cyrillic letters such as "ю" in the dative).
//
// All letter classes are lowercase; callers lowercase the word first.

use crate::types::{Harmony, Septik};

/// A named set of lowercase letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharClass {
    /// Name used in debug output.
    pub name: &'static str,
    /// Member letters, one `char` each.
    pub letters: &'static str,
}

impl CharClass {
    pub const fn new(name: &'static str, letters: &'static str) -> Self {
        CharClass { name, letters }
    }

    pub fn contains(&self, c: char) -> bool {
        self.letters.contains(c)
    }
}

pub const VOWELS_HARD: CharClass = CharClass::new("vowels_hard", "аоуұыя");
pub const VOWELS_SOFT: CharClass = CharClass::new("vowels_soft", "әеиөүіэ");
pub const CONSONANTS_HARD: CharClass = CharClass::new("consonants_hard", "кқпстфхһчцшщбвгд");
pub const CONSONANTS_SOFT: CharClass = CharClass::new("consonants_soft", "жз");

pub const CASE1_SET_A: CharClass = CharClass::new("case1_set_a", "аоуұыәеөүіэмнңяё");
pub const CASE1_SET_B: CharClass = CharClass::new("case1_set_b", "июлруйжзь");
pub const CASE2_SET_A: CharClass = CharClass::new("case2_set_a", "аоуұыәеиөүіэйлрмнңжзяьё");
pub const CASE3_SET_A: CharClass = CharClass::new("case3_set_a", "июйлрмнңужзь");
pub const CASE3_SET_B: CharClass = CharClass::new("case3_set_b", "аоуұыәеиөүіэяё");
pub const CASE4_SET_A: CharClass = CharClass::new("case4_set_a", "аоуұыәеиөүіэйлрмнңужзяьюё");
pub const CASE5_SET_A: CharClass = CharClass::new("case5_set_a", "аоуұыәеиөүіэуйлржзяьюё");
pub const CASE5_SET_B: CharClass = CharClass::new("case5_set_b", "мнң");

// Small classes for the two-letter conditions.
const CLOSE_VOWELS: CharClass = CharClass::new("ы_і", "ыі");
const NASALS_M_NG: CharClass = CharClass::new("м_ң", "мң");
const LETTER_S: CharClass = CharClass::new("с", "с");

/// How a rule's suffix depends on harmony.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixForm {
    /// `hard` for hard words; `soft` for soft words and for words with no vowel.
    Harmonic {
        hard: &'static str,
        soft: &'static str,
    },
    /// `soft` for soft words; `hard` for hard words and for words with no vowel.
    /// Only the genitive uses this.
    SoftMarked {
        hard: &'static str,
        soft: &'static str,
    },
    /// Same suffix regardless of harmony.
    Fixed(&'static str),
}

impl SuffixForm {
    /// Pick the variant for a word of the given harmony.
    pub fn select(self, harmony: Harmony) -> &'static str {
        match self {
            SuffixForm::Harmonic { hard, soft } => match harmony {
                Harmony::Hard => hard,
                Harmony::Soft | Harmony::Unset => soft,
            },
            SuffixForm::SoftMarked { hard, soft } => match harmony {
                Harmony::Soft => soft,
                Harmony::Hard | Harmony::Unset => hard,
            },
            SuffixForm::Fixed(suffix) => suffix,
        }
    }
}

/// A test on the final letters of a lowercased word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Matches every word.
    Always,
    /// The last letter is in the class.
    LastIn(CharClass),
    /// The second-to-last letter is exactly this one.
    SecondLastIs(char),
    /// The second-to-last letter is in the first class and the last in the second.
    SecondLastAndLastIn(CharClass, CharClass),
}

impl Condition {
    pub fn matches(self, last: char, second_last: Option<char>) -> bool {
        match self {
            Condition::Always => true,
            Condition::LastIn(class) => class.contains(last),
            Condition::SecondLastIs(c) => second_last == Some(c),
            Condition::SecondLastAndLastIn(before, end) => {
                second_last.is_some_and(|c| before.contains(c)) && end.contains(last)
            }
        }
    }
}

/// One entry in a case's rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub when: Condition,
    pub suffix: SuffixForm,
}

const fn rule(when: Condition, suffix: SuffixForm) -> Rule {
    Rule { when, suffix }
}

const fn harmonic(hard: &'static str, soft: &'static str) -> SuffixForm {
    SuffixForm::Harmonic { hard, soft }
}

/// Ілік: н/д/т by the last letter, then ың/ің.
pub const GENITIVE_RULES: &[Rule] = &[
    rule(
        Condition::LastIn(CASE1_SET_A),
        SuffixForm::SoftMarked { hard: "ның", soft: "нің" },
    ),
    rule(
        Condition::LastIn(CASE1_SET_B),
        SuffixForm::SoftMarked { hard: "дың", soft: "дің" },
    ),
    rule(
        Condition::Always,
        SuffixForm::SoftMarked { hard: "тың", soft: "тің" },
    ),
];

/// Барыс.
pub const DATIVE_RULES: &[Rule] = &[
    rule(Condition::LastIn(CASE2_SET_A), harmonic("ға", "ге")),
    rule(Condition::LastIn(CONSONANTS_HARD), harmonic("қа", "ке")),
    rule(Condition::SecondLastIs('с'), harmonic("на", "не")),
    rule(
        Condition::SecondLastAndLastIn(CLOSE_VOWELS, NASALS_M_NG),
        harmonic("а", "е"),
    ),
];

/// Табыс.
pub const ACCUSATIVE_RULES: &[Rule] = &[
    rule(Condition::LastIn(CASE3_SET_A), harmonic("ды", "ді")),
    rule(Condition::LastIn(CONSONANTS_HARD), harmonic("ты", "ті")),
    rule(Condition::LastIn(CASE3_SET_B), harmonic("ны", "ні")),
    rule(
        Condition::SecondLastAndLastIn(LETTER_S, CLOSE_VOWELS),
        SuffixForm::Fixed("н"),
    ),
];

/// Жатыс.
pub const LOCATIVE_RULES: &[Rule] = &[
    rule(Condition::LastIn(CASE4_SET_A), harmonic("да", "де")),
    rule(Condition::LastIn(CONSONANTS_HARD), harmonic("та", "те")),
    rule(
        Condition::SecondLastAndLastIn(LETTER_S, CLOSE_VOWELS),
        harmonic("нда", "нде"),
    ),
];

/// Шығыс. The last two rules share a suffix; together they form one
/// disjunction.
pub const ABLATIVE_RULES: &[Rule] = &[
    rule(Condition::LastIn(CASE5_SET_A), harmonic("дан", "ден")),
    rule(Condition::LastIn(CONSONANTS_HARD), harmonic("тан", "тен")),
    rule(Condition::LastIn(CASE5_SET_B), harmonic("нан", "нен")),
    rule(
        Condition::SecondLastAndLastIn(LETTER_S, CLOSE_VOWELS),
        harmonic("нан", "нен"),
    ),
];

/// Көмектес: б/п/м by the last letter, then ен.
pub const INSTRUMENTAL_RULES: &[Rule] = &[
    rule(Condition::LastIn(CONSONANTS_SOFT), SuffixForm::Fixed("бен")),
    rule(Condition::LastIn(CONSONANTS_HARD), SuffixForm::Fixed("пен")),
    rule(Condition::Always, SuffixForm::Fixed("мен")),
];

/// The ordered rule table for a case.
pub fn rules_for(septik: Septik) -> &'static [Rule] {
    match septik {
        Septik::Genitive => GENITIVE_RULES,
        Septik::Dative => DATIVE_RULES,
        Septik::Accusative => ACCUSATIVE_RULES,
        Septik::Locative => LOCATIVE_RULES,
        Septik::Ablative => ABLATIVE_RULES,
        Septik::Instrumental => INSTRUMENTAL_RULES,
    }
}

/// Harmony of a lowercased word: the class of the vowel nearest the end.
pub fn scan_harmony(lowered: &str) -> Harmony {
    lowered
        .chars()
        .rev()
        .find_map(|c| {
            if VOWELS_HARD.contains(c) {
                Some(Harmony::Hard)
            } else if VOWELS_SOFT.contains(c) {
                Some(Harmony::Soft)
            } else {
                None
            }
        })
        .unwrap_or(Harmony::Unset)
}

/// Run a case's rule table against the final letters. `None` when no rule
/// matches.
pub fn select_suffix(
    septik: Septik,
    last: char,
    second_last: Option<char>,
    harmony: Harmony,
) -> Option<&'static str> {
    rules_for(septik)
        .iter()
        .find(|r| r.when.matches(last, second_last))
        .map(|r| r.suffix.select(harmony))
}
