// Kazakh case (септік) suffixes for names and nouns.
//
// Given a word and one of six cases, appends the suffix Kazakh grammar calls
// for. The suffix is chosen from the word's last one or two letters and its
// vowel harmony (hard or soft, taken from the vowel nearest the end). The
// word itself is never altered: classification runs on a lowercased copy,
// and the suffix is appended to the original text.
//
// Architecture:
// - `types.rs`: `Harmony`, `Septik`, `Declined`, `Paradigm`
// - `phonotactics.rs`: letter classes, harmony scan, ordered rule table per case
// - `errors.rs`: `ParseSeptikError` for textual case selectors
// - `lib.rs` (this file): `resolve`, `decline`, `paradigm`, `decline_batch`
// - `main.rs`: the `septik` command-line front end
//
// Every operation here is total. Out-of-range case codes and words that no
// rule covers come back unchanged rather than as errors.

pub mod errors;
pub mod phonotactics;
pub mod types;

// Re-export key types at crate root for convenience.
pub use errors::ParseSeptikError;
pub use types::{Declined, Harmony, Paradigm, Septik};

use rayon::prelude::*;

/// Append the suffix for case `case_type` (1..=6) to `word`.
///
/// Codes outside 1..=6 return the word unchanged, as does the empty word.
/// Cases 2–5 also return it unchanged when the word ends in a letter none of
/// their rules cover.
pub fn resolve(word: &str, case_type: i64) -> String {
    match Septik::from_code(case_type) {
        Some(septik) => decline(word, septik).text,
        None => word.to_string(),
    }
}

/// Decline `word` into one case.
pub fn decline(word: &str, septik: Septik) -> Declined {
    let lowered = word.to_lowercase();
    let mut tail = lowered.chars().rev();
    let Some(last) = tail.next() else {
        return Declined::new(word, "", septik, Harmony::Unset);
    };
    let second_last = tail.next();

    let harmony = phonotactics::scan_harmony(&lowered);
    let suffix = phonotactics::select_suffix(septik, last, second_last, harmony);
    if suffix.is_none() {
        log::debug!("no {septik} suffix rule covers '{word}' (last letter '{last}'); left as is");
    }

    Declined::new(word, suffix.unwrap_or(""), septik, harmony)
}

/// Harmony class of `word`, ignoring letter case.
pub fn harmony_of(word: &str) -> Harmony {
    phonotactics::scan_harmony(&word.to_lowercase())
}

/// All six declined forms of `word`, genitive first.
pub fn paradigm(word: &str) -> Paradigm {
    Paradigm {
        word: word.to_string(),
        forms: Septik::ALL.iter().map(|&s| decline(word, s)).collect(),
    }
}

/// Decline many words into one case in parallel. Output order matches input.
pub fn decline_batch<S>(words: &[S], septik: Septik) -> Vec<Declined>
where
    S: AsRef<str> + Sync,
{
    words
        .par_iter()
        .map(|w| decline(w.as_ref(), septik))
        .collect()
}
