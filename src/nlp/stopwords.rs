use std::collections::HashSet;
use std::sync::LazyLock;

use stop_words::{LANGUAGE, get};

use crate::language::Language;

/// Clitic and elision pieces split off by the tokenizer, which the word lists
/// only carry fused to their host word.
const ENGLISH_CLITICS: &[&str] = &[
    "'s", "’s", "n't", "n’t", "'re", "’re", "'ve", "’ve", "'ll", "’ll", "'d", "’d", "'m", "’m",
];
const FRENCH_ELISIONS: &[&str] = &[
    "l'", "l’", "d'", "d’", "j'", "j’", "m'", "m’", "n'", "n’", "s'", "s’", "t'", "t’", "c'",
    "c’", "qu'", "qu’", "jusqu'", "jusqu’", "lorsqu'", "lorsqu’", "puisqu'", "puisqu’",
    "quoiqu'", "quoiqu’",
];

const ENGLISH_NUMBERS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion", "trillion", "dozen",
];

const FRENCH_NUMBERS: &[&str] = &[
    "zéro", "un", "une", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf",
    "dix", "onze", "douze", "treize", "quatorze", "quinze", "seize", "vingt", "trente",
    "quarante", "cinquante", "soixante", "septante", "huitante", "nonante", "cent", "cents",
    "mille", "million", "millions", "milliard", "milliards", "douzaine",
];

fn load_stopwords(language: LANGUAGE, supplement: &[&str]) -> HashSet<String> {
    get(language)
        .iter()
        .map(|s| s.to_lowercase())
        .chain(supplement.iter().map(|s| s.to_string()))
        .collect()
}

static ENGLISH_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| load_stopwords(LANGUAGE::English, ENGLISH_CLITICS));
static FRENCH_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| load_stopwords(LANGUAGE::French, FRENCH_ELISIONS));
static ENGLISH_NUMBER_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_NUMBERS.iter().copied().collect());
static FRENCH_NUMBER_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| FRENCH_NUMBERS.iter().copied().collect());

/// Whether the lower-cased `word` is a function word of `language`.
pub fn is_stop_word(language: Language, word: &str) -> bool {
    match language {
        Language::En => ENGLISH_SET.contains(word),
        Language::Fr => FRENCH_SET.contains(word),
    }
}

/// Whether the lower-cased `word` spells out a number in `language`.
pub fn is_number_word(language: Language, word: &str) -> bool {
    match language {
        Language::En => ENGLISH_NUMBER_SET.contains(word),
        Language::Fr => FRENCH_NUMBER_SET.contains(word),
    }
}
