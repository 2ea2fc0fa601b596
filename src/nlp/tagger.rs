use super::{Lexicon, Pos, Token};
use crate::language::Language;

const SENTENCE_END: &[&str] = &[".", "!", "?", "…"];
const OPENERS: &[&str] = &["\"", "«", "“", "‘", "(", "[", "'"];

const EN_DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "my", "your", "his", "her", "its",
    "our", "their", "some", "any", "each", "every", "no", "many", "several", "another",
    "such", "much", "few", "both", "all", "either", "neither",
];
const EN_VERB_MARKERS: &[&str] = &[
    "to", "will", "would", "can", "could", "should", "shall", "may", "might", "must",
];
const EN_NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ism", "ist", "ship", "hood", "ance", "ence",
    "ency", "ancy", "dom", "ology", "ure",
];
const EN_ADJ_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "ical", "al", "ic", "less",
];
const EN_LY_ADJECTIVES: &[&str] = &[
    "early", "holy", "likely", "unlikely", "friendly", "elderly", "lonely", "lovely", "ugly",
    "silly", "costly", "deadly", "scholarly", "worldly", "orderly", "daily", "weekly",
    "monthly", "yearly", "only",
];
const EN_LY_NOUNS: &[&str] = &[
    "family", "italy", "july", "supply", "reply", "apply", "rely", "ally", "rally",
    "assembly", "anomaly", "monopoly", "butterfly", "belly", "bully", "homily", "melancholy",
];
const EN_ED_NON_VERBS: &[&str] = &[
    "hundred", "sacred", "kindred", "naked", "wicked", "breed", "creed", "speed", "greed",
    "steed", "embed",
];
const EN_ISE_NON_VERBS: &[&str] = &[
    "enterprise", "promise", "premise", "expertise", "exercise", "franchise", "concise",
    "precise", "paradise", "merchandise", "compromise",
];

const FR_DETERMINERS: &[&str] = &[
    "le", "la", "les", "l'", "l’", "un", "une", "des", "du", "de", "d'", "d’", "ce", "cet",
    "cette", "ces", "mon", "ma", "mes", "ton", "ta", "tes", "son", "sa", "ses", "notre",
    "nos", "votre", "vos", "leur", "leurs", "au", "aux", "chaque", "plusieurs", "quelques",
    "certains", "certaines", "aucun", "aucune",
];
const FR_VERB_MARKERS: &[&str] = &[
    "se", "s'", "s’", "ne", "n'", "n’", "me", "m'", "m’", "te", "t'", "t’", "ai", "as", "a",
    "avons", "avez", "ont", "avait", "avaient", "ayant", "eu",
];
const FR_PRENOMINAL_ADJECTIVES: &[&str] = &[
    "grand", "grande", "grands", "grandes", "petit", "petite", "petits", "petites",
    "nouveau", "nouvel", "nouvelle", "nouveaux", "nouvelles", "jeune", "jeunes", "vieux",
    "vieil", "vieille", "vieilles", "bon", "bonne", "bons", "bonnes", "mauvais", "mauvaise",
    "beau", "bel", "belle", "beaux", "belles", "ancien", "ancienne", "anciens", "anciennes",
    "seul", "seule", "seuls", "seules", "haut", "haute", "long", "longue", "vrai", "vraie",
];
const FR_ADVERB_SUFFIXES: &[&str] = &[
    "amment", "emment", "iquement", "ivement", "ellement", "alement", "eusement", "ablement",
    "ièrement", "tement", "ément",
];
const FR_NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "isme", "ité", "iété", "auté", "ure", "ence", "ance", "eur", "age",
];
const FR_ADJ_SUFFIXES: &[&str] = &[
    "ique", "if", "ive", "eux", "euse", "el", "elle", "able", "ible", "al", "ale", "ien",
    "ienne", "ain", "aine", "aire", "aise",
];
const FR_ER_NON_VERBS: &[&str] = &[
    "hiver", "enfer", "hier", "amer", "cancer", "leader", "manager", "super", "poster",
    "laser", "reporter", "dollar",
];
/// Nouns in -ée that would otherwise look like past participles.
pub(crate) const FR_EE_NOUNS: &[&str] = &[
    "année", "idée", "armée", "journée", "musée", "lycée", "entrée", "pensée", "arrivée",
    "soirée", "durée", "mosquée", "assemblée", "épopée", "trophée", "vallée", "allée",
    "destinée", "matinée", "randonnée", "poignée", "chaussée", "cheminée", "marée", "fée",
    "rangée", "veillée", "bouchée", "montée", "portée", "percée", "épée",
];

struct Context<'a> {
    word: &'a str,
    prev: Option<&'a str>,
    next_is_word: bool,
}

/// Assign a part of speech to every token in place.
pub(crate) fn tag(tokens: &mut [Token], language: Language, lexicon: &Lexicon) {
    let lowered: Vec<String> = tokens.iter().map(|t| t.text.to_lowercase()).collect();
    let tags: Vec<Pos> = (0..tokens.len())
        .map(|i| tag_one(tokens, &lowered, i, language, lexicon))
        .collect();
    for (token, pos) in tokens.iter_mut().zip(tags) {
        token.pos = pos;
    }
}

fn tag_one(
    tokens: &[Token],
    lowered: &[String],
    i: usize,
    language: Language,
    lexicon: &Lexicon,
) -> Pos {
    let token = &tokens[i];
    if token.is_punct || token.is_space || token.like_num || token.is_stop {
        return Pos::Other;
    }
    let word = lowered[i].as_str();
    if let Some(pos) = lexicon.lookup(word).and_then(|entry| entry.pos) {
        return pos;
    }
    if !token.is_alpha {
        return Pos::Other;
    }
    if is_acronym(&token.text) || (starts_uppercase(&token.text) && !at_sentence_start(tokens, i))
    {
        return Pos::Propn;
    }

    let prev = previous_word(tokens, i).map(|j| lowered[j].as_str());
    let next_is_word = tokens
        .iter()
        .skip(i + 1)
        .find(|t| !t.is_space)
        .is_some_and(|t| t.is_alpha && !t.is_stop);
    let cx = Context {
        word,
        prev,
        next_is_word,
    };
    match language {
        Language::En => english(&cx),
        Language::Fr => french(&cx),
    }
}

fn is_acronym(text: &str) -> bool {
    text.chars().count() >= 2 && text.chars().all(|c| c.is_alphabetic() && c.is_uppercase())
}

fn starts_uppercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase)
}

fn previous_word(tokens: &[Token], i: usize) -> Option<usize> {
    (0..i).rev().find(|&j| !tokens[j].is_space)
}

fn at_sentence_start(tokens: &[Token], i: usize) -> bool {
    let mut j = i;
    while let Some(prev) = previous_word(tokens, j) {
        let text = tokens[prev].text.as_str();
        if OPENERS.contains(&text) {
            j = prev;
            continue;
        }
        return SENTENCE_END.contains(&text);
    }
    true
}

/// `word` ends with `suffix` and keeps at least three characters before it.
fn has_suffix(word: &str, suffix: &str) -> bool {
    word.strip_suffix(suffix)
        .is_some_and(|stem| stem.chars().count() >= 3)
}

fn has_any_suffix(word: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|s| has_suffix(word, s))
}

fn english(cx: &Context) -> Pos {
    let w = cx.word;
    if let Some(prev) = cx.prev {
        if EN_DETERMINERS.contains(&prev) {
            return if cx.next_is_word && has_any_suffix(w, EN_ADJ_SUFFIXES) {
                Pos::Adj
            } else {
                Pos::Noun
            };
        }
        if EN_VERB_MARKERS.contains(&prev) && !has_any_suffix(w, EN_NOUN_SUFFIXES) {
            return Pos::Verb;
        }
    }
    if w.chars().count() > 4 && w.ends_with("ly") {
        if EN_LY_ADJECTIVES.contains(&w) {
            return Pos::Adj;
        }
        if !EN_LY_NOUNS.contains(&w) {
            return Pos::Adv;
        }
    }
    if is_english_plural(w) || has_any_suffix(w, EN_NOUN_SUFFIXES) {
        return Pos::Noun;
    }
    if has_any_suffix(w, EN_ADJ_SUFFIXES) {
        return Pos::Adj;
    }
    if is_english_verb_form(w) {
        return Pos::Verb;
    }
    Pos::Noun
}

fn is_english_plural(w: &str) -> bool {
    w.chars().count() > 3
        && w.ends_with('s')
        && !["ss", "us", "is", "ous"].iter().any(|s| w.ends_with(s))
}

fn is_english_verb_form(w: &str) -> bool {
    if has_suffix(w, "ing") || has_suffix(w, "ify") {
        return true;
    }
    if has_suffix(w, "ed") {
        return !EN_ED_NON_VERBS.contains(&w);
    }
    if has_suffix(w, "ize") || has_suffix(w, "ise") {
        return !EN_ISE_NON_VERBS.contains(&w);
    }
    false
}

/// `word` without a plural `s` or `x`, for suffix checks.
fn french_singular(word: &str) -> &str {
    word.strip_suffix('s')
        .or_else(|| word.strip_suffix('x'))
        .unwrap_or(word)
}

fn french(cx: &Context) -> Pos {
    let w = cx.word;
    if let Some(prev) = cx.prev {
        if FR_DETERMINERS.contains(&prev) {
            return if FR_PRENOMINAL_ADJECTIVES.contains(&w) {
                Pos::Adj
            } else {
                Pos::Noun
            };
        }
        let singular = french_singular(w);
        if FR_VERB_MARKERS.contains(&prev) && !has_any_suffix(singular, FR_NOUN_SUFFIXES) {
            return Pos::Verb;
        }
        if prev == "en" && has_suffix(w, "ant") {
            return Pos::Verb;
        }
    }
    if has_any_suffix(w, FR_ADVERB_SUFFIXES) {
        return Pos::Adv;
    }
    let singular = french_singular(w);
    if has_any_suffix(singular, FR_NOUN_SUFFIXES) {
        return Pos::Noun;
    }
    if has_any_suffix(w, FR_ADJ_SUFFIXES) || has_any_suffix(singular, FR_ADJ_SUFFIXES) {
        return Pos::Adj;
    }
    if is_french_verb_form(w) {
        return Pos::Verb;
    }
    Pos::Noun
}

fn is_french_verb_form(w: &str) -> bool {
    if has_suffix(w, "er") {
        return !w.ends_with("ier") && !FR_ER_NON_VERBS.contains(&w);
    }
    let participle = ["ées", "és", "ée", "é"].iter().any(|s| has_suffix(w, s));
    if participle {
        let singular = w.strip_suffix('s').unwrap_or(w);
        return !FR_EE_NOUNS.contains(&singular);
    }
    ["aient", "ait", "èrent"].iter().any(|s| has_suffix(w, s))
}
