//! Curated filter lists: domain stopwords and citation bigrams.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use log::debug;

use crate::error::{Error, Result};
use crate::language::Language;

/// Common English words, filtered from French texts.
const ENGLISH_COMMON: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "must", "shall", "can", "need",
    "this", "that", "these", "those", "it", "its", "they", "their", "we", "our", "you", "your",
    "he", "she", "his", "her", "i", "my", "not", "no", "nor", "so", "if", "then", "than", "too",
    "very", "just", "about", "into", "through", "during", "before", "after", "above", "below",
    "between", "under", "again", "further", "once", "here", "there", "when", "where", "why",
    "how", "all", "each", "few", "more", "most", "other", "some", "such", "only", "own", "same",
    "both", "any", "now", "also", "new", "one", "two",
];

/// Common French words, filtered from English texts.
const FRENCH_COMMON: &[&str] = &[
    "le", "la", "les", "un", "une", "des", "du", "de", "et", "ou", "mais", "dans", "sur", "à",
    "au", "aux", "pour", "par", "avec", "sans", "sous", "entre", "vers", "chez", "ce", "cette",
    "ces", "son", "sa", "ses", "leur", "leurs", "notre", "nos", "votre", "vos", "mon", "ma",
    "mes", "ton", "ta", "tes", "il", "elle", "ils", "elles", "je", "tu", "nous", "vous", "on",
    "qui", "que", "quoi", "dont", "où", "si", "ne", "pas", "plus", "moins", "très", "bien",
    "aussi", "comme", "tout", "tous", "toute", "toutes", "autre", "autres", "même", "être",
    "avoir", "faire", "pouvoir", "vouloir", "devoir", "donc", "car", "ainsi", "alors",
    "encore", "déjà", "jamais",
];

/// Frequent French function words filtered from French texts.
const FRENCH_FUNCTION: &[&str] = &[
    "les", "des", "dans", "pour", "par", "sur", "avec", "cette", "être", "avoir", "faire",
    "plus", "aussi", "tout", "tous", "bien", "très", "peu", "donc", "ainsi", "entre", "sans",
];

/// Bibliographic abbreviations that only appear in English references.
const ENGLISH_BIBLIOGRAPHIC: &[&str] = &["et", "al", "ibid", "pp", "ed", "eds", "vol", "no", "cf"];

/// Noise shared by both languages: web fragments, names, split place names and months.
const SHARED_NOISE: &[&str] = &[
    "http", "https", "www", "org", "com", "pdf", "doi", "url", "amp",
    "karthala", "author", "madore", "paris", "perez", "loc", "gomez", "cit", "muriel",
    "otayek", "harmattan", "frédérick", "frederick",
    "porto", "novo", "burkina", "faso",
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december", "janvier", "février", "mars", "avril", "mai", "juin",
    "juillet", "août", "septembre", "octobre", "novembre", "décembre",
];

const REFERENCE_BIGRAMS: &[&str] = &[
    // English reference patterns
    "university press", "journal of", "press university", "oxford university",
    "cambridge university", "new york", "routledge london", "brill leiden",
    "palgrave macmillan", "ed eds", "vol no", "pp ed", "ibid op",
    // French reference patterns
    "presses universitaires", "université de", "éditions de", "revue de", "paris éditions",
    "presses de", "cahiers de",
    // function word pairs
    "in the", "of the", "and the", "to the", "on the", "at the", "for the", "de la", "de le",
    "de les", "à la", "à le", "dans le", "dans la", "sur le", "sur la", "pour le", "pour la",
    "par le", "par la", "en le", "en la", "au le", "du le", "les de", "des de",
    // authors
    "frédérick madore", "frederick madore", "madore frédérick", "madore frederick",
    "frédéric madore", "madore frédéric", "muriel gomez", "gomez muriel", "marie nathalie",
    "nathalie leblanc", "issouf binaté", "binaté issouf", "audet gosselin", "gosselin audet",
    "yssoufou traoré", "traoré yssoufou", "louis audet", "leblanc marie", "abdoulaye sounaye",
    "sounaye abdoulaye", "rené otayek", "otayek rené", "issa cissé", "cissé issa",
    "louis triaud", "triaud louis", "mamadou bodian", "bodian mamadou", "marie miran",
    "miran marie", "université laval", "laval université",
    "denise brégand", "brégand denise", "cédric mayrargue", "mayrargue cédric", "limb peter",
    "peter limb", "ulrike freitag", "freitag ulrike", "klaas glenewinkel",
    "glenewinkel klaas", "voir miran", "miran voir", "voir glossair", "glossair voir",
    "gilles holder", "holder gilles",
    // generic
    "islamic africa", "africa islamic",
    // newspapers and journals
    "islam info", "info islam", "nouvelle marche", "marche nouvelle", "fraternité matin",
    "matin fraternité", "nasr vendredi", "vendredi nasr", "observateur paalga",
    "paalga observateur", "carrefour africain", "africain carrefour", "togo presse",
    "presse togo", "ivoire dimanche", "dimanche ivoire", "bulletin francopaix",
    "francopaix bulletin", "jeune afrique", "afrique jeune", "canadian journal",
    "journal canadian", "revue canadien", "canadien revue", "croix africa", "africa croix",
    // publishers and universities
    "indiana university", "university indiana", "modern african", "african modern",
    "write press", "press write",
    // organizations
    "amnesty international", "international amnesty", "special issue", "issue special",
    "soir info", "info soir",
    "page consulter", "consulter page",
];

static CUSTOM_EN: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ENGLISH_BIBLIOGRAPHIC
        .iter()
        .chain(SHARED_NOISE)
        .chain(FRENCH_COMMON)
        .copied()
        .collect()
});

static CUSTOM_FR: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    FRENCH_FUNCTION
        .iter()
        .chain(SHARED_NOISE)
        .chain(ENGLISH_COMMON)
        .copied()
        .collect()
});

static REFERENCE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| REFERENCE_BIGRAMS.iter().copied().collect());

/// Domain stopwords applied to lemmas of a `language` text, on top of the
/// pipeline's own stop flags.
pub fn custom_stopwords(language: Language) -> &'static HashSet<&'static str> {
    match language {
        Language::En => &*CUSTOM_EN,
        Language::Fr => &*CUSTOM_FR,
    }
}

/// Whether the lower-cased `"lemma1 lemma2"` is a known citation or
/// bibliography artefact.
pub fn is_reference_bigram(bigram: &str) -> bool {
    REFERENCE_SET.contains(bigram)
}

/// Read extra stopwords: one per line, lower-cased, `#` starts a comment line.
pub fn load_stopword_file(path: &Path) -> Result<HashSet<String>> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let words: HashSet<String> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_lowercase)
        .collect();
    debug!("Loaded {} extra stopwords from {}", words.len(), path.display());
    Ok(words)
}

/// Custom stopwords for one run: the built-in list of the language plus any
/// user-supplied words.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    language: Language,
    extra: HashSet<String>,
}

impl StopwordFilter {
    pub fn new(language: Language) -> Self {
        StopwordFilter {
            language,
            extra: HashSet::new(),
        }
    }

    pub fn with_extra<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// `lemma` must already be lower-cased.
    pub fn is_stopword(&self, lemma: &str) -> bool {
        custom_stopwords(self.language).contains(lemma) || self.extra.contains(lemma)
    }

    pub fn is_reference_bigram(&self, bigram: &str) -> bool {
        is_reference_bigram(bigram)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_list_includes_french_function_words() {
        let en = custom_stopwords(Language::En);
        assert!(en.contains("ibid"));
        assert!(en.contains("dans"));
        assert!(en.contains("décembre"));
        assert!(!en.contains("the"));
    }

    #[test]
    fn french_list_includes_english_function_words() {
        let fr = custom_stopwords(Language::Fr);
        assert!(fr.contains("the"));
        assert!(fr.contains("peu"));
        assert!(fr.contains("burkina"));
        assert!(!fr.contains("ibid"));
    }

    #[test]
    fn reference_bigrams_in_both_orders() {
        assert!(is_reference_bigram("jeune afrique"));
        assert!(is_reference_bigram("afrique jeune"));
        assert!(is_reference_bigram("university press"));
        assert!(!is_reference_bigram("muslim youth"));
    }

    #[test]
    fn extra_words_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stop.txt");
        fs::write(&path, "# noise\nCODESRIA\n\n  volume  \n").unwrap();
        let words = load_stopword_file(&path).unwrap();
        assert_eq!(words.len(), 2);
        let filter = StopwordFilter::new(Language::En).with_extra(&words);
        assert!(filter.is_stopword("codesria"));
        assert!(filter.is_stopword("volume"));
        assert!(filter.is_stopword("madore"));
        assert!(!filter.is_stopword("mosque"));
    }
}
