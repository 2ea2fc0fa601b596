//! Tokenization, part-of-speech tagging and lemmatization for English and French.
//!
//! The analysis only needs a handful of token attributes: a lemma, a coarse
//! part of speech and a few boolean flags. [`Pipeline`] is the seam that
//! produces them; [`RuleBasedPipeline`] is the built-in implementation.

mod lemmatizer;
mod lexicon;
mod stopwords;
mod tagger;
mod tokenizer;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use log::{debug, info};
use rust_stemmers::Stemmer;
use serde::{Deserialize, Serialize};

use crate::language::Language;

pub use lexicon::{Lexicon, LexiconEntry};
pub use stopwords::{is_number_word, is_stop_word};

/// Coarse part of speech, as written to the output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pos {
    Noun,
    Verb,
    Adj,
    Adv,
    Propn,
    Other,
}

impl Pos {
    pub fn as_str(self) -> &'static str {
        match self {
            Pos::Noun => "noun",
            Pos::Verb => "verb",
            Pos::Adj => "adj",
            Pos::Adv => "adv",
            Pos::Propn => "propn",
            Pos::Other => "other",
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pos {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "noun" => Ok(Pos::Noun),
            "verb" => Ok(Pos::Verb),
            "adj" => Ok(Pos::Adj),
            "adv" => Ok(Pos::Adv),
            "propn" => Ok(Pos::Propn),
            "other" => Ok(Pos::Other),
            other => Err(format!("unknown part of speech '{other}'")),
        }
    }
}

/// One token of analyzed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub pos: Pos,
    pub is_stop: bool,
    pub is_punct: bool,
    pub is_space: bool,
    pub like_num: bool,
    pub is_alpha: bool,
}

/// How lemmas are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LemmaMode {
    /// Dictionary forms from the lexicon, irregular tables and inflection rules.
    #[default]
    Lexical,
    /// Snowball stems. Cruder, but never leaves an inflected form behind.
    Snowball,
}

/// Turns text into analyzed tokens for a single language.
pub trait Pipeline {
    fn language(&self) -> Language;
    fn process(&self, text: &str) -> Vec<Token>;
}

/// Heuristic tagger and lemmatizer backed by built-in word lists and an
/// optional user lexicon.
pub struct RuleBasedPipeline {
    language: Language,
    mode: LemmaMode,
    lexicon: Lexicon,
    stemmer: Stemmer,
}

impl RuleBasedPipeline {
    pub fn new(language: Language, mode: LemmaMode) -> Self {
        Self::with_lexicon(language, mode, Lexicon::default())
    }

    pub fn with_lexicon(language: Language, mode: LemmaMode, lexicon: Lexicon) -> Self {
        info!(
            "Loaded {} pipeline ({:?} lemmas, {} lexicon entries)",
            language.name(),
            mode,
            lexicon.len()
        );
        RuleBasedPipeline {
            language,
            mode,
            lexicon,
            stemmer: Stemmer::create(language.stemmer_algorithm()),
        }
    }
}

impl Pipeline for RuleBasedPipeline {
    fn language(&self) -> Language {
        self.language
    }

    fn process(&self, text: &str) -> Vec<Token> {
        let mut tokens = tokenizer::tokenize(text, self.language);
        tagger::tag(&mut tokens, self.language, &self.lexicon);
        for token in &mut tokens {
            let lower = token.text.to_lowercase();
            token.lemma = match self.mode {
                LemmaMode::Lexical => {
                    lemmatizer::lemmatize(&lower, token.pos, self.language, &self.lexicon)
                }
                LemmaMode::Snowball => self.stemmer.stem(&lower).into_owned(),
            };
        }
        debug!("Pipeline produced {} tokens", tokens.len());
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(tokens: &'a [Token], text: &str) -> &'a Token {
        tokens
            .iter()
            .find(|t| t.text == text)
            .unwrap_or_else(|| panic!("no token {text:?}"))
    }

    #[test]
    fn english_sentence_gets_lemmas_and_tags() {
        let nlp = RuleBasedPipeline::new(Language::En, LemmaMode::Lexical);
        let tokens = nlp.process("The itinerant preachers organized public debates in Ouagadougou.");

        let preachers = find(&tokens, "preachers");
        assert_eq!(preachers.lemma, "preacher");
        assert_eq!(preachers.pos, Pos::Noun);

        let organized = find(&tokens, "organized");
        assert_eq!(organized.lemma, "organize");
        assert_eq!(organized.pos, Pos::Verb);

        let debates = find(&tokens, "debates");
        assert_eq!(debates.lemma, "debate");

        let city = find(&tokens, "Ouagadougou");
        assert_eq!(city.pos, Pos::Propn);
        assert_eq!(city.lemma, "ouagadougou");

        assert!(find(&tokens, "The").is_stop);
        assert!(find(&tokens, ".").is_punct);
    }

    #[test]
    fn french_sentence_gets_lemmas_and_tags() {
        let nlp = RuleBasedPipeline::new(Language::Fr, LemmaMode::Lexical);
        let tokens = nlp.process("Les associations islamiques ont fondé des mosquées.");

        assert_eq!(find(&tokens, "associations").lemma, "association");
        let adj = find(&tokens, "islamiques");
        assert_eq!(adj.pos, Pos::Adj);
        assert_eq!(adj.lemma, "islamique");
        let verb = find(&tokens, "fondé");
        assert_eq!(verb.pos, Pos::Verb);
        assert_eq!(verb.lemma, "fonder");
        let noun = find(&tokens, "mosquées");
        assert_eq!(noun.pos, Pos::Noun);
        assert_eq!(noun.lemma, "mosquée");
    }

    #[test]
    fn snowball_mode_stems() {
        let nlp = RuleBasedPipeline::new(Language::En, LemmaMode::Snowball);
        let tokens = nlp.process("running communities");
        assert_eq!(find(&tokens, "running").lemma, "run");
        assert_eq!(find(&tokens, "communities").lemma, "communiti");
    }

    #[test]
    fn lexicon_overrides_rules() {
        let mut lexicon = Lexicon::default();
        lexicon.insert("ulama", "ulama", Some(Pos::Noun));
        lexicon.insert("ulemas", "ulama", Some(Pos::Noun));
        let nlp = RuleBasedPipeline::with_lexicon(Language::En, LemmaMode::Lexical, lexicon);
        let tokens = nlp.process("local ulemas spoke");
        let t = find(&tokens, "ulemas");
        assert_eq!(t.lemma, "ulama");
        assert_eq!(t.pos, Pos::Noun);
    }

    #[test]
    fn pos_parses_case_insensitively() {
        assert_eq!("NOUN".parse::<Pos>(), Ok(Pos::Noun));
        assert_eq!(" propn ".parse::<Pos>(), Ok(Pos::Propn));
        assert!("determiner".parse::<Pos>().is_err());
    }
}
