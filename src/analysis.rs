//! Lemma and bigram counting.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::clean::{clean_text, truncate_chars};
use crate::language::Language;
use crate::nlp::{Pipeline, Pos, Token};
use crate::output::today;
use crate::stopwords::StopwordFilter;

const MIN_BIGRAM_WORD_LENGTH: usize = 3;
const MIN_BIGRAM_COUNT: usize = 2;

/// Knobs for frequency extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Most common lemmas kept per publication.
    pub top_words: usize,
    /// Lemmas shorter than this (in characters) are ignored.
    pub min_word_length: usize,
    /// Kept lemmas must occur at least this often.
    pub min_word_count: usize,
    /// Most common bigrams kept per publication.
    pub top_bigrams: usize,
    /// Cleaned text is cut to this many characters before analysis.
    pub max_chars: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            top_words: 200,
            min_word_length: 3,
            min_word_count: 2,
            top_bigrams: 50,
            max_chars: 1_000_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
    pub lemma: String,
    pub pos: Pos,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NgramFrequency {
    pub ngram: String,
    pub words: Vec<String>,
    pub count: usize,
}

/// Counts keyed by string, remembering the order keys were first seen so
/// that ties rank by first appearance.
#[derive(Debug, Clone, Default)]
struct OrderedCounts {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl OrderedCounts {
    fn add(&mut self, key: &str, n: usize) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].1 += n,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), n));
            }
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut sorted: Vec<(&str, usize)> =
            self.entries.iter().map(|(k, c)| (k.as_str(), *c)).collect();
        // stable: equal counts keep first-seen order
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted.truncate(n);
        sorted
    }
}

/// Full lemma, POS and bigram counts of one or more texts.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    words: usize,
    lemmas: OrderedCounts,
    pos: HashMap<String, Vec<(Pos, usize)>>,
    bigrams: OrderedCounts,
}

impl Tally {
    fn add_word(&mut self, lemma: &str, pos: Pos) {
        self.add_word_n(lemma, pos, 1);
    }

    fn add_word_n(&mut self, lemma: &str, pos: Pos, n: usize) {
        self.words += n;
        self.lemmas.add(lemma, n);
        let seen = self.pos.entry(lemma.to_string()).or_default();
        match seen.iter_mut().find(|(p, _)| *p == pos) {
            Some((_, count)) => *count += n,
            None => seen.push((pos, n)),
        }
    }

    /// Fold `other` into `self`.
    pub fn merge(&mut self, other: &Tally) {
        for (lemma, _) in &other.lemmas.entries {
            if let Some(tallies) = other.pos.get(lemma) {
                for &(pos, n) in tallies {
                    self.add_word_n(lemma, pos, n);
                }
            }
        }
        for (bigram, n) in &other.bigrams.entries {
            self.bigrams.add(bigram, *n);
        }
    }

    /// Number of counted word tokens.
    pub fn word_count(&self) -> usize {
        self.words
    }

    /// Number of distinct lemmas.
    pub fn unique_words(&self) -> usize {
        self.lemmas.len()
    }

    /// Most frequent POS of `lemma`; the POS seen first wins a tie.
    fn majority_pos(&self, lemma: &str) -> Pos {
        let mut best: Option<(Pos, usize)> = None;
        for &(pos, n) in self.pos.get(lemma).map(Vec::as_slice).unwrap_or_default() {
            if best.is_none_or(|(_, b)| n > b) {
                best = Some((pos, n));
            }
        }
        best.map(|(pos, _)| pos).unwrap_or(Pos::Other)
    }

    pub fn frequencies(&self, options: &AnalysisOptions) -> Vec<WordFrequency> {
        self.lemmas
            .most_common(options.top_words)
            .into_iter()
            .filter(|&(_, count)| count >= options.min_word_count)
            .map(|(lemma, count)| WordFrequency {
                word: lemma.to_string(),
                count,
                lemma: lemma.to_string(),
                pos: self.majority_pos(lemma),
            })
            .collect()
    }

    pub fn bigrams(&self, options: &AnalysisOptions) -> Vec<NgramFrequency> {
        self.bigrams
            .most_common(options.top_bigrams)
            .into_iter()
            .filter(|&(_, count)| count >= MIN_BIGRAM_COUNT)
            .map(|(ngram, count)| NgramFrequency {
                ngram: ngram.to_string(),
                words: ngram.split(' ').map(str::to_string).collect(),
                count,
            })
            .collect()
    }
}

/// Result of analyzing one text.
#[derive(Debug, Clone)]
pub struct TextAnalysis {
    pub word_count: usize,
    pub unique_words: usize,
    pub frequencies: Vec<WordFrequency>,
    pub bigrams: Vec<NgramFrequency>,
    pub tally: Tally,
}

/// Clean `text`, run it through `pipeline` once and count lemmas and bigrams.
///
/// `max_chars` applies before tokenizing, so bigrams see the same truncated
/// text as the word counts.
pub fn analyze_text(
    text: &str,
    pipeline: &dyn Pipeline,
    filter: &StopwordFilter,
    options: &AnalysisOptions,
) -> TextAnalysis {
    let cleaned = clean_text(text);
    let text = truncate_chars(&cleaned, options.max_chars);
    let tokens = pipeline.process(text);

    let mut tally = Tally::default();
    count_words(&tokens, filter, options, &mut tally);
    count_bigrams(&tokens, filter, &mut tally);
    debug!(
        "{} tokens, {} counted words, {} distinct lemmas, {} distinct bigrams",
        tokens.len(),
        tally.word_count(),
        tally.unique_words(),
        tally.bigrams.len()
    );

    TextAnalysis {
        word_count: tally.word_count(),
        unique_words: tally.unique_words(),
        frequencies: tally.frequencies(options),
        bigrams: tally.bigrams(options),
        tally,
    }
}

/// Frequent adjacent lemma pairs in `tokens`, citation noise removed.
pub fn extract_bigrams(
    tokens: &[Token],
    filter: &StopwordFilter,
    options: &AnalysisOptions,
) -> Vec<NgramFrequency> {
    let mut tally = Tally::default();
    count_bigrams(tokens, filter, &mut tally);
    tally.bigrams(options)
}

fn count_words(
    tokens: &[Token],
    filter: &StopwordFilter,
    options: &AnalysisOptions,
    tally: &mut Tally,
) {
    for token in tokens {
        if token.is_stop || token.is_punct || token.is_space || token.like_num {
            continue;
        }
        if token.lemma.chars().count() < options.min_word_length {
            continue;
        }
        let lemma = token.lemma.to_lowercase();
        if filter.is_stopword(&lemma) || !token.is_alpha {
            continue;
        }
        tally.add_word(&lemma, token.pos);
    }
}

fn count_bigrams(tokens: &[Token], filter: &StopwordFilter, tally: &mut Tally) {
    for (i, pair) in tokens.windows(2).enumerate() {
        let (t1, t2) = (&pair[0], &pair[1]);
        // second half of a hyphenated compound
        if i > 0 && tokens[i - 1].text == "-" {
            continue;
        }
        if [t1, t2]
            .iter()
            .any(|t| t.is_stop || t.is_punct || t.is_space || !t.is_alpha)
        {
            continue;
        }
        let l1 = t1.lemma.to_lowercase();
        let l2 = t2.lemma.to_lowercase();
        if filter.is_stopword(&l1) || filter.is_stopword(&l2) {
            continue;
        }
        if l1.chars().count() < MIN_BIGRAM_WORD_LENGTH || l2.chars().count() < MIN_BIGRAM_WORD_LENGTH
        {
            continue;
        }
        let bigram = format!("{l1} {l2}");
        if filter.is_reference_bigram(&bigram) {
            continue;
        }
        tally.bigrams.add(&bigram, 1);
    }
}

/// Publication ids grouped by language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByLanguage {
    pub en: Vec<String>,
    pub fr: Vec<String>,
}

/// Counts aggregated over every publication of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusAnalysis {
    pub publication_count: usize,
    pub total_words: usize,
    pub frequencies: Vec<WordFrequency>,
    pub bigrams: Vec<NgramFrequency>,
    pub by_language: ByLanguage,
    pub analyzed_at: String,
}

/// Merges per-publication tallies into corpus-wide counts.
#[derive(Debug, Clone, Default)]
pub struct CorpusAccumulator {
    tally: Tally,
    by_language: ByLanguage,
}

impl CorpusAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, publication_id: &str, language: Language, analysis: &TextAnalysis) {
        self.tally.merge(&analysis.tally);
        let ids = match language {
            Language::En => &mut self.by_language.en,
            Language::Fr => &mut self.by_language.fr,
        };
        ids.push(publication_id.to_string());
    }

    pub fn publication_count(&self) -> usize {
        self.by_language.en.len() + self.by_language.fr.len()
    }

    pub fn is_empty(&self) -> bool {
        self.publication_count() == 0
    }

    pub fn finish(self, options: &AnalysisOptions) -> CorpusAnalysis {
        CorpusAnalysis {
            publication_count: self.publication_count(),
            total_words: self.tally.word_count(),
            frequencies: self.tally.frequencies(options),
            bigrams: self.tally.bigrams(options),
            by_language: self.by_language,
            analyzed_at: today(),
        }
    }
}
