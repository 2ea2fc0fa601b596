use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use whatlang::Lang;

/// Languages the publications are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Fr,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "French",
        }
    }

    /// Language implied by a `texts/<lang>/` folder in the path, if any.
    pub fn from_path_hint(path: &Path) -> Option<Self> {
        let s = path.to_string_lossy();
        if s.contains("/texts/fr/") || s.contains("\\texts\\fr\\") {
            Some(Language::Fr)
        } else if s.contains("/texts/en/") || s.contains("\\texts\\en\\") {
            Some(Language::En)
        } else {
            None
        }
    }

    /// Detect English or French from the text itself. Unreliable guesses and
    /// other languages yield `None`.
    pub fn detect(text: &str) -> Option<Self> {
        let info = whatlang::detect(text)?;
        if !info.is_reliable() {
            return None;
        }
        match info.lang() {
            Lang::Eng => Some(Language::En),
            Lang::Fra => Some(Language::Fr),
            _ => None,
        }
    }

    pub(crate) fn stemmer_algorithm(self) -> rust_stemmers::Algorithm {
        match self {
            Language::En => rust_stemmers::Algorithm::English,
            Language::Fr => rust_stemmers::Algorithm::French,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_hint_matches_texts_folders() {
        assert_eq!(
            Language::from_path_hint(Path::new("scripts/texts/fr/article.md")),
            Some(Language::Fr)
        );
        assert_eq!(
            Language::from_path_hint(Path::new("/home/me/scripts/texts/en/paper.txt")),
            Some(Language::En)
        );
        assert_eq!(Language::from_path_hint(Path::new("paper.txt")), None);
    }

    #[test]
    fn detects_english_and_french() {
        let en = "The religious associations on university campuses organised many public \
                  debates about the role of faith in national politics during the last decade.";
        let fr = "Les associations religieuses sur les campus universitaires ont organisé de \
                  nombreux débats publics sur la place de la foi dans la politique nationale.";
        assert_eq!(Language::detect(en), Some(Language::En));
        assert_eq!(Language::detect(fr), Some(Language::Fr));
    }

    #[test]
    fn gibberish_is_not_detected() {
        assert_eq!(Language::detect("12345 !!! ???"), None);
    }
}
