use unicode_segmentation::UnicodeSegmentation;

use super::Pos;
use super::Token;
use super::stopwords::{is_number_word, is_stop_word};
use crate::language::Language;

/// Elided French words written as `<word>'`.
const FRENCH_ELISIONS: &[&str] = &[
    "l", "d", "j", "m", "n", "s", "t", "c", "qu", "jusqu", "lorsqu", "puisqu", "quoiqu",
];

/// English contractions split from the end of a word. `n't` must come first.
const ENGLISH_CLITICS: &[&str] = &[
    "n't", "n’t", "'s", "’s", "'re", "’re", "'ve", "’ve", "'ll", "’ll", "'d", "’d", "'m", "’m",
];

/// Split `text` into tokens with their lexical flags set. Lemma and POS are
/// filled in by later stages.
pub(crate) fn tokenize(text: &str, language: Language) -> Vec<Token> {
    split(text, language)
        .into_iter()
        .map(|piece| build_token(piece, language))
        .collect()
}

fn split(text: &str, language: Language) -> Vec<&str> {
    let mut pieces = Vec::new();
    for piece in text.split_word_bounds() {
        if piece == " " {
            continue;
        }
        if piece.chars().all(char::is_whitespace) {
            pieces.push(piece);
            continue;
        }
        match language {
            Language::Fr => split_elision(piece, &mut pieces),
            Language::En => split_clitic(piece, &mut pieces),
        }
    }
    pieces
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '’'
}

fn split_elision<'a>(piece: &'a str, out: &mut Vec<&'a str>) {
    if let Some((idx, c)) = piece.char_indices().find(|&(_, c)| is_apostrophe(c)) {
        let cut = idx + c.len_utf8();
        let head = piece[..idx].to_lowercase();
        if cut < piece.len() && FRENCH_ELISIONS.contains(&head.as_str()) {
            out.push(&piece[..cut]);
            split_elision(&piece[cut..], out);
            return;
        }
    }
    out.push(piece);
}

fn split_clitic<'a>(piece: &'a str, out: &mut Vec<&'a str>) {
    for clitic in ENGLISH_CLITICS {
        if let Some(at) = piece.len().checked_sub(clitic.len()) {
            if at > 0 && piece.is_char_boundary(at) && piece[at..].eq_ignore_ascii_case(clitic) {
                out.push(&piece[..at]);
                out.push(&piece[at..]);
                return;
            }
        }
    }
    out.push(piece);
}

fn build_token(text: &str, language: Language) -> Token {
    let lower = text.to_lowercase();
    let is_space = text.chars().all(char::is_whitespace);
    Token {
        text: text.to_string(),
        lemma: lower.clone(),
        pos: Pos::Other,
        is_stop: !is_space && is_stop_word(language, &lower),
        is_punct: !text.is_empty() && !text.chars().any(|c| c.is_alphanumeric() || c.is_whitespace()),
        is_space,
        like_num: like_num(&lower, language),
        is_alpha: !text.is_empty() && text.chars().all(char::is_alphabetic),
    }
}

/// Digits with optional `.`/`,` separators, or a spelled-out number.
///
/// Word bounds split `3/4` into `3`, `/`, `4`, so each part is judged alone.
fn like_num(lower: &str, language: Language) -> bool {
    let unsigned = lower.trim_start_matches(['+', '-', '±', '~']);
    let digits: String = unsigned.chars().filter(|c| *c != ',' && *c != '.').collect();
    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }
    is_number_word(language, lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str, language: Language) -> Vec<String> {
        tokenize(text, language).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn hyphens_are_separate_tokens() {
        assert_eq!(texts("faith-based groups", Language::En), ["faith", "-", "based", "groups"]);
    }

    #[test]
    fn single_spaces_are_not_tokens_but_runs_are() {
        let tokens = tokenize("a  b", Language::En);
        assert_eq!(tokens.len(), 3);
        assert!(tokens[1].is_space);
        assert!(!tokens[1].is_stop);
    }

    #[test]
    fn french_elisions_split() {
        assert_eq!(
            texts("l'État et qu’il jusqu'au", Language::Fr),
            ["l'", "État", "et", "qu’", "il", "jusqu'", "au"]
        );
        assert_eq!(texts("aujourd'hui", Language::Fr), ["aujourd'hui"]);
    }

    #[test]
    fn english_clitics_split() {
        assert_eq!(texts("don't", Language::En), ["do", "n't"]);
        assert_eq!(texts("the imam's sermon", Language::En), ["the", "imam", "'s", "sermon"]);
        assert_eq!(texts("They’re", Language::En), ["They", "’re"]);
    }

    #[test]
    fn flags() {
        let tokens = tokenize("In 1,200 cases, twenty 3/4", Language::En);
        let by_text = |s: &str| tokens.iter().find(|t| t.text == s).unwrap().clone();
        assert!(by_text("In").is_stop);
        assert!(by_text("1,200").like_num);
        assert!(!by_text("1,200").is_alpha);
        assert!(by_text("cases").is_alpha);
        assert!(by_text(",").is_punct);
        assert!(by_text("twenty").like_num);
        assert!(by_text("3").like_num);
        assert!(by_text("/").is_punct);
        assert!(by_text("4").like_num);
    }
}
