use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;

use super::Pos;
use crate::error::{Error, Result};

/// Lemma and optional part of speech for one word form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pub lemma: String,
    pub pos: Option<Pos>,
}

/// User-supplied word forms that take precedence over the built-in rules.
///
/// The file format is one entry per line:
///
/// ```text
/// # comment
/// ulama/noun -> ulema, ulemas, oulémas
/// marabout -> marabouts
/// ```
///
/// The lemma itself is also registered, so a `/pos` applies to it too.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, LexiconEntry>,
}

impl Lexicon {
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let lexicon = Self::parse(&source, path)?;
        debug!("Lexicon {} has {} forms", path.display(), lexicon.len());
        Ok(lexicon)
    }

    /// Parse lexicon text. `origin` is only used in error messages.
    pub fn parse(source: &str, origin: &Path) -> Result<Self> {
        let mut lexicon = Lexicon::default();
        for (idx, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fail = |message: String| Error::Lexicon {
                path: origin.to_path_buf(),
                line: idx + 1,
                message,
            };

            let (head, forms) = line
                .split_once("->")
                .ok_or_else(|| fail("expected 'lemma[/pos] -> form, form'".to_string()))?;
            let (lemma, pos) = match head.split_once('/') {
                Some((lemma, pos)) => (lemma.trim(), Some(pos.parse::<Pos>().map_err(&fail)?)),
                None => (head.trim(), None),
            };
            if lemma.is_empty() {
                return Err(fail("empty lemma".to_string()));
            }
            let forms: Vec<&str> = forms
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .collect();
            if forms.is_empty() {
                return Err(fail(format!("no word forms listed for '{lemma}'")));
            }

            lexicon.insert(lemma, lemma, pos);
            for form in forms {
                lexicon.insert(form, lemma, pos);
            }
        }
        Ok(lexicon)
    }

    /// Register `form` (case-insensitive) as an inflection of `lemma`.
    pub fn insert(&mut self, form: &str, lemma: &str, pos: Option<Pos>) {
        self.entries.insert(
            form.to_lowercase(),
            LexiconEntry {
                lemma: lemma.to_lowercase(),
                pos,
            },
        );
    }

    /// Entry for an already lower-cased word form.
    pub fn lookup(&self, form: &str) -> Option<&LexiconEntry> {
        self.entries.get(form)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entries_comments_and_pos() {
        let src = "# custom forms\n\nulama/noun -> Ulema, ulemas\nmarabout -> marabouts,\n";
        let lexicon = Lexicon::parse(src, Path::new("lex.txt")).unwrap();
        assert_eq!(lexicon.len(), 5);
        let entry = lexicon.lookup("ulema").unwrap();
        assert_eq!(entry.lemma, "ulama");
        assert_eq!(entry.pos, Some(Pos::Noun));
        assert_eq!(lexicon.lookup("ulama").unwrap().pos, Some(Pos::Noun));
        assert_eq!(lexicon.lookup("marabouts").unwrap().pos, None);
    }

    #[test]
    fn malformed_lines_report_line_numbers() {
        let err = Lexicon::parse("a -> b\nbroken line\n", Path::new("lex.txt")).unwrap_err();
        match err {
            Error::Lexicon { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
        let err = Lexicon::parse("x/thing -> y", Path::new("lex.txt")).unwrap_err();
        assert!(err.to_string().contains("unknown part of speech"));
        assert!(Lexicon::parse("x ->  ,", Path::new("lex.txt")).is_err());
        assert!(Lexicon::parse(" -> y", Path::new("lex.txt")).is_err());
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.txt");
        fs::write(&path, "zaouïa/noun -> zaouïas, zawiya\n").unwrap();
        let lexicon = Lexicon::load(&path).unwrap();
        assert_eq!(lexicon.lookup("zawiya").unwrap().lemma, "zaouïa");
        assert!(Lexicon::load(&dir.path().join("missing.txt")).is_err());
    }
}
