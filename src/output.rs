//! Writing analyses as TypeScript modules, JSON or CSV.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::analysis::{CorpusAnalysis, NgramFrequency, TextAnalysis, WordFrequency};
use crate::error::{Error, Result};
use crate::language::Language;

/// Bigrams kept in a written publication file.
pub const WRITTEN_BIGRAMS: usize = 30;

pub const DEFAULT_OUTPUT_DIR: &str = "src/lib/data/analysis/publications";

const GENERATOR: &str = "analyze-publications";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// TypeScript module importable by the website
    #[default]
    Ts,
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Ts => "ts",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Where the analyzed text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextSource {
    #[default]
    FullText,
    Abstract,
    Combined,
}

impl TextSource {
    pub fn as_str(self) -> &'static str {
        match self {
            TextSource::FullText => "full-text",
            TextSource::Abstract => "abstract",
            TextSource::Combined => "combined",
        }
    }
}

/// Record written for one publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationTextAnalysis {
    pub publication_id: String,
    pub language: Language,
    pub word_count: usize,
    pub unique_words: usize,
    pub source: TextSource,
    pub analyzed_at: String,
    pub frequencies: Vec<WordFrequency>,
    pub bigrams: Vec<NgramFrequency>,
}

impl PublicationTextAnalysis {
    pub fn new(
        publication_id: &str,
        language: Language,
        source: TextSource,
        analysis: &TextAnalysis,
    ) -> Self {
        PublicationTextAnalysis {
            publication_id: publication_id.to_string(),
            language,
            word_count: analysis.word_count,
            unique_words: analysis.unique_words,
            source,
            analyzed_at: today(),
            frequencies: analysis.frequencies.clone(),
            bigrams: analysis
                .bigrams
                .iter()
                .take(WRITTEN_BIGRAMS)
                .cloned()
                .collect(),
        }
    }
}

/// Local date as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Prefix cells that a spreadsheet would treat as a formula.
/// # Example
/// ```
/// use publication_analysis::csv_safe_cell;
/// assert_eq!(csv_safe_cell("=SUM(A1)".to_string()), "'=SUM(A1)");
/// assert_eq!(csv_safe_cell("islam".to_string()), "islam");
/// ```
pub fn csv_safe_cell(cell: String) -> String {
    if cell.starts_with(['=', '+', '-', '@']) {
        format!("'{cell}")
    } else {
        cell
    }
}

/// Quote `s` as a single-quoted TypeScript string.
fn ts_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn frequency_lines(frequencies: &[WordFrequency]) -> String {
    frequencies
        .iter()
        .map(|f| {
            format!(
                "\t\t{{ word: {}, count: {}, lemma: {}, pos: {} }}",
                ts_string(&f.word),
                f.count,
                ts_string(&f.lemma),
                ts_string(f.pos.as_str())
            )
        })
        .collect::<Vec<_>>()
        .join(",\n")
}

fn bigram_lines(bigrams: &[NgramFrequency]) -> Result<String> {
    let mut lines = Vec::with_capacity(bigrams.len());
    for b in bigrams {
        let words = b
            .words
            .iter()
            .map(serde_json::to_string)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        lines.push(format!(
            "\t\t{{ ngram: {}, words: [{}], count: {} }}",
            ts_string(&b.ngram),
            words.join(", "),
            b.count
        ));
    }
    Ok(lines.join(",\n"))
}

/// Render a publication as the TypeScript module the website imports.
pub fn render_publication_ts(record: &PublicationTextAnalysis) -> Result<String> {
    let mut out = String::new();
    let _ = write!(
        out,
        "/**\n * Text analysis for: {id}\n * Auto-generated by {GENERATOR}\n */\n\n\
         import type {{ PublicationTextAnalysis }} from '$lib/types';\n\n\
         export const analysis: PublicationTextAnalysis = {{\n\
         \tpublicationId: {qid},\n\
         \tlanguage: '{lang}',\n\
         \twordCount: {wc},\n\
         \tuniqueWords: {uw},\n\
         \tsource: '{source}',\n\
         \tanalyzedAt: {date},\n\
         \tfrequencies: [\n{freq}\n\t],\n\
         \tbigrams: [\n{bigrams}\n\t]\n\
         }};\n",
        id = record.publication_id,
        qid = ts_string(&record.publication_id),
        lang = record.language.code(),
        wc = record.word_count,
        uw = record.unique_words,
        source = record.source.as_str(),
        date = ts_string(&record.analyzed_at),
        freq = frequency_lines(&record.frequencies),
        bigrams = bigram_lines(&record.bigrams)?,
    );
    Ok(out)
}

/// Render the corpus aggregate as a TypeScript module.
pub fn render_corpus_ts(corpus: &CorpusAnalysis) -> Result<String> {
    let mut out = String::new();
    let _ = write!(
        out,
        "/**\n * Corpus-wide text analysis\n * Auto-generated by {GENERATOR}\n */\n\n\
         import type {{ CorpusAnalysis }} from '$lib/types';\n\n\
         export const corpus: CorpusAnalysis = {{\n\
         \tpublicationCount: {count},\n\
         \ttotalWords: {words},\n\
         \tfrequencies: [\n{freq}\n\t],\n\
         \tbigrams: [\n{bigrams}\n\t],\n\
         \tbyLanguage: {{\n\t\ten: [{en}],\n\t\tfr: [{fr}]\n\t}},\n\
         \tanalyzedAt: {date}\n\
         }};\n",
        count = corpus.publication_count,
        words = corpus.total_words,
        freq = frequency_lines(&corpus.frequencies),
        bigrams = bigram_lines(&corpus.bigrams)?,
        en = id_list(&corpus.by_language.en),
        fr = id_list(&corpus.by_language.fr),
        date = ts_string(&corpus.analyzed_at),
    );
    Ok(out)
}

fn id_list(ids: &[String]) -> String {
    ids.iter()
        .map(|id| ts_string(id))
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::io(path, e))
}

fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
}

fn write_wordfreq_csv(path: &Path, frequencies: &[WordFrequency]) -> Result<()> {
    let mut w = csv::Writer::from_path(path)?;
    w.write_record(["word", "count", "lemma", "pos"])?;
    for f in frequencies {
        w.write_record([
            csv_safe_cell(f.word.clone()),
            f.count.to_string(),
            csv_safe_cell(f.lemma.clone()),
            f.pos.as_str().to_string(),
        ])?;
    }
    w.flush().map_err(|e| Error::io(path, e))
}

fn write_bigrams_csv(path: &Path, bigrams: &[NgramFrequency]) -> Result<()> {
    let mut w = csv::Writer::from_path(path)?;
    w.write_record(["ngram", "count"])?;
    for b in bigrams {
        w.write_record([csv_safe_cell(b.ngram.clone()), b.count.to_string()])?;
    }
    w.flush().map_err(|e| Error::io(path, e))
}

/// Write one publication into `dir` and return the files written.
pub fn write_publication(
    dir: &Path,
    record: &PublicationTextAnalysis,
    format: ExportFormat,
) -> Result<Vec<PathBuf>> {
    ensure_dir(dir)?;
    let id = &record.publication_id;
    match format {
        ExportFormat::Ts => {
            let path = dir.join(format!("{id}.ts"));
            write_file(&path, &render_publication_ts(record)?)?;
            Ok(vec![path])
        }
        ExportFormat::Json => {
            let path = dir.join(format!("{id}.json"));
            write_file(&path, &serde_json::to_string_pretty(record)?)?;
            Ok(vec![path])
        }
        ExportFormat::Csv => {
            let words = dir.join(format!("{id}_wordfreq.csv"));
            let bigrams = dir.join(format!("{id}_bigrams.csv"));
            write_wordfreq_csv(&words, &record.frequencies)?;
            write_bigrams_csv(&bigrams, &record.bigrams)?;
            Ok(vec![words, bigrams])
        }
    }
}

/// Directory the corpus file goes to: the parent of the publications directory.
pub fn corpus_dir(publications_dir: &Path) -> PathBuf {
    match publications_dir.parent() {
        Some(parent) => parent.to_path_buf(),
        None => publications_dir.to_path_buf(),
    }
}

/// Write the corpus aggregate next to the publications directory.
pub fn write_corpus(
    publications_dir: &Path,
    corpus: &CorpusAnalysis,
    format: ExportFormat,
) -> Result<Vec<PathBuf>> {
    let dir = corpus_dir(publications_dir);
    if !dir.as_os_str().is_empty() {
        ensure_dir(&dir)?;
    }
    match format {
        ExportFormat::Ts => {
            let path = dir.join("corpus.ts");
            write_file(&path, &render_corpus_ts(corpus)?)?;
            Ok(vec![path])
        }
        ExportFormat::Json => {
            let path = dir.join("corpus.json");
            write_file(&path, &serde_json::to_string_pretty(corpus)?)?;
            Ok(vec![path])
        }
        ExportFormat::Csv => {
            let words = dir.join("corpus_wordfreq.csv");
            let bigrams = dir.join("corpus_bigrams.csv");
            write_wordfreq_csv(&words, &corpus.frequencies)?;
            write_bigrams_csv(&bigrams, &corpus.bigrams)?;
            Ok(vec![words, bigrams])
        }
    }
}

/// Number of publication analyses of `format` present in `dir`.
pub fn count_analyses(dir: &Path, format: ExportFormat) -> usize {
    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };
    entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| {
            let Some(name) = p.file_name().and_then(|n| n.to_str()) else {
                return false;
            };
            match format {
                ExportFormat::Csv => name.ends_with("_wordfreq.csv"),
                _ => {
                    p.extension().is_some_and(|e| e == format.extension())
                        && p.file_stem().is_some_and(|s| s != "index")
                }
            }
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ByLanguage;
    use crate::nlp::Pos;

    fn record() -> PublicationTextAnalysis {
        PublicationTextAnalysis {
            publication_id: "islam-campus".into(),
            language: Language::Fr,
            word_count: 12,
            unique_words: 7,
            source: TextSource::FullText,
            analyzed_at: "2025-03-01".into(),
            frequencies: vec![
                WordFrequency {
                    word: "étudiant".into(),
                    count: 4,
                    lemma: "étudiant".into(),
                    pos: Pos::Noun,
                },
                WordFrequency {
                    word: "aujourd'hui".into(),
                    count: 2,
                    lemma: "aujourd'hui".into(),
                    pos: Pos::Adv,
                },
            ],
            bigrams: vec![NgramFrequency {
                ngram: "association islamique".into(),
                words: vec!["association".into(), "islamique".into()],
                count: 3,
            }],
        }
    }

    #[test]
    fn typescript_layout() {
        let ts = render_publication_ts(&record()).unwrap();
        let expected = "/**\n * Text analysis for: islam-campus\n * Auto-generated by analyze-publications\n */\n\n\
import type { PublicationTextAnalysis } from '$lib/types';\n\n\
export const analysis: PublicationTextAnalysis = {\n\
\tpublicationId: 'islam-campus',\n\
\tlanguage: 'fr',\n\
\twordCount: 12,\n\
\tuniqueWords: 7,\n\
\tsource: 'full-text',\n\
\tanalyzedAt: '2025-03-01',\n\
\tfrequencies: [\n\
\t\t{ word: 'étudiant', count: 4, lemma: 'étudiant', pos: 'noun' },\n\
\t\t{ word: 'aujourd\\'hui', count: 2, lemma: 'aujourd\\'hui', pos: 'adv' }\n\
\t],\n\
\tbigrams: [\n\
\t\t{ ngram: 'association islamique', words: [\"association\", \"islamique\"], count: 3 }\n\
\t]\n\
};\n";
        assert_eq!(ts, expected);
    }

    #[test]
    fn json_uses_camel_case() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["publicationId"], "islam-campus");
        assert_eq!(json["uniqueWords"], 7);
        assert_eq!(json["source"], "full-text");
        assert_eq!(json["frequencies"][0]["pos"], "noun");
        assert_eq!(json["bigrams"][0]["words"][1], "islamique");
    }

    #[test]
    fn only_thirty_bigrams_are_kept() {
        let bigrams: Vec<NgramFrequency> = (0..45)
            .map(|i| NgramFrequency {
                ngram: format!("word{i} other"),
                words: vec![format!("word{i}"), "other".into()],
                count: 50 - i,
            })
            .collect();
        let analysis = TextAnalysis {
            word_count: 0,
            unique_words: 0,
            frequencies: vec![],
            bigrams,
            tally: Default::default(),
        };
        let record = PublicationTextAnalysis::new("x", Language::En, TextSource::Abstract, &analysis);
        assert_eq!(record.bigrams.len(), WRITTEN_BIGRAMS);
        assert_eq!(record.analyzed_at.len(), 10);
    }

    #[test]
    fn csv_cells_are_neutralized() {
        assert_eq!(csv_safe_cell("+33".into()), "'+33");
        assert_eq!(csv_safe_cell("-x".into()), "'-x");
        assert_eq!(csv_safe_cell("@me".into()), "'@me");
        assert_eq!(csv_safe_cell("plain".into()), "plain");
    }

    #[test]
    fn writes_all_formats_and_counts_them() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("analysis").join("publications");

        let ts = write_publication(&dir, &record(), ExportFormat::Ts).unwrap();
        assert_eq!(ts, vec![dir.join("islam-campus.ts")]);
        fs::write(dir.join("index.ts"), "export {};").unwrap();
        assert_eq!(count_analyses(&dir, ExportFormat::Ts), 1);

        write_publication(&dir, &record(), ExportFormat::Json).unwrap();
        let back: PublicationTextAnalysis =
            serde_json::from_str(&fs::read_to_string(dir.join("islam-campus.json")).unwrap())
                .unwrap();
        assert_eq!(back, record());

        let csv = write_publication(&dir, &record(), ExportFormat::Csv).unwrap();
        assert_eq!(csv.len(), 2);
        let words = fs::read_to_string(dir.join("islam-campus_wordfreq.csv")).unwrap();
        assert!(words.starts_with("word,count,lemma,pos\n"));
        assert!(words.contains("étudiant,4,étudiant,noun"));
        assert_eq!(count_analyses(&dir, ExportFormat::Csv), 1);
        assert_eq!(count_analyses(&tmp.path().join("missing"), ExportFormat::Ts), 0);
    }

    #[test]
    fn corpus_goes_to_parent_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("analysis").join("publications");
        let corpus = CorpusAnalysis {
            publication_count: 2,
            total_words: 40,
            frequencies: vec![],
            bigrams: vec![],
            by_language: ByLanguage {
                en: vec!["a".into()],
                fr: vec!["b".into()],
            },
            analyzed_at: "2025-03-01".into(),
        };
        let written = write_corpus(&dir, &corpus, ExportFormat::Ts).unwrap();
        assert_eq!(written, vec![tmp.path().join("analysis").join("corpus.ts")]);
        let ts = fs::read_to_string(&written[0]).unwrap();
        assert!(ts.contains("export const corpus: CorpusAnalysis = {"));
        assert!(ts.contains("\t\ten: ['a'],\n\t\tfr: ['b']"));
        assert!(ts.contains("\tpublicationCount: 2,"));
    }
}
