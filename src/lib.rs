//! # Publication analysis
//!
//! Turns publication texts (markdown, plain text, PDF, DOCX, ODT) into lemma
//! frequencies and bigrams, written as static data files for word-cloud pages.
//!
//! One file is fully processed before the next begins:
//! extract → strip formatting → clean → tokenize/tag/lemmatize → count → write.
//!
//! ## Example
//! ```
//! use publication_analysis::{
//!     AnalysisOptions, Language, LemmaMode, RuleBasedPipeline, StopwordFilter, analyze_text,
//! };
//! let nlp = RuleBasedPipeline::new(Language::En, LemmaMode::Lexical);
//! let filter = StopwordFilter::new(Language::En);
//! let text = "Young preachers organized debates. Young preachers organized prayers.";
//! let analysis = analyze_text(text, &nlp, &filter, &AnalysisOptions::default());
//! assert!(analysis.frequencies.iter().any(|f| f.word == "preacher" && f.count == 2));
//! ```

mod analysis;
mod clean;
mod error;
mod extract;
mod language;
pub mod nlp;
mod output;
mod stopwords;

use std::path::{Path, PathBuf};

use log::{error, info, warn};

pub use analysis::{
    AnalysisOptions, ByLanguage, CorpusAccumulator, CorpusAnalysis, NgramFrequency, Tally,
    TextAnalysis, WordFrequency, analyze_text, extract_bigrams,
};
pub use clean::{clean_text, truncate_chars};
pub use error::{Error, Result};
pub use extract::{SourceFormat, collect_inputs, extract_text, strip_markdown};
pub use language::Language;
pub use nlp::{LemmaMode, Lexicon, Pipeline, Pos, RuleBasedPipeline, Token};
pub use output::{
    DEFAULT_OUTPUT_DIR, ExportFormat, PublicationTextAnalysis, TextSource, WRITTEN_BIGRAMS,
    corpus_dir, count_analyses, csv_safe_cell, render_corpus_ts, render_publication_ts, today,
    write_corpus, write_publication,
};
pub use stopwords::{StopwordFilter, custom_stopwords, is_reference_bigram, load_stopword_file};

/// Where and how results are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputOptions {
    pub dir: PathBuf,
    pub format: ExportFormat,
    pub source: TextSource,
}

impl Default for OutputOptions {
    fn default() -> Self {
        OutputOptions {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            format: ExportFormat::Ts,
            source: TextSource::FullText,
        }
    }
}

/// Everything a run needs besides the input paths.
#[derive(Debug, Clone, Default)]
pub struct RunSettings {
    pub analysis: AnalysisOptions,
    pub output: OutputOptions,
    pub lemma_mode: LemmaMode,
    /// Optional lexicon file (`lemma[/pos] -> form, form`).
    pub lexicon: Option<PathBuf>,
    /// Optional extra stopwords, one per line.
    pub stopwords: Option<PathBuf>,
    /// Also write the corpus aggregate next to the output directory.
    pub write_corpus: bool,
}

impl RunSettings {
    /// Build the NLP pipeline ("load the model") for `language`.
    pub fn build_pipeline(&self, language: Language) -> Result<RuleBasedPipeline> {
        let lexicon = match &self.lexicon {
            Some(path) => Lexicon::load(path)?,
            None => Lexicon::default(),
        };
        Ok(RuleBasedPipeline::with_lexicon(
            language,
            self.lemma_mode,
            lexicon,
        ))
    }

    pub fn build_filter(&self, language: Language) -> Result<StopwordFilter> {
        let filter = StopwordFilter::new(language);
        match &self.stopwords {
            Some(path) => Ok(filter.with_extra(load_stopword_file(path)?)),
            None => Ok(filter),
        }
    }
}

/// One publication that was analyzed and written.
#[derive(Debug, Clone)]
pub struct ProcessedPublication {
    pub id: String,
    pub language: Language,
    pub analysis: TextAnalysis,
    pub written: Vec<PathBuf>,
}

/// Outcome of a run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Ids of the publications written.
    pub processed: Vec<String>,
    /// `(file, error)` for every input that failed.
    pub failed_files: Vec<(String, String)>,
    /// First corpus file written, if any.
    pub corpus: Option<PathBuf>,
}

/// Publication id derived from a file name: lower-cased stem with spaces and
/// underscores turned into dashes.
/// # Example
/// ```
/// use publication_analysis::publication_id_for;
/// use std::path::Path;
/// assert_eq!(publication_id_for(Path::new("texts/fr/Islam_et Campus.md")), "islam-et-campus");
/// ```
pub fn publication_id_for(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_lowercase())
        .unwrap_or_default()
        .replace([' ', '_'], "-")
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Analyze already extracted `text` and write it under `id`.
pub fn process_text(
    text: &str,
    id: &str,
    pipeline: &dyn Pipeline,
    filter: &StopwordFilter,
    settings: &RunSettings,
) -> Result<ProcessedPublication> {
    let language = pipeline.language();
    let analysis = analyze_text(text, pipeline, filter, &settings.analysis);
    let record = PublicationTextAnalysis::new(id, language, settings.output.source, &analysis);
    let written = write_publication(&settings.output.dir, &record, settings.output.format)?;
    for path in &written {
        info!("  -> Written: {}", file_name(path));
    }
    Ok(ProcessedPublication {
        id: id.to_string(),
        language,
        analysis,
        written,
    })
}

/// Extract, analyze and write one file.
pub fn process_file(
    path: &Path,
    id: &str,
    pipeline: &dyn Pipeline,
    filter: &StopwordFilter,
    settings: &RunSettings,
) -> Result<ProcessedPublication> {
    info!("  Processing: {}", file_name(path));
    let text = extract_text(path)?;
    process_text(&text, id, pipeline, filter, settings)
}

/// Language of a single input: a `texts/<lang>/` folder wins, then the
/// requested language, then detection on the text, then English.
pub fn resolve_language(path: &Path, requested: Option<Language>, text: &str) -> Language {
    if let Some(hinted) = Language::from_path_hint(path) {
        info!("Auto-detected language: {}", hinted.name());
        return hinted;
    }
    if let Some(language) = requested {
        return language;
    }
    match Language::detect(text) {
        Some(detected) => {
            info!("Detected language from text: {}", detected.name());
            detected
        }
        None => {
            warn!("Could not detect language of {}, using English", file_name(path));
            Language::En
        }
    }
}

fn finish_corpus(
    corpus: CorpusAccumulator,
    settings: &RunSettings,
) -> Result<Option<PathBuf>> {
    if !settings.write_corpus || corpus.is_empty() {
        return Ok(None);
    }
    let aggregate = corpus.finish(&settings.analysis);
    let written = write_corpus(&settings.output.dir, &aggregate, settings.output.format)?;
    for path in &written {
        info!("  -> Written: {}", path.display());
    }
    Ok(written.into_iter().next())
}

/// Process a single file under the given id. Any failure is returned.
///
/// The corpus aggregate describes a whole batch, so it is never written here.
pub fn run_file(
    path: &Path,
    id: &str,
    requested: Option<Language>,
    settings: &RunSettings,
) -> Result<BatchReport> {
    info!("Processing single file...");
    info!("  Processing: {}", file_name(path));
    let text = extract_text(path)?;
    let language = resolve_language(path, requested, &text);
    let pipeline = settings.build_pipeline(language)?;
    let filter = settings.build_filter(language)?;
    let processed = process_text(&text, id, &pipeline, &filter, settings)?;

    if settings.write_corpus {
        warn!("Corpus is only written in batch mode, leaving it untouched");
    }
    Ok(BatchReport {
        processed: vec![processed.id],
        failed_files: Vec::new(),
        corpus: None,
    })
}

/// Process every input file directly inside `dir` as `language`.
///
/// Per-file failures are logged and collected; the remaining files are still
/// processed.
pub fn run_batch(dir: &Path, language: Language, settings: &RunSettings) -> Result<BatchReport> {
    if !dir.is_dir() {
        return Err(Error::MissingDirectory(dir.to_path_buf()));
    }
    let inputs = collect_inputs(dir);
    if inputs.is_empty() {
        return Err(Error::NoInputFiles(dir.to_path_buf()));
    }
    info!("Found {} files in {}", inputs.len(), dir.display());

    let pipeline = settings.build_pipeline(language)?;
    let filter = settings.build_filter(language)?;
    let mut report = BatchReport::default();
    let mut corpus = CorpusAccumulator::new();

    for path in &inputs {
        let id = publication_id_for(path);
        match process_file(path, &id, &pipeline, &filter, settings) {
            Ok(processed) => {
                corpus.add(&processed.id, language, &processed.analysis);
                report.processed.push(processed.id);
            }
            Err(e) => {
                error!("  ERROR processing {}: {}", file_name(path), e);
                report
                    .failed_files
                    .push((path.display().to_string(), e.to_string()));
            }
        }
    }

    report.corpus = finish_corpus(corpus, settings)?;
    Ok(report)
}
