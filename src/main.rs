#![forbid(unsafe_code)]
//! # analyze-publications
//!
//! Command-line front end of the `publication_analysis` crate. Reads
//! publication texts, computes lemma frequencies and bigrams, and writes one
//! data file per publication for the website's word clouds.
//!
//! ## Example
//! ```bash
//! # one file, language from the texts/fr/ folder
//! analyze-publications --file scripts/texts/fr/article.md --id article-id
//!
//! # every file in scripts/texts/en
//! analyze-publications --batch en
//! ```
//!
//! Set `RUST_LOG=debug` for token and lexicon details.

use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser};
use env_logger::Env;
use log::error;
use publication_analysis::{
    AnalysisOptions, BatchReport, DEFAULT_OUTPUT_DIR, ExportFormat, Language, LemmaMode,
    OutputOptions, RunSettings, TextSource, count_analyses, run_batch, run_file,
};

#[derive(Parser)]
#[command(
    name = "analyze-publications",
    author,
    version,
    about = "Analyze publication texts for word cloud visualizations"
)]
struct Cli {
    /// Single file to process (.md, .txt, .pdf, .docx or .odt)
    #[arg(long, short = 'f')]
    file: Option<PathBuf>,

    /// Publication id for --file
    #[arg(long)]
    id: Option<String>,

    /// Language of --file when the path has no texts/<lang>/ folder (detected if omitted)
    #[arg(long, short = 'l', value_enum)]
    language: Option<Language>,

    /// Process every file in <texts-dir>/<lang>
    #[arg(long, short = 'b', value_enum)]
    batch: Option<Language>,

    /// Folder holding the en/ and fr/ text folders
    #[arg(long, default_value = "scripts/texts")]
    texts_dir: PathBuf,

    /// Where publication files are written
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Ts)]
    format: ExportFormat,

    /// Source recorded in the output
    #[arg(long, value_enum, default_value_t = TextSource::FullText)]
    source: TextSource,

    /// Lemma strategy
    #[arg(long, value_enum, default_value_t = LemmaMode::Lexical)]
    lemmatizer: LemmaMode,

    /// Optional lexicon file (lemma[/pos] -> form, form)
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Optional additional stopword file (.txt, one word per line)
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Number of top words kept per publication
    #[arg(long, default_value_t = 200)]
    top_words: usize,

    /// Minimum lemma length
    #[arg(long, default_value_t = 3)]
    min_length: usize,

    /// Minimum count for a word to be kept
    #[arg(long, default_value_t = 2)]
    min_count: usize,

    /// Number of top bigrams computed per publication
    #[arg(long, default_value_t = 50)]
    top_bigrams: usize,

    /// Also write the corpus aggregate next to the output directory (batch mode only)
    #[arg(long, default_value_t = false)]
    corpus: bool,
}

impl Cli {
    fn settings(&self) -> RunSettings {
        RunSettings {
            analysis: AnalysisOptions {
                top_words: self.top_words,
                min_word_length: self.min_length,
                min_word_count: self.min_count,
                top_bigrams: self.top_bigrams,
                ..AnalysisOptions::default()
            },
            output: OutputOptions {
                dir: self.output_dir.clone(),
                format: self.format,
                source: self.source,
            },
            lemma_mode: self.lemmatizer,
            lexicon: self.lexicon.clone(),
            stopwords: self.stopwords.clone(),
            write_corpus: self.corpus,
        }
    }
}

fn print_failed_files(failed: &[(String, String)]) {
    println!("\n{} file(s) could not be processed:", failed.len());
    for (file, reason) in failed {
        println!("  {file}: {reason}");
    }
}

fn print_summary(report: &BatchReport, settings: &RunSettings) {
    if !report.failed_files.is_empty() {
        print_failed_files(&report.failed_files);
    }
    if report.processed.is_empty() {
        return;
    }
    let total = count_analyses(&settings.output.dir, settings.output.format);
    println!("\n{}", "=".repeat(60));
    println!("Done! Processed {} publication(s).", report.processed.len());
    println!("Total analyses available: {total}");
    println!("Files written to: {}", settings.output.dir.display());
    if let Some(corpus) = &report.corpus {
        println!("Corpus written to: {}", corpus.display());
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let settings = cli.settings();

    let result = match (&cli.file, &cli.id, cli.batch) {
        (Some(file), Some(id), _) => run_file(file, id, cli.language, &settings),
        (_, _, Some(language)) => {
            let dir = cli.texts_dir.join(language.code());
            run_batch(&dir, language, &settings)
        }
        _ => {
            let _ = Cli::command().print_help();
            return;
        }
    };

    match result {
        Ok(report) => print_summary(&report, &settings),
        Err(e) => {
            error!("Error: {}", e);
            process::exit(1);
        }
    }
}
