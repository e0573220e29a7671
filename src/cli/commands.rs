//! CLI commands implementation.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::analysis::{
    build_chapter_qa_context, detect_chapter_reference, extract_chapters, extract_key_phrases,
    extract_keywords, extract_named_entities, extract_summary, format_chapter_list,
    get_chapter_with_context, get_text_statistics, SummaryOptions,
};
use crate::config::{AnalysisSettings, SETTINGS_FILE};
use crate::ocr::clean_math_ocr;

#[derive(Parser)]
#[command(name = "tmeta")]
#[command(about = "Document text analytics: chapters, key phrases, readability, summaries")]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to ./textmeta.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// List detected chapters
    Chapters {
        /// Input file ("-" for stdin)
        file: PathBuf,
        /// Emit full chapter records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a chapter/section/part/appendix reference in a query
    Reference {
        /// Query text, e.g. "summarize chapter 9"
        query: String,
        #[arg(long)]
        json: bool,
    },

    /// Show a chapter with adjacent-chapter context
    Context {
        file: PathBuf,
        /// Chapter number to target
        #[arg(short = 'n', long)]
        chapter: u32,
        #[arg(long)]
        json: bool,
    },

    /// Build a token-budgeted QA context block for a chapter
    Qa {
        file: PathBuf,
        /// Chapter number to target
        #[arg(short = 'n', long)]
        chapter: u32,
        /// Document title used in the context header
        #[arg(short, long, default_value = "Document")]
        title: String,
        /// Token budget (overrides settings)
        #[arg(long)]
        max_tokens: Option<usize>,
    },

    /// Extract RAKE key phrases
    Keyphrases {
        file: PathBuf,
        /// Maximum phrases (overrides settings)
        #[arg(short, long)]
        max: Option<usize>,
        #[arg(long)]
        json: bool,
    },

    /// Extract single-word keywords
    Keywords {
        file: PathBuf,
        #[arg(short, long)]
        max: Option<usize>,
        #[arg(long)]
        json: bool,
    },

    /// Heuristic named-entity scan
    Entities {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },

    /// Text statistics and readability
    Stats {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },

    /// Extractive summary
    Summary {
        file: PathBuf,
        /// Sentences to return (overrides settings)
        #[arg(short, long)]
        sentences: Option<usize>,
    },

    /// Clean math OCR artifacts from text
    CleanOcr { file: PathBuf },
}

/// Run the CLI.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE));
    let settings = AnalysisSettings::load(&settings_path)?;

    match cli.command {
        Commands::Chapters { file, json } => cmd_chapters(&file, json),
        Commands::Reference { query, json } => cmd_reference(&query, json),
        Commands::Context {
            file,
            chapter,
            json,
        } => cmd_context(&file, chapter, json),
        Commands::Qa {
            file,
            chapter,
            title,
            max_tokens,
        } => cmd_qa(
            &file,
            chapter,
            &title,
            max_tokens.unwrap_or(settings.context_max_tokens),
        ),
        Commands::Keyphrases { file, max, json } => {
            let mut options = settings.key_phrase_options();
            if let Some(max) = max {
                options.max_phrases = max;
            }
            let text = read_input(&file)?;
            let phrases = extract_key_phrases(&text, &options);
            print_scored(&phrases, json)
        }
        Commands::Keywords { file, max, json } => {
            let mut options = settings.keyword_options();
            if let Some(max) = max {
                options.max_keywords = max;
            }
            let text = read_input(&file)?;
            let keywords = extract_keywords(&text, &options);
            print_scored(&keywords, json)
        }
        Commands::Entities { file, json } => cmd_entities(&file, json),
        Commands::Stats { file, json } => cmd_stats(&file, json),
        Commands::Summary { file, sentences } => cmd_summary(
            &file,
            sentences.unwrap_or(settings.summary_sentences),
            &settings,
        ),
        Commands::CleanOcr { file } => {
            let text = read_input(&file)?;
            println!("{}", clean_math_ocr(&text));
            Ok(())
        }
    }
}

/// Read the input file, or stdin when the path is "-".
fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

fn cmd_chapters(file: &Path, json: bool) -> anyhow::Result<()> {
    let text = read_input(file)?;
    if json {
        let chapters = extract_chapters(&text);
        println!("{}", serde_json::to_string_pretty(&chapters)?);
    } else {
        println!("{}", format_chapter_list(&text));
    }
    Ok(())
}

fn cmd_reference(query: &str, json: bool) -> anyhow::Result<()> {
    match detect_chapter_reference(query) {
        Some(reference) if json => println!("{}", serde_json::to_string_pretty(&reference)?),
        Some(reference) => println!(
            "{} {} (matched {:?})",
            reference.kind.as_str(),
            reference.number,
            reference.raw
        ),
        None if json => println!("null"),
        None => println!("{}", style("no reference detected").dim()),
    }
    Ok(())
}

fn cmd_context(file: &Path, chapter: u32, json: bool) -> anyhow::Result<()> {
    let text = read_input(file)?;
    match get_chapter_with_context(&text, chapter, true) {
        Some(ctx) if json => println!("{}", serde_json::to_string_pretty(&ctx)?),
        Some(ctx) => {
            println!(
                "{} (~{} tokens)",
                style(format!("Chapter {}: {}", ctx.chapter.number, ctx.chapter.title)).bold(),
                ctx.estimated_tokens
            );
            if !ctx.context_info.is_empty() {
                println!("\n{}", ctx.context_info.trim_end());
            }
            println!("\n{}", ctx.chapter.content);
        }
        None => anyhow::bail!("no chapter numbered {chapter} in {}", file.display()),
    }
    Ok(())
}

fn cmd_qa(file: &Path, chapter: u32, title: &str, max_tokens: usize) -> anyhow::Result<()> {
    let text = read_input(file)?;
    println!("{}", build_chapter_qa_context(title, &text, chapter, max_tokens));
    Ok(())
}

fn print_scored(items: &[crate::models::KeyPhrase], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else if items.is_empty() {
        println!("{}", style("nothing extracted").dim());
    } else {
        for item in items {
            println!("{:>8.3}  {}", item.score, item.text);
        }
    }
    Ok(())
}

fn cmd_entities(file: &Path, json: bool) -> anyhow::Result<()> {
    let text = read_input(file)?;
    let entities = extract_named_entities(&text);
    if json {
        println!("{}", serde_json::to_string_pretty(&entities)?);
        return Ok(());
    }
    for (label, bucket) in [
        ("People", &entities.people),
        ("Organizations", &entities.organizations),
        ("Places", &entities.places),
    ] {
        if !bucket.is_empty() {
            println!("{}", style(label).bold());
            for entity in bucket {
                println!("  {entity}");
            }
        }
    }
    Ok(())
}

fn cmd_stats(file: &Path, json: bool) -> anyhow::Result<()> {
    let text = read_input(file)?;
    let stats = get_text_statistics(&text);
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }
    println!("characters:        {}", stats.character_count);
    println!("words:             {}", stats.word_count);
    println!("sentences:         {}", stats.sentence_count);
    println!("paragraphs:        {}", stats.paragraph_count);
    println!("avg word length:   {:.2}", stats.average_word_length);
    println!("avg sentence len:  {:.2}", stats.average_sentence_length);
    println!("readability:       {:.1}", stats.readability_score);
    Ok(())
}

fn cmd_summary(file: &Path, sentences: usize, settings: &AnalysisSettings) -> anyhow::Result<()> {
    let text = read_input(file)?;
    let key_phrases = extract_key_phrases(&text, &settings.key_phrase_options());
    let options = SummaryOptions {
        max_sentences: sentences,
        key_phrases,
    };
    for sentence in extract_summary(&text, &options) {
        println!("- {sentence}");
    }
    Ok(())
}
