use anyhow::{bail, Context, Result};
use clap::Parser;
use lectern::{
    Book, BookReport, ReaderConfig, SearchResult, SearchType, ThemeScorer, ThemeTaxonomy,
};
use std::path::Path;
use std::time::Instant;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

mod cli;
use cli::display::*;
use cli::{Cli, Commands};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Search {
            book,
            query,
            search_type,
            limit,
            exact,
            json,
            config,
        } => run_search(&book, &query, search_type, limit, exact, json, config.as_deref()),
        Commands::Themes {
            book,
            page,
            taxonomy,
            top,
            json,
        } => run_themes(&book, page, taxonomy.as_deref(), top, json),
        Commands::Inspect { book } => run_inspect(&book),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr, filtered by `LECTERN_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("LECTERN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .init();
}

fn load_book(path: &Path) -> Result<Book> {
    Book::load(path).with_context(|| format!("could not load book {}", path.display()))
}

fn run_search(
    book_path: &Path,
    query: &str,
    search_type: SearchType,
    limit: Option<usize>,
    exact: bool,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => ReaderConfig::load(path)
            .with_context(|| format!("could not load config {}", path.display()))?,
        None => ReaderConfig::default(),
    };
    let book = load_book(book_path)?;
    let engine = book.into_search_engine(&config);
    let limit = limit.unwrap_or(config.max_results);

    let start = Instant::now();
    let results = if exact {
        if !matches!(search_type, SearchType::All | SearchType::Word) {
            bail!("--exact only applies to word search, not --type {}", search_type);
        }
        let mut hits = engine.search_word(query, true);
        hits.truncate(limit);
        hits
    } else {
        engine.advanced_search(query, search_type, limit)
    };
    let elapsed = start.elapsed();
    debug!(
        query,
        results = results.len(),
        strategy = engine.strategy_name(),
        elapsed_us = elapsed.as_micros() as u64,
        "search finished"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    section_top(&format!("SEARCH \"{}\"", query));
    if results.is_empty() {
        row(&dim("no results"));
    }
    for result in &results {
        print_result(result, &config);
    }
    section_bot();
    println!(
        "{}",
        dim(&format!(
            "{} result(s) in {:.2} ms across {} pages",
            results.len(),
            elapsed.as_secs_f64() * 1000.0,
            engine.page_count()
        ))
    );
    Ok(())
}

fn print_result(result: &SearchResult, config: &ReaderConfig) {
    let header = match result {
        SearchResult::Word {
            page,
            count,
            matched_term,
            ..
        } => match matched_term {
            Some(term) => format!("page {}  {}× \"{}\"", page, count, term),
            None => format!("page {}  {}×", page, count),
        },
        SearchResult::Phrase {
            page, approximate, ..
        } => {
            if *approximate {
                format!("page {}  (approximate)", page)
            } else {
                format!("page {}", page)
            }
        }
        SearchResult::Chapter {
            chapter,
            title,
            start_page,
            end_page,
        } => format!("chapter {}: {}  pages {}-{}", chapter, title, start_page, end_page),
        SearchResult::Verse {
            chapter,
            verse,
            page,
            ..
        } => format!("{}:{}  page {}", chapter, verse, page),
    };
    row(&format!("{} {}", kind_badge(result.kind()), header));

    if let Some(excerpt) = result.excerpt() {
        let rendered = render_highlights(excerpt, &config.highlight.open, &config.highlight.close);
        for line in wrap(&rendered, BOX_WIDTH - 6) {
            row(&format!("    {}", line));
        }
    }
}

fn run_themes(
    book_path: &Path,
    page: Option<usize>,
    taxonomy_path: Option<&Path>,
    top: usize,
    json: bool,
) -> Result<()> {
    let taxonomy = match taxonomy_path {
        Some(path) => ThemeTaxonomy::load(path)
            .with_context(|| format!("could not load taxonomy {}", path.display()))?,
        None => ThemeTaxonomy::default_extended(),
    };
    let scorer = ThemeScorer::new(&taxonomy)?;
    let book = load_book(book_path)?;

    if let Some(page) = page {
        let segment = book
            .page(page)
            .with_context(|| format!("page {} is outside 1..={}", page, book.page_count()))?;
        let breakdown = scorer.breakdown(&segment.text);
        if json {
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
            return Ok(());
        }
        let mut ranked: Vec<(&String, f64)> = breakdown.iter().map(|(n, b)| (n, b.score)).collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        section_top(&format!("THEMES page {}", page));
        for (name, score) in ranked.into_iter().take(top) {
            let hits = breakdown[name].raw_hits;
            row(&format!(
                "{} {} {}",
                pad_right(name, 14),
                score_bar(score),
                dim(&format!("{} hit(s)", hits))
            ));
        }
        section_bot();
        return Ok(());
    }

    let report = build_report(&book, &scorer);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    section_top(&format!("THEMES {}", report.title));
    for (name, score) in report.top_themes(top) {
        row(&format!("{} {}", pad_right(name, 14), score_bar(score)));
    }
    section_bot();
    println!(
        "{}",
        dim(&format!(
            "{} pages, {} words, difficulty {:.1}, readability {:.1}",
            report.page_count, report.word_count, report.average_difficulty, report.average_readability
        ))
    );
    Ok(())
}

#[cfg(feature = "parallel")]
fn build_report(book: &Book, scorer: &ThemeScorer) -> BookReport {
    let progress = ProgressBar::new(book.page_count() as u64);
    if let Ok(style) =
        ProgressStyle::with_template("{spinner:.cyan} {prefix:<10} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
    {
        progress.set_style(style.progress_chars("━━╸"));
    }
    progress.set_prefix("Scoring");
    let report = BookReport::build_with_progress(book, scorer, &progress);
    progress.finish_and_clear();
    report
}

#[cfg(not(feature = "parallel"))]
fn build_report(book: &Book, scorer: &ThemeScorer) -> BookReport {
    BookReport::build(book, scorer)
}

fn run_inspect(book_path: &Path) -> Result<()> {
    let book = load_book(book_path)?;
    let engine = book.search_engine(&ReaderConfig::default());

    let start = Instant::now();
    let index = engine.index();
    let build_ms = start.elapsed().as_secs_f64() * 1000.0;

    section_top("BOOK");
    row(&format!("title      {}", book.title()));
    if let Some(author) = &book.metadata.author {
        row(&format!("author     {}", author));
    }
    row(&format!("pages      {}", book.page_count()));
    row(&format!("chapters   {}", book.chapters.len()));
    section_bot();

    section_top("CHAPTERS");
    if book.chapters.is_empty() {
        row(&dim("none"));
    }
    for chapter in &book.chapters {
        let range = if chapter.is_empty() {
            dim("(no pages)")
        } else {
            format!("pages {}-{}", chapter.start_page, chapter.end_page)
        };
        row(&format!(
            "{} {} {}",
            pad_right(chapter.number.as_str(), 5),
            pad_right(&chapter.title, 40),
            range
        ));
    }
    section_bot();

    section_top("INDEX");
    row(&format!("strategy   {}", engine.strategy_name()));
    row(&format!("terms      {}", index.term_count()));
    row(&format!("phrases    {}", index.phrase_count()));
    row(&format!("built in   {:.2} ms", build_ms));
    section_bot();
    Ok(())
}
