// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use catalog_search::catalog::Catalog;
use catalog_search::search::{Fuzzy, SearchOptions};
use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{
    count, dim, error_label, field_label, match_badges, row, score_value, section_bot,
    section_mid, section_top, truncate,
};
use cli::{load_catalog, Cli, Commands};

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", error_label(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();
    match cli.command {
        Commands::Search {
            records,
            query,
            fields,
            fuzzy,
            no_fuzzy,
            no_prefix,
            limit,
            json,
        } => {
            let catalog = load_catalog(&records, config)?;
            let mut options = SearchOptions::new().prefix(!no_prefix);
            if let Some(fields) = fields {
                options = options.fields(fields);
            }
            if no_fuzzy {
                options = options.fuzzy(Fuzzy::Enabled(false));
            } else if let Some(tolerance) = fuzzy {
                options = options.fuzzy(Fuzzy::Tolerance(tolerance));
            }
            run_search(&catalog, &query, &options, limit, json)
        }
        Commands::Suggest {
            records,
            prefix,
            limit,
            json,
        } => {
            let catalog = load_catalog(&records, config)?;
            run_suggest(&catalog, &prefix, limit, json)
        }
        Commands::Term { records, term } => {
            let catalog = load_catalog(&records, config)?;
            run_term(&catalog, &term)
        }
        Commands::Inspect { records } => {
            let catalog = load_catalog(&records, config)?;
            run_inspect(&catalog);
            Ok(())
        }
    }
}

fn run_search(
    catalog: &Catalog,
    query: &str,
    options: &SearchOptions,
    limit: usize,
    json: bool,
) -> Result<()> {
    let start = Instant::now();
    let results = catalog
        .search(query, options)
        .with_context(|| format!("search for {:?} failed", query))?;
    let elapsed = start.elapsed();
    let shown = &results[..results.len().min(limit)];

    if json {
        println!("{}", serde_json::to_string_pretty(shown)?);
        return Ok(());
    }

    let display_field = catalog
        .config()
        .fields
        .first()
        .map(|f| f.field_name.clone())
        .unwrap_or_default();
    let best = shown.first().map_or(0.0, |r| r.score);

    section_top(&format!("RESULTS FOR \"{}\"", truncate(query, 40)));
    if shown.is_empty() {
        row(&dim(" no matches"));
    }
    for (rank, result) in shown.iter().enumerate() {
        let label = catalog
            .get_object_by_id(&result.id)
            .and_then(|record| record.get(&display_field))
            .unwrap_or("");
        row(&format!(
            " {:>3}. {} {}  {}",
            rank + 1,
            score_value(result.score, best),
            result.id,
            truncate(label, 40)
        ));
        row(&format!("      {}", match_badges(&result.matched_fields)));
    }
    section_mid("SUMMARY");
    row(&format!(
        " {} matches, {} shown, {:.2} ms",
        count(results.len()),
        shown.len(),
        elapsed.as_secs_f64() * 1000.0
    ));
    section_bot();
    Ok(())
}

fn run_suggest(catalog: &Catalog, prefix: &str, limit: usize, json: bool) -> Result<()> {
    let suggestions = catalog.suggestions(prefix, limit);
    if json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    section_top(&format!("SUGGESTIONS FOR \"{}\"", truncate(prefix, 40)));
    if suggestions.is_empty() {
        row(&dim(" no suggestions"));
    }
    for term in &suggestions {
        let frequency = catalog
            .terms_index()
            .term_details(term)
            .map_or(0, |details| details.frequency);
        row(&format!(" {:<40} {}", term, dim(&format!("×{}", frequency))));
    }
    section_bot();
    Ok(())
}

fn run_term(catalog: &Catalog, term: &str) -> Result<()> {
    let details = catalog
        .terms_index()
        .term_details(term)
        .with_context(|| format!("term {:?} does not occur in any searchable field", term))?;

    section_top("TERM");
    row(&format!(" term       {}", details.term));
    row(&format!(" frequency  {}", count(details.frequency as usize)));
    let fields: Vec<&str> = details.fields.iter().map(|f| field_label(f)).collect();
    row(&format!(" fields     {}", fields.join(", ")));
    section_bot();
    Ok(())
}

fn run_inspect(catalog: &Catalog) {
    let search = catalog.search_index();
    let terms = catalog.terms_index();

    section_top("CATALOG");
    row(&format!(" documents        {}", count(search.document_count())));
    row(&format!(" index terms      {}", count(search.vocabulary_size())));
    row(&format!(" suggestion terms {}", count(terms.term_count())));
    section_mid("FIELDS");
    for field in &catalog.config().fields {
        row(&format!(" {:<32} weight {}", field.field_name, field.weight));
    }
    section_mid("TOP TERMS");
    for term in terms.all_terms().iter().take(10) {
        let frequency = terms.term_details(term).map_or(0, |d| d.frequency);
        row(&format!(" {:<40} {}", term, dim(&format!("×{}", frequency))));
    }
    section_bot();
}
