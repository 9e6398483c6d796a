//! blockrule: CLI tool for classifying URLs against a rule store.

use ahash::AHashMap;
use blockrule::{Classifier, Mechanism, MethodChannel, RuleConfig, RuleStore, Section};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "blockrule")]
#[command(author = "Kaitu.io")]
#[command(version = "0.1.0")]
#[command(about = "Classify request URLs as allowed or blocked", long_about = None)]
struct Cli {
    /// Rule list file (defaults to the built-in rules)
    #[arg(short, long, global = true)]
    rules: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify the given URLs
    Check {
        /// URLs to classify
        #[arg(required = true)]
        urls: Vec<String>,

        /// Print decisions as JSON lines
        #[arg(short, long)]
        json: bool,
    },

    /// Classify one URL per line from a file or stdin and summarize
    Scan {
        /// Input file (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print every blocked URL
        #[arg(short, long)]
        verbose: bool,

        /// Only print URLs decided by this mechanism (e.g. rule, path-heuristic)
        #[arg(long, value_parser = parse_mechanism)]
        only: Option<Mechanism>,
    },

    /// Show rule store statistics
    Stats,

    /// Serve method calls as JSON lines on stdin/stdout
    Channel,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let store = match load_store(cli.rules.as_ref()) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let classifier = Classifier::new(Arc::new(store));

    let result = match cli.command {
        Commands::Check { urls, json } => check(&classifier, &urls, json),
        Commands::Scan {
            input,
            verbose,
            only,
        } => scan(&classifier, input.as_ref(), verbose, only),
        Commands::Stats => {
            stats(classifier.store());
            Ok(())
        }
        Commands::Channel => serve_channel(classifier),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_store(path: Option<&PathBuf>) -> blockrule::Result<RuleStore> {
    let config = match path {
        Some(path) => RuleConfig::from_path(path),
        None => RuleConfig::default(),
    };
    config.load()
}

fn parse_mechanism(s: &str) -> Result<Mechanism, String> {
    Mechanism::parse(s).ok_or_else(|| format!("unknown mechanism: {}", s))
}

fn check(
    classifier: &Classifier,
    urls: &[String],
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for url in urls {
        let decision = classifier.explain(Some(url.as_str()));
        if json {
            let line = serde_json::json!({ "url": url, "decision": decision });
            writeln!(out, "{}", line)?;
        } else {
            let matched = decision.matched.as_deref().unwrap_or("-");
            writeln!(
                out,
                "{}\t{}\t{}\t{}",
                decision.verdict, decision.mechanism, matched, url
            )?;
        }
    }

    Ok(())
}

fn scan(
    classifier: &Classifier,
    input: Option<&PathBuf>,
    verbose: bool,
    only: Option<Mechanism>,
) -> Result<(), Box<dyn std::error::Error>> {
    let reader: Box<dyn BufRead> = match input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut by_mechanism: AHashMap<Mechanism, usize> = AHashMap::new();
    let mut total = 0usize;
    let mut blocked = 0usize;

    for line in reader.lines() {
        let line = line?;
        let url = line.trim();
        if url.is_empty() {
            continue;
        }

        let decision = classifier.explain(Some(url));
        total += 1;
        if decision.verdict.is_block() {
            blocked += 1;
            if verbose {
                println!("BLOCK\t{}", url);
            }
        }
        if only == Some(decision.mechanism) {
            println!("{}\t{}", decision.mechanism, url);
        }
        *by_mechanism.entry(decision.mechanism).or_insert(0) += 1;
    }

    println!("Scanned {} URLs, blocked {}", total, blocked);
    for mechanism in [
        Mechanism::Whitelist,
        Mechanism::ProtocolException,
        Mechanism::Rule,
        Mechanism::ExceptionMarker,
        Mechanism::PathHeuristic,
        Mechanism::NoMatch,
    ] {
        let count = by_mechanism.get(&mechanism).copied().unwrap_or(0);
        println!("  {:<20} {}", mechanism.as_str(), count);
    }

    Ok(())
}

fn stats(store: &RuleStore) {
    println!("Rule store: {}", store.name());
    for section in Section::all() {
        println!("  {:<20} {}", section.display_name(), store.section_len(section));
    }

    let rejected = store.rejected_patterns();
    if !rejected.is_empty() {
        println!("Rejected patterns:");
        for pattern in rejected {
            println!("  {}", pattern);
        }
    }
}

fn serve_channel(classifier: Classifier) -> Result<(), Box<dyn std::error::Error>> {
    let channel = MethodChannel::new(classifier);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match channel.handle_json(&line) {
            Ok(reply) => writeln!(out, "{}", reply)?,
            Err(e) => {
                log::warn!("Bad method call: {}", e);
                let reply = serde_json::json!({ "status": "error", "message": e.to_string() });
                writeln!(out, "{}", reply)?;
            }
        }
        out.flush()?;
    }

    Ok(())
}
