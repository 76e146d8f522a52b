use profile_core::cache::{self, FileStore};
use profile_core::canonical::{build_canonical_profile, render_profile_markdown};
use profile_core::sources::RawSources;
use serde_json::Value;

fn usage() -> ! {
    eprintln!("usage: profile_runner <entity_id> <sources.json> [--cache-dir DIR] [--markdown]");
    eprintln!("       profile_runner <entity_id> <extraction.json|-> <enrichment.json|-> <questionnaire.json|-> [--cache-dir DIR] [--markdown]");
    eprintln!();
    eprintln!("sources.json is the combined {{extraction, apollo, questionnaire}} envelope; '-' skips a source.");
    std::process::exit(2);
}

fn read_source(path: &str) -> Option<Value> {
    if path == "-" {
        return None;
    }
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("cannot read {}: {}", path, e);
            std::process::exit(2);
        }
    };
    match serde_json::from_str(&raw) {
        Ok(v) => Some(v),
        Err(e) => {
            eprintln!("invalid JSON in {}: {}", path, e);
            std::process::exit(2);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        usage();
    }
    let entity_id = args[1].clone();

    // Two invocation shapes: one combined envelope file, or the three
    // source files positionally with '-' for an absent source.
    let combined = args.len() == 3 || args.get(3).map(|a| a.starts_with("--")).unwrap_or(false);
    let (sources, mut i) = if combined {
        let raw = match std::fs::read_to_string(&args[2]) {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("cannot read {}: {}", args[2], e);
                std::process::exit(2);
            }
        };
        match RawSources::from_json_str(&raw) {
            Ok(sources) => (sources, 3),
            Err(e) => {
                eprintln!("invalid sources envelope in {}: {}", args[2], e);
                std::process::exit(2);
            }
        }
    } else {
        if args.len() < 5 {
            usage();
        }
        (
            RawSources {
                extraction: read_source(&args[2]),
                enrichment: read_source(&args[3]),
                questionnaire: read_source(&args[4]),
            },
            5,
        )
    };

    let mut cache_dir: Option<String> = None;
    let mut markdown = false;
    while i < args.len() {
        match args[i].as_str() {
            "--cache-dir" => {
                i += 1;
                cache_dir = Some(args.get(i).cloned().unwrap_or_else(|| usage()));
            }
            "--markdown" => markdown = true,
            _ => usage(),
        }
        i += 1;
    }

    let profile = match cache_dir {
        Some(dir) => {
            let store = FileStore::new(dir);
            cache::build_with_cache(&store, &entity_id, &sources, cache::now_epoch_ms())
        }
        None => build_canonical_profile(&sources),
    };

    if markdown {
        println!("{}", render_profile_markdown(&profile));
    } else {
        match serde_json::to_string_pretty(&profile) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("serialize error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
