mod debug_report;

use std::collections::BTreeMap;
use std::io::{self, IsTerminal};
use std::time::{Duration, Instant};

use cardwright::item::{Item, Items};
use cardwright::{Options, Strategy, compile_item_with, corpus_intersection, diff, scrub};
use debug_report::RunSummary;
use serde_json::Value;

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    match run(&config) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

struct CliConfig {
    input_path: String,
    cards_path: Option<String>,
    strategy: Strategy,
    color: bool,
    intersect: bool,
}

fn run(config: &CliConfig) -> Result<bool, String> {
    if config.intersect {
        let cards = load_card_list(&config.input_path)?;
        let skeleton = corpus_intersection(&cards);
        let out = serde_json::to_string_pretty(&skeleton)
            .map_err(|err| format!("error: cannot serialize skeleton: {err}"))?;
        println!("{out}");
        return Ok(true);
    }

    let items = load_items(&config.input_path)?;
    // parse_args guarantees the path in comparison mode
    let Some(cards_path) = config.cards_path.as_deref() else {
        return Err("error: missing reference cards path".to_string());
    };
    let reference = load_reference(cards_path)?;
    let options = Options { strategy: config.strategy };

    let strategy_name = match config.strategy {
        Strategy::Grammar => "grammar",
        Strategy::Heuristic => "heuristic",
    };
    debug_report::print_header(&config.input_path, strategy_name, config.color);

    let start = Instant::now();
    let mut summary = RunSummary {
        items: 0,
        matched: 0,
        diverged: 0,
        missing_reference: 0,
        compile_failures: 0,
        skipped_lines: 0,
        elapsed: Duration::default(),
    };
    let mut clean = true;

    for item in &items.data {
        summary.items += 1;
        let result = match compile_item_with(item, &options) {
            Ok(result) => result,
            Err(err) => {
                summary.compile_failures += 1;
                clean = false;
                debug_report::print_failure(&item.id, &err.to_string(), config.color);
                continue;
            }
        };
        summary.skipped_lines += result.metrics.skipped.len();

        let Some(expected) = reference.get(&item.id) else {
            summary.missing_reference += 1;
            clean = false;
            debug_report::print_failure(&item.id, "no reference card", config.color);
            continue;
        };

        let mut produced = serde_json::to_value(&result.card)
            .map_err(|err| format!("error: cannot serialize {}: {err}", item.id))?;
        let mut expected = expected.clone();
        scrub(&mut produced);
        scrub(&mut expected);

        let divergences = diff(&produced, &expected);
        if divergences.is_empty() {
            summary.matched += 1;
            debug_report::print_match(&item.id, config.color);
        } else {
            summary.diverged += 1;
            clean = false;
            debug_report::print_divergences(&item.id, &item.name, &divergences, config.color);
        }
    }

    summary.elapsed = start.elapsed();
    debug_report::print_summary(&summary, config.color);
    Ok(clean)
}

fn load_items(path: &str) -> Result<Items, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|err| format!("error: cannot read {path}: {err}"))?;
    if let Ok(items) = serde_json::from_str::<Items>(&data) {
        return Ok(items);
    }
    let list: Vec<Item> = serde_json::from_str(&data)
        .map_err(|err| format!("error: cannot parse {path}: {err}"))?;
    Ok(Items { data: list, version: String::new() })
}

/// Reference cards keyed by id. Accepts either an object map or an array of
/// cards carrying their own `Id`.
fn load_reference(path: &str) -> Result<BTreeMap<String, Value>, String> {
    let value = load_json(path)?;
    let mut out = BTreeMap::new();
    match value {
        Value::Object(map) => {
            for (key, card) in map {
                out.insert(key, card);
            }
        }
        Value::Array(cards) => {
            for card in cards {
                let Some(id) = card.get("Id").and_then(|v| v.as_str()) else { continue };
                out.insert(id.to_string(), card);
            }
        }
        _ => return Err(format!("error: {path} is not a card collection")),
    }
    Ok(out)
}

fn load_card_list(path: &str) -> Result<Vec<Value>, String> {
    let value = load_json(path)?;
    match value {
        Value::Object(map) => Ok(map.into_iter().map(|(_, card)| card).collect()),
        Value::Array(cards) => Ok(cards),
        _ => Err(format!("error: {path} is not a card collection")),
    }
}

fn load_json(path: &str) -> Result<Value, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|err| format!("error: cannot read {path}: {err}"))?;
    serde_json::from_str(&data).map_err(|err| format!("error: cannot parse {path}: {err}"))
}

fn parse_args() -> Result<CliConfig, String> {
    let mut positionals: Vec<String> = Vec::new();
    let mut strategy = Strategy::default();
    let mut color = io::stdout().is_terminal();
    let mut intersect = false;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("cardwright {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--intersect" => intersect = true,
            "--strategy" => {
                let value =
                    args.next().ok_or_else(|| "error: --strategy expects a value".to_string())?;
                strategy = value.parse().map_err(|err| format!("error: {err}"))?;
            }
            _ if arg.starts_with("--strategy=") => {
                let value = arg.trim_start_matches("--strategy=");
                strategy = value.parse().map_err(|err| format!("error: {err}"))?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => positionals.push(arg),
        }
    }

    let mut positionals = positionals.into_iter();
    let input_path = positionals
        .next()
        .ok_or_else(|| format!("error: missing input path\n\n{}", help_text()))?;
    let cards_path = positionals.next();
    if positionals.next().is_some() {
        return Err("error: too many paths".to_string());
    }
    if !intersect && cards_path.is_none() {
        return Err(format!("error: missing reference cards path\n\n{}", help_text()));
    }

    Ok(CliConfig { input_path, cards_path, strategy, color, intersect })
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "cardwright {version}

Tooltip-to-card compiler comparison runner.

Compiles every item in an items dump and diffs the produced cards against
hand-authored reference cards, cosmetic fields ignored. With --intersect,
prints the corpus-wide intersection skeleton of a card collection instead.

Usage:
  cardwright [OPTIONS] <items.json> <reference_cards.json>
  cardwright --intersect [OPTIONS] <reference_cards.json>

Options:
  --strategy <name>   Tooltip strategy: grammar (default) or heuristic.
  --intersect         Corpus fold mode: print the common skeleton.
  --color             Force ANSI color output.
  --no-color          Disable ANSI color output.
  -h, --help          Show this help message.
  -V, --version       Print version information.

Exit codes:
  0  All produced cards match their references.
  1  Divergences, compile failures, or missing references.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
