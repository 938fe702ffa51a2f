//! `hashrng`: inspect hash-based random values from the command line.
//!
//! Examples:
//!   hashrng sample 0 130 23
//!   hashrng grid 7 48 16
//!   hashrng grid 7 48 16 -24 100
//!   hashrng uniformity 10 100000 12345 seeds
//!
//! Grid fills honor `HASHRNG_EXEC_TIER=scalar|parallel`.

use std::process;

use serde::Serialize;
use tracing::{error, info};

use hashrng::bounded::hash_uint_under_limit;
use hashrng::grid::{fill_zero_to_one, ExecutionTier, GridConfig};
use hashrng::mixer::hash_uint;
use hashrng::sample::{chance, hash_int_in_range, hash_neg_one_to_one, hash_zero_to_one};
use hashrng::stats::{survey_under_limit, Survey};

const SHADES: &[u8] = b" .:-=+*#%@";

#[derive(Debug, Serialize)]
struct SampleReport {
    coords: Vec<i32>,
    seed: u32,
    uint: u32,
    under_10: u32,
    int_0_9: i32,
    zero_to_one: f32,
    neg_one_to_one: f32,
    chance_half: bool,
}

fn print_help() {
    eprintln!("hashrng: stateless hash-based random values\n");
    eprintln!("Usage: hashrng <command> [args]\n");
    eprintln!("Commands:");
    eprintln!("  sample <seed> <x> [y] [z] [w]                 Every operation at one index (JSON)");
    eprintln!("  grid <seed> <width> <height> [x0 y0]          ASCII map of zero_to_one");
    eprintln!("  uniformity <bound> <samples> [seed] [positions|seeds]");
    eprintln!("                                                Chi-squared survey (JSON)");
    eprintln!("  help                                          Show this message");
}

fn parse<T: std::str::FromStr>(value: &str, what: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("{what} must be a number, got '{value}'"))
}

fn run_sample(args: &[String]) -> Result<(), String> {
    if args.len() < 2 || args.len() > 5 {
        return Err("sample takes a seed and 1-4 coordinates".to_string());
    }
    let seed: u32 = parse(&args[0], "seed")?;
    let coords = args[1..]
        .iter()
        .map(|c| parse::<i32>(c, "coordinate"))
        .collect::<Result<Vec<_>, _>>()?;
    let index = coords.as_slice();

    let report = SampleReport {
        seed,
        uint: hash_uint(index, seed),
        under_10: hash_uint_under_limit(index, seed, 10),
        int_0_9: hash_int_in_range(index, seed, 0, 9).map_err(|e| e.to_string())?,
        zero_to_one: hash_zero_to_one(index, seed),
        neg_one_to_one: hash_neg_one_to_one(index, seed),
        chance_half: chance(index, seed, 0.5).map_err(|e| e.to_string())?,
        coords,
    };
    let json = serde_json::to_string_pretty(&report).map_err(|e| format!("serialize: {e}"))?;
    println!("{json}");
    Ok(())
}

fn run_grid(args: &[String]) -> Result<(), String> {
    if args.len() != 3 && args.len() != 5 {
        return Err("grid takes <seed> <width> <height> [x0 y0]".to_string());
    }
    let mut cfg = GridConfig::with_size(parse(&args[1], "width")?, parse(&args[2], "height")?)
        .with_seed(parse(&args[0], "seed")?);
    if args.len() == 5 {
        cfg = cfg.with_origin(parse(&args[3], "x0")?, parse(&args[4], "y0")?);
    }
    if let Some(tier) = ExecutionTier::from_env() {
        cfg = cfg.with_tier(tier);
    }
    info!("Grid {}x{} at {:?} ({:?})", cfg.width, cfg.height, cfg.origin, cfg.tier.effective());

    let mut cells = vec![0.0f32; cfg.cell_count()];
    fill_zero_to_one(&cfg, &mut cells).map_err(|e| e.to_string())?;

    if cfg.width == 0 {
        return Ok(());
    }
    for row in cells.chunks(cfg.width) {
        let line: String = row
            .iter()
            .map(|&v| {
                let i = (v * (SHADES.len() - 1) as f32).round() as usize;
                SHADES[i.min(SHADES.len() - 1)] as char
            })
            .collect();
        println!("{line}");
    }
    Ok(())
}

fn run_uniformity(args: &[String]) -> Result<bool, String> {
    if args.len() < 2 || args.len() > 4 {
        return Err("uniformity takes <bound> <samples> [seed] [positions|seeds]".to_string());
    }
    let bound: u32 = parse(&args[0], "bound")?;
    let samples: u32 = parse(&args[1], "samples")?;
    let seed: u32 = match args.get(2) {
        Some(s) => parse(s, "seed")?,
        None => 0,
    };
    let survey = match args.get(3).map(String::as_str) {
        None | Some("positions") => Survey::Positions,
        Some("seeds") => Survey::Seeds,
        Some(other) => return Err(format!("survey must be positions|seeds, got '{other}'")),
    };

    let report = survey_under_limit(bound, samples, seed, survey);
    let json = serde_json::to_string_pretty(&report).map_err(|e| format!("serialize: {e}"))?;
    println!("{json}");
    Ok(report.uniform)
}

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(cmd) = args.first() else {
        print_help();
        process::exit(2);
    };
    let rest = &args[1..];

    let outcome = match cmd.as_str() {
        "help" | "--help" | "-h" => {
            print_help();
            return;
        }
        "sample" => run_sample(rest),
        "grid" => run_grid(rest),
        "uniformity" => match run_uniformity(rest) {
            Ok(true) => Ok(()),
            Ok(false) => {
                error!("Distribution failed the uniformity check");
                process::exit(1);
            }
            Err(e) => Err(e),
        },
        _ => {
            eprintln!("Unknown command: {cmd}");
            print_help();
            process::exit(2);
        }
    };

    if let Err(e) = outcome {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
