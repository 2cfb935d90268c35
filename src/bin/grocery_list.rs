//! Print the grocery list for meals scheduled in a date range
//! Usage: cargo run --bin grocery_list -- <start> <end> [seed.json]

use tracing_subscriber::EnvFilter;

use grocer::config::{ServerConfig, DEFAULT_LOG_DIRECTIVE};
use grocer::grocery::grocery_list_for_range;
use grocer::planner::{parse_date, Planner};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(DEFAULT_LOG_DIRECTIVE.parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <start YYYY-MM-DD> <end YYYY-MM-DD> [seed.json]", args[0]);
        std::process::exit(2);
    }

    let start = parse_date(&args[1])?;
    let end = parse_date(&args[2])?;

    let config = match args.get(3) {
        Some(path) => ServerConfig::with_seed_path(path),
        None => ServerConfig::from_env(),
    };
    eprintln!("Seed path: {}", config.seed_path.display());

    let planner = match config.load_seed()? {
        Some(seed) => Planner::from_seed(seed)?,
        None => {
            eprintln!("No seed file found; nothing to shop for");
            return Ok(());
        }
    };

    let list = grocery_list_for_range(&planner.recipes, &planner.meals, start, end)?;
    println!("{}", serde_json::to_string_pretty(&list)?);

    let unresolved: Vec<&str> = list.unresolved().map(|i| i.ingredient.item.as_str()).collect();
    if !unresolved.is_empty() {
        eprintln!("Check quantities by hand: {}", unresolved.join(", "));
    }

    Ok(())
}
