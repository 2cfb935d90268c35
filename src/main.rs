//! Grocer
//!
//! An MCP server for recipes, meal plans, and grocery lists.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use grocer::build_info;
use grocer::config::{ServerConfig, DEFAULT_LOG_DIRECTIVE};
use grocer::mcp::GrocerService;
use grocer::planner::Planner;
use grocer::store::Store;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(DEFAULT_LOG_DIRECTIVE.parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let config = ServerConfig::from_env();
    eprintln!("Seed path: {}", config.seed_path.display());

    // Load seed data, if any
    let planner = match config.load_seed()? {
        Some(seed) => {
            let planner = Planner::from_seed(seed)?;
            eprintln!(
                "Loaded {} recipes and {} scheduled meals",
                planner.recipes.count(),
                planner.meals.count()
            );
            planner
        }
        None => Planner::new(),
    };

    // Create the grocer service
    let service = GrocerService::new(config.seed_path, Store::new(planner));

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
