//! kcal
//!
//! An MCP server for food nutrition estimation and calorie tracking.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use kcal::build_info;
use kcal::config::Config;
use kcal::mcp::KcalService;
use kcal::nutrition::Resolver;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr; stdout carries the MCP stream
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("kcal=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = Config::from_env()?;
    eprintln!("Reference data: {}", config.reference_source());
    eprintln!("Daily calorie target: {} kcal", config.daily_calorie_target);

    // Duplicate aliases or a bad extension file stop startup here
    let table = config.load_reference_table()?;
    let resolver = Resolver::new(table);

    let service = KcalService::new(&config, resolver);

    eprintln!("Starting MCP server on stdio...");
    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
