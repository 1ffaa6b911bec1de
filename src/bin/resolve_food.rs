//! Resolve food descriptions from the command line
//!
//! Usage: resolve_food <description>...
//! Each argument is resolved separately and printed as one JSON line.
//! Honors KCAL_REFERENCE_PATH like the server.

use kcal::config::Config;
use kcal::nutrition::Resolver;
use kcal::tools::estimate::estimate_nutrition;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let descriptions: Vec<String> = std::env::args().skip(1).collect();
    if descriptions.is_empty() {
        eprintln!("Usage: resolve_food <description>...");
        std::process::exit(2);
    }

    let config = Config::from_env()?;
    let resolver = Resolver::new(config.load_reference_table()?);

    for description in &descriptions {
        let result = estimate_nutrition(&resolver, description);
        println!("{}", serde_json::to_string(&result)?);
    }

    Ok(())
}
