//! Command execution

pub mod validate;

use olc_infrastructure::ConsoleReporter;
use olc_infrastructure::logging::init_logging;

use crate::cli::{Cli, Command};

/// Run the parsed command line
///
/// Link warnings and the result go to stdout, logs to stderr.
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::ValidateOslcLinks(args) => {
            let config = validate::load_config(cli.config.as_deref(), &args)?;
            init_logging(config.logging.clone())?;

            let mut reporter = ConsoleReporter::stdout();
            let result = validate::execute(&args, &config, &mut reporter).await?;

            println!("{}", result.result_text());
            if result.is_success() {
                println!("Success!");
            }
            Ok(())
        }
    }
}
