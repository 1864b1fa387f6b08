//! OSLC Link Check - Entry Point
//!
//! ```text
//! olc validateoslclinks --repository https://clm.example.com:9443/ccm \
//!     --user alice --password-file ~/.olc-password \
//!     --project-area "JKE Banking (Change Management)" --query "All Defects"
//! ```

use clap::Parser;
use olc::{Cli, run};

/// Work items and links are processed one at a time, a single thread suffices
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli).await
}
