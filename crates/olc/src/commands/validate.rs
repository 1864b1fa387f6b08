//! `validateoslclinks` command

use std::path::Path;

use olc_application::{OperationResult, ValidationRequest};
use olc_domain::error::{Error, Result};
use olc_domain::ports::ValidationReporter;
use olc_infrastructure::build_validation_service;
use olc_infrastructure::config::{AppConfig, ConfigLoader};
use olc_infrastructure::credentials::load_credentials;
use olc_infrastructure::logging::level_for_switches;
use tracing::info;

use crate::cli::ValidateArgs;

/// Configuration of the run: file and environment, then the command line
pub fn load_config(config_path: Option<&Path>, args: &ValidateArgs) -> Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let mut config = loader.load()?;
    apply_overrides(&mut config, args);
    Ok(config)
}

/// Apply the command line switches on top of the loaded configuration
pub fn apply_overrides(config: &mut AppConfig, args: &ValidateArgs) {
    config.logging.level = level_for_switches(&config.logging.level, args.debug, args.trace);
    if let Some(policy) = args.probe_failure {
        config.validation.probe_failure = policy;
    }
}

/// Validation request built from the command line
pub fn request(args: &ValidateArgs) -> Result<ValidationRequest> {
    let repository = args.repository.trim();
    if repository.is_empty() {
        return Err(Error::invalid_argument("Repository URL must be provided."));
    }
    Ok(ValidationRequest {
        project_area: args.project_area.clone(),
        query: args.query.clone(),
        sharing_targets: args
            .querysource
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    })
}

/// Run one validation pass
pub async fn execute(
    args: &ValidateArgs,
    config: &AppConfig,
    reporter: &mut dyn ValidationReporter,
) -> Result<OperationResult> {
    let request = request(args)?;
    let credentials = load_credentials(&args.user, &args.password_file)?;
    let service = build_validation_service(config, args.repository.trim(), credentials)?;

    info!(
        repository = %args.repository,
        project_area = %request.project_area,
        query = %request.query,
        "Validating OSLC links"
    );
    let result = service.run(&request, reporter).await?;
    info!(problems = result.summary().problems(), "{}", result.summary());
    Ok(result)
}
