//! Password file handling
//!
//! The password is the first line of the file, without its line terminator.

use std::path::Path;

use olc_domain::error::{Error, Result};
use olc_providers::Credentials;

use crate::error_ext::ErrorContext;

/// Read the password stored in `path`
pub fn read_password_file(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)
        .io_context(format!("Cannot read password file {}", path.display()))?;
    let password = content
        .lines()
        .next()
        .map(|line| line.trim_end_matches('\r'))
        .unwrap_or_default();
    if password.is_empty() {
        return Err(Error::config(format!(
            "Password file {} is empty",
            path.display()
        )));
    }
    Ok(password.to_string())
}

/// Credentials of `user` with the password stored in `password_file`
pub fn load_credentials(user: &str, password_file: &Path) -> Result<Credentials> {
    let user = user.trim();
    if user.is_empty() {
        return Err(Error::config("User id must be provided."));
    }
    Ok(Credentials::new(user, read_password_file(password_file)?))
}
