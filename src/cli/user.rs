//! User CLI commands
//!
//! Registration, login, logout and showing who is logged in.

use zeroize::Zeroizing;

use crate::error::{SipadiError, SipadiResult};
use crate::services::AuthService;
use crate::storage::Storage;

/// Handle `register`
pub fn handle_register(
    storage: &Storage,
    username: &str,
    password: Option<String>,
) -> SipadiResult<()> {
    let password = read_password(password, true)?;
    let user = AuthService::new(storage).register(username, &password)?;

    println!("Registered user '{}'.", user.username);
    println!("Run 'sipadi login {}' to start recording.", user.username);
    Ok(())
}

/// Handle `login`
pub fn handle_login(storage: &Storage, username: &str, password: Option<String>) -> SipadiResult<()> {
    let password = read_password(password, false)?;
    let session = AuthService::new(storage).login(username, &password)?;

    println!("Logged in as '{}'.", session.owner);
    Ok(())
}

/// Handle `logout`
pub fn handle_logout(storage: &Storage) -> SipadiResult<()> {
    match AuthService::new(storage).logout()? {
        Some(owner) => println!("Logged out '{}'.", owner),
        None => println!("Nobody is logged in."),
    }
    Ok(())
}

/// Handle `whoami`
pub fn handle_whoami(storage: &Storage) -> SipadiResult<()> {
    match AuthService::new(storage).current_session()? {
        Some(session) => println!(
            "{} (since {})",
            session.owner,
            session.logged_in_at.format("%Y-%m-%d %H:%M UTC")
        ),
        None => println!("Not logged in."),
    }
    Ok(())
}

/// Use the password given on the command line, or prompt for it
fn read_password(given: Option<String>, confirm: bool) -> SipadiResult<Zeroizing<String>> {
    if let Some(password) = given {
        return Ok(Zeroizing::new(password));
    }

    let password = prompt("Password: ")?;
    if confirm {
        let again = prompt("Confirm password: ")?;
        if password.as_str() != again.as_str() {
            return Err(SipadiError::Validation("Passwords do not match".into()));
        }
    }
    Ok(password)
}

fn prompt(label: &str) -> SipadiResult<Zeroizing<String>> {
    rpassword::prompt_password(label)
        .map(Zeroizing::new)
        .map_err(|e| SipadiError::Io(format!("Failed to read password: {}", e)))
}
