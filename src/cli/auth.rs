//! Login, signup and logout commands

use std::io::{self, BufRead, Write};

use zeroize::Zeroizing;

use crate::error::FinbuddyResult;
use crate::services::SessionStore;

/// Read a line from stdin after printing `prompt`
fn prompt_line(prompt: &str) -> FinbuddyResult<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Use the given password or ask for it without echo
fn password_or_prompt(password: Option<String>) -> FinbuddyResult<Zeroizing<String>> {
    match password {
        Some(password) => Ok(Zeroizing::new(password)),
        None => Ok(Zeroizing::new(rpassword::prompt_password("Password: ")?)),
    }
}

pub async fn handle_login(
    sessions: &SessionStore,
    email: Option<String>,
    password: Option<String>,
) -> FinbuddyResult<()> {
    let email = match email {
        Some(email) => email,
        None => prompt_line("Email: ")?,
    };
    let password = password_or_prompt(password)?;

    println!("Signing in...");
    let session = sessions.login(email.trim(), &password).await?;
    println!("Welcome back, {}!", session.name);
    Ok(())
}

pub async fn handle_signup(
    sessions: &SessionStore,
    name: &str,
    email: &str,
    password: Option<String>,
) -> FinbuddyResult<()> {
    let password = password_or_prompt(password)?;

    println!("Creating account...");
    let session = sessions.signup(name.trim(), email.trim(), &password).await?;
    println!("Account created. Welcome, {}!", session.name);
    Ok(())
}

pub fn handle_logout(sessions: &SessionStore) -> FinbuddyResult<()> {
    sessions.logout()?;
    println!("Logged out.");
    Ok(())
}

pub fn handle_whoami(sessions: &SessionStore) -> FinbuddyResult<()> {
    match sessions.restore() {
        Some(session) => {
            println!("Logged in as {}", session);
            println!("  ID:     {}", session.id);
            if let Some(avatar) = &session.avatar_url {
                println!("  Avatar: {}", avatar);
            }
        }
        None => println!("Not logged in."),
    }
    Ok(())
}
