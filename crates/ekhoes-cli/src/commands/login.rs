//! Login command implementation.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use ekhoes::{AuthService, Credentials};

use crate::context::App;
use crate::output;

pub async fn run(app: &App) -> Result<()> {
    let credentials = prompt_credentials()?;

    eprintln!("{}", "Logging in...".dimmed());

    let outcome = AuthService::new(app.client.clone(), app.store.clone())
        .login(&credentials)
        .await?;

    if outcome.name.is_empty() {
        output::success("You have successfully logged in!");
    } else {
        output::success(&format!(
            "Hello, {}. You have successfully logged in!",
            outcome.name
        ));
    }

    Ok(())
}

/// Read email from stdin and password without echo.
fn prompt_credentials() -> Result<Credentials> {
    print!("Email: ");
    io::stdout().flush()?;

    let mut email = String::new();
    io::stdin()
        .lock()
        .read_line(&mut email)
        .context("failed to read email")?;

    let password = rpassword::prompt_password("Password: ").context("failed to read password")?;

    // Credentials::new trims both fields; validation happens in the service.
    Ok(Credentials::new(&email, &password))
}
