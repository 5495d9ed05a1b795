//! Logout command implementation.

use anyhow::Result;

use ekhoes::AuthService;

use crate::context::App;
use crate::output;

pub fn run(app: &App) -> Result<()> {
    AuthService::new(app.client.clone(), app.store.clone()).logout()?;

    output::success("Authentication token deleted");
    Ok(())
}
