//! Sessions listing command implementation.

use anyhow::Result;
use colored::Colorize;

use ekhoes::SessionService;

use crate::context::App;
use crate::output;

pub async fn run(app: &App) -> Result<()> {
    let sessions = SessionService::new(app.client.clone()).list().await?;

    if sessions.is_empty() {
        eprintln!("{}", "No active sessions.".dimmed());
        return Ok(());
    }

    let rows: Vec<Vec<String>> = sessions
        .iter()
        .map(|s| {
            vec![
                s.id.clone(),
                s.status.clone(),
                s.user.name.clone(),
                s.user.email.clone(),
                s.agent.clone(),
                s.platform.clone(),
                s.device_type.clone(),
                s.updated_local(),
            ]
        })
        .collect();

    output::table(
        &[
            "Id",
            "Status",
            "Name",
            "Email",
            "Agent",
            "Platform",
            "Device Type",
            "Updated",
        ],
        &rows,
    );

    Ok(())
}
