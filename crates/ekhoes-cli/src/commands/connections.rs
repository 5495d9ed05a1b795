//! Connections listing command implementation.

use anyhow::Result;
use colored::Colorize;

use ekhoes::ConnectionService;

use crate::context::App;
use crate::output;

pub async fn run(app: &App) -> Result<()> {
    let connections = ConnectionService::new(app.client.clone()).list().await?;

    if connections.is_empty() {
        eprintln!("{}", "No live connections.".dimmed());
        return Ok(());
    }

    let rows: Vec<Vec<String>> = connections
        .iter()
        .map(|c| {
            vec![
                c.session_id.clone(),
                c.email.clone(),
                c.created_local(),
                c.last_activity.clone(),
                c.last_activity_local(),
            ]
        })
        .collect();

    output::table(
        &[
            "Session Id",
            "User",
            "Created",
            "Last Activity",
            "Last Activity Time",
        ],
        &rows,
    );

    Ok(())
}
