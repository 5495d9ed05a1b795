//! Session termination command implementation.

use anyhow::Result;
use clap::Args;

use ekhoes::SessionService;

use crate::context::App;
use crate::output;

#[derive(Args, Debug)]
pub struct KillArgs {
    /// Id of the session to terminate
    pub id: String,
}

pub async fn run(args: KillArgs, app: &App) -> Result<()> {
    SessionService::new(app.client.clone()).kill(&args.id).await?;

    output::success(&format!("Session {} terminated", args.id));
    Ok(())
}
