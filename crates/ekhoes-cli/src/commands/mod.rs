//! Command dispatch.
//!
//! Maps a parsed verb to its handler. Every command except `login` requires
//! a stored token; the gate is checked here, before any handler runs, so a
//! protected command never touches the network without one.

pub mod connections;
pub mod kill_session;
pub mod login;
pub mod logout;
pub mod sessions;

use anyhow::{Result, bail};
use tracing::debug;

use crate::cli::{Commands, SessionSubcommand};
use crate::context::App;

/// True for verbs that may only run with a stored token. Unknown verbs are
/// exempt: they fail on their own regardless of login state.
fn requires_login(command: &Commands) -> bool {
    !matches!(command, Commands::Login | Commands::External(_))
}

pub async fn handle(command: Commands, app: &App) -> Result<()> {
    if requires_login(&command) && !app.store.exists()? {
        bail!("please log in first");
    }

    debug!(?command, "dispatching");

    match command {
        Commands::Login => login::run(app).await,
        Commands::Logout => logout::run(app),
        Commands::Sessions => sessions::run(app).await,
        Commands::Session(cmd) => match cmd.command {
            SessionSubcommand::Kill(args) => kill_session::run(args, app).await,
        },
        Commands::Connections => connections::run(app).await,
        Commands::External(args) => {
            let verb = args.first().map(String::as_str).unwrap_or("");
            bail!("unknown command: {verb}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    /// App backed by an empty tempdir store and an unroutable server, so any
    /// network attempt would fail loudly rather than hang.
    fn app_without_token() -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            url: "http://127.0.0.1:9".to_string(),
        };
        let app = App::new(&config, dir.path().join("ekhoes")).unwrap();
        (dir, app)
    }

    fn app_with_token() -> (tempfile::TempDir, App) {
        let (dir, app) = app_without_token();
        app.store.save(&ekhoes::Token::new("tok-1")).unwrap();
        (dir, app)
    }

    #[tokio::test]
    async fn protected_command_without_token_is_gated() {
        let (_dir, app) = app_without_token();

        let err = handle(Commands::Sessions, &app).await.unwrap_err();
        assert_eq!(err.to_string(), "please log in first");
    }

    #[tokio::test]
    async fn logout_is_gated_too() {
        let (_dir, app) = app_without_token();

        let err = handle(Commands::Logout, &app).await.unwrap_err();
        assert_eq!(err.to_string(), "please log in first");
    }

    #[tokio::test]
    async fn unknown_verb_names_the_verb() {
        let (_dir, app) = app_with_token();

        let command = Commands::External(vec!["frobnicate".to_string()]);
        let err = handle(command, &app).await.unwrap_err();
        assert!(err.to_string().contains("frobnicate"));
    }

    #[tokio::test]
    async fn unknown_verb_is_reported_even_without_token() {
        let (_dir, app) = app_without_token();

        let command = Commands::External(vec!["frobnicate".to_string()]);
        let err = handle(command, &app).await.unwrap_err();
        assert!(err.to_string().contains("frobnicate"));
    }

    #[test]
    fn only_login_and_unknown_verbs_skip_the_gate() {
        assert!(!requires_login(&Commands::Login));
        assert!(!requires_login(&Commands::External(vec![])));
        assert!(requires_login(&Commands::Logout));
        assert!(requires_login(&Commands::Sessions));
        assert!(requires_login(&Commands::Connections));
    }
}
