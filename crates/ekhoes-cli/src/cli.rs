//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

use crate::commands::kill_session::KillArgs;

/// Command-line client for the ekhoes remote service.
#[derive(Parser, Debug)]
#[command(name = "ekhoes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the authentication token
    Login,

    /// Delete the stored authentication token
    Logout,

    /// List active sessions
    Sessions,

    /// Operate on a single session
    Session(SessionCommand),

    /// List live connections
    Connections,

    /// Anything else is an unknown verb, reported by the dispatcher
    #[command(external_subcommand)]
    External(Vec<String>),
}

#[derive(Args, Debug)]
pub struct SessionCommand {
    #[command(subcommand)]
    pub command: SessionSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionSubcommand {
    /// Terminate the session with the given id
    Kill(KillArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_session_kill() {
        let cli = Cli::try_parse_from(["ekhoes", "session", "kill", "s-42"]).unwrap();
        match cli.command {
            Some(Commands::Session(cmd)) => {
                let SessionSubcommand::Kill(args) = cmd.command;
                assert_eq!(args.id, "s-42");
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn unknown_verb_is_captured_as_external() {
        let cli = Cli::try_parse_from(["ekhoes", "frobnicate"]).unwrap();
        match cli.command {
            Some(Commands::External(args)) => assert_eq!(args[0], "frobnicate"),
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn bare_invocation_has_no_command() {
        let cli = Cli::try_parse_from(["ekhoes"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn verbose_flag_counts() {
        let cli = Cli::try_parse_from(["ekhoes", "-vv", "sessions"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
