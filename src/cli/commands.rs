use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::model::PrefKey;

#[derive(Parser)]
#[command(name = "ruttin", about = concat!("ruttin v", env!("CARGO_PKG_VERSION"), " - a calm daily routine with points"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Store preferences in this file
    #[arg(long = "prefs-file", global = true, value_name = "PATH")]
    pub prefs_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the starting routine
    List,
    /// Show points, level and progress of the starting routine
    Stats,
    /// Show display preferences, or toggle one
    Prefs(PrefsCmd),
}

#[derive(Args)]
pub struct PrefsCmd {
    #[command(subcommand)]
    pub action: Option<PrefsAction>,
}

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Flip a preference and save it
    Toggle {
        #[arg(value_enum)]
        which: PrefArg,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PrefArg {
    DarkMode,
    LowStimulus,
}

impl From<PrefArg> for PrefKey {
    fn from(arg: PrefArg) -> Self {
        match arg {
            PrefArg::DarkMode => PrefKey::DarkMode,
            PrefArg::LowStimulus => PrefKey::LowStimulus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["ruttin"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["ruttin", "stats", "--json", "--prefs-file", "/tmp/p.json"])
                .unwrap();
        assert!(matches!(cli.command, Some(Commands::Stats)));
        assert!(cli.json);
        assert_eq!(cli.prefs_file, Some(PathBuf::from("/tmp/p.json")));
    }

    #[test]
    fn prefs_toggle_parses_kebab_case() {
        let cli = Cli::try_parse_from(["ruttin", "prefs", "toggle", "low-stimulus"]).unwrap();
        match cli.command {
            Some(Commands::Prefs(PrefsCmd {
                action: Some(PrefsAction::Toggle { which }),
            })) => assert_eq!(PrefKey::from(which), PrefKey::LowStimulus),
            _ => panic!("expected prefs toggle"),
        }
        assert!(Cli::try_parse_from(["ruttin", "prefs", "toggle", "sepia"]).is_err());
    }
}
