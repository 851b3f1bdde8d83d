//! Command line flags.
//!
//! Every flag is optional; anything left unset falls back to the
//! environment, then the config file, then the built-in defaults
//! (see [`ConfigState::resolve`](crate::state::ConfigState::resolve)).

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "stockscan",
    version,
    about = "Stockscan: scan QR codes to track stock",
    long_about = None
)]
pub struct Cli {
    /// SQLite database file.
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// TOML config file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Admin name (repeat for several). Replaces the configured allow-list.
    #[arg(long = "admin", value_name = "NAME")]
    pub admins: Vec<String>,

    /// Scanner decode rate; also sets the duplicate-read window.
    #[arg(long, value_name = "N")]
    pub fps: Option<u32>,

    /// Key the inventory snapshot is stored under.
    #[arg(long, value_name = "KEY")]
    pub storage_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags() {
        let cli = Cli::try_parse_from(["stockscan"]).unwrap();
        assert!(cli.db.is_none());
        assert!(cli.admins.is_empty());
        assert!(cli.fps.is_none());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "stockscan",
            "--db",
            "/tmp/s.db",
            "-c",
            "stockscan.toml",
            "--admin",
            "Ada Lovelace",
            "--admin",
            "Grace Hopper",
            "--fps",
            "15",
            "--storage-key",
            "shop",
        ])
        .unwrap();

        assert_eq!(cli.db, Some(PathBuf::from("/tmp/s.db")));
        assert_eq!(cli.config, Some(PathBuf::from("stockscan.toml")));
        assert_eq!(cli.admins, vec!["Ada Lovelace", "Grace Hopper"]);
        assert_eq!(cli.fps, Some(15));
        assert_eq!(cli.storage_key.as_deref(), Some("shop"));
    }

    #[test]
    fn test_rejects_bad_fps() {
        assert!(Cli::try_parse_from(["stockscan", "--fps", "fast"]).is_err());
    }
}
