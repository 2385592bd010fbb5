//! CLI argument parsing via clap.

use clap::Parser;

/// A themed to-do list for the terminal.
#[derive(Debug, Parser)]
#[command(name = "liminity", version)]
pub struct Args {
    /// Theme file to load and save into
    /// (default: ~/.config/liminity/themes.toml, seeded on first run).
    pub theme_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn theme_file_is_optional() {
        let args = Args::parse_from(["liminity"]);
        assert!(args.theme_file.is_none());
    }

    #[test]
    fn positional_theme_file_is_captured() {
        let args = Args::parse_from(["liminity", "/tmp/themes.toml"]);
        assert_eq!(args.theme_file.as_deref(), Some("/tmp/themes.toml"));
    }

    #[test]
    fn extra_positionals_are_rejected() {
        assert!(Args::try_parse_from(["liminity", "a.toml", "b.toml"]).is_err());
    }

    #[test]
    fn version_flag_reports_package_version() {
        let err = Args::try_parse_from(["liminity", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        assert!(err.to_string().contains(env!("CARGO_PKG_VERSION")));
    }
}
