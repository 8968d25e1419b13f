//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// Legacy single-dash spelling of `--workshop`.
const LEGACY_WORKSHOP_FLAG: &str = "-workshop";

/// Generate a FastDL `resource.AddFile` script for a Garry's Mod server
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Workshop collection ID to add to FastDL (0 skips the workshop scan)
    #[arg(short, long, default_value_t = 0, value_name = "ID")]
    pub workshop: u64,

    /// Content root directory, the folder containing `addons`
    #[arg(short, long, default_value = "garrysmod", value_hint = clap::ValueHint::DirPath)]
    pub root: PathBuf,

    /// Continue without a workshop collection instead of asking
    #[arg(short, long)]
    pub yes: bool,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse process arguments, accepting the legacy `-workshop` flag.
    pub fn parse_env() -> Self {
        Self::parse_from(rewrite_legacy_flags(std::env::args_os()))
    }
}

/// Rewrite `-workshop <id>` / `-workshop=<id>` into `--workshop`.
///
/// Clap would otherwise read `-workshop` as the short flag `-w` with the
/// value `orkshop`.
pub fn rewrite_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some(s) if s == LEGACY_WORKSHOP_FLAG => OsString::from("--workshop"),
            Some(s) => match s.strip_prefix(LEGACY_WORKSHOP_FLAG) {
                Some(value) if value.starts_with('=') => OsString::from(format!("--workshop{value}")),
                _ => arg,
            },
            None => arg,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let args = args.iter().map(OsString::from);
        Cli::parse_from(rewrite_legacy_flags(args))
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["gmod-fastdl"]);
        assert_eq!(cli.workshop, 0);
        assert_eq!(cli.root, PathBuf::from("garrysmod"));
        assert!(!cli.yes);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_verbose_and_version_flags_coexist() {
        use clap::CommandFactory;

        Cli::command().debug_assert();
        assert!(parse(&["gmod-fastdl", "-v"]).verbose);
        assert!(parse(&["gmod-fastdl", "--verbose"]).verbose);
    }

    #[test]
    fn test_legacy_workshop_flag() {
        let cli = parse(&["gmod-fastdl", "-workshop", "123456789"]);
        assert_eq!(cli.workshop, 123456789);

        let cli = parse(&["gmod-fastdl", "-workshop=42"]);
        assert_eq!(cli.workshop, 42);
    }

    #[test]
    fn test_long_and_short_flags() {
        let cli = parse(&["gmod-fastdl", "--workshop", "7", "-r", "server/garrysmod", "-y"]);
        assert_eq!(cli.workshop, 7);
        assert_eq!(cli.root, PathBuf::from("server/garrysmod"));
        assert!(cli.yes);

        let cli = parse(&["gmod-fastdl", "-w", "9"]);
        assert_eq!(cli.workshop, 9);
    }

    #[test]
    fn test_rewrite_leaves_other_args_alone() {
        let args: Vec<OsString> = ["gmod-fastdl", "--root", "-workshops", "--workshop=3"]
            .iter()
            .map(OsString::from)
            .collect();
        assert_eq!(rewrite_legacy_flags(args.clone()), args);
    }
}
