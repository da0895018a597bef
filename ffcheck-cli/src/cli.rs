// ffcheck-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.
//
// The validation flow itself consumes no configuration: there are no
// positional arguments and no tuning flags, only output controls.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "ffcheck: FFmpeg toolchain validation tool",
    long_about = "Verifies the local ffmpeg/ffprobe installation, probes codec, format, and \
                  hardware-acceleration support, checks the companion skill package, runs a \
                  smoke-test transcode, and writes a JSON validation report."
)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, default_value_t = false)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        let cli = Cli::parse_from(["ffcheck"]);
        assert!(!cli.verbose);
        assert!(!cli.no_color);
    }

    #[test]
    fn test_parse_output_flags() {
        let cli = Cli::parse_from(["ffcheck", "--verbose", "--no-color"]);
        assert!(cli.verbose);
        assert!(cli.no_color);
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["ffcheck", "some-input"]).is_err());
    }
}
