/// CLI argument definitions via clap derive.
///
/// The flags keep the single-dash spelling of the vendor utilities
/// (`-tdc=0 -static`). clap only knows `--long`, so [`normalize_args`]
/// rewrites single-dash long flags before parsing; `-v`, `-d` and `-h`
/// stay short flags.
use std::ffi::OsString;

use clap::Parser;

use crate::commands::info::InfoRequest;

/// tdcinfo — show information about installed xHPTDC8 TDC boards.
#[derive(Debug, Parser)]
#[allow(clippy::struct_excessive_bools)]
#[command(
    name = "tdcinfo",
    about = "Show static, temperature, fast and clock information of xHPTDC8 TDC boards",
    version,
    after_help = "Flags may be written with one or two dashes: -tdc=0 and --tdc=0 are the same."
)]
pub struct Cli {
    /// Index of the TDC (0, 1, ...), or its serial number (e.g. 21.108).
    #[arg(long, value_name = "TDC", allow_hyphen_values = true)]
    pub tdc: Option<String>,

    /// Show size and version information for all selected structures.
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Show `static_info`.
    #[arg(long = "static")]
    pub static_info: bool,

    /// Show `temperature_info`.
    #[arg(long)]
    pub temp: bool,

    /// Show `temperature_info` (same as -temp).
    #[arg(long)]
    pub temperature: bool,

    /// Show `fast_info`.
    #[arg(long)]
    pub fast: bool,

    /// Show `clock_info`.
    #[arg(long)]
    pub clock: bool,

    /// Show all info structures.
    #[arg(long)]
    pub all: bool,

    /// Output requested data in JSON only, with no headers.
    #[arg(short = 'd')]
    pub json_only: bool,

    /// Show `static_info` of every installed TDC.
    #[arg(long)]
    pub list: bool,

    /// Print debug logging to stderr.
    #[arg(long)]
    pub debug: bool,

    /// Number of boards reported by the simulated driver.
    #[arg(long, env = "TDCINFO_DEVICES", default_value_t = 1, allow_negative_numbers = true, hide = true)]
    pub devices: i32,
}

impl Cli {
    /// Parse the process arguments, accepting single-dash long flags.
    #[must_use]
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// The `-tdc` value; empty when none was given.
    #[must_use]
    pub fn selector(&self) -> &str {
        self.tdc.as_deref().unwrap_or_default()
    }

    /// Section selection and formatting flags for the display dispatcher.
    #[must_use]
    pub fn info_request(&self) -> InfoRequest {
        InfoRequest {
            static_info: self.static_info,
            temp: self.temp,
            temperature: self.temperature,
            fast: self.fast,
            clock: self.clock,
            all: self.all,
            verbose: self.verbose,
            json_only: self.json_only,
        }
    }
}

/// Rewrite `-name` / `-name=value` into `--name` / `--name=value`.
///
/// Only arguments whose name is longer than one character and starts with a
/// letter are touched, so short flags and negative numbers pass through.
/// Everything after a bare `--` is left alone. The first argument is the
/// program name.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    for (i, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if i == 0 || passthrough {
            out.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }
        match arg.to_str().and_then(single_dash_long) {
            Some(long) => out.push(OsString::from(format!("-{long}"))),
            None => out.push(arg),
        }
    }
    out
}

/// Return `arg` unchanged if it is a single-dash long flag, else `None`.
fn single_dash_long(arg: &str) -> Option<&str> {
    let rest = arg.strip_prefix('-')?;
    if rest.starts_with('-') {
        return None;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    let starts_with_letter = name.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
    (starts_with_letter && name.chars().count() > 1).then_some(arg)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["tdcinfo"];
        full.extend_from_slice(args);
        Cli::try_parse_from(normalize_args(full)).unwrap()
    }

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_normalize_single_dash() {
        let out = normalize_args(["tdcinfo", "-tdc=0", "-static", "-v", "-d", "--clock"]);
        assert_eq!(out, ["tdcinfo", "--tdc=0", "--static", "-v", "-d", "--clock"]);
    }

    #[test]
    fn test_normalize_leaves_numbers_and_passthrough() {
        let out = normalize_args(["tdcinfo", "-tdc", "-1", "--", "-static"]);
        assert_eq!(out, ["tdcinfo", "--tdc", "-1", "--", "-static"]);
    }

    #[test]
    fn test_parse_vendor_spelling() {
        let cli = parse(&["-tdc=21.108", "-temp", "-temperature", "-fast", "-v", "-d"]);
        assert_eq!(cli.selector(), "21.108");
        assert!(cli.temp && cli.temperature && cli.fast);
        assert!(cli.verbose && cli.json_only);
        assert!(!cli.static_info && !cli.clock && !cli.all);
    }

    #[test]
    fn test_parse_separate_value() {
        let cli = parse(&["-tdc", "1", "-all"]);
        assert_eq!(cli.selector(), "1");
        assert!(cli.all);
    }

    #[test]
    fn test_no_arguments() {
        let cli = parse(&[]);
        assert!(cli.selector().is_empty());
        assert!(!cli.list);
    }

    #[test]
    fn test_positional_rejected() {
        let result = Cli::try_parse_from(normalize_args(["tdcinfo", "0"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_info_request_carries_flags() {
        let request = parse(&["-tdc=0", "-clock", "-d"]).info_request();
        assert!(request.clock && request.json_only);
        assert!(!request.verbose && !request.static_info);
    }
}
