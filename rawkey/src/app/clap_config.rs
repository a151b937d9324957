// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, DEFAULT_LOG_FILE_NAME, EchoConfig, RawModeProfile,
            TracingConfig};
use clap::{Args, Parser, ValueEnum};
use tracing_core::LevelFilter;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "rawkey")]
#[command(about = "Echo the decimal code of every key byte typed in a raw mode terminal")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version}\n\nType keys to see their codes. Press the quit key (`q` unless changed) to exit.\nUSAGE:\n  rawkey [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(
        long,
        short = 'p',
        value_enum,
        default_value_t = RawModeProfile::Full,
        help = "How much terminal input and output processing to switch off."
    )]
    pub profile: RawModeProfile,

    #[arg(
        long,
        short = 'q',
        default_value_t = 'q',
        help = "Key that ends the session. Must be an ASCII character."
    )]
    pub quit_key: char,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file for debugging. Nothing is logged to the terminal."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        default_value = DEFAULT_LOG_FILE_NAME,
        help = "File to write logs to when logging is enabled."
    )]
    pub log_file: String,

    #[arg(
        global = true,
        long,
        value_enum,
        default_value_t = LogLevel::Debug,
        help = "Most verbose level that gets logged."
    )]
    pub log_level: LogLevel,
}

/// `--log-level` values.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, ValueEnum, strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(it: LogLevel) -> Self {
        match it {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// The quit key is compared against single bytes read from the terminal.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum CLIArgError {
    #[error("quit key {0:?} is not an ASCII character")]
    #[diagnostic(
        code(rawkey::cli::quit_key_not_ascii),
        help("Keys are read one byte at a time, so the quit key must fit in one byte.")
    )]
    QuitKeyNotAscii(char),
}

impl CLIArg {
    /// # Errors
    ///
    /// Returns [`CLIArgError::QuitKeyNotAscii`] if the quit key is not one byte long.
    pub fn echo_config(&self) -> CommonResult<EchoConfig> {
        let quit_key = match u8::try_from(self.quit_key) {
            Ok(byte) if byte.is_ascii() => byte,
            _ => return Err(CLIArgError::QuitKeyNotAscii(self.quit_key).into()),
        };
        Ok(EchoConfig {
            profile: self.profile,
            quit_key,
        })
    }

    /// File-only logging when `--enable-logging` is passed, since stdout carries the
    /// echoed codes. Otherwise logging is off.
    #[must_use]
    pub fn tracing_config(&self) -> TracingConfig {
        let it = &self.global_options;
        if it.enable_logging {
            TracingConfig::new_file(Some(it.log_file.clone()), it.log_level.into())
        } else {
            TracingConfig::off()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WriterConfig;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_defaults() {
        let cli_arg = CLIArg::try_parse_from(["rawkey"]).unwrap();
        assert_eq!(cli_arg.echo_config().unwrap(), EchoConfig::default());

        let tracing_config = cli_arg.tracing_config();
        assert_eq!(tracing_config.get_writer_config(), WriterConfig::None);
        assert_eq!(tracing_config.get_level_filter(), LevelFilter::OFF);
    }

    #[test_case("echo-off", RawModeProfile::EchoOff)]
    #[test_case("canonical-off", RawModeProfile::CanonicalOff)]
    #[test_case("signals-off", RawModeProfile::SignalsOff)]
    #[test_case("full", RawModeProfile::Full)]
    fn test_profile_flag(name: &str, expected: RawModeProfile) {
        let cli_arg = CLIArg::try_parse_from(["rawkey", "--profile", name]).unwrap();
        assert_eq!(cli_arg.echo_config().unwrap().profile, expected);
    }

    #[test]
    fn test_unknown_profile_is_rejected() {
        assert!(CLIArg::try_parse_from(["rawkey", "-p", "cooked"]).is_err());
    }

    #[test]
    fn test_custom_quit_key() {
        let cli_arg = CLIArg::try_parse_from(["rawkey", "-q", "x"]).unwrap();
        assert_eq!(cli_arg.echo_config().unwrap().quit_key, b'x');
    }

    #[test]
    fn test_non_ascii_quit_key_is_rejected() {
        let cli_arg = CLIArg::try_parse_from(["rawkey", "--quit-key", "é"]).unwrap();
        let report = cli_arg.echo_config().unwrap_err();
        let err = report.downcast_ref::<CLIArgError>().unwrap();
        assert!(matches!(err, CLIArgError::QuitKeyNotAscii('é')));
    }

    #[test]
    fn test_logging_goes_to_file() {
        let cli_arg = CLIArg::try_parse_from([
            "rawkey",
            "-l",
            "--log-file",
            "/tmp/rawkey.log",
            "--log-level",
            "trace",
        ])
        .unwrap();

        let tracing_config = cli_arg.tracing_config();
        assert_eq!(
            tracing_config.get_writer_config(),
            WriterConfig::File("/tmp/rawkey.log".to_string())
        );
        assert_eq!(tracing_config.get_level_filter(), LevelFilter::TRACE);
    }

    #[test]
    fn test_logging_defaults_to_log_txt_at_debug() {
        let cli_arg = CLIArg::try_parse_from(["rawkey", "--enable-logging"]).unwrap();
        let tracing_config = cli_arg.tracing_config();
        assert_eq!(
            tracing_config.get_writer_config(),
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );
        assert_eq!(tracing_config.get_level_filter(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_log_level_display_matches_cli_name() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
    }
}
