//! Writing rendered artifacts to disk.

use crate::{
    Error, GeneratedParameterSet, Result,
    template::{CURVE_TEMPLATE, render},
};
use std::{
    env, fs,
    path::{Path, PathBuf},
    process::Command,
};
use tracing::{debug, info, warn};

/// Directory artifacts are written to when none is given.
pub const DEFAULT_OUT_DIR: &str = "target/curves";

/// Environment variable overriding the formatter executable.
pub const RUSTFMT_ENV: &str = "RUSTFMT";

/// Flags passed to the default `rustfmt` ahead of the file name.
pub const RUSTFMT_ARGS: [&str; 2] = ["--edition", "2021"];

/// Emitter configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmitterConfig {
    /// Directory the artifacts are written to. Created if absent.
    pub out_dir: PathBuf,

    /// Formatter run on every written file, or `None` to leave the output
    /// unformatted.
    pub formatter: Option<PathBuf>,

    /// Flags passed to the formatter ahead of the file name.
    pub formatter_args: Vec<String>,
}

impl EmitterConfig {
    /// Write to `out_dir` and format with the default formatter.
    ///
    /// If `RUSTFMT` is set its value is run as `$RUSTFMT <file>`, otherwise
    /// `rustfmt` is run with [`RUSTFMT_ARGS`].
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        let config = Self {
            out_dir: out_dir.into(),
            formatter: Some(PathBuf::from("rustfmt")),
            formatter_args: RUSTFMT_ARGS.map(String::from).to_vec(),
        };

        match env::var_os(RUSTFMT_ENV) {
            Some(formatter) => config.with_formatter(Some(formatter.into())),
            None => config,
        }
    }

    /// Set the formatter, or disable formatting with `None`.
    ///
    /// The formatter is run as `<formatter> <file>`; use
    /// [`EmitterConfig::with_formatter_args`] to pass flags.
    pub fn with_formatter(mut self, formatter: Option<PathBuf>) -> Self {
        self.formatter = formatter;
        self.formatter_args.clear();
        self
    }

    /// Set the flags passed to the formatter ahead of the file name.
    pub fn with_formatter_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.formatter_args = args.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OUT_DIR)
    }
}

/// Renders parameter sets into the curve template and writes one file per
/// curve.
#[derive(Clone, Debug)]
pub struct Emitter {
    config: EmitterConfig,
}

impl Emitter {
    /// Create a new emitter.
    pub fn new(config: EmitterConfig) -> Self {
        Self { config }
    }

    /// Emitter configuration.
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Render the artifact for `params` without writing it.
    pub fn render(&self, params: &GeneratedParameterSet) -> Result<String> {
        render(CURVE_TEMPLATE, &params.substitutions())
    }

    /// Render and write the artifact for `params`, then run the formatter on
    /// it.
    ///
    /// Formatter failures are logged and otherwise ignored: the unformatted
    /// file is still valid.
    pub fn emit(&self, params: &GeneratedParameterSet) -> Result<PathBuf> {
        let code = self.render(params)?;
        let out_dir = &self.config.out_dir;

        fs::create_dir_all(out_dir).map_err(|source| Error::Io {
            path: out_dir.clone(),
            source,
        })?;

        let path = out_dir.join(params.file_name());
        fs::write(&path, code.as_bytes()).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;

        info!(curve = params.name, path = %path.display(), "wrote curve parameters");

        if let Some(formatter) = &self.config.formatter {
            run_formatter(formatter, &self.config.formatter_args, &path);
        }

        Ok(path)
    }
}

fn run_formatter(formatter: &Path, args: &[String], path: &Path) {
    let status = Command::new(formatter).args(args).arg(path).status();

    match status {
        Ok(status) if status.success() => {
            debug!(formatter = %formatter.display(), path = %path.display(), "formatted");
        }
        Ok(status) => {
            warn!(formatter = %formatter.display(), path = %path.display(), %status, "formatter failed");
        }
        Err(err) => {
            warn!(formatter = %formatter.display(), path = %path.display(), error = %err, "couldn't run formatter");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_formatter() {
        let config = EmitterConfig::new("out");

        match env::var_os(RUSTFMT_ENV) {
            None => {
                assert_eq!(config.formatter, Some(PathBuf::from("rustfmt")));
                assert_eq!(config.formatter_args, RUSTFMT_ARGS);
            }
            Some(formatter) => {
                assert_eq!(config.formatter, Some(PathBuf::from(formatter)));
                assert!(config.formatter_args.is_empty());
            }
        }
    }

    #[test]
    fn custom_formatter_gets_no_flags() {
        let config = EmitterConfig::new("out").with_formatter(Some("prettier".into()));
        assert_eq!(config.formatter, Some(PathBuf::from("prettier")));
        assert!(config.formatter_args.is_empty());

        let config = config.with_formatter_args(["--check"]);
        assert_eq!(config.formatter_args, ["--check"]);
    }
}
