//! The optional TOML configuration file.
//!
//! ```toml
//! [options]
//! nerdfont = false
//! show_debug_process = false
//!
//! [symbols]
//! power = "^"
//! decimal_split = "."
//!
//! [constants]
//! tau = 6.283185307179586
//! ```
//!
//! Every table and field may be left out. Constants listed in the file are added to the built-in
//! ones (`pi`, `phi` and `e`), replacing those of the same name.

use lambda_parser::{config::SymbolError, Constants, SymbolTable};
use serde::Deserialize;
use std::{collections::BTreeMap, fmt, fs, io, path::{Path, PathBuf}};

/// The environment variable holding the path to the configuration file, used when no path is
/// given on the command line.
pub const CONFIG_ENV: &str = "LAMBDA_CALC_CONFIG";

/// Toggles for the shell.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Use a nerd font glyph in the prompt.
    pub nerdfont: bool,

    /// Log every simplification step.
    pub show_debug_process: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub options: Options,
    pub symbols: SymbolTable,

    /// Constants added to the built-in ones.
    pub constants: BTreeMap<String, f64>,
}

/// A configuration file that could not be used.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io(PathBuf, io::Error),

    /// The file is not valid TOML, or does not have the expected shape.
    Parse(PathBuf, toml::de::Error),

    /// The symbol table cannot be lexed with.
    Invalid(SymbolError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(path, err) => write!(f, "could not read `{}`: {}", path.display(), err),
            Self::Parse(path, err) => write!(f, "could not parse `{}`: {}", path.display(), err),
            Self::Invalid(err) => write!(f, "invalid symbol table: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(_, err) => Some(err),
            Self::Parse(_, err) => Some(err),
            Self::Invalid(err) => Some(err),
        }
    }
}

impl Config {
    /// Parses and validates the contents of a configuration file.
    pub fn from_toml(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|err| ConfigError::Parse(path.to_path_buf(), err))?;
        config.symbols.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Reads the configuration file at the given path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_toml(path, &content)
    }

    /// Reads the configuration file named by `arg`, or else by the [`CONFIG_ENV`] environment
    /// variable. Without either, the built-in defaults are used.
    pub fn load(arg: Option<String>) -> Result<Self, ConfigError> {
        match arg.or_else(|| std::env::var(CONFIG_ENV).ok()) {
            Some(path) => Self::load_from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// The built-in constants, extended with the ones from the file.
    pub fn constants(&self) -> Constants {
        let mut constants = Constants::default();
        for (name, value) in &self.constants {
            constants.insert(name.as_str(), *value);
        }
        constants
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse(content: &str) -> Result<Config, ConfigError> {
        Config::from_toml(Path::new("lambda.toml"), content)
    }

    #[test]
    fn empty_file() {
        assert_eq!(parse("").unwrap(), Config::default());
    }

    #[test]
    fn partial_tables() {
        let config = parse(r#"
            [options]
            show_debug_process = true

            [symbols]
            power = "**"
        "#);
        assert!(matches!(config, Err(ConfigError::Parse(..))));

        let config = parse(r#"
            [options]
            show_debug_process = true

            [symbols]
            multiply = "x"
        "#);
        assert!(matches!(config, Err(ConfigError::Invalid(SymbolError::NotPunctuation { .. }))));

        let config = parse(r#"
            [options]
            show_debug_process = true

            [symbols]
            decimal_split = ","
            parameter_split = ";"
        "#).unwrap();
        assert_eq!(config.options, Options { nerdfont: false, show_debug_process: true });
        assert_eq!(config.symbols, SymbolTable {
            decimal_split: ',',
            parameter_split: ';',
            ..SymbolTable::default()
        });
    }

    #[test]
    fn constants_extend_builtins() {
        let config = parse(r#"
            [constants]
            tau = 6.5
            pi = 3.0
        "#).unwrap();
        let constants = config.constants();
        assert_eq!(constants.get("tau"), Some(6.5));
        assert_eq!(constants.get("pi"), Some(3.0));
        assert_eq!(constants.get("e"), Some(std::f64::consts::E));
    }

    #[test]
    fn missing_file() {
        let err = Config::load_from_file(Path::new("/nonexistent/lambda.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
        assert!(err.to_string().starts_with("could not read"));
    }
}
