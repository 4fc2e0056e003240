//! Injected configuration for the lexer: the symbol table and the named constants.

use std::{collections::BTreeMap, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The characters the lexer recognizes as operators and separators.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SymbolTable {
    pub plus: char,
    pub minus: char,
    pub multiply: char,
    pub divide: char,
    pub power: char,
    pub l_parentheses: char,
    pub r_parentheses: char,
    pub equal: char,

    /// Separates the integer and fractional part of a number literal.
    pub decimal_split: char,

    /// Separates the parameters of a function.
    pub parameter_split: char,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self {
            plus: '+',
            minus: '-',
            multiply: '*',
            divide: '/',
            power: '^',
            l_parentheses: '(',
            r_parentheses: ')',
            equal: '=',
            decimal_split: '.',
            parameter_split: ',',
        }
    }
}

/// A symbol table that can never be matched by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolError {
    /// The symbol is a letter, digit or whitespace, which the lexer reads as something else.
    NotPunctuation { name: &'static str, symbol: char },

    /// Two operators share the same symbol.
    Duplicate { first: &'static str, second: &'static str, symbol: char },
}

impl fmt::Display for SymbolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPunctuation { name, symbol } => {
                write!(f, "the `{}` symbol `{}` must not be a letter, digit or whitespace", name, symbol)
            },
            Self::Duplicate { first, second, symbol } => {
                write!(f, "`{}` and `{}` both use the symbol `{}`", first, second, symbol)
            },
        }
    }
}

impl std::error::Error for SymbolError {}

impl SymbolTable {
    /// Every symbol, paired with the name of its field.
    pub fn entries(&self) -> [(&'static str, char); 10] {
        [
            ("plus", self.plus),
            ("minus", self.minus),
            ("multiply", self.multiply),
            ("divide", self.divide),
            ("power", self.power),
            ("l_parentheses", self.l_parentheses),
            ("r_parentheses", self.r_parentheses),
            ("equal", self.equal),
            ("decimal_split", self.decimal_split),
            ("parameter_split", self.parameter_split),
        ]
    }

    /// Checks that every symbol can be told apart by the lexer.
    pub fn validate(&self) -> Result<(), SymbolError> {
        let entries = self.entries();
        for (i, &(name, symbol)) in entries.iter().enumerate() {
            if symbol.is_alphanumeric() || symbol.is_whitespace() {
                return Err(SymbolError::NotPunctuation { name, symbol });
            }

            if let Some(&(second, _)) = entries[i + 1..].iter().find(|(_, other)| *other == symbol) {
                return Err(SymbolError::Duplicate { first: name, second, symbol });
            }
        }
        Ok(())
    }
}

/// Named numeric constants, substituted by the lexer as number tokens.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Constants(BTreeMap<String, f64>);

impl Default for Constants {
    fn default() -> Self {
        Self(BTreeMap::from([
            ("pi".to_string(), std::f64::consts::PI),
            ("phi".to_string(), (1.0 + 5f64.sqrt()) / 2.0),
            ("e".to_string(), std::f64::consts::E),
        ]))
    }
}

impl Constants {
    /// Returns the value of the constant with the given name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    /// Adds or replaces a constant.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.0.insert(name.into(), value);
    }

    /// Iterates over the constants in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn default_table_is_valid() {
        assert_eq!(SymbolTable::default().validate(), Ok(()));
    }

    #[test]
    fn letters_are_rejected() {
        let table = SymbolTable { power: 'p', ..Default::default() };
        assert_eq!(
            table.validate(),
            Err(SymbolError::NotPunctuation { name: "power", symbol: 'p' }),
        );
    }

    #[test]
    fn duplicates_are_rejected() {
        let table = SymbolTable { parameter_split: '.', ..Default::default() };
        assert_eq!(
            table.validate(),
            Err(SymbolError::Duplicate { first: "decimal_split", second: "parameter_split", symbol: '.' }),
        );
    }

    #[test]
    fn default_constants() {
        let constants = Constants::default();
        assert_eq!(constants.get("pi"), Some(std::f64::consts::PI));
        assert_eq!(constants.get("e"), Some(std::f64::consts::E));
        assert_eq!(constants.get("tau"), None);
        assert_eq!(constants.iter().map(|(name, _)| name).collect::<Vec<_>>(), vec!["e", "phi", "pi"]);
    }
}
