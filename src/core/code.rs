//! Mastermind code representation
//!
//! A Code stores up to `MAX_LENGTH` symbols inline so it can be copied freely
//! and used as a map key without allocation.

use crate::error::MastermindError;
use std::cmp::Ordering;
use std::fmt;

/// Longest supported code
pub const MAX_LENGTH: usize = 9;

/// Every symbol an alphabet may be built from
pub const VALID_SYMBOLS: &str = "0123456789ABCDEFGH";

/// A fixed-length sequence of symbols, either guessed or hidden
///
/// Codes order lexicographically by symbol, which is the canonical enumeration
/// order used everywhere in the engine.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    symbols: [u8; MAX_LENGTH],
    len: u8,
}

impl Code {
    /// Create a code from text
    ///
    /// Letters are upper-cased. This only checks the symbol universe and the
    /// length bound; whether the code fits a particular alphabet is decided by
    /// [`Configuration::is_valid`](crate::core::Configuration::is_valid).
    ///
    /// # Errors
    /// Returns `MastermindError::InvalidCode` if the text is empty, longer than
    /// `MAX_LENGTH`, or contains a symbol outside `VALID_SYMBOLS`.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    ///
    /// let code = Code::new("abcd").unwrap();
    /// assert_eq!(code.to_string(), "ABCD");
    ///
    /// assert!(Code::new("ABCZ").is_err());
    /// assert!(Code::new("").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, MastermindError> {
        let bytes = text.as_bytes();
        if bytes.is_empty() || bytes.len() > MAX_LENGTH {
            return Err(MastermindError::InvalidCode(text.to_string()));
        }

        let mut symbols = [0u8; MAX_LENGTH];
        for (slot, &byte) in symbols.iter_mut().zip(bytes) {
            let symbol = byte.to_ascii_uppercase();
            if !VALID_SYMBOLS.as_bytes().contains(&symbol) {
                return Err(MastermindError::InvalidCode(text.to_string()));
            }
            *slot = symbol;
        }

        Ok(Self::from_symbols(&symbols[..bytes.len()]))
    }

    /// Build a code from symbols the caller has already validated
    pub(crate) fn from_symbols(symbols: &[u8]) -> Self {
        debug_assert!(!symbols.is_empty() && symbols.len() <= MAX_LENGTH);
        let mut inline = [0u8; MAX_LENGTH];
        inline[..symbols.len()].copy_from_slice(symbols);
        Self {
            symbols: inline,
            len: symbols.len() as u8,
        }
    }

    /// Symbols of the code as ASCII bytes
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols[..self.len()]
    }

    /// Number of symbols
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Codes are never empty; provided for API symmetry with `len`
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check whether the symbol appears anywhere in the code
    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: u8) -> bool {
        self.symbols().contains(&symbol)
    }

    /// Check whether any symbol appears more than once
    #[must_use]
    pub fn has_repeats(&self) -> bool {
        let symbols = self.symbols();
        symbols
            .iter()
            .enumerate()
            .any(|(i, symbol)| symbols[..i].contains(symbol))
    }
}

impl Ord for Code {
    fn cmp(&self, other: &Self) -> Ordering {
        self.symbols().cmp(other.symbols())
    }
}

impl PartialOrd for Code {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &symbol in self.symbols() {
            write!(f, "{}", char::from(symbol))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code({self})")
    }
}

impl std::str::FromStr for Code {
    type Err = MastermindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
