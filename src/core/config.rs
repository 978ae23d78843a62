//! Puzzle configuration and the code/score space it spans
//!
//! A [`Configuration`] fixes the alphabet, the code length and whether symbols
//! may repeat. Everything derived from those three values (the full code set,
//! the achievable scores) is computed once here and lent out by reference.

use super::code::{Code, MAX_LENGTH, VALID_SYMBOLS};
use super::score::Score;
use crate::error::MastermindError;
use rand::Rng;

/// One Mastermind variant
#[derive(Debug, Clone)]
pub struct Configuration {
    alphabet: String,
    length: usize,
    unique: bool,
    all_codes: Vec<Code>,
    all_scores: Vec<Score>,
}

impl Configuration {
    /// Create a configuration and enumerate its code and score space
    ///
    /// Alphabet letters are upper-cased before validation.
    ///
    /// # Errors
    /// - `InvalidLength` if `length` is outside `1..=MAX_LENGTH`
    /// - `InvalidAlphabet` if the alphabet has fewer than two symbols, repeats a
    ///   symbol, uses a symbol outside `VALID_SYMBOLS`, or is shorter than `length`
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Configuration;
    ///
    /// let config = Configuration::new("ABCD", 2, false).unwrap();
    /// assert_eq!(config.all_codes().len(), 16);
    /// assert_eq!(config.all_scores().len(), 5);
    ///
    /// assert!(Configuration::new("A", 1, false).is_err());
    /// assert!(Configuration::new("ABC", 4, false).is_err());
    /// ```
    pub fn new(alphabet: &str, length: usize, unique: bool) -> Result<Self, MastermindError> {
        if length == 0 || length > MAX_LENGTH {
            return Err(MastermindError::InvalidLength(length));
        }

        let alphabet = alphabet.to_ascii_uppercase();
        let invalid = |reason| MastermindError::InvalidAlphabet {
            alphabet: alphabet.clone(),
            reason,
        };

        let symbols = alphabet.as_bytes();
        if symbols.len() < 2 {
            return Err(invalid("at least two symbols are required"));
        }
        if symbols.iter().any(|s| !VALID_SYMBOLS.as_bytes().contains(s)) {
            return Err(invalid("symbols must be drawn from 0-9 and A-H"));
        }
        if symbols
            .iter()
            .enumerate()
            .any(|(i, s)| symbols[..i].contains(s))
        {
            return Err(invalid("symbols must not repeat"));
        }
        if symbols.len() < length {
            return Err(invalid("alphabet is shorter than the code length"));
        }

        let mut config = Self {
            alphabet,
            length,
            unique,
            all_codes: Vec::new(),
            all_scores: Vec::new(),
        };
        config.all_scores = config.generate_scores();
        config.all_codes = config.generate_codes();
        Ok(config)
    }

    #[must_use]
    pub fn alphabet(&self) -> &str {
        &self.alphabet
    }

    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Whether codes are forbidden from repeating a symbol
    #[must_use]
    pub const fn has_unique_symbols(&self) -> bool {
        self.unique
    }

    /// Every valid code, sorted in canonical order
    #[must_use]
    pub fn all_codes(&self) -> &[Code] {
        &self.all_codes
    }

    /// Every achievable score, bulls-major then cows ascending
    #[must_use]
    pub fn all_scores(&self) -> &[Score] {
        &self.all_scores
    }

    /// All bulls, no cows
    #[must_use]
    pub const fn winning_score(&self) -> Score {
        Score::new(0, self.length as u8)
    }

    /// Check a code against this configuration's length, alphabet and uniqueness rule
    #[must_use]
    pub fn is_valid(&self, code: &Code) -> bool {
        code.len() == self.length
            && code
                .symbols()
                .iter()
                .all(|s| self.alphabet.as_bytes().contains(s))
            && !(self.unique && code.has_repeats())
    }

    /// Check textual input the same way [`Configuration::code`] does
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Configuration;
    ///
    /// let config = Configuration::new("ABCD", 2, true).unwrap();
    /// assert!(config.is_valid_code("ab"));
    /// assert!(!config.is_valid_code("AA"));
    /// assert!(!config.is_valid_code("AE"));
    /// ```
    #[must_use]
    pub fn is_valid_code(&self, text: &str) -> bool {
        self.code(text).is_ok()
    }

    /// Parse a code that must belong to this configuration
    ///
    /// # Errors
    /// Returns `InvalidCode` if the text is not a valid code here.
    pub fn code(&self, text: &str) -> Result<Code, MastermindError> {
        let code = Code::new(text)?;
        if self.is_valid(&code) {
            Ok(code)
        } else {
            Err(MastermindError::InvalidCode(text.to_string()))
        }
    }

    /// Check that some guess/code pair can produce this score
    #[must_use]
    pub fn is_valid_score(&self, score: Score) -> bool {
        self.all_scores.contains(&score)
    }

    /// Score a guess against a hidden code
    ///
    /// # Errors
    /// Returns `InvalidCode` if either code does not belong to this configuration.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Configuration, Score};
    ///
    /// let config = Configuration::new("ABCDEF", 4, false).unwrap();
    /// let guess = config.code("AABB").unwrap();
    /// let secret = config.code("ABAC").unwrap();
    /// assert_eq!(config.evaluate(&guess, &secret).unwrap(), Score::new(2, 1));
    /// ```
    pub fn evaluate(&self, guess: &Code, code: &Code) -> Result<Score, MastermindError> {
        for c in [guess, code] {
            if !self.is_valid(c) {
                return Err(MastermindError::InvalidCode(c.to_string()));
            }
        }
        Ok(self.evaluate_unchecked(guess, code))
    }

    /// Score a guess against a code without validating either
    ///
    /// Both codes must have this configuration's length.
    #[must_use]
    pub fn evaluate_unchecked(&self, guess: &Code, code: &Code) -> Score {
        debug_assert!(self.is_valid(guess) && self.is_valid(code));
        let guess = guess.symbols();
        let code = code.symbols();

        if self.unique {
            let mut cows = 0;
            let mut bulls = 0;
            for (g, c) in guess.iter().zip(code) {
                if g == c {
                    bulls += 1;
                } else if code.contains(g) {
                    cows += 1;
                }
            }
            return Score::new(cows, bulls);
        }

        let mut guess_used = [false; MAX_LENGTH];
        let mut code_used = [false; MAX_LENGTH];
        let mut bulls = 0;
        for (i, (g, c)) in guess.iter().zip(code).enumerate() {
            if g == c {
                bulls += 1;
                guess_used[i] = true;
                code_used[i] = true;
            }
        }

        let mut cows = 0;
        for (i, g) in guess.iter().enumerate() {
            if guess_used[i] {
                continue;
            }
            if let Some(j) = (0..code.len()).find(|&j| !code_used[j] && code[j] == *g) {
                code_used[j] = true;
                cows += 1;
            }
        }

        Score::new(cows, bulls)
    }

    /// Call `visit` once for every valid code, in alphabet order
    pub fn visit_codes(&self, mut visit: impl FnMut(Code)) {
        let mut buffer = [0u8; MAX_LENGTH];
        self.visit_from(0, &mut buffer, &mut visit);
    }

    fn visit_from(
        &self,
        position: usize,
        buffer: &mut [u8; MAX_LENGTH],
        visit: &mut impl FnMut(Code),
    ) {
        if position == self.length {
            visit(Code::from_symbols(&buffer[..self.length]));
            return;
        }
        for &symbol in self.alphabet.as_bytes() {
            if self.unique && buffer[..position].contains(&symbol) {
                continue;
            }
            buffer[position] = symbol;
            self.visit_from(position + 1, buffer, visit);
        }
    }

    /// Pick a valid code uniformly at random
    pub fn random_code<R: Rng + ?Sized>(&self, rng: &mut R) -> Code {
        self.all_codes[rng.random_range(0..self.all_codes.len())]
    }

    fn generate_codes(&self) -> Vec<Code> {
        let mut codes = Vec::new();
        self.visit_codes(|code| codes.push(code));
        codes.sort_unstable();
        codes
    }

    fn generate_scores(&self) -> Vec<Score> {
        let length = self.length;
        let spare = self.alphabet.len() - length;
        let mut scores = Vec::new();

        for bulls in 0..=length {
            // With distinct symbols, at most `spare` guess symbols can be absent from the code
            let min_cows = if self.unique {
                (length - bulls).saturating_sub(spare)
            } else {
                0
            };
            for cows in min_cows..=length - bulls {
                if bulls + 1 == length && cows == 1 {
                    continue;
                }
                scores.push(Score::new(cows as u8, bulls as u8));
            }
        }
        scores
    }
}
