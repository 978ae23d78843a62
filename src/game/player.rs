//! Players answer guesses with scores

use crate::core::{Code, Configuration, Score};
use crate::error::MastermindError;

/// The side of the game that knows the secret
///
/// The game calls `start_game` once, `score` once per round and `end_game`
/// once when the game is over.
pub trait Player {
    fn start_game(&mut self) -> Result<(), MastermindError> {
        Ok(())
    }

    /// Score a guess against the secret
    ///
    /// # Errors
    /// Implementations fail when no score can be obtained, for example on
    /// unreadable input.
    fn score(&mut self, guess: &Code) -> Result<Score, MastermindError>;

    fn end_game(&mut self, _won: bool, _rounds: usize) -> Result<(), MastermindError> {
        Ok(())
    }
}

impl<P: Player + ?Sized> Player for &mut P {
    fn start_game(&mut self) -> Result<(), MastermindError> {
        (**self).start_game()
    }

    fn score(&mut self, guess: &Code) -> Result<Score, MastermindError> {
        (**self).score(guess)
    }

    fn end_game(&mut self, won: bool, rounds: usize) -> Result<(), MastermindError> {
        (**self).end_game(won, rounds)
    }
}

/// Player that knows the secret and always scores correctly
#[derive(Debug, Clone, Copy)]
pub struct SecretPlayer<'a> {
    config: &'a Configuration,
    secret: Code,
}

impl<'a> SecretPlayer<'a> {
    /// # Errors
    /// `InvalidCode` if the secret does not belong to the configuration.
    pub fn new(config: &'a Configuration, secret: Code) -> Result<Self, MastermindError> {
        if !config.is_valid(&secret) {
            return Err(MastermindError::InvalidCode(secret.to_string()));
        }
        Ok(Self { config, secret })
    }

    #[must_use]
    pub const fn secret(&self) -> Code {
        self.secret
    }
}

impl Player for SecretPlayer<'_> {
    fn score(&mut self, guess: &Code) -> Result<Score, MastermindError> {
        self.config.evaluate(guess, &self.secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_player_scores_correctly() {
        let config = Configuration::new("ABCD", 2, false).unwrap();
        let mut player = SecretPlayer::new(&config, config.code("BA").unwrap()).unwrap();
        assert_eq!(player.score(&config.code("AB").unwrap()).unwrap(), Score::new(2, 0));
        assert_eq!(player.score(&config.code("BA").unwrap()).unwrap(), config.winning_score());
    }

    #[test]
    fn secret_player_rejects_foreign_secret() {
        let config = Configuration::new("ABCD", 2, true).unwrap();
        assert!(SecretPlayer::new(&config, Code::new("AA").unwrap()).is_err());
    }

    #[test]
    fn secret_player_rejects_foreign_guess() {
        let config = Configuration::new("ABCD", 2, false).unwrap();
        let mut player = SecretPlayer::new(&config, config.code("AB").unwrap()).unwrap();
        assert!(player.score(&Code::new("ABC").unwrap()).is_err());
    }
}
