use std::num::NonZeroUsize;

use rand::Rng;
use rand::distributions::Alphanumeric;

/// Length of the notebook access token handed to the container.
pub const DEFAULT_TOKEN_LENGTH: NonZeroUsize = NonZeroUsize::new(20).unwrap();

/// Random `[A-Za-z0-9]` token drawn from `rng`. Never empty.
pub fn generate_token<R: Rng + ?Sized>(rng: &mut R, len: NonZeroUsize) -> String {
    std::iter::repeat_with(|| rng.sample(Alphanumeric))
        .map(char::from)
        .take(len.get())
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn token_has_requested_length_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let token = generate_token(&mut rng, DEFAULT_TOKEN_LENGTH);
        assert_eq!(token.len(), DEFAULT_TOKEN_LENGTH.get());
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn same_seed_same_token() {
        let a = generate_token(&mut StdRng::seed_from_u64(42), DEFAULT_TOKEN_LENGTH);
        let b = generate_token(&mut StdRng::seed_from_u64(42), DEFAULT_TOKEN_LENGTH);
        assert_eq!(a, b);
    }

    #[test]
    fn consecutive_tokens_differ() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = generate_token(&mut rng, DEFAULT_TOKEN_LENGTH);
        let b = generate_token(&mut rng, DEFAULT_TOKEN_LENGTH);
        assert_ne!(a, b);
    }

    #[test]
    fn single_character_token() {
        let len = NonZeroUsize::new(1).unwrap();
        assert_eq!(generate_token(&mut StdRng::seed_from_u64(1), len).len(), 1);
    }
}
