/// Lowercase the input and turn every character that is neither an ASCII
/// letter nor whitespace into a single space.
pub fn clean_text(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Split a message into lowercase alphabetic tokens.
///
/// Digits, punctuation and non-ASCII letters act as separators, so
/// `"win$100now"` yields `["win", "now"]`.
pub fn tokenize(input: &str) -> Vec<String> {
    clean_text(input)
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_tokenization() {
        let tokens = tokenize("Hello world! This is a test message.");
        assert_eq!(
            tokens,
            vec!["hello", "world", "this", "is", "a", "test", "message"]
        );
    }

    #[test]
    fn test_separators_do_not_merge_words() {
        assert_eq!(tokenize("win$100now"), vec!["win", "now"]);
        assert_eq!(tokenize("don't"), vec!["don", "t"]);
        assert_eq!(tokenize("café au lait"), vec!["caf", "au", "lait"]);
    }

    #[test]
    fn test_clean_text_keeps_whitespace_layout() {
        assert_eq!(clean_text("Go 2 U!"), "go   u ");
        assert_eq!(clean_text("a\tb\nc"), "a\tb\nc");
    }

    #[test]
    fn test_empty_and_letterless_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n").is_empty());
        assert!(tokenize("1234567890").is_empty());
        assert!(tokenize("!@#$%^&*()_+-=[]{}|;':\",./<>?").is_empty());
    }

    #[test]
    fn test_idempotence() {
        let mut rng = StdRng::seed_from_u64(7);
        let alphabet: Vec<char> = "aZ q!9 \t\nÉé-_'$xyzÖ".chars().collect();

        for _ in 0..500 {
            let len = rng.random_range(0..64);
            let text: String = (0..len)
                .map(|_| alphabet[rng.random_range(0..alphabet.len())])
                .collect();

            let tokens = tokenize(&text);
            assert_eq!(tokenize(&tokens.join(" ")), tokens, "input: {text:?}");
        }
    }
}
