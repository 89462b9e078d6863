//! Word Tokenizer

/// Split text into word tokens.
///
/// Tokens are maximal runs of alphanumeric characters; an apostrophe is kept
/// when it sits between two alphanumeric characters, so "don't" stays one
/// token. Punctuation contributes no tokens of its own. Identical input
/// always yields the identical token sequence.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = text.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        let is_word_char = c.is_alphanumeric()
            || (c == '\''
                && !current.is_empty()
                && chars.get(i + 1).is_some_and(|n| n.is_alphanumeric()));

        if is_word_char {
            current.push(c);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenization() {
        assert_eq!(
            tokenize("Cat does a trick [OC]"),
            vec!["Cat", "does", "a", "trick", "OC"]
        );
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("?! ... [] --").is_empty());
    }

    #[test]
    fn test_internal_apostrophe_kept() {
        assert_eq!(tokenize("don't stop"), vec!["don't", "stop"]);
        // Leading/trailing apostrophes are separators, not word characters
        assert_eq!(tokenize("'quoted'"), vec!["quoted"]);
    }

    #[test]
    fn test_numbers_are_tokens() {
        assert_eq!(tokenize("top 10 lists"), vec!["top", "10", "lists"]);
    }

    #[test]
    fn test_deterministic() {
        let title = "My cat, 12 years old, still plays fetch!";
        assert_eq!(tokenize(title), tokenize(title));
    }
}
