// src/generators/charset.rs

/// Characters that are easy to confuse in many fonts.
pub const SIMILAR_CHARS: &str = "il1Lo0O";

/// Pool used when every character class is disabled.
pub const FALLBACK_CHARSET: &str = "abcdefghjkmnpqrstuvwxyz23456789";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Number,
    Symbol,
}

impl CharacterClass {
    /// Fixed order used both for building the charset and for the
    /// one-per-class guarantee.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Number,
        CharacterClass::Symbol,
    ];

    // Base alphabets leave out i, l, L, o, O, 0 and 1. Capital I stays and
    // only goes when exclude_similar is set.
    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "ABCDEFGHIJKMNPQRSTUVWXYZ",
            CharacterClass::Lowercase => "abcdefghjkmnpqrstuvwxyz",
            CharacterClass::Number => "23456789",
            CharacterClass::Symbol => "!@#$%^&*()-_=+[]{}|;:,.<>?",
        }
    }
}

/// Case-insensitive membership in the similar-set.
pub fn is_similar(c: char) -> bool {
    SIMILAR_CHARS
        .chars()
        .any(|s| s.eq_ignore_ascii_case(&c))
}

/// Returns the alphabet of `class`, minus similar characters when asked.
pub fn class_chars(class: CharacterClass, exclude_similar: bool) -> Vec<char> {
    class
        .alphabet()
        .chars()
        .filter(|c| !exclude_similar || !is_similar(*c))
        .collect()
}

/// Concatenates the alphabets of `classes` in order, strips similar
/// characters if requested, and falls back to lowercase + digits when the
/// result would be empty.
pub fn build_charset(classes: &[CharacterClass], exclude_similar: bool) -> Vec<char> {
    let mut chars: Vec<char> = classes
        .iter()
        .flat_map(|class| class.alphabet().chars())
        .collect();

    if exclude_similar {
        chars.retain(|c| !is_similar(*c));
    }

    if chars.is_empty() {
        chars = FALLBACK_CHARSET.chars().collect();
    }

    chars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_alphabets_skip_ambiguous_characters() {
        for class in CharacterClass::ALL {
            for c in ['i', 'l', '1', 'L', 'o', '0', 'O'] {
                assert!(!class.alphabet().contains(c), "{:?} contains {}", class, c);
            }
        }
    }

    #[test]
    fn similar_check_ignores_case() {
        assert!(is_similar('I'));
        assert!(is_similar('i'));
        assert!(is_similar('0'));
        assert!(!is_similar('a'));
    }

    #[test]
    fn charset_follows_class_order() {
        let chars = build_charset(&[CharacterClass::Uppercase, CharacterClass::Number], false);
        let text: String = chars.into_iter().collect();
        assert_eq!(text, "ABCDEFGHIJKMNPQRSTUVWXYZ23456789");
    }

    #[test]
    fn exclude_similar_strips_capital_i() {
        assert!(build_charset(&[CharacterClass::Uppercase], false).contains(&'I'));

        let chars = build_charset(&[CharacterClass::Uppercase], true);
        assert!(!chars.contains(&'I'));
        assert_eq!(chars.len(), CharacterClass::Uppercase.alphabet().len() - 1);
    }

    #[test]
    fn empty_selection_falls_back() {
        let text: String = build_charset(&[], false).into_iter().collect();
        assert_eq!(text, FALLBACK_CHARSET);

        let expected = format!(
            "{}{}",
            CharacterClass::Lowercase.alphabet(),
            CharacterClass::Number.alphabet()
        );
        assert_eq!(FALLBACK_CHARSET, expected);
    }
}
