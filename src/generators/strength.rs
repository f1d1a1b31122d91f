// src/generators/strength.rs
//
// Coarse 0-5 strength heuristic shown next to password fields. This is a
// nudge for users, not an entropy estimate.

/// Highest score [`score`] can return.
pub const MAX_SCORE: u8 = 5;

/// Labels indexed by score.
pub const STRENGTH_LABELS: [&str; 6] = [
    "Muy débil",
    "Débil",
    "Aceptable",
    "Buena",
    "Fuerte",
    "Muy fuerte",
];

/// Scores a password from 0 to 5, one point per satisfied rule.
///
/// Length counts Unicode scalar values, not UTF-16 code units as a browser's
/// `String.length` does. A password made of astral characters such as emoji
/// therefore reads as half as long here: eight emoji are 8 characters, not 16,
/// and miss the 12-character point a browser would award.
pub fn score(password: &str) -> u8 {
    if password.is_empty() {
        return 0;
    }

    let length = password.chars().count();
    let mut score = 0;

    if length >= 8 {
        score += 1;
    }
    if length >= 12 {
        score += 1;
    }
    if has_lowercase(password) && has_uppercase(password) {
        score += 1;
    }
    if has_digit(password) {
        score += 1;
    }
    if has_symbol(password) {
        score += 1;
    }

    score.min(MAX_SCORE)
}

/// Label for a score; anything out of range reads as the weakest level.
pub fn label(score: u8) -> &'static str {
    STRENGTH_LABELS
        .get(score as usize)
        .copied()
        .unwrap_or(STRENGTH_LABELS[0])
}

/// Hints for every rule the password misses, plus sequence warnings.
pub fn feedback(password: &str) -> Vec<String> {
    let mut feedback = Vec::new();
    let length = password.chars().count();

    if length < 8 {
        feedback.push("Usa al menos 8 caracteres".to_string());
    } else if length < 12 {
        feedback.push("Aumenta la longitud a al menos 12 caracteres".to_string());
    }
    if !(has_lowercase(password) && has_uppercase(password)) {
        feedback.push("Combina letras mayúsculas y minúsculas".to_string());
    }
    if !has_digit(password) {
        feedback.push("Añade números".to_string());
    }
    if !has_symbol(password) {
        feedback.push("Añade símbolos".to_string());
    }

    match find_sequence(password) {
        Some(Sequence::Letters) => {
            feedback.push("Evita letras consecutivas (p. ej., 'abc')".to_string())
        }
        Some(Sequence::Digits) => {
            feedback.push("Evita números consecutivos (p. ej., '123')".to_string())
        }
        None => {}
    }

    feedback
}

fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

fn has_symbol(password: &str) -> bool {
    password.chars().any(|c| !c.is_ascii_alphanumeric())
}

#[derive(Debug, PartialEq, Eq)]
enum Sequence {
    Letters,
    Digits,
}

// First run of three ascending neighbours ("abc", "XYZ", "123")
fn find_sequence(password: &str) -> Option<Sequence> {
    let chars: Vec<char> = password.chars().collect();

    chars.windows(3).find_map(|w| {
        let ascending = (w[1] as u32) == (w[0] as u32) + 1 && (w[2] as u32) == (w[1] as u32) + 1;
        if !ascending {
            None
        } else if w.iter().all(|c| c.is_ascii_digit()) {
            Some(Sequence::Digits)
        } else if w.iter().all(|c| c.is_ascii_alphabetic()) {
            Some(Sequence::Letters)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scores_zero() {
        assert_eq!(score(""), 0);
        assert_eq!(label(score("")), "Muy débil");
    }

    #[test]
    fn each_rule_adds_one_point() {
        assert_eq!(score("abcdefgh"), 1);
        assert_eq!(score("abcdefghijkl"), 2);
        assert_eq!(score("Abcdefghijkl"), 3);
        assert_eq!(score("Abcdefghijkl1"), 4);
        assert_eq!(score("Abcdefghijkl1!"), 5);
    }

    #[test]
    fn short_passwords_can_still_score() {
        assert_eq!(score("aB3$"), 3);
        assert_eq!(score("a"), 0);
        assert_eq!(score("!"), 1);
    }

    #[test]
    fn non_ascii_counts_as_symbol_and_by_char() {
        // eight scalar values, one of them outside [A-Za-z0-9]
        assert_eq!(score("contraseñ"), 2);
        assert_eq!(score("ñññññññ"), 1);
    }

    #[test]
    fn score_never_exceeds_max() {
        let samples = ["", "x", "Abcdefghijkl1!", "Zz9!Zz9!Zz9!Zz9!Zz9!", "😀😀😀😀😀😀😀😀😀😀😀😀"];
        for sample in samples {
            assert!(score(sample) <= MAX_SCORE, "{}", sample);
        }
    }

    #[test]
    fn labels_follow_score() {
        assert_eq!(label(0), "Muy débil");
        assert_eq!(label(2), "Aceptable");
        assert_eq!(label(5), "Muy fuerte");
        assert_eq!(label(6), "Muy débil");
        assert_eq!(label(u8::MAX), "Muy débil");
    }

    #[test]
    fn feedback_lists_missing_rules() {
        let hints = feedback("abcdefgh");
        assert!(hints.iter().any(|h| h.contains("12 caracteres")));
        assert!(hints.iter().any(|h| h.contains("mayúsculas")));
        assert!(hints.iter().any(|h| h.contains("números")));
        assert!(hints.iter().any(|h| h.contains("símbolos")));
        assert!(hints.iter().any(|h| h.contains("letras consecutivas")));
    }

    #[test]
    fn feedback_speaks_the_same_language_as_labels() {
        assert_eq!(
            feedback("123"),
            vec![
                "Usa al menos 8 caracteres",
                "Combina letras mayúsculas y minúsculas",
                "Añade símbolos",
                "Evita números consecutivos (p. ej., '123')",
            ]
        );
    }

    #[test]
    fn emoji_length_counts_scalar_values() {
        // 16 UTF-16 code units but only 8 scalar values
        let emoji = "😀".repeat(8);
        assert_eq!(emoji.encode_utf16().count(), 16);
        assert_eq!(score(&emoji), 2);
    }

    #[test]
    fn feedback_is_empty_for_strong_password() {
        assert!(feedback("Tq7!wR2#kP9$").is_empty());
    }

    #[test]
    fn detects_digit_runs() {
        assert_eq!(find_sequence("xx123yy"), Some(Sequence::Digits));
        assert_eq!(find_sequence("135"), None);
        assert_eq!(find_sequence("89:"), None);
    }
}
