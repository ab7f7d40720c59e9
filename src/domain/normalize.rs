//! Calculator glyph normalization.
//!
//! Keypad input uses typographic symbols (`×`, `÷`, `−`, `π`, `√`) and
//! calculator function names (`log` for the common logarithm). Before parsing,
//! the raw text is rewritten into the canonical ASCII form understood by the
//! [`Lexer`](super::parser::Lexer):
//!
//! | Input     | Canonical |
//! |-----------|-----------|
//! | `×`       | `*`       |
//! | `÷`       | `/`       |
//! | `−`       | `-`       |
//! | `^`       | `**`      |
//! | `π`       | `pi`      |
//! | `√(`      | `sqrt(`   |
//! | `log(`    | `log10(`  |
//! | `%`       | `%` (postfix percent) |
//!
//! Words are rewritten as whole tokens only, so the constant `e` never
//! corrupts an identifier that happens to contain the letter.

/// Rewrites calculator glyphs into canonical operator and function tokens.
///
/// Every occurrence is replaced independently and whitespace is preserved.
///
/// # Examples
///
/// ```
/// use tcalc::domain::normalize;
///
/// assert_eq!(normalize("6×7"), "6*7");
/// assert_eq!(normalize("2^10"), "2**10");
/// assert_eq!(normalize("√(16)+log(100)"), "sqrt(16)+log10(100)");
/// ```
pub fn normalize(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        let next = chars.get(i + 1).copied();

        match ch {
            '×' => out.push('*'),
            '÷' => out.push('/'),
            '−' => out.push('-'),
            '^' => out.push_str("**"),
            'π' => push_word(&mut out, "pi", next),
            '√' if next == Some('(') => push_word(&mut out, "sqrt", next),
            c if is_word_start(c) => {
                let start = i;
                while i + 1 < chars.len() && is_word_char(chars[i + 1]) {
                    i += 1;
                }
                let word: String = chars[start..=i].iter().collect();
                let after = chars.get(i + 1).copied();
                if word == "log" && after == Some('(') {
                    out.push_str("log10");
                } else {
                    out.push_str(&word);
                }
            }
            c => out.push(c),
        }

        i += 1;
    }

    out
}

fn is_word_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Pushes a substituted word, padding with spaces so it cannot fuse with a
/// neighbouring identifier.
fn push_word(out: &mut String, word: &str, next: Option<char>) {
    if out.chars().last().is_some_and(is_word_char) {
        out.push(' ');
    }
    out.push_str(word);
    if next.is_some_and(is_word_char) {
        out.push(' ');
    }
}
