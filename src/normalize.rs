//! Title normalization
//!
//! Titles are compared by a canonical key: the title is transliterated to
//! its closest ASCII spelling and then lower-cased. "Hábitos Atómicos",
//! "HABITOS ATOMICOS" and "habitos atómicos" all share one key.
//!
//! The key is only ever used for equality. Stored and returned titles keep
//! their original spelling.

use deunicode::deunicode;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Compute the comparison key for a book title.
pub fn normalize_title(title: &str) -> String {
    // Decompose first so titles typed with separate combining accents
    // transliterate the same as precomposed ones.
    let stripped: String = title.nfkd().filter(|c| !is_combining_mark(*c)).collect();
    deunicode(&stripped).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles_match(a: &str, b: &str) -> bool {
        normalize_title(a) == normalize_title(b)
    }

    #[test]
    fn strips_accents_and_case() {
        assert_eq!(normalize_title("Dune"), "dune");
        assert_eq!(normalize_title("dúne"), "dune");
        assert_eq!(normalize_title("DUNE"), "dune");
        assert_eq!(normalize_title("Romper el Círculo"), "romper el circulo");
        assert_eq!(normalize_title("Hábitos Atómicos"), "habitos atomicos");
    }

    #[test]
    fn transliterates_undecomposable_letters() {
        assert_eq!(normalize_title("Straße"), "strasse");
        assert_eq!(normalize_title("Æon Flux"), "aeon flux");
        assert_eq!(normalize_title("Łódź"), "lodz");
        assert_eq!(normalize_title("Søren"), "soren");
    }

    #[test]
    fn stroked_letters_match_plain_ones() {
        assert!(titles_match("Ħamrun", "Hamrun"));
        assert!(titles_match("Ŧest", "Test"));
        assert_eq!(normalize_title("Ħamrun"), "hamrun");
    }

    #[test]
    fn greek_final_sigma_folds_with_capital() {
        assert!(titles_match("Κόσμος", "ΚΟΣΜΟΣ"));
        assert!(titles_match("Οδύσσεια", "ΟΔΥΣΣΕΙΑ"));
    }

    #[test]
    fn folds_typographic_punctuation() {
        assert_eq!(normalize_title("Ender’s Game"), "ender's game");
        assert_eq!(normalize_title("Catch–22"), "catch-22");
        assert_eq!(normalize_title("ﬁnal"), "final");
    }

    #[test]
    fn precomposed_and_decomposed_forms_agree() {
        let precomposed = "Caf\u{e9}";
        let decomposed = "Cafe\u{301}";
        assert!(titles_match(precomposed, decomposed));
    }

    #[test]
    fn is_idempotent() {
        for title in ["El Problema de los Tres Cuerpos", "Reina Roja", "Ça ira"] {
            let once = normalize_title(title);
            assert_eq!(normalize_title(&once), once);
        }
    }

    #[test]
    fn distinct_titles_stay_distinct() {
        assert!(!titles_match("Dune", "Dune Messiah"));
        assert!(!titles_match("Reina Roja", "Reina Negra"));
    }
}
