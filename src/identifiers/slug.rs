//! Word normalization.
use crate::lang::{strip_article, TRANSLITERATIONS};

/// Build the identifier slug of `word`.
///
/// - the leading article recognized for `lang` is removed,
/// - the word is lowercased,
/// - whitespace and hyphens become `_`,
/// - umlauts and ligatures are replaced by their ASCII digraph.
///
/// Other characters pass through unchanged.
/// The output contains no whitespace, so normalizing it again is a no-op.
pub fn normalize(word: &str, lang: &str) -> String {
    let bare = strip_article(word, lang);
    let mut slug = String::with_capacity(bare.len());

    for c in bare.chars().flat_map(char::to_lowercase) {
        if c.is_whitespace() || c == '-' {
            slug.push('_');
        } else if let Some(digraph) = TRANSLITERATIONS.get(&c) {
            slug.push_str(digraph);
        } else {
            slug.push(c);
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn article_is_stripped() {
        assert_eq!(normalize("die Besprechung", "de"), "besprechung");
        assert_eq!(normalize("Das Rathaus", "de"), "rathaus");
    }

    #[test]
    fn transliteration() {
        assert_eq!(normalize("die Bürgerbeteiligung", "de"), "buergerbeteiligung");
        assert_eq!(normalize("die Straße", "de"), "strasse");
        assert_eq!(normalize("Œuvre", "fr"), "oeuvre");
    }

    #[test]
    fn separators() {
        assert_eq!(normalize("der Open-Air Markt", "de"), "open_air_markt");
        assert_eq!(normalize("sich erinnern", "de"), "sich_erinnern");
    }

    #[test]
    fn unknown_characters_pass_through() {
        assert_eq!(normalize("żółw", "pl"), "żółw");
        assert_eq!(normalize("café", "fr"), "café");
    }

    #[test]
    fn idempotent() {
        let words = [
            "die Besprechung",
            "der Ärger",
            "Das Open-Air-Kino",
            "  die  Fußgängerzone ",
            "l'hôpital",
            "la casa de campo",
            "die",
        ];
        for w in words {
            let once = normalize(w, "de");
            assert_eq!(normalize(&once, "de"), once, "not idempotent on {:?}", w);
            assert_eq!(normalize(w, "de"), once, "not pure on {:?}", w);
        }
    }
}
