//! Whitespace tokenization keeping byte offsets.

/// Characters removed from token boundaries before comparing words.
pub const PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '"', '\'', '(', ')', '[', ']', '«', '»', '„', '“', '”', '‚',
    '‘', '’', '¿', '¡', '…', '-', '–', '—', '،', '؟', '؛',
];

/// Split `sentence` on whitespace, returning each token along with its byte offset.
pub fn tokens(sentence: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut start = None;

    for (idx, c) in sentence.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                out.push((s, &sentence[s..idx]));
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }
    if let Some(s) = start {
        out.push((s, &sentence[s..]));
    }

    out
}

/// Remove leading and trailing punctuation.
pub fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(PUNCTUATION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets() {
        let s = "Wir  hatten\theute eine";
        let t = tokens(s);
        assert_eq!(t, vec![(0, "Wir"), (5, "hatten"), (12, "heute"), (18, "eine")]);
        for (offset, tok) in t {
            assert_eq!(&s[offset..offset + tok.len()], tok);
        }
    }

    #[test]
    fn non_ascii_offsets() {
        let s = "Im Büro «Grüße».";
        let t = tokens(s);
        assert_eq!(t.len(), 3);
        assert_eq!(t[2].1, "«Grüße».");
        assert_eq!(strip_punctuation(t[2].1), "Grüße");
    }

    #[test]
    fn empty() {
        assert!(tokens("").is_empty());
        assert!(tokens("   ").is_empty());
        assert_eq!(strip_punctuation("..."), "");
    }
}
