use crate::value::TextMode;

///
/// LikeToken
///

#[derive(Clone, Debug, Eq, PartialEq)]
enum LikeToken {
    Literal(char),
    AnyOne,
    AnyMany,
}

///
/// LikePattern
///
/// Compiled SQL-style LIKE pattern.
///
/// `%` matches any run of characters (including none) and `_` matches
/// exactly one character. When an escape character is configured, it makes
/// the following character literal; a trailing escape matches itself.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LikePattern {
    tokens: Vec<LikeToken>,
    mode: TextMode,
}

impl LikePattern {
    #[must_use]
    pub fn compile(pattern: &str, escape: Option<char>, mode: TextMode) -> Self {
        let mut tokens = Vec::with_capacity(pattern.len());
        let mut chars = pattern.chars();

        while let Some(ch) = chars.next() {
            let token = if Some(ch) == escape {
                LikeToken::Literal(chars.next().unwrap_or(ch))
            } else {
                match ch {
                    '%' => {
                        // collapse runs of '%'; they are equivalent to one
                        if tokens.last() == Some(&LikeToken::AnyMany) {
                            continue;
                        }
                        LikeToken::AnyMany
                    }
                    '_' => LikeToken::AnyOne,
                    other => LikeToken::Literal(other),
                }
            };
            tokens.push(token);
        }

        Self { tokens, mode }
    }

    /// Match text against the compiled pattern.
    ///
    /// Greedy wildcard matching with single-point backtracking; runs in
    /// O(text * pattern) worst case.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        let text: Vec<char> = text.chars().collect();
        let tokens = &self.tokens;

        let (mut t, mut p) = (0usize, 0usize);
        let mut backtrack: Option<(usize, usize)> = None;

        while t < text.len() {
            match tokens.get(p) {
                Some(LikeToken::AnyMany) => {
                    backtrack = Some((p, t));
                    p += 1;
                }
                Some(LikeToken::AnyOne) => {
                    t += 1;
                    p += 1;
                }
                Some(LikeToken::Literal(ch)) if self.char_eq(*ch, text[t]) => {
                    t += 1;
                    p += 1;
                }
                _ => match backtrack {
                    Some((star_p, star_t)) => {
                        p = star_p + 1;
                        t = star_t + 1;
                        backtrack = Some((star_p, star_t + 1));
                    }
                    None => return false,
                },
            }
        }

        tokens[p..].iter().all(|token| *token == LikeToken::AnyMany)
    }

    fn char_eq(&self, pattern: char, text: char) -> bool {
        match self.mode {
            TextMode::Cs => pattern == text,
            TextMode::Ci => pattern.to_lowercase().eq(text.to_lowercase()),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn like(pattern: &str, text: &str) -> bool {
        LikePattern::compile(pattern, None, TextMode::Cs).matches(text)
    }

    #[test]
    fn literal_pattern_requires_exact_match() {
        assert!(like("h2prod", "h2prod"));
        assert!(!like("h2prod", "h2prod2"));
        assert!(!like("h2prod", "H2PROD"));
    }

    #[test]
    fn percent_matches_any_run() {
        assert!(like("h2%", "h2prod"));
        assert!(like("%prod", "h2prod"));
        assert!(like("%2p%", "h2prod"));
        assert!(like("%", ""));
        assert!(like("h%%d", "h2prod"));
        assert!(!like("%query", "h2prod"));
    }

    #[test]
    fn underscore_matches_exactly_one_char() {
        assert!(like("h_prod", "h2prod"));
        assert!(!like("h_prod", "hprod"));
        assert!(!like("h_prod", "h22prod"));
    }

    #[test]
    fn empty_pattern_matches_only_empty_text() {
        assert!(like("", ""));
        assert!(!like("", "h2prod"));
    }

    #[test]
    fn escape_makes_wildcards_literal() {
        let pattern = LikePattern::compile("100\\%", Some('\\'), TextMode::Cs);
        assert!(pattern.matches("100%"));
        assert!(!pattern.matches("1000"));

        let trailing = LikePattern::compile("a\\", Some('\\'), TextMode::Cs);
        assert!(trailing.matches("a\\"));
    }

    #[test]
    fn case_insensitive_mode_folds_both_sides() {
        let pattern = LikePattern::compile("H2%", None, TextMode::Ci);
        assert!(pattern.matches("h2prod"));
    }
}
