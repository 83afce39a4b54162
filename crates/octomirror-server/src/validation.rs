/// Check a GitHub-style handle: 1-39 characters of `[A-Za-z0-9-]`
///
/// Purely a character-class and length rule; hyphen placement is not
/// restricted, matching the upstream's permissive check.
pub fn is_valid_username(username: &str) -> bool {
    (1..=39).contains(&username.len())
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_character_class_and_length() {
        assert!(is_valid_username("octocat"));
        assert!(is_valid_username("oct-cat9"));
        assert!(is_valid_username("a"));
        assert!(is_valid_username(&"a".repeat(39)));
        // Hyphen placement is unrestricted
        assert!(is_valid_username("-leading"));
        assert!(is_valid_username("trailing-"));
        assert!(is_valid_username("---"));
    }

    #[test]
    fn rejects_empty_and_overlong() {
        assert!(!is_valid_username(""));
        assert!(!is_valid_username(&"a".repeat(40)));
    }

    #[test]
    fn rejects_characters_outside_the_class() {
        assert!(!is_valid_username("bad user!"));
        assert!(!is_valid_username("under_score"));
        assert!(!is_valid_username("dotted.name"));
        assert!(!is_valid_username("émile"));
        assert!(!is_valid_username("tab\tname"));
    }
}
