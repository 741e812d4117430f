use crate::models::PartyName;

pub fn normalize_text(input: &str) -> String {
    use unicode_normalization::UnicodeNormalization;
    // Remove diacritics by decomposing to NFD and filtering combining marks
    input
        .nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

/// Split a raw party string into a normalized last/first pair.
///
/// The segment before the first `separator` becomes the last name; the
/// segment between the first and second separator (if any) becomes the
/// first name. Missing input degrades to an all-`None` name, never an error.
///
/// Grantee strings use `'&'` ("SMITH & JOHN"); court calendar names use
/// `','` ("Smith, John").
pub fn split_party(raw: Option<&str>, separator: char) -> PartyName {
    let Some(raw) = raw else {
        return PartyName::empty();
    };
    let mut segments = raw.split(separator);
    let last = segments.next().map(normalize_text);
    let first = segments.next().map(normalize_text);
    PartyName { last, first }
}

/// True when a raw name looks like an organization rather than a person,
/// judged by case-insensitive keyword containment. Company grantees (LLCs,
/// builders, and so on) are noise for person-level matching.
///
/// `upper_keywords` must already be upper-cased; callers hoist that
/// conversion out of their row loops.
pub fn is_organization(raw: &str, upper_keywords: &[String]) -> bool {
    let upper = raw.to_uppercase();
    upper_keywords.iter().any(|k| upper.contains(k.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text_diacritics() {
        assert_eq!(normalize_text("Álvaro"), "alvaro");
        assert_eq!(normalize_text("  José  "), "jose");
    }

    #[test]
    fn test_split_grantee_with_separator() {
        let name = split_party(Some("SMITH & JOHN"), '&');
        assert_eq!(name.last.as_deref(), Some("smith"));
        assert_eq!(name.first.as_deref(), Some("john"));
    }

    #[test]
    fn test_split_grantee_without_separator() {
        let name = split_party(Some("SMITH"), '&');
        assert_eq!(name.last.as_deref(), Some("smith"));
        assert_eq!(name.first, None);
    }

    #[test]
    fn test_split_court_name() {
        let name = split_party(Some("Doe, Jane"), ',');
        assert_eq!(name.last.as_deref(), Some("doe"));
        assert_eq!(name.first.as_deref(), Some("jane"));
    }

    #[test]
    fn test_split_missing_input() {
        let name = split_party(None, '&');
        assert_eq!(name, PartyName::empty());
    }

    #[test]
    fn test_split_takes_first_separator() {
        // Third segment is ignored, matching "Last, First, Suffix" data
        let name = split_party(Some("Doe, Jane, Jr"), ',');
        assert_eq!(name.last.as_deref(), Some("doe"));
        assert_eq!(name.first.as_deref(), Some("jane"));
    }

    #[test]
    fn test_is_organization() {
        let keywords = vec!["LLC".to_string(), "BUILDERS".to_string()];
        assert!(is_organization("ACME HOLDINGS LLC", &keywords));
        assert!(is_organization("Acme Builders", &keywords));
        assert!(!is_organization("SMITH & JOHN", &keywords));
    }
}
