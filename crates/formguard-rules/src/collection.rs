//! Set-membership predicates

/// Split a comma-separated attribute value into trimmed items
pub fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).collect()
}

/// Enum/value restriction
pub fn is_one_of(value: &str, allowed: &[&str]) -> bool {
    allowed.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split_list("red, green , blue"), vec!["red", "green", "blue"]);
        assert_eq!(split_list(""), Vec::<&str>::new());
        assert_eq!(split_list("solo"), vec!["solo"]);
    }

    #[test]
    fn test_membership() {
        let allowed = &["admin", "user", "guest"];
        assert!(is_one_of("admin", allowed));
        assert!(is_one_of("user", allowed));
        assert!(!is_one_of("superuser", allowed));
        assert!(!is_one_of("", allowed));
    }
}
