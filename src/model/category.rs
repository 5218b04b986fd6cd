/// The four protected categories that always exist and cannot be deleted.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Personal", "Work", "Shopping", "Health"];

/// Seed category list for a fresh store
pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect()
}

/// True if `name` is one of the protected defaults (exact match)
pub fn is_default(name: &str) -> bool {
    DEFAULT_CATEGORIES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_protected() {
        for name in DEFAULT_CATEGORIES {
            assert!(is_default(name));
        }
        assert!(!is_default("Errands"));
        assert!(!is_default("personal")); // case-sensitive
    }

    #[test]
    fn seed_list_preserves_order() {
        assert_eq!(
            default_categories(),
            vec!["Personal", "Work", "Shopping", "Health"]
        );
    }
}
