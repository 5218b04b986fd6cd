use serde::{Deserialize, Serialize};

/// Completion-status filter over the todo list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    /// Parse the CLI spelling of a status filter
    pub fn parse(s: &str) -> Option<StatusFilter> {
        match s {
            "all" => Some(StatusFilter::All),
            "active" => Some(StatusFilter::Active),
            "completed" => Some(StatusFilter::Completed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Completed => "completed",
        }
    }
}

/// Category filter: a specific category name, or the `All` sentinel
/// (spelled `"All"` in serialized form).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Name(String),
}

impl CategoryFilter {
    /// True if `category` passes this filter
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Name(name) => name == category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Name(name) => name,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(s: String) -> CategoryFilter {
        if s == "All" {
            CategoryFilter::All
        } else {
            CategoryFilter::Name(s)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(f: CategoryFilter) -> String {
        f.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_parse() {
        assert_eq!(StatusFilter::parse("all"), Some(StatusFilter::All));
        assert_eq!(StatusFilter::parse("active"), Some(StatusFilter::Active));
        assert_eq!(
            StatusFilter::parse("completed"),
            Some(StatusFilter::Completed)
        );
        assert_eq!(StatusFilter::parse("done"), None);
    }

    #[test]
    fn category_filter_all_matches_everything() {
        assert!(CategoryFilter::All.matches("Work"));
        assert!(CategoryFilter::All.matches(""));
    }

    #[test]
    fn category_filter_name_is_exact_match() {
        let f = CategoryFilter::Name("Work".into());
        assert!(f.matches("Work"));
        assert!(!f.matches("work"));
        assert!(!f.matches("Workout"));
    }

    #[test]
    fn category_filter_serde_sentinel() {
        let all: CategoryFilter = serde_json::from_str("\"All\"").unwrap();
        assert_eq!(all, CategoryFilter::All);
        let named: CategoryFilter = serde_json::from_str("\"Errands\"").unwrap();
        assert_eq!(named, CategoryFilter::Name("Errands".into()));
        assert_eq!(serde_json::to_string(&all).unwrap(), "\"All\"");
        assert_eq!(serde_json::to_string(&named).unwrap(), "\"Errands\"");
    }
}
