pub mod manifest;
pub mod patterns;

use self::patterns::PatternTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Detected technology labels, grouped by category.
/// Categories are independent table lookups, so a single dependency
/// name may contribute to more than one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechStack {
    pub frameworks: BTreeSet<String>,
    pub databases: BTreeSet<String>,
    pub tools: BTreeSet<String>,
}

impl TechStack {
    pub fn is_empty(&self) -> bool {
        self.frameworks.is_empty() && self.databases.is_empty() && self.tools.is_empty()
    }
}

/// Classify a set of lowercase candidate dependency names against the
/// static pattern tables.
pub fn classify(candidates: &BTreeSet<String>) -> TechStack {
    TechStack {
        frameworks: apply_table(patterns::FRAMEWORKS, candidates),
        databases: apply_table(patterns::DATABASES, candidates),
        tools: apply_table(patterns::TOOLS, candidates),
    }
}

fn apply_table(table: PatternTable, candidates: &BTreeSet<String>) -> BTreeSet<String> {
    table
        .iter()
        .filter(|(_, pats)| {
            pats.iter()
                .any(|pat| candidates.iter().any(|name| name.contains(pat)))
        })
        .map(|(label, _)| (*label).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_lowercase()).collect()
    }

    #[test]
    fn test_react_dom_detects_react() {
        let stack = classify(&candidates(&["react-dom"]));
        assert!(stack.frameworks.contains("React"));
    }

    #[test]
    fn test_pg_detects_postgresql() {
        let stack = classify(&candidates(&["pg"]));
        assert!(stack.databases.contains("PostgreSQL"));
    }

    #[test]
    fn test_categories_are_independent() {
        // prisma is a PostgreSQL and MySQL pattern; typescript a tool
        let stack = classify(&candidates(&["prisma", "typescript"]));
        assert!(stack.databases.contains("PostgreSQL"));
        assert!(stack.databases.contains("MySQL"));
        assert!(stack.tools.contains("TypeScript"));
        assert!(stack.frameworks.is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive_via_lowercased_names() {
        let stack = classify(&candidates(&["Django"]));
        assert!(stack.frameworks.contains("Django"));
    }

    #[test]
    fn test_no_candidates_no_labels() {
        let stack = classify(&BTreeSet::new());
        assert!(stack.is_empty());
    }
}
