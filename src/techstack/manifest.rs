//! Dependency-name extraction from manifest files.
//!
//! Extraction is pure: each function takes file content and returns the
//! set of candidate names it found. Callers union the per-repository
//! sets after all probes complete.

use std::collections::BTreeSet;

/// Dependency sections of package.json that contribute candidate names
const PACKAGE_JSON_SECTIONS: &[&str] = &[
    "dependencies",
    "devDependencies",
    "peerDependencies",
    "optionalDependencies",
];

/// Extract dependency names from a package.json document.
/// Returns None when the content is not valid JSON.
pub fn package_json_deps(content: &str) -> Option<BTreeSet<String>> {
    let doc: serde_json::Value = serde_json::from_str(content).ok()?;

    let mut names = BTreeSet::new();
    for section in PACKAGE_JSON_SECTIONS {
        if let Some(deps) = doc.get(section).and_then(|v| v.as_object()) {
            names.extend(deps.keys().map(|k| k.to_lowercase()));
        }
    }

    Some(names)
}

/// Extract package names from a requirements.txt document.
/// Version comparators, extras, and inline comments are stripped;
/// comment and option lines are skipped.
pub fn requirements_deps(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| {
            let name: String = line
                .chars()
                .take_while(|&c| !matches!(c, '=' | '<' | '>' | '!' | '~' | '[' | ';' | ' ' | '#'))
                .collect();
            if name.is_empty() {
                None
            } else {
                Some(name.to_lowercase())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_json_all_sections() {
        let content = r#"{
            "name": "demo",
            "dependencies": { "react": "^18.0.0", "pg": "^8.0.0" },
            "devDependencies": { "jest": "^29.0.0" },
            "peerDependencies": { "react-dom": "^18.0.0" },
            "optionalDependencies": { "fsevents": "^2.3.0" }
        }"#;

        let deps = package_json_deps(content).unwrap();
        assert!(deps.contains("react"));
        assert!(deps.contains("pg"));
        assert!(deps.contains("jest"));
        assert!(deps.contains("react-dom"));
        assert!(deps.contains("fsevents"));
    }

    #[test]
    fn test_package_json_invalid_json_is_none() {
        assert!(package_json_deps("not json at all {").is_none());
    }

    #[test]
    fn test_package_json_without_dependency_sections() {
        let deps = package_json_deps(r#"{ "name": "empty" }"#).unwrap();
        assert!(deps.is_empty());
    }

    #[test]
    fn test_requirements_strips_versions_and_comments() {
        let content = "\
# web stack
Django==4.2.1
flask>=2.0
psycopg2-binary~=2.9  # database driver
uvicorn[standard]==0.23
-r extra.txt

requests";

        let deps = requirements_deps(content);
        assert!(deps.contains("django"));
        assert!(deps.contains("flask"));
        assert!(deps.contains("psycopg2-binary"));
        assert!(deps.contains("uvicorn"));
        assert!(deps.contains("requests"));
        assert!(!deps.iter().any(|d| d.contains('=')));
        assert!(!deps.contains("-r"));
    }
}
