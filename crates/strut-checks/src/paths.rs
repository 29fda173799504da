//! Path classification: maps a module path to at most one architectural
//! group.

use std::collections::BTreeMap;

use regex::Regex;

/// Classifies module paths against the configured group names.
///
/// Each group name is compiled into a boundary-aware pattern: the name must
/// occupy a full path segment (end of string, optionally followed by a
/// closing quote, or the start of a separator), optionally preceded by a
/// separator or opening quote. Quote handling keeps the classifier correct
/// for front-ends that report import paths with their literal quotes.
#[derive(Debug)]
pub struct PathClassifier {
    groups: Vec<GroupPattern>,
    entry_paths: Vec<String>,
}

#[derive(Debug)]
struct GroupPattern {
    name: String,
    pattern: Regex,
}

impl PathClassifier {
    /// Build a classifier from the configured group table and entry paths.
    ///
    /// The group table is a `BTreeMap`, so patterns are held in lexicographic
    /// name order; `classify` only replaces its current best on a strictly
    /// earlier match offset, which makes equal-offset ties resolve to the
    /// lexicographically smallest group name.
    pub fn new(groups: &BTreeMap<String, Vec<String>>, entry_paths: &[String]) -> Self {
        let groups = groups
            .keys()
            .map(|name| GroupPattern {
                name: name.clone(),
                // Escaped literal names always compile.
                pattern: Regex::new(&format!(r#"(?:^|[/"]){}("?$|/)"#, regex::escape(name)))
                    .expect("group pattern"),
            })
            .collect();
        Self {
            groups,
            entry_paths: entry_paths.iter().map(|e| e.to_lowercase()).collect(),
        }
    }

    /// The group whose pattern matches `path` at the earliest offset, if any.
    pub fn classify(&self, path: &str) -> Option<&str> {
        let mut best: Option<(usize, &str)> = None;
        for group in &self.groups {
            if let Some(m) = group.pattern.find(path) {
                let earlier = match best {
                    None => true,
                    Some((offset, _)) => m.start() < offset,
                };
                if earlier {
                    best = Some((m.start(), &group.name));
                }
            }
        }
        best.map(|(_, name)| name)
    }

    /// Entry-path filter: with a non-empty allow-list, only paths that
    /// case-insensitively contain one of the configured substrings take part
    /// in layer checking. An empty list admits every path.
    pub fn allowed_entry_path(&self, path: &str) -> bool {
        if self.entry_paths.is_empty() {
            return true;
        }
        let lowered = path.to_lowercase();
        self.entry_paths.iter().any(|e| lowered.contains(e))
    }
}
