//! Lookup tables shared by the analyzers: skill terms, canonical resume sections,
//! and action verbs.
//!
//! The raw lists live in `data/dictionaries.json` and are compiled into regexes
//! once, on first access. `main` forces the tables at startup.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

pub static DICTIONARIES: Lazy<Dictionaries> = Lazy::new(|| {
    Dictionaries::from_json(include_str!("../../data/dictionaries.json"))
        .expect("valid embedded dictionaries")
});

#[derive(Debug, Deserialize)]
struct RawDictionaries {
    skills: Vec<String>,
    sections: Vec<RawSection>,
    action_verbs: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawSection {
    name: String,
    patterns: Vec<String>,
}

/// A dictionary entry paired with its compiled whole-word matcher.
#[derive(Debug)]
pub struct Term {
    pub term: String,
    pub pattern: Regex,
}

/// A canonical section and the synonyms that indicate its presence.
#[derive(Debug)]
pub struct SectionRule {
    pub name: String,
    pub patterns: Vec<Regex>,
}

impl SectionRule {
    pub fn is_present(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }
}

#[derive(Debug)]
pub struct Dictionaries {
    pub skills: Vec<Term>,
    pub sections: Vec<SectionRule>,
    pub action_verbs: Vec<Term>,
}

impl Dictionaries {
    pub fn from_json(raw: &str) -> Result<Self> {
        let raw: RawDictionaries =
            serde_json::from_str(raw).context("dictionaries JSON is malformed")?;

        let skills = raw
            .skills
            .iter()
            .map(|s| whole_word(s))
            .collect::<Result<Vec<_>>>()?;

        let action_verbs = raw
            .action_verbs
            .iter()
            .map(|v| whole_word(v))
            .collect::<Result<Vec<_>>>()?;

        let sections = raw
            .sections
            .into_iter()
            .map(|section| {
                let patterns = section
                    .patterns
                    .iter()
                    .map(|p| {
                        Regex::new(&format!("(?i){p}"))
                            .with_context(|| format!("bad section pattern '{p}'"))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(SectionRule {
                    name: section.name,
                    patterns,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            skills,
            sections,
            action_verbs,
        })
    }
}

/// Lowercases the term and builds `\b<term>\b` with every literal character escaped
/// (so `node.js` only matches a real dot). Input text is lowercased by callers.
fn whole_word(term: &str) -> Result<Term> {
    let term = term.to_lowercase();
    let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(&term)))
        .with_context(|| format!("bad dictionary term '{term}'"))?;
    Ok(Term { term, pattern })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_tables_load() {
        assert_eq!(DICTIONARIES.skills.len(), 26);
        assert_eq!(DICTIONARIES.sections.len(), 5);
        assert_eq!(DICTIONARIES.action_verbs.len(), 15);
    }

    #[test]
    fn test_section_table_order() {
        let names: Vec<&str> = DICTIONARIES
            .sections
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Summary / Profile", "Skills", "Experience", "Projects", "Education"]
        );
    }

    #[test]
    fn test_dotted_term_requires_literal_dot() {
        let term = whole_word("node.js").unwrap();
        assert!(term.pattern.is_match("built with node.js and react"));
        assert!(!term.pattern.is_match("nodexjs"));
    }

    #[test]
    fn test_whole_word_does_not_match_inside_words() {
        let term = whole_word("git").unwrap();
        assert!(term.pattern.is_match("git, svn"));
        assert!(!term.pattern.is_match("github actions"));
    }

    #[test]
    fn test_section_patterns_are_case_insensitive_substrings() {
        let skills = &DICTIONARIES.sections[1];
        assert!(skills.is_present("TECHNICAL SKILLS:"));
        assert!(skills.is_present("softskillset"));
        assert!(!skills.is_present("skill"));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(Dictionaries::from_json("{not json").is_err());
    }

    #[test]
    fn test_bad_section_pattern_is_rejected() {
        let raw = r#"{"skills":[],"sections":[{"name":"X","patterns":["("]}],"action_verbs":[]}"#;
        assert!(Dictionaries::from_json(raw).is_err());
    }
}
