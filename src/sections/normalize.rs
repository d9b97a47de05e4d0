//! Section deduplication and example-first ordering.

use crate::sections::model::Section;
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// Keywords marking a section as "examples / scenarios / who is this for".
pub const DEFAULT_PROMOTE_KEYWORDS: &[&str] = &[
    "example",
    "examples",
    "scenario",
    "scenarios",
    "who is this for",
    "use case",
    "案例",
    "情境",
    "使用情境",
    "範例",
    "示例",
    "场景",
];

/// Identity of a section within one document.
///
/// Authored keys (id, title, first list item) share one namespace; position
/// is a separate namespace, so it never collides with authored text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionKey {
    Authored(String),
    Position(usize),
}

impl SectionKey {
    /// Derive the key: `id`, else `title`, else the first item of the main
    /// list, else the position in the authored list.
    pub fn derive(section: &Section, index: usize) -> Self {
        [section.id(), section.title(), section.primary_item()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|key| !key.is_empty())
            .map(|key| SectionKey::Authored(key.to_string()))
            .unwrap_or(SectionKey::Position(index))
    }

    /// Stable, attribute-safe form for HTML `id`s and render keys.
    pub fn anchor(&self) -> String {
        match self {
            SectionKey::Position(index) => format!("section-{index}"),
            SectionKey::Authored(key) => {
                let mut anchor = String::with_capacity(key.len());
                for c in key.chars().flat_map(char::to_lowercase) {
                    if c.is_alphanumeric() {
                        anchor.push(c);
                    } else if !anchor.ends_with('-') {
                        anchor.push('-');
                    }
                }
                let anchor = anchor.trim_matches('-');
                if anchor.is_empty() {
                    "section".to_string()
                } else {
                    anchor.to_string()
                }
            }
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionKey::Authored(key) => f.write_str(key),
            SectionKey::Position(index) => write!(f, "#{index}"),
        }
    }
}

/// Ids the page shell already uses.
pub const RESERVED_ANCHORS: &[&str] = &["main", "posts"];

/// Hands out anchors that are unique within one document.
///
/// Distinct keys can share an anchor ("Overview" and "overview!"); later
/// claims get `-2`, `-3`, ... appended.
#[derive(Debug, Clone)]
pub struct AnchorSet {
    used: HashSet<String>,
}

impl Default for AnchorSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AnchorSet {
    pub fn new() -> Self {
        Self {
            used: RESERVED_ANCHORS.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn claim(&mut self, key: &SectionKey) -> String {
        let base = key.anchor();
        let mut anchor = base.clone();
        let mut suffix = 2;
        while !self.used.insert(anchor.clone()) {
            anchor = format!("{base}-{suffix}");
            suffix += 1;
        }
        anchor
    }
}

/// A section paired with the identity it was deduplicated under and its
/// document-unique anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedSection {
    pub key: SectionKey,
    pub anchor: String,
    pub section: Section,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionNormalizer {
    keywords: Vec<String>,
}

impl Default for SectionNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_PROMOTE_KEYWORDS.iter().copied())
    }
}

impl SectionNormalizer {
    /// Blank keywords are ignored; matching is case-insensitive.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Whether a section's title or lead matches a promotion keyword.
    pub fn is_example_like(&self, section: &Section) -> bool {
        [section.title(), section.lead()]
            .into_iter()
            .flatten()
            .map(str::to_lowercase)
            .any(|text| self.keywords.iter().any(|k| text.contains(k.as_str())))
    }

    /// Drop duplicates (first wins) and move example-like sections to the
    /// front, keeping relative order within both groups. Anchors are claimed
    /// in authored order.
    pub fn normalize_keyed(&self, sections: &[Section]) -> Vec<KeyedSection> {
        let mut seen = HashSet::new();
        let mut anchors = AnchorSet::new();
        let mut promoted = Vec::new();
        let mut rest = Vec::new();

        for (index, section) in sections.iter().enumerate() {
            let key = SectionKey::derive(section, index);
            if !seen.insert(key.clone()) {
                debug!("Dropping duplicate section '{}' at index {}", key, index);
                continue;
            }

            let keyed = KeyedSection {
                anchor: anchors.claim(&key),
                key,
                section: section.clone(),
            };
            if self.is_example_like(section) {
                promoted.push(keyed);
            } else {
                rest.push(keyed);
            }
        }

        promoted.extend(rest);
        promoted
    }

    pub fn normalize(&self, sections: &[Section]) -> Vec<Section> {
        self.normalize_keyed(sections)
            .into_iter()
            .map(|keyed| keyed.section)
            .collect()
    }
}

/// Normalize an optional section list; absent lists become empty.
pub fn normalize_sections(
    sections: Option<&[Section]>,
    normalizer: &SectionNormalizer,
) -> Vec<Section> {
    sections
        .map(|s| normalizer.normalize(s))
        .unwrap_or_default()
}
