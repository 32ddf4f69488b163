//! Syllabus catalog model.
//!
//! A catalog is an ordered list of syllabus sections, each holding the
//! topics published for one area of the curriculum. The crate ships no
//! curriculum data; catalogs are built by the caller or deserialized
//! from JSON.

use serde::{Deserialize, Serialize};

use super::{ClassScope, SyllabusLevel, Topic};

/// One area of the published syllabus, holding its topics in teaching order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyllabusSection {
    /// Section identifier.
    pub id: i64,
    /// Section title.
    pub title: String,
    /// Syllabus classification of this section.
    pub level: SyllabusLevel,
    /// Topics in this section, in catalog order.
    pub topics: Vec<Topic>,
}

impl SyllabusSection {
    /// Creates an empty section.
    pub fn new(id: i64, title: impl Into<String>, level: SyllabusLevel) -> Self {
        Self {
            id,
            title: title.into(),
            level,
            topics: Vec::new(),
        }
    }

    /// Adds a topic to this section.
    pub fn with_topic(mut self, topic: Topic) -> Self {
        self.topics.push(topic);
        self
    }
}

/// An ordered collection of syllabus sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyllabusCatalog {
    /// Sections in catalog order.
    pub sections: Vec<SyllabusSection>,
}

impl SyllabusCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a section.
    pub fn with_section(mut self, section: SyllabusSection) -> Self {
        self.sections.push(section);
        self
    }

    /// All topics in catalog order, flattened across sections.
    pub fn flattened(&self) -> Vec<&Topic> {
        self.sections.iter().flat_map(|s| s.topics.iter()).collect()
    }

    /// Topics whose level falls within the given class scope, in catalog order.
    pub fn topics_in_scope(&self, scope: ClassScope) -> Vec<&Topic> {
        self.flattened()
            .into_iter()
            .filter(|t| scope.includes(t.level))
            .collect()
    }

    /// Finds a topic by id.
    pub fn find(&self, topic_id: &str) -> Option<&Topic> {
        self.sections
            .iter()
            .flat_map(|s| s.topics.iter())
            .find(|t| t.id == topic_id)
    }

    /// Total number of topics across all sections.
    pub fn topic_count(&self) -> usize {
        self.sections.iter().map(|s| s.topics.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> SyllabusCatalog {
        SyllabusCatalog::new()
            .with_section(
                SyllabusSection::new(1, "Information representation", SyllabusLevel::As)
                    .with_topic(
                        Topic::new("1.1")
                            .with_section(1)
                            .with_title("Data representation")
                            .with_level(SyllabusLevel::As)
                            .with_hours(6.0),
                    )
                    .with_topic(
                        Topic::new("1.2")
                            .with_section(1)
                            .with_title("Multimedia")
                            .with_level(SyllabusLevel::As)
                            .with_hours(4.0),
                    ),
            )
            .with_section(
                SyllabusSection::new(13, "Data representation (A2)", SyllabusLevel::A).with_topic(
                    Topic::new("13.1")
                        .with_section(13)
                        .with_title("User-defined data types")
                        .with_level(SyllabusLevel::A)
                        .with_hours(5.0),
                ),
            )
    }

    #[test]
    fn test_flattened_preserves_catalog_order() {
        let catalog = sample_catalog();
        let ids: Vec<&str> = catalog.flattened().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1.1", "1.2", "13.1"]);
        assert_eq!(catalog.topic_count(), 3);
    }

    #[test]
    fn test_topics_in_scope() {
        let catalog = sample_catalog();

        let as_ids: Vec<&str> = catalog
            .topics_in_scope(ClassScope::As)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(as_ids, ["1.1", "1.2"]);

        let a2_ids: Vec<&str> = catalog
            .topics_in_scope(ClassScope::A2)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(a2_ids, ["13.1"]);

        assert_eq!(catalog.topics_in_scope(ClassScope::Full).len(), 3);
        assert!(catalog.topics_in_scope(ClassScope::Igcse).is_empty());
    }

    #[test]
    fn test_find() {
        let catalog = sample_catalog();
        assert_eq!(catalog.find("13.1").unwrap().title, "User-defined data types");
        assert!(catalog.find("99.9").is_none());
    }

    #[test]
    fn test_catalog_deserializes_from_json() {
        let json = r#"{
            "sections": [{
                "id": 101,
                "title": "Data Representation (IGCSE)",
                "level": "IGCSE",
                "topics": [{
                    "id": "i1.1",
                    "section_id": 101,
                    "title": "Number systems",
                    "level": "IGCSE",
                    "estimated_hours": 5.0
                }]
            }]
        }"#;
        let catalog: SyllabusCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.topic_count(), 1);
        assert_eq!(catalog.find("i1.1").unwrap().level, SyllabusLevel::Igcse);
    }
}
