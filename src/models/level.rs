//! Syllabus level and class scope classification.
//!
//! Every topic carries a [`SyllabusLevel`]; a classroom declares a
//! [`ClassScope`] that selects which levels of the catalog it teaches.
//! Custom topics sit outside the published syllabus and are in scope
//! for every class.

use serde::{Deserialize, Serialize};

/// Classification of a topic within the published syllabus.
///
/// Serialized forms match the planner's display strings
/// (`"AS Level"`, `"A Level"`, `"IGCSE"`, `"Custom"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyllabusLevel {
    /// First-year (AS) content.
    #[serde(rename = "AS Level")]
    As,
    /// Second-year (A2) content.
    #[serde(rename = "A Level")]
    A,
    /// IGCSE content.
    #[serde(rename = "IGCSE")]
    Igcse,
    /// User-defined topic outside the published syllabus.
    Custom,
}

/// The slice of the catalog a classroom teaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassScope {
    /// AS-level content only.
    #[serde(rename = "AS")]
    As,
    /// A-level (second year) content only.
    A2,
    /// Both AS and A-level content.
    Full,
    /// IGCSE content only.
    #[serde(rename = "IGCSE")]
    Igcse,
}

impl ClassScope {
    /// Whether topics of the given level belong to this scope.
    ///
    /// Custom topics are always in scope.
    pub fn includes(&self, level: SyllabusLevel) -> bool {
        match level {
            SyllabusLevel::Custom => true,
            SyllabusLevel::As => matches!(self, Self::As | Self::Full),
            SyllabusLevel::A => matches!(self, Self::A2 | Self::Full),
            SyllabusLevel::Igcse => matches!(self, Self::Igcse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_filtering() {
        assert!(ClassScope::As.includes(SyllabusLevel::As));
        assert!(!ClassScope::As.includes(SyllabusLevel::A));
        assert!(!ClassScope::As.includes(SyllabusLevel::Igcse));

        assert!(ClassScope::A2.includes(SyllabusLevel::A));
        assert!(!ClassScope::A2.includes(SyllabusLevel::As));

        assert!(ClassScope::Full.includes(SyllabusLevel::As));
        assert!(ClassScope::Full.includes(SyllabusLevel::A));
        assert!(!ClassScope::Full.includes(SyllabusLevel::Igcse));

        assert!(ClassScope::Igcse.includes(SyllabusLevel::Igcse));
        assert!(!ClassScope::Igcse.includes(SyllabusLevel::A));
    }

    #[test]
    fn test_custom_always_in_scope() {
        for scope in [
            ClassScope::As,
            ClassScope::A2,
            ClassScope::Full,
            ClassScope::Igcse,
        ] {
            assert!(scope.includes(SyllabusLevel::Custom));
        }
    }

    #[test]
    fn test_level_serde_display_strings() {
        let json = serde_json::to_string(&SyllabusLevel::As).unwrap();
        assert_eq!(json, "\"AS Level\"");
        let back: SyllabusLevel = serde_json::from_str("\"IGCSE\"").unwrap();
        assert_eq!(back, SyllabusLevel::Igcse);
    }

    #[test]
    fn test_scope_serde() {
        assert_eq!(serde_json::to_string(&ClassScope::As).unwrap(), "\"AS\"");
        assert_eq!(serde_json::to_string(&ClassScope::A2).unwrap(), "\"A2\"");
        let back: ClassScope = serde_json::from_str("\"Full\"").unwrap();
        assert_eq!(back, ClassScope::Full);
    }
}
