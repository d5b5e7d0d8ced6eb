//! Knowledge base catalog entry and related types

use serde::{Deserialize, Serialize};

use super::validation::{validate_knowledge_base_id, KnowledgeBaseValidationError};

/// Knowledge base identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct KnowledgeBaseId(String);

impl KnowledgeBaseId {
    /// Create a new KnowledgeBaseId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, KnowledgeBaseValidationError> {
        let id = id.into();
        validate_knowledge_base_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for KnowledgeBaseId {
    type Error = KnowledgeBaseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<KnowledgeBaseId> for String {
    fn from(id: KnowledgeBaseId) -> Self {
        id.0
    }
}

impl std::fmt::Display for KnowledgeBaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Data attached to a knowledge base by the host (file references, etc.)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBaseData {
    #[serde(default)]
    pub file_ids: Vec<String>,
}

impl KnowledgeBaseData {
    pub fn with_file_ids<I, S>(file_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            file_ids: file_ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Knowledge base catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    /// Unique identifier (also the retrieval collection name)
    id: KnowledgeBaseId,
    /// Display name
    name: String,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    /// Associated data, when the host has recorded any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<KnowledgeBaseData>,
}

impl KnowledgeBase {
    /// Create a new knowledge base entry
    pub fn new(id: KnowledgeBaseId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            data: None,
        }
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set associated data
    pub fn with_data(mut self, data: KnowledgeBaseData) -> Self {
        self.data = Some(data);
        self
    }

    // Getters

    pub fn id(&self) -> &KnowledgeBaseId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn data(&self) -> Option<&KnowledgeBaseData> {
        self.data.as_ref()
    }

    /// Number of files referenced by the entry's data, zero when absent
    pub fn file_count(&self) -> usize {
        self.data.as_ref().map_or(0, |data| data.file_ids.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knowledge_base_id_roundtrip_through_serde() {
        let id: KnowledgeBaseId = serde_json::from_str("\"kb_policies\"").unwrap();
        assert_eq!(id.as_str(), "kb_policies");
        assert!(serde_json::from_str::<KnowledgeBaseId>("\"\"").is_err());
    }

    #[test]
    fn test_file_count_defaults_to_zero() {
        let kb = KnowledgeBase::new(KnowledgeBaseId::new("kb-1").unwrap(), "Docs");
        assert_eq!(kb.file_count(), 0);

        let kb = kb.with_data(KnowledgeBaseData::default());
        assert_eq!(kb.file_count(), 0);
    }

    #[test]
    fn test_file_count_counts_file_ids() {
        let kb = KnowledgeBase::new(KnowledgeBaseId::new("kb-1").unwrap(), "Docs")
            .with_data(KnowledgeBaseData::with_file_ids(["f1", "f2", "f3"]));
        assert_eq!(kb.file_count(), 3);
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let kb: KnowledgeBase =
            serde_json::from_str(r#"{"id": "kb-hr", "name": "HR"}"#).unwrap();

        assert_eq!(kb.name(), "HR");
        assert!(kb.description().is_none());
        assert!(kb.data().is_none());
    }
}
