//! Feature-hashing embedding provider
//!
//! Maps lowercase word tokens into a fixed number of buckets and
//! L2-normalises the result. Lexical overlap drives similarity; there is no
//! semantic model behind it. Used by the in-memory retrieval service.

use async_trait::async_trait;

use crate::domain::embedding::EmbeddingProvider;
use crate::domain::user::User;
use crate::domain::DomainError;

pub const DEFAULT_DIMENSIONS: usize = 256;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

#[derive(Debug, Clone)]
pub struct HashingEmbeddingProvider {
    dimensions: usize,
}

impl Default for HashingEmbeddingProvider {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSIONS)
    }
}

impl HashingEmbeddingProvider {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// Embed a single text
    pub fn embed_text(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimensions];

        for token in tokenize(text) {
            let hash = fnv1a(token.as_bytes());
            let bucket = (hash % self.dimensions as u64) as usize;
            // High bit picks the sign so collisions partially cancel out
            let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
            vector[bucket] += sign;
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            vector.iter_mut().for_each(|x| *x /= norm);
        }

        vector
    }
}

#[async_trait]
impl EmbeddingProvider for HashingEmbeddingProvider {
    /// The prefix is ignored: the same vector space serves queries and documents
    async fn embed(
        &self,
        texts: &[String],
        _prefix: Option<&str>,
        _user: Option<&User>,
    ) -> Result<Vec<Vec<f32>>, DomainError> {
        Ok(texts.iter().map(|text| self.embed_text(text)).collect())
    }

    fn provider_name(&self) -> &'static str {
        "hashing"
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
}

fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET, |hash, b| {
        (hash ^ u64::from(*b)).wrapping_mul(FNV_PRIME)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::embedding::cosine_similarity;

    #[test]
    fn test_embedding_is_normalised() {
        let provider = HashingEmbeddingProvider::new(64);
        let vector = provider.embed_text("Remote work policy");

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_empty_text_yields_zero_vector() {
        let provider = HashingEmbeddingProvider::new(16);
        assert!(provider.embed_text("  ,. ").iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_case_and_punctuation_insensitive() {
        let provider = HashingEmbeddingProvider::default();
        assert_eq!(
            provider.embed_text("Vacation, Policy!"),
            provider.embed_text("vacation policy")
        );
    }

    #[test]
    fn test_lexical_overlap_ranks_higher() {
        let provider = HashingEmbeddingProvider::default();
        let query = provider.embed_text("vacation days policy");
        let related = provider.embed_text("The vacation policy grants 25 days per year");
        let unrelated = provider.embed_text("Deploy the service with the release pipeline");

        assert!(cosine_similarity(&query, &related) > cosine_similarity(&query, &unrelated));
    }

    #[tokio::test]
    async fn test_batch_embedding() {
        let provider = HashingEmbeddingProvider::new(32);
        let vectors = provider
            .embed(&["one".to_string(), "two".to_string()], Some("query: "), None)
            .await
            .unwrap();

        assert_eq!(vectors.len(), 2);
        assert!(vectors.iter().all(|v| v.len() == 32));
    }
}
