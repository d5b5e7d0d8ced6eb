//! Retrieval service trait

use std::fmt::Debug;

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::query::RetrievalQuery;
use super::result::RetrievalResult;
use crate::domain::error::DomainError;

/// Host-owned similarity search over knowledge base collections
///
/// Implementations embed the queries through the supplied embedding
/// context, search every named collection and return at most `k` hits per
/// query in their own ranking order.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RetrievalService: Send + Sync + Debug {
    async fn query_collection(&self, query: RetrievalQuery)
        -> Result<RetrievalResult, DomainError>;
}
