use super::stats::DashboardStats;
use crate::error::Result;
use async_trait::async_trait;

/// Whole-document storage keyed by fixed collection names.
///
/// Every write replaces the previous document; last writer wins.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn read(&self, key: &str) -> Result<Option<String>>;
    async fn write(&self, key: &str, document: String) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Text assistant that comments on the gym's figures.
#[async_trait]
pub trait InsightProvider: Send + Sync {
    async fn summarize(&self, stats: &DashboardStats, question: &str) -> Result<String>;
}

pub type DocumentStoreBox = Box<dyn DocumentStore>;
