//! Object storage port used for image cleanup

use async_trait::async_trait;

use super::repositories::RepoResult;

/// Removes stored image objects
#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Remove a single object at `path` inside `bucket`
    async fn remove(&self, bucket: &str, path: &str) -> RepoResult<()>;
}
