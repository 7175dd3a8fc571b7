use async_trait::async_trait;
use crate::errors::KorokResult;

/// How the chat controller reaches the completion proxy.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, text: String) -> KorokResult<String>;
}
