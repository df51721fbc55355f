use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

#[automock]
#[async_trait]
pub trait IntegrationTokenRepository {
    /// Removes every stored token the user holds for `provider`, returning the row count.
    async fn delete_by_user_and_provider(&self, user_id: Uuid, provider: String) -> Result<usize>;
}
