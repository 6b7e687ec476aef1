//! # Villa Client
//!
//! Provides a high-level API for interacting with the `Villa` actor.
//! It wraps a `ResourceClient<Villa>` and exposes domain-specific methods; `list`, `get`
//! and `delete` come from [`ActorClient`].
use crate::model::{Villa, VillaId};
use crate::villa_actor::{PatchOperation, VillaError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Villa actor.
#[derive(Clone)]
pub struct VillaClient {
    inner: ResourceClient<Villa>,
}

impl VillaClient {
    pub fn new(inner: ResourceClient<Villa>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Villa> for VillaClient {
    type Error = VillaError;

    fn inner(&self) -> &ResourceClient<Villa> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        VillaError::from_framework(e)
    }
}

impl VillaClient {
    /// Stores `candidate` under a freshly allocated id and returns the stored villa.
    #[instrument(skip(self), fields(name = %candidate.name))]
    pub async fn create_villa(&self, candidate: Villa) -> Result<Villa, VillaError> {
        debug!("Sending request");
        self.inner
            .create(candidate)
            .await
            .map_err(VillaError::from_framework)
    }

    /// Replaces name, occupancy and square footage of villa `id`.
    ///
    /// `candidate.id` must equal `id`.
    #[instrument(skip(self))]
    pub async fn update_villa(&self, id: VillaId, candidate: Villa) -> Result<Villa, VillaError> {
        debug!("Sending request");
        self.inner
            .replace(id, candidate)
            .await
            .map_err(VillaError::from_framework)
    }

    /// Applies `operations` to villa `id`, all or nothing.
    #[instrument(skip(self))]
    pub async fn patch_villa(
        &self,
        id: VillaId,
        operations: Vec<PatchOperation>,
    ) -> Result<Villa, VillaError> {
        debug!("Sending request");
        self.inner
            .patch(id, operations)
            .await
            .map_err(VillaError::from_framework)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::villa_actor::{ValidationError, VillaField};
    use resource_actor::mock::{create_mock_client, expect_patch, expect_replace, MockClient};

    #[tokio::test]
    async fn test_entity_errors_are_recovered() {
        let mut mock = MockClient::<Villa>::new();
        mock.expect_create().return_err(FrameworkError::entity(VillaError::from(
            ValidationError::DuplicateName("Pool View".into()),
        )));

        let client = VillaClient::new(mock.client());
        let result = client.create_villa(Villa::new("Pool View", 4, 750)).await;

        assert_eq!(
            result,
            Err(VillaError::Validation(ValidationError::DuplicateName(
                "Pool View".into()
            )))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_not_found_is_mapped() {
        let mut mock = MockClient::<Villa>::new();
        mock.expect_get(VillaId(9))
            .return_err(FrameworkError::NotFound("9".into()));

        let client = VillaClient::new(mock.client());
        assert_eq!(
            client.get(VillaId(9)).await,
            Err(VillaError::NotFound("9".into()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_transport_failures_become_communication_errors() {
        let mut mock = MockClient::<Villa>::new();
        mock.expect_list().return_err(FrameworkError::ActorClosed);
        mock.expect_delete(VillaId(1))
            .return_err(FrameworkError::ActorDropped);

        let client = VillaClient::new(mock.client());
        assert!(matches!(
            client.list().await,
            Err(VillaError::ActorCommunicationError(_))
        ));
        assert!(matches!(
            client.delete(VillaId(1)).await,
            Err(VillaError::ActorCommunicationError(_))
        ));
        mock.verify();
    }

    #[tokio::test]
    async fn test_update_forwards_id_and_candidate() {
        let (inner, mut receiver) = create_mock_client::<Villa>(4);
        let client = VillaClient::new(inner);
        let candidate = Villa::new("Lake House", 6, 1200).with_id(2);

        let task = tokio::spawn({
            let candidate = candidate.clone();
            async move { client.update_villa(VillaId(2), candidate).await }
        });

        let (id, sent, responder) = expect_replace(&mut receiver)
            .await
            .expect("Expected Replace request");
        assert_eq!(id, VillaId(2));
        assert_eq!(sent, candidate);
        responder.send(Ok(sent)).unwrap();

        assert_eq!(task.await.unwrap(), Ok(candidate));
    }

    #[tokio::test]
    async fn test_patch_forwards_operations() {
        let (inner, mut receiver) = create_mock_client::<Villa>(4);
        let client = VillaClient::new(inner);
        let ops = vec![PatchOperation::replace(VillaField::Occupancy, 10)];

        let task = tokio::spawn({
            let ops = ops.clone();
            async move { client.patch_villa(VillaId(2), ops).await }
        });

        let (id, sent, responder) = expect_patch(&mut receiver)
            .await
            .expect("Expected Patch request");
        assert_eq!(id, VillaId(2));
        assert_eq!(sent, ops);
        responder
            .send(Err(FrameworkError::NotFound(id.to_string())))
            .unwrap();

        assert_eq!(task.await.unwrap(), Err(VillaError::NotFound("2".into())));
    }
}
