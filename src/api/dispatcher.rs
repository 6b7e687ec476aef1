use super::response::{ApiResponse, Status, VillaRequest};
use crate::clients::VillaClient;
use crate::logging::{Severity, SharedSink};
use crate::model::{Villa, VillaId};
use crate::villa_actor::{PatchOperation, ValidationError, VillaError};
use resource_actor::ActorClient;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

/// Where a created villa can be fetched from.
pub const LOCATION_PREFIX: &str = "/api/VillaAPI";

/// Turns [`VillaRequest`]s into Villa client calls and their outcomes into [`ApiResponse`]s.
///
/// | Request | Success | Failures |
/// |---|---|---|
/// | List | 200 + array | |
/// | Get | 200 + villa | 400 when id is 0; 404 |
/// | Create | 201 + villa + location | 400 bad body or rule violation; 500 when the body carries an id |
/// | Update | 204 | 400 when id < 1, bad body, id mismatch or invalid fields; 404 |
/// | PartialUpdate | 204 | 400 when id < 1, bad document or invalid result; 404 |
/// | Delete | 204 | 404 |
///
/// Engine failures map to 500.
#[derive(Clone)]
pub struct Dispatcher {
    client: VillaClient,
    sink: SharedSink,
}

impl Dispatcher {
    pub fn new(client: VillaClient, sink: SharedSink) -> Self {
        Self { client, sink }
    }

    #[instrument(skip(self))]
    pub async fn dispatch(&self, request: VillaRequest) -> ApiResponse {
        let outcome = match request {
            VillaRequest::List => self.list().await,
            VillaRequest::Get { id } => self.get(id).await,
            VillaRequest::Create { body } => self.create(body).await,
            VillaRequest::Update { id, body } => self.update(id, body).await,
            VillaRequest::PartialUpdate { id, document } => {
                self.partial_update(id, document).await
            }
            VillaRequest::Delete { id } => self.delete(id).await,
        };
        let response = match outcome {
            Ok(response) | Err(response) => response,
        };
        debug!(status = response.status.code(), "Dispatched");
        response
    }

    async fn list(&self) -> Result<ApiResponse, ApiResponse> {
        self.sink.log("Getting All Villas", Severity::Info);
        let villas = self.client.list().await?;
        Ok(ApiResponse::ok(to_body(&villas)?))
    }

    async fn get(&self, id: i32) -> Result<ApiResponse, ApiResponse> {
        if id == 0 {
            self.sink
                .log("Bad Request. Id should not be 0", Severity::Error);
            return Err(ApiResponse::empty(Status::BadRequest));
        }
        let villa = self.client.get(VillaId(id)).await?;
        Ok(ApiResponse::ok(to_body(&villa)?))
    }

    async fn create(&self, body: Value) -> Result<ApiResponse, ApiResponse> {
        let candidate = parse_villa(body)?;
        let stored = self.client.create_villa(candidate).await?;
        let location = format!("{LOCATION_PREFIX}/{}", stored.id);
        Ok(ApiResponse::created(to_body(&stored)?, location))
    }

    async fn update(&self, id: i32, body: Value) -> Result<ApiResponse, ApiResponse> {
        require_positive(id)?;
        let candidate = parse_villa(body)?;
        self.client.update_villa(VillaId(id), candidate).await?;
        Ok(ApiResponse::no_content())
    }

    async fn partial_update(&self, id: i32, document: Value) -> Result<ApiResponse, ApiResponse> {
        require_positive(id)?;
        let operations = PatchOperation::parse_document(&document).map_err(VillaError::from)?;
        self.client.patch_villa(VillaId(id), operations).await?;
        Ok(ApiResponse::no_content())
    }

    /// Ids below 1 are not rejected up front; they simply miss.
    async fn delete(&self, id: i32) -> Result<ApiResponse, ApiResponse> {
        self.client.delete(VillaId(id)).await?;
        Ok(ApiResponse::no_content())
    }
}

impl From<VillaError> for ApiResponse {
    fn from(error: VillaError) -> Self {
        let (status, code) = match &error {
            VillaError::NotFound(_) => return ApiResponse::empty(Status::NotFound),
            VillaError::Validation(ValidationError::IdPreassigned(_)) => {
                (Status::InternalServerError, "VILLA_ID_PREASSIGNED")
            }
            VillaError::Validation(_) => (Status::BadRequest, "VILLA_VALIDATION_ERROR"),
            VillaError::Patch(_) => (Status::BadRequest, "VILLA_PATCH_ERROR"),
            VillaError::IdExhausted(_) => (Status::InternalServerError, "VILLA_ID_EXHAUSTED"),
            VillaError::ActorCommunicationError(_) => {
                (Status::InternalServerError, "VILLA_INTERNAL_ERROR")
            }
        };
        ApiResponse::error(status, code, error.to_string())
    }
}

fn require_positive(id: i32) -> Result<(), ApiResponse> {
    if id < 1 {
        return Err(ApiResponse::error(
            Status::BadRequest,
            "VILLA_BAD_REQUEST",
            format!("id must be positive, got {id}"),
        ));
    }
    Ok(())
}

fn parse_villa(body: Value) -> Result<Villa, ApiResponse> {
    serde_json::from_value(body).map_err(|e| {
        ApiResponse::error(Status::BadRequest, "VILLA_BAD_REQUEST", e.to_string())
    })
}

fn to_body<T: Serialize>(value: &T) -> Result<Value, ApiResponse> {
    serde_json::to_value(value).map_err(|e| {
        ApiResponse::error(Status::InternalServerError, "VILLA_INTERNAL_ERROR", e.to_string())
    })
}
