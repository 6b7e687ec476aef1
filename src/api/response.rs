//! Requests and responses exchanged with the [`Dispatcher`](super::Dispatcher).

use serde_json::{json, Value};

/// One inbound call, already routed: verb, path id and raw JSON body.
#[derive(Debug, Clone, PartialEq)]
pub enum VillaRequest {
    /// `GET /api/VillaAPI`
    List,
    /// `GET /api/VillaAPI/{id}`
    Get { id: i32 },
    /// `POST /api/VillaAPI`
    Create { body: Value },
    /// `PUT /api/VillaAPI/{id}`
    Update { id: i32, body: Value },
    /// `PATCH /api/VillaAPI/{id}` with a patch document
    PartialUpdate { id: i32, document: Value },
    /// `DELETE /api/VillaAPI/{id}`
    Delete { id: i32 },
}

/// Response status; the discriminant is the HTTP code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok = 200,
    Created = 201,
    NoContent = 204,
    BadRequest = 400,
    NotFound = 404,
    InternalServerError = 500,
}

impl Status {
    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn is_success(self) -> bool {
        self.code() < 300
    }
}

impl From<Status> for u16 {
    fn from(status: Status) -> u16 {
        status.code()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: Status,
    pub body: Option<Value>,
    /// Set on `201 Created`: where the new villa can be fetched.
    pub location: Option<String>,
}

impl ApiResponse {
    pub fn ok(body: Value) -> Self {
        Self {
            status: Status::Ok,
            body: Some(body),
            location: None,
        }
    }

    pub fn created(body: Value, location: String) -> Self {
        Self {
            status: Status::Created,
            body: Some(body),
            location: Some(location),
        }
    }

    pub fn no_content() -> Self {
        Self::empty(Status::NoContent)
    }

    pub fn empty(status: Status) -> Self {
        Self {
            status,
            body: None,
            location: None,
        }
    }

    /// An error response with a `{"code", "message"}` body.
    pub fn error(status: Status, code: &str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: Some(json!({"code": code, "message": message.into()})),
            location: None,
        }
    }
}
