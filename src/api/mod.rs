//! # Dispatcher
//!
//! The verb-to-operation mapping of the Villa API, without a transport. An HTTP layer
//! routes a call into a [`VillaRequest`], awaits [`Dispatcher::dispatch`] and writes the
//! [`ApiResponse`] back out.
//!
//! ```rust,ignore
//! let response = system
//!     .dispatcher()
//!     .dispatch(VillaRequest::Create {
//!         body: json!({"name": "Pool View", "occupancy": 4, "squareFootage": 750}),
//!     })
//!     .await;
//! assert_eq!(response.status, Status::Created);
//! assert_eq!(response.location.as_deref(), Some("/api/VillaAPI/1"));
//! ```

pub mod dispatcher;
pub mod response;

pub use dispatcher::*;
pub use response::*;
