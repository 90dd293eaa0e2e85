//! I/O-free client for the todo REST API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, keeping this crate deterministic and testable
//! with plain unit tests.
//!
//! # Design
//! - `TodoClient` is stateless — it holds only `base_url`.
//! - Each operation is split into `build_*` (produces a request) and
//!   `parse_*` (consumes a response), so the I/O boundary is explicit.
//! - DTOs are defined independently from the server crate; the integration
//!   test runs the real server and catches schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, DeleteAck, Todo};
