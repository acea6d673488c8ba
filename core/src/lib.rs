//! Client SDK core for the PlayFab game backend.
//!
//! # Overview
//! Typed request and result records for the client, multiplayer server and
//! entity profile APIs, the service's error-code registry, and one generic
//! dispatch that turns a request into exactly one outcome: a result or a
//! `PlayFabError`, never both.
//!
//! # Design
//! - `PlayFabClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values; a `Transport` performs the round-trip (host-does-IO pattern).
//!   `UreqTransport` is provided behind the default `ureq` feature.
//! - `ApiRequest` binds each request type to its endpoint and result type at
//!   compile time. The few calls that reuse another call's request record
//!   are named in `api::shared` and dispatched with `PlayFabClient::call`.
//! - `Settings` is constructed once and shared read-only by every client.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod models;
pub mod ordering;
pub mod outcome;
pub mod settings;

pub use api::{ApiRequest, AuthKind, Endpoint};
pub use client::{Credentials, PlayFabClient};
pub use error::{ConfigError, ErrorCode, PlayFabError, TransportError};
#[cfg(feature = "ureq")]
pub use http::UreqTransport;
pub use http::{HttpRequest, HttpResponse, Transport};
pub use models::{EmptyResponse, EntityKey, Timestamp};
pub use ordering::{compare_identifiers, sort_by_identifier, Identified};
pub use outcome::ApiOutcome;
pub use settings::{AdvertisingId, AdvertisingIdType, ErrorHandler, Settings, SDK_VERSION};
