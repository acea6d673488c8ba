//! Request and result records mirroring the PlayFab REST API.
//!
//! # Design
//! Records are plain data with every field optional. Three conventions hold
//! across all of them:
//! - JSON keys are the service's PascalCase names.
//! - `None` is omitted from serialized bodies, so "unset" and "explicitly
//!   empty" stay distinguishable on the wire.
//! - Unknown keys in responses are ignored, and an enumeration value this
//!   build does not know decodes as that enum's `Unknown` variant. Older SDK
//!   builds keep working when the service adds fields or values.
//!
//! Free-form JSON is carried as `serde_json::Value`; maps are `BTreeMap` so
//! serialized bodies are deterministic.

pub mod client;
pub mod multiplayer;
pub mod profiles;
mod timestamp;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

pub use timestamp::Timestamp;

/// Entity type and id, uniquely identifying one entity.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntityKey {
    pub id: Option<String>,
    #[serde(rename = "Type")]
    pub entity_type: Option<String>,
}

impl EntityKey {
    pub fn new(id: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            entity_type: Some(entity_type.into()),
        }
    }
}

/// Result of calls that return no data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmptyResponse {}
