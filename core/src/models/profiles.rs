//! Records for the entity profile API (`/Profile/*`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

use super::timestamp::Timestamp;
use super::EntityKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectType {
    Allow,
    Deny,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationTypes {
    Created,
    Updated,
    Deleted,
    None,
    #[serde(other)]
    Unknown,
}

/// An entity object. Exactly one of `data_object` and `escaped_data_object`
/// is filled, depending on the `DataAsObject` flag of the request.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntityDataObject {
    pub data_object: Option<Value>,
    pub escaped_data_object: Option<String>,
    pub object_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntityPermissionStatement {
    /// `Read`, `Write` or `*`.
    pub action: Option<String>,
    pub comment: Option<String>,
    pub condition: Option<Value>,
    pub effect: Option<EffectType>,
    pub principal: Option<Value>,
    pub resource: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntityProfileFileMetadata {
    pub checksum: Option<String>,
    pub file_name: Option<String>,
    pub last_modified: Option<Timestamp>,
    pub size: Option<i32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntityProfileBody {
    pub entity: Option<EntityKey>,
    pub entity_chain: Option<String>,
    pub files: Option<BTreeMap<String, EntityProfileFileMetadata>>,
    pub language: Option<String>,
    pub objects: Option<BTreeMap<String, EntityDataObject>>,
    pub permissions: Option<Vec<EntityPermissionStatement>>,
    /// Storage version at read time, usable for optimistic concurrency.
    pub version_number: Option<i32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetEntityProfileRequest {
    pub data_as_object: Option<bool>,
    pub entity: Option<EntityKey>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetEntityProfileResponse {
    pub profile: Option<EntityProfileBody>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetEntityProfilesRequest {
    pub data_as_object: Option<bool>,
    /// Between 1 and 25 keys.
    pub entities: Option<Vec<EntityKey>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetEntityProfilesResponse {
    pub profiles: Option<Vec<EntityProfileBody>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetGlobalPolicyRequest {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetGlobalPolicyResponse {
    pub permissions: Option<Vec<EntityPermissionStatement>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetGlobalPolicyRequest {
    pub permissions: Option<Vec<EntityPermissionStatement>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetGlobalPolicyResponse {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetEntityProfilePolicyRequest {
    pub entity: Option<EntityKey>,
    pub statements: Option<Vec<EntityPermissionStatement>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetEntityProfilePolicyResponse {
    pub permissions: Option<Vec<EntityPermissionStatement>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetProfileLanguageRequest {
    pub entity: Option<EntityKey>,
    pub expected_version: Option<i32>,
    /// `None` deletes the profile's language.
    pub language: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetProfileLanguageResponse {
    pub operation_result: Option<OperationTypes>,
    pub version_number: Option<i32>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn profile_body_keeps_objects_and_policy() {
        let body: EntityProfileBody = serde_json::from_value(json!({
            "Entity": {"Id": "E1", "Type": "title_player_account"},
            "Objects": {"save": {"ObjectName": "save", "DataObject": {"slot": 2}}},
            "Permissions": [{"Action": "Read", "Effect": "Allow", "Principal": "*", "Resource": "pfrn:data--*!*/Profile/*"}],
            "VersionNumber": 7
        }))
        .unwrap();
        assert_eq!(body.objects.unwrap()["save"].data_object, Some(json!({"slot": 2})));
        let statement = &body.permissions.unwrap()[0];
        assert_eq!(statement.effect, Some(EffectType::Allow));
        assert_eq!(statement.principal, Some(json!("*")));
        assert_eq!(body.version_number, Some(7));
    }

    #[test]
    fn language_request_omits_unset_language() {
        let req = SetProfileLanguageRequest {
            entity: Some(EntityKey::new("E1", "title_player_account")),
            expected_version: Some(3),
            language: None,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"Entity": {"Id": "E1", "Type": "title_player_account"}, "ExpectedVersion": 3})
        );
    }

    #[test]
    fn operation_result_decodes() {
        let resp: SetProfileLanguageResponse =
            serde_json::from_str(r#"{"OperationResult":"Updated","VersionNumber":4}"#).unwrap();
        assert_eq!(resp.operation_result, Some(OperationTypes::Updated));
    }

    #[test]
    fn unlisted_effect_decodes_as_unknown() {
        let statement: EntityPermissionStatement =
            serde_json::from_value(json!({"Action": "Write", "Effect": "Audit", "Principal": "*"})).unwrap();
        assert_eq!(statement.effect, Some(EffectType::Unknown));
        assert_eq!(statement.action.as_deref(), Some("Write"));

        let none: OperationTypes = serde_json::from_value(json!("None")).unwrap();
        assert_eq!(none, OperationTypes::None);
    }
}
