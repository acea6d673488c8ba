//! Records for the multiplayer server API (`/MultiplayerServer/*`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::timestamp::Timestamp;
pub use super::EmptyResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AzureRegion {
    AustraliaEast,
    AustraliaSoutheast,
    BrazilSouth,
    CentralUs,
    EastAsia,
    EastUs,
    EastUs2,
    JapanEast,
    JapanWest,
    NorthCentralUs,
    NorthEurope,
    SouthCentralUs,
    SoutheastAsia,
    WestEurope,
    WestUs,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AzureVmSize {
    #[serde(rename = "Standard_A1")]
    StandardA1,
    #[serde(rename = "Standard_A2")]
    StandardA2,
    #[serde(rename = "Standard_A3")]
    StandardA3,
    #[serde(rename = "Standard_A4")]
    StandardA4,
    #[serde(rename = "Standard_D1_v2")]
    StandardD1V2,
    #[serde(rename = "Standard_D2_v2")]
    StandardD2V2,
    #[serde(rename = "Standard_D3_v2")]
    StandardD3V2,
    #[serde(rename = "Standard_D4_v2")]
    StandardD4V2,
    #[serde(rename = "Standard_D5_v2")]
    StandardD5V2,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerFlavor {
    ManagedWindowsServerCore,
    CustomLinux,
    ManagedWindowsServerCorePreview,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtocolType {
    #[serde(rename = "TCP")]
    Tcp,
    #[serde(rename = "UDP")]
    Udp,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TitleMultiplayerServerEnabledStatus {
    Initializing,
    Enabled,
    Disabled,
    #[serde(other)]
    Unknown,
}

// ---------------------------------------------------------------------------
// Shared shapes
// ---------------------------------------------------------------------------

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssetReference {
    pub file_name: Option<String>,
    pub mount_path: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssetSummary {
    pub file_name: Option<String>,
    pub metadata: Option<BTreeMap<String, String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BuildRegion {
    pub max_servers: Option<i32>,
    pub region: Option<AzureRegion>,
    pub standby_servers: Option<i32>,
    pub status: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BuildRegionParams {
    pub max_servers: Option<i32>,
    pub region: Option<AzureRegion>,
    pub standby_servers: Option<i32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BuildSummary {
    pub build_id: Option<String>,
    pub build_name: Option<String>,
    pub creation_time: Option<Timestamp>,
    pub metadata: Option<BTreeMap<String, String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Certificate {
    pub base64_encoded_value: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CertificateSummary {
    pub name: Option<String>,
    pub thumbprint: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConnectedPlayer {
    pub player_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerImageReference {
    pub image_name: Option<String>,
    pub tag: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameCertificateReference {
    pub gsdk_alias: Option<String>,
    pub name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Port {
    pub name: Option<String>,
    pub num: Option<i32>,
    pub protocol: Option<ProtocolType>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QosServer {
    pub region: Option<AzureRegion>,
    pub server_url: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MultiplayerServerSummary {
    pub connected_players: Option<Vec<ConnectedPlayer>>,
    pub last_state_transition_time: Option<Timestamp>,
    pub region: Option<AzureRegion>,
    pub server_id: Option<String>,
    pub state: Option<String>,
    pub vm_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VirtualMachineSummary {
    pub health_status: Option<String>,
    pub state: Option<String>,
    pub vm_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Builds
// ---------------------------------------------------------------------------

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateBuildWithManagedContainerRequest {
    pub build_name: Option<String>,
    pub container_flavor: Option<ContainerFlavor>,
    pub game_asset_references: Option<Vec<AssetReference>>,
    pub game_certificate_references: Option<Vec<GameCertificateReference>>,
    pub metadata: Option<BTreeMap<String, String>>,
    pub multiplayer_server_count_per_vm: Option<i32>,
    pub ports: Option<Vec<Port>>,
    pub region_configurations: Option<Vec<BuildRegionParams>>,
    pub start_multiplayer_server_command: Option<String>,
    pub vm_size: Option<AzureVmSize>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateBuildWithCustomContainerRequest {
    pub build_name: Option<String>,
    pub container_flavor: Option<ContainerFlavor>,
    pub container_repository_name: Option<String>,
    pub container_run_command: Option<String>,
    pub container_tag: Option<String>,
    pub game_asset_references: Option<Vec<AssetReference>>,
    pub game_certificate_references: Option<Vec<GameCertificateReference>>,
    pub metadata: Option<BTreeMap<String, String>>,
    pub multiplayer_server_count_per_vm: Option<i32>,
    pub ports: Option<Vec<Port>>,
    pub region_configurations: Option<Vec<BuildRegionParams>>,
    pub vm_size: Option<AzureVmSize>,
}

/// Full description of a build. Returned by `GetBuild` and by both
/// `CreateBuildWith*` calls.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetBuildResponse {
    pub build_id: Option<String>,
    pub build_name: Option<String>,
    pub container_flavor: Option<ContainerFlavor>,
    pub container_run_command: Option<String>,
    pub creation_time: Option<Timestamp>,
    pub custom_game_container_image: Option<ContainerImageReference>,
    pub game_asset_references: Option<Vec<AssetReference>>,
    pub game_certificate_references: Option<Vec<GameCertificateReference>>,
    pub metadata: Option<BTreeMap<String, String>>,
    pub multiplayer_server_count_per_vm: Option<i32>,
    pub ports: Option<Vec<Port>>,
    pub region_configurations: Option<Vec<BuildRegion>>,
    pub start_multiplayer_server_command: Option<String>,
    pub vm_size: Option<AzureVmSize>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetBuildRequest {
    pub build_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteBuildRequest {
    pub build_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateBuildRegionsRequest {
    pub build_id: Option<String>,
    pub build_regions: Option<Vec<BuildRegionParams>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListBuildSummariesRequest {
    pub page_size: Option<i32>,
    pub skip_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListBuildSummariesResponse {
    pub build_summaries: Option<Vec<BuildSummary>>,
    pub page_size: Option<i32>,
    pub skip_token: Option<String>,
}

// ---------------------------------------------------------------------------
// Servers
// ---------------------------------------------------------------------------

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestMultiplayerServerRequest {
    pub build_id: Option<String>,
    /// Regions to try, most preferred first.
    pub preferred_regions: Option<Vec<AzureRegion>>,
    pub session_cookie: Option<String>,
    pub session_id: Option<String>,
}

/// Connection details for an allocated server. Also the shape of
/// `GetMultiplayerServerDetails`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestMultiplayerServerResponse {
    pub connected_players: Option<Vec<ConnectedPlayer>>,
    #[serde(rename = "IPV4Address")]
    pub ipv4_address: Option<String>,
    pub last_state_transition_time: Option<Timestamp>,
    pub ports: Option<Vec<Port>>,
    pub region: Option<AzureRegion>,
    pub server_id: Option<String>,
    pub session_id: Option<String>,
    pub state: Option<String>,
    pub vm_id: Option<String>,
}

pub type GetMultiplayerServerDetailsResponse = RequestMultiplayerServerResponse;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetMultiplayerServerDetailsRequest {
    pub build_id: Option<String>,
    pub region: Option<AzureRegion>,
    pub session_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShutdownMultiplayerServerRequest {
    pub build_id: Option<String>,
    pub region: Option<AzureRegion>,
    pub session_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListMultiplayerServersRequest {
    pub build_id: Option<String>,
    pub page_size: Option<i32>,
    pub region: Option<AzureRegion>,
    pub skip_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListMultiplayerServersResponse {
    pub multiplayer_server_summaries: Option<Vec<MultiplayerServerSummary>>,
    pub page_size: Option<i32>,
    pub skip_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListQosServersRequest {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListQosServersResponse {
    pub page_size: Option<i32>,
    pub qos_servers: Option<Vec<QosServer>>,
    pub skip_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListVirtualMachineSummariesRequest {
    pub build_id: Option<String>,
    pub page_size: Option<i32>,
    pub region: Option<AzureRegion>,
    pub skip_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListVirtualMachineSummariesResponse {
    pub page_size: Option<i32>,
    pub skip_token: Option<String>,
    pub virtual_machines: Option<Vec<VirtualMachineSummary>>,
}

// ---------------------------------------------------------------------------
// Title enablement, assets, certificates and containers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnableMultiplayerServersForTitleRequest {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnableMultiplayerServersForTitleResponse {
    pub status: Option<TitleMultiplayerServerEnabledStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetTitleEnabledForMultiplayerServersStatusRequest {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetTitleEnabledForMultiplayerServersStatusResponse {
    pub status: Option<TitleMultiplayerServerEnabledStatus>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetAssetUploadUrlRequest {
    pub file_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetAssetUploadUrlResponse {
    pub asset_upload_url: Option<String>,
    pub file_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteAssetRequest {
    pub file_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAssetSummariesRequest {
    pub page_size: Option<i32>,
    pub skip_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAssetSummariesResponse {
    pub asset_summaries: Option<Vec<AssetSummary>>,
    pub page_size: Option<i32>,
    pub skip_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UploadCertificateRequest {
    pub game_certificate: Option<Certificate>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteCertificateRequest {
    pub name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListCertificateSummariesRequest {
    pub page_size: Option<i32>,
    pub skip_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListCertificateSummariesResponse {
    pub certificate_summaries: Option<Vec<CertificateSummary>>,
    pub page_size: Option<i32>,
    pub skip_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListContainerImagesRequest {
    pub page_size: Option<i32>,
    pub skip_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListContainerImagesResponse {
    pub images: Option<Vec<String>>,
    pub page_size: Option<i32>,
    pub skip_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListContainerImageTagsRequest {
    pub image_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListContainerImageTagsResponse {
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetContainerRegistryCredentialsRequest {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerRegistryCredentials {
    pub dns_name: Option<String>,
    pub password: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RolloverContainerRegistryCredentialsRequest {}

// ---------------------------------------------------------------------------
// Remote access
// ---------------------------------------------------------------------------

/// A temporary login on one virtual machine of a build.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRemoteUserRequest {
    pub build_id: Option<String>,
    pub expiration_time: Option<Timestamp>,
    pub region: Option<AzureRegion>,
    pub username: Option<String>,
    pub vm_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRemoteUserResponse {
    pub expiration_time: Option<Timestamp>,
    pub password: Option<String>,
    pub username: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteRemoteUserRequest {
    pub build_id: Option<String>,
    pub region: Option<AzureRegion>,
    pub username: Option<String>,
    pub vm_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetRemoteLoginEndpointRequest {
    pub build_id: Option<String>,
    pub region: Option<AzureRegion>,
    pub vm_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetRemoteLoginEndpointResponse {
    #[serde(rename = "IPV4Address")]
    pub ipv4_address: Option<String>,
    pub port: Option<i32>,
}
