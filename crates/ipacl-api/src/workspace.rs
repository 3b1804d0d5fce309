// Workspace-scoped IP access list client.
//
// Base path: api/2.0/ip-access-lists
// Auth: Authorization: Bearer <token>

use secrecy::SecretString;
use url::Url;

use crate::auth::bearer_headers;
use crate::error::Error;
use crate::rest::RestClient;
use crate::transport::TransportConfig;
use crate::types::{
    CreateIpAccessList, CreateIpAccessListResponse, IpAccessListInfo, IpAccessListResponse,
    ListId, UpdateIpAccessList,
};

const COLLECTION: [&str; 3] = ["api", "2.0", "ip-access-lists"];

/// Async client for a single workspace's IP access lists.
#[derive(Debug, Clone)]
pub struct WorkspaceClient {
    rest: RestClient,
}

impl WorkspaceClient {
    /// Build from a workspace host URL and a bearer token.
    pub fn from_token(
        host: &Url,
        token: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client_with_headers(bearer_headers(token)?)?;
        Ok(Self::from_reqwest(host, http))
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(host: &Url, http: reqwest::Client) -> Self {
        Self {
            rest: RestClient::new(http, host),
        }
    }

    // ── IP access lists ─────────────────────────────────────────────

    /// Create a list and return the identifier the service assigned.
    pub async fn create(&self, request: &CreateIpAccessList) -> Result<ListId, Error> {
        let resp: CreateIpAccessListResponse = self.rest.post(&COLLECTION, request).await?;
        Ok(resp.ip_access_list.list_id)
    }

    pub async fn get(&self, id: &ListId) -> Result<IpAccessListInfo, Error> {
        let resp: IpAccessListResponse = self.rest.get(&item_path(id)).await?;
        Ok(resp.ip_access_list)
    }

    pub async fn update(&self, request: &UpdateIpAccessList) -> Result<(), Error> {
        self.rest
            .patch_no_response(&item_path(&request.ip_access_list_id), request)
            .await
    }

    pub async fn delete(&self, id: &ListId) -> Result<(), Error> {
        self.rest.delete(&item_path(id)).await
    }
}

fn item_path(id: &ListId) -> [&str; 4] {
    let [api, version, lists] = COLLECTION;
    [api, version, lists, id.as_str()]
}
