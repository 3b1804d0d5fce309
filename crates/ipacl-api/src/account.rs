// Account-scoped IP access list client.
//
// Base path: api/2.0/accounts/{account_id}/ip-access-lists
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

/// Async client for the account-wide IP access lists.
///
/// Same method shape as [`WorkspaceClient`](crate::WorkspaceClient); every
/// path is prefixed with the account identifier.
#[derive(Debug, Clone)]
pub struct AccountClient {
    rest: RestClient,
    account_id: String,
}

impl AccountClient {
    /// Build from an accounts host URL, the account id, and a bearer token.
    pub fn from_token(
        host: &Url,
        account_id: impl Into<String>,
        token: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client_with_headers(bearer_headers(token)?)?;
        Ok(Self::from_reqwest(host, account_id, http))
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(host: &Url, account_id: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            rest: RestClient::new(http, host),
            account_id: account_id.into(),
        }
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    fn collection(&self) -> [&str; 5] {
        ["api", "2.0", "accounts", &self.account_id, "ip-access-lists"]
    }

    fn item<'a>(&'a self, id: &'a ListId) -> [&'a str; 6] {
        let [api, version, accounts, account, lists] = self.collection();
        [api, version, accounts, account, lists, id.as_str()]
    }

    // ── IP access lists ─────────────────────────────────────────────

    /// Create a list and return the identifier the service assigned.
    pub async fn create(&self, request: &CreateIpAccessList) -> Result<ListId, Error> {
        let resp: CreateIpAccessListResponse = self.rest.post(&self.collection(), request).await?;
        Ok(resp.ip_access_list.list_id)
    }

    pub async fn get(&self, id: &ListId) -> Result<IpAccessListInfo, Error> {
        let resp: IpAccessListResponse = self.rest.get(&self.item(id)).await?;
        Ok(resp.ip_access_list)
    }

    pub async fn update(&self, request: &UpdateIpAccessList) -> Result<(), Error> {
        self.rest
            .patch_no_response(&self.item(&request.ip_access_list_id), request)
            .await
    }

    pub async fn delete(&self, id: &ListId) -> Result<(), Error> {
        self.rest.delete(&self.item(id)).await
    }
}
