// JSON REST plumbing shared by the account and workspace clients.
//
// Owns the `reqwest::Client`, joins endpoint paths onto the host URL,
// and turns non-2xx responses into structured `Error`s.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;

// ── Error response shape ────────────────────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

// ── Client ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub(crate) struct RestClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RestClient {
    pub(crate) fn new(http: reqwest::Client, host: &Url) -> Self {
        Self {
            http,
            base_url: host.clone(),
        }
    }

    // ── URL builder ─────────────────────────────────────────────────

    /// Append path segments to the host URL. Each segment is percent-encoded,
    /// so identifiers can never escape their position in the path.
    fn url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // ── HTTP verbs ──────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, Error> {
        let url = self.url(segments)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        handle_response(resp).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(segments)?;
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        handle_response(resp).await
    }

    pub(crate) async fn patch_no_response<B: Serialize + Sync>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<(), Error> {
        let url = self.url(segments)?;
        debug!("PATCH {url}");

        let resp = self.http.patch(url).json(body).send().await?;
        handle_empty(resp).await
    }

    pub(crate) async fn delete(&self, segments: &[&str]) -> Result<(), Error> {
        let url = self.url(segments)?;
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        handle_empty(resp).await
    }
}

// ── Response handling ───────────────────────────────────────────────

async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let status = resp.status();
    if status.is_success() {
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    } else {
        Err(parse_error(status, resp).await)
    }
}

async fn handle_empty(resp: reqwest::Response) -> Result<(), Error> {
    let status = resp.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(parse_error(status, resp).await)
    }
}

async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
    let raw = resp.text().await.unwrap_or_default();
    let parsed = serde_json::from_str::<ErrorResponse>(&raw).ok();

    let (error_code, message) = match parsed {
        Some(err) => (
            err.error_code,
            err.message.unwrap_or_else(|| status.to_string()),
        ),
        None if raw.is_empty() => (None, status.to_string()),
        None => (None, raw),
    };

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Error::Unauthorized {
            status: status.as_u16(),
            message,
        };
    }

    Error::Api {
        status: status.as_u16(),
        error_code,
        message,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(host: &str) -> RestClient {
        RestClient::new(reqwest::Client::new(), &Url::parse(host).unwrap())
    }

    #[test]
    fn joins_segments_onto_bare_host() {
        let url = client("https://example.com")
            .url(&["api", "2.0", "ip-access-lists"])
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/2.0/ip-access-lists");
    }

    #[test]
    fn keeps_host_path_prefix() {
        let url = client("https://example.com/proxy/")
            .url(&["api", "2.0", "ip-access-lists"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/proxy/api/2.0/ip-access-lists"
        );
    }

    #[test]
    fn encodes_identifier_segments() {
        let url = client("https://example.com")
            .url(&["ip-access-lists", "a/b"])
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com/ip-access-lists/a%2Fb");
    }
}
