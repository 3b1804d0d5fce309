use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;

/// Default headers carrying a bearer token.
///
/// The header value is flagged sensitive so it never shows up in
/// `Debug` output of the request.
pub(crate) fn bearer_headers(token: &SecretString) -> Result<HeaderMap, Error> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
        .map_err(|e| Error::InvalidToken(format!("invalid token header value: {e}")))?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}
