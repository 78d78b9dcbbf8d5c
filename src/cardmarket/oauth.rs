//! OAuth 1.0a request signing (HMAC-SHA1) as required by the Cardmarket API

use crate::config::Credentials;
use crate::error::{InventoryError, Result};
use base64::{engine::general_purpose, Engine as _};
use hmac::{Hmac, Mac};
use sha1::Sha1;

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";

/// Builds `Authorization` headers for signed requests
pub struct OAuthSigner {
    credentials: Credentials,
}

impl OAuthSigner {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Signs a request with a fresh nonce and the current timestamp.
    ///
    /// `url` must not contain a query string; query parameters go in `query`.
    pub fn authorization_header(
        &self,
        method: &str,
        url: &str,
        query: &[(String, String)],
    ) -> Result<String> {
        let nonce = uuid::Uuid::new_v4().simple().to_string();
        let timestamp = chrono::Utc::now().timestamp().to_string();
        self.header_with(method, url, query, &nonce, &timestamp)
    }

    pub(crate) fn header_with(
        &self,
        method: &str,
        url: &str,
        query: &[(String, String)],
        nonce: &str,
        timestamp: &str,
    ) -> Result<String> {
        let oauth_params = self.oauth_params(nonce, timestamp);

        let mut all_params = oauth_params.clone();
        all_params.extend(query.iter().cloned());

        let base = signature_base_string(method, url, &all_params);
        let signature = self.sign(&base)?;

        let mut header_params = oauth_params;
        header_params.push(("oauth_signature".to_string(), signature));

        let mut header = format!("OAuth realm=\"{}\"", url);
        for (key, value) in &header_params {
            header.push_str(&format!(", {}=\"{}\"", key, encode(value)));
        }
        Ok(header)
    }

    fn oauth_params(&self, nonce: &str, timestamp: &str) -> Vec<(String, String)> {
        vec![
            ("oauth_consumer_key".to_string(), self.credentials.app_token.clone()),
            ("oauth_token".to_string(), self.credentials.access_token.clone()),
            ("oauth_nonce".to_string(), nonce.to_string()),
            ("oauth_timestamp".to_string(), timestamp.to_string()),
            ("oauth_signature_method".to_string(), SIGNATURE_METHOD.to_string()),
            ("oauth_version".to_string(), OAUTH_VERSION.to_string()),
        ]
    }

    fn sign(&self, base: &str) -> Result<String> {
        let key = format!(
            "{}&{}",
            encode(&self.credentials.app_secret),
            encode(&self.credentials.access_token_secret)
        );
        let mut mac = Hmac::<Sha1>::new_from_slice(key.as_bytes())
            .map_err(|e| InventoryError::Config(format!("invalid OAuth signing key: {}", e)))?;
        mac.update(base.as_bytes());
        Ok(general_purpose::STANDARD.encode(mac.finalize().into_bytes()))
    }
}

/// `METHOD&url&params` with parameters encoded, then sorted by key and value
pub(crate) fn signature_base_string(
    method: &str,
    url: &str,
    params: &[(String, String)],
) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (encode(k), encode(v)))
        .collect();
    encoded.sort();

    let param_string = encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        encode(url),
        encode(&param_string)
    )
}

fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
