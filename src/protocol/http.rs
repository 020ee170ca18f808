// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client for the bridge REST API.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;

use crate::bridge::{AuthorizedUser, BridgeEndpoint};
use crate::error::{ProtocolError, Result};
use crate::light::Light;
use crate::response::{RawResponse, decode_light, decode_light_map};
use crate::state::LightState;

// ============================================================================
// BridgeConfig - Connection parameters for a bridge
// ============================================================================

/// Configuration for a bridge client.
///
/// Binds one bridge endpoint to one authorized user. Each client built
/// from it talks to that bridge only.
///
/// # Examples
///
/// ```
/// use huebridge_lib::protocol::BridgeConfig;
/// use std::time::Duration;
///
/// let config = BridgeConfig::new("192.168.1.2", "1028d66426293e821ecfd9ef1a0731df")
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.endpoint().address(), "192.168.1.2");
/// assert_eq!(config.timeout(), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    endpoint: BridgeEndpoint,
    user: AuthorizedUser,
    timeout: Duration,
}

impl BridgeConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration for the given bridge and user.
    #[must_use]
    pub fn new(endpoint: impl Into<BridgeEndpoint>, user: impl Into<AuthorizedUser>) -> Self {
        Self {
            endpoint: endpoint.into(),
            user: user.into(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the bridge endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &BridgeEndpoint {
        &self.endpoint
    }

    /// Returns the authorized user.
    #[must_use]
    pub fn user(&self) -> &AuthorizedUser {
        &self.user
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creates a [`BridgeClient`] from this configuration.
    ///
    /// The client keeps no idle connections: every call opens its own
    /// connection and closes it when the response has been read.
    ///
    /// # Errors
    ///
    /// Returns error if the address is empty or the HTTP client cannot be
    /// created.
    pub fn into_client(self) -> std::result::Result<BridgeClient, ProtocolError> {
        if self.endpoint.address().is_empty() {
            return Err(ProtocolError::InvalidAddress(
                "bridge address is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(BridgeClient {
            bridge: Arc::new(self.endpoint),
            user: self.user,
            client,
        })
    }
}

// ============================================================================
// BridgeClient - Blocking calls against the bridge
// ============================================================================

/// Blocking client for one bridge and one user.
///
/// Every operation performs a single request and blocks until the whole
/// response has been read. Nothing is cached or retried; concurrent use
/// against the same light needs external ordering.
///
/// # Examples
///
/// ```no_run
/// use huebridge_lib::protocol::BridgeClient;
/// use huebridge_lib::state::LightState;
///
/// # fn example() -> huebridge_lib::Result<()> {
/// let client = BridgeClient::new("192.168.1.2", "1028d66426293e821ecfd9ef1a0731df")?;
///
/// for (id, light) in client.get_all_lights()? {
///     println!("{id}: {}", light.name());
/// }
///
/// let light = client.get_light(1)?;
/// client.push_state(&light, &LightState::hue_saturation().with_hue_saturation(30000, 200))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BridgeClient {
    bridge: Arc<BridgeEndpoint>,
    user: AuthorizedUser,
    client: Client,
}

impl BridgeClient {
    /// Creates a client for the bridge at `address` using `username`.
    ///
    /// # Errors
    ///
    /// Returns error if the address is empty or the HTTP client cannot be
    /// created.
    pub fn new(
        address: impl Into<String>,
        username: impl Into<String>,
    ) -> std::result::Result<Self, ProtocolError> {
        BridgeConfig::new(
            BridgeEndpoint::new(address),
            AuthorizedUser::new(username),
        )
        .into_client()
    }

    /// Returns the bridge this client talks to.
    #[must_use]
    pub fn bridge(&self) -> &BridgeEndpoint {
        &self.bridge
    }

    /// Returns the user this client authenticates as.
    #[must_use]
    pub fn user(&self) -> &AuthorizedUser {
        &self.user
    }

    fn api_url(&self) -> String {
        format!(
            "{}/api/{}",
            self.bridge.base_url(),
            self.user.path_segment()
        )
    }

    /// URL of the light listing.
    fn lights_url(&self) -> String {
        format!("{}/lights/", self.api_url())
    }

    /// URL of a single light.
    fn light_url(&self, id: u32) -> String {
        format!("{}/lights/{id}", self.api_url())
    }

    /// URL of a light's state.
    fn state_url(&self, id: u32) -> String {
        format!("{}/lights/{id}/state", self.api_url())
    }

    /// Pushes a state to a light.
    ///
    /// An off state is sent as `{"on":false}` only. The response body is
    /// returned as-is; it is not inspected.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or the bridge answers
    /// with a non-success status.
    pub fn push_state(&self, light: &Light, state: &LightState) -> Result<RawResponse> {
        self.push_state_to(light.id(), state)
    }

    /// Pushes a state to the light with the given id.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or the bridge answers
    /// with a non-success status.
    pub fn push_state_to(&self, id: u32, state: &LightState) -> Result<RawResponse> {
        let url = self.state_url(id);
        let body = state.to_wire_json();

        tracing::debug!(url = %url, body = %body, "Pushing light state");

        let response = self
            .client
            .put(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(ProtocolError::Http)?;

        Ok(RawResponse::new(read_body(response)?))
    }

    /// Fetches every light known to the bridge.
    ///
    /// The lights carry their metadata only; fetch a light with
    /// [`get_light`](Self::get_light) to read its state.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` on transport failure and `ParseError` if the
    /// response cannot be decoded.
    pub fn get_all_lights(&self) -> Result<BTreeMap<u32, Light>> {
        let raw = self.get(&self.lights_url())?;
        let lights = decode_light_map(&raw, &self.bridge)?;

        tracing::debug!(count = lights.len(), "Decoded light listing");

        Ok(lights)
    }

    /// Fetches one light, including its state.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` on transport failure and `ParseError` if the
    /// response cannot be decoded.
    pub fn get_light(&self, id: u32) -> Result<Light> {
        let raw = self.get(&self.light_url(id))?;
        Ok(decode_light(&raw, id, &self.bridge)?)
    }

    fn get(&self, url: &str) -> std::result::Result<String, ProtocolError> {
        tracing::debug!(url = %url, "Fetching from bridge");

        let response = self.client.get(url).send().map_err(ProtocolError::Http)?;
        read_body(response)
    }
}

/// Checks the status and reads the whole body as text.
fn read_body(response: Response) -> std::result::Result<String, ProtocolError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ProtocolError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        });
    }

    let body = response.text().map_err(ProtocolError::Http)?;

    tracing::debug!(status = status.as_u16(), body = %body, "Received bridge response");

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> BridgeClient {
        BridgeClient::new("192.168.1.2", "newdeveloper").unwrap()
    }

    #[test]
    fn build_urls() {
        let client = client();
        assert_eq!(
            client.lights_url(),
            "http://192.168.1.2/api/newdeveloper/lights/"
        );
        assert_eq!(
            client.light_url(7),
            "http://192.168.1.2/api/newdeveloper/lights/7"
        );
        assert_eq!(
            client.state_url(3),
            "http://192.168.1.2/api/newdeveloper/lights/3/state"
        );
    }

    #[test]
    fn build_urls_with_port() {
        let client = BridgeClient::new("http://127.0.0.1:8080/", "user").unwrap();
        assert_eq!(client.bridge().address(), "127.0.0.1:8080");
        assert_eq!(
            client.light_url(1),
            "http://127.0.0.1:8080/api/user/lights/1"
        );
    }

    #[test]
    fn empty_address_is_rejected() {
        let result = BridgeClient::new("  ", "user");
        assert!(matches!(result, Err(ProtocolError::InvalidAddress(_))));
    }

    #[test]
    fn config_default_values() {
        let config = BridgeConfig::new("192.168.1.2", "user");
        assert_eq!(config.endpoint().address(), "192.168.1.2");
        assert_eq!(config.user().as_str(), "user");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn config_into_client_keeps_endpoint() {
        let endpoint = BridgeEndpoint::new("10.0.0.5").with_name("Hallway");
        let client = BridgeConfig::new(endpoint, AuthorizedUser::new("user"))
            .with_timeout(Duration::from_secs(2))
            .into_client()
            .unwrap();

        assert_eq!(client.bridge().name(), Some("Hallway"));
        assert_eq!(client.user().as_str(), "user");
    }
}
