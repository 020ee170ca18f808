// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bridge endpoint and user token.
//!
//! Discovery and pairing happen elsewhere; this module only holds what they
//! produce: the bridge's network address and an authorized user token.

use std::fmt;

/// Network location and descriptive configuration of a bridge.
///
/// Only [`address`](Self::address) is used to route requests. The other
/// fields are carried for display and are never interpreted.
///
/// # Examples
///
/// ```
/// use huebridge_lib::BridgeEndpoint;
///
/// let bridge = BridgeEndpoint::new("http://192.168.1.2/")
///     .with_name("Philips hue")
///     .with_dhcp(true);
///
/// assert_eq!(bridge.address(), "192.168.1.2");
/// assert_eq!(bridge.name(), Some("Philips hue"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BridgeEndpoint {
    address: String,
    name: Option<String>,
    mac_address: Option<String>,
    network_mask: Option<String>,
    gateway: Option<String>,
    dhcp: Option<bool>,
    proxy_address: Option<String>,
    proxy_port: Option<u16>,
    whitelist: Vec<String>,
}

impl BridgeEndpoint {
    /// Creates an endpoint for the given host, IP address or `host:port`.
    ///
    /// A leading `http://` and trailing slashes are stripped.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        let address = address.into();
        let trimmed = address.trim();
        let trimmed = trimmed.strip_prefix("http://").unwrap_or(trimmed);

        Self {
            address: trimmed.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Sets the bridge's friendly name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the MAC address.
    #[must_use]
    pub fn with_mac_address(mut self, mac: impl Into<String>) -> Self {
        self.mac_address = Some(mac.into());
        self
    }

    /// Sets the network mask.
    #[must_use]
    pub fn with_network_mask(mut self, mask: impl Into<String>) -> Self {
        self.network_mask = Some(mask.into());
        self
    }

    /// Sets the gateway address.
    #[must_use]
    pub fn with_gateway(mut self, gateway: impl Into<String>) -> Self {
        self.gateway = Some(gateway.into());
        self
    }

    /// Sets whether the bridge got its address over DHCP.
    #[must_use]
    pub fn with_dhcp(mut self, dhcp: bool) -> Self {
        self.dhcp = Some(dhcp);
        self
    }

    /// Sets the proxy the bridge uses.
    #[must_use]
    pub fn with_proxy(mut self, address: impl Into<String>, port: u16) -> Self {
        self.proxy_address = Some(address.into());
        self.proxy_port = Some(port);
        self
    }

    /// Sets the list of client identifiers the bridge has authorized.
    #[must_use]
    pub fn with_whitelist(mut self, whitelist: Vec<String>) -> Self {
        self.whitelist = whitelist;
        self
    }

    /// Returns the address requests are sent to.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the friendly name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the MAC address.
    #[must_use]
    pub fn mac_address(&self) -> Option<&str> {
        self.mac_address.as_deref()
    }

    /// Returns the network mask.
    #[must_use]
    pub fn network_mask(&self) -> Option<&str> {
        self.network_mask.as_deref()
    }

    /// Returns the gateway address.
    #[must_use]
    pub fn gateway(&self) -> Option<&str> {
        self.gateway.as_deref()
    }

    /// Returns whether the bridge uses DHCP, if known.
    #[must_use]
    pub fn dhcp(&self) -> Option<bool> {
        self.dhcp
    }

    /// Returns the proxy address and port, if set.
    #[must_use]
    pub fn proxy(&self) -> Option<(&str, u16)> {
        self.proxy_address.as_deref().zip(self.proxy_port)
    }

    /// Returns the authorized client identifiers.
    #[must_use]
    pub fn whitelist(&self) -> &[String] {
        &self.whitelist
    }

    /// Returns the base URL of the bridge.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.address)
    }
}

impl fmt::Display for BridgeEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} ({})", self.address),
            None => f.write_str(&self.address),
        }
    }
}

impl From<&str> for BridgeEndpoint {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}

impl From<String> for BridgeEndpoint {
    fn from(address: String) -> Self {
        Self::new(address)
    }
}

/// Access token issued by the bridge's pairing flow.
///
/// The token is opaque: it is placed in request paths as-is and never
/// validated or refreshed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthorizedUser(String);

impl AuthorizedUser {
    /// Wraps a username issued by the bridge.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self(username.into())
    }

    /// Returns the username.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the username encoded for use as a URL path segment.
    #[must_use]
    pub fn path_segment(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl From<&str> for AuthorizedUser {
    fn from(username: &str) -> Self {
        Self::new(username)
    }
}

impl From<String> for AuthorizedUser {
    fn from(username: String) -> Self {
        Self(username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_normalizes_address() {
        assert_eq!(BridgeEndpoint::new("192.168.1.2").address(), "192.168.1.2");
        assert_eq!(
            BridgeEndpoint::new(" http://192.168.1.2:8080/ ").address(),
            "192.168.1.2:8080"
        );
        assert_eq!(
            BridgeEndpoint::new("bridge.local").base_url(),
            "http://bridge.local"
        );
    }

    #[test]
    fn endpoint_descriptive_fields() {
        let bridge = BridgeEndpoint::new("10.0.0.5")
            .with_name("Hallway")
            .with_mac_address("00:17:88:26:3f:9a")
            .with_network_mask("255.255.255.0")
            .with_gateway("10.0.0.1")
            .with_dhcp(false)
            .with_proxy("10.0.0.9", 3128)
            .with_whitelist(vec!["abc".to_string(), "def".to_string()]);

        assert_eq!(bridge.mac_address(), Some("00:17:88:26:3f:9a"));
        assert_eq!(bridge.network_mask(), Some("255.255.255.0"));
        assert_eq!(bridge.gateway(), Some("10.0.0.1"));
        assert_eq!(bridge.dhcp(), Some(false));
        assert_eq!(bridge.proxy(), Some(("10.0.0.9", 3128)));
        assert_eq!(bridge.whitelist().len(), 2);
        assert_eq!(bridge.to_string(), "Hallway (10.0.0.5)");
        assert_eq!(bridge.base_url(), "http://10.0.0.5");
    }

    #[test]
    fn user_path_segment() {
        let user = AuthorizedUser::from("1028d66426293e821ecfd9ef1a0731df");
        assert_eq!(user.as_str(), "1028d66426293e821ecfd9ef1a0731df");
        assert_eq!(user.path_segment(), "1028d66426293e821ecfd9ef1a0731df");

        let odd = AuthorizedUser::new("a b/c");
        assert_eq!(odd.path_segment(), "a%20b%2Fc");
    }
}
