//! Site configuration loaded from environment variables.

use crate::error::{Result, SiteError};

pub const DEFAULT_CLIENT_ID: &str = "YOUR_BOT_ID";
/// Manage Channels, View Channels, Send Messages, Manage Roles, Use Slash Commands.
pub const DEFAULT_PERMISSIONS: u64 = 2147609616;
pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/Crizter/CrizModo-DiscordBot";
pub const DEFAULT_DISCORD_INVITE: &str = "https://discord.gg/CBCBQqaA2b";
pub const DEFAULT_SUPPORT_EMAIL: &str = "harshsharma90866@gmail.com";

/// Values substituted into outbound links.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Discord application client id (from CRIZMODO_BOT_CLIENT_ID)
    pub client_id: String,
    /// Permission bitmask requested on invite (from CRIZMODO_BOT_PERMISSIONS)
    pub permissions: u64,
    /// Source repository (from CRIZMODO_REPOSITORY_URL)
    pub repository_url: String,
    /// Community server invite (from CRIZMODO_DISCORD_INVITE)
    pub discord_invite: String,
    /// Support mailbox (from CRIZMODO_SUPPORT_EMAIL)
    pub support_email: String,
}

impl SiteConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary lookup, falling back to the
    /// defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let permissions = match lookup("CRIZMODO_BOT_PERMISSIONS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                SiteError::InvalidConfig(format!(
                    "CRIZMODO_BOT_PERMISSIONS must be an unsigned integer, got {:?}",
                    raw
                ))
            })?,
            None => defaults.permissions,
        };

        Ok(Self {
            client_id: lookup("CRIZMODO_BOT_CLIENT_ID").unwrap_or(defaults.client_id),
            permissions,
            repository_url: lookup("CRIZMODO_REPOSITORY_URL").unwrap_or(defaults.repository_url),
            discord_invite: lookup("CRIZMODO_DISCORD_INVITE").unwrap_or(defaults.discord_invite),
            support_email: lookup("CRIZMODO_SUPPORT_EMAIL").unwrap_or(defaults.support_email),
        })
    }

    /// OAuth2 URL that adds the bot to a server.
    pub fn invite_url(&self) -> String {
        format!(
            "https://discord.com/api/oauth2/authorize?client_id={}&permissions={}&scope=bot",
            self.client_id, self.permissions
        )
    }

    /// OAuth2 URL including the application commands scope, as shown in
    /// the self-hosting guide.
    pub fn developer_invite_url(&self) -> String {
        format!(
            "https://discord.com/oauth2/authorize?client_id={}&permissions={}&integration_type=0&scope=bot+applications.commands",
            self.client_id, self.permissions
        )
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.support_email)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            client_id: DEFAULT_CLIENT_ID.to_string(),
            permissions: DEFAULT_PERMISSIONS,
            repository_url: DEFAULT_REPOSITORY_URL.to_string(),
            discord_invite: DEFAULT_DISCORD_INVITE.to_string(),
            support_email: DEFAULT_SUPPORT_EMAIL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_variables_use_defaults() {
        let config = SiteConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn variables_override_defaults() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("CRIZMODO_BOT_CLIENT_ID", "1234"),
            ("CRIZMODO_BOT_PERMISSIONS", "8"),
        ]))
        .unwrap();
        assert_eq!(config.client_id, "1234");
        assert_eq!(
            config.invite_url(),
            "https://discord.com/api/oauth2/authorize?client_id=1234&permissions=8&scope=bot"
        );
    }

    #[test]
    fn non_numeric_permissions_are_rejected() {
        let err = SiteConfig::from_lookup(lookup_from(&[("CRIZMODO_BOT_PERMISSIONS", "all")]))
            .unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfig(_)));
    }

    #[test]
    fn mailto_prefixes_address() {
        let config = SiteConfig::default();
        assert_eq!(config.mailto(), "mailto:harshsharma90866@gmail.com");
    }
}
