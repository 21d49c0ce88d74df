//! Access-key gate checked once before a client connects

use async_trait::async_trait;
use std::collections::HashSet;

/// Decides whether an access key may construct a client
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// `true` if `access_key` is allowed
    async fn authenticate(&self, access_key: &str) -> bool;
}

/// Accepts any key that is not blank
#[derive(Clone, Copy, Debug, Default)]
pub struct NonEmptyKey;

#[async_trait]
impl Authenticator for NonEmptyKey {
    async fn authenticate(&self, access_key: &str) -> bool {
        !access_key.trim().is_empty()
    }
}

/// Accepts only keys from a fixed set
#[derive(Clone, Debug, Default)]
pub struct AllowList {
    keys: HashSet<String>,
}

impl AllowList {
    /// Create an allow list from the given keys
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl Authenticator for AllowList {
    async fn authenticate(&self, access_key: &str) -> bool {
        self.keys.contains(access_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_non_empty_key() {
        assert!(NonEmptyKey.authenticate("ak-123").await);
        assert!(!NonEmptyKey.authenticate("").await);
        assert!(!NonEmptyKey.authenticate("   ").await);
    }

    #[tokio::test]
    async fn test_allow_list() {
        let gate = AllowList::new(["ak-1", "ak-2"]);
        assert!(gate.authenticate("ak-2").await);
        assert!(!gate.authenticate("ak-3").await);
    }
}
