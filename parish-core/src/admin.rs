//! Admin capability checks.
//!
//! Whether a user may see the admin views is answered by an external
//! procedure keyed by user id. Answers are reused for a short TTL so a
//! page render doesn't hit the backend once per widget.

use std::time::Duration;

use moka::sync::Cache;

use crate::error::ParishResult;

pub const DEFAULT_ADMIN_CACHE_TTL: Duration = Duration::from_secs(60);

pub trait AdminCheck: Send + Sync {
    fn is_admin(&self, user_id: &str) -> ParishResult<bool>;
}

/// Admin list taken from configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigAdmins {
    admins: Vec<String>,
}

impl ConfigAdmins {
    pub fn new(admins: Vec<String>) -> Self {
        ConfigAdmins { admins }
    }
}

impl AdminCheck for ConfigAdmins {
    fn is_admin(&self, user_id: &str) -> ParishResult<bool> {
        Ok(self.admins.iter().any(|a| a == user_id))
    }
}

/// Wraps another check and remembers each answer for `ttl`.
///
/// Errors from the inner check are returned as-is and never cached.
pub struct CachedAdminCheck<C> {
    inner: C,
    answers: Cache<String, bool>,
}

impl<C: AdminCheck> CachedAdminCheck<C> {
    pub fn new(inner: C, ttl: Duration) -> Self {
        CachedAdminCheck {
            inner,
            answers: Cache::builder().max_capacity(10_000).time_to_live(ttl).build(),
        }
    }

    /// Drop every cached answer, e.g. after roles change.
    pub fn clear(&self) {
        self.answers.invalidate_all();
    }
}

impl<C: AdminCheck> AdminCheck for CachedAdminCheck<C> {
    fn is_admin(&self, user_id: &str) -> ParishResult<bool> {
        if let Some(answer) = self.answers.get(user_id) {
            return Ok(answer);
        }

        let answer = self.inner.is_admin(user_id)?;
        tracing::debug!(user_id, answer, "admin check");
        self.answers.insert(user_id.to_string(), answer);

        Ok(answer)
    }
}
