//! Age gate and PWA install prompt policies.

use crate::storage::KeyValueStore;

pub const AGE_VERIFIED_KEY: &str = "age-verified";

/// Declining sends the visitor here.
pub const EXIT_URL: &str = "https://www.google.com";

/// The modal blocking content until the visitor self-attests being of age.
pub struct AgeGate<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> AgeGate<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn is_verified(&self) -> bool {
        self.store.get(AGE_VERIFIED_KEY).as_deref() == Some("true")
    }

    pub fn confirm(&mut self) {
        self.store.set(AGE_VERIFIED_KEY, "true");
    }

    /// Nothing is recorded on decline; the visitor is redirected off-site.
    pub fn decline(&self) -> &'static str {
        EXIT_URL
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

pub const INTERACTIONS_KEY: &str = "pwa-interactions";
pub const DISMISSED_AT_KEY: &str = "pwa-install-dismissed";

/// Interactions required before the install prompt may appear.
pub const MIN_INTERACTIONS: u32 = 2;

/// Dismissal cooldown: 24 hours.
pub const DISMISS_COOLDOWN_MS: u64 = 24 * 60 * 60 * 1000;

/// Install-prompt eligibility policy.
pub struct InstallPrompt<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> InstallPrompt<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn interaction_count(&self) -> u32 {
        self.store
            .get(INTERACTIONS_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    pub fn record_interaction(&mut self) -> u32 {
        let count = self.interaction_count() + 1;
        self.store.set(INTERACTIONS_KEY, &count.to_string());
        count
    }

    pub fn dismiss(&mut self, now_ms: u64) {
        self.store.set(DISMISSED_AT_KEY, &now_ms.to_string());
    }

    pub fn should_show(&self, now_ms: u64, installable: bool, installed: bool) -> bool {
        if !installable || installed || self.interaction_count() < MIN_INTERACTIONS {
            return false;
        }
        match self
            .store
            .get(DISMISSED_AT_KEY)
            .and_then(|v| v.parse::<u64>().ok())
        {
            Some(dismissed_at) => now_ms.saturating_sub(dismissed_at) >= DISMISS_COOLDOWN_MS,
            None => true,
        }
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_age_gate_unverified_by_default() {
        let gate = AgeGate::new(MemoryStore::new());
        assert!(!gate.is_verified());
    }

    #[test]
    fn test_age_gate_confirmation_persists() {
        let mut gate = AgeGate::new(MemoryStore::new());
        gate.confirm();
        assert!(gate.is_verified());

        let reopened = AgeGate::new(gate.into_store());
        assert!(reopened.is_verified());
    }

    #[test]
    fn test_decline_redirects_off_site_without_recording() {
        let gate = AgeGate::new(MemoryStore::new());
        assert_eq!(gate.decline(), EXIT_URL);
        assert!(!gate.is_verified());
    }

    #[test]
    fn test_prompt_requires_interactions() {
        let mut prompt = InstallPrompt::new(MemoryStore::new());
        assert!(!prompt.should_show(0, true, false));
        prompt.record_interaction();
        assert!(!prompt.should_show(0, true, false));
        prompt.record_interaction();
        assert!(prompt.should_show(0, true, false));
    }

    #[test]
    fn test_prompt_hidden_when_not_installable_or_installed() {
        let mut prompt = InstallPrompt::new(MemoryStore::new());
        prompt.record_interaction();
        prompt.record_interaction();
        assert!(!prompt.should_show(0, false, false));
        assert!(!prompt.should_show(0, true, true));
    }

    #[test]
    fn test_dismissal_cooldown() {
        let mut prompt = InstallPrompt::new(MemoryStore::new());
        prompt.record_interaction();
        prompt.record_interaction();

        prompt.dismiss(1_000);
        assert!(!prompt.should_show(1_000 + DISMISS_COOLDOWN_MS - 1, true, false));
        assert!(prompt.should_show(1_000 + DISMISS_COOLDOWN_MS, true, false));
    }

    #[test]
    fn test_interaction_count_survives_reload() {
        let mut prompt = InstallPrompt::new(MemoryStore::new());
        prompt.record_interaction();
        prompt.record_interaction();
        prompt.record_interaction();

        let reopened = InstallPrompt::new(prompt.into_store());
        assert_eq!(reopened.interaction_count(), 3);
    }
}
