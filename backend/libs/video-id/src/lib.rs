//! Permanent video identifier utility
//!
//! Generates and validates the opaque, non-sequential identifiers used in
//! shareable video URLs, and migrates the handful of legacy numeric ids that
//! predate them.
//!
//! Format: 13 characters drawn from `[A-Za-z0-9]` (62^13 ≈ 3.2e23 values).

use rand::rngs::OsRng;
use rand::{Rng, RngCore};

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of a permanent video id.
pub const ID_LENGTH: usize = 13;

/// Legacy numeric id → permanent id, fixed for the five seeded videos.
const LEGACY_MAPPINGS: [(&str, &str); 5] = [
    ("1", "a8b92cDdX01p1"),
    ("2", "k7M3nP9qR5sT2"),
    ("3", "h4L6wE8vY2uI3"),
    ("4", "f9A1zN7mQ3xC4"),
    ("5", "j2K5bG8tV6oH5"),
];

/// Generate a new permanent video id.
///
/// Bytes come from the OS cryptographic RNG. If the OS RNG is unavailable the
/// thread-local generator is used instead and the degraded mode is logged.
///
/// # Examples
///
/// ```
/// let id = video_id::generate_video_id();
/// assert!(video_id::is_valid_video_id(&id));
/// ```
pub fn generate_video_id() -> String {
    let mut bytes = [0u8; ID_LENGTH];
    match OsRng.try_fill_bytes(&mut bytes) {
        Ok(()) => bytes
            .iter()
            .map(|b| CHARSET[(*b as usize) % CHARSET.len()] as char)
            .collect(),
        Err(err) => {
            tracing::warn!(error = %err, "OS crypto RNG unavailable, using thread RNG fallback");
            let mut rng = rand::thread_rng();
            (0..ID_LENGTH)
                .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
                .collect()
        }
    }
}

/// Validate the permanent id format: exactly 13 ASCII alphanumeric characters.
pub fn is_valid_video_id(id: &str) -> bool {
    id.len() == ID_LENGTH && id.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Convert a legacy numeric id to its permanent id.
///
/// The five seeded videos map to predetermined ids so old links keep
/// resolving. Any other input yields a freshly generated id; that id matches
/// no stored video, so callers treating it as a lookup key will miss. The
/// mismatch is logged rather than surfaced as an error to keep the redirect
/// path total.
pub fn migrate_legacy_id(numeric_id: &str) -> String {
    if let Some((_, permanent)) = LEGACY_MAPPINGS.iter().find(|(n, _)| *n == numeric_id) {
        return (*permanent).to_string();
    }
    tracing::warn!(legacy_id = %numeric_id, "unmapped legacy id, generating a fresh permanent id");
    generate_video_id()
}

/// Reverse lookup: permanent id → legacy numeric id, for the seeded videos.
pub fn legacy_id_for(permanent_id: &str) -> Option<&'static str> {
    LEGACY_MAPPINGS
        .iter()
        .find(|(_, p)| *p == permanent_id)
        .map(|(n, _)| *n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_is_valid() {
        for _ in 0..100 {
            let id = generate_video_id();
            assert_eq!(id.len(), ID_LENGTH);
            assert!(id.bytes().all(|b| b.is_ascii_alphanumeric()));
            assert!(is_valid_video_id(&id));
        }
    }

    #[test]
    fn test_generated_ids_differ() {
        let a = generate_video_id();
        let b = generate_video_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_is_valid_rejects_wrong_length() {
        assert!(!is_valid_video_id(""));
        assert!(!is_valid_video_id("a8b92cDdX01p"));
        assert!(!is_valid_video_id("a8b92cDdX01p12"));
    }

    #[test]
    fn test_is_valid_rejects_non_alphanumeric() {
        assert!(!is_valid_video_id("a8b92cDdX01p!"));
        assert!(!is_valid_video_id("a8b92cDdX01 1"));
        assert!(!is_valid_video_id("a8b92cDdX01-1"));
    }

    #[test]
    fn test_migrate_seeded_ids() {
        assert_eq!(migrate_legacy_id("1"), "a8b92cDdX01p1");
        assert_eq!(migrate_legacy_id("2"), "k7M3nP9qR5sT2");
        assert_eq!(migrate_legacy_id("3"), "h4L6wE8vY2uI3");
        assert_eq!(migrate_legacy_id("4"), "f9A1zN7mQ3xC4");
        assert_eq!(migrate_legacy_id("5"), "j2K5bG8tV6oH5");
    }

    #[test]
    fn test_migrate_unmapped_id_generates_valid_id() {
        let id = migrate_legacy_id("999");
        assert!(is_valid_video_id(&id));
        // Fresh ids never collide with the reserved legacy ones.
        assert!(legacy_id_for(&id).is_none());
    }

    #[test]
    fn test_legacy_reverse_lookup() {
        assert_eq!(legacy_id_for("a8b92cDdX01p1"), Some("1"));
        assert_eq!(legacy_id_for("j2K5bG8tV6oH5"), Some("5"));
        assert_eq!(legacy_id_for("zzzzzzzzzzzzz"), None);
    }

    #[test]
    fn test_seeded_permanent_ids_are_valid() {
        for n in 1..=5 {
            assert!(is_valid_video_id(&migrate_legacy_id(&n.to_string())));
        }
    }
}
