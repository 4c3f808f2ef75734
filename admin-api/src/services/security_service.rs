//! Security page service: the fixed event log and the password-change rules.
//!
//! The log is mock data and the password change is simulated; neither is
//! persisted anywhere.

use crate::models::{LogStatus, SecurityLogEntry};

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub struct SecurityService;

impl SecurityService {
    pub fn recent_logs() -> Vec<SecurityLogEntry> {
        vec![
            SecurityLogEntry {
                id: "1".into(),
                timestamp: "2024-01-15 14:32:21".into(),
                event: "Admin Login".into(),
                ip: "192.168.1.1".into(),
                status: LogStatus::Success,
                details: "Successful admin authentication".into(),
            },
            SecurityLogEntry {
                id: "2".into(),
                timestamp: "2024-01-15 13:45:10".into(),
                event: "Failed Login Attempt".into(),
                ip: "203.45.67.89".into(),
                status: LogStatus::Error,
                details: "Invalid password attempt".into(),
            },
            SecurityLogEntry {
                id: "3".into(),
                timestamp: "2024-01-15 12:20:34".into(),
                event: "Directory Scan Blocked".into(),
                ip: "45.67.89.123".into(),
                status: LogStatus::Warning,
                details: "Attempted access to /wp-admin".into(),
            },
            SecurityLogEntry {
                id: "4".into(),
                timestamp: "2024-01-15 11:15:45".into(),
                event: "API Rate Limit".into(),
                ip: "123.45.67.89".into(),
                status: LogStatus::Warning,
                details: "Exceeded API rate limit".into(),
            },
        ]
    }

    /// Validate a password change request. The change itself is simulated.
    pub fn validate_password_change(new_password: &str, confirm: &str) -> Result<(), String> {
        if new_password != confirm {
            return Err("Passwords do not match".to_string());
        }
        if new_password.len() < MIN_PASSWORD_LENGTH {
            return Err("Password must be at least 8 characters".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_has_four_fixed_entries() {
        let logs = SecurityService::recent_logs();
        assert_eq!(logs.len(), 4);
        assert_eq!(logs[1].status, LogStatus::Error);
        assert_eq!(logs[2].ip, "45.67.89.123");
    }

    #[test]
    fn test_password_change_rules() {
        assert!(SecurityService::validate_password_change("longenough", "longenough").is_ok());
        assert!(SecurityService::validate_password_change("longenough", "different").is_err());
        assert!(SecurityService::validate_password_change("short", "short").is_err());
    }
}
