//! Host connection details supplied when adding a host.

use serde::{Deserialize, Serialize};

use crate::error::HostiniError;

/// One host to append to the inventory.
///
/// All fields are strings, the port included; the file format stores nothing
/// else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRecord {
    /// Hostname or IP address. Also used as the section name.
    pub host: String,

    pub username: String,

    pub password: String,

    pub port: String,
}

impl HostRecord {
    pub fn new(host: &str, username: &str, password: &str, port: &str) -> Self {
        Self {
            host: host.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            port: port.to_string(),
        }
    }

    /// Fields in the order they are written: host, username, password, port.
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("host", self.host.as_str()),
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
            ("port", self.port.as_str()),
        ]
    }

    /// Reject values that would not read back as the same record.
    pub fn validate(&self) -> Result<(), HostiniError> {
        if self.host.trim().is_empty() {
            return Err(HostiniError::InvalidValue {
                key: "host".into(),
                reason: "host cannot be empty".into(),
            });
        }
        if self.host.trim() != self.host {
            return Err(HostiniError::InvalidValue {
                key: "host".into(),
                reason: "host cannot start or end with whitespace".into(),
            });
        }
        if self.host.contains(['[', ']']) {
            return Err(HostiniError::InvalidValue {
                key: "host".into(),
                reason: "host cannot contain brackets".into(),
            });
        }
        for (key, value) in self.fields() {
            if value.contains(['\n', '\r']) {
                return Err(HostiniError::InvalidValue {
                    key: key.into(),
                    reason: "value cannot contain line breaks".into(),
                });
            }
            if value.trim() != value {
                return Err(HostiniError::InvalidValue {
                    key: key.into(),
                    reason: "value cannot start or end with whitespace".into(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_in_write_order() {
        let record = HostRecord::new("h1", "u", "p", "22");
        let keys: Vec<&str> = record.fields().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["host", "username", "password", "port"]);
    }

    #[test]
    fn valid_record_passes() {
        assert!(HostRecord::new("10.0.0.1", "root", "s3cr=t", "22").validate().is_ok());
    }

    #[test]
    fn empty_host_rejected() {
        let err = HostRecord::new("  ", "u", "p", "22").validate().unwrap_err();
        assert!(matches!(err, HostiniError::InvalidValue { key, .. } if key == "host"));
    }

    #[test]
    fn padded_host_rejected() {
        assert!(HostRecord::new(" h1", "u", "p", "22").validate().is_err());
    }

    #[test]
    fn padded_password_rejected() {
        let err = HostRecord::new("h1", "u", "  secret ", "22")
            .validate()
            .unwrap_err();
        assert!(matches!(err, HostiniError::InvalidValue { key, .. } if key == "password"));
    }

    #[test]
    fn padded_port_rejected() {
        let err = HostRecord::new("h1", "u", "p", " 22").validate().unwrap_err();
        assert!(matches!(err, HostiniError::InvalidValue { key, .. } if key == "port"));
    }

    #[test]
    fn inner_spaces_allowed() {
        assert!(HostRecord::new("h1", "deploy user", "two words", "22").validate().is_ok());
    }

    #[test]
    fn bracket_in_host_rejected() {
        assert!(HostRecord::new("h]1", "u", "p", "22").validate().is_err());
    }

    #[test]
    fn line_break_in_password_rejected() {
        let err = HostRecord::new("h1", "u", "p\n[evil]", "22")
            .validate()
            .unwrap_err();
        assert!(matches!(err, HostiniError::InvalidValue { key, .. } if key == "password"));
    }
}
