//! Session model

use serde::{Deserialize, Serialize};
use std::fmt;

/// The signed-in identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(rename = "avatar", default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Session {
    /// Build a session with the generated avatar for `name`
    pub fn new(id: impl Into<String>, email: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            email: email.into(),
            avatar_url: Some(avatar_url_for(&name)),
            name,
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// Deterministic avatar URL seeded by the display name
pub fn avatar_url_for(name: &str) -> String {
    format!(
        "https://api.dicebear.com/7.x/avataaars/svg?seed={}",
        encode_query_value(name)
    )
}

/// Percent-encode every UTF-8 byte outside the RFC 3986 unreserved set
fn encode_query_value(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_is_deterministic() {
        let a = Session::new("1", "demo@finbuddy.com", "Demo User");
        let b = Session::new("1", "demo@finbuddy.com", "Demo User");
        assert_eq!(a.avatar_url, b.avatar_url);
        assert_eq!(
            a.avatar_url.as_deref(),
            Some("https://api.dicebear.com/7.x/avataaars/svg?seed=Demo%20User")
        );
    }

    #[test]
    fn test_avatar_seed_is_fully_encoded() {
        assert!(avatar_url_for("A+B%ü").ends_with("seed=A%2BB%25%C3%BC"));
        assert!(avatar_url_for("Tom & Jerry?").ends_with("seed=Tom%20%26%20Jerry%3F"));
        assert!(avatar_url_for("o'neil-j.r_~").ends_with("seed=o%27neil-j.r_~"));
    }

    #[test]
    fn test_serialized_field_names() {
        let session = Session::new("2", "user@example.com", "John Doe");
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["id"], "2");
        assert_eq!(json["name"], "John Doe");
        assert!(json["avatar"].as_str().unwrap().ends_with("seed=John%20Doe"));
    }

    #[test]
    fn test_avatar_is_optional_on_read() {
        let session: Session =
            serde_json::from_str(r#"{"id":"9","email":"a@b.c","name":"A"}"#).unwrap();
        assert!(session.avatar_url.is_none());
    }
}
