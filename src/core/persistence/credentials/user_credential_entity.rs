use serde::{Deserialize, Serialize};

/// Tokens and identity for the one user whose data this deployment serves.
///
/// Field names follow the vendor's token endpoint response so the document
/// can be stored exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCredentialEntity {
    /// Bearer token used to fetch heart-rate data.
    pub access_token: String,
    /// Used to obtain a new access token when it expires.
    pub refresh_token: String,
    /// Space-separated data scopes the user granted.
    pub scope: String,
    /// The vendor-side user id.
    pub user_id: String,
}

impl UserCredentialEntity {
    pub fn is_configured(&self) -> bool {
        !self.access_token.is_empty() && !self.refresh_token.is_empty()
    }

    /// Mask the access token for safe display (keeps last 4 chars).
    pub fn masked_access_token(&self) -> String {
        let chars: Vec<char> = self.access_token.chars().collect();
        if chars.len() <= 8 {
            "***".into()
        } else {
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("***{tail}")
        }
    }
}
