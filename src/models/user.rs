use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Local,
    Google,
    #[serde(other)]
    Other,
}

impl Default for AuthProvider {
    fn default() -> Self {
        AuthProvider::Local
    }
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Google => "google",
            AuthProvider::Other => "other",
        }
    }
}

// User model (collection `users`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    #[serde(default)]
    pub password: String, // bcrypt hash
    #[serde(default)]
    pub name: String,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
    #[serde(default)]
    pub provider: AuthProvider,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<BsonDateTime>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<BsonDateTime>,
}

/// Fields force-written on an existing account by the admin bootstrap
#[derive(Debug, Clone)]
pub struct CredentialReset {
    pub password_hash: String,
    pub name: String,
    pub is_admin: bool,
    pub provider: AuthProvider,
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
