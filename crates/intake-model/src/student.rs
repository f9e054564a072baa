//! Student and administrator identities.
//!
//! Authentication lives with the external provider; these records only
//! carry the identity and role the rest of the system needs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// School-issued control number used as the identity key.
    #[serde(alias = "controlNumber")]
    pub control_number: String,
    #[serde(alias = "fullName")]
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
}
