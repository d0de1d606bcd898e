//! Seller profile models.

use serde::{Deserialize, Serialize};

/// A marketplace partner (seller) profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerProfile {
    /// Backend id; absent until the profile is first created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Seller display name.
    pub name: String,

    /// Contact e-mail.
    pub email: String,

    /// Brazilian company registration number.
    pub cnpj: String,

    /// Signed id of the uploaded logo, when one is attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}
