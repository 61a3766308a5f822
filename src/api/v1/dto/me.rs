use serde::{Deserialize, Serialize};

use crate::services::auth::Principal;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeResponse {
    pub id: String,
    pub user_name: String,
    pub image_url: Option<String>,
}

impl From<Principal> for MeResponse {
    fn from(p: Principal) -> Self {
        Self {
            id: p.id,
            user_name: p.user_name,
            image_url: p.image_url,
        }
    }
}
