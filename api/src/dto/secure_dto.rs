use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecureResponse {
    pub message: String,
    pub subject: String,
}
