use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body for POST /verify/pan
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyPanRequest {
    #[validate(length(equal = 10, message = "must be exactly 10 characters"))]
    pub pan_number: String,
}
