use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON body returned with every non-2xx response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}
