use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use qr_core::SymbolError;

// ---------------------------------------------------------------------------
// ApiError — the one canonical error shape on the wire
//
// {
//   "ok": false,
//   "error": { "code": "Err.Request.InvalidInput", "message": "...",
//              "hint": "...", "status": 400 }
// }
//
// Core crates keep their typed enums; this is where they are mapped to a
// status code and a stable body. Internal detail never leaks past `message`.
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct ApiError {
    pub code: &'static str,
    pub message: String,
    pub hint: &'static str,
    pub status: StatusCode,
}

impl ApiError {
    /// Malformed or missing request fields. Raised by the JSON extractor
    /// before any generation work begins.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            code: "Err.Request.InvalidInput",
            message: message.into(),
            hint: "Body must be a JSON object with an integer 'user_id' and a finite \
                   decimal 'amount'. Example: {\"user_id\": 42, \"amount\": 19.99}.",
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "Err.Internal",
            message: message.into(),
            hint: "This is an internal error. Check server logs for details.",
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SymbolError> for ApiError {
    fn from(e: SymbolError) -> Self {
        match &e {
            SymbolError::CapacityExceeded { .. } => Self {
                code: "Err.Symbol.CapacityExceeded",
                message: e.to_string(),
                hint: "Identifiers are fixed at 36 characters and always fit; this \
                       indicates a logic defect in the issuing pipeline.",
                status: StatusCode::INTERNAL_SERVER_ERROR,
            },
            SymbolError::Render(_) => Self {
                code: "Err.Symbol.Render",
                message: e.to_string(),
                hint: "PNG serialization of the rendered symbol failed. Not caused by \
                       the request; check server logs.",
                status: StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "ok": false,
            "error": {
                "code": self.code,
                "message": self.message,
                "hint": self.hint,
                "status": self.status.as_u16(),
            }
        });
        (self.status, Json(body)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}
