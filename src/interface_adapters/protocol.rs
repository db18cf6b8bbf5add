use serde::{Deserialize, Serialize};

// Query parameters accepted by the echo endpoint. Everything arrives as an
// optional raw string; normalization happens in the use case so that missing
// and malformed values never fail deserialization.
#[derive(Debug, Deserialize)]
pub struct EchoQuery {
    // The string to echo.
    #[serde(default)]
    pub data: Option<String>,
    // Capitalization applied to the response string.
    #[serde(default)]
    pub case: Option<String>,
    // Number of times the string is echoed, space separated.
    #[serde(default)]
    pub repetitions: Option<String>,
}

// Response payload returned after a successful echo.
#[derive(Debug, Serialize)]
pub struct EchoResponse {
    // The key casing is part of the wire contract.
    #[serde(rename = "ResponseString")]
    pub response_string: String,
}

// Error envelope fixed by the echo API contract.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub status: u16,
}
