use actix_web::HttpResponse;

use auth_core::errors::{AuthError, ErrorResponse, ValidationError};

/// Maps a token validation rejection to its HTTP response
///
/// Every rejection becomes 401 with a discriminated reason code in the
/// body; no rejection ever surfaces as a server fault.
pub fn handle_validation_error(error: ValidationError) -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse::from(error))
}

/// Maps a domain error to its HTTP response
pub fn handle_auth_error(error: AuthError) -> HttpResponse {
    match error {
        AuthError::Decode(e) => HttpResponse::Unauthorized().json(ErrorResponse::from(e)),
        AuthError::Validation(e) => handle_validation_error(e),
        other => {
            // Configuration faults are caught at startup; anything
            // reaching this arm is an internal fault
            log::error!("API error: {:?}", other);
            HttpResponse::InternalServerError().json(ErrorResponse::from(other))
        }
    }
}
