use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::{decode_jwt, Role, Session, SessionUser};
use crate::error::ApiError;
use crate::state::AppState;

/// JWT authentication middleware: validates the Bearer token and injects
/// `Session` and `SessionUser` into request extensions.
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_jwt_from_headers(&headers).map_err(ApiError::unauthorized)?;

    let claims = decode_jwt(&token, &state.jwt_secret).map_err(|e| {
        tracing::debug!("Rejected token: {}", e);
        ApiError::from(e)
    })?;

    let session: Session = claims.session();
    tracing::debug!(user = %session.user.id, role = session.user.role.as_str(), "session authenticated");

    request.extensions_mut().insert(session.user.clone());
    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}

/// Extract JWT token from Authorization header
fn extract_jwt_from_headers(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("Empty JWT token".to_string());
        }
        Ok(token.trim().to_string())
    } else {
        Err("Authorization header must use Bearer token format".to_string())
    }
}

/// Handlers that mutate shared configuration or remove records call this.
pub fn require_admin(user: &SessionUser) -> Result<(), ApiError> {
    match user.role {
        Role::Admin => Ok(()),
        Role::User => {
            tracing::warn!(user = %user.id, "admin-only action refused");
            Err(ApiError::forbidden("Admin role required"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert("authorization", HeaderValue::from_str(value).unwrap());
        map
    }

    #[test]
    fn bearer_token_extracted() {
        assert_eq!(extract_jwt_from_headers(&headers("Bearer abc.def")).unwrap(), "abc.def");
    }

    #[test]
    fn malformed_headers_rejected() {
        assert!(extract_jwt_from_headers(&HeaderMap::new()).is_err());
        assert!(extract_jwt_from_headers(&headers("Basic abc")).is_err());
        assert!(extract_jwt_from_headers(&headers("Bearer   ")).is_err());
    }
}
