//! API Middleware
//!
//! Tenant header extraction and request logging.

use axum::{
    body::Body,
    http::{HeaderMap, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::context::TenantContext;
use crate::error::AppError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const ORGANIZATION_ID_HEADER: &str = "x-organization-id";
pub const BRANCH_ID_HEADER: &str = "x-branch-id";
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

fn required_uuid(headers: &HeaderMap, name: &str) -> Result<Uuid, AppError> {
    let raw = headers
        .get(name)
        .ok_or_else(|| AppError::MissingHeader(name.to_string()))?;
    raw.to_str()
        .ok()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| AppError::InvalidHeader(name.to_string()))
}

/// Parse the tenant headers into a [`TenantContext`]
pub fn tenant_from_headers(headers: &HeaderMap) -> Result<TenantContext, AppError> {
    let user_id = required_uuid(headers, USER_ID_HEADER)?;
    let organization_id = required_uuid(headers, ORGANIZATION_ID_HEADER)?;
    let branch_id = required_uuid(headers, BRANCH_ID_HEADER)?;

    let mut context = TenantContext::new(user_id, organization_id, branch_id);
    if let Some(correlation_id) = headers
        .get(CORRELATION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
    {
        context = context.with_correlation_id(correlation_id);
    }
    context.ensure_correlation_id();
    Ok(context)
}

/// Insert the caller's [`TenantContext`] into request extensions
pub async fn tenant_middleware(mut request: Request<Body>, next: Next) -> Response {
    match tenant_from_headers(request.headers()) {
        Ok(context) => {
            request.extensions_mut().insert(context);
            next.run(request).await
        }
        Err(e) => e.into_response(),
    }
}

/// Headers that should be masked in logs
const SENSITIVE_HEADERS: &[&str] = &["authorization", "cookie", "set-cookie", "x-api-key"];

/// Mask sensitive headers for logging
pub fn mask_headers_for_logging(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let masked_value = if SENSITIVE_HEADERS.contains(&name.as_str()) {
                "[REDACTED]".to_string()
            } else {
                value.to_str().unwrap_or("[invalid utf8]").to_string()
            };
            (name.to_string(), masked_value)
        })
        .collect()
}

/// Request logging middleware. Runs inside the tenant middleware, so the
/// tenant and correlation id are available.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let headers = mask_headers_for_logging(request.headers());
    let context = request.extensions().get::<TenantContext>().copied();
    let correlation_id = context.and_then(|c| c.correlation_id);
    let branch_id = context.map(|c| c.branch_id);

    let start = std::time::Instant::now();
    tracing::info!(
        method = %method,
        uri = %uri,
        correlation_id = ?correlation_id,
        branch_id = ?branch_id,
        headers = ?headers,
        "Incoming request"
    );

    let response = next.run(request).await;

    tracing::info!(
        method = %method,
        uri = %uri,
        status = %response.status(),
        duration_ms = %start.elapsed().as_millis(),
        correlation_id = ?correlation_id,
        "Request completed"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenant_headers() -> (HeaderMap, Uuid, Uuid, Uuid) {
        let (user, org, branch) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, user.to_string().parse().unwrap());
        headers.insert(ORGANIZATION_ID_HEADER, org.to_string().parse().unwrap());
        headers.insert(BRANCH_ID_HEADER, branch.to_string().parse().unwrap());
        (headers, user, org, branch)
    }

    #[test]
    fn test_tenant_from_headers() {
        let (mut headers, user, org, branch) = tenant_headers();
        let correlation = Uuid::new_v4();
        headers.insert(CORRELATION_ID_HEADER, correlation.to_string().parse().unwrap());

        let context = tenant_from_headers(&headers).unwrap();
        assert_eq!(context.user_id, user);
        assert_eq!(context.organization_id, org);
        assert_eq!(context.branch_id, branch);
        assert_eq!(context.correlation_id, Some(correlation));
    }

    #[test]
    fn test_correlation_id_generated_when_absent() {
        let (headers, ..) = tenant_headers();
        let context = tenant_from_headers(&headers).unwrap();
        assert!(context.correlation_id.is_some());
    }

    #[test]
    fn test_missing_branch_header() {
        let (mut headers, ..) = tenant_headers();
        headers.remove(BRANCH_ID_HEADER);

        match tenant_from_headers(&headers) {
            Err(AppError::MissingHeader(name)) => assert_eq!(name, BRANCH_ID_HEADER),
            other => panic!("expected MissingHeader, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_uuid_header() {
        let (mut headers, ..) = tenant_headers();
        headers.insert(USER_ID_HEADER, "not-a-uuid".parse().unwrap());

        assert!(matches!(
            tenant_from_headers(&headers),
            Err(AppError::InvalidHeader(name)) if name == USER_ID_HEADER
        ));
    }

    #[test]
    fn test_mask_headers_for_logging() {
        let (mut headers, user, ..) = tenant_headers();
        headers.insert("authorization", "Bearer secret".parse().unwrap());
        headers.insert("content-type", "application/json".parse().unwrap());

        let masked = mask_headers_for_logging(&headers);
        let value = |name: &str| masked.iter().find(|(k, _)| k == name).map(|(_, v)| v.clone());

        assert_eq!(value("authorization").as_deref(), Some("[REDACTED]"));
        assert_eq!(value("content-type").as_deref(), Some("application/json"));
        assert_eq!(value(USER_ID_HEADER), Some(user.to_string()));
    }
}
