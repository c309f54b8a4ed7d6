use axum::extract::Request;

/// Outcome of an authorization check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthDecision {
    Allow,
    /// Rejected with a reason (returned to the caller, 403)
    Deny(String),
}

/// Authorization hook for guarded routes
///
/// Implementations inspect the request (headers, method, path) and decide
/// before the handler runs. Public routes never reach the hook.
pub trait Authorizer: Send + Sync + 'static {
    fn authorize(&self, req: &Request) -> AuthDecision;
}

/// Pass-through authorizer (default)
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl Authorizer for AllowAll {
    fn authorize(&self, _req: &Request) -> AuthDecision {
        AuthDecision::Allow
    }
}

/// Rejects every guarded request
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAll;

impl Authorizer for DenyAll {
    fn authorize(&self, _req: &Request) -> AuthDecision {
        AuthDecision::Deny("Access to this resource is not allowed".to_string())
    }
}
