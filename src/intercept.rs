//! Request interception capability. The shipped implementation deliberately
//! does nothing: caching caused stale-content bugs, so the hook stays
//! installed with every request passed through untouched. New strategies plug
//! in through `RequestInterceptor`.

use tracing::debug;

/// Paths the interceptor singles out before declining to act on them, same as
/// everything else.
const EXCLUDED_PREFIXES: [&str; 2] = ["/dashboard", "/mobile/app"];

/// What to do with an intercepted request. Currently pass-through is the only
/// action; caching variants would be added here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterceptAction {
    PassThrough,
}

pub trait RequestInterceptor {
    fn intercept(&self, path: &str) -> InterceptAction;
}

/// The inert strategy: never caches, never rewrites.
#[derive(Debug, Default)]
pub struct PassThroughInterceptor;

impl PassThroughInterceptor {
    /// Takes effect immediately, no handover from a prior instance.
    pub fn install() -> Self {
        debug!("pass-through interceptor installed");
        Self
    }
}

impl RequestInterceptor for PassThroughInterceptor {
    fn intercept(&self, path: &str) -> InterceptAction {
        if EXCLUDED_PREFIXES
            .iter()
            .any(|prefix| path.starts_with(prefix))
        {
            // never cached, handled by normal network handling
            return InterceptAction::PassThrough;
        }
        InterceptAction::PassThrough
    }
}
