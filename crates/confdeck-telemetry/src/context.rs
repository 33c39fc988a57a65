//! Application-level span helpers.

use tracing::{Span, span::Entered};

use crate::init::build_sha;

/// Guard that keeps the application-level span entered for the lifetime of the process.
pub struct GlobalContextGuard {
    _guard: Entered<'static>,
}

impl GlobalContextGuard {
    /// Enter the application-level tracing span for the lifetime of the guard.
    #[must_use]
    pub fn new(stage: impl Into<String>) -> Self {
        let stage = stage.into();
        let span: &'static Span = Box::leak(Box::new(
            tracing::info_span!("app", stage = %stage, build_sha = %build_sha()),
        ));
        Self {
            _guard: span.enter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_enters_and_exits() {
        let guard = GlobalContextGuard::new("test");
        drop(guard);
    }
}
