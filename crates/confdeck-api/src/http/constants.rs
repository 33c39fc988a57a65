//! Shared HTTP constants (route prefixes, problem URIs).

pub(crate) const REST_PREFIX: &str = "/rest";
pub(crate) const UI_ENTRY_POINT: &str = "index.html";

pub(crate) const PROBLEM_BAD_REQUEST: &str = "https://confdeck.dev/problems/bad-request";
pub(crate) const PROBLEM_CONFLICT: &str = "https://confdeck.dev/problems/conflict";
pub(crate) const PROBLEM_CONFIG_INVALID: &str = "https://confdeck.dev/problems/config-invalid";
pub(crate) const PROBLEM_NOT_FOUND: &str = "https://confdeck.dev/problems/not-found";
