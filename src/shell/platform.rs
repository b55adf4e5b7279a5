//! Environment detection.

/// Variables whose presence marks a CI run.
const CI_ENV_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
    "BUILDKITE",
];

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    is_ci_with(|name| std::env::var_os(name).is_some())
}

/// CI detection against an arbitrary variable lookup.
pub fn is_ci_with(is_set: impl Fn(&str) -> bool) -> bool {
    CI_ENV_VARS.iter().any(|name| is_set(name))
}
