//! Bounded health-check polling.
//!
//! The poll issues at most `max_attempts` requests, sleeps `delay` between
//! them (never after the last one), and stops at the first `200`. Network
//! errors count as failed attempts.

use reqwest::blocking::Client;
use std::fmt;
use std::time::{Duration, Instant};

use super::ServicePollConfig;
use crate::error::{ReadyError, Result};

/// Status and body size of one health response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthResponse {
    /// HTTP status code.
    pub status: u16,
    /// Number of body bytes received.
    pub body_len: u64,
}

/// One health request against a URL.
pub trait HealthEndpoint {
    /// Issue a single request. Errors are transport failures.
    fn check(&self, url: &str) -> anyhow::Result<HealthResponse>;
}

/// Health endpoint backed by a blocking HTTP client.
pub struct HttpHealthEndpoint {
    client: Client,
    timeout: Duration,
}

impl HttpHealthEndpoint {
    /// Create an endpoint whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent("ragready")
            .timeout(timeout)
            .build()
            .map_err(|e| ReadyError::Other(e.into()))?;
        Ok(Self { client, timeout })
    }

    /// Get the configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl HealthEndpoint for HttpHealthEndpoint {
    fn check(&self, url: &str) -> anyhow::Result<HealthResponse> {
        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?;
        Ok(HealthResponse {
            status,
            body_len: body.len() as u64,
        })
    }
}

/// What a single attempt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptResult {
    /// The endpoint answered 200.
    Healthy { body_len: u64 },
    /// The endpoint answered with another status.
    Status(u16),
    /// The request never got a response.
    Error(String),
}

impl AttemptResult {
    /// Whether this attempt ends the poll.
    pub fn is_healthy(&self) -> bool {
        matches!(self, AttemptResult::Healthy { .. })
    }
}

impl fmt::Display for AttemptResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Healthy { .. } => write!(f, "HTTP 200"),
            Self::Status(code) => write!(f, "HTTP {}", code),
            Self::Error(message) => write!(f, "{}", message),
        }
    }
}

/// Summary of a finished poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollReport {
    /// Whether a 200 was observed.
    pub ready: bool,
    /// Number of requests issued.
    pub attempts: u32,
    /// Wall time spent polling.
    pub elapsed: Duration,
    /// Body size of the successful response.
    pub response_bytes: Option<u64>,
    /// Result of the final attempt, if any was made.
    pub last: Option<AttemptResult>,
}

/// Runs the bounded poll against a [`HealthEndpoint`].
pub struct HealthPoller<E: HealthEndpoint> {
    endpoint: E,
    sleeper: Box<dyn Fn(Duration)>,
}

impl<E: HealthEndpoint> HealthPoller<E> {
    /// Create a poller that sleeps with `std::thread::sleep`.
    pub fn new(endpoint: E) -> Self {
        Self {
            endpoint,
            sleeper: Box::new(std::thread::sleep),
        }
    }

    /// Replace the sleep function (used to observe delays in tests).
    pub fn with_sleeper(mut self, sleeper: impl Fn(Duration) + 'static) -> Self {
        self.sleeper = Box::new(sleeper);
        self
    }

    /// Poll until healthy or out of attempts.
    pub fn poll(&self, config: &ServicePollConfig) -> PollReport {
        self.poll_with(config, |_, _| {})
    }

    /// Poll, calling `observer` with the attempt number and its result
    /// after every request.
    pub fn poll_with<F>(&self, config: &ServicePollConfig, mut observer: F) -> PollReport
    where
        F: FnMut(u32, &AttemptResult),
    {
        let url = config.url();
        let delay = config.delay_duration();
        let start = Instant::now();
        let mut last = None;

        for attempt in 1..=config.max_attempts {
            let result = match self.endpoint.check(&url) {
                Ok(response) if response.status == 200 => AttemptResult::Healthy {
                    body_len: response.body_len,
                },
                Ok(response) => AttemptResult::Status(response.status),
                Err(e) => AttemptResult::Error(e.to_string()),
            };

            tracing::debug!(
                "Health attempt {}/{} against {}: {:?}",
                attempt,
                config.max_attempts,
                url,
                result
            );
            observer(attempt, &result);

            if let AttemptResult::Healthy { body_len } = result {
                return PollReport {
                    ready: true,
                    attempts: attempt,
                    elapsed: start.elapsed(),
                    response_bytes: Some(body_len),
                    last: Some(result),
                };
            }

            last = Some(result);
            if attempt < config.max_attempts {
                (self.sleeper)(delay);
            }
        }

        PollReport {
            ready: false,
            attempts: config.max_attempts,
            elapsed: start.elapsed(),
            response_bytes: None,
            last,
        }
    }
}

/// Poll `http://{host}:{port}/health` until it answers 200.
///
/// Returns `false` when every attempt fails or the HTTP client cannot be
/// built. Never panics and never returns an error.
pub fn poll_service_ready(config: &ServicePollConfig) -> bool {
    match HttpHealthEndpoint::new(config.request_timeout_duration()) {
        Ok(endpoint) => HealthPoller::new(endpoint).poll(config).ready,
        Err(e) => {
            tracing::warn!("Could not build HTTP client: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Endpoint that replays a fixed script of responses.
    struct ScriptedEndpoint {
        script: RefCell<VecDeque<anyhow::Result<HealthResponse>>>,
        calls: Cell<u32>,
    }

    impl ScriptedEndpoint {
        fn new(script: Vec<anyhow::Result<HealthResponse>>) -> Self {
            Self {
                script: RefCell::new(script.into()),
                calls: Cell::new(0),
            }
        }
    }

    impl HealthEndpoint for ScriptedEndpoint {
        fn check(&self, _url: &str) -> anyhow::Result<HealthResponse> {
            self.calls.set(self.calls.get() + 1);
            self.script
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(anyhow::anyhow!("connection refused")))
        }
    }

    fn status(code: u16) -> anyhow::Result<HealthResponse> {
        Ok(HealthResponse {
            status: code,
            body_len: 21,
        })
    }

    fn quick_config(max_attempts: u32) -> ServicePollConfig {
        ServicePollConfig {
            max_attempts,
            delay: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn never_healthy_exhausts_all_attempts() {
        let endpoint = ScriptedEndpoint::new(vec![status(503), status(503), status(503)]);
        let poller = HealthPoller::new(endpoint);

        let report = poller.poll(&quick_config(3));

        assert!(!report.ready);
        assert_eq!(report.attempts, 3);
        assert_eq!(poller.endpoint.calls.get(), 3);
        assert_eq!(report.last, Some(AttemptResult::Status(503)));
    }

    #[test]
    fn stops_at_first_healthy_response() {
        let endpoint = ScriptedEndpoint::new(vec![
            Err(anyhow::anyhow!("connection refused")),
            status(200),
            status(200),
        ]);
        let poller = HealthPoller::new(endpoint);

        let report = poller.poll(&quick_config(5));

        assert!(report.ready);
        assert_eq!(report.attempts, 2);
        assert_eq!(poller.endpoint.calls.get(), 2);
        assert_eq!(report.response_bytes, Some(21));
    }

    #[test]
    fn non_200_success_codes_do_not_count() {
        let endpoint = ScriptedEndpoint::new(vec![status(204), status(200)]);
        let poller = HealthPoller::new(endpoint);

        let report = poller.poll(&quick_config(5));

        assert!(report.ready);
        assert_eq!(report.attempts, 2);
    }

    #[test]
    fn network_errors_are_swallowed() {
        let endpoint = ScriptedEndpoint::new(vec![]);
        let poller = HealthPoller::new(endpoint);

        let report = poller.poll(&quick_config(2));

        assert!(!report.ready);
        assert!(matches!(report.last, Some(AttemptResult::Error(_))));
    }

    #[test]
    fn sleeps_between_attempts_but_not_after_last() {
        let sleeps = Rc::new(RefCell::new(Vec::new()));
        let recorded = Rc::clone(&sleeps);
        let endpoint = ScriptedEndpoint::new(vec![status(500), status(500), status(500)]);
        let poller =
            HealthPoller::new(endpoint).with_sleeper(move |d| recorded.borrow_mut().push(d));
        let config = ServicePollConfig {
            max_attempts: 3,
            delay: 1.5,
            ..Default::default()
        };

        poller.poll(&config);

        assert_eq!(
            *sleeps.borrow(),
            vec![Duration::from_millis(1500), Duration::from_millis(1500)]
        );
    }

    #[test]
    fn no_sleep_when_first_attempt_succeeds() {
        let sleeps = Rc::new(Cell::new(0));
        let counter = Rc::clone(&sleeps);
        let endpoint = ScriptedEndpoint::new(vec![status(200)]);
        let poller = HealthPoller::new(endpoint).with_sleeper(move |_| counter.set(counter.get() + 1));

        let report = poller.poll(&quick_config(4));

        assert!(report.ready);
        assert_eq!(sleeps.get(), 0);
    }

    #[test]
    fn observer_sees_every_attempt() {
        let endpoint = ScriptedEndpoint::new(vec![status(503), status(200)]);
        let poller = HealthPoller::new(endpoint);
        let mut seen = Vec::new();

        poller.poll_with(&quick_config(5), |attempt, result| {
            seen.push((attempt, result.is_healthy()));
        });

        assert_eq!(seen, vec![(1, false), (2, true)]);
    }

    // --- Mock HTTP tests ---

    fn config_for(server: &MockServer, max_attempts: u32) -> ServicePollConfig {
        ServicePollConfig {
            host: server.host(),
            port: server.port(),
            max_attempts,
            delay: 0.0,
            request_timeout: 2,
            ..Default::default()
        }
    }

    #[test]
    fn http_never_ready_makes_exactly_max_attempts() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/health");
            then.status(503);
        });

        assert!(!poll_service_ready(&config_for(&server, 3)));
        mock.assert_calls(3);
    }

    #[test]
    fn http_ready_returns_true_after_one_attempt() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/health");
            then.status(200).body("healthz check passed");
        });

        let endpoint = HttpHealthEndpoint::new(Duration::from_secs(2)).unwrap();
        let report = HealthPoller::new(endpoint).poll(&config_for(&server, 5));

        assert!(report.ready);
        assert_eq!(report.attempts, 1);
        assert_eq!(report.response_bytes, Some(20));
        mock.assert_calls(1);
    }

    #[test]
    fn http_closed_port_is_not_ready() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let config = ServicePollConfig {
            host: "127.0.0.1".to_string(),
            port,
            max_attempts: 2,
            delay: 0.0,
            request_timeout: 1,
            ..Default::default()
        };

        assert!(!poll_service_ready(&config));
    }

    #[test]
    fn attempt_results_display() {
        assert_eq!(AttemptResult::Status(503).to_string(), "HTTP 503");
        assert_eq!(AttemptResult::Healthy { body_len: 0 }.to_string(), "HTTP 200");
        assert_eq!(
            AttemptResult::Error("connection refused".into()).to_string(),
            "connection refused"
        );
    }

    #[test]
    fn http_endpoint_keeps_timeout() {
        let endpoint = HttpHealthEndpoint::new(Duration::from_secs(3)).unwrap();
        assert_eq!(endpoint.timeout(), Duration::from_secs(3));
    }
}
