//! Library integration tests.

use ragready::probe::{Probe, ProbeOutcome, Unavailable};
use ragready::readiness::{evaluate, CheckName};
use ragready::ReadyError;

struct Scripted {
    name: CheckName,
    outcome: ProbeOutcome,
}

impl Probe for Scripted {
    fn name(&self) -> CheckName {
        self.name
    }

    fn check(&self) -> ProbeOutcome {
        self.outcome.clone()
    }
}

#[test]
fn error_types_are_public() {
    let err = ReadyError::InvalidPollConfig {
        message: "delay must be a non-negative number of seconds".into(),
    };
    assert!(err.to_string().contains("delay"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> ragready::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use ragready::cli::{Cli, Commands};

    let cli = Cli::parse_from(["ragready", "check", "--json"]);

    if let Some(Commands::Check(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn format_bytes_is_reexported() {
    assert_eq!(ragready::format_bytes(0), "0.0 B");
    assert_eq!(ragready::format_bytes(1024), "1.0 KB");
    assert_eq!(ragready::format_bytes(1024 * 1024), "1.0 MB");
}

#[test]
fn custom_probes_drive_the_verdict() {
    let probes: Vec<Box<dyn Probe>> = vec![
        Box::new(Scripted {
            name: CheckName::ContainerRuntime,
            outcome: ProbeOutcome::available(),
        }),
        Box::new(Scripted {
            name: CheckName::ModelServer,
            outcome: Unavailable::TimedOut {
                program: "ollama".into(),
                after: std::time::Duration::from_secs(5),
            }
            .into(),
        }),
    ];

    let result = evaluate(&probes);

    assert!(!result.is_ready());
    let failing: Vec<_> = result.failing().map(|(name, _)| name).collect();
    assert_eq!(failing, vec![CheckName::ModelServer]);
    assert_eq!(
        result.get(CheckName::ModelServer).unwrap().hint.as_deref(),
        Some(CheckName::ModelServer.repair_hint())
    );
}

#[test]
fn poll_against_closed_port_is_false() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = ragready::ServicePollConfig {
        host: "127.0.0.1".into(),
        port,
        max_attempts: 2,
        delay: 0.0,
        request_timeout: 1,
        ..Default::default()
    };

    assert!(!ragready::poll_service_ready(&config));
}
