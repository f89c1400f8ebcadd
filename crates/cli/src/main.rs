// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod action;
mod render;

use action::Action;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use icinga_maint_client::{
    ApiClient, ClientError, DEFAULT_CONFIG_PATH, DnsResolver, HostResolver, PreparedRequest,
    Settings,
};
use icinga_maint_domain::{DomainError, MaintenanceRecord, TimeWindow, maintenance_window};
use render::{parse_records, render_records};
use std::path::PathBuf;
use time::OffsetDateTime;
use tracing::debug;

/// Success, including a no-op invocation and any completed mutation.
const EXIT_OK: i32 = 0;
/// The status query returned zero maintenance records.
const EXIT_NO_MAINTENANCE: i32 = 1;
/// Transport failure or malformed response; the process aborted.
const EXIT_ABORT: i32 = 2;
/// Usage, validation, or config error.
const EXIT_USAGE: i32 = 3;
/// The enable target host has no DNS records (wraps to 255 at the OS).
const EXIT_HOST_UNRESOLVED: i32 = -1;

/// icinga-maint - manage maintenance mode windows for monitored hosts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)]
struct Args {
    /// Hostname
    #[arg(long, default_value = "")]
    host: String,

    /// Timeout of the maintenance mode action, as a float in hours
    #[arg(short = 'i', long, default_value_t = 1.0)]
    timeout: f64,

    /// Enable maintenance mode
    #[arg(short = 'e', long)]
    enable: bool,

    /// Disable maintenance mode
    #[arg(short = 'd', long)]
    disable: bool,

    /// Disable all maintenances for host
    #[arg(short = 'a', long = "disableall")]
    disable_all: bool,

    /// Get maintenance information for host
    #[arg(short = 'g', long = "getstatus")]
    get_status: bool,

    /// Suppress all output
    #[arg(short = 's', long)]
    silent: bool,

    /// RPD ticket number
    #[arg(long, default_value_t = 0)]
    rpd: i64,

    /// Unique id returned when the maintenance was created
    #[arg(long, default_value = "")]
    id: String,

    /// Status [active|completed|scheduled|deleted]
    #[arg(long, default_value = "active")]
    status: String,

    /// Custom config file
    #[arg(short = 'f', long = "file", default_value = DEFAULT_CONFIG_PATH)]
    file: PathBuf,
}

/// How a completed action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// The action ran; for queries, at least one record came back.
    Done,
    /// The status query found no maintenance records.
    NoMaintenance,
}

/// Errors surfaced to the exit-code mapping.
#[derive(Debug)]
enum CliError {
    /// A host is required for this action but none was given.
    MissingHost,
    /// The status response body was not a well-formed record list.
    ResponseParse(serde_json::Error),
    /// An error from the client layer.
    Client(ClientError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingHost => {
                write!(f, "A host must be provided for this action")
            }
            Self::ResponseParse(err) => {
                write!(f, "Failed to parse maintenance response: {err}")
            }
            Self::Client(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ClientError> for CliError {
    fn from(err: ClientError) -> Self {
        Self::Client(err)
    }
}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        Self::Client(ClientError::Domain(err))
    }
}

fn main() {
    let args: Args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code: i32 = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_OK,
                _ => EXIT_USAGE,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    // Diagnostics go to stderr so rendered output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    std::process::exit(run(&args));
}

/// Top-level dispatcher: the only place exit codes are decided.
fn run(args: &Args) -> i32 {
    let Some(action) =
        Action::select(args.enable, args.disable, args.disable_all, args.get_status)
    else {
        return EXIT_OK;
    };

    let settings: Settings = match Settings::load(&args.file) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{err}");
            return EXIT_USAGE;
        }
    };
    debug!(base_url = %settings.base_url, action = ?action, "Config loaded");

    let client: ApiClient = ApiClient::new(&settings.api_key);
    match run_action(action, args, &settings, &DnsResolver, &client) {
        Ok(outcome) => outcome_code(outcome),
        Err(err) => {
            report(&err, args.silent);
            exit_code(&err, action)
        }
    }
}

/// Runs one action end to end, returning the outcome or the first error.
///
/// All pre-wire validation happens before the resolver or the executor is
/// touched, so rejected invocations provably issue no network traffic.
fn run_action(
    action: Action,
    args: &Args,
    settings: &Settings,
    resolver: &dyn HostResolver,
    client: &ApiClient,
) -> Result<Outcome, CliError> {
    match action {
        Action::Enable => {
            require_host(args)?;
            let window: TimeWindow = maintenance_window(local_now(), args.timeout)?;
            check_host(resolver, &args.host)?;
            let request: PreparedRequest =
                PreparedRequest::enable(settings, &args.host, window, args.rpd)?;
            if !args.silent
                && let Some(body) = &request.body
            {
                println!("{body}");
            }
            let body: String = client.execute(&request)?;
            if !args.silent {
                println!("{body}");
            }
            Ok(Outcome::Done)
        }
        Action::Disable => {
            let request: PreparedRequest = PreparedRequest::disable(settings, &args.id)?;
            let body: String = client.execute(&request)?;
            if !args.silent {
                println!("{body}");
            }
            Ok(Outcome::Done)
        }
        Action::DisableAll => {
            require_host(args)?;
            check_host(resolver, &args.host)?;
            let request: PreparedRequest = PreparedRequest::disable_all(settings, &args.host);
            let body: String = client.execute(&request)?;
            if !args.silent {
                println!("{body}");
            }
            Ok(Outcome::Done)
        }
        Action::GetStatus => {
            require_host(args)?;
            let filter = args.status.parse().map_err(CliError::from)?;
            check_host(resolver, &args.host)?;
            let request: PreparedRequest = PreparedRequest::status(settings, &args.host, filter);
            let body: String = client.execute(&request)?;
            let records: Vec<MaintenanceRecord> =
                parse_records(&body).map_err(CliError::ResponseParse)?;
            if !args.silent {
                let mut rendered: String = String::new();
                if render_records(&records, &mut rendered).is_ok() {
                    print!("{rendered}");
                }
            }
            Ok(status_outcome(&records))
        }
    }
}

/// Ensures the action has a target host.
fn require_host(args: &Args) -> Result<(), CliError> {
    if args.host.is_empty() {
        return Err(CliError::MissingHost);
    }
    Ok(())
}

/// Gates mutating actions on the host resolving via DNS.
fn check_host(resolver: &dyn HostResolver, host: &str) -> Result<(), CliError> {
    if resolver.resolves(host) {
        Ok(())
    } else {
        Err(CliError::Client(ClientError::HostUnresolvable {
            host: host.to_string(),
        }))
    }
}

/// The window anchor: local time when an offset is known, UTC otherwise.
fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Maps a status query result onto the no-maintenance outcome.
const fn status_outcome(records: &[MaintenanceRecord]) -> Outcome {
    if records.is_empty() {
        Outcome::NoMaintenance
    } else {
        Outcome::Done
    }
}

/// Maps an outcome to its exit code.
const fn outcome_code(outcome: Outcome) -> i32 {
    match outcome {
        Outcome::Done => EXIT_OK,
        Outcome::NoMaintenance => EXIT_NO_MAINTENANCE,
    }
}

/// Maps an error to its exit code; only host resolution depends on the
/// action (enable keeps the historical -1).
fn exit_code(err: &CliError, action: Action) -> i32 {
    match err {
        CliError::MissingHost => EXIT_USAGE,
        CliError::ResponseParse(_) => EXIT_ABORT,
        CliError::Client(client_err) => match client_err {
            ClientError::Config { .. }
            | ClientError::MissingMaintenanceId
            | ClientError::Domain(
                DomainError::InvalidStatusFilter(_) | DomainError::InvalidTimeout { .. },
            ) => EXIT_USAGE,
            ClientError::HostUnresolvable { .. } => {
                if action == Action::Enable {
                    EXIT_HOST_UNRESOLVED
                } else {
                    EXIT_USAGE
                }
            }
            _ => EXIT_ABORT,
        },
    }
}

/// Prints an error the way its kind demands: usage errors come with help,
/// validation messages respect `--silent`, aborts always reach stderr.
fn report(err: &CliError, silent: bool) {
    match err {
        CliError::MissingHost
        | CliError::Client(ClientError::Domain(
            DomainError::InvalidStatusFilter(_) | DomainError::InvalidTimeout { .. },
        )) => {
            eprintln!("{err}");
            let _ = Args::command().print_help();
        }
        CliError::Client(
            ClientError::MissingMaintenanceId | ClientError::HostUnresolvable { .. },
        ) => {
            if !silent {
                println!("{err}");
            }
        }
        _ => eprintln!("{err}"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct StubResolver {
        answer: bool,
    }

    impl HostResolver for StubResolver {
        fn resolves(&self, _host: &str) -> bool {
            self.answer
        }
    }

    fn test_args() -> Args {
        Args {
            host: String::new(),
            timeout: 1.0,
            enable: false,
            disable: false,
            disable_all: false,
            get_status: false,
            silent: true,
            rpd: 0,
            id: String::new(),
            status: String::from("active"),
            file: PathBuf::from("/etc/fds/icinga.json"),
        }
    }

    fn test_settings() -> Settings {
        // Connection-refused endpoint: any attempt to hit the wire in these
        // tests would surface as a Network error instead of the expected one.
        Settings {
            base_url: String::from("http://127.0.0.1:9/"),
            api_key: String::from("k"),
            owner: String::from("ops"),
        }
    }

    fn test_client() -> ApiClient {
        ApiClient::new("k")
    }

    #[test]
    fn test_enable_without_host_is_usage_error() {
        let args = test_args();
        let result = run_action(
            Action::Enable,
            &args,
            &test_settings(),
            &StubResolver { answer: true },
            &test_client(),
        );
        let err = result.unwrap_err();
        assert!(matches!(err, CliError::MissingHost));
        assert_eq!(exit_code(&err, Action::Enable), EXIT_USAGE);
    }

    #[test]
    fn test_enable_unresolvable_host_keeps_historical_code() {
        let mut args = test_args();
        args.host = String::from("web1");
        let result = run_action(
            Action::Enable,
            &args,
            &test_settings(),
            &StubResolver { answer: false },
            &test_client(),
        );
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            CliError::Client(ClientError::HostUnresolvable { .. })
        ));
        assert_eq!(exit_code(&err, Action::Enable), EXIT_HOST_UNRESOLVED);
    }

    #[test]
    fn test_unresolvable_host_is_usage_error_for_other_actions() {
        let err = CliError::Client(ClientError::HostUnresolvable {
            host: String::from("web1"),
        });
        assert_eq!(exit_code(&err, Action::DisableAll), EXIT_USAGE);
        assert_eq!(exit_code(&err, Action::GetStatus), EXIT_USAGE);
    }

    #[test]
    fn test_invalid_timeout_is_usage_error() {
        let mut args = test_args();
        args.host = String::from("web1");
        args.timeout = 0.0;
        let result = run_action(
            Action::Enable,
            &args,
            &test_settings(),
            &StubResolver { answer: true },
            &test_client(),
        );
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            CliError::Client(ClientError::Domain(DomainError::InvalidTimeout { .. }))
        ));
        assert_eq!(exit_code(&err, Action::Enable), EXIT_USAGE);
    }

    #[test]
    fn test_disable_empty_id_rejected_without_network() {
        // The settings point at a refused port; getting MissingMaintenanceId
        // instead of a Network error proves nothing was sent.
        let args = test_args();
        let result = run_action(
            Action::Disable,
            &args,
            &test_settings(),
            &StubResolver { answer: true },
            &test_client(),
        );
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            CliError::Client(ClientError::MissingMaintenanceId)
        ));
        assert_eq!(exit_code(&err, Action::Disable), EXIT_USAGE);
    }

    #[test]
    fn test_get_status_invalid_filter_rejected_without_network() {
        let mut args = test_args();
        args.host = String::from("web1");
        args.status = String::from("expired");
        let result = run_action(
            Action::GetStatus,
            &args,
            &test_settings(),
            &StubResolver { answer: true },
            &test_client(),
        );
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            CliError::Client(ClientError::Domain(DomainError::InvalidStatusFilter(_)))
        ));
        assert_eq!(exit_code(&err, Action::GetStatus), EXIT_USAGE);
    }

    #[test]
    fn test_empty_record_list_maps_to_exit_one() {
        let records: Vec<MaintenanceRecord> = parse_records("[]").unwrap();
        let outcome: Outcome = status_outcome(&records);
        assert_eq!(outcome_code(outcome), EXIT_NO_MAINTENANCE);
    }

    #[test]
    fn test_nonempty_record_list_maps_to_exit_zero() {
        let records: Vec<MaintenanceRecord> =
            parse_records(r#"[{"maintenanceId":"abc-123"}]"#).unwrap();
        let outcome: Outcome = status_outcome(&records);
        assert_eq!(outcome_code(outcome), EXIT_OK);
    }

    #[test]
    fn test_response_parse_failure_aborts() {
        let err = CliError::ResponseParse(parse_records("not json").unwrap_err());
        assert_eq!(exit_code(&err, Action::GetStatus), EXIT_ABORT);
    }

    #[test]
    fn test_config_error_is_usage_error() {
        let err = CliError::Client(ClientError::Config {
            path: String::from("/etc/fds/icinga.json"),
            message: String::from("No such file or directory"),
        });
        assert_eq!(exit_code(&err, Action::Enable), EXIT_USAGE);
    }
}
