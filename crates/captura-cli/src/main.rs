//! Captura CLI — command-line client for the Captura lead service.
//!
//! Drives the same form session and submit lifecycle as the landing page,
//! just from the terminal: `submit` walks the multi-step form (validating
//! each step before it advances) and runs the submit controller over an
//! HTTP transport; `list` prints the stored submissions.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;

use captura_core::controller::{
    LeadTransport, NoticeKind, SubmitController, SubmitOutcome, TransportReply,
};
use captura_core::error::TransportError;
use captura_core::form::{FormSchema, FormSession};
use captura_core::submission::SubmissionInput;

// ── ANSI color helpers ───────────────────────────────────────────────

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

// ── CLI structure ────────────────────────────────────────────────────

/// Captura — property-lead capture, from the terminal.
#[derive(Parser)]
#[command(
    name = "captura",
    version,
    about = "Captura CLI — submit and inspect property leads",
    long_about = None,
    after_help = "Environment variables:\n  \
         CAPTURA_ADDR    Server address (default: http://127.0.0.1:8080)\n\n\
         Examples:\n  \
         captura submit --name 'Ana García' --email ana@example.com \\\n      \
         --phone 612345678 --postal-code 28001 --property-type piso \\\n      \
         --accept-privacy\n  \
         captura list",
)]
struct Cli {
    /// Captura server address.
    #[arg(long, env = "CAPTURA_ADDR", default_value = "http://127.0.0.1:8080")]
    addr: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk the multi-step form and submit a lead.
    Submit {
        /// Contact name.
        #[arg(long)]
        name: String,
        /// Contact email.
        #[arg(long)]
        email: String,
        /// Contact phone (9 digits).
        #[arg(long)]
        phone: String,
        /// Property address (optional).
        #[arg(long)]
        address: Option<String>,
        /// Postal code (5 digits).
        #[arg(long = "postal-code")]
        postal_code: String,
        /// Property type: casa, piso, chalet, atico, or otro.
        #[arg(long = "property-type", default_value = "casa")]
        property_type: String,
        /// Accept the privacy policy (required to submit).
        #[arg(long)]
        accept_privacy: bool,
    },
    /// List stored submissions.
    List,
    /// Check whether the server is reachable.
    Status,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{RED}Error:{RESET} {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Submit {
            name,
            email,
            phone,
            address,
            postal_code,
            property_type,
            accept_privacy,
        } => {
            let mut session = FormSession::new(FormSchema::property_lead());
            session.set("property_type", property_type);
            session.set("postal_code", postal_code);
            if let Some(address) = address {
                session.set("address", address);
            }
            session.set("name", name);
            session.set("phone", phone);
            session.set("email", email);
            if accept_privacy {
                session.check("privacy");
            }
            submit(&cli.addr, session).await
        }
        Commands::List => list(&cli.addr).await,
        Commands::Status => status(&cli.addr).await,
    }
}

// ── HTTP transport ───────────────────────────────────────────────────

struct HttpTransport {
    client: reqwest::Client,
    base: String,
}

impl HttpTransport {
    fn new(addr: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: addr.trim_end_matches('/').to_owned(),
        }
    }
}

#[async_trait::async_trait]
impl LeadTransport for HttpTransport {
    async fn send(&self, payload: &SubmissionInput) -> Result<TransportReply, TransportError> {
        let response = self
            .client
            .post(format!("{}/submit", self.base))
            .json(payload)
            .send()
            .await
            .map_err(|err| TransportError::Network {
                reason: err.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|err| TransportError::Network {
                reason: err.to_string(),
            })?
            .to_vec();

        Ok(TransportReply { status, body })
    }
}

// ── Commands ─────────────────────────────────────────────────────────

async fn submit(addr: &str, session: FormSession) -> Result<ExitCode> {
    let mut controller = SubmitController::new(session);

    // Walk the steps the way the page does: each one must validate before
    // the next becomes visible.
    let last = controller.session().schema().step_count().saturating_sub(1);
    for _ in 0..last {
        let step = controller.session().current_step();
        let title = controller.session().schema().steps()[step].title;
        if controller.session_mut().next() {
            println!("{GREEN}✓{RESET} {title}");
        } else {
            println!("{RED}✗{RESET} {title}");
            print_field_errors(controller.session());
            return Ok(ExitCode::FAILURE);
        }
    }

    let transport = HttpTransport::new(addr);
    let outcome = controller.submit(&transport).await;

    match outcome {
        SubmitOutcome::Accepted => {
            print_notice(&controller);
            Ok(ExitCode::SUCCESS)
        }
        SubmitOutcome::Invalid { step } => {
            let title = controller.session().schema().steps()[step].title;
            println!("{RED}✗{RESET} {title}");
            print_field_errors(controller.session());
            Ok(ExitCode::FAILURE)
        }
        SubmitOutcome::Rejected | SubmitOutcome::Failed => {
            print_notice(&controller);
            Ok(ExitCode::FAILURE)
        }
        SubmitOutcome::AlreadyInFlight => {
            println!("{YELLOW}!{RESET} a submission is already in flight");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_field_errors(session: &FormSession) {
    for (field, message) in session.errors() {
        let label = session
            .schema()
            .field(field)
            .map_or(field.as_str(), |spec| spec.label);
        println!("    {BOLD}{label}{RESET}: {message}");
    }
}

fn print_notice(controller: &SubmitController) {
    if let Some(notice) = controller.notice() {
        match notice.kind {
            NoticeKind::Success => println!("{GREEN}{BOLD}{}{RESET}", notice.text),
            NoticeKind::Error => println!("{RED}{BOLD}{}{RESET}", notice.text),
        }
    }
}

async fn list(addr: &str) -> Result<ExitCode> {
    let base = addr.trim_end_matches('/');
    let submissions: Vec<Value> = reqwest::get(format!("{base}/submissions"))
        .await
        .context("could not reach the server")?
        .json()
        .await
        .context("could not parse the submissions list")?;

    if submissions.is_empty() {
        println!("No submissions yet.");
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{BOLD}{:<25} {:<20} {:<11} {:<28} {:<6} {:<8}{RESET}",
        "TIMESTAMP", "NAME", "PHONE", "EMAIL", "CP", "TYPE"
    );
    for submission in &submissions {
        let field = |key: &str| {
            submission
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or("-")
                .to_owned()
        };
        println!(
            "{:<25} {:<20} {:<11} {:<28} {:<6} {:<8}",
            field("timestamp"),
            field("name"),
            field("phone"),
            field("email"),
            field("postal_code"),
            field("property_type"),
        );
    }
    println!("\n{} submission(s)", submissions.len());
    Ok(ExitCode::SUCCESS)
}

async fn status(addr: &str) -> Result<ExitCode> {
    let base = addr.trim_end_matches('/');
    match reqwest::get(format!("{base}/")).await {
        Ok(response) if response.status().is_success() => {
            println!("{GREEN}●{RESET} server reachable at {base}");
            Ok(ExitCode::SUCCESS)
        }
        Ok(response) => {
            println!(
                "{YELLOW}●{RESET} server at {base} answered with status {}",
                response.status()
            );
            Ok(ExitCode::FAILURE)
        }
        Err(err) => {
            println!("{RED}●{RESET} server unreachable at {base}: {err}");
            Ok(ExitCode::FAILURE)
        }
    }
}
