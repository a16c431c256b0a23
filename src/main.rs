use std::path::PathBuf;

use anyhow::{Context, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tracing::info;
use tracing_appender::rolling;

mod api;
mod config;
mod form;
mod intercept;
mod messages;
mod model;
mod render;

use api::LeaveApi;
use config::Config;
use form::{DayCount, FormController, SubmitOutcome};
use intercept::PassThroughInterceptor;
use model::{Attachment, LeaveType};

#[derive(Parser)]
#[command(name = "leave-form", about = "Client for the leave-request workflow")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit a leave request
    Submit {
        /// Leave category: sick, vacation, personal or other
        #[arg(long)]
        leave_type: LeaveType,
        /// First day of leave (YYYY-MM-DD), defaults to today
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Last day of leave (YYYY-MM-DD), defaults to today
        #[arg(long)]
        end: Option<NaiveDate>,
        #[arg(long)]
        reason: String,
        /// Medical certificate file, sick leave only
        #[arg(long)]
        certificate: Option<PathBuf>,
    },
    /// Print the leave-history table fragment
    History,
    /// Download the medical certificate of a request
    Download {
        id: i64,
        /// Output file, defaults to certificate-<id>
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "client.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .pretty()
        .init();

    let _interceptor = PassThroughInterceptor::install();

    let api = LeaveApi::from_config(&config).context("failed to build HTTP client")?;

    match cli.command {
        Command::Submit {
            leave_type,
            start,
            end,
            reason,
            certificate,
        } => submit(&api, leave_type, start, end, reason, certificate).await,
        Command::History => history(&api).await,
        Command::Download { id, out } => download(&api, id, out).await,
    }
}

async fn submit(
    api: &LeaveApi,
    leave_type: LeaveType,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    reason: String,
    certificate: Option<PathBuf>,
) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let mut controller = FormController::new(today);
    controller.bind(Some(leave_type));

    if let Some(date) = start {
        controller.set_start_date(date);
    }
    if let Some(date) = end {
        controller.set_end_date(date);
    }
    if controller.compute_days() == DayCount::StaleRange {
        bail!("end date is before start date");
    }
    controller.set_reason(reason);

    if let Some(path) = certificate {
        if !controller.attachment_visible() {
            bail!("only sick leave takes a medical certificate");
        }
        let bytes = std::fs::read(&path)
            .with_context(|| format!("failed to read certificate {}", path.display()))?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "certificate".to_string());
        controller
            .attach(Attachment { file_name, bytes })
            .context("certificate rejected")?;
    }

    info!(
        leave_type = %controller.draft().leave_type,
        days = controller.draft().days_requested,
        "submitting leave request"
    );

    match controller.submit(api).await {
        SubmitOutcome::Accepted { message } => {
            println!("{message}");
            println!("{}", render::render_history(controller.history()));
            Ok(())
        }
        SubmitOutcome::Rejected { message } | SubmitOutcome::Failed { message } => {
            bail!("{message}")
        }
        SubmitOutcome::InFlight => unreachable!("single submission per run"),
    }
}

async fn history(api: &LeaveApi) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let mut controller = FormController::new(today);
    controller.bind(None);

    controller.load_history(api).await;
    println!("{}", render::render_history(controller.history()));
    Ok(())
}

async fn download(api: &LeaveApi, id: i64, out: Option<PathBuf>) -> anyhow::Result<()> {
    let bytes = api
        .download_certificate(id)
        .await
        .context("certificate download failed")?;
    let out = out.unwrap_or_else(|| PathBuf::from(format!("certificate-{id}")));
    std::fs::write(&out, bytes)
        .with_context(|| format!("failed to write {}", out.display()))?;
    println!("saved {}", out.display());
    Ok(())
}
