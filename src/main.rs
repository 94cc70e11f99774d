use std::path::PathBuf;

use clap::Parser;
use elastic_orchestrator::error::{MetricLabel, OrchestratorError};
use elastic_orchestrator::settings::load_settings;
use elastic_orchestrator::tracing::{get_subscriber, init_subscriber};
use elastic_orchestrator::{decide, PolicyKind, ScalingPolicy, Trace, TraceFormat};

/// Decide whether to activate a server (1), deactivate one (-1) or take no action (0).
#[derive(Parser, Debug)]
#[command(version, allow_negative_numbers = true)]
struct CliOptions {
    /// current number of tasks
    tasks: u64,

    /// number of active servers
    servers: u32,

    /// tasks each server can hold
    capacity: u32,

    /// current simulation timestamp
    timestamp: f64,

    /// scaling policy: threshold_based (by_threshold), reactive, conservative or predictive (oracle)
    policy: PolicyKind,

    /// trace file of `<timestamp> <task_count>` lines, required by the predictive policy
    trace: Option<PathBuf>,

    /// settings file overriding policy defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// trace layout, inferred from the trace file extension when omitted
    #[arg(short, long)]
    format: Option<TraceFormat>,
}

fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("orchestrate", "warn", std::io::stderr);
    init_subscriber(subscriber);

    let opts = CliOptions::parse();
    tracing::info!(?opts, "CLI parsed");

    match run(&opts) {
        Ok(action) => {
            println!("{}", action);
            Ok(())
        }
        Err(err) => {
            tracing::error!(error=?err, label=%err.label(), "failed to decide scaling action");
            Err(err.into())
        }
    }
}

fn run(opts: &CliOptions) -> Result<i32, OrchestratorError> {
    let settings = load_settings(opts.config.as_deref())?;
    let policy = ScalingPolicy::from_settings(opts.policy, &settings.policies)?;

    let trace = match settings.trace_source(opts.trace.as_deref(), opts.format) {
        Some(ts) if policy.requires_trace() => Some(Trace::load_as(&ts.path, ts.format())?),
        _ => None,
    };

    let decision = decide(
        opts.tasks,
        opts.servers,
        opts.capacity,
        opts.timestamp,
        &policy,
        trace.as_ref(),
    )?;
    Ok(decision.into())
}
