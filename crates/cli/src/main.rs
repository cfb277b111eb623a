//! Command-line driver for the ossim policy simulator.
//!
//! This binary runs one simulation per invocation and prints the outcome. It provides:
//! 1. **page:** Trace a reference string through memory frames under one eviction policy.
//! 2. **compare-paging:** Run the same reference string under every eviction policy.
//! 3. **schedule:** Schedule a JSON process list on one CPU.
//!
//! Output is JSON by default; `--format text` prints a plain statistics table.

use std::{fs, process};

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ossim_core::config::{DispatchPolicyKind, EvictionPolicyKind, SchedulingConfig, SimConfig};
use ossim_core::input::{load_processes, parse_reference_string};
use ossim_core::paging::{self, ReferenceTraceEngine, TraceResult};
use ossim_core::sched::{ProcessResult, ProcessScheduler, ScheduleResult};
use ossim_core::stats::{self, ChartOrder, FaultStats, ScheduleSummary};
use ossim_core::{PageRef, Tick};

#[derive(Parser, Debug)]
#[command(
    name = "ossim",
    author,
    version,
    about = "Step-by-step page replacement and CPU scheduling simulator",
    long_about = "Simulate FIFO/LRU/LFU/Optimal page replacement or FCFS/SJF/Priority/Round Robin scheduling.\n\nExamples:\n  ossim page --frames 3 --policy lru --refs \"1 2 3 1 2 4\"\n  ossim compare-paging --frames 3 --refs \"7 0 1 2 0 3 0 4\"\n  ossim schedule --policy rr --quantum 2 --input procs.json --format text"
)]
struct Cli {
    /// JSON configuration file supplying defaults for omitted options.
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Trace a reference string under one eviction policy.
    Page {
        /// Number of memory frames.
        #[arg(short, long)]
        frames: Option<usize>,

        /// Eviction policy: fifo, lru, lfu, optimal.
        #[arg(short, long)]
        policy: Option<EvictionPolicyKind>,

        /// Whitespace-separated page references; non-integer tokens are ignored.
        #[arg(short, long, allow_hyphen_values = true)]
        refs: String,

        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Trace a reference string under every eviction policy.
    ComparePaging {
        /// Number of memory frames.
        #[arg(short, long)]
        frames: Option<usize>,

        /// Whitespace-separated page references; non-integer tokens are ignored.
        #[arg(short, long, allow_hyphen_values = true)]
        refs: String,

        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Schedule processes read from a JSON array of `{id, arrival, burst, priority}`.
    Schedule {
        /// Dispatch policy: fcfs, sjf, priority, rr.
        #[arg(short, long)]
        policy: Option<DispatchPolicyKind>,

        /// Round Robin quantum in ticks.
        #[arg(short, long)]
        quantum: Option<Tick>,

        /// Path to the process list.
        #[arg(short, long)]
        input: String,

        /// Ordering of the per-process chart data: arrival, priority, id, burst.
        #[arg(long, default_value = "arrival")]
        order: ChartOrder,

        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

#[derive(Serialize)]
struct PageReport<'a> {
    trace: &'a TraceResult,
    stats: FaultStats,
}

#[derive(Serialize)]
struct PolicyComparison {
    policy: EvictionPolicyKind,
    stats: FaultStats,
    final_memory: Vec<Option<PageRef>>,
}

#[derive(Serialize)]
struct ScheduleReport<'a> {
    schedule: &'a ScheduleResult,
    summary: ScheduleSummary,
    chart: Vec<ProcessResult>,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Page {
            frames,
            policy,
            refs,
            format,
        } => cmd_page(&config, frames, policy, &refs, format),
        Commands::ComparePaging {
            frames,
            refs,
            format,
        } => cmd_compare_paging(&config, frames, &refs, format),
        Commands::Schedule {
            policy,
            quantum,
            input,
            order,
            format,
        } => cmd_schedule(&config, policy, quantum, &input, order, format),
    }
}

/// Installs a stderr subscriber filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Prints `message` to stderr and exits with code 1.
fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    process::exit(1);
}

/// Loads the configuration file, or the defaults when none is given.
fn load_config(path: Option<&str>) -> SimConfig {
    let Some(path) = path else {
        return SimConfig::default();
    };
    let json = fs::read_to_string(path)
        .unwrap_or_else(|e| fail(&format!("reading config {path}: {e}")));
    SimConfig::from_json(&json).unwrap_or_else(|e| fail(&format!("config {path}: {e}")))
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => fail(&format!("serializing output: {e}")),
    }
}

fn cmd_page(
    config: &SimConfig,
    frames: Option<usize>,
    policy: Option<EvictionPolicyKind>,
    refs: &str,
    format: Format,
) {
    let frames = frames.unwrap_or(config.paging.frames);
    let policy = policy.unwrap_or(config.paging.policy);
    let references = parse_reference_string(refs);
    info!(frames, %policy, references = references.len(), "running page trace");

    let trace = ReferenceTraceEngine::new(frames, policy).run(&references);
    match format {
        Format::Json => print_json(&PageReport {
            trace: &trace,
            stats: trace.fault_stats(),
        }),
        Format::Text => print_trace(&trace),
    }
}

fn cmd_compare_paging(config: &SimConfig, frames: Option<usize>, refs: &str, format: Format) {
    let frames = frames.unwrap_or(config.paging.frames);
    let references = parse_reference_string(refs);
    let rows: Vec<PolicyComparison> = paging::compare(frames, &references)
        .iter()
        .map(|trace| PolicyComparison {
            policy: trace.policy,
            stats: trace.fault_stats(),
            final_memory: trace.final_memory().to_vec(),
        })
        .collect();

    match format {
        Format::Json => print_json(&rows),
        Format::Text => {
            println!("frames={frames} references={}", references.len());
            println!("{:<10} {:>7} {:>7} {:>9}", "policy", "faults", "hits", "hit_rate");
            for row in &rows {
                println!(
                    "{:<10} {:>7} {:>7} {:>8.2}%",
                    row.policy.name(),
                    row.stats.faults,
                    row.stats.hits,
                    row.stats.hit_rate_pct
                );
            }
        }
    }
}

fn cmd_schedule(
    config: &SimConfig,
    policy: Option<DispatchPolicyKind>,
    quantum: Option<Tick>,
    input: &str,
    order: ChartOrder,
    format: Format,
) {
    let scheduling = SchedulingConfig {
        policy: policy.unwrap_or(config.scheduling.policy),
        quantum: quantum.unwrap_or(config.scheduling.quantum),
    };
    if let Err(e) = scheduling.validate() {
        fail(&e.to_string());
    }

    let json = fs::read_to_string(input)
        .unwrap_or_else(|e| fail(&format!("reading processes {input}: {e}")));
    let table = load_processes(&json, scheduling.policy)
        .unwrap_or_else(|e| fail(&format!("processes {input}: {e}")));
    info!(policy = %scheduling.policy, processes = table.len(), "running schedule");

    let schedule = ProcessScheduler::from_config(&scheduling).run(table.processes());
    let summary = schedule.summary();
    let chart = stats::ordered(&schedule.processes, order);
    match format {
        Format::Json => print_json(&ScheduleReport {
            schedule: &schedule,
            summary,
            chart,
        }),
        Format::Text => print_schedule(&schedule, &summary, &chart),
    }
}

fn print_trace(trace: &TraceResult) {
    println!("policy={} frames={}", trace.policy, trace.frames);
    for (i, step) in trace.steps.iter().enumerate() {
        let frames: Vec<String> = step
            .memory
            .iter()
            .map(|slot| slot.map_or_else(|| "-".to_string(), |p| p.to_string()))
            .collect();
        println!(
            "{:>4}  page {:>4}  [{}]{}",
            i + 1,
            step.page,
            frames.join(" "),
            if step.fault { "  fault" } else { "" }
        );
    }
    println!("----------------------------------------------------------");
    println!("{}", trace.fault_stats());
}

fn print_schedule(schedule: &ScheduleResult, summary: &ScheduleSummary, chart: &[ProcessResult]) {
    println!("policy={}", schedule.policy);
    let bars: Vec<String> = schedule
        .gantt
        .iter()
        .map(|s| format!("{} {}-{}", s.process_id, s.start, s.end()))
        .collect();
    println!("| {} |", bars.join(" | "));
    println!("----------------------------------------------------------");
    println!(
        "{:<8} {:>7} {:>5} {:>8} {:>5} {:>6} {:>7} {:>10} {:>8}",
        "id", "arrival", "burst", "priority", "start", "finish", "waiting", "turnaround", "response"
    );
    for r in chart {
        println!(
            "{:<8} {:>7} {:>5} {:>8} {:>5} {:>6} {:>7} {:>10} {:>8}",
            r.id,
            r.arrival,
            r.burst,
            r.priority.map_or_else(|| "-".to_string(), |p| p.to_string()),
            r.start,
            r.finish,
            r.waiting,
            r.turnaround,
            r.response
        );
    }
    println!("----------------------------------------------------------");
    println!("{summary}");
}
