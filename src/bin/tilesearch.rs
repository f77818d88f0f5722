use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tilesearch::search::{
    search_engines::{SearchEngineName, SearchResult},
    successor_generators::SuccessorGeneratorName,
    validate_result, NoTrace, SearchReport, SearchTrace, Task, TraceFile, Verbosity,
};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(version)]
/// Solve an 8-puzzle where every move costs the value of the moved tile.
struct Cli {
    #[arg(help = "The start board file")]
    start: PathBuf,
    #[arg(help = "The goal board file")]
    goal: PathBuf,
    #[arg(
        help = "The search method: BFS, UCS, GREEDY or A*. Anything else runs \
        A*, and `true`/`false` is taken as the dump flag",
        id = "METHOD"
    )]
    method: Option<String>,
    #[arg(help = "Whether to write a trace file (`true` or `false`)", id = "DUMP")]
    dump: Option<String>,
    #[arg(
        help = "The directory the trace file is written to",
        long = "trace-dir",
        id = "TRACE_DIR",
        default_value = "."
    )]
    trace_dir: PathBuf,
    #[arg(
        help = "Also write the result as JSON to this file",
        short = 'r',
        long = "report",
        id = "REPORT"
    )]
    report: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match solve(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn solve(cli: Cli) -> tilesearch::Result<()> {
    let (strategy, dump) =
        SearchEngineName::from_arguments(cli.method.as_deref(), cli.dump.as_deref());
    let task = Task::from_path(&cli.start, &cli.goal)?;

    println!("Start File: {}", cli.start.display());
    println!("Goal File: {}", cli.goal.display());
    println!("Method: {}", strategy);
    println!("Dump Flag: {}", dump);
    println!("Solving using {}", strategy.description());

    let mut trace_file = None;
    if dump {
        match TraceFile::create(&cli.trace_dir) {
            Ok((mut trace, path)) => {
                info!(trace_file = %path.display(), "writing trace");
                let arguments: Vec<String> = std::env::args().collect();
                trace.write_header(&arguments, &strategy.to_string());
                trace_file = Some(trace);
            }
            Err(e) => warn!("could not create trace file, continuing without: {}", e),
        }
    }
    let mut no_trace = NoTrace;
    let trace: &mut dyn SearchTrace = match trace_file.as_mut() {
        Some(trace) => trace,
        None => &mut no_trace,
    };

    let generator_name = SuccessorGeneratorName::default();
    let (result, statistics) = strategy.search(&task, generator_name, trace)?;

    if let SearchResult::Success(_) = &result {
        info!("validating plan");
        validate_result(&result, generator_name.create().as_ref(), &task)?;
        info!("plan is valid");
    } else {
        info!("no plan found");
    }

    let report = SearchReport::new(&result, &statistics);
    println!();
    print!("{}", report);

    if let Some(report_path) = &cli.report {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(report_path, json).map_err(|source| tilesearch::Error::Io {
            path: report_path.clone(),
            source,
        })?;
        info!(report = %report_path.display(), "report written");
    }

    Ok(())
}
