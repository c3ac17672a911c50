use clap::CommandFactory;
use tracing_subscriber::EnvFilter;

use weorcanjan::cli::{self, Action, ActionCategory, Args};
use weorcanjan::commands::Invocation;
use weorcanjan::config::{get_data_dir, load_config};
use weorcanjan::error;
use weorcanjan::guards;
use weorcanjan::inventory::SystemProcessSource;

fn main() {
    match run() {
        Ok(code) => {
            std::process::exit(code);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("WEORCANJAN_LOG")
                .map(EnvFilter::new)
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn print_action_table() {
    println!();
    println!("Commands: {:?}", cli::aliases(ActionCategory::Command));
    println!("Debug actions: {:?}", cli::aliases(ActionCategory::Debug));
    println!();
}

fn run() -> error::Result<i32> {
    let args = cli::parse_args();
    init_logging(args.debug);

    if args.debug {
        print_action_table();
    }

    guards::guard_platform()?;

    let Some(action) = Action::parse(&args.action) else {
        println!("Unknown action: {}", args.action);
        println!();
        Args::command().print_help()?;
        return Ok(0);
    };

    let config = load_config()?;
    guards::guard_version(config.guard.get_baseline_release(), args.allow_win11);

    println!("Action: {}", action.long());

    let data_dir = get_data_dir()?;
    tracing::debug!("Data directory: {}", data_dir.display());

    if action.category() == ActionCategory::Command {
        let mut source = SystemProcessSource::new();
        guards::guard_invocation(&mut source, config.guard.get_many_process_threshold());
    }

    let invocation = Invocation::new(action, &args, config, data_dir);
    (action.spec().handler)(&invocation)
}
