use anyhow::Context;
use clap::Parser;
use potential_jobs::config::cli;
use potential_jobs::utils::{logger, validation::Validate};
use potential_jobs::{
    CliConfig, Command, EntityStore, JobError, JobStore, JsonFileStore, MemoryStore,
};

fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    let config = match args.resolve().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    // 初始化日誌
    if config.json_logs() {
        logger::init_json_logger(&config.logging.level);
    } else {
        logger::init_cli_logger(args.verbose, &config.logging.level);
    }
    tracing::debug!("CLI args: {:?}", args);

    if args.ephemeral {
        tracing::info!("🧪 Ephemeral mode: jobs are kept in memory only");
        let store = JobStore::new(MemoryStore::new(config.entity()));
        return run(store, &args.command);
    }

    tracing::debug!("📁 Using data directory: {}", config.data_dir());
    let store = match JsonFileStore::open(config.data_dir(), config.entity()) {
        Ok(store) => store,
        Err(e) => exit_with(&e),
    };
    run(JobStore::new(store), &args.command)
}

fn run<S: EntityStore>(mut store: JobStore<S>, command: &Command) -> anyhow::Result<()> {
    match cli::prepare(&mut store, command) {
        Ok(Some(load_error)) => {
            eprintln!("⚠️ {}", load_error.user_friendly_message());
            eprintln!("💡 {}", load_error.recovery_suggestion());
        }
        Ok(None) => {}
        Err(e) => exit_with(&e),
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = cli::execute(command, &mut store, &mut out) {
        exit_with(&e);
    }

    std::io::Write::flush(&mut out).context("failed to flush output")?;
    Ok(())
}

fn exit_with(e: &JobError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
