use clap::Parser;
use hvac_harvest::{Harvester, HarvestConfig, RunOutcome, history};
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            ::log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => HarvestConfig::from_file(path)?,
        None => HarvestConfig::default(),
    }
    .with_env_overrides();

    if let Some(output) = args.output {
        config.export_path = output;
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }

    ::log::info!(
        "Collecting from {} sources with {} keywords",
        config.sources.len(),
        config.keywords.len()
    );

    let harvester = Harvester::new(&config)?;
    let start_time = std::time::Instant::now();
    let outcome = harvester
        .collect_and_export(args.state.as_deref(), args.days)
        .await?;
    ::log::info!(
        "Run finished in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );

    let code = match outcome {
        RunOutcome::Exported(result) => {
            println!(
                "Exported {} records to {}",
                result.record_count,
                result.file_path.display()
            );
            ExitCode::SUCCESS
        }
        RunOutcome::NoResults => {
            println!("Nenhum edital encontrado com os filtros aplicados.");
            ExitCode::from(2)
        }
    };

    let entries = harvester.run_log().await;
    print!("{}", history::render_text(&entries));

    if let Some(path) = args.history_html {
        std::fs::write(&path, history::render_html(&entries))?;
        ::log::info!("Wrote run history to {}", path.display());
    }

    Ok(code)
}
