use clap::Parser;
use page_archiver::{Archiver, Status};
use std::io::Read;
use std::process::ExitCode;
use tokio::sync::mpsc;

mod args;
use args::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let archiver = match build_archiver(&args) {
        Ok(archiver) => archiver,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let input = match read_input(&args) {
        Ok(input) => input,
        Err(e) => {
            ::log::error!("Failed to read links: {}", e);
            return ExitCode::FAILURE;
        }
    };

    ::log::info!(
        "Writing archives to {}",
        archiver.config().output_dir.display()
    );

    // Print every status update as it arrives
    let (tx, mut rx) = mpsc::unbounded_channel::<Status>();
    let printer = tokio::spawn(async move {
        while let Some(status) = rx.recv().await {
            println!("{}", status);
        }
    });

    let start_time = std::time::Instant::now();
    let result = archiver.run(&input, &tx).await;
    drop(tx);
    let _ = printer.await;

    match result {
        Ok(report) => {
            ::log::info!(
                "Archived {} of {} links in {:.2} seconds",
                report.succeeded(),
                report.outcomes.len(),
                start_time.elapsed().as_secs_f64()
            );
            if report.failed() > 0 {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            ::log::error!("Failed to start archiver: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn build_archiver(args: &Args) -> Result<Archiver, Box<dyn std::error::Error>> {
    let mut archiver = Archiver::new();
    if let Some(path) = &args.config {
        archiver = archiver.with_config_file(path)?;
    }
    if let Some(dir) = &args.output_dir {
        archiver = archiver.with_output_dir(dir);
    }
    if let Some(timeout) = args.timeout {
        archiver = archiver.with_timeout(timeout);
    }
    if let Some(user_agent) = &args.user_agent {
        archiver = archiver.with_user_agent(user_agent);
    }
    Ok(archiver)
}

fn read_input(args: &Args) -> std::io::Result<String> {
    match &args.input {
        Some(path) if !args.reads_stdin() => std::fs::read_to_string(path),
        _ => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}
