mod cli;
mod prompt;
mod settings;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tagcloud_core::WordLimit;
use tagcloud_engine::{JobReport, TagCloudJob};
use tagcloud_logging::{cloud_debug, cloud_info};

use cli::Args;
use prompt::Given;

fn main() -> ExitCode {
    let args = Args::parse();
    tagcloud_logging::initialize(args.log_destination(), args.log_level());

    match run(args) {
        Ok(Some(report)) => {
            println!(
                "Wrote {} words to {}",
                report.cloud.entries.len(),
                report.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(err) => {
            cloud_debug!("run failed: {err:?}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<Option<JobReport>> {
    let config = settings::load_config(args.config.as_deref())?;
    if args.dump_config {
        println!("{}", settings::render_config(&config)?);
        return Ok(None);
    }

    let given = Given {
        input: args.input,
        output: args.output,
        count: args.count,
    };
    let request = {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout().lock();
        prompt::resolve(given, !args.allow_any_extension, &mut input, &mut output)?
    };
    let limit = WordLimit::try_from(request.count)?;

    let mut job = TagCloudJob::new(&request.input, &request.output, limit);
    job.config = config;
    job.summary = args.summary;

    let report = job
        .run()
        .with_context(|| format!("failed to build tag cloud from {}", request.input))?;
    cloud_info!("tag cloud decoded input as {}", report.encoding_label);
    Ok(Some(report))
}
