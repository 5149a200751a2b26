mod archive;
mod args;
mod cmd;
mod context;
mod error;
mod result;
mod revision;
mod submission;

use args::Args;
use context::Context;
use std::path::PathBuf;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    // Parse command-line arguments
    let Args { verbose, path } = Args::parse();

    let base_dir = match path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    // Create context
    let ctx = Context::new(base_dir, verbose);

    // Use cliclack for nice UI
    cliclack::intro("submit")?;

    // Refresh the revision marker before archiving; failures are ignored and
    // surface later as a missing-file warning
    revision::record(&ctx);

    let files: Vec<PathBuf> = submission::FILES
        .iter()
        .map(|file| ctx.base_dir.join(file))
        .collect();
    let output = ctx.base_dir.join(submission::ARCHIVE_NAME);

    let spinner = cliclack::spinner();
    spinner.start("Creating submission archive...");

    let report = match archive::create(&ctx, &files, &output) {
        Ok(report) => {
            spinner.stop(format!(
                "Added {} file(s) to {}",
                report.entries.len(),
                submission::ARCHIVE_NAME
            ));
            report
        }
        Err(e) => {
            spinner.error("Failed to create submission archive");
            return Err(e);
        }
    };

    for path in &report.missing {
        cliclack::log::warning(format!(
            "{} is missing and will not be included in {}",
            path.display(),
            submission::ARCHIVE_NAME
        ))?;
    }

    cliclack::outro(format!(
        "Submission archive created: {}. Send it to the grader along with your report.",
        output.display()
    ))?;
    Ok(())
}
