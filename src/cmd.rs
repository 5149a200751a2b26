use crate::context::Context;
use crate::error::Error;
use crate::result::Result;
use std::process::Command;

/// Execute a command in the checkout's base directory and capture its output
pub fn execute_with_output(ctx: &Context, program: &str, args: &[&str]) -> Result<String> {
    if ctx.verbose {
        println!("Executing: {} {}", program, args.join(" "));
    }

    let output = Command::new(program)
        .args(args)
        .current_dir(&ctx.base_dir)
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::CommandFailed(format!(
            "{} {} failed: {}",
            program,
            args.join(" "),
            stderr
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
