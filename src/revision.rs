use crate::cmd;
use crate::context::Context;
use crate::result::Result;
use crate::submission;
use std::fs;

/// Record the abbreviated hash of the most recent commit into the revision
/// marker file. Best-effort: the outcome is discarded, so a missing git
/// binary, a non-repository checkout, or an unwritable marker path never
/// aborts the run. The grader-visible consequence is a missing-file warning
/// when the marker is archived.
pub fn record(ctx: &Context) {
    let _ = try_record(ctx);
}

fn try_record(ctx: &Context) -> Result<()> {
    let hash = cmd::execute_with_output(ctx, "git", &["log", "-1", "--pretty=format:%h"])?;
    fs::write(ctx.base_dir.join(submission::REVISION_MARKER), hash.trim())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn silent_outside_a_repository() {
        let dir = tempdir().unwrap();
        let ctx = Context::new(dir.path().to_path_buf(), false);

        record(&ctx);

        assert!(!dir.path().join(submission::REVISION_MARKER).exists());
    }
}
