use std::io::Write;

use tracing::info;

use common::{EnvSnapshot, EnvSource, JobConfig, JobFormat, ReportError, Reporter};

use crate::args::Args;

/// Load the job configuration, capture the task environment and write the
/// report to `out`.
///
/// Any failure is returned as soon as it happens. Lines already written
/// stay written.
pub fn run<E, W>(args: &Args, env: &E, out: W) -> Result<(), ReportError>
where
    E: EnvSource + ?Sized,
    W: Write,
{
    let mut reporter = Reporter::new(out);

    if !args.quiet {
        reporter.banner()?;
    }

    reporter.config_path(&args.config)?;
    reporter.flush()?;
    let job = JobConfig::load(&args.config)?;
    if let Some(keys) = job.key_count() {
        info!("Job configuration has {} top-level keys", keys);
    }

    let snapshot = EnvSnapshot::capture(env, args.param_var())?;
    info!(
        "Reporting task (node={}, proc={}, job={})",
        snapshot.node_id, snapshot.proc_id, snapshot.job_id
    );

    let format = if args.pretty {
        JobFormat::Pretty
    } else {
        JobFormat::Compact
    };

    reporter.environment(&snapshot)?;
    reporter.job(&job, format)?;
    reporter.flush()
}
