use clap::Parser;

use common::env::DEFAULT_PARAM_VAR;
use common::job::DEFAULT_JOB_PATH;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path of the job configuration written by the submitting harness.
    #[arg(short, long, default_value = DEFAULT_JOB_PATH)]
    pub config: String,

    /// Environment variable holding the job parameter.
    #[arg(short, long, default_value = DEFAULT_PARAM_VAR)]
    pub param: String,

    /// Don't read or print the job parameter.
    #[arg(long)]
    pub no_param: bool,

    /// Pretty-print the job configuration.
    #[arg(long)]
    pub pretty: bool,

    /// Don't print the startup banner.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Name of the parameter variable to report, if any.
    pub fn param_var(&self) -> Option<&str> {
        (!self.no_param).then_some(self.param.as_str())
    }
}
