use std::path::PathBuf;

use clap::Args;
use tracing::{debug, info};

use crate::params::rules::{Rule, RuleSet};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// TOML file with a [params] table and [[rule]] entries
    #[arg(long)]
    pub(crate) config: PathBuf,
}

pub fn handle(args: CheckArgs) -> anyhow::Result<()> {
    let rules = RuleSet::load(&args.config)?;
    info!(
        config = %args.config.to_string_lossy(),
        params = rules.params.len(),
        rules = rules.rules.len(),
        "loaded rules"
    );
    let order: Vec<&str> = rules.rules.iter().map(Rule::name).collect();
    debug!(checks = ?order, "applying rules");
    rules.validate()?;
    info!("all parameters valid");
    Ok(())
}
