use clap::{Parser, Subcommand};

mod check;
mod inspect;
mod normalize;

#[derive(Parser, Debug)]
#[command(name = "ephate-utils", version, about = "Parameter checks and matrix row-normalization")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Check(check::CheckArgs),
    Normalize(normalize::NormalizeArgs),
    Inspect(inspect::InspectArgs),
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        match self.command {
            Command::Check(args) => check::handle(args),
            Command::Normalize(args) => normalize::handle(args),
            Command::Inspect(args) => inspect::handle(args),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
