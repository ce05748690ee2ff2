use anyhow::Context;

use crate::base;
use crate::cli;

/// Customer transaction dashboard
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Customers(cli::cmds::customers::Customers),
    View(cli::cmds::view::View),
    Plot(cli::cmds::plot::Plot),
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        if !fs.is_repo() {
            anyhow::bail!("not a repository")
        }
        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;
        let ds = fs
            .read::<base::Dataset>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Dataset>().display()))?;

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Customers(cmd) => cmd.run(ds),
            Commands::View(cmd) => cmd.run(ds, &config),
            Commands::Plot(cmd) => cmd.run(ds, &config),
        }
    }
}
