use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use distcheck_core::DistributionDescriptor;
use distcheck_fixture::FixtureStore;

mod build_ops;
mod completion;
mod flows;
mod render;


#[derive(Parser, Debug)]
#[command(name = "distcheck")]
#[command(about = "Conformance harness for custom Gradle distribution builders", long_about = None)]
struct Cli {
    #[arg(long, default_value = "fixtures")]
    fixtures_root: PathBuf,
    #[arg(long, default_value = "gradle")]
    gradle_command: String,
    #[arg(long, default_value = "4.10")]
    gradle_version: String,
    #[arg(long, default_value = "my-project")]
    distribution_name: String,
    #[arg(long, default_value = "1.0")]
    distribution_version: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    List,
    Prepare {
        case: String,
    },
    Verify {
        case: String,
        #[arg(long)]
        project: PathBuf,
    },
    Run {
        case: String,
    },
    Completions {
        shell: Shell,
    },
}

fn main() -> Result<()> {
    run_cli(Cli::parse())
}

fn run_cli(cli: Cli) -> Result<()> {
    let descriptor = DistributionDescriptor::new(
        &cli.gradle_version,
        &cli.distribution_name,
        &cli.distribution_version,
    )?;
    let store = FixtureStore::new(&cli.fixtures_root);

    match cli.command {
        Commands::List => {
            for case in store.list_cases()? {
                println!("{case}");
            }
        }
        Commands::Prepare { case } => {
            flows::run_prepare_command(&store, &descriptor, &case)?;
        }
        Commands::Verify { case, project } => {
            flows::run_verify_command(&store, &descriptor, &case, &project)?;
        }
        Commands::Run { case } => {
            let runner = build_ops::GradleBuildRunner::new(&cli.gradle_command);
            flows::run_case_command(&store, &descriptor, &runner, &case)?;
        }
        Commands::Completions { shell } => {
            completion::write_completions_script(shell, &mut std::io::stdout())?;
        }
    }

    Ok(())
}
