use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::formats::FormatKind;

mod config;
mod error;
mod formats;
mod logs;
mod model;

#[derive(Debug, Parser)]
#[command(version, about = "Convert GPS track files between formats")]
struct Cli {
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read a track file and write it out in another (or the same) format
    Convert {
        input: PathBuf,
        output: PathBuf,
        #[arg(long)]
        from: Option<FormatKind>,
        #[arg(long)]
        to: Option<FormatKind>,
    },
    /// Print the points of a track file
    Show {
        input: PathBuf,
        #[arg(long)]
        from: Option<FormatKind>,
    },
    /// List supported formats
    Formats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load_or_default(cli.config.as_deref())?;
    logs::init(config.log_level)?;

    match cli.command {
        Command::Convert {
            input,
            output,
            from,
            to,
        } => {
            let reader = FormatKind::resolve(from, &input)?.build(&config);
            let writer = FormatKind::resolve(to, &output)?.build(&config);
            let points = reader.read(&input)?;
            writer.write(&points, &output)?;
        }

        Command::Show { input, from } => {
            let reader = FormatKind::resolve(from, &input)?.build(&config);
            let mut out = csv::Writer::from_writer(std::io::stdout());
            for point in reader.read(&input)? {
                out.write_record(point.fields())?;
            }
            out.flush()?;
        }

        Command::Formats => {
            for kind in FormatKind::value_variants() {
                let format = kind.build(&config);
                println!(
                    "{}\t{}\tread={}\twrite={}",
                    format.name(),
                    kind.extensions().join(","),
                    format.can_read(),
                    format.can_write(),
                );
            }
        }
    };

    Ok(())
}
