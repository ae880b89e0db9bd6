use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use antechamber_bridge::{AtomTypeStyle, AtomTyper, Structure, TypingInput, TypingRequest};

#[derive(Parser)]
#[command(author, version, about = "Antechamber atom-typing bridge")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assigns atom types to a MOL2 structure via external antechamber.
    Assign {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,

        /// Atom-typing style: gaff, gaff2, amber, bcc or sybyl.
        #[arg(long, default_value = "gaff")]
        style: String,

        /// Net charge of the molecule.
        #[arg(long, default_value_t = 0.0)]
        net_charge: f64,

        /// Spin multiplicity, 2S + 1.
        #[arg(long, default_value_t = 1)]
        multiplicity: u32,

        /// Custom destination for the antechamber failure log.
        #[arg(long)]
        error_log: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let start_time = Instant::now();

    match cli.command {
        Commands::Assign {
            input,
            output,
            style,
            net_charge,
            multiplicity,
            error_log,
        } => {
            println!("--- Antechamber Bridge ---");

            let style: AtomTypeStyle = style.parse()?;

            // 1. Parsing
            println!("Reading structure from {:?}...", input);
            let structure = Structure::load(&input)
                .with_context(|| format!("Could not load structure from {:?}", input))?;
            println!(
                "-> Loaded {} atoms, {} bonds.",
                structure.atoms.len(),
                structure.bonds.len()
            );

            // 2. Tool discovery
            let mut typer = AtomTyper::discover()?;
            if let Some(log) = error_log {
                typer = typer.with_error_log(log);
            }

            // 3. Execution
            println!(
                "Assigning '{}' atom types (net charge {}, multiplicity {})...",
                style, net_charge, multiplicity
            );
            let mut request = TypingRequest::new(style);
            request.net_charge = net_charge;
            request.multiplicity = multiplicity;

            let typed = typer.assign_atom_types(TypingInput::Structure(&structure), &request)?;

            println!("\nSuccess!");
            println!("Writing output to {:?}...", output);
            typed
                .save(&output)
                .with_context(|| format!("Could not write typed structure to {:?}", output))?;

            println!("Done in {:.2?}", start_time.elapsed());
        }
    }

    Ok(())
}
