use algebrita_linalg::operand::{
    add_operands, adjoint_operand, conjugate_operand, negate_operand, operands_same_shape,
    scale_operand, transpose_operand,
};
use algebrita_types::Operand;
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;

mod input;

/// Algebrita - elementary linear algebra over complex vectors and matrices
#[derive(Parser)]
#[command(name = "algebrita")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Elementary operations on complex vectors and matrices", long_about = "Algebrita\n\nOperands are JSON: a flat array is a vector, an array of arrays is a matrix.\nEntries are numbers or complex strings such as \"1+2i\".\nPrefix an operand with @ to read it from a file.")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether two operands have the same shape
    Dims {
        left: String,
        right: String,
    },
    /// Add two operands of the same shape
    Add {
        left: String,
        right: String,
    },
    /// Additive inverse
    Neg {
        operand: String,
    },
    /// Multiply by a real or complex scalar
    Scale {
        /// Scalar such as 2, -i or 1+2i
        #[arg(allow_hyphen_values = true)]
        scalar: String,
        operand: String,
    },
    /// Transpose (no-op for vectors)
    Transpose {
        operand: String,
    },
    /// Complex conjugate
    Conj {
        operand: String,
    },
    /// Conjugate transpose
    Adjoint {
        operand: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    // RUST_LOG, when set, overrides the flag
    builder.parse_default_env();
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli.command, cli.json) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(command: Commands, json: bool) -> Result<()> {
    let result = match command {
        Commands::Dims { left, right } => {
            let equal = operands_same_shape(&input::read_operand(&left)?, &input::read_operand(&right)?);
            println!("{}", equal);
            return Ok(());
        }
        Commands::Add { left, right } => {
            add_operands(&input::read_operand(&left)?, &input::read_operand(&right)?)?
        }
        Commands::Neg { operand } => negate_operand(&input::read_operand(&operand)?),
        Commands::Scale { scalar, operand } => {
            scale_operand(input::read_scalar(&scalar)?, &input::read_operand(&operand)?)
        }
        Commands::Transpose { operand } => transpose_operand(&input::read_operand(&operand)?),
        Commands::Conj { operand } => conjugate_operand(&input::read_operand(&operand)?),
        Commands::Adjoint { operand } => adjoint_operand(&input::read_operand(&operand)?),
    };

    print_operand(&result, json)
}

fn print_operand(operand: &Operand, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(operand)?);
    } else {
        println!("{}", operand);
    }
    Ok(())
}
