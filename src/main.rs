use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};
use smart_ctor::application::processor::PaymentProcessor;
use smart_ctor::domain::bounded::{Between1And5, Percentage};
use smart_ctor::interfaces::csv::payment_reader::PaymentReader;
use smart_ctor::interfaces::report::{OutputFormat, ReportWriter};
use smart_ctor::logging::init_logger;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate and format payments from a CSV file
    Payments {
        /// Input payments CSV file
        input: PathBuf,
    },
    /// Check integers against a bounded range
    Range {
        #[arg(long, value_enum, default_value_t = RangeKind::Between1And5)]
        kind: RangeKind,

        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Build a person through the non-empty name check
    Person { name: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum RangeKind {
    #[value(name = "between1-and5")]
    Between1And5,
    Percentage,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let stdout = io::stdout();
    let report = ReportWriter::new(stdout.lock(), cli.format);
    let mut processor = PaymentProcessor::new(report);

    match cli.command {
        Command::Payments { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = PaymentReader::new(file);
            processor.process_payments(reader.payments())?;
        }
        Command::Range { kind, values } => {
            match kind {
                RangeKind::Between1And5 => processor.check_range::<Between1And5>(&values)?,
                RangeKind::Percentage => processor.check_range::<Percentage>(&values)?,
            };
        }
        Command::Person { name } => {
            processor.check_person(&name)?;
        }
    }

    processor.finish()?;
    Ok(())
}
