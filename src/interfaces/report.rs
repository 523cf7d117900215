use crate::domain::constraint::Violation;
use crate::domain::payment::{PaymentMethod, format_payment};
use crate::error::{PaymentError, Result};
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A rejected input record, as emitted in JSON mode.
#[derive(Debug, Serialize)]
struct Rejection<'a> {
    kind: &'static str,
    error: String,
    violations: &'a [Violation],
}

impl<'a> From<&'a PaymentError> for Rejection<'a> {
    fn from(error: &'a PaymentError) -> Self {
        let violations: &[Violation] = match error {
            PaymentError::ValidationError(e) => e.violations.as_slice(),
            _ => &[],
        };
        Self {
            kind: "rejected",
            error: error.to_string(),
            violations,
        }
    }
}

/// Writes one line per item to the underlying sink.
pub struct ReportWriter<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn write_payment(&mut self, pm: &PaymentMethod) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.writer, "{}", format_payment(pm))?,
            OutputFormat::Json => self.write_json(pm)?,
        }
        Ok(())
    }

    /// Records a rejected input. Text reports list accepted items only, so
    /// this writes nothing in text mode.
    pub fn write_rejection(&mut self, error: &PaymentError) -> Result<()> {
        match self.format {
            OutputFormat::Text => Ok(()),
            OutputFormat::Json => self.write_json(&Rejection::from(error)),
        }
    }

    /// Writes `text` verbatim in text mode and `value` as a JSON line otherwise.
    pub fn write_line<T: Serialize>(&mut self, text: &str, value: &T) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.writer, "{text}")?,
            OutputFormat::Json => self.write_json(value)?,
        }
        Ok(())
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer(&mut self.writer, value)?;
        writeln!(self.writer)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
