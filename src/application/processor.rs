use crate::domain::bounded::{Bounded, Bounds};
use crate::domain::payment::PaymentMethod;
use crate::domain::person::Person;
use crate::error::Result;
use crate::interfaces::report::ReportWriter;
use serde::Serialize;
use std::io::Write;

/// Counts of processed records.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub accepted: usize,
    pub rejected: usize,
}

/// Outcome of checking one integer against a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeCheck {
    pub value: i64,
    pub accepted: bool,
}

/// Drives batches of domain values into a report.
///
/// Invalid input is counted and logged, never fatal; only sink failures
/// abort processing.
pub struct PaymentProcessor<W: Write> {
    report: ReportWriter<W>,
    summary: Summary,
}

impl<W: Write> PaymentProcessor<W> {
    pub fn new(report: ReportWriter<W>) -> Self {
        Self {
            report,
            summary: Summary::default(),
        }
    }

    /// Reports a payment if it was read successfully, otherwise logs the error.
    pub fn process_payment(&mut self, payment: Result<PaymentMethod>) -> Result<()> {
        match payment {
            Ok(pm) => {
                tracing::debug!(payment = %pm, "accepted payment");
                self.report.write_payment(&pm)?;
                self.summary.accepted += 1;
            }
            Err(e) => {
                tracing::warn!("Error reading payment: {}", e);
                self.report.write_rejection(&e)?;
                self.summary.rejected += 1;
            }
        }
        Ok(())
    }

    pub fn process_payments<I>(&mut self, payments: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<PaymentMethod>>,
    {
        for payment in payments {
            self.process_payment(payment)?;
        }
        Ok(())
    }

    /// Checks each value against `R` and reports `ok` or `absent`.
    pub fn check_range<R: Bounds>(&mut self, values: &[i64]) -> Result<Vec<RangeCheck>> {
        let mut checks = Vec::with_capacity(values.len());
        for &value in values {
            let accepted = Bounded::<R>::try_new(value).is_some();
            let check = RangeCheck { value, accepted };
            let text = if accepted {
                format!("{value} ok")
            } else {
                format!("{value} absent")
            };
            self.report.write_line(&text, &check)?;
            self.tally(accepted);
            checks.push(check);
        }
        Ok(checks)
    }

    pub fn check_person(&mut self, name: &str) -> Result<Option<Person>> {
        let person = Person::try_new(name);
        match &person {
            Some(p) => self.report.write_line(&p.to_string(), p)?,
            None => self.report.write_line("absent", &person)?,
        }
        self.tally(person.is_some());
        Ok(person)
    }

    fn tally(&mut self, accepted: bool) {
        if accepted {
            self.summary.accepted += 1;
        } else {
            self.summary.rejected += 1;
        }
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Flushes the report and returns the final counts.
    pub fn finish(mut self) -> Result<Summary> {
        self.report.flush()?;
        tracing::info!(
            accepted = self.summary.accepted,
            rejected = self.summary.rejected,
            "processing finished"
        );
        Ok(self.summary)
    }
}
