use crate::{
    exchanges::OrderGateway,
    responses::TrialOutcome,
    trades::TradingPair,
};

use log::warn;

use std::io::{
    self,
    Write,
};



#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeSummary {
    pub trials: u32,
    pub successful_trials: u32,
    pub total_latency_micros: u128,
}

impl ProbeSummary {
    pub fn record(&mut self, outcome: &TrialOutcome) {
        self.trials += 1;
        if let Some(micros) = outcome.latency_micros() {
            self.successful_trials += 1;
            self.total_latency_micros += micros;
        }
    }

    /// Mean over successful trials only; `None` when nothing succeeded.
    pub fn average_latency_micros(&self) -> Option<f64> {
        match self.successful_trials {
            0 => None,
            n => Some(self.total_latency_micros as f64 / n as f64),
        }
    }
}

pub fn report_symbols<W: Write>(pairs: &[TradingPair], out: &mut W) -> io::Result<()> {
    writeln!(out, "Retrieved {} symbols:", pairs.len())?;
    for pair in pairs {
        writeln!(out, "{}", pair)?;
    }
    Ok(())
}

/// Sends `payload` `trials` times, one after another, streaming each result to `out`.
pub async fn run_trials<G, W>(gateway: &G, payload: &str, trials: u32, out: &mut W) -> io::Result<ProbeSummary>
where
    G: OrderGateway + ?Sized,
    W: Write,
{
    let mut summary = ProbeSummary::default();
    for trial in 1..=trials {
        writeln!(out, "\nRunning trial {}...", trial)?;
        writeln!(out, "Sending order: {}", payload)?;
        out.flush()?;

        let outcome = match gateway.submit_order(payload).await {
            Ok(ack) => {
                writeln!(out, "Order created successfully. Response: {}", ack.response)?;
                TrialOutcome::from(&ack)
            },
            Err(e) => {
                warn!("Order failed. {}", e);
                TrialOutcome::Failed
            }
        };
        match outcome.latency_micros() {
            Some(micros) => writeln!(out, "Trial {}: {} microseconds", trial, micros)?,
            None => writeln!(out, "Trial {}: Failed", trial)?,
        }
        out.flush()?;
        summary.record(&outcome);
    }
    Ok(summary)
}

/// Prints the mean with two decimals, or the no-success line when nothing succeeded.
pub fn report_summary<W: Write>(summary: &ProbeSummary, out: &mut W) -> io::Result<()> {
    match summary.average_latency_micros() {
        Some(avg) => writeln!(out, "\nAverage latency: {:.2} microseconds", avg),
        None => writeln!(out, "\nNo successful trials completed."),
    }
}
