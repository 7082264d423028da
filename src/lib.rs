pub mod config;
pub mod error;
pub mod loan;
pub mod report;

pub use config::{Cli, MortgageConfig, DEFAULTS};
pub use error::{LoanError, Result};
pub use loan::{
    compute_monthly_payment, compute_payoff_months, LoanInputs, PaymentResult, PayoffScenario,
};

use log::info;

/// Runs one calculation and returns the text to print.
///
/// The payoff comparison block is only included when an extra payment is configured.
pub fn run(config: &MortgageConfig) -> Result<String> {
    let inputs = config.loan_inputs()?;
    info!("{}", inputs);

    let payment = inputs.payment();
    info!("{}", payment);

    let mut out = report::render_summary(&inputs, &payment);

    if let Some(extra) = config.extra {
        let scenario = PayoffScenario::estimate(&inputs, &payment, extra)?;
        info!(
            "paid off in {} months with ${:.2} extra, saving ${:.2}",
            scenario.payoff_months, extra, scenario.savings
        );
        out.push_str(&report::render_payoff(&scenario, inputs.months()));
    }

    Ok(out)
}
