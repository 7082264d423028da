use crate::error::Result;
use crate::loan::LoanInputs;
use clap::{ArgAction, Parser};
use log::LevelFilter;

/// Values used for any flag left off the command line.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Defaults {
    pub price: f64,
    pub down_payment: f64,
    pub annual_rate: f64,
    pub term: f64,
}

pub const DEFAULTS: Defaults = Defaults {
    price: 250000.0,
    down_payment: 50000.0,
    annual_rate: 3.625,
    term: 10.0,
};

#[derive(Parser, Debug, Default)]
#[command(
    name = "mortgage",
    version,
    about = "Calculates the mortgage payments on a loan with extra principal payments"
)]
pub struct Cli {
    #[arg(long, help = "House price [default: 250000]")]
    pub price: Option<f64>,
    #[arg(long = "downPayment", help = "Down payment amount [default: 50000]")]
    pub down_payment: Option<f64>,
    #[arg(long, help = "Annual interest rate in percent [default: 3.625]")]
    pub interest: Option<f64>,
    #[arg(long, help = "Loan term in years [default: 10]")]
    pub term: Option<f64>,
    #[arg(long, help = "Extra principal paid every month")]
    pub extra: Option<f64>,
    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity")]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Command-line flags merged over [`DEFAULTS`].
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MortgageConfig {
    pub price: f64,
    pub down_payment: f64,
    pub annual_rate: f64,
    pub term: f64,
    pub extra: Option<f64>,
}

impl MortgageConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self::merge(cli, &DEFAULTS)
    }

    pub fn merge(cli: &Cli, defaults: &Defaults) -> Self {
        Self {
            price: cli.price.unwrap_or(defaults.price),
            down_payment: cli.down_payment.unwrap_or(defaults.down_payment),
            annual_rate: cli.interest.unwrap_or(defaults.annual_rate),
            term: cli.term.unwrap_or(defaults.term),
            extra: cli.extra,
        }
    }

    pub fn loan_inputs(&self) -> Result<LoanInputs> {
        LoanInputs::new(self.price, self.down_payment, self.annual_rate, self.term)
    }
}

impl Default for MortgageConfig {
    fn default() -> Self {
        Self::merge(&Cli::default(), &DEFAULTS)
    }
}
