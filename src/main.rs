use clap::Parser;
use log::error;
use mortgage::{Cli, MortgageConfig};
use simple_logger::SimpleLogger;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = SimpleLogger::new().with_level(cli.log_level()).init() {
        eprintln!("logger setup failed: {}", e);
    }

    let config = MortgageConfig::from_cli(&cli);
    match mortgage::run(&config) {
        Ok(text) => {
            print!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:?}", e);
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

// verifies that types can implement the gated traits below
#[cfg(test)]
fn is_normal<T: Sized + Send + Sync + Unpin>() {}

#[test]
fn normal_types() {
    is_normal::<mortgage::LoanInputs>();
    is_normal::<mortgage::PaymentResult>();
    is_normal::<mortgage::PayoffScenario>();
    is_normal::<mortgage::LoanError>();
}
