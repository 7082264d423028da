use clap::Parser;
use mortgage::{Cli, LoanError, MortgageConfig};
use test_log::test;

fn config_from(args: &[&str]) -> MortgageConfig {
    let cli = Cli::try_parse_from(std::iter::once("mortgage").chain(args.iter().copied())).unwrap();
    MortgageConfig::from_cli(&cli)
}

#[test]
fn test_default_scenario() {
    let text = mortgage::run(&config_from(&[])).unwrap();

    assert!(text.contains("Home Price: $250,000    Down Payment: $50,000"));
    assert!(text.contains("Principal:              $200,000"));
    assert!(text.contains("Monthly Payment:        $1,989"));
    assert!(text.contains("Cumulative Sum:         $238,734"));
    assert!(!text.contains("Paid off Loan"));
}

#[test]
fn test_extra_payment_scenario() {
    let text = mortgage::run(&config_from(&["--extra", "200"])).unwrap();

    assert!(text.contains("With Monthly Payment of $2,189,"));
    assert!(text.contains("Paid off Loan in 108 months"));
    assert!(text.contains("              vs 120 months"));
    assert!(text.contains("Saving: $2,273"));
}

#[test]
fn test_zero_interest_scenario() {
    let text = mortgage::run(&config_from(&[
        "--price", "100000", "--downPayment", "0", "--interest", "0", "--extra", "100",
    ]))
    .unwrap();

    assert!(text.contains("Monthly Payment:        $833"));
    assert!(text.contains("Cumulative Sum:         $100,000"));
    assert!(text.contains("Paid off Loan in 108 months"));
    assert!(!text.contains("NaN"));
}

#[test]
fn test_down_payment_above_price_is_rejected() {
    let err = mortgage::run(&config_from(&["--price", "100000", "--downPayment", "150000"]))
        .unwrap_err();

    assert!(matches!(err, LoanError::InvalidInput { field: "down payment", .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_negative_rate_is_rejected() {
    let err = mortgage::run(&config_from(&["--interest=-1"])).unwrap_err();

    assert!(matches!(err, LoanError::InvalidInput { field: "interest rate", .. }));
}

#[test]
fn test_negative_extra_is_rejected() {
    let err = mortgage::run(&config_from(&["--extra=-50"])).unwrap_err();

    assert!(matches!(err, LoanError::InvalidInput { field: "extra payment", .. }));
}

#[test]
fn test_high_rate_long_term_prints_finite_figures() {
    let text = mortgage::run(&config_from(&["--interest", "1000", "--term", "100"])).unwrap();

    assert!(!text.contains("NaN"));
    assert!(!text.contains("inf"));
    assert!(text.contains("Monthly Payment:        $166,667"));
}
