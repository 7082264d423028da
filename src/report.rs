use crate::loan::{LoanInputs, PaymentResult, PayoffScenario};
use std::fmt::Write;

fn round(amt: f64, dec: f64) -> f64 {
    if amt == 0. {
        0.
    } else {
        (amt * 10_f64.powf(dec)).round() / 10_f64.powf(dec)
    }
}

/// Formats an amount as whole dollars with thousands separators, e.g. `$1,234`.
pub fn format_currency(amt: f64) -> String {
    let rounded = round(amt, 0.);
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rounded < 0. {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

pub fn render_summary(inputs: &LoanInputs, payment: &PaymentResult) -> String {
    let mut out = String::new();
    // writes into a String cannot fail
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Home Price: {}    Down Payment: {}",
        format_currency(inputs.price),
        format_currency(inputs.down_payment)
    );
    let _ = writeln!(out, "Principal:              {}", format_currency(inputs.principal()));
    let _ = writeln!(out, "Monthly Payment:        {}", format_currency(payment.monthly));
    let _ = writeln!(out, "Cumulative Sum:         {}", format_currency(payment.cumulative));
    let _ = writeln!(out);
    out
}

pub fn render_payoff(scenario: &PayoffScenario, term_months: f64) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "With Monthly Payment of {},",
        format_currency(scenario.total_payment())
    );
    let _ = writeln!(out, "Paid off Loan in {} months", scenario.payoff_months);
    let _ = writeln!(out, "              vs {:.0} months", term_months);
    let _ = writeln!(out, "Saving: {}", format_currency(scenario.savings));
    let _ = writeln!(out);
    out
}
