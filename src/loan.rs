use crate::error::{LoanError, Result};
use log::{debug, trace, warn};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const MONTHS_PER_YEAR: f64 = 12.;

// tolerance when rounding a month count up; absorbs float noise at whole-month boundaries
const MONTH_EPSILON: f64 = 1e-9;

/// Converts an annual percentage (e.g. 3.625) to the fractional monthly rate.
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / (MONTHS_PER_YEAR * 100.)
}

#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoanInputs {
    pub price: f64,
    pub down_payment: f64,
    pub annual_rate: f64,
    pub term: f64,
}

impl LoanInputs {
    /// Builds a validated set of loan inputs.
    ///
    /// Rejects non-finite values, a negative price or down payment, a down payment
    /// above the price, a negative rate and a term that is not positive.
    pub fn new(price: f64, down_payment: f64, annual_rate: f64, term: f64) -> Result<Self> {
        check_finite("price", price)?;
        check_finite("down payment", down_payment)?;
        check_finite("interest rate", annual_rate)?;
        check_finite("term", term)?;

        if price < 0. {
            return Err(LoanError::invalid("price", price, "must not be negative"));
        }
        if down_payment < 0. {
            return Err(LoanError::invalid(
                "down payment",
                down_payment,
                "must not be negative",
            ));
        }
        if down_payment > price {
            return Err(LoanError::invalid(
                "down payment",
                down_payment,
                "must not exceed the price",
            ));
        }
        if annual_rate < 0. {
            return Err(LoanError::invalid(
                "interest rate",
                annual_rate,
                "must not be negative",
            ));
        }
        if term <= 0. {
            return Err(LoanError::invalid("term", term, "must be greater than zero"));
        }
        if !(term * MONTHS_PER_YEAR).is_finite() {
            return Err(LoanError::invalid("term", term, "too long to count in months"));
        }

        Ok(Self {
            price,
            down_payment,
            annual_rate,
            term,
        })
    }

    pub fn principal(&self) -> f64 {
        self.price - self.down_payment
    }

    /// number of monthly periods over the full term
    pub fn months(&self) -> f64 {
        self.term * MONTHS_PER_YEAR
    }

    pub fn payment(&self) -> PaymentResult {
        compute_monthly_payment(self.price, self.down_payment, self.annual_rate, self.term)
    }
}

impl fmt::Display for LoanInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "price ${:.2}, down payment ${:.2}, rate {}%, term {} yrs",
            self.price, self.down_payment, self.annual_rate, self.term
        )
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PaymentResult {
    pub monthly: f64,
    pub cumulative: f64,
}

impl fmt::Display for PaymentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "monthly payment ${:.4}, cumulative ${:.4}",
            self.monthly, self.cumulative
        )
    }
}

/// Fixed monthly payment and the total paid over the term with no extra payments.
///
/// Does not validate its arguments; see [`LoanInputs::new`].
pub fn compute_monthly_payment(
    price: f64,        // purchase price
    down_payment: f64, // amount paid up front
    annual_rate: f64,  // annual interest rate as percent (i.e., 3.625)
    term: f64,         // term of loan in years
) -> PaymentResult {
    let rate = monthly_rate(annual_rate);
    let principal = price - down_payment;
    let n = term * MONTHS_PER_YEAR;

    let monthly = if principal == 0. {
        0.
    } else if rate == 0. {
        principal / n
    } else {
        // P·r / (1 - (1 + r)^-n); stays finite for long terms and accurate for small rates
        principal * rate / -(-n * rate.ln_1p()).exp_m1()
    };
    trace!(
        "principal {}, monthly rate {}, periods {}, payment {}",
        principal,
        rate,
        n,
        monthly
    );

    PaymentResult {
        monthly,
        cumulative: n * monthly,
    }
}

/// Months until the balance reaches zero when `extra_payment` is added to every
/// scheduled payment. Partial months count as a full month.
pub fn compute_payoff_months(
    principal: f64,
    monthly_payment: f64,
    extra_payment: f64,
    annual_rate: f64,
) -> Result<u32> {
    check_finite("principal", principal)?;
    check_finite("monthly payment", monthly_payment)?;
    check_finite("extra payment", extra_payment)?;
    check_finite("interest rate", annual_rate)?;

    if principal < 0. {
        return Err(LoanError::invalid("principal", principal, "must not be negative"));
    }
    if monthly_payment < 0. {
        return Err(LoanError::invalid(
            "monthly payment",
            monthly_payment,
            "must not be negative",
        ));
    }
    if extra_payment < 0. {
        return Err(LoanError::invalid(
            "extra payment",
            extra_payment,
            "must not be negative",
        ));
    }
    if annual_rate < 0. {
        return Err(LoanError::invalid(
            "interest rate",
            annual_rate,
            "must not be negative",
        ));
    }

    if principal == 0. {
        return Ok(0);
    }

    let rate = monthly_rate(annual_rate);
    let total = monthly_payment + extra_payment;
    let interest = principal * rate;

    if total <= interest {
        return Err(LoanError::NonAmortizingPayment {
            payment: total,
            interest,
        });
    }

    let months = if rate == 0. {
        principal / total
    } else {
        let ratio = total / (total - interest);
        debug!("payoff ratio {}, monthly rate {}", ratio, rate);
        // ln(ratio) written as -ln(1 - interest / total)
        -(-interest / total).ln_1p() / rate.ln_1p()
    };
    trace!("fractional payoff months {}", months);

    let whole = (months - MONTH_EPSILON).ceil().max(1.);
    if whole > u32::MAX as f64 {
        return Err(LoanError::invalid(
            "payment",
            total,
            "too small to pay off the loan in a countable number of months",
        ));
    }

    Ok(whole as u32)
}

/// Early-payoff comparison for a loan paying a constant extra principal amount.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PayoffScenario {
    pub principal: f64,
    pub monthly_payment: f64,
    pub extra_payment: f64,
    pub annual_rate: f64,
    pub payoff_months: u32,
    pub savings: f64,
}

impl PayoffScenario {
    pub fn estimate(
        inputs: &LoanInputs,
        payment: &PaymentResult,
        extra_payment: f64,
    ) -> Result<Self> {
        let principal = inputs.principal();
        let payoff_months = compute_payoff_months(
            principal,
            payment.monthly,
            extra_payment,
            inputs.annual_rate,
        )?;

        let total_payment = payment.monthly + extra_payment;
        let savings = payment.cumulative - total_payment * f64::from(payoff_months);

        if f64::from(payoff_months) >= inputs.months() && principal > 0. {
            warn!(
                "extra payment of ${:.2} does not shorten the {} month term",
                extra_payment,
                inputs.months()
            );
        }

        Ok(Self {
            principal,
            monthly_payment: payment.monthly,
            extra_payment,
            annual_rate: inputs.annual_rate,
            payoff_months,
            savings,
        })
    }

    pub fn total_payment(&self) -> f64 {
        self.monthly_payment + self.extra_payment
    }

    /// months shaved off a schedule of `term_months`
    pub fn months_saved(&self, term_months: f64) -> f64 {
        term_months - f64::from(self.payoff_months)
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LoanError::invalid(field, value, "must be a finite number"))
    }
}
