//! Equation rendering: `4.046x_1 + 2.836x_2 = 1.21`.
//!
//! Coefficients are rounded to `DISPLAY_DECIMALS` places (banker's rounding)
//! with trailing zeros stripped. Terms that round to zero are dropped, a unit
//! coefficient is written as a bare sign, and the first printed term carries no
//! `+`/space prefix. The output is lossy and not meant to be parsed back.

use std::fmt;

use rust_decimal::Decimal;

use super::Line;
use crate::cfg::DISPLAY_DECIMALS;

fn rounded(x: Decimal) -> Decimal {
    let r = x.round_dp(DISPLAY_DECIMALS).normalize();
    if r.is_zero() {
        Decimal::ZERO
    } else {
        r
    }
}

fn write_coefficient(coefficient: Decimal, is_initial_term: bool) -> String {
    let mut out = String::new();
    if coefficient.is_sign_negative() {
        out.push('-');
    } else if !is_initial_term {
        out.push('+');
    }
    if !is_initial_term {
        out.push(' ');
    }
    if coefficient.abs() != Decimal::ONE {
        out.push_str(&coefficient.abs().to_string());
    }
    out
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<String> = self
            .normal_vector
            .iter()
            .enumerate()
            .map(|(i, c)| (i, rounded(*c)))
            .filter(|(_, c)| !c.is_zero())
            .enumerate()
            .map(|(n, (i, c))| format!("{}x_{}", write_coefficient(c, n == 0), i + 1))
            .collect();
        if terms.is_empty() {
            write!(f, "0")?;
        } else {
            write!(f, "{}", terms.join(" "))?;
        }
        write!(f, " = {}", rounded(self.constant_term))
    }
}
