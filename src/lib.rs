//! Slovak personal income tax return (DPFO typ B) for tax year 2023.
//!
//! [`calculate`] turns the raw form input into every line of the return;
//! [`build_summary`] and [`advance_payments`] project the result.

pub mod core;

pub use crate::core::{
    advance_payments, build_summary, calculate, calculate_with, read_input_json, AdvancePayments,
    Summary, TaxForm, UserInput, TAX_YEAR,
};
