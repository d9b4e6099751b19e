//! Form command - every line of the computed return

use crate::cmd::{format_eur, read_input, with_filing_date, yes_no};
use clap::Args;
use dpfo::core::Month;
use dpfo::{calculate, TaxForm};
use rust_decimal::Decimal;
use std::io;
use std::path::PathBuf;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct FormCommand {
    /// Input JSON file. Reads from stdin if not specified.
    #[arg(default_value = "-")]
    file: PathBuf,

    /// Filing date (dd.mm.yyyy), defaults to the input's date or today
    #[arg(short, long)]
    date: Option<String>,

    /// Output the whole form as JSON
    #[arg(long, conflicts_with = "csv")]
    json: bool,

    /// Output the lines as CSV instead of a formatted table
    #[arg(long)]
    csv: bool,
}

impl FormCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let input = with_filing_date(read_input(&self.file)?, self.date.as_deref());
        let form = calculate(&input);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&form)?);
            return Ok(());
        }

        let rows = form_rows(&form);
        if self.csv {
            self.write_csv(&rows)
        } else {
            self.print_table(&form, rows);
            Ok(())
        }
    }

    fn print_table(&self, form: &TaxForm, rows: Vec<FormRow>) {
        println!();
        println!(
            "DPFO TYP B {} - {} {}",
            dpfo::TAX_YEAR,
            form.r005_meno,
            form.r004_priezvisko
        );
        println!();

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::last()).with(Alignment::right()))
            .to_string();
        println!("{}", table);

        if !form.r033.is_empty() {
            println!();
            println!("CHILDREN (r. 33)");
            for child in &form.r033 {
                let months = if child.whole_year {
                    "whole year".to_string()
                } else {
                    child
                        .months
                        .iter()
                        .enumerate()
                        .filter(|(_, eligible)| **eligible)
                        .filter_map(|(index, _)| Month::from_index(index))
                        .map(|month| format!("{:02}", month.number()))
                        .collect::<Vec<_>>()
                        .join(" ")
                };
                println!("  {} ({}): {}", child.name, child.id_number, months);
            }
        }
        println!();
    }

    fn write_csv(&self, rows: &[FormRow]) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(io::stdout());
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Row for the form table output
#[derive(Debug, Clone, Tabled, serde::Serialize)]
pub struct FormRow {
    #[tabled(rename = "Line")]
    pub line: &'static str,

    #[tabled(rename = "Description")]
    pub description: &'static str,

    #[tabled(rename = "Value")]
    pub value: String,
}

fn amount(line: &'static str, description: &'static str, value: Decimal) -> FormRow {
    FormRow {
        line,
        description,
        value: format_eur(value),
    }
}

fn flag(line: &'static str, description: &'static str, value: bool) -> FormRow {
    FormRow {
        line,
        description,
        value: yes_no(value).to_string(),
    }
}

/// Numbered lines of the form in filing order
pub fn form_rows(form: &TaxForm) -> Vec<FormRow> {
    vec![
        amount("t1r10", "Business income", form.t1r10_prijmy),
        amount("t1r10", "Flat-rate expenses incl. insurance", form.t1r10_vydavky),
        amount("p3r08", "Employee insurance", form.priloha3_r08_poistne_spolu),
        amount("p3r11", "Social insurance (self-employed)", form.priloha3_r11_socialne),
        amount("p3r13", "Health insurance (self-employed)", form.priloha3_r13_zdravotne),
        amount("r036", "Employment income", form.r036),
        amount("r037", "Employee insurance", form.r037),
        amount("r038", "Employment base", form.r038),
        amount("r039", "Business income", form.r039),
        amount("r040", "Business expenses", form.r040),
        amount("r041", "Business base", form.r041),
        amount("r057", "Business base (§ 6)", form.r057),
        amount("r072", "Base before allowances", form.r072_pred_znizenim),
        amount("r073", "Personal allowance", form.r073),
        flag("r032", "Partner allowance claimed", form.r032_uplatnujem_na_partnera),
        amount("r074", "Partner allowance", form.r074_znizenie_partner),
        amount("r075", "Pension contributions", form.r075_zaplatene_prispevky_na_dochodok),
        amount("r077", "Non-taxable part of the base", form.r077_nezdanitelna_cast),
        amount("r078", "Employment base after allowances", form.r078_zaklad_dane_zo_zamestnania),
        amount("r080", "Tax base", form.r080_zaklad_dane_celkovo),
        amount("r081", "Employment tax", form.r081),
        amount("r091", "Allowance left for business base", form.r091),
        amount("r094", "Business base after allowances", form.r094),
        amount("r095", "Taxable revenue", form.r095),
        amount("r096", "Business tax", form.r096),
        amount("r116", "Tax", form.r116_dan),
        amount("r117", "Child tax bonus", form.r117),
        amount("r118", "Tax after child bonus", form.r118),
        amount("r119", "Child bonus paid by employer", form.r119),
        amount("r120", "Child bonus remaining", form.r120),
        amount("r121", "Child bonus to pay out", form.r121),
        amount("r124", "Tax for assignment", form.r124),
        amount("r131", "Advances withheld by employer", form.r131),
        amount("r133", "Advances paid", form.r133),
        amount("r135", "Tax to pay", form.r135_dan_na_uhradu),
        amount("r136", "Overpayment", form.r136_danovy_preplatok),
        flag("XII", "Assigns 2% / 3%", form.xii_oddiel_uplatnujem2percenta),
        amount("r151", "Amount assigned to NGO", form.r151),
        flag("-", "Microentity", form.mikrodanovnik),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use dpfo::UserInput;

    #[test]
    fn rows_follow_form_values() {
        let input: UserInput = serde_json::from_str(
            r#"{ "t1r10_prijmy": "25000", "priloha3_r11_socialne": "1000", "priloha3_r13_zdravotne": "1000" }"#,
        )
        .unwrap();
        let form = calculate(&input);
        let rows = form_rows(&form);

        let r041 = rows.iter().find(|r| r.line == "r041").unwrap();
        assert_eq!(r041.value, "8000.00 €");
        let micro = rows.iter().find(|r| r.description == "Microentity").unwrap();
        assert_eq!(micro.value, "yes");
    }
}
