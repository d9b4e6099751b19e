//! Schema command - print the expected input format

use clap::Args;
use dpfo::core::{ChildInput, InputField, PartnerConditions};
use dpfo::UserInput;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format: json-schema or fields
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the input document
    JsonSchema,
    /// Field names with descriptions
    Fields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => self.print_json_schema(),
            SchemaFormat::Fields => {
                self.print_fields();
                Ok(())
            }
        }
    }

    fn print_json_schema(&self) -> anyhow::Result<()> {
        let schema = schema_for!(UserInput);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    fn print_fields(&self) {
        println!("Input Format");
        println!("============");
        print_section("Return", UserInput::field_schema());
        print_section("children[]", ChildInput::field_schema());
        print_section("partner_podmienky", PartnerConditions::field_schema());
        println!();
        println!("Amounts accept spaces and a decimal comma, e.g. \"1 234,56\".");
    }
}

fn print_section(title: &str, fields: &[InputField]) {
    println!();
    println!("{}", title);
    for field in fields {
        println!("  {:40} ({:6})  {}", field.name, field.kind, field.description);
    }
}
