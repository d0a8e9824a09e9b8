//! Validates a signup form and prints the results as JSON.
//!
//! Run with `RUST_LOG=formcheck_validator=debug` to see each failed rule.

use formcheck_validator::prelude::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let submitted = json!({
        "name": "Datena",
        "age": "",
        "occupation": "jornalista",
        "email": "datena@localhost",
    });

    let mut form = Validator::from_json(submitted)?;
    form.select_field("name")?
        .check_not_empty()
        .check_length(LengthOptions::new().min(3).max(25))?
        .select_field("age")?
        .check_not_empty()
        .check_numeric(RangeOptions::new().min(18))?
        .select_field("occupation")?
        .check_not_empty()
        .select_field("email")?
        .check_not_empty()
        .check_email();

    if form.is_valid() {
        println!("✓ form is valid");
    } else {
        println!("{}", serde_json::to_string_pretty(form.errors())?);
    }

    Ok(())
}
