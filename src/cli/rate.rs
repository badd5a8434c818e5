//! One-shot rate lookup, e.g. `fxc rate USD EUR`.

use std::sync::Arc;

use anyhow::Result;

use crate::cli::ui::{self, StyleType};
use crate::core::controller::result_text;
use crate::core::parse;
use crate::core::rates::{RateClient, RateResult};

pub async fn run(client: Arc<dyn RateClient>, from: &str, to: &str) -> Result<()> {
    let from = from.to_uppercase();
    let to = to.to_uppercase();

    let spinner = ui::new_spinner(&format!("Fetching {from} -> {to}..."));
    let result = match client.fetch_rates(&from).await {
        Ok(raw) => parse::parse_rate(&raw, &to),
        Err(e) => RateResult::TransportError(e.to_string()),
    };
    spinner.finish_and_clear();

    match &result {
        RateResult::Rate(_) => println!(
            "1 {from} = {} {to}",
            ui::style_text(&result_text(&result), StyleType::Value)
        ),
        _ => println!(
            "{}",
            ui::style_text(&result_text(&result), StyleType::Error)
        ),
    }

    Ok(())
}
