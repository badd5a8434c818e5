//! Decodes rates API responses.
//!
//! The same payload shape serves both modes: a JSON object with a `rates`
//! field mapping currency code to rate. Bootstrap mode extracts the sorted
//! key list, lookup mode extracts one value.

use serde::Deserialize;
use std::collections::HashMap;

use crate::core::rates::{FetchOutcome, RateResult};

#[derive(Debug, Deserialize)]
struct RatesDocument {
    rates: HashMap<String, f64>,
}

/// Extracts the sorted list of available currency codes.
///
/// Undecodable bodies and documents without a `rates` object are one
/// malformed class. An empty `rates` object is *not* malformed; it yields
/// `Loaded([])` and the caller decides what an empty universe means.
pub fn parse_currency_list(raw: &str) -> FetchOutcome {
    match serde_json::from_str::<RatesDocument>(raw) {
        Ok(doc) => {
            let mut codes: Vec<String> = doc.rates.into_keys().collect();
            codes.sort();
            FetchOutcome::Loaded(codes)
        }
        Err(e) => FetchOutcome::Failed(format!("malformed response: {e}")),
    }
}

/// Extracts the rate for `target` from the same payload shape.
///
/// `NotFound` applies only when the document is well-formed but lacks the
/// target key; decoding failures are `MalformedResponse`.
pub fn parse_rate(raw: &str, target: &str) -> RateResult {
    match serde_json::from_str::<RatesDocument>(raw) {
        Ok(doc) => match doc.rates.get(target) {
            Some(rate) => RateResult::Rate(*rate),
            None => RateResult::NotFound(target.to_string()),
        },
        Err(e) => RateResult::MalformedResponse(format!("malformed response: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATES_JSON: &str = r#"{"rates":{"USD":1.0,"EUR":0.9,"RUB":60.0}}"#;

    #[test]
    fn test_currency_list_is_sorted() {
        let outcome = parse_currency_list(RATES_JSON);
        assert_eq!(
            outcome,
            FetchOutcome::Loaded(vec![
                "EUR".to_string(),
                "RUB".to_string(),
                "USD".to_string()
            ])
        );
    }

    #[test]
    fn test_currency_list_ignores_extra_fields() {
        let raw = r#"{"base":"USD","date":"2017-09-16","rates":{"EUR":0.9}}"#;
        assert_eq!(
            parse_currency_list(raw),
            FetchOutcome::Loaded(vec!["EUR".to_string()])
        );
    }

    #[test]
    fn test_currency_list_empty_rates() {
        assert_eq!(
            parse_currency_list(r#"{"rates":{}}"#),
            FetchOutcome::Loaded(vec![])
        );
    }

    #[test]
    fn test_currency_list_missing_rates_field() {
        let outcome = parse_currency_list(r#"{"foo":1}"#);
        match outcome {
            FetchOutcome::Failed(detail) => {
                assert!(detail.starts_with("malformed response"), "{detail}")
            }
            other => panic!("Expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn test_currency_list_malformed_json() {
        assert!(matches!(
            parse_currency_list("not json at all"),
            FetchOutcome::Failed(_)
        ));
    }

    #[test]
    fn test_rate_found() {
        assert_eq!(parse_rate(RATES_JSON, "EUR"), RateResult::Rate(0.9));
    }

    #[test]
    fn test_rate_not_found() {
        assert_eq!(
            parse_rate(RATES_JSON, "GBP"),
            RateResult::NotFound("GBP".to_string())
        );
    }

    #[test]
    fn test_rate_missing_rates_field() {
        // Missing field is malformed, never NotFound
        let result = parse_rate(r#"{"foo":1}"#, "EUR");
        match result {
            RateResult::MalformedResponse(detail) => {
                assert!(detail.starts_with("malformed response"), "{detail}")
            }
            other => panic!("Expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn test_rate_malformed_json() {
        assert!(matches!(
            parse_rate("{truncated", "EUR"),
            RateResult::MalformedResponse(_)
        ));
    }

    #[test]
    fn test_rate_wrong_value_type() {
        assert!(matches!(
            parse_rate(r#"{"rates":{"EUR":"0.9"}}"#, "EUR"),
            RateResult::MalformedResponse(_)
        ));
    }
}
