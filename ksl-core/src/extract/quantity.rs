use std::collections::BTreeMap;

use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use lazy_static::lazy_static;
use regex::Regex;

use super::ExtractError;

lazy_static! {
    // <signed number><exponent or suffix>, see
    // https://kubernetes.io/docs/reference/kubernetes-api/common-definitions/quantity/
    //
    // The exponent alternative has to come first so that "1E3" is 1000 and not a parse error,
    // whereas a bare "1E" is one exa.
    static ref QUANTITY_RE: Regex =
        Regex::new(r"^([+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+))(?:([eE][+-]?[0-9]+)|(Ki|Mi|Gi|Ti|Pi|Ei|n|u|m|k|M|G|T|P|E))?$")
            .unwrap();
}

fn suffix_multiplier(suffix: &str) -> f64 {
    match suffix {
        "n" => 1e-9,
        "u" => 1e-6,
        "m" => 1e-3,
        "k" => 1e3,
        "M" => 1e6,
        "G" => 1e9,
        "T" => 1e12,
        "P" => 1e15,
        "E" => 1e18,
        "Ki" => 1024f64,
        "Mi" => 1024f64.powi(2),
        "Gi" => 1024f64.powi(3),
        "Ti" => 1024f64.powi(4),
        "Pi" => 1024f64.powi(5),
        "Ei" => 1024f64.powi(6),
        _ => 1.0,
    }
}

// Converts a quantity string into base units (cores for cpu, bytes for memory and storage).
pub fn parse_quantity(quantity: &str) -> anyhow::Result<f64> {
    let Some(caps) = QUANTITY_RE.captures(quantity.trim()) else {
        return Err(ExtractError::malformed_quantity(quantity));
    };

    let number: f64 = caps[1].parse()?;
    let multiplier = match (caps.get(2), caps.get(3)) {
        (Some(exp), _) => 10f64.powi(exp.as_str()[1..].parse()?),
        (None, Some(suffix)) => suffix_multiplier(suffix.as_str()),
        (None, None) => 1.0,
    };

    Ok(number * multiplier)
}

// Looks up a named resource in a capacity/requests/limits map; absent and unparseable values are
// both reported as None.
pub fn resource_quantity(resources: Option<&BTreeMap<String, Quantity>>, name: &str) -> Option<f64> {
    parse_quantity(&resources?.get(name)?.0).ok()
}
