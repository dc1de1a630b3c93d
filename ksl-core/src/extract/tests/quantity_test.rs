use std::collections::BTreeMap;

use assertables::*;
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;

use super::*;

#[rstest]
#[case::plain("2", 2.0)]
#[case::decimal("0.5", 0.5)]
#[case::leading_dot(".5", 0.5)]
#[case::milli("250m", 0.25)]
#[case::micro("5u", 5e-6)]
#[case::nano("100n", 1e-7)]
#[case::kilo("1k", 1000.0)]
#[case::mega("128M", 128e6)]
#[case::giga("1G", 1e9)]
#[case::exa("1E", 1e18)]
#[case::kibi("1Ki", 1024.0)]
#[case::mebi("64Mi", 64.0 * 1024.0 * 1024.0)]
#[case::gibi("2Gi", 2.0 * 1024.0 * 1024.0 * 1024.0)]
#[case::exponent("1e3", 1000.0)]
#[case::upper_exponent("1E3", 1000.0)]
#[case::negative_exponent("12e-1", 1.2)]
#[case::signed("+1", 1.0)]
#[case::negative("-1", -1.0)]
fn test_parse_quantity(#[case] quantity: &str, #[case] expected: f64) {
    let res = parse_quantity(quantity).unwrap();
    assert_in_delta!(res, expected, 1e-9);
}

#[rstest]
#[case::empty("")]
#[case::suffix_only("Mi")]
#[case::bad_suffix("1Qi")]
#[case::garbage("lots")]
fn test_parse_quantity_malformed(#[case] quantity: &str) {
    let err = parse_quantity(quantity).unwrap_err().downcast::<ExtractError>().unwrap();
    assert!(matches!(err, ExtractError::MalformedQuantity(_)));
}

#[rstest]
fn test_resource_quantity() {
    let resources = BTreeMap::from([
        (CPU_RESOURCE.to_string(), Quantity("1500m".into())),
        (MEMORY_RESOURCE.to_string(), Quantity("not-a-quantity".into())),
    ]);

    assert_in_delta!(resource_quantity(Some(&resources), CPU_RESOURCE).unwrap(), 1.5, 1e-9);
    assert_none!(resource_quantity(Some(&resources), MEMORY_RESOURCE));
    assert_none!(resource_quantity(Some(&resources), PODS_RESOURCE));
    assert_none!(resource_quantity(None, CPU_RESOURCE));
}
