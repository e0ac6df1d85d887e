use optional::{Error, Optional, Result};

#[derive(Debug)]
struct Modem {
    price: Option<f64>,
}

fn price_is_in_range(modem: Option<Modem>) -> bool {
    Optional::of_nullable(modem)
        .flat_map(|modem| Optional::of_nullable(modem.price))
        .filter(|price| *price >= 10.0)
        .filter(|price| *price <= 15.0)
        .is_present()
}

#[derive(Debug, PartialEq)]
struct NoUsableName;

fn first_usable_name(names: &[&str]) -> Result<String, NoUsableName> {
    Optional::of_nullable(names.iter().copied().find(|name| !name.is_empty()))
        .map(str::to_string)
        .or_else_throw(|| NoUsableName)
}

#[test]
fn trimming_rescues_a_padded_password() {
    let padded = Optional::of(" password ");
    assert!(padded.filter(|p| *p == "password").is_empty());
    assert!(padded.map(str::trim).filter(|p| *p == "password").is_present());
}

#[test]
fn a_wrapped_list_reports_its_full_length() {
    let names = vec!["john", "", "jane", "", "tom", "brad"];
    let count = Optional::of(names).map(|names| names.len()).or_else(0);
    assert_eq!(count, 6);
}

#[test]
fn price_check_tolerates_missing_modem_and_missing_price() {
    assert!(price_is_in_range(Some(Modem { price: Some(10.0) })));
    assert!(!price_is_in_range(Some(Modem { price: Some(9.9) })));
    assert!(!price_is_in_range(Some(Modem { price: Some(15.5) })));
    assert!(!price_is_in_range(Some(Modem { price: None })));
    assert!(!price_is_in_range(None));
}

#[test]
fn nesting_collapses_only_through_flat_map() {
    let nested = Optional::of(5).map(|v| Optional::of(v * 2));
    assert_eq!(nested, Optional::of(Optional::of(10)));

    let inner = nested.or_else_throw(|| Error::NoSuchElement);
    assert_eq!(inner, Ok(Optional::of(10)));

    let flat = Optional::of(5).flat_map(|v| Optional::of(v * 2));
    assert_eq!(flat, Optional::of(10));
    assert_eq!(flat.get(), Ok(10));
}

#[test]
fn pipelines_raise_the_callers_error_type() {
    assert_eq!(first_usable_name(&["", "jane", "tom"]), Ok("jane".to_string()));
    assert_eq!(first_usable_name(&["", ""]), Err(NoUsableName));
}

#[test]
fn extraction_after_a_failed_filter_reports_no_value() {
    let name = Optional::of("jane")
        .map(|first| format!("{first} doe"))
        .filter(|name| name.len() > 10)
        .get();
    assert_eq!(name, Err(Error::NoSuchElement));
}
