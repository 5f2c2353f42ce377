use fractionalize::{Filters, FractionOutput, FractionalizeError, Settings, Value};
use fractionalize::{convert_decimal_to_fraction, convert_decimal_to_fraction_with};

fn frac(value: f64) -> String {
    convert_decimal_to_fraction(value)
        .unwrap_or_else(|e| panic!("Failed to fractionalize {}: {}", value, e))
        .to_string()
}

#[test]
fn test_simple_fractions() {
    assert_eq!(frac(0.5), "1/2");
    assert_eq!(frac(0.25), "1/4");
    assert_eq!(frac(0.75), "3/4");
    assert_eq!(frac(0.125), "1/8");
    assert_eq!(frac(0.0625), "1/16");
    assert_eq!(frac(1.0 / 3.0), "1/3");
    assert_eq!(frac(2.0 / 3.0), "2/3");
}

#[test]
fn test_mixed_numbers() {
    assert_eq!(frac(1.5), "1 1/2");
    assert_eq!(frac(2.25), "2 1/4");
    assert_eq!(frac(5.75), "5 3/4");
    assert_eq!(frac(2.125), "2 1/8");
    assert_eq!(frac(5.3), "5 3/10");
}

#[test]
fn test_whole_numbers() {
    assert_eq!(convert_decimal_to_fraction(1.0).unwrap(), FractionOutput::Whole(1));
    assert_eq!(convert_decimal_to_fraction(123.0).unwrap(), FractionOutput::Whole(123));
    // Within 0.1% of 5, the first convergent already satisfies the tolerance
    assert_eq!(convert_decimal_to_fraction(5.001).unwrap(), FractionOutput::Whole(5));
}

#[test]
fn test_approximations() {
    assert_eq!(frac(std::f64::consts::PI), "3 1/7");
    assert_eq!(frac(0.3333), "1/3");
    assert_eq!(frac(0.6667), "2/3");
    assert_eq!(frac(0.3), "3/10");

    let loose = Settings::default().with_tolerance(0.2);
    assert_eq!(
        convert_decimal_to_fraction_with(0.3, &loose).unwrap().to_string(),
        "1/3"
    );
}

#[test]
fn test_invalid_input() {
    assert!(matches!(
        convert_decimal_to_fraction(0.0),
        Err(FractionalizeError::InvalidInput(_))
    ));
    assert!(matches!(
        convert_decimal_to_fraction(f64::NAN),
        Err(FractionalizeError::InvalidInput(_))
    ));

    let filters = Filters::default();
    assert!(matches!(
        filters.fractionalize(&Value::from("")),
        Err(FractionalizeError::InvalidInput(_))
    ));
    assert!(matches!(
        filters.fractionalize(&Value::from("inf")),
        Err(FractionalizeError::InvalidInput(_))
    ));
}
