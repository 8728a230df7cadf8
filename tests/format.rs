use super::*;

#[test]
fn concrete_values() {
    CommandBuilder::new("format 0 500 1500 2500000")
        .expected_stdout("0.00\n500.00\n1.50 k\n2.50 M\n")
        .run_and_check_output();
}

#[test]
fn one_million_is_one_thousand_kilo() {
    CommandBuilder::new("format 999999 1000000 1001000")
        .expected_stdout("1000.00 k\n1000.00 k\n1.00 M\n")
        .run_and_check_output();
}

#[test]
fn past_yotta_is_scientific() {
    CommandBuilder::new("--trim format 999e24 1e27 2e27")
        .expected_stdout("999 Y\n1000 Y\n2 E+27\n")
        .run_and_check_output();
}

#[test]
fn huge_magnitudes() {
    CommandBuilder::new("format 123456789012345678901234567890123456789 5e3000")
        .expected_stdout("1.23 E+38\n5.00 E+3000\n")
        .run_and_check_output();
}

#[test]
fn reads_stdin_when_no_arguments() {
    CommandBuilder::new("format")
        .stdin("1530000\n\n4.2e27\n")
        .expected_stdout("1.53 M\n4.20 E+27\n")
        .run_and_check_output();
}

#[test]
fn custom_precision_and_separator() {
    CommandBuilder::new(["--precision", "0", "--separator", "", "format", "1700", "42"])
        .expected_stdout("2k\n42\n")
        .run_and_check_output();
}

#[test]
fn json_output() {
    let scaled = CommandBuilder::new("format --json 2500000 3e40")
        .run_and_deserialize_output::<Vec<Scaled>>();

    assert_eq!(scaled.len(), 2);

    assert_eq!(scaled[0].original().to_string(), "2500000");
    assert_eq!(scaled[0].display_value(), 2.5);
    assert_eq!(scaled[0].suffix(), "M");
    assert_eq!(scaled[0].exponent(), 6);

    assert_eq!(scaled[1].suffix(), "E+40");
    assert_eq!(scaled[1].display_value(), 3.0);
}

#[test]
fn json_shape() {
    let value = CommandBuilder::new("format --json 1500").run_and_deserialize_output::<Value>();

    pretty_assert_eq!(
        value,
        json!([{
            "original": "1500",
            "display_value": 1.5,
            "suffix": "k",
            "exponent": 3,
        }])
    );
}
