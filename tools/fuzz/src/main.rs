use afl::fuzz;
use ir_national_code::{validate, NationalCode};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let input = std::str::from_utf8(bytes).ok()?;
    run_fuzz(input);
    Some(())
}

fn run_fuzz(input: &str) {
    let is_valid = validate(input);
    let parsed = NationalCode::parse(input);

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Valid: {:?}", is_valid);
        println!("Parsed: {:?}", parsed);
    }

    assert_eq!(is_valid, parsed.is_ok());

    // only the digits matter
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    assert_eq!(is_valid, validate(&digits));

    if let Ok(code) = parsed {
        assert_eq!(NationalCode::parse(&code.to_string()), Ok(code));
        assert_eq!(NationalCode::parse(&format!("{:#}", code)), Ok(code));
        assert_eq!(
            NationalCode::from_payload(code.payload()),
            Ok(code),
            "payload should rebuild the same code"
        );
    }
}
