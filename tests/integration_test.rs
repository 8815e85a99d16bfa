#[cfg(test)]
mod national_code_integration_test {
    use ir_national_code::{
        compute_check_digit, validate, IranianNationalCodeChecksum, NationalCode,
        NationalCodeError, NationalCodeValidator, RejectionReason, Validator, ValidatorConfig,
    };
    use serde::{Deserialize, Serialize};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use threadpool::ThreadPool;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct Applicant {
        name: String,
        national_code: NationalCode,
    }

    #[test]
    fn regression_anchor() {
        assert!(!validate("6587452158"));
        assert!(validate("6587452159"));
    }

    #[test]
    fn placeholder_sequences_are_invalid() {
        for digit in 0..10 {
            let code = digit.to_string().repeat(10);
            assert!(!validate(&code), "{} should be rejected", code);
        }
    }

    #[test]
    fn inputs_outside_eight_to_ten_digits_are_invalid() {
        let inputs = vec!["", "abc", "1", "1234567", "12345678901", "0012345679 0"];
        for input in inputs {
            assert!(!validate(input), "{:?} should be rejected", input);
        }
    }

    #[test]
    fn normalization_and_padding_agree() {
        assert_eq!(validate("658-745-2158"), validate("6587452158"));
        assert_eq!(validate("0012345679"), validate("12345679"));
        assert!(validate("12345679"));
    }

    #[test]
    fn validate_is_repeatable() {
        for input in ["6587452159", "6587452158", "12345679", "x"] {
            let first = validate(input);
            for _ in 0..10 {
                assert_eq!(validate(input), first);
            }
        }
    }

    #[test]
    fn constructed_codes_are_valid() {
        let payloads = [
            [0, 0, 0, 1, 2, 3, 4, 5, 6],
            [1, 2, 3, 4, 5, 6, 7, 8, 9],
            [9, 8, 7, 6, 5, 4, 3, 2, 1],
            [2, 7, 1, 8, 2, 8, 1, 8, 2],
            [3, 1, 4, 1, 5, 9, 2, 6, 5],
        ];
        for payload in payloads {
            let mut input: String = payload.iter().map(|d| d.to_string()).collect();
            input.push_str(&compute_check_digit(&payload).to_string());
            assert!(validate(&input), "{} should be valid", input);

            let code = NationalCode::from_payload(payload).unwrap();
            assert_eq!(code.to_string(), input);
            assert_eq!(code.payload(), payload);
        }
    }

    #[test]
    fn validate_agrees_with_parse() {
        let inputs = vec![
            "6587452159",
            "6587452158",
            "000-000000-0",
            "12345679",
            "123",
            "۶۵۸۷۴۵۲۱۵۹",
        ];
        for input in inputs {
            assert_eq!(validate(input), NationalCode::parse(input).is_ok());
            assert_eq!(
                validate(input),
                IranianNationalCodeChecksum.is_valid_match(input)
            );
        }
    }

    #[test]
    fn errors_explain_the_rejection() {
        let err = NationalCode::parse("6587452158").unwrap_err();
        assert_eq!(err.reason(), RejectionReason::ChecksumMismatch);
        assert_eq!(err.to_string(), "The check digit should be 9, found 8");

        let err = "12".parse::<NationalCode>().unwrap_err();
        assert_eq!(err.reason(), RejectionReason::InvalidLength);
    }

    #[test]
    fn national_code_in_json_documents() {
        let applicant: Applicant =
            serde_json::from_str(r#"{"name": "Sara", "national_code": "658-745215-9"}"#).unwrap();
        assert_eq!(applicant.national_code.to_string(), "6587452159");
        assert_eq!(format!("{:#}", applicant.national_code), "658-745215-9");

        assert_eq!(
            serde_json::to_string(&applicant).unwrap(),
            r#"{"name":"Sara","national_code":"6587452159"}"#
        );

        let err = serde_json::from_str::<Applicant>(
            r#"{"name": "Sara", "national_code": "6587452158"}"#,
        )
        .unwrap_err();
        assert!(err
            .to_string()
            .contains("The check digit should be 9, found 8"));
    }

    #[test]
    fn validator_from_json_config() {
        let config: ValidatorConfig =
            serde_json::from_str(r#"{"strict_length": true, "labels": {"team": "kyc"}}"#)
                .unwrap();
        let validator = config.build();
        assert!(validator.is_valid_match("0012345679"));
        assert_eq!(
            validator.parse("12345679"),
            Err(NationalCodeError::InvalidLength {
                length: 8,
                min_length: 10
            })
        );

        let config: ValidatorConfig = serde_json::from_str("{}").unwrap();
        assert!(config.build().is_valid_match("12345679"));
    }

    #[test]
    fn validators_are_usable_as_trait_objects() {
        let validators: Vec<Box<dyn Validator>> = vec![
            Box::new(IranianNationalCodeChecksum),
            Box::new(NationalCodeValidator::default()),
        ];
        for validator in validators {
            assert!(validator.is_valid_match("658 745 2159"));
            assert!(!validator.is_valid_match("658 745 2158"));
        }
    }

    #[test]
    fn shared_validator_across_threads() {
        let validator = Arc::new(ValidatorConfig::new().build());
        let valid_count = Arc::new(AtomicUsize::new(0));
        let thread_pool = ThreadPool::new(8);

        for job in 0..64 {
            let validator = Arc::clone(&validator);
            let valid_count = Arc::clone(&valid_count);
            thread_pool.execute(move || {
                let input = if job % 2 == 0 {
                    "6587452159"
                } else {
                    "6587452158"
                };
                if validator.is_valid_match(input) && validate(input) {
                    valid_count.fetch_add(1, Ordering::SeqCst);
                }
            });
        }
        thread_pool.join();

        assert_eq!(thread_pool.panic_count(), 0);
        assert_eq!(valid_count.load(Ordering::SeqCst), 32);
    }
}
