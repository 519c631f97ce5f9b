#[cfg(test)]
mod verify {
    use torpedodepot::scanning;
    use torpedodepot::validate;

    static DOCUMENTS: &[&str] = &[
        "",
        "no addresses at all",
        "foo@torpedodepot.com",
        "foo@torpedodepot.com foo@torpedodepot.com",
        "a@torpedodepot.com,b@torpedodepot.net;c@torpedodepot.wannabemil",
        "x@torpedodepot.comx@torpedodepot.net",
        "nested a@b@torpedodepot.net and foo.bar@torpedodepot.net",
        "first_last@torpedodepot.com <mail+tag@torpedodepot.net>",
        "héllo@torpedodepot.com and ñ9@torpedodepot.net",
        "line one\r\nline two ops@torpedodepot.wannabemil\r\n",
        "@torpedodepot.com foo@ torpedodepot.com foo@torpedodepot .com",
    ];

    #[test]
    fn matches_do_not_overlap() {
        for content in DOCUMENTS {
            let matches = scanning::scan(content);

            for pair in matches.windows(2) {
                assert!(
                    pair[0].end <= pair[1].start,
                    "overlapping matches {:?} in {:?}",
                    pair,
                    content
                );
            }
        }
    }

    #[test]
    fn every_match_revalidates() {
        for content in DOCUMENTS {
            for range in scanning::scan(content) {
                let text = range
                    .text(content)
                    .unwrap_or_else(|| panic!("range {:?} outside {:?}", range, content));

                assert!(validate(text), "{:?} from {:?} did not revalidate", text, content);
            }
        }
    }

    #[test]
    fn scanning_is_repeatable() {
        for content in DOCUMENTS {
            assert_eq!(scanning::scan(content), scanning::scan(content));
        }
    }

    #[test]
    fn concurrent_scans_are_independent() {
        let expected: Vec<_> = DOCUMENTS
            .iter()
            .map(|content| scanning::scan(content))
            .collect();

        std::thread::scope(|scope| {
            let handles: Vec<_> = DOCUMENTS
                .iter()
                .map(|content| {
                    scope.spawn(move || {
                        let mut results = Vec::new();
                        for _ in 0..50 {
                            results.push(scanning::scan(content));
                            for range in scanning::scan(content) {
                                let text = range
                                    .text(content)
                                    .unwrap();
                                assert!(validate(text));
                            }
                        }
                        results
                    })
                })
                .collect();

            for (handle, expected) in handles
                .into_iter()
                .zip(&expected)
            {
                let results = handle
                    .join()
                    .unwrap();
                for result in results {
                    assert_eq!(&result, expected);
                }
            }
        });
    }

    #[test]
    fn validation_is_repeatable() {
        let address = "repeat@torpedodepot.net";

        for _ in 0..1000 {
            assert!(validate(address));
        }
        assert!(!validate("repeat@torpedodepot.net!"));
        assert!(validate(address));
    }

    #[test]
    fn proper_prefixes_and_suffixes_rejected() {
        let addresses = [
            "foo@torpedodepot.com",
            "dispatch@torpedodepot.net",
            "Ops7@torpedodepot.wannabemil",
        ];

        for address in addresses {
            assert!(validate(address));

            for i in 1..address.len() {
                let prefix = &address[..i];
                assert!(!validate(prefix), "prefix {:?} was accepted", prefix);
            }

            // dropping leading letters of the local part still leaves an
            // address, so only suffixes from the '@' onwards are checked
            let at = address
                .find('@')
                .unwrap();
            for i in at..address.len() {
                let suffix = &address[i..];
                assert!(!validate(suffix), "suffix {:?} was accepted", suffix);
            }
        }
    }

    #[test]
    fn one_extra_character_rejected() {
        let address = "foo@torpedodepot.com";

        for extra in ['X', '7', '.', '@', '-', '_', '+', ' ', '\n', 'é', '!'] {
            let content = format!("{}{}", address, extra);
            assert!(!validate(&content), "{:?} was accepted", content);
        }
    }

    #[test]
    fn unusual_characters_rejected() {
        let inputs = [
            "foo bar@torpedodepot.com",
            "foo@torpedodepot.com\0",
            "fóo@torpedodepot.com",
            "foo@torpedodepot。com",
            "\"foo\"@torpedodepot.com",
            "foo@[127.0.0.1]",
            "🦀@torpedodepot.com",
        ];

        for input in inputs {
            assert!(!validate(input), "{:?} was accepted", input);
        }
    }
}
