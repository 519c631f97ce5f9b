#[cfg(test)]
mod verify {
    use torpedodepot::language::{Address, Domain};
    use torpedodepot::parsing::{self, ParsingError};
    use torpedodepot::validate;

    #[test]
    fn every_domain_accepted() {
        for domain in Domain::ALL {
            let address = format!("someone@{}", domain);

            assert!(validate(&address), "{} was rejected", address);
            assert_eq!(
                parsing::parse(&address),
                Ok(Address {
                    local: "someone",
                    domain
                })
            );
        }
    }

    #[test]
    fn narrow_local_parts() {
        for address in [
            "a@torpedodepot.com",
            "ABC@torpedodepot.net",
            "007@torpedodepot.wannabemil",
            "MixedCase99@torpedodepot.com",
        ] {
            assert!(validate(address), "{} was rejected", address);
        }
    }

    #[test]
    fn wide_local_parts() {
        // accepted by the grammar even though the prefilter would never
        // hand these over whole
        for address in [
            "foo.bar@torpedodepot.net",
            "first_last@torpedodepot.com",
            "mail+tag@torpedodepot.com",
            "a-b.c_d@torpedodepot.wannabemil",
        ] {
            assert!(validate(address), "{} was rejected", address);
        }

        for address in [
            ".foo@torpedodepot.com",
            "foo.@torpedodepot.com",
            "foo..bar@torpedodepot.com",
            "-foo@torpedodepot.com",
            "foo_@torpedodepot.com",
        ] {
            assert!(!validate(address), "{} was accepted", address);
        }
    }

    #[test]
    fn domain_is_exact() {
        for address in [
            "foo@torpedodepot.org",
            "foo@Torpedodepot.com",
            "foo@torpedodepot.COM",
            "foo@sub.torpedodepot.com",
            "foo@torpedodepot..com",
            "foo@torpedodepotcom",
            "foo@torpedodepot.com.net",
            "foo@@torpedodepot.com",
        ] {
            assert!(!validate(address), "{} was accepted", address);
        }
    }

    #[test]
    fn failures_are_classified() {
        assert_eq!(
            parsing::parse("foo@torpedodepot.com!"),
            Err(ParsingError::InvalidCharacter(20, '!'))
        );
        assert!(matches!(
            parsing::parse("foo@torpedodepot.comX"),
            Err(ParsingError::Expected(17, _))
        ));
        assert_eq!(
            parsing::parse("foo@torpedodepot.com.com"),
            Err(ParsingError::TrailingInput(20))
        );
        assert_eq!(
            parsing::parse("foo@"),
            Err(ParsingError::UnexpectedEndOfInput(4))
        );
    }
}
