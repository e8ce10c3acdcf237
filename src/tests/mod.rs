//! Cross-module tests for asnames

#[cfg(test)]
mod grammar_tests {
    use crate::asn::{decode, Asn};
    use crate::names::{parse_line, short_name};

    #[test]
    fn test_dotted_value_formula() {
        for (hi, lo) in [(0u32, 0u32), (1, 0), (2, 21), (6, 10), (6, 115), (65535, 1)] {
            let token = format!("{hi}.{lo}");
            assert_eq!(decode(&token), Ok(Asn(hi * 65536 + lo)), "token {token}");
        }
    }

    #[test]
    fn test_parsed_names_always_have_a_short_name() {
        let lines = [
            "AS2     UDEL-DCN - University of Delaware",
            "AS6     BULL-NETWORK for further information please visit http://www.bull.com",
            "AS65437 -Private Use AS-",
            "AS6.111 GWBPC-ASN-BGP - THE GEORGE W. BUSH FOUNDATION",
            "AS23456 ",
        ];
        for line in lines {
            let (_, full) = parse_line(line).unwrap();
            let short = short_name(full);
            assert!(full.starts_with(short));
            assert_eq!(short_name(short), short);
        }
    }

    #[test]
    fn test_line_number_uses_codec() {
        let (asn, _) = parse_line("AS2.21 SOME-NET - Somewhere").unwrap();
        assert_eq!(asn, Asn(131093));
        assert_eq!(asn.to_asdot(), "2.21");
    }
}
