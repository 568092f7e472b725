use proptest::prelude::*;
use unicodec::{Ascii, Codec, CodePoint, Encoding, Utf16, Utf16Be, Utf16Le, Utf8};

fn scalar_value() -> impl Strategy<Value = CodePoint> {
    prop_oneof![0..=0xD7FFu32, 0xE000..=0x10FFFFu32]
}

fn round_trip<C: Codec>(code_point: CodePoint) -> (Result<CodePoint, unicodec::CodecError>, usize) {
    let mut units = Vec::new();
    C::encode(&mut units, code_point).unwrap();
    let mut input = units.into_iter();
    let decoded = C::decode(&mut input);
    (decoded, input.len())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 1_000, ..ProptestConfig::default() })]

    #[test]
    fn utf8_round_trip(code_point in scalar_value()) {
        prop_assert_eq!(round_trip::<Utf8>(code_point), (Ok(code_point), 0));
    }

    #[test]
    fn utf16_round_trip(code_point in scalar_value()) {
        prop_assert_eq!(round_trip::<Utf16>(code_point), (Ok(code_point), 0));
    }

    #[test]
    fn single_unit_utf16_round_trip(code_point in 0..=0xFFFFu32) {
        prop_assert_eq!(round_trip::<Utf16Le>(code_point), (Ok(code_point), 0));
        prop_assert_eq!(round_trip::<Utf16Be>(code_point), (Ok(code_point), 0));
    }

    #[test]
    fn ascii_masks(code_point in any::<u32>()) {
        prop_assert_eq!(round_trip::<Ascii>(code_point), (Ok(code_point & 0x7F), 0));
    }

    #[test]
    fn utf8_matches_std(c in any::<char>()) {
        let mut units = Vec::new();
        Utf8::encode(&mut units, c as u32).unwrap();
        let mut buffer = [0u8; 4];
        prop_assert_eq!(units.as_slice(), c.encode_utf8(&mut buffer).as_bytes());
    }

    #[test]
    fn utf16_matches_std(c in any::<char>()) {
        let mut units = Vec::new();
        Utf16::encode(&mut units, c as u32).unwrap();
        let mut buffer = [0u16; 2];
        prop_assert_eq!(units.as_slice(), &*c.encode_utf16(&mut buffer));
    }

    #[test]
    fn out_of_range_writes_nothing(code_point in 0x110000u32..=u32::MAX) {
        let mut units = Vec::<u8>::new();
        prop_assert_eq!(Utf8::encode(&mut units, code_point), Err(unicodec::CodecError::OutOfRange(code_point)));
        let mut wide = Vec::<u16>::new();
        prop_assert_eq!(Utf16::encode(&mut wide, code_point), Err(unicodec::CodecError::OutOfRange(code_point)));
        prop_assert!(units.is_empty() && wide.is_empty());
    }

    #[test]
    fn decoding_never_overreads(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        for encoding in Encoding::ALL {
            let mut input = bytes.iter().copied();
            let mut calls = 0;
            while input.len() != 0 {
                let before = input.len();
                let _ = encoding.decode_bytes(&mut input);
                prop_assert!(before - input.len() <= 4);
                prop_assert!(input.len() < before);
                calls += 1;
            }
            prop_assert!(calls <= bytes.len());
        }
    }

    #[test]
    fn encoded_text_decodes_back(text in ".{0,32}") {
        for encoding in [Encoding::Utf8, Encoding::Utf16] {
            let mut bytes = Vec::new();
            for c in text.chars() {
                encoding.encode_bytes(&mut bytes, c as u32).unwrap();
            }
            let mut input = bytes.into_iter();
            let mut decoded = String::new();
            while input.len() != 0 {
                let code_point = encoding.decode_bytes(&mut input).unwrap();
                decoded.push(char::from_u32(code_point).unwrap());
            }
            prop_assert_eq!(&decoded, &text);
        }
    }
}
