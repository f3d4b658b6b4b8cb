// Copyright (c) 2024 The Botho Foundation

use devnet_util_b58::{decode, encode, format_byte_list, parse_byte_list, Error};

// A 64-byte keypair as it appears in a keypair file
const KEYPAIR_JSON: &str = "[174,47,154,16,202,193,206,113,199,190,53,133,169,175,31,56,222,53,138,189,224,216,117,173,10,149,53,45,73,251,237,246,15,185,186,82,177,240,148,69,241,227,167,80,141,89,240,121,121,35,172,247,68,251,226,218,48,63,176,109,168,89,238,135]";

#[test]
fn keypair_file_contents_survive_encode_then_decode() {
    let bytes = parse_byte_list(KEYPAIR_JSON).unwrap();
    assert_eq!(bytes.len(), 64);

    let encoded = encode(&bytes);
    assert_eq!(encode(&bytes), encoded);
    assert_eq!(decode(&encoded).unwrap(), bytes);
}

#[test]
fn decoded_output_parses_back_as_a_byte_list() {
    let bytes = decode("2NEpo7TZRRrLZSi2U").unwrap();
    assert_eq!(bytes, b"Hello World!");

    let printed = format_byte_list(&bytes);
    assert_eq!(parse_byte_list(&printed).unwrap(), bytes);
}

#[test]
fn leading_zero_bytes_are_preserved() {
    let bytes = vec![0, 0, 0, 7, 255];
    assert!(encode(&bytes).starts_with("111"));
    assert_eq!(decode(&encode(&bytes)).unwrap(), bytes);
}

#[test]
fn rejected_list_produces_no_bytes() {
    assert!(matches!(
        parse_byte_list("1,x,3"),
        Err(Error::InvalidByte { index: 1, .. })
    ));
}
