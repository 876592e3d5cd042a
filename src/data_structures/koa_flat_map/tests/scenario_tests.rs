// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Scenario tests pinning down concrete layouts and edge cases.

use test_case::test_case;

use crate::data_structures::koa_flat_map::KoaFlatMap;

fn literal_map() -> KoaFlatMap<u32> {
    KoaFlatMap::from_entries([("key1", 42u32), ("key2", 27_644_437), ("l", 2)])
}

#[test_case("key1", Some(42); "first key")]
#[test_case("key2", Some(27_644_437); "second key")]
#[test_case("l", Some(2); "one letter key")]
#[test_case("m", None; "adjacent key never inserted")]
#[test_case("key", None; "strict prefix of real keys")]
#[test_case("key11", None; "proper extension of real key")]
#[test_case("", None; "empty key never inserted")]
fn test_literal_scenario(key: &str, expected: Option<u32>) {
    let map = literal_map();

    // the text and byte entry points must agree on every input
    assert_eq!(map.lookup_str(key).copied(), expected);
    assert_eq!(map.lookup_bytes(key.as_bytes()).copied(), expected);
}

#[test]
fn test_wide_byte_span() {
    let map = KoaFlatMap::from_entries([("a!", 1u32), ("a~", 2)]);

    assert_eq!(map.lookup_str("a!"), Some(&1));
    assert_eq!(map.lookup_str("a~"), Some(&2));

    // the second level spans '!' (0x21) through '~' (0x7e); every byte
    // strictly between them is a gap slot and must miss
    for byte in 0x22u8..=0x7d {
        assert_eq!(map.lookup_bytes(&[b'a', byte]), None);
    }

    // bytes outside the span miss through the range check instead
    assert_eq!(map.lookup_bytes(&[b'a', 0x20]), None);
    assert_eq!(map.lookup_bytes(&[b'a', 0x7f]), None);
    assert_eq!(map.lookup_bytes(&[b'a', 0xff]), None);
}

#[test]
fn test_full_alphabet_span() {
    let map = KoaFlatMap::from_entries([(vec![b'k', 0x00], 1u32), (vec![b'k', 0xff], 2)]);

    assert_eq!(map.lookup_bytes(&[b'k', 0x00]), Some(&1));
    assert_eq!(map.lookup_bytes(&[b'k', 0xff]), Some(&2));
    assert_eq!(map.lookup_bytes(&[b'k', 0x80]), None);
    assert_eq!(map.lookup_bytes(&[b'k']), None);
}

#[test]
fn test_bytes_never_seen_at_build_time() {
    let map = KoaFlatMap::from_entries([("abc", 1u32)]);

    assert_eq!(map.lookup_bytes(&[0xf0, 0x9f, 0xa6, 0x80]), None);
    assert_eq!(map.lookup_bytes(&[0x00]), None);
    assert_eq!(map.lookup_str("abd"), None);
}

#[test]
fn test_keys_sharing_long_prefixes() {
    let map = KoaFlatMap::from_entries([
        ("interleave", 1u32),
        ("inter", 2),
        ("interleaved", 3),
        ("in", 4),
    ]);

    assert_eq!(map.lookup_str("in"), Some(&4));
    assert_eq!(map.lookup_str("inter"), Some(&2));
    assert_eq!(map.lookup_str("interleave"), Some(&1));
    assert_eq!(map.lookup_str("interleaved"), Some(&3));
    assert_eq!(map.lookup_str("i"), None);
    assert_eq!(map.lookup_str("interleav"), None);
    assert_eq!(map.lookup_str("interleavedx"), None);
}

#[test]
fn test_multi_byte_text_round_trips_as_bytes() {
    // text keys are their UTF-8 bytes, nothing more
    let map = KoaFlatMap::from_entries([("ß", 1u32), ("s", 2)]);

    assert_eq!(map.lookup_str("ß"), Some(&1));
    assert_eq!(map.lookup_bytes("ß".as_bytes()), Some(&1));
    assert_eq!(map.lookup_str("s"), Some(&2));
    assert_eq!(map.lookup_bytes(&[0xc3]), None);
}
