//! Comprehensive Huffman coding integration tests.

use huffarc::{
    BitVec, CodeTable, Encoded, FrequencyTable, HuffmanError, HuffmanTree, decode, encode,
};

fn pipeline(input: &[u8]) -> (HuffmanTree, CodeTable, BitVec) {
    let freq = FrequencyTable::from_bytes(input);
    let tree = HuffmanTree::build(&freq).expect("tree construction failed");
    let codes = CodeTable::assign(&tree);
    let stream = encode(input, &codes).expect("encoding failed");
    (tree, codes, stream)
}

#[test]
fn test_roundtrip_simple() {
    let original = b"to be or not to be, that is the question";
    let (tree, _, stream) = pipeline(original);
    let decoded = decode(&tree, &stream, original.len()).expect("decoding failed");

    assert_eq!(decoded, original);
}

#[test]
fn test_abracadabra_fixture() {
    let original = b"abracadabra";
    let freq = FrequencyTable::from_bytes(original);

    // a:5 b:2 r:2 c:1 d:1
    assert_eq!(freq.get(b'a'), Some(5));
    assert_eq!(freq.get(b'b'), Some(2));
    assert_eq!(freq.get(b'r'), Some(2));
    assert_eq!(freq.get(b'c'), Some(1));
    assert_eq!(freq.get(b'd'), Some(1));

    let tree = HuffmanTree::build(&freq).unwrap();
    assert_eq!(tree.leaf_count(), 5);
    assert_eq!(tree.weight(), 11);

    let codes = CodeTable::assign(&tree);
    let stream = encode(original, &codes).unwrap();
    let decoded = decode(&tree, &stream, original.len()).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_prefix_free_property() {
    let (_, codes, _) = pipeline(b"the quick brown fox jumps over the lazy dog");

    let all: Vec<(u8, &BitVec)> = codes.iter().collect();
    for &(sa, a) in &all {
        for &(sb, b) in &all {
            if sa == sb {
                continue;
            }
            let is_prefix =
                a.len() <= b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y);
            assert!(
                !is_prefix,
                "code for {:#04x} ({}) is a prefix of code for {:#04x} ({})",
                sa, a, sb, b
            );
        }
    }
}

#[test]
fn test_weight_conservation() {
    for input in [
        b"abracadabra".as_slice(),
        b"x".as_slice(),
        b"mississippi river".as_slice(),
    ] {
        let freq = FrequencyTable::from_bytes(input);
        let tree = HuffmanTree::build(&freq).unwrap();
        assert_eq!(tree.weight(), input.len() as u64);
    }
}

#[test]
fn test_determinism() {
    let original = b"deterministic tie-breaking makes code tables reproducible";

    let (tree_a, codes_a, stream_a) = pipeline(original);
    let (tree_b, codes_b, stream_b) = pipeline(original);

    assert_eq!(tree_a, tree_b);
    assert_eq!(codes_a, codes_b);
    assert_eq!(stream_a, stream_b);
}

#[test]
fn test_degenerate_single_symbol() {
    // The canonical bug this must guard against: an empty code for the
    // lone symbol makes "aaaa" encode to an empty stream.
    let original = b"aaaa";
    let (tree, codes, stream) = pipeline(original);

    let code = codes.get(b'a').expect("lone symbol must have a code");
    assert!(!code.is_empty(), "lone symbol must not get an empty code");
    assert_eq!(stream.len(), 4);

    let decoded = decode(&tree, &stream, original.len()).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_empty_input_rejected() {
    let freq = FrequencyTable::from_bytes(b"");
    assert!(matches!(
        HuffmanTree::build(&freq),
        Err(HuffmanError::EmptyInput)
    ));
}

#[test]
fn test_corrupted_stream_rejected() {
    let original = b"abracadabra";
    let (tree, _, mut stream) = pipeline(original);

    // Cut the stream short of the last symbol.
    stream.truncate(stream.len() - 3);

    let err = decode(&tree, &stream, original.len()).unwrap_err();
    match err {
        HuffmanError::TruncatedStream { decoded, expected } => {
            assert_eq!(expected, original.len());
            assert!(decoded < expected);
        }
        other => panic!("expected TruncatedStream, got {:?}", other),
    }
}

#[test]
fn test_unknown_symbol_rejected() {
    let (_, codes, _) = pipeline(b"abracadabra");
    let err = encode(b"zebra", &codes).unwrap_err();
    assert!(matches!(err, HuffmanError::UnknownSymbol { symbol: b'z' }));
}

#[test]
fn test_all_byte_values() {
    let original: Vec<u8> = (0..=255).collect();
    let (tree, _, stream) = pipeline(&original);

    // Uniform distribution over 256 symbols: every code is 8 bits.
    assert_eq!(stream.len(), original.len() * 8);

    let decoded = decode(&tree, &stream, original.len()).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_multiple_sizes() {
    for size in [1, 2, 7, 8, 9, 100, 1000] {
        let original: Vec<u8> = (0..size).map(|i| ((i * 31 + 17) % 7) as u8).collect();
        let encoded = Encoded::from_bytes(&original).expect("encoding failed");
        let decoded = encoded.decode().expect("decoding failed");

        assert_eq!(decoded, original, "round-trip failed for size {}", size);
    }
}

#[test]
fn test_stream_renders_as_bit_string() {
    let (tree, _, stream) = pipeline(b"abab");
    let rendered = stream.to_string();
    assert!(rendered.chars().all(|c| c == '0' || c == '1'));

    // The textual form parses back to the identical stream.
    let reparsed: BitVec = rendered.parse().unwrap();
    assert_eq!(reparsed, stream);
    assert_eq!(decode(&tree, &reparsed, 4).unwrap(), b"abab");
}

#[test]
fn test_skewed_frequencies_compress() {
    let mut original = vec![b'e'; 900];
    original.extend_from_slice(&[b'q'; 50]);
    original.extend_from_slice(&[b'z'; 50]);

    let encoded = Encoded::from_bytes(&original).unwrap();

    // Far below 8 bits per symbol for this distribution.
    assert!(encoded.stream().len() < original.len() * 3);
    assert_eq!(encoded.decode().unwrap(), original);
}
