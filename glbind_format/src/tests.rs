use pretty_assertions::assert_eq;

use crate::{
    parse_format, AttribFunc, Divisor, FormatError, FormatInfo, FormatIterator, FormatNode,
    NodeKind, ScalarType, Span,
};

fn info(source: &str) -> FormatInfo {
    FormatIterator::new(source).info()
}

fn valid(size: u32, nodes: u32, divisor: Divisor) -> FormatInfo {
    FormatInfo {
        size,
        nodes,
        divisor,
        valid: true,
    }
}

fn nodes(source: &str) -> Vec<FormatNode> {
    match parse_format(source) {
        Ok(parsed) => parsed.nodes,
        Err(err) => {
            eprintln!("{err}");
            panic!("PARSING FAILURE");
        }
    }
}

fn error(source: &str) -> (usize, FormatError) {
    match parse_format(source) {
        Ok(parsed) => panic!("{source:?} parsed unexpectedly: {parsed:?}"),
        Err(err) => (err.index, err.error),
    }
}

#[test]
fn single_float_vector() {
    assert_eq!(info("3f"), valid(12, 1, Divisor::PerVertex));
}

#[test]
fn normalized_bytes() {
    assert_eq!(info("2f1"), valid(2, 1, Divisor::PerVertex));

    let [node] = nodes("2f1")[..] else {
        panic!("expected one node");
    };
    assert_eq!(node.kind, NodeKind::Scalar(ScalarType::UnsignedByte));
    assert!(node.normalize);
    assert_eq!(node.attrib_func(), Some(AttribFunc::Float));
}

#[test]
fn padding_counts_towards_size_only() {
    assert_eq!(info("1x4 3f"), valid(16, 1, Divisor::PerVertex));
    assert_eq!(info("x"), valid(1, 0, Divisor::PerVertex));
    assert_eq!(info("2x8"), valid(16, 0, Divisor::PerVertex));
}

#[test]
fn divisor_suffixes() {
    assert_eq!(info("3f/v").divisor, Divisor::PerVertex);
    assert_eq!(info("3f/i").divisor.value(), 1);
    assert_eq!(info("3f/r").divisor.value(), Divisor::PER_RENDER);
    assert_eq!(info("3f 2f/i"), valid(20, 2, Divisor::PerInstance));
    assert_eq!(info("/i"), valid(0, 0, Divisor::PerInstance));
}

#[test]
fn per_render_never_advances_in_practice() {
    assert!(Divisor::PerRender.value() >= i32::MAX as u32);
}

#[test]
fn empty_string_is_valid() {
    assert_eq!(info(""), valid(0, 0, Divisor::PerVertex));
    assert_eq!(info("   "), valid(0, 0, Divisor::PerVertex));
    assert!(nodes("").is_empty());
}

#[test]
fn illegal_widths_are_rejected() {
    assert!(!info("3f9").valid);
    assert!(!info("3i8").valid);
    assert!(!info("3u8").valid);
    assert!(!info("x3").valid);

    assert_eq!(
        error("3f 2i9"),
        (
            5,
            FormatError::BadWidth {
                kind: b'i',
                width: b'9'
            }
        )
    );
}

#[test]
fn size_table() {
    let cases: [(&str, ScalarType, u32, bool); 10] = [
        ("f1", ScalarType::UnsignedByte, 1, true),
        ("f2", ScalarType::HalfFloat, 2, false),
        ("f", ScalarType::Float, 4, false),
        ("f8", ScalarType::Double, 8, false),
        ("i1", ScalarType::Byte, 1, false),
        ("i2", ScalarType::Short, 2, false),
        ("i", ScalarType::Int, 4, false),
        ("u1", ScalarType::UnsignedByte, 1, false),
        ("u2", ScalarType::UnsignedShort, 2, false),
        ("u4", ScalarType::UnsignedInt, 4, false),
    ];

    for (source, scalar, width, normalize) in cases {
        let [node] = nodes(source)[..] else {
            panic!("expected one node for {source:?}");
        };
        assert_eq!(node.kind, NodeKind::Scalar(scalar), "{source}");
        assert_eq!(node.size, width, "{source}");
        assert_eq!(node.width, width, "{source}");
        assert_eq!(node.normalize, normalize, "{source}");
        assert_eq!(node.gl_type(), Some(scalar.to_u32()), "{source}");
    }
}

#[test]
fn size_is_sum_of_count_times_width() {
    let source = "4f2 3i1 2x2 16f 1u 0f8";
    let parsed = parse_format(source).unwrap();

    let expected: u32 = parsed.nodes.iter().map(|n| n.count * n.width).sum();
    assert_eq!(parsed.info.size, expected);
    assert_eq!(expected, 8 + 3 + 4 + 64 + 4);
    assert_eq!(parsed.info.nodes, 5);
    assert_eq!(parsed.info, info(source));
}

#[test]
fn zero_count_is_a_degenerate_node() {
    let [node] = nodes("0f")[..] else {
        panic!("expected one node");
    };
    assert_eq!(node.count, 0);
    assert_eq!(node.size, 0);
    assert_eq!(info("0f 3f"), valid(12, 2, Divisor::PerVertex));
}

#[test]
fn dangling_counts() {
    assert_eq!(error("3f 2"), (3, FormatError::DanglingCount));
    assert_eq!(error("3 f"), (0, FormatError::DanglingCount));
    assert_eq!(error("3f 4/i"), (3, FormatError::DanglingCount));
    assert!(info("3f 0").valid);
}

#[test]
fn unexpected_bytes() {
    assert_eq!(error("2f1x"), (3, FormatError::UnexpectedByte(b'x')));
    assert_eq!(error("3ff"), (2, FormatError::UnexpectedByte(b'f')));
    assert_eq!(error("3d"), (1, FormatError::UnknownKind(b'd')));
    assert_eq!(error("3f,2f"), (2, FormatError::UnexpectedByte(b',')));
}

#[test]
fn malformed_divisors() {
    assert_eq!(error("3f/"), (3, FormatError::BadDivisor));
    assert_eq!(error("3f/q"), (3, FormatError::BadDivisor));
    assert_eq!(error("3f/ii"), (4, FormatError::TrailingAfterDivisor));
    assert_eq!(error("3f/i 2f"), (4, FormatError::TrailingAfterDivisor));
    assert_eq!(error("3f /i"), (3, FormatError::SpaceBeforeDivisor));
}

#[test]
fn huge_counts_overflow() {
    assert_eq!(error("99999999999f").1, FormatError::CountOverflow);
    assert_eq!(error("1000000000f8").1, FormatError::CountOverflow);
    assert!(!info("1000000000f 1000000000f").valid);
}

#[test]
fn iterator_steps_and_fuses() {
    let mut iter = FormatIterator::new("3f 2u2 x9 4f");

    let first = iter.next().unwrap().unwrap();
    assert_eq!(first.span, Span::new(0, 2));
    assert_eq!(first.span.select(iter.source()), "3f");

    let second = iter.next().unwrap().unwrap();
    assert_eq!(second.kind, NodeKind::Scalar(ScalarType::UnsignedShort));
    assert_eq!(second.span.select(iter.source()), "2u2");
    assert_eq!(second.attrib_func(), Some(AttribFunc::Int));

    let err = iter.next().unwrap().unwrap_err();
    assert_eq!(err.index, 8);
    assert!(iter.next().is_none());
}

#[test]
fn iterator_stops_before_divisor() {
    let mut iter = FormatIterator::new("2f/i");
    assert!(iter.next().unwrap().is_ok());
    assert!(iter.next().is_none());
    assert_eq!(iter.position(), 2);
    assert_eq!(iter.remainder(), "/i");

    // `info` always starts over
    assert_eq!(iter.info(), valid(8, 1, Divisor::PerInstance));
}

#[test]
fn doubles_bind_as_long() {
    let parsed = parse_format("2f8 3f").unwrap();
    let funcs: Vec<_> = parsed.attributes().map(|n| n.attrib_func()).collect();
    assert_eq!(funcs, vec![Some(AttribFunc::Long), Some(AttribFunc::Float)]);
}

#[test]
fn node_display_round_trips_the_token() {
    let shown: Vec<String> = nodes("3f 2u1 x4").iter().map(|n| n.to_string()).collect();
    assert_eq!(shown, vec!["3f4", "2u1", "1x4"]);
}

#[test]
fn error_display_points_at_the_byte() {
    let err = parse_format("3f 2q").unwrap_err();
    let shown = err.to_string();
    assert!(shown.contains("3f 2q"), "{shown}");
    assert!(shown.contains("unknown attribute kind"), "{shown}");
    assert!(shown.contains('^'), "{shown}");
}

mod properties {
    use proptest::prelude::*;

    use super::info;
    use crate::{parse_format, Divisor};

    /// Kind letter, width digit as written, bytes per scalar.
    const TOKENS: &[(char, &str, u32)] = &[
        ('f', "", 4),
        ('f', "1", 1),
        ('f', "2", 2),
        ('f', "4", 4),
        ('f', "8", 8),
        ('i', "", 4),
        ('i', "1", 1),
        ('i', "2", 2),
        ('i', "4", 4),
        ('u', "", 4),
        ('u', "1", 1),
        ('u', "2", 2),
        ('u', "4", 4),
        ('x', "", 1),
        ('x', "1", 1),
        ('x', "2", 2),
        ('x', "4", 4),
        ('x', "8", 8),
    ];

    const BAD_WIDTHS: &[(char, char)] = &[
        ('f', '0'),
        ('f', '3'),
        ('f', '9'),
        ('i', '8'),
        ('i', '3'),
        ('u', '8'),
        ('u', '6'),
        ('x', '3'),
        ('x', '0'),
    ];

    #[derive(Debug, Clone)]
    struct Token {
        text: String,
        size: u32,
        padding: bool,
    }

    fn token() -> impl Strategy<Value = Token> {
        (prop::option::of(0u32..40), prop::sample::select(TOKENS)).prop_map(
            |(count, (letter, width, bytes))| Token {
                text: match count {
                    Some(count) => format!("{count}{letter}{width}"),
                    None => format!("{letter}{width}"),
                },
                size: count.unwrap_or(1) * bytes,
                padding: letter == 'x',
            },
        )
    }

    fn divisor() -> impl Strategy<Value = Option<(char, Divisor)>> {
        prop::option::of(prop::sample::select(vec![
            ('v', Divisor::PerVertex),
            ('i', Divisor::PerInstance),
            ('r', Divisor::PerRender),
        ]))
    }

    fn source(tokens: &[Token], divisor: Option<(char, Divisor)>) -> String {
        let mut source = tokens
            .iter()
            .map(|token| token.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        if let Some((letter, _)) = divisor {
            source.push('/');
            source.push(letter);
        }
        source
    }

    proptest! {
        #[test]
        fn size_and_nodes_add_up(
            tokens in prop::collection::vec(token(), 0..8),
            divisor in divisor(),
        ) {
            let source = source(&tokens, divisor);
            let summary = info(&source);

            prop_assert!(summary.valid, "{source:?}");
            prop_assert_eq!(summary.size, tokens.iter().map(|t| t.size).sum::<u32>());
            prop_assert_eq!(summary.nodes as usize, tokens.iter().filter(|t| !t.padding).count());
            prop_assert_eq!(summary.divisor, divisor.map_or(Divisor::PerVertex, |(_, d)| d));

            let parsed = parse_format(&source);
            prop_assert!(parsed.is_ok(), "{source:?}");
            if let Ok(parsed) = parsed {
                prop_assert_eq!(parsed.info, summary);
                prop_assert_eq!(parsed.nodes.len(), tokens.len());
            }
        }

        #[test]
        fn illegal_widths_invalidate(
            tokens in prop::collection::vec(token(), 0..8),
            (letter, width) in prop::sample::select(BAD_WIDTHS),
            count in 1u32..40,
        ) {
            let mut source = source(&tokens, None);
            if !source.is_empty() {
                source.push(' ');
            }
            source.push_str(&format!("{count}{letter}{width}"));

            prop_assert!(!info(&source).valid, "{source:?}");
            prop_assert!(parse_format(&source).is_err(), "{source:?}");
        }

        #[test]
        fn trailing_bytes_invalidate(
            tokens in prop::collection::vec(token(), 0..8),
            divisor in divisor(),
            junk in prop::sample::select(vec!['q', ',', '#', '.', 'z', '/']),
        ) {
            let mut source = source(&tokens, divisor);
            source.push(junk);

            prop_assert!(!info(&source).valid, "{source:?}");
        }
    }
}
