//! Parser fixtures: structure of parsed lines, canonical round trips and error kinds

use ass_tag_parser::{
    compose, parse, parse_with_config, AlphaIndex, BoldWeight, ColorIndex, DrawCommand, Item,
    KaraokeKind, ParseError, ParserConfig, Point, Rgb, Tag,
};
use pretty_assertions::assert_eq;

/// Lines that are already in canonical form
const CANONICAL_LINES: &[&str] = &[
    "",
    "test",
    "{asdasd}",
    r"{\p2}m 3 4{\p0}",
    r"{\an5\a6}",
    r"{\an5\an5}",
    r"abc def{\an5}ghi jkl{\an5}123 456",
    r"I am {\b1}not{\b0} amused.",
    r"{\b100}How {\b300}bold {\b500}can {\b700}you {\b900}get?",
    r"-Hey\N{\rAlternate}-Huh?\N{\r}-Who are you?",
    r"{\1c&HFF0000&\t(\1c&H0000FF&)}Hello!",
    r"{\an5\t(0,5000,\frz3600)}Wheee",
    r"{\an5\t(0,5000,0.5,\frz3600)}Wheee",
    r"{\an5\fscx0\fscy0\t(0,500,\fscx100\fscy100)}Boo!",
    r"{comment\b1}",
    r"{\b1comment}",
    r"{\2a&HFF&comment}",
    r"{\be2.2}",
    r"{\fs5.4}",
    r"{\k50.5}",
    r"{\K50.5}",
    r"{\kf50.5}",
    r"{\ko50.5}",
    r"{\i1}",
    r"{\i0}",
    r"{\i}",
    r"{\b300}",
    r"{\b}",
    r"{\u1}",
    r"{\u}",
    r"{\s0}",
    r"{\s}",
    r"{\bord0}",
    r"{\xbord1}",
    r"{\ybord4.4}",
    r"{\bord}",
    r"{\shad0}",
    r"{\xshad1}",
    r"{\yshad4.4}",
    r"{\shad}",
    r"{\be2}",
    r"{\be}",
    r"{\blur4.4}",
    r"{\blur}",
    r"{\fn}",
    r"{\fnArial}",
    r"{\fnComic Sans}",
    r"{\fnFoo(\b1}",
    r"{\fe5}",
    r"{\fe}",
    r"{\fs15}",
    r"{\fs}",
    r"{\fscx5.5}",
    r"{\fscy}",
    r"{\fsp-5.5}",
    r"{\fsp}",
    r"{\frx-5.5}",
    r"{\fry5.5}",
    r"{\frz1}",
    r"{\fr1}",
    r"{\frz}",
    r"{\org(-1,-2)}",
    r"{\org(1.1,2.2)}",
    r"{\fax-1.5}",
    r"{\fay}",
    r"{\c&H123456&}",
    r"{\1c&H123456&}",
    r"{\4c&H123456&}",
    r"{\c}",
    r"{\3c}",
    r"{\alpha&H12&}",
    r"{\4a&H12&}",
    r"{\alpha}",
    r"{\1a}",
    r"{\k50}",
    r"{\an}",
    r"{\a}",
    r"{\a11}",
    r"{\q3}",
    r"{\r}",
    r"{\rSome style}",
    r"{\p1}{\p0}",
    r"{\pbo1.1}",
    r"{\pbo-50}",
    r"{\pos(1,2)}",
    r"{\pos(1.1,2.2)}",
    r"{\move(1,2,3,4)}",
    r"{\move(1.1,2.2,3.3,4.4,5.5,6.6)}",
    r"{\fad(100,200)}",
    r"{\fade(1,2,3,4.4,5.5,6.6,7.7)}",
    r"{\t(1,2,3,)}",
    r"{\t(1.1,2.2,3.3,\be5\fs40)}",
    r"{\t(1,)}",
    r"{\t(1.2,\be5\fs40)}",
    r"{\t(50,100,\be5\fs40)}",
    r"{\t(\be5\fs40)}",
    r"{\clip(1,2,3,4)}",
    r"{\iclip(1.1,2.2,3.3,4.4)}",
    r"{\clip(1,m 50 0)}",
    r"{\iclip(m 50 0)}",
];

#[test]
fn canonical_lines_round_trip() {
    for line in CANONICAL_LINES {
        let items = parse(line).unwrap_or_else(|error| panic!("{line:?}: {error}"));
        assert_eq!(compose(&items), *line);
    }
}

#[test]
fn non_canonical_lines_normalize() {
    let cases = [
        ("{}", ""),
        ("a{}b", "ab"),
        (r"{\bord1.0}", r"{\bord1}"),
        (r"{\pos( 1 , 2 )}", r"{\pos(1,2)}"),
        (r"{\t(0, 500, \fscx100)}", r"{\t(0,500,\fscx100)}"),
        (r"{\t(1,2)}", r"{\t(1,2,)}"),
        (r"{\c&H00ff00&}", r"{\c&H00FF00&}"),
        (r"{\fsp-0}", r"{\fsp0}"),
        (r"{\p1}m  0   0{\p0}", r"{\p1}m 0 0{\p0}"),
        (r"{\p1}m 0 0{\p0}{\b1}", r"{\p1}m 0 0{\p0\b1}"),
    ];
    for (input, expected) in cases {
        assert_eq!(compose(&parse(input).unwrap()), expected, "{input:?}");
    }
}

#[test]
fn parse_structure() {
    assert_eq!(
        parse(r"{\b700\i1\c&H0000FF&\2a&H80&}x").unwrap(),
        vec![
            Item::Tag(Tag::Bold {
                weight: Some(BoldWeight::Weight(700))
            }),
            Item::Tag(Tag::Italic {
                enabled: Some(true)
            }),
            Item::Tag(Tag::Color {
                color: Some(Rgb::new(0xFF, 0, 0)),
                index: ColorIndex::Primary,
                short: true,
            }),
            Item::Tag(Tag::Alpha {
                value: Some(0x80),
                index: AlphaIndex::Secondary,
            }),
            Item::text("x"),
        ]
    );

    assert_eq!(
        parse(r"{\k50.5}").unwrap(),
        vec![
            Item::Tag(Tag::Karaoke {
                duration: 500,
                kind: KaraokeKind::Instant
            }),
            Item::comment(".5"),
        ]
    );

    assert_eq!(
        parse(r"{\a10}").unwrap(),
        vec![Item::Tag(Tag::Alignment {
            position: Some(8),
            legacy: true
        })]
    );
}

#[test]
fn parse_drawing_mode() {
    assert_eq!(
        parse(r"{\p1}m 0 0 l 10 0 10 10{\p0}done").unwrap(),
        vec![
            Item::Tag(Tag::Draw {
                scale: 1,
                path: vec![
                    DrawCommand::Move {
                        point: Point::new(0, 0),
                        close: true
                    },
                    DrawCommand::Line(vec![Point::new(10, 0), Point::new(10, 10)]),
                ]
            }),
            Item::text("done"),
        ]
    );
}

#[test]
fn parse_nested_animation() {
    let items = parse(r"{\t(\t(100,200,\b1))}").unwrap();
    assert_eq!(
        items,
        vec![Item::Tag(Tag::Animation {
            tags: vec![Tag::Animation {
                tags: vec![Tag::Bold {
                    weight: Some(BoldWeight::On)
                }],
                times: Some((100.0, 200.0)),
                acceleration: None,
            }],
            times: None,
            acceleration: None,
        })]
    );
}

#[test]
fn brace_errors() {
    assert_eq!(
        parse("{"),
        Err(ParseError::UnterminatedCurlyBrace { pos: 0 })
    );
    assert_eq!(
        parse(r"ab{\b1{\i1}}"),
        Err(ParseError::UnexpectedCurlyBrace { pos: 6 })
    );
    assert_eq!(parse("a}b").unwrap(), vec![Item::text("a}b")]);
}

#[test]
fn unknown_tag_errors() {
    assert_eq!(
        parse(r"{\xyz}"),
        Err(ParseError::UnknownTag {
            name: "xyz".into(),
            pos: 1
        })
    );
    assert_eq!(
        parse(r"{\}"),
        Err(ParseError::UnknownTag {
            name: String::new(),
            pos: 1
        })
    );
}

#[test]
fn bad_argument_errors() {
    assert_eq!(
        parse(r"{\pos(1)}"),
        Err(ParseError::BadAssTagArgument {
            tag: "pos".into(),
            args: "(1)".into(),
            reason: "wrong number of values",
            pos: 5,
        })
    );

    let cases = [
        (r"{\an10}", "an"),
        (r"{\a4}", "a"),
        (r"{\q}", "q"),
        (r"{\q4}", "q"),
        (r"{\k}", "k"),
        (r"{\p}", "p"),
        (r"{\i2}", "i"),
        (r"{\bord-1}", "bord"),
        (r"{\c&H12&}", "c"),
        (r"{\fade(1,2,3)}", "fade"),
        (r"{\move(1,2,3,4,5)}", "move"),
        (r"{\clip(1,2,3)}", "clip"),
        (r"{\iclip(m 1)}", "iclip"),
        (r"{\t(1,2,3,4,\b1)}", "t"),
        (r"{\t(\b1 junk)}", "t"),
        (r"{\t(\p1)}", "t"),
        (r"{\pos(1,2}", "pos"),
        (r"{\p1}x 1 2{\p0}", "p"),
    ];
    for (line, expected) in cases {
        match parse(line) {
            Err(ParseError::BadAssTagArgument { tag, .. }) => assert_eq!(tag, expected, "{line}"),
            other => panic!("{line:?} gave {other:?}"),
        }
    }
}

#[test]
fn resource_limits() {
    let config = ParserConfig::default().with_max_nesting_depth(2);
    assert!(parse_with_config(r"{\t(\t(\b1))}", &config).is_ok());
    assert!(matches!(
        parse_with_config(r"{\t(\t(\t(\b1)))}", &config),
        Err(ParseError::MaxNestingDepth { limit: 2, .. })
    ));

    let deep = format!("{{{}\\b1{}}}", r"\t(".repeat(100), ")".repeat(100));
    assert!(matches!(
        parse(&deep),
        Err(ParseError::MaxNestingDepth { limit: 32, .. })
    ));

    let config = ParserConfig::default().with_max_input_len(3);
    assert_eq!(
        parse_with_config("abcd", &config),
        Err(ParseError::InputTooLarge { size: 4, limit: 3 })
    );
}

#[test]
fn positions_count_bytes() {
    let error = parse("日本{\\xyz}").unwrap_err();
    assert_eq!(error.pos(), 7);
}
