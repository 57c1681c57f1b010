//! Tests for style parsing and composition.

use sgr::{Paint, Property, Style, StyleParseError, parse_style};

fn props(input: &str) -> Vec<Property> {
    parse_style(input).properties().to_vec()
}

// ============================================================================
// Grammar
// ============================================================================

#[test]
fn empty() {
    assert!(props("").is_empty());
}

#[test]
fn reset() {
    assert_eq!(props("reset"), [Property::Reset]);
}

#[test]
fn attributes_only() {
    assert_eq!(props("+b"), [Property::Bold]);
    assert_eq!(props("+bu"), [Property::Bold, Property::Underline]);
}

#[test]
fn foreground_only() {
    assert_eq!(props("yellow"), [Property::YELLOW]);
}

#[test]
fn background_only() {
    assert_eq!(props(":red"), [Property::BG_RED]);
}

#[test]
fn foreground_and_attribute() {
    assert_eq!(props("green+b"), [Property::Bold, Property::GREEN]);
}

#[test]
fn background_and_attribute() {
    assert_eq!(props(":magenta+u"), [Property::Underline, Property::BG_MAGENTA]);
}

#[test]
fn foreground_and_background() {
    assert_eq!(props("cyan:red"), [Property::CYAN, Property::BG_RED]);
}

#[test]
fn everything() {
    assert_eq!(
        props("yellow:blue+b"),
        [Property::Bold, Property::YELLOW, Property::BG_BLUE]
    );
    insta::assert_debug_snapshot!(parse_style("red:green+br"), @r"
    Style {
        properties: [
            Bold,
            Reverse,
            Fg(
                Red,
            ),
            Bg(
                Green,
            ),
        ],
    }
    ");
}

#[test]
fn reset_with_attributes_is_not_the_reset() {
    assert_eq!(props("reset+b"), [Property::Bold]);
}

#[test]
fn unknown_tokens_degrade_to_nothing() {
    assert!(props("bogus").is_empty());
    assert!(props("+zzz").is_empty());
    assert!(props(":bogus").is_empty());
    assert!(props("!!:??+--").is_empty());
}

#[test]
fn color_names_ignore_case() {
    assert_eq!(parse_style("YELLOW"), parse_style("yellow"));
    assert_eq!(parse_style("Cyan:RED"), parse_style("cyan:red"));
}

#[test]
fn every_color_name_parses() {
    for name in ["black", "red", "green", "yellow", "blue", "magenta", "cyan", "white"] {
        let fg = props(name);
        let bg = props(&format!(":{name}"));
        assert_eq!(fg.len(), 1, "foreground {name}");
        assert_eq!(bg.len(), 1, "background {name}");
        assert_eq!(bg[0].code(), fg[0].code() + 10);
    }
}

#[test]
fn parses_are_independent() {
    let mut first = parse_style("red");
    let second = parse_style("red");
    first = first.with(Property::Bold);
    assert_eq!(second.properties(), [Property::RED]);
    assert_eq!(first.len(), 2);
}

// ============================================================================
// Strict parsing
// ============================================================================

#[test]
fn strict_rejects_unknown_tokens() {
    assert_eq!(
        Style::parse_strict("bogus"),
        Err(StyleParseError::UnknownForeground("bogus".into()))
    );
    assert_eq!(
        Style::parse_strict("+z"),
        Err(StyleParseError::UnknownAttribute('z'))
    );
    assert_eq!(
        Style::parse_strict(":bogus"),
        Err(StyleParseError::UnknownBackground("bogus".into()))
    );
}

#[test]
fn strict_error_messages() {
    let err = Style::parse_strict("+z").unwrap_err();
    assert_eq!(err.to_string(), "unknown attribute: 'z'");
    let err = Style::parse_strict("red:teal").unwrap_err();
    assert_eq!(err.to_string(), "unknown background color: \"teal\"");
}

// ============================================================================
// Composition
// ============================================================================

#[test]
fn style_encoding() {
    let critical = Style::new([Property::Bold, Property::YELLOW, Property::BG_RED]);
    insta::assert_debug_snapshot!(critical.to_string(), @r#""\u{1b}[1m\u{1b}[33m\u{1b}[41m""#);
}

#[test]
fn style_wrap_matches_definition() {
    for spec in ["", "reset", "green+b", "red:green+br"] {
        let style = parse_style(spec);
        assert_eq!(style.wrap("X"), format!("{style}X{}", Property::Reset));
        assert_eq!(style.wrap_line("X"), format!("{style}X{}\n", Property::Reset));
    }
}

#[test]
fn style_wrapf_keeps_escapes_out_of_format() {
    let critical = Style::new([Property::Bold, Property::YELLOW, Property::BG_RED]);
    let out = sgr::wrapf!(critical, "{} {}\n", "CRITICAL:", "This should be good");
    assert_eq!(
        out,
        format!("{critical}CRITICAL: This should be good\n{}", Property::Reset)
    );
}

#[test]
fn style_prompt_wrap() {
    let style = Style::new([Property::Bold, Property::GREEN]);
    insta::assert_debug_snapshot!(
        style.prompt_wrap("user@host"),
        @r#""\\[\u{1b}[1m\u{1b}[32m\\]user@host\\[\u{1b}[0m\\]""#
    );
}

#[test]
fn styles_can_be_shared_across_threads() {
    let style = parse_style("red+b");
    let handle = std::thread::spawn(move || style.wrap("from a thread"));
    let out = handle.join().unwrap();
    assert_eq!(out, "\u{1b}[1m\u{1b}[31mfrom a thread\u{1b}[0m");
}
