//! Lexer tests: normalization contract, position tracking, and the
//! agreement between `normalize` and `Lexer::lex`.

use bf2java_lexer::{normalize, Lexer, OPERATOR_CHARS};
use bf2java_types::{Operator, SourceFile, Span};

// ─────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────

/// Lex source text and return just the operators.
fn operators(source: &str) -> Vec<Operator> {
    let sf = SourceFile::new("test.bf", source);
    Lexer::new(&sf)
        .lex()
        .tokens
        .into_iter()
        .map(|t| t.operator)
        .collect()
}

const HELLO_WORLD: &str = "\
Prints the cell values of a greeting rather than its characters
++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]
>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.
";

// ─────────────────────────────────────────────────────────────────────
// normalize()
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_normalize_keeps_all_operators_in_order() {
    assert_eq!(normalize("><+-.,[]"), "><+-.,[]");
    assert_eq!(normalize("][.,-+<>"), "][.,-+<>");
}

#[test]
fn test_normalize_drops_whitespace_and_text() {
    assert_eq!(normalize("  + hello + "), "++");
    assert_eq!(normalize("\t+\r\n-\n"), "+-");
}

#[test]
fn test_normalize_only_comments_is_empty() {
    assert_eq!(normalize("just a comment with no operators"), "");
}

#[test]
fn test_normalize_drops_non_ascii() {
    assert_eq!(normalize("+ü→-日本.\u{FFFD},"), "+-.,");
}

#[test]
fn test_normalize_output_only_contains_operators() {
    for source in [HELLO_WORLD, "abc[def]ghi", "{}()<>", "💖+💖"] {
        let out = normalize(source);
        assert!(
            out.chars().all(|c| OPERATOR_CHARS.contains(&c)),
            "non-operator survived in {out:?}"
        );
    }
}

#[test]
fn test_normalize_is_idempotent() {
    for source in [HELLO_WORLD, "", "  + hello + ", "][", "x[y[z]w]v"] {
        let once = normalize(source);
        assert_eq!(normalize(&once), once, "source {source:?}");
    }
}

#[test]
fn test_normalize_length_never_grows() {
    for source in [HELLO_WORLD, "+", "a", "é+"] {
        assert!(normalize(source).chars().count() <= source.chars().count());
    }
}

// ─────────────────────────────────────────────────────────────────────
// Lexer
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_lex_maps_each_character() {
    assert_eq!(
        operators("><+-.,[]"),
        vec![
            Operator::PtrInc,
            Operator::PtrDec,
            Operator::CellInc,
            Operator::CellDec,
            Operator::Output,
            Operator::Input,
            Operator::LoopOpen,
            Operator::LoopClose,
        ]
    );
}

#[test]
fn test_lex_empty_source() {
    let sf = SourceFile::new("empty.bf", "");
    let result = Lexer::new(&sf).lex();
    assert!(result.tokens.is_empty());
    assert_eq!(result.discarded, 0);
}

#[test]
fn test_lex_agrees_with_normalize() {
    for source in [HELLO_WORLD, "", "  + hello + ", "ü[→]", "a\nb\r\n+"] {
        let sf = SourceFile::new("test.bf", source);
        let result = Lexer::new(&sf).lex();
        assert_eq!(result.normalized(), normalize(source), "source {source:?}");
    }
}

#[test]
fn test_lex_counts_discarded_characters() {
    let sf = SourceFile::new("test.bf", "  + hello + ");
    let result = Lexer::new(&sf).lex();
    assert_eq!(result.tokens.len(), 2);
    assert_eq!(result.discarded, 10);
}

#[test]
fn test_lex_columns_count_characters_not_bytes() {
    let sf = SourceFile::new("test.bf", "éé]");
    let result = Lexer::new(&sf).lex();
    assert_eq!(result.tokens[0].span, Span::point(1, 3));
}

#[test]
fn test_lex_positions_across_lines() {
    let sf = SourceFile::new("hello.bf", HELLO_WORLD);
    let result = Lexer::new(&sf).lex();
    let first = result.tokens.first().unwrap();
    assert_eq!(first.operator, Operator::CellInc);
    assert_eq!(first.span, Span::point(2, 1));
    let last = result.tokens.last().unwrap();
    assert_eq!(last.operator, Operator::Output);
    assert_eq!(last.span.start_line, 3);
}

#[test]
fn test_lex_crlf_resets_column() {
    let sf = SourceFile::new("test.bf", "+\r\n+");
    let result = Lexer::new(&sf).lex();
    assert_eq!(result.tokens[1].span, Span::point(2, 1));
}

#[test]
fn test_for_str_matches_source_file() {
    let sf = SourceFile::new("test.bf", HELLO_WORLD);
    let a = Lexer::new(&sf).lex();
    let b = Lexer::for_str(HELLO_WORLD).lex();
    assert_eq!(a.tokens, b.tokens);
}

#[test]
fn test_lex_determinism_100_iterations() {
    let sf = SourceFile::new("hello.bf", HELLO_WORLD);
    let first = Lexer::new(&sf).lex().tokens;
    for i in 0..100 {
        let tokens = Lexer::new(&sf).lex().tokens;
        assert_eq!(first, tokens, "Determinism failure at iteration {i}");
    }
}
