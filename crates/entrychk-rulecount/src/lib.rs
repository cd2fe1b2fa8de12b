//! # entrychk-rulecount
//!
//! **Tier 1 (Source Measurement)**
//!
//! The Rule 2a / Rule 2b source measurement engine: a lexical state machine
//! over a C source buffer that computes two independent length metrics and
//! flags anomalies (unknown trigraphs, high-bit bytes, NULs, word-buffer
//! overflow, pushback overflow).
//!
//! Rule 2a is the raw byte count of the input. Rule 2b is a weighted token
//! count: whitespace, comments and declaration keywords contribute nothing;
//! identifiers, control-flow keywords, string and character literals
//! contribute one each; punctuation contributes one per byte.
//!
//! ## What belongs here
//! * Byte scanner primitives (trigraph substitution, bounded pushback)
//! * Token classification and the weight table
//! * The `count_source` entry point
//!
//! The engine never fails: an empty source yields zero metrics, anomalies
//! set flags and the scan proceeds. Size thresholds are driver policy, not
//! measurement.

mod classify;
mod scanner;

pub use classify::{classify_word, weight, TokenClass, KEYWORDS_COUNTED, KEYWORDS_IGNORED};
pub use scanner::{trigraph, ByteScanner, PUSHBACK_DEPTH};

use entrychk_types::SourceMetrics;

/// Longest identifier the counter buffers. Longer identifiers set
/// `wordbuf_warning` and are consumed without further buffering.
pub const WORD_BUF_LEN: usize = 256;

/// Rule 2a size threshold. Exceeding it is a driver-level warning, not a
/// measurement error.
pub const RULE_2A_SIZE: u64 = 4096;

/// Rule 2b size threshold.
pub const RULE_2B_SIZE: u64 = 2503;

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Consume a `/* ... */` comment body; the opening `/*` has been read.
/// An unterminated comment runs to EOF.
fn skip_block_comment(scanner: &mut ByteScanner<'_>) {
    let mut prev = 0u8;
    while let Some(b) = scanner.get() {
        if prev == b'*' && b == b'/' {
            return;
        }
        prev = b;
    }
}

/// Consume a `// ...` comment body; the opening `//` has been read.
fn skip_line_comment(scanner: &mut ByteScanner<'_>) {
    while let Some(b) = scanner.get() {
        if b == b'\n' {
            return;
        }
    }
}

/// Consume a string or character literal body up to the unescaped closing
/// quote. An unterminated literal runs to EOF; either way it is one token.
fn skip_quoted(scanner: &mut ByteScanner<'_>, quote: u8) {
    let mut escaped = false;
    while let Some(b) = scanner.get() {
        if escaped {
            escaped = false;
        } else if b == b'\\' {
            escaped = true;
        } else if b == quote {
            return;
        }
    }
}

/// Consume an identifier-shaped word whose first byte has been read.
/// Returns the (possibly truncated) word and whether it overflowed the
/// word buffer.
fn read_word(scanner: &mut ByteScanner<'_>, first: u8) -> (String, bool) {
    let mut word = String::with_capacity(16);
    word.push(first as char);
    let mut overflow = false;
    while let Some(b) = scanner.get() {
        if !is_word(b) {
            scanner.unget(b);
            break;
        }
        if word.len() < WORD_BUF_LEN {
            word.push(b as char);
        } else {
            overflow = true;
        }
    }
    (word, overflow)
}

/// Rule-count a C source. Pure: the input is only read.
///
/// Both metrics of the result are zero for an empty source; that is a
/// valid outcome, not an error.
pub fn count_source(input: &[u8]) -> SourceMetrics {
    let mut scanner = ByteScanner::new(input);
    let mut rule_2b: u64 = 0;
    let mut wordbuf_warning = false;

    while let Some(b) = scanner.get() {
        if is_space(b) {
            continue;
        }
        match b {
            b'/' => match scanner.peek() {
                Some(b'*') => {
                    let _ = scanner.get();
                    skip_block_comment(&mut scanner);
                }
                Some(b'/') => {
                    let _ = scanner.get();
                    skip_line_comment(&mut scanner);
                }
                _ => rule_2b += weight(TokenClass::PunctCounted, 1),
            },
            b'"' => {
                skip_quoted(&mut scanner, b'"');
                rule_2b += weight(TokenClass::StringLit, 1);
            }
            b'\'' => {
                skip_quoted(&mut scanner, b'\'');
                rule_2b += weight(TokenClass::CharLit, 1);
            }
            b'\\' => {
                // Line splice; contributes nothing.
                rule_2b += weight(TokenClass::PunctIgnored, 1);
            }
            _ if is_word(b) => {
                let (word, overflow) = read_word(&mut scanner, b);
                wordbuf_warning |= overflow;
                rule_2b += weight(classify_word(&word), 1);
            }
            _ if b.is_ascii_graphic() => {
                rule_2b += weight(TokenClass::PunctCounted, 1);
            }
            _ => {
                // High-bit bytes, NULs and stray control bytes outside
                // literals each count as one significant byte.
                rule_2b += weight(TokenClass::Other, 1);
            }
        }
    }

    SourceMetrics {
        rule_2a_size: scanner.raw_read(),
        rule_2b_size: rule_2b,
        char_warning: scanner.char_warning,
        nul_warning: scanner.nul_warning,
        trigraph_warning: scanner.trigraph_warning,
        wordbuf_warning,
        ungetc_warning: scanner.ungetc_warning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_yields_zero_metrics() {
        let m = count_source(b"");
        assert_eq!(m.rule_2a_size, 0);
        assert_eq!(m.rule_2b_size, 0);
        assert!(!m.any_warning());
    }

    #[test]
    fn whitespace_only_counts_raw_but_not_weighted() {
        let m = count_source(b" \t\n  \n");
        assert_eq!(m.rule_2a_size, 6);
        assert_eq!(m.rule_2b_size, 0);
    }

    #[test]
    fn single_identifier_and_semicolon() {
        let m = count_source(b"a;");
        assert_eq!(m.rule_2a_size, 2);
        assert_eq!(m.rule_2b_size, 2);
        assert!(!m.any_warning());
    }

    #[test]
    fn recognized_trigraph_counts_one_weighted_unit() {
        let m = count_source(b"??=");
        assert_eq!(m.rule_2a_size, 3);
        assert_eq!(m.rule_2b_size, 1);
        assert!(!m.trigraph_warning);
    }

    #[test]
    fn unknown_trigraph_sets_warning() {
        let m = count_source(b"??z");
        assert!(m.trigraph_warning);
        assert_eq!(m.rule_2a_size, 3);
        // `?`, `?`, `z`: two punctuation bytes plus one identifier.
        assert_eq!(m.rule_2b_size, 3);
    }

    #[test]
    fn comments_contribute_zero_weight() {
        let m = count_source(b"a /* long comment */ b // tail\nc");
        assert_eq!(m.rule_2b_size, 3);
    }

    #[test]
    fn unterminated_block_comment_runs_to_eof() {
        let m = count_source(b"x /* never closed");
        assert_eq!(m.rule_2b_size, 1);
        assert_eq!(m.rule_2a_size, 17);
    }

    #[test]
    fn string_literal_is_one_unit() {
        let m = count_source(b"\"hello /* not a comment */ world\";");
        assert_eq!(m.rule_2b_size, 2);
    }

    #[test]
    fn escaped_quote_does_not_close_string() {
        let m = count_source(br#""a\"b";"#);
        assert_eq!(m.rule_2b_size, 2);
    }

    #[test]
    fn char_literal_is_one_unit() {
        let m = count_source(b"'x';'\\''");
        assert_eq!(m.rule_2b_size, 3);
    }

    #[test]
    fn ignored_keywords_weigh_zero_counted_keywords_one() {
        // static/int ignored; x, ;, return, x, ; counted
        let m = count_source(b"static int x; return x;");
        assert_eq!(m.rule_2b_size, 5);
    }

    #[test]
    fn overlong_identifier_sets_wordbuf_warning() {
        let mut src = vec![b'x'; WORD_BUF_LEN + 10];
        src.push(b';');
        let m = count_source(&src);
        assert!(m.wordbuf_warning);
        assert_eq!(m.rule_2b_size, 2);
        assert_eq!(m.rule_2a_size, (WORD_BUF_LEN + 11) as u64);
    }

    #[test]
    fn line_splice_backslash_weighs_zero() {
        let m = count_source(b"a\\\nb");
        assert_eq!(m.rule_2b_size, 2);
    }

    #[test]
    fn weighted_never_exceeds_raw_without_overflow() {
        let srcs: &[&[u8]] = &[b"int main(void){return 0;}", b"??=include", b"a b c"];
        for src in srcs {
            let m = count_source(src);
            assert!(m.rule_2b_size <= m.rule_2a_size, "{:?}", src);
        }
    }
}
