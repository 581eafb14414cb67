//! Single-pass scanner for `{{#if field}}...{{/if}}` blocks and `{{field}}` placeholders

use super::values::{is_space, is_word_char};

const OPEN_PREFIX: &str = "{{#if";
pub(crate) const CLOSE: &str = "{{/if}}";

/// A well-formed `{{#if field}}` token found in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OpenToken<'a> {
    pub start: usize,
    pub end: usize,
    pub field: &'a str,
}

/// Piece of scanned input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    /// Literal text starting at byte `offset`
    Text { offset: usize, text: &'a str },
    /// A conditional block with its delimiters stripped
    Block { field: &'a str, body: &'a str },
}

/// Parse an opening token at the very start of `s`.
/// Shape: `{{#if`, at least one whitespace char, at least one word char, `}}`.
fn parse_open(s: &str) -> Option<(&str, usize)> {
    let rest = s.strip_prefix(OPEN_PREFIX)?;
    let after_ws = rest.trim_start_matches(is_space);
    if after_ws.len() == rest.len() {
        return None;
    }
    let word_len = after_ws
        .find(|c: char| !is_word_char(c))
        .unwrap_or(after_ws.len());
    if word_len == 0 {
        return None;
    }
    let tail = &after_ws[word_len..];
    if !tail.starts_with("}}") {
        return None;
    }
    Some((&after_ws[..word_len], s.len() - tail.len() + 2))
}

/// Find the first well-formed opening token at or after byte `from`
pub(crate) fn find_open(s: &str, from: usize) -> Option<OpenToken<'_>> {
    let mut pos = from;
    while let Some(rel) = s[pos..].find(OPEN_PREFIX) {
        let start = pos + rel;
        if let Some((field, len)) = parse_open(&s[start..]) {
            return Some(OpenToken {
                start,
                end: start + len,
                field,
            });
        }
        pos = start + 1;
    }
    None
}

/// Split `input` into literal text and conditional blocks.
///
/// Each block is closed by the first `{{/if}}` after its opening token. An
/// opening token without any later close leaves the remaining input literal.
pub(crate) fn segments(input: &str) -> Segments<'_> {
    Segments {
        input,
        pos: 0,
        queued: None,
    }
}

pub(crate) struct Segments<'a> {
    input: &'a str,
    pos: usize,
    queued: Option<Segment<'a>>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        if let Some(segment) = self.queued.take() {
            return Some(segment);
        }
        if self.pos >= self.input.len() {
            return None;
        }

        let text_start = self.pos;
        let input = self.input;
        let block = find_open(input, text_start)
            .and_then(|open| input[open.end..].find(CLOSE).map(|rel| (open, open.end + rel)));

        match block {
            Some((open, close)) => {
                self.pos = close + CLOSE.len();
                let block = Segment::Block {
                    field: open.field,
                    body: &input[open.end..close],
                };
                if open.start > text_start {
                    self.queued = Some(block);
                    Some(Segment::Text {
                        offset: text_start,
                        text: &input[text_start..open.start],
                    })
                } else {
                    Some(block)
                }
            }
            None => {
                self.pos = input.len();
                Some(Segment::Text {
                    offset: text_start,
                    text: &input[text_start..],
                })
            }
        }
    }
}

/// Field ids of every `{{field}}` placeholder in `s`, in order of appearance
pub(crate) fn placeholders(s: &str) -> impl Iterator<Item = &str> + '_ {
    let mut pos = 0;
    std::iter::from_fn(move || {
        while let Some(rel) = s[pos..].find("{{") {
            let start = pos + rel + 2;
            let word_len = s[start..]
                .find(|c: char| !is_word_char(c))
                .unwrap_or(s.len() - start);
            // Resume one byte later so `{{{name}}` still yields `name`
            pos = start - 1;
            if word_len > 0 && s[start + word_len..].starts_with("}}") {
                pos = start + word_len + 2;
                return Some(&s[start..start + word_len]);
            }
        }
        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<Segment<'_>> {
        segments(input).collect()
    }

    mod open_tokens {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_parses_simple_open() {
            let open = find_open("a {{#if name}} b", 0).unwrap();
            assert_eq!(open.field, "name");
            assert_eq!(open.start, 2);
            assert_eq!(open.end, 14);
        }

        #[test]
        fn test_allows_several_whitespace_chars() {
            let open = find_open("{{#if \t\n name}}", 0).unwrap();
            assert_eq!(open.field, "name");
        }

        #[test]
        fn test_bom_counts_as_whitespace_but_next_line_does_not() {
            let open = find_open("{{#if\u{feff}name}}", 0).unwrap();
            assert_eq!(open.field, "name");
            assert!(find_open("{{#if\u{85}name}}", 0).is_none());
        }

        #[test]
        fn test_requires_whitespace_after_if() {
            assert!(find_open("{{#ifname}}", 0).is_none());
        }

        #[test]
        fn test_rejects_non_word_field() {
            assert!(find_open("{{#if price-point}}", 0).is_none());
            assert!(find_open("{{#if }}", 0).is_none());
        }

        #[test]
        fn test_rejects_space_before_braces() {
            assert!(find_open("{{#if name }}", 0).is_none());
        }

        #[test]
        fn test_skips_malformed_and_finds_next() {
            let open = find_open("{{#if bad-id}} {{#if good}}", 0).unwrap();
            assert_eq!(open.field, "good");
        }
    }

    mod segmenting {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_plain_text_is_single_segment() {
            assert_eq!(
                collect("no blocks here"),
                vec![Segment::Text {
                    offset: 0,
                    text: "no blocks here"
                }]
            );
        }

        #[test]
        fn test_empty_input_has_no_segments() {
            assert!(collect("").is_empty());
        }

        #[test]
        fn test_text_block_text() {
            assert_eq!(
                collect("a{{#if x}}b{{/if}}c"),
                vec![
                    Segment::Text { offset: 0, text: "a" },
                    Segment::Block {
                        field: "x",
                        body: "b"
                    },
                    Segment::Text {
                        offset: 18,
                        text: "c"
                    },
                ]
            );
        }

        #[test]
        fn test_block_at_start_and_empty_body() {
            assert_eq!(
                collect("{{#if x}}{{/if}}"),
                vec![Segment::Block { field: "x", body: "" }]
            );
        }

        #[test]
        fn test_body_spans_lines() {
            assert_eq!(
                collect("{{#if x}}\nline one\nline two\n{{/if}}"),
                vec![Segment::Block {
                    field: "x",
                    body: "\nline one\nline two\n"
                }]
            );
        }

        #[test]
        fn test_first_close_ends_block() {
            assert_eq!(
                collect("{{#if a}}x{{#if b}}y{{/if}}z{{/if}}"),
                vec![
                    Segment::Block {
                        field: "a",
                        body: "x{{#if b}}y"
                    },
                    Segment::Text {
                        offset: 27,
                        text: "z{{/if}}"
                    },
                ]
            );
        }

        #[test]
        fn test_unclosed_block_is_literal() {
            assert_eq!(
                collect("a {{#if x}} b"),
                vec![Segment::Text {
                    offset: 0,
                    text: "a {{#if x}} b"
                }]
            );
        }

        #[test]
        fn test_consecutive_blocks() {
            let segments = collect("{{#if a}}1{{/if}}{{#if b}}2{{/if}}");
            assert_eq!(
                segments,
                vec![
                    Segment::Block { field: "a", body: "1" },
                    Segment::Block { field: "b", body: "2" },
                ]
            );
        }
    }

    mod placeholder_scan {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_finds_placeholders_in_order() {
            let found: Vec<&str> = placeholders("{{a}} and {{b}} and {{a}}").collect();
            assert_eq!(found, vec!["a", "b", "a"]);
        }

        #[test]
        fn test_ignores_block_tokens() {
            let found: Vec<&str> = placeholders("{{#if a}}{{b}}{{/if}}").collect();
            assert_eq!(found, vec!["b"]);
        }

        #[test]
        fn test_triple_brace() {
            let found: Vec<&str> = placeholders("{{{name}}}").collect();
            assert_eq!(found, vec!["name"]);
        }

        #[test]
        fn test_unterminated() {
            let found: Vec<&str> = placeholders("{{name} {{").collect();
            assert!(found.is_empty());
        }
    }
}
