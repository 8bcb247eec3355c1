//! Deterministic source formatter for generated TSX/TS files.
//!
//! Output style: two-space indentation by nesting depth, single-quoted string
//! literals in statements, no trailing semicolons, at most one blank line in a
//! row, and exactly one trailing newline. Formatting is idempotent.
//!
//! Lines are classified as statements (imports, exports, declarations,
//! closing brackets) or JSX markup. In markup only `{}` count as brackets,
//! since JSX reads them as expression delimiters; anything unbalanced is
//! rejected rather than emitted as broken source.
//!
//! [`check_syntax`] then runs the formatted file through `oxc_parser`.

use std::sync::LazyLock;

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;
use regex::Regex;

const INDENT: &str = "  ";

static STATEMENT_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:import|export|const|let|var|return|type|interface|function)\b|[)}\]])")
        .expect("Invalid regex")
});

static TRAILING_SEMICOLONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*;+$").expect("Invalid regex"));

static DOUBLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"'\\\n]*)""#).expect("Invalid regex"));

/// Errors reported when generated text is not well-formed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Unbalanced bracket on line {line}")]
    Unbalanced { line: usize },

    #[error("Mismatched bracket on line {line}: expected '{expected}', found '{found}'")]
    Mismatched {
        line: usize,
        expected: char,
        found: char,
    },

    #[error("Unclosed or stray JSX tag on line {line}")]
    UnclosedTag { line: usize },

    #[error("HTML comment on line {line} is not valid JSX")]
    HtmlComment { line: usize },

    #[error("Markup declaration on line {line} is not valid JSX")]
    Declaration { line: usize },

    #[error("Unescaped '>' in JSX text on line {line}")]
    TextGreaterThan { line: usize },

    #[error("Syntax error: {message}")]
    Syntax { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Statement,
    Markup,
}

/// Tag being scanned across one or more lines.
#[derive(Debug, Clone, Copy)]
struct OpenTag {
    closing: bool,
    line: usize,
    /// Bracket depth when the tag opened; `>` inside `{}` does not close it.
    depth: usize,
}

#[derive(Debug, Default)]
struct Scanner {
    brackets: Vec<(char, usize)>,
    jsx_depth: usize,
    tag: Option<OpenTag>,
    attr_quote: Option<char>,
    /// Bracket depths of `{}` expression containers open in JSX children.
    expressions: Vec<usize>,
}

impl Scanner {
    fn depth(&self) -> usize {
        self.brackets.len() + self.jsx_depth
    }

    fn open(&mut self, c: char, line: usize) {
        self.brackets.push((c, line));
    }

    fn close(&mut self, c: char, line: usize) -> Result<(), FormatError> {
        let expected = match c {
            ')' => '(',
            ']' => '[',
            _ => '{',
        };
        let popped = self.brackets.pop();
        while self
            .expressions
            .last()
            .is_some_and(|&depth| depth > self.brackets.len())
        {
            self.expressions.pop();
        }
        match popped {
            Some((open, _)) if open == expected => Ok(()),
            Some((open, _)) => Err(FormatError::Mismatched {
                line,
                expected: closing_for(open),
                found: c,
            }),
            None => Err(FormatError::Unbalanced { line }),
        }
    }

    fn scan_statement(&mut self, text: &str, line: usize) -> Result<(), FormatError> {
        let mut quote: Option<char> = None;
        let mut chars = text.chars();

        while let Some(c) = chars.next() {
            if let Some(q) = quote {
                if c == '\\' {
                    chars.next();
                } else if c == q {
                    quote = None;
                }
                continue;
            }
            match c {
                '\'' | '"' | '`' => quote = Some(c),
                '(' | '[' | '{' => self.open(c, line),
                ')' | ']' | '}' => self.close(c, line)?,
                _ => {}
            }
        }

        Ok(())
    }

    fn scan_markup(&mut self, text: &str, line: usize) -> Result<(), FormatError> {
        let chars: Vec<char> = text.chars().collect();
        let mut last_in_tag: Option<char> = None;

        for (i, &c) in chars.iter().enumerate() {
            if let Some(q) = self.attr_quote {
                if c == q {
                    self.attr_quote = None;
                }
                continue;
            }

            let next = chars.get(i + 1).copied();

            if let Some(tag) = self.tag {
                match c {
                    '"' | '\'' => self.attr_quote = Some(c),
                    '{' => self.open(c, line),
                    '}' => self.close(c, line)?,
                    '>' if self.brackets.len() == tag.depth => {
                        if tag.closing {
                            self.jsx_depth = self
                                .jsx_depth
                                .checked_sub(1)
                                .ok_or(FormatError::UnclosedTag { line })?;
                        } else if last_in_tag != Some('/') {
                            self.jsx_depth += 1;
                        }
                        self.tag = None;
                    }
                    _ => {}
                }
                if !c.is_whitespace() {
                    last_in_tag = Some(c);
                }
                continue;
            }

            match c {
                '<' if text[char_offset(&chars, i)..].starts_with("<!--") => {
                    return Err(FormatError::HtmlComment { line });
                }
                '<' if next == Some('!') => {
                    return Err(FormatError::Declaration { line });
                }
                '<' if next == Some('/') => {
                    self.tag = Some(OpenTag {
                        closing: true,
                        line,
                        depth: self.brackets.len(),
                    });
                    last_in_tag = None;
                }
                '<' if next.is_some_and(char::is_alphabetic) => {
                    self.tag = Some(OpenTag {
                        closing: false,
                        line,
                        depth: self.brackets.len(),
                    });
                    last_in_tag = None;
                }
                '>' if self.jsx_depth > 0 && self.expressions.is_empty() => {
                    return Err(FormatError::TextGreaterThan { line });
                }
                '{' => {
                    self.open(c, line);
                    self.expressions.push(self.brackets.len());
                }
                '}' => self.close(c, line)?,
                _ => {}
            }
        }

        Ok(())
    }

    fn finish(&self, last_line: usize) -> Result<(), FormatError> {
        if let Some((_, line)) = self.brackets.first() {
            return Err(FormatError::Unbalanced { line: *line });
        }
        if let Some(tag) = self.tag {
            return Err(FormatError::UnclosedTag { line: tag.line });
        }
        if self.jsx_depth != 0 || self.attr_quote.is_some() {
            return Err(FormatError::UnclosedTag { line: last_line });
        }
        Ok(())
    }
}

fn closing_for(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

fn char_offset(chars: &[char], index: usize) -> usize {
    chars[..index].iter().map(|c| c.len_utf8()).sum()
}

fn classify(trimmed: &str) -> LineKind {
    if STATEMENT_START.is_match(trimmed) {
        LineKind::Statement
    } else {
        LineKind::Markup
    }
}

fn rewrite_statement(trimmed: &str) -> String {
    let quoted = DOUBLE_QUOTED.replace_all(trimmed, "'$1'");
    TRAILING_SEMICOLONS.replace(&quoted, "").into_owned()
}

/// Format generated source text.
pub fn format_source(source: &str) -> Result<String, FormatError> {
    let mut scanner = Scanner::default();
    let mut lines: Vec<String> = Vec::new();
    let mut line_count = 0;

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        line_count = line;
        let raw = raw.trim_end();

        // Continuation of a multi-line attribute value stays as written.
        if scanner.attr_quote.is_some() {
            lines.push(raw.to_string());
            scanner.scan_markup(raw, line)?;
            continue;
        }

        let trimmed = raw.trim_start();
        if trimmed.is_empty() {
            lines.push(String::new());
            continue;
        }

        let kind = if scanner.tag.is_some() {
            LineKind::Markup
        } else {
            classify(trimmed)
        };

        let mut level = scanner.depth();
        if scanner.tag.is_some() {
            level += 1;
        }
        let dedent = match kind {
            LineKind::Statement => trimmed.starts_with([')', '}', ']']),
            LineKind::Markup => trimmed.starts_with("</") || trimmed.starts_with('}'),
        };
        if dedent {
            level = level.saturating_sub(1);
        }

        let text = match kind {
            LineKind::Statement => {
                scanner.scan_statement(trimmed, line)?;
                rewrite_statement(trimmed)
            }
            LineKind::Markup => {
                scanner.scan_markup(trimmed, line)?;
                trimmed.to_string()
            }
        };

        lines.push(format!("{}{}", INDENT.repeat(level), text));
    }

    scanner.finish(line_count)?;

    Ok(join_lines(lines))
}

/// Parse `source` and report the first syntax error.
pub fn check_syntax(source: &str, source_type: SourceType) -> Result<(), FormatError> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, source_type).parse();

    if let Some(error) = ret.errors.first() {
        return Err(FormatError::Syntax {
            message: error.to_string(),
        });
    }
    if ret.panicked {
        return Err(FormatError::Syntax {
            message: "parser stopped before the end of the file".to_string(),
        });
    }

    Ok(())
}

/// Collapse blank runs, drop leading/trailing blanks, end with one newline.
fn join_lines(lines: Vec<String>) -> String {
    let mut out = String::new();
    let mut pending_blank = false;

    for line in lines {
        if line.is_empty() {
            pending_blank = !out.is_empty();
            continue;
        }
        if pending_blank {
            out.push('\n');
            pending_blank = false;
        }
        out.push_str(&line);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const COMPONENT: &str = r#"
    import { IconProps } from "../icon/type";
    import Icon from "../icon";


    const Home: React.FC<IconProps> = (props) => {
      return (
        <Icon {...props}>
          <svg viewBox="0 0 24 24" width="1em" height="1em" fill="currentColor"><path d="M1 1"/></svg>
        </Icon>
       );
    };
    export default Home;
    "#;

    #[test]
    fn formats_component() {
        let out = format_source(COMPONENT).unwrap();
        assert_eq!(
            out,
            r#"import { IconProps } from '../icon/type'
import Icon from '../icon'

const Home: React.FC<IconProps> = (props) => {
  return (
    <Icon {...props}>
      <svg viewBox="0 0 24 24" width="1em" height="1em" fill="currentColor"><path d="M1 1"/></svg>
    </Icon>
  )
}
export default Home
"#
        );
    }

    #[test]
    fn formatting_is_idempotent() {
        let once = format_source(COMPONENT).unwrap();
        let twice = format_source(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn indents_multi_line_markup() {
        let source = "return (\n<svg>\n<g>\n<path d=\"M0\n  0\"/>\n</g>\n</svg>\n)\n";
        let out = format_source(source).unwrap();
        assert_eq!(
            out,
            "return (\n  <svg>\n    <g>\n      <path d=\"M0\n  0\"/>\n    </g>\n  </svg>\n)\n"
        );
    }

    #[test]
    fn keeps_double_quotes_around_apostrophes() {
        let out = format_source("export { default as Its } from \"./it's\";").unwrap();
        assert_eq!(out, "export { default as Its } from \"./it's\"\n");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(format_source("").unwrap(), "");
        assert_eq!(format_source("\n\n  \n").unwrap(), "");
    }

    #[test]
    fn rejects_unbalanced_braces_in_markup() {
        let source = "const A = () => (\n<svg><style>.a{fill:red</style></svg>\n)\n";
        assert!(format_source(source).is_err());
    }

    #[test]
    fn rejects_mismatched_brackets() {
        let err = format_source("const a = (1]\n").unwrap_err();
        assert_eq!(
            err,
            FormatError::Mismatched {
                line: 1,
                expected: ')',
                found: ']'
            }
        );
    }

    #[test]
    fn rejects_stray_closing_tag() {
        let err = format_source("return (\n</svg>\n)\n").unwrap_err();
        assert_eq!(err, FormatError::UnclosedTag { line: 2 });
    }

    #[test]
    fn rejects_html_comments_in_markup() {
        let err = format_source("<svg><!-- x --></svg>\n").unwrap_err();
        assert_eq!(err, FormatError::HtmlComment { line: 1 });
    }

    #[test]
    fn rejects_cdata_sections() {
        let source = "return (\n<svg><style><![CDATA[ .a{fill:red} ]]></style></svg>\n)\n";
        let err = format_source(source).unwrap_err();
        assert_eq!(err, FormatError::Declaration { line: 2 });
    }

    #[test]
    fn rejects_greater_than_in_text() {
        let source = "return (\n<svg><text>a > b</text></svg>\n)\n";
        let err = format_source(source).unwrap_err();
        assert_eq!(err, FormatError::TextGreaterThan { line: 2 });
    }

    #[test]
    fn greater_than_inside_expressions_is_allowed() {
        let source = "return (\n<svg>{a > b}</svg>\n)\n";
        assert!(format_source(source).is_ok());
    }

    #[test]
    fn component_passes_syntax_check() {
        let out = format_source(COMPONENT).unwrap();
        assert_eq!(check_syntax(&out, SourceType::tsx()), Ok(()));
    }

    #[test]
    fn syntax_check_rejects_css_in_children() {
        let source = "const A = () => (\n  <svg><style>.a { fill: none; }</style></svg>\n)\n";
        let err = check_syntax(source, SourceType::tsx()).unwrap_err();
        assert!(matches!(err, FormatError::Syntax { .. }));
    }

    #[test]
    fn syntax_check_accepts_barrel() {
        let source = "export { default as Home } from './home'\nexport {}\n";
        assert_eq!(check_syntax(source, SourceType::ts()), Ok(()));
    }

    #[test]
    fn apostrophes_in_text_are_not_quotes() {
        let source = "return (\n<svg><title>Don't</title></svg>\n)\n";
        assert_eq!(
            format_source(source).unwrap(),
            "return (\n  <svg><title>Don't</title></svg>\n)\n"
        );
    }
}
