use winnow::combinator::{alt, cut_err, eof, opt, peek, repeat, terminated};
use winnow::error::{StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{any, rest, take_while};

// -- Whitespace & comments --------------------------------------------------

fn blanks(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_whitespace())
        .void()
        .parse_next(input)
}

// Only a `#` opening the line starts a comment; later ones belong to paths.
fn comment(input: &mut &str) -> ModalResult<()> {
    ('#', rest).void().parse_next(input)
}

// -- Fields -----------------------------------------------------------------

fn next_char(input: &mut &str) -> ModalResult<char> {
    any.parse_next(input)
}

// A closing quote must be followed by whitespace or the end of the line.
fn field_end(input: &mut &str) -> ModalResult<()> {
    peek(alt((
        eof.void(),
        any.verify(|c: &char| c.is_whitespace()).void(),
    )))
    .parse_next(input)
}

fn quoted(input: &mut &str) -> ModalResult<String> {
    '"'.parse_next(input)?;
    let mut s = String::new();
    loop {
        let ch = cut_err(next_char)
            .context(StrContext::Label("quoted field"))
            .context(StrContext::Expected(StrContextValue::CharLiteral('"')))
            .parse_next(input)?;
        match ch {
            '"' => {
                cut_err(field_end)
                    .context(StrContext::Label("quoted field"))
                    .context(StrContext::Expected(StrContextValue::Description(
                        "whitespace after closing quote",
                    )))
                    .parse_next(input)?;
                return Ok(s);
            }
            '\\' => {
                let esc = cut_err(next_char)
                    .context(StrContext::Label("escape"))
                    .parse_next(input)?;
                match esc {
                    '"' | '\\' => s.push(esc),
                    other => {
                        s.push('\\');
                        s.push(other);
                    }
                }
            }
            c => s.push(c),
        }
    }
}

fn bare(input: &mut &str) -> ModalResult<String> {
    take_while(1.., |c: char| !c.is_whitespace())
        .map(str::to_owned)
        .parse_next(input)
}

fn field(input: &mut &str) -> ModalResult<String> {
    alt((quoted, bare)).parse_next(input)
}

// -- Lines ------------------------------------------------------------------

/// Split one line into fields. Blank and comment lines yield no fields.
pub fn record(input: &mut &str) -> ModalResult<Vec<String>> {
    blanks.parse_next(input)?;
    if opt(comment).parse_next(input)?.is_some() {
        return Ok(Vec::new());
    }
    repeat(0.., terminated(field, blanks)).parse_next(input)
}
