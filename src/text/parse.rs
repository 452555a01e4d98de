//! Textual parser: reconstructs a tag tree from command JSON (SNBT) text, as
//! described in spec §4.7. No teacher counterpart exists; grounded directly
//! on `original_source/pymclevel/nbt.py`'s character-driven parser, with the
//! original's "countdown" trick for skipping a typed-array prefix (`B;`,
//! `I;`, `L;`) replaced by a direct two-character lookahead on the
//! `Chars` iterator — same behavior, more idiomatic.

use crate::error::{NBTError, NBTResult};
use crate::tag::{Compound, List, Tag};
use std::iter::Peekable;
use std::str::Chars;

/// A provisional native value: either an in-progress bare token or the
/// (already unescaped) contents of a closed string literal.
struct Pending {
    text: String,
    quoted: bool,
}

enum Container {
    Compound(Compound),
    List(List),
    ByteArray(Vec<i8>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Container {
    fn into_tag(self) -> Tag {
        match self {
            Container::Compound(c) => Tag::Compound(c),
            Container::List(l) => Tag::List(l),
            Container::ByteArray(v) => Tag::ByteArray(v),
            Container::IntArray(v) => Tag::IntArray(v),
            Container::LongArray(v) => Tag::LongArray(v),
        }
    }
}

/// A container on the parser's stack, plus the name it will be inserted
/// under once it closes (empty for the root and for list/array elements).
struct Frame {
    name: String,
    container: Container,
}

/// Parses `input` as command JSON and returns the root compound.
pub fn parse_command_json(input: &str) -> NBTResult<Compound> {
    let mut stack = vec![Frame {
        name: String::new(),
        container: Container::Compound(Compound::new()),
    }];
    let mut name_buf = String::new();
    let mut pending: Option<Pending> = None;
    let mut in_string = false;
    let mut escaped = false;
    let mut opening_brace_seen = false;
    let mut result: Option<Compound> = None;

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if result.is_some() {
            // The root container has already closed; only trailing
            // whitespace is tolerated after it (spec §7: unbalanced
            // brackets/braces are a textual format error).
            if c.is_whitespace() {
                continue;
            }
            return Err(NBTError::UnbalancedContainer);
        }

        if in_string {
            if escaped {
                let resolved = match c {
                    'n' => '\n',
                    other => other,
                };
                push_pending(&mut pending, resolved);
                escaped = false;
            } else {
                match c {
                    '\\' => escaped = true,
                    '"' => in_string = false,
                    other => push_pending(&mut pending, other),
                }
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                pending = Some(Pending {
                    text: String::new(),
                    quoted: true,
                });
            }
            '{' => {
                if !opening_brace_seen {
                    opening_brace_seen = true;
                } else {
                    let frame_name = std::mem::take(&mut name_buf);
                    stack.push(Frame {
                        name: frame_name,
                        container: Container::Compound(Compound::new()),
                    });
                }
            }
            '[' => {
                opening_brace_seen = true;
                let prefix = take_array_prefix(&mut chars);
                let frame_name = std::mem::take(&mut name_buf);
                let container = match prefix {
                    Some('B') => Container::ByteArray(Vec::new()),
                    Some('I') => Container::IntArray(Vec::new()),
                    Some('L') => Container::LongArray(Vec::new()),
                    _ => Container::List(List::new()),
                };
                stack.push(Frame {
                    name: frame_name,
                    container,
                });
            }
            '}' | ']' => {
                finalize_pending(&mut stack, &mut name_buf, &mut pending)?;
                let top = stack.last().ok_or(NBTError::UnbalancedContainer)?;
                if !closes(c, &top.container) {
                    return Err(NBTError::UnbalancedContainer);
                }
                let frame = stack.pop().ok_or(NBTError::UnbalancedContainer)?;
                let tag = frame.container.into_tag();
                match stack.last_mut() {
                    None => {
                        result = Some(match tag {
                            Tag::Compound(c) => c,
                            _ => unreachable!("the seed root frame is always a Compound"),
                        });
                    }
                    Some(top) => {
                        let mut owned_name = frame.name;
                        insert_into_frame(top, &mut owned_name, tag)?;
                    }
                }
            }
            ':' => {
                if let Some(p) = pending.take() {
                    if !name_buf.is_empty() {
                        name_buf.push(':');
                    }
                    name_buf.push_str(&p.text);
                }
            }
            ',' => {
                finalize_pending(&mut stack, &mut name_buf, &mut pending)?;
            }
            other if other.is_whitespace() => {
                // Resolved Open Question: insignificant whitespace between
                // tokens is tolerated and dropped. See DESIGN.md.
            }
            other => {
                opening_brace_seen = true;
                push_pending(&mut pending, other);
            }
        }
    }

    if result.is_none() {
        // Tolerate input with no closing brace on the root by finalizing
        // whatever is left and treating the seed frame as done.
        finalize_pending(&mut stack, &mut name_buf, &mut pending)?;
        if stack.len() == 1 {
            if let Container::Compound(c) = stack.pop().unwrap().container {
                result = Some(c);
            }
        }
    }

    result.ok_or(NBTError::UnterminatedContainer)
}

fn push_pending(pending: &mut Option<Pending>, c: char) {
    pending
        .get_or_insert_with(|| Pending {
            text: String::new(),
            quoted: false,
        })
        .text
        .push(c);
}

/// Whether closing delimiter `c` (`}` or `]`) is the right one for
/// `container`: `}` only closes a `Compound`, `]` only closes a `List` or
/// typed array.
fn closes(c: char, container: &Container) -> bool {
    match container {
        Container::Compound(_) => c == '}',
        Container::List(_)
        | Container::ByteArray(_)
        | Container::IntArray(_)
        | Container::LongArray(_) => c == ']',
    }
}

/// If the next two characters are `B;`, `I;`, or `L;`, consumes them and
/// returns the prefix letter; otherwise leaves the iterator untouched.
fn take_array_prefix(chars: &mut Peekable<Chars<'_>>) -> Option<char> {
    let mut lookahead = chars.clone();
    let first = lookahead.next()?;
    let second = lookahead.next()?;
    if second == ';' && matches!(first, 'B' | 'I' | 'L') {
        chars.next();
        chars.next();
        Some(first)
    } else {
        None
    }
}

fn finalize_pending(
    stack: &mut [Frame],
    name_buf: &mut String,
    pending: &mut Option<Pending>,
) -> NBTResult<()> {
    let Some(p) = pending.take() else {
        return Ok(());
    };
    let tag = classify(p);
    let top = stack.last_mut().ok_or(NBTError::UnbalancedContainer)?;
    insert_into_frame(top, name_buf, tag)
}

fn insert_into_frame(frame: &mut Frame, name_buf: &mut String, tag: Tag) -> NBTResult<()> {
    match &mut frame.container {
        Container::Compound(c) => {
            let name = std::mem::take(name_buf);
            if name.is_empty() {
                return Err(NBTError::MisplacedValue {
                    when: "an unnamed value cannot be inserted into a compound",
                });
            }
            c.insert(name, tag)?;
        }
        Container::List(l) => {
            name_buf.clear();
            l.push(tag)?;
        }
        Container::ByteArray(v) => {
            name_buf.clear();
            let n = tag.as_i64().ok_or(NBTError::MisplacedValue {
                when: "byte array elements must be numeric",
            })?;
            v.push(n as i8);
        }
        Container::IntArray(v) => {
            name_buf.clear();
            let n = tag.as_i64().ok_or(NBTError::MisplacedValue {
                when: "int array elements must be numeric",
            })?;
            v.push(n as i32);
        }
        Container::LongArray(v) => {
            name_buf.clear();
            let n = tag.as_i64().ok_or(NBTError::MisplacedValue {
                when: "long array elements must be numeric",
            })?;
            v.push(n);
        }
    }
    Ok(())
}

fn classify(pending: Pending) -> Tag {
    if pending.quoted {
        return Tag::String(pending.text);
    }
    classify_bare(&pending.text)
}

/// Classifies a bare (unquoted) token by its trailing type-suffix
/// character, falling back to `String` whenever the suffixed or bare
/// numeric parse fails. See spec §4.7 `store_value`.
fn classify_bare(text: &str) -> Tag {
    let rewritten;
    let text = if text.eq_ignore_ascii_case("true") {
        rewritten = "1b".to_string();
        rewritten.as_str()
    } else if text.eq_ignore_ascii_case("false") {
        rewritten = "0b".to_string();
        rewritten.as_str()
    } else {
        text
    };

    if let Some(rest) = strip_suffix_ci(text, 'b') {
        return rest
            .parse::<i8>()
            .map(Tag::Byte)
            .unwrap_or_else(|_| Tag::String(text.to_string()));
    }
    if let Some(rest) = strip_suffix_ci(text, 's') {
        return rest
            .parse::<i16>()
            .map(Tag::Short)
            .unwrap_or_else(|_| Tag::String(text.to_string()));
    }
    if let Some(rest) = strip_suffix_ci(text, 'l') {
        return rest
            .parse::<i64>()
            .map(Tag::Long)
            .unwrap_or_else(|_| Tag::String(text.to_string()));
    }
    if let Some(rest) = strip_suffix_ci(text, 'f') {
        return rest
            .parse::<f32>()
            .map(Tag::Float)
            .unwrap_or_else(|_| Tag::String(text.to_string()));
    }
    if let Some(rest) = strip_suffix_ci(text, 'd') {
        return rest
            .parse::<f64>()
            .map(Tag::Double)
            .unwrap_or_else(|_| Tag::String(text.to_string()));
    }
    if text.contains('.') {
        return text
            .parse::<f64>()
            .map(Tag::Double)
            .unwrap_or_else(|_| Tag::String(text.to_string()));
    }
    text.parse::<i32>()
        .map(Tag::Int)
        .unwrap_or_else(|_| Tag::String(text.to_string()))
}

fn strip_suffix_ci(s: &str, suffix: char) -> Option<&str> {
    let mut chars = s.chars();
    let last = chars.next_back()?;
    if last.eq_ignore_ascii_case(&suffix) {
        Some(chars.as_str())
    } else {
        None
    }
}
