use crate::tag::TagKind;
use std::fmt;
use std::io;

/// Everything that can go wrong reading, writing, or re-parsing an NBT tree.
///
/// Binary-format failures and textual-format failures share one enum (rather
/// than two), because both are surfaced to a caller the same way: the
/// current codec call is aborted and no partial tree is returned.
#[derive(Debug)]
pub enum NBTError {
    /// Wrapped IO failure (truncated reader, broken pipe on write, ...).
    Io(io::Error),
    /// A string payload was not valid UTF-8.
    InvalidUtf8,

    /// The first byte of a buffer wasn't `TAG_Compound` (10).
    ExpectedRootCompound { found: u8 },
    /// A tag-id byte outside 0..=12 was read from a Compound or List header.
    UnknownTagId(u8),
    /// A length prefix (string, list, array) claims more bytes than remain.
    LengthExceedsBuffer { wanted: usize, remaining: usize },
    /// A `TAG_List` length prefix decoded as negative.
    NegativeListLength(i32),

    /// A List was asked to hold a tag of the wrong kind for its declared
    /// element kind.
    ListKindMismatch { expected: TagKind, found: TagKind },
    /// A Compound insertion was attempted with an empty name.
    EmptyCompoundName,

    /// The textual parser found an unmatched `}` or `]`.
    UnbalancedContainer,
    /// The textual parser reached end of input with containers still open.
    UnterminatedContainer,
    /// A finalized tag could not be placed into its parent container (e.g.
    /// an unnamed value offered to a Compound, or a value offered to a
    /// typed array that isn't itself a plain number).
    MisplacedValue { when: &'static str },

    /// `gunzip` was handed a buffer with no gzip header. Recoverable: callers
    /// that don't know in advance whether their buffer is compressed should
    /// use `try_gunzip` instead, which treats this as "use the bytes as-is".
    NotGzipped,
}

pub type NBTResult<T> = Result<T, NBTError>;

pub(crate) fn digest_io<T>(r: Result<T, io::Error>) -> NBTResult<T> {
    r.map_err(NBTError::Io)
}

impl fmt::Display for NBTError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NBTError::Io(e) => write!(f, "I/O error: {e}"),
            NBTError::InvalidUtf8 => write!(f, "string payload was not valid UTF-8"),
            NBTError::ExpectedRootCompound { found } => write!(
                f,
                "expected a TAG_Compound (10) as the root tag, found tag id {found:#04x}"
            ),
            NBTError::UnknownTagId(id) => write!(f, "unknown tag id {id}"),
            NBTError::LengthExceedsBuffer { wanted, remaining } => write!(
                f,
                "length prefix asked for {wanted} bytes but only {remaining} remain"
            ),
            NBTError::NegativeListLength(len) => {
                write!(f, "list length prefix was negative: {len}")
            }
            NBTError::ListKindMismatch { expected, found } => write!(
                f,
                "list declared element kind {expected} but was given a {found}"
            ),
            NBTError::EmptyCompoundName => {
                write!(f, "compound child tags must have a non-empty name")
            }
            NBTError::UnbalancedContainer => write!(f, "unmatched '}}' or ']' in textual input"),
            NBTError::UnterminatedContainer => {
                write!(f, "textual input ended with containers still open")
            }
            NBTError::MisplacedValue { when } => write!(f, "value could not be inserted: {when}"),
            NBTError::NotGzipped => write!(f, "buffer has no gzip header"),
        }
    }
}

impl std::error::Error for NBTError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NBTError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for NBTError {
    fn from(value: io::Error) -> Self {
        NBTError::Io(value)
    }
}