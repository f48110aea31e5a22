//! Failure descriptions
//!
//! A [`Failure`] records *what* went wrong during a check, with every operand
//! already rendered to text. Turning it into a human readable line is the job
//! of [`Failure::render`], which is the only place fallback messages are
//! produced. Both the no-message and the with-message paths go through it.
//!
//! # Example
//!
//! ```rust
//! use expectant::failure::{Failure, Operand};
//!
//! let failure = Failure::NotEqual {
//!     expected: Operand::of(&1),
//!     actual: Operand::of(&2),
//! };
//! assert_eq!(failure.to_string(), "expected:<1> but was:<2>");
//! ```

use std::fmt;

/// Characters of shared context kept on each side of a text difference.
const MAX_CONTEXT_LENGTH: usize = 20;
const ELLIPSIS: &str = "...";
const DELTA_START: &str = "[";
const DELTA_END: &str = "]";

/// A rendered operand: its type name and its `Debug` rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand {
    /// Short type name, e.g. `String` or `Option<i32>`.
    pub type_name: String,
    /// The value's `Debug` rendering.
    pub rendered: String,
}

impl Operand {
    /// Render a value.
    pub fn of<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Operand {
            type_name: short_type_name::<T>(),
            rendered: format!("{:?}", value),
        }
    }

    fn qualified(&self) -> String {
        format!("{}<{}>", self.type_name, self.rendered)
    }
}

/// What a failed check observed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Failure {
    /// A boolean condition did not have the expected value.
    Condition {
        /// The value the condition should have had.
        expected: bool,
    },
    /// Two operands were expected to be equal but were not.
    NotEqual {
        /// The expected operand.
        expected: Operand,
        /// The actual operand.
        actual: Operand,
    },
    /// Two texts were expected to be equal but were not.
    TextMismatch {
        /// The expected text.
        expected: String,
        /// The actual text.
        actual: String,
    },
    /// Two operands were expected to differ but were equal.
    Equal {
        /// Rendering of the actual operand.
        actual: String,
    },
    /// Two references were expected to point at the same value.
    NotSame {
        /// Rendering of the expected reference.
        expected: String,
        /// Rendering of the actual reference.
        actual: String,
    },
    /// Two references were expected to point at different values.
    Same,
    /// A value was expected to be absent.
    NotNull {
        /// Rendering of the present value.
        actual: String,
    },
    /// A value was expected to be present.
    Null,
    /// A predicate failed with a free-form description.
    Described(String),
    /// An element of a sequence failed a broadcast check.
    Element {
        /// Position of the first failing element.
        index: usize,
        /// Why that element failed.
        failure: Box<Failure>,
    },
    /// An action was expected to fail but succeeded.
    NothingRaised {
        /// Name of the expected error kind.
        expected: String,
    },
    /// An action failed with a different error kind than expected.
    UnexpectedKind {
        /// Name of the expected error kind.
        expected: String,
        /// Rendering of the error that was raised instead.
        actual: String,
    },
}

impl Failure {
    /// Shorthand for [`Failure::Described`].
    pub fn described(description: impl Into<String>) -> Self {
        Failure::Described(description.into())
    }

    /// Whether a caller message is prefixed to this failure's description.
    ///
    /// Failures that render operands keep their description next to the
    /// caller's message; descriptive failures are replaced by it.
    pub fn keeps_description(&self) -> bool {
        matches!(
            self,
            Failure::NotEqual { .. }
                | Failure::TextMismatch { .. }
                | Failure::Equal { .. }
                | Failure::NotSame { .. }
                | Failure::Same
                | Failure::NotNull { .. }
        )
    }

    /// Write this failure, optionally combined with a caller message.
    pub fn render(&self, message: Option<&str>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = message.filter(|m| !m.is_empty());

        if let Some(m) = message {
            if !self.keeps_description() {
                return f.write_str(m);
            }
            if let Failure::Equal { actual } = self {
                return write!(f, "{}. Actual: {}", m, actual);
            }
            write!(f, "{} ", m)?;
        }

        match self {
            Failure::Condition { expected } => {
                write!(f, "expected condition to be {}", expected)
            }
            Failure::NotEqual { expected, actual } => {
                if expected.rendered == actual.rendered {
                    write!(
                        f,
                        "expected: {} but was: {}",
                        expected.qualified(),
                        actual.qualified()
                    )
                } else {
                    write!(
                        f,
                        "expected:<{}> but was:<{}>",
                        expected.rendered, actual.rendered
                    )
                }
            }
            Failure::TextMismatch { expected, actual } => {
                let (expected, actual) = compact(expected, actual);
                write!(f, "expected:<{}> but was:<{}>", expected, actual)
            }
            Failure::Equal { actual } => {
                write!(f, "Values should be different. Actual: {}", actual)
            }
            Failure::NotSame { expected, actual } => {
                write!(f, "expected same:<{}> was not:<{}>", expected, actual)
            }
            Failure::Same => f.write_str("expected not same"),
            Failure::NotNull { actual } => write!(f, "expected null, but was:<{}>", actual),
            Failure::Null => f.write_str("expected a value, but was:<None>"),
            Failure::Described(description) => f.write_str(description),
            Failure::Element { index, failure } => write!(f, "element [{}]: {}", index, failure),
            Failure::NothingRaised { expected } => write!(
                f,
                "Expected {} to be raised, but nothing was raised",
                expected
            ),
            Failure::UnexpectedKind { expected, actual } => write!(
                f,
                "Unexpected error kind raised; expected:<{}> but was:<{}>",
                expected, actual
            ),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(None, f)
    }
}

/// Collapse the common prefix and suffix of two differing texts.
///
/// The differing region is wrapped in `[` `]`, and at most
/// [`MAX_CONTEXT_LENGTH`] characters of shared context survive on each side.
fn compact(expected: &str, actual: &str) -> (String, String) {
    if expected == actual {
        return (expected.to_string(), actual.to_string());
    }

    let expected: Vec<char> = expected.chars().collect();
    let actual: Vec<char> = actual.chars().collect();

    let prefix = expected
        .iter()
        .zip(&actual)
        .take_while(|(e, a)| e == a)
        .count();
    let suffix = expected
        .iter()
        .rev()
        .zip(actual.iter().rev())
        .take(expected.len().min(actual.len()) - prefix)
        .take_while(|(e, a)| e == a)
        .count();

    let mut head = String::new();
    if prefix > MAX_CONTEXT_LENGTH {
        head.push_str(ELLIPSIS);
    }
    head.extend(&expected[prefix.saturating_sub(MAX_CONTEXT_LENGTH)..prefix]);

    let tail_start = expected.len() - suffix;
    let mut tail: String = expected[tail_start..(tail_start + MAX_CONTEXT_LENGTH).min(expected.len())]
        .iter()
        .collect();
    if suffix > MAX_CONTEXT_LENGTH {
        tail.push_str(ELLIPSIS);
    }

    let delta = |chars: &[char]| -> String {
        let body: String = chars[prefix..chars.len() - suffix].iter().collect();
        format!("{}{}{}{}{}", head, DELTA_START, body, DELTA_END, tail)
    };

    (delta(&expected), delta(&actual))
}

/// The type name of `T` with every module path stripped.
///
/// `core::option::Option<alloc::string::String>` becomes `Option<String>`.
pub fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut segment_start = 0;
    let mut chars = full.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            out.truncate(segment_start);
        } else {
            out.push(c);
            if !(c.is_alphanumeric() || c == '_') {
                segment_start = out.len();
            }
        }
    }

    out
}
