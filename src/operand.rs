//! Operand capabilities
//!
//! The checks in this crate work over a handful of small capabilities rather
//! than concrete types. Each capability answers exactly one question about a
//! value:
//!
//! - [`Nullable`]: is the value absent?
//! - [`Measurable`]: is the value empty?
//! - [`Textual`]: is the value blank text?
//! - [`Validatable`]: is the value valid?
//!
//! # Example
//!
//! ```rust
//! use expectant::operand::{Measurable, Nullable, Textual};
//!
//! assert!(None::<i32>.is_null());
//! assert!(Vec::<u8>::new().is_empty());
//! assert!(" \t\n".is_blank());
//! assert!(None::<String>.is_blank());
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// A value that may be absent.
///
/// `Option::None` is the crate's notion of null.
pub trait Nullable {
    /// Returns `true` if the value is absent.
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<N: Nullable + ?Sized> Nullable for &N {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

/// A value with a notion of size.
///
/// An absent value (`None`) counts as empty.
pub trait Measurable {
    /// Returns `true` if the value holds no elements.
    fn is_empty(&self) -> bool;
}

impl Measurable for str {
    #[inline]
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl Measurable for String {
    #[inline]
    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }
}

impl<T> Measurable for [T] {
    #[inline]
    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }
}

impl<T, const N: usize> Measurable for [T; N] {
    #[inline]
    fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<T> Measurable for Vec<T> {
    #[inline]
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl<T> Measurable for VecDeque<T> {
    #[inline]
    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}

impl<K, V, S> Measurable for HashMap<K, V, S> {
    #[inline]
    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }
}

impl<T, S> Measurable for HashSet<T, S> {
    #[inline]
    fn is_empty(&self) -> bool {
        HashSet::is_empty(self)
    }
}

impl<K, V> Measurable for BTreeMap<K, V> {
    #[inline]
    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }
}

impl<T> Measurable for BTreeSet<T> {
    #[inline]
    fn is_empty(&self) -> bool {
        BTreeSet::is_empty(self)
    }
}

impl<M: Measurable> Measurable for Option<M> {
    #[inline]
    fn is_empty(&self) -> bool {
        self.as_ref().is_none_or(Measurable::is_empty)
    }
}

impl<M: Measurable + ?Sized> Measurable for &M {
    #[inline]
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

/// A value that can be inspected as text.
///
/// Text is blank when it has zero length or contains only whitespace.
/// An absent value (`None`) counts as blank.
pub trait Textual {
    /// Returns `true` if the text is empty or whitespace only.
    fn is_blank(&self) -> bool;
}

impl Textual for str {
    #[inline]
    fn is_blank(&self) -> bool {
        self.chars().all(char::is_whitespace)
    }
}

impl Textual for String {
    #[inline]
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

impl Textual for Cow<'_, str> {
    #[inline]
    fn is_blank(&self) -> bool {
        self.as_ref().is_blank()
    }
}

impl<S: Textual> Textual for Option<S> {
    #[inline]
    fn is_blank(&self) -> bool {
        self.as_ref().is_none_or(Textual::is_blank)
    }
}

impl<S: Textual + ?Sized> Textual for &S {
    #[inline]
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

/// A value that can report whether its state is valid.
///
/// Implement this directly for simple types. A [`Model`](crate::model::Model)
/// gets it from its `validate` hook through the
/// [`validatable!`](crate::validatable) macro.
///
/// References, `Box`, `Rc` and `Arc` forward to the value they point at, so
/// `Vec<&V>` and `Vec<Box<dyn Model>>` can be checked element by element.
///
/// # Example
///
/// ```rust
/// use expectant::operand::Validatable;
///
/// struct Port(u16);
///
/// impl Validatable for Port {
///     fn is_valid(&self) -> bool {
///         self.0 != 0
///     }
/// }
///
/// assert!(Port(8080).is_valid());
/// assert!(!Port(0).is_valid());
/// ```
pub trait Validatable {
    /// Returns `true` if the value is in a valid state.
    fn is_valid(&self) -> bool;
}

impl<V: Validatable + ?Sized> Validatable for &V {
    #[inline]
    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }
}

impl<V: Validatable + ?Sized> Validatable for &mut V {
    #[inline]
    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }
}

impl<V: Validatable + ?Sized> Validatable for Box<V> {
    #[inline]
    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }
}

impl<V: Validatable + ?Sized> Validatable for Rc<V> {
    #[inline]
    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }
}

impl<V: Validatable + ?Sized> Validatable for Arc<V> {
    #[inline]
    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }
}
