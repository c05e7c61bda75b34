//! Captured computation faults.
//!
//! A [`Fault`] is the payload of a [`Try::Failure`](super::Try::Failure)
//! variant: a typed error or a panic payload caught at a capture boundary,
//! together with its rendered message. Downstream combinators operate on the
//! captured value by ordinary pattern matching; no live unwinding crosses a
//! `Try` combinator except through [`Fault::rethrow`].

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::panic;

/// The error produced when a filtering predicate rejects a value.
///
/// # Examples
///
/// ```rust
/// use fnkit::types::Try;
///
/// let rejected = Try::Success(5).filter(|x| *x > 10);
/// assert!(rejected.is_failure());
/// assert_eq!(rejected.fold(|_| String::new(), |f| f.message().to_string()), "no such element");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NoSuchElement;

impl fmt::Display for NoSuchElement {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("no such element")
    }
}

impl Error for NoSuchElement {}

/// A message-only error used by [`Fault::msg`].
#[derive(Clone, PartialEq, Eq, Debug)]
struct Message(String);

impl fmt::Display for Message {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl Error for Message {}

/// A panic payload normalized to its string form.
///
/// `catch_unwind` yields a `Box<dyn Any + Send>`, which is not `Sync`;
/// keeping it would poison every container holding a fault. The standard
/// payload types (`&'static str` from `panic!("...")` and `String` from
/// `panic!("{..}")`) are extracted instead, so faults stay `Send + Sync`
/// and re-raising preserves the payload text.
enum PanicPayload {
    Static(&'static str),
    Owned(String),
    Opaque,
}

enum FaultSource {
    Error(Box<dyn Error + Send + Sync>),
    Panic(PanicPayload),
}

/// An error captured at a fault boundary.
///
/// A fault wraps either a typed error value or the payload of a caught
/// panic, and records the message it rendered at capture time. Faults are
/// produced by [`Try::capture`](super::Try::capture) and by the `Try`
/// combinators when a user-supplied callback unwinds.
///
/// # Equality
///
/// Two faults are equal when their rendered messages are equal; hashing is
/// consistent with that. The original error is retained so that typed
/// recovery ([`Fault::downcast`]) and re-raising ([`Fault::rethrow`]) keep
/// working after comparison.
///
/// # Examples
///
/// ```rust
/// use fnkit::types::{Fault, NoSuchElement};
///
/// let fault = Fault::new(NoSuchElement);
/// assert_eq!(fault.message(), "no such element");
/// assert!(fault.is::<NoSuchElement>());
/// ```
pub struct Fault {
    message: String,
    source: FaultSource,
}

impl Fault {
    /// Wraps a typed error into a fault.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Fault;
    /// use std::num::ParseIntError;
    ///
    /// let error: ParseIntError = "abc".parse::<i32>().unwrap_err();
    /// let fault = Fault::new(error);
    /// assert!(fault.is::<ParseIntError>());
    /// ```
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        let message = error.to_string();
        Self {
            message,
            source: FaultSource::Error(Box::new(error)),
        }
    }

    /// Creates a fault carrying only a message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::Fault;
    ///
    /// let fault = Fault::msg("division by zero");
    /// assert_eq!(fault.message(), "division by zero");
    /// ```
    pub fn msg(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            source: FaultSource::Error(Box::new(Message(message.clone()))),
            message,
        }
    }

    /// Normalizes a caught panic payload into a fault.
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<&'static str>() {
            Ok(text) => PanicPayload::Static(*text),
            Err(payload) => match payload.downcast::<String>() {
                Ok(text) => PanicPayload::Owned(*text),
                Err(_) => PanicPayload::Opaque,
            },
        };
        let message = match &payload {
            PanicPayload::Static(text) => (*text).to_string(),
            PanicPayload::Owned(text) => text.clone(),
            PanicPayload::Opaque => "opaque panic payload".to_string(),
        };
        Self {
            message,
            source: FaultSource::Panic(payload),
        }
    }

    /// Returns the message rendered when the fault was captured.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if the captured payload is an error of type `E`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::{Fault, NoSuchElement};
    ///
    /// let fault = Fault::new(NoSuchElement);
    /// assert!(fault.is::<NoSuchElement>());
    /// assert!(!fault.is::<std::num::ParseIntError>());
    /// ```
    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.downcast_ref::<E>().is_some()
    }

    /// Returns a reference to the captured error if it has type `E`.
    ///
    /// Panic-sourced faults carry no typed error and never match.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        match &self.source {
            FaultSource::Error(error) => error.downcast_ref::<E>(),
            FaultSource::Panic(_) => None,
        }
    }

    /// Extracts the captured error if it has type `E`, returning the fault
    /// unchanged otherwise.
    ///
    /// # Errors
    ///
    /// Returns `Err(self)` when the payload is not an `E`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::types::{Fault, NoSuchElement};
    ///
    /// let fault = Fault::new(NoSuchElement);
    /// assert_eq!(fault.downcast::<NoSuchElement>(), Ok(NoSuchElement));
    /// ```
    pub fn downcast<E>(self) -> core::result::Result<E, Self>
    where
        E: Error + 'static,
    {
        match self.source {
            FaultSource::Error(error) => match error.downcast::<E>() {
                Ok(boxed) => Ok(*boxed),
                Err(error) => Err(Self {
                    message: self.message,
                    source: FaultSource::Error(error),
                }),
            },
            FaultSource::Panic(payload) => Err(Self {
                message: self.message,
                source: FaultSource::Panic(payload),
            }),
        }
    }

    /// Re-raises the captured fault.
    ///
    /// A panic-sourced fault resumes an unwind carrying the original
    /// payload text; an error-sourced fault starts a new unwind carrying
    /// the error's message.
    ///
    /// # Panics
    ///
    /// Always.
    pub fn rethrow(self) -> ! {
        match self.source {
            FaultSource::Panic(PanicPayload::Static(text)) => panic::resume_unwind(Box::new(text)),
            FaultSource::Panic(PanicPayload::Owned(text)) => panic::resume_unwind(Box::new(text)),
            FaultSource::Panic(PanicPayload::Opaque) => panic::resume_unwind(Box::new(self.message)),
            FaultSource::Error(error) => panic::panic_any(error.to_string()),
        }
    }
}

impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl Eq for Fault {}

impl Hash for Fault {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.message.hash(state);
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let origin = match &self.source {
            FaultSource::Error(_) => "error",
            FaultSource::Panic(_) => "panic",
        };
        formatter
            .debug_struct("Fault")
            .field("message", &self.message)
            .field("origin", &origin)
            .finish()
    }
}

impl<E> From<E> for Fault
where
    E: Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}
