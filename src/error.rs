use core::fmt::{self, Debug, Display};

#[derive(Debug)]
pub enum PageError<E> {
    /// The client stream failed.
    Io(E),
    /// A formatted fragment did not fit its buffer; nothing of it was sent.
    Overflow,
}

impl<E> From<E> for PageError<E> {
    fn from(e: E) -> Self {
        Self::Io(e)
    }
}

impl<E: Debug> Display for PageError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "client stream failed: {e:?}"),
            Self::Overflow => f.write_str("formatted fragment exceeds its buffer"),
        }
    }
}

impl<E: Debug> std::error::Error for PageError<E> {}

/// Failure while serving one connection.
#[derive(Debug)]
pub enum HandlerError<E, P> {
    Connection(PageError<E>),
    Pin(P),
}

impl<E, P> From<PageError<E>> for HandlerError<E, P> {
    fn from(e: PageError<E>) -> Self {
        Self::Connection(e)
    }
}
