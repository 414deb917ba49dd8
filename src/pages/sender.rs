use core::fmt::{self, Write as _};

use embedded_io_async::Write;

use crate::config::OUTPUT_BUFFER_SIZE;
use crate::error::PageError;

/// Copies `page` to the client in order, at most `OUTPUT_BUFFER_SIZE` bytes
/// per write. An empty page writes nothing.
pub async fn send_page<W>(out: &mut W, page: &[u8]) -> Result<(), W::Error>
where
    W: Write,
{
    for chunk in page.chunks(OUTPUT_BUFFER_SIZE) {
        out.write_all(chunk).await?;
    }
    Ok(())
}

/// Formats `args` into an `N` byte buffer and sends it. Fails with
/// `PageError::Overflow` without writing anything if the text does not fit.
pub async fn send_formatted<W, const N: usize>(
    out: &mut W,
    args: fmt::Arguments<'_>,
) -> Result<(), PageError<W::Error>>
where
    W: Write,
{
    let mut buf = heapless::String::<N>::new();
    buf.write_fmt(args).map_err(|_| PageError::Overflow)?;
    out.write_all(buf.as_bytes()).await?;
    Ok(())
}
