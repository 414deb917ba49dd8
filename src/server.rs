use edge_nal::{Close, TcpAccept, TcpBind, TcpShutdown};
use embassy_time::{with_timeout, Duration};
use embedded_hal::digital::OutputPin;
use embedded_io_async::Read;

use crate::clock::Clock;
use crate::config::{ServerConfig, DRAIN_TIMEOUT_SECS};
use crate::led::LedStatus;
use crate::routes::Dispatcher;

/// Accepts connections forever, serving each to completion before taking the
/// next one. After a response the write side is shut down and the client's
/// leftovers are read away, so the close never turns into a reset that would
/// cut off the page.
pub async fn run<P, C>(
    config: &ServerConfig,
    stack: &edge_nal_std::Stack,
    dispatcher: &mut Dispatcher<P, C>,
) -> Result<(), anyhow::Error>
where
    P: OutputPin,
    C: Clock,
{
    let addr = config.addr;

    log::info!("Running HTTP server on {addr}");

    let acceptor = stack
        .bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {addr}: {e:?}"))?;

    loop {
        let (peer, mut socket) = match acceptor.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                log::warn!("accept failed: {e:?}");
                continue;
            }
        };

        match dispatcher.handle(&mut socket).await {
            Ok(route) => log::info!(
                "{peer}: {route:?}, LED {}",
                if dispatcher.led().is_on() { "on" } else { "off" }
            ),
            Err(e) => log::warn!("{peer}: {e:?}"),
        }

        if let Err(e) = socket.close(Close::Write).await {
            log::debug!("{peer}: shutdown failed: {e:?}");
            continue;
        }
        match with_timeout(Duration::from_secs(DRAIN_TIMEOUT_SECS), drain(&mut socket)).await {
            Ok(Ok(n)) if n > 0 => log::debug!("{peer}: discarded {n} unread bytes"),
            Ok(Ok(_)) => (),
            Ok(Err(e)) => log::debug!("{peer}: drain failed: {e:?}"),
            Err(_) => log::debug!("{peer}: client kept the connection open, dropping it"),
        }
    }
}

/// Reads and discards until end of stream. Returns the number of bytes
/// thrown away.
pub async fn drain<R: Read>(input: &mut R) -> Result<usize, R::Error> {
    let mut scratch = [0u8; 128];
    let mut total = 0;
    loop {
        match input.read(&mut scratch).await? {
            0 => return Ok(total),
            n => total += n,
        }
    }
}
