use edge_http::io::Error as EdgeError;
use edge_http::{Method, RequestHeaders};
use embedded_hal::digital::OutputPin;
use embedded_io_async::{Read, Write};

use crate::clock::Clock;
use crate::config::{MAX_HEADERS, UIP_BUFFER_SIZE};
use crate::error::{HandlerError, PageError};
use crate::led::Led;
use crate::pages;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Main,
    LedOn,
    LedOff,
    Stats,
    Credits,
    Hello,
    NotFound,
    MethodNotAllowed,
    BadRequest,
}

impl Route {
    pub fn from_head(method: Method, path: &str) -> Self {
        if method != Method::Get {
            return Route::MethodNotAllowed;
        }
        let path = path.split('?').next().unwrap_or_default();

        match path {
            "" | "/" => Route::Main,
            "/ON" => Route::LedOn,
            "/OF" => Route::LedOff,
            "/ST" => Route::Stats,
            "/CR" => Route::Credits,
            "/hello" => Route::Hello,
            _ => Route::NotFound,
        }
    }
}

/// Receives the request head into `buf` and picks the page. A head that is
/// malformed, incomplete or longer than `buf` maps to `Route::BadRequest`;
/// whatever the client sent past that point is left unread.
pub async fn read_route<R: Read>(input: &mut R, buf: &mut [u8]) -> Result<Route, R::Error> {
    let mut headers = RequestHeaders::<'_, MAX_HEADERS>::new();
    match headers.receive(buf, input, true).await {
        Ok(_) => Ok(Route::from_head(headers.method, headers.path)),
        Err(EdgeError::Io(e)) => Err(e),
        Err(e) => {
            log::debug!("unusable request head: {e:?}");
            Ok(Route::BadRequest)
        }
    }
}

/// Owns the LED and the clock and answers one connection at a time.
pub struct Dispatcher<P, C> {
    led: Led<P>,
    clock: C,
}

impl<P, C> Dispatcher<P, C>
where
    P: OutputPin,
    C: Clock,
{
    pub fn new(led: Led<P>, clock: C) -> Self {
        Self { led, clock }
    }

    pub fn led(&self) -> &Led<P> {
        &self.led
    }

    pub async fn handle<T>(&mut self, conn: &mut T) -> Result<Route, HandlerError<T::Error, P::Error>>
    where
        T: Read + Write,
    {
        let mut buf = [0u8; UIP_BUFFER_SIZE];
        let route = read_route(conn, &mut buf).await.map_err(PageError::Io)?;

        match route {
            Route::Main => pages::main_page(conn, &self.led).await?,
            Route::LedOn | Route::LedOff => {
                self.led
                    .set(route == Route::LedOn)
                    .map_err(HandlerError::Pin)?;
                pages::main_page(conn, &self.led).await?
            }
            Route::Stats => pages::stats_page(conn, &self.clock).await?,
            Route::Credits => pages::credits_page(conn).await?,
            Route::Hello => pages::hello_page(conn).await?,
            Route::NotFound => pages::not_found_page(conn).await?,
            Route::MethodNotAllowed => pages::method_not_allowed_page(conn).await?,
            Route::BadRequest => pages::bad_request_page(conn).await?,
        }
        conn.flush().await.map_err(PageError::Io)?;
        Ok(route)
    }
}
