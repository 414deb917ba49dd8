pub mod sender;
pub mod store;

use embedded_io_async::Write;

use crate::clock::{Clock, Uptime};
use crate::config::{OUTPUT_BUFFER_SIZE, STATS_FRAGMENT_SIZE, UIP_BUFFER_SIZE};
use crate::error::PageError;
use crate::led::LedStatus;

pub use sender::{send_formatted, send_page};

pub async fn main_page<W, L>(out: &mut W, led: &L) -> Result<(), PageError<W::Error>>
where
    W: Write,
    L: LedStatus + ?Sized,
{
    send_page(out, store::BEGIN_HTML).await?;
    send_page(out, store::MAIN_HTML_TOP).await?;

    if led.is_on() {
        send_formatted::<_, OUTPUT_BUFFER_SIZE>(
            out,
            format_args!("<tr><td> </td><td bgcolor={}>\n", "darkseagreen 1"),
        )
        .await?;
        send_formatted::<_, OUTPUT_BUFFER_SIZE>(out, format_args!("LED is {}</td></tr>\n", "ON"))
            .await?;
    } else {
        send_formatted::<_, OUTPUT_BUFFER_SIZE>(
            out,
            format_args!("<tr><td bgcolor={}>\n", "lightpink"),
        )
        .await?;
        send_formatted::<_, OUTPUT_BUFFER_SIZE>(out, format_args!("LED is {}</td></tr>\n", "OFF"))
            .await?;
    }

    send_page(out, store::MAIN_HTML_BOTTOM).await?;
    Ok(())
}

pub async fn credits_page<W: Write>(out: &mut W) -> Result<(), PageError<W::Error>> {
    send_page(out, store::BEGIN_HTML).await?;
    send_page(out, store::CREDITS_HTML).await?;
    Ok(())
}

/// Uptime and buffer sizes. Every fragment, literal or formatted, goes through
/// a `STATS_FRAGMENT_SIZE` buffer.
pub async fn stats_page<W, C>(out: &mut W, clock: &C) -> Result<(), PageError<W::Error>>
where
    W: Write,
    C: Clock + ?Sized,
{
    let uptime = Uptime::from_millis(clock.now_millis());

    for literal in store::stats::HEAD {
        send_formatted::<_, STATS_FRAGMENT_SIZE>(out, format_args!("{literal}")).await?;
    }
    send_formatted::<_, STATS_FRAGMENT_SIZE>(out, format_args!("{uptime}")).await?;
    send_formatted::<_, STATS_FRAGMENT_SIZE>(out, format_args!("{}", store::stats::UPTIME_END))
        .await?;
    send_formatted::<_, STATS_FRAGMENT_SIZE>(
        out,
        format_args!("</td><td>{UIP_BUFFER_SIZE} bytes</td></tr><tr><td>User "),
    )
    .await?;
    send_formatted::<_, STATS_FRAGMENT_SIZE>(
        out,
        format_args!("Output<br>Buffer Size</td><td>{OUTPUT_BUFFER_SIZE} bytes"),
    )
    .await?;
    for literal in store::stats::TAIL {
        send_formatted::<_, STATS_FRAGMENT_SIZE>(out, format_args!("{literal}")).await?;
    }
    Ok(())
}

pub async fn hello_page<W: Write>(out: &mut W) -> Result<(), PageError<W::Error>> {
    send_page(out, store::HELLO_HTML).await?;
    Ok(())
}

pub async fn not_found_page<W: Write>(out: &mut W) -> Result<(), PageError<W::Error>> {
    send_page(out, store::NOT_FOUND_HTML).await?;
    Ok(())
}

pub async fn bad_request_page<W: Write>(out: &mut W) -> Result<(), PageError<W::Error>> {
    send_page(out, store::BAD_REQUEST_HTML).await?;
    Ok(())
}

pub async fn method_not_allowed_page<W: Write>(out: &mut W) -> Result<(), PageError<W::Error>> {
    send_page(out, store::METHOD_NOT_ALLOWED_HTML).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use futures_lite::future::block_on;

    use super::*;
    use crate::testing::{split_response, Closed, Sink};

    const LED_OFF: &str = "<tr><td bgcolor=lightpink>\nLED is OFF</td></tr>\n";
    const LED_ON: &str = "<tr><td> </td><td bgcolor=darkseagreen 1>\nLED is ON</td></tr>\n";

    struct FixedClock(u64);

    impl Clock for FixedClock {
        fn now_millis(&self) -> u64 {
            self.0
        }
    }

    fn render_main(on: bool) -> String {
        let mut sink = Sink::default();
        block_on(main_page(&mut sink, &on)).unwrap();
        sink.text().to_owned()
    }

    #[test]
    fn main_page_shows_exactly_one_led_status() {
        let off = render_main(false);
        assert_eq!(off.matches(LED_OFF).count(), 1);
        assert!(!off.contains(LED_ON));

        let on = render_main(true);
        assert_eq!(on.matches(LED_ON).count(), 1);
        assert!(!on.contains(LED_OFF));
    }

    #[test]
    fn main_page_is_a_complete_response() {
        let page = render_main(false);
        let (code, body) = split_response(&page);
        assert_eq!(code, 200);
        assert!(body.starts_with("<!DOCTYPE HTML>"));
        assert!(body.ends_with("</body></html>"));
        assert!(body.contains("<a href='/ON'>Turn LED On</a>"));
    }

    #[test]
    fn credits_page_is_static() {
        let mut first = Sink::default();
        let mut second = Sink::default();
        block_on(credits_page(&mut first)).unwrap();
        block_on(credits_page(&mut second)).unwrap();
        assert_eq!(first.bytes(), second.bytes());

        let (code, body) = split_response(first.text());
        assert_eq!(code, 200);
        assert!(body.contains("<b>Credits:</b>"));
        assert!(body.ends_with("</html>"));
    }

    #[test]
    fn hello_page_is_static() {
        let mut first = Sink::default();
        let mut second = Sink::default();
        block_on(hello_page(&mut first)).unwrap();
        block_on(hello_page(&mut second)).unwrap();
        assert_eq!(first.bytes(), second.bytes());
        assert_eq!(first.bytes(), store::HELLO_HTML);

        let (code, body) = split_response(first.text());
        assert_eq!(code, 200);
        assert!(body.contains("<b>Hello From Arduino!</b>"));
    }

    #[test]
    fn stats_page_reports_uptime_and_buffers() {
        let mut sink = Sink::default();
        block_on(stats_page(&mut sink, &FixedClock(90_061_000))).unwrap();

        let (code, body) = split_response(sink.text());
        assert_eq!(code, 200);
        assert!(body.contains("1 days, 1 hours 1 minutes 1 seconds"));
        assert!(body.contains(&format!("UIP Buffer Size</td><td>{UIP_BUFFER_SIZE} bytes")));
        assert!(body.contains(&format!("Buffer Size</td><td>{OUTPUT_BUFFER_SIZE} bytes")));
        assert!(body.ends_with("<a href='/'>Home</a></body></html>"));
        assert!(sink.largest_write() <= STATS_FRAGMENT_SIZE);
    }

    #[test]
    fn stats_page_fits_a_long_uptime() {
        let mut sink = Sink::default();
        block_on(stats_page(&mut sink, &FixedClock(u64::from(u32::MAX) * 1000))).unwrap();
        assert!(sink.text().contains("49710 days, 6 hours 28 minutes 15 seconds"));
    }

    #[test]
    fn error_pages_carry_their_status() {
        let mut sink = Sink::default();
        block_on(not_found_page(&mut sink)).unwrap();
        assert_eq!(split_response(sink.text()).0, 404);

        let mut sink = Sink::default();
        block_on(method_not_allowed_page(&mut sink)).unwrap();
        assert_eq!(split_response(sink.text()).0, 405);

        let mut sink = Sink::default();
        block_on(bad_request_page(&mut sink)).unwrap();
        assert_eq!(split_response(sink.text()).0, 400);
    }

    #[test]
    fn stream_errors_propagate() {
        let res = block_on(main_page(&mut Closed, &true));
        assert!(matches!(res, Err(PageError::Io(_))));
        let res = block_on(stats_page(&mut Closed, &FixedClock(0)));
        assert!(matches!(res, Err(PageError::Io(_))));
    }
}
