//! Fixed page content. Every page is a complete `&'static [u8]`; its length
//! is the slice length.

/// Response head plus the style block shared by the main and credits pages.
pub static BEGIN_HTML: &[u8] = concat!(
    "HTTP/1.1 200 OK\r\n",
    "Content-Type: text/html\r\n",
    "Connection: close\r\n\r\n",
    "<!DOCTYPE HTML>\n",
    "<html><head>",
    "<style>\n",
    "body{background-color:linen; text-align: center}",
    "table.center{margin-left:auto;margin-right:auto;}",
    "</style>",
    "</head>",
)
.as_bytes();

/// Main page up to the LED status row.
pub static MAIN_HTML_TOP: &[u8] = concat!(
    "<body>",
    "<img src='http://arduino.cc/en/uploads/Trademark/ArduinoCommunityLogo.png'",
    "style='width:383px;height:162px'>",
    "<br><b>Hello From Arduino!</b><br>\n",
    "<br><br> LED/Digital Pin Control:",
    "<br><br>\n<table class = 'center'>",
)
.as_bytes();

/// Main page after the LED status row.
pub static MAIN_HTML_BOTTOM: &[u8] = concat!(
    "<tr><td><a href='/ON'>Turn LED On</a>",
    "<br></td><td><a href='/OF'>Turn LED Off</a>",
    "<br></td></tr></table><br><a href='/ST'>",
    "Stats</a> <a href='/CR'>Credits</a>",
    "</body></html>",
)
.as_bytes();

pub static CREDITS_HTML: &[u8] = concat!(
    "<body>",
    "<img src='http://arduino.cc/en/uploads/Trademark/ArduinoCommunityLogo.png'",
    "style='width:383px;height:162px'>",
    "<br><b>Credits:</b><br><table class='center'><tr>",
    "<td>RF24Ethernet by </td>",
    "<td><a href='https://github.com/tmrh20'> TMRh20</a></td>",
    "</tr><tr>",
    "<td>uIP by</td>",
    "<td><a href='https://github.com/adamdunkels/uip'> Adam Dunkels</a></td>",
    "</tr><tr>",
    "<td>Based on</td>",
    "<td><a href='https://github.com/ntruchsess/arduino_uip'> UIPEthernet</a></td>",
    "</tr><tr>",
    "<td>Documentation:</td><td> <a href='http://nRF24.github.io/RF24Ethernet/'>github.io</a></td>",
    "</tr><tr>",
    "<td>RF24toTUN creator:</td><td> <a href='https://github.com/reixd/'>Reixd</a></td>",
    "</tr>",
    "</table>",
    "<br>And everybody who contributed to RF24 and RF24Network",
    "<br><br><a href='/'>Home</a>",
    "</body>",
    "</html>",
)
.as_bytes();

pub static HELLO_HTML: &[u8] = concat!(
    "HTTP/1.1 200 OK\r\n",
    "Content-Type: text/html\r\n",
    "Connection: close\r\n\r\n",
    "<!DOCTYPE HTML>",
    "<html>",
    "<body>",
    "<b>Hello From Arduino!</b>",
    "</body>",
    "</html>",
)
.as_bytes();

pub static NOT_FOUND_HTML: &[u8] = concat!(
    "HTTP/1.1 404 Not Found\r\n",
    "Content-Type: text/html\r\n",
    "Connection: close\r\n\r\n",
    "<!DOCTYPE HTML>",
    "<html><body>",
    "<b>Not Found</b><br><br><a href='/'>Home</a>",
    "</body></html>",
)
.as_bytes();

pub static BAD_REQUEST_HTML: &[u8] = concat!(
    "HTTP/1.1 400 Bad Request\r\n",
    "Content-Type: text/html\r\n",
    "Connection: close\r\n\r\n",
    "<!DOCTYPE HTML>",
    "<html><body>",
    "<b>Bad Request</b>",
    "</body></html>",
)
.as_bytes();

pub static METHOD_NOT_ALLOWED_HTML: &[u8] = concat!(
    "HTTP/1.1 405 Method Not Allowed\r\n",
    "Content-Type: text/html\r\n",
    "Allow: GET\r\n",
    "Connection: close\r\n\r\n",
    "<!DOCTYPE HTML>",
    "<html><body>",
    "<b>Method Not Allowed</b>",
    "</body></html>",
)
.as_bytes();

/// Literal pieces of the stats page. The numbers go between them.
pub mod stats {
    pub static HEAD: [&str; 5] = [
        "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n",
        "Connection: close\r\n\r\n<!DOCTYPE HTML>\n<html>\n",
        "<head><style>body{background-color:linen;}\n",
        "td{border: 1px solid black;}</style></head>\n",
        "<body><table><tr><td> Uptime</td><td>\n",
    ];
    pub static UPTIME_END: &str = "</td></tr><tr><td>UIP Buffer Size";
    pub static TAIL: [&str; 2] = ["</td></tr></table><br><br>", "<a href='/'>Home</a></body></html>"];
}
