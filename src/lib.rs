pub mod clock;
pub mod config;
pub mod error;
pub mod led;
pub mod pages;
pub mod routes;
pub mod server;

#[cfg(test)]
mod testing;
