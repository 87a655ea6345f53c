mod client;
mod format;
mod types;

pub use client::NewsClient;
