//! HTTP Handlers

mod bill;
mod order;
mod ping;

pub use bill::*;
pub use order::*;
pub use ping::*;
