//! User-facing surfaces. The only one is the interactive console menu.

pub mod console;
