//! card-bot — a minimal card-reply bot.
//!
//! Receives message activities over an HTTP webhook and replies with one of
//! two canned card attachments (Adaptive or Hero) depending on the message
//! text. Everything else — channel routing, card rendering, conversation
//! state — belongs to the connector service the bot talks to.

pub mod activity;
pub mod cards;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod http;
pub mod transport;
