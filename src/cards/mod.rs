//! Card attachments — the two canned cards the bot can reply with.

pub mod assets;
pub mod model;

pub use assets::CardAssets;
pub use model::{CardAction, CardAttachment, CardImage, HeroCard};
