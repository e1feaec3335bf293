pub mod config;
pub mod error;
pub mod scroll;
pub mod speed;
pub mod track;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use scroll::{Playback, ScrollState};
pub use speed::Speed;
pub use track::{TrackLayout, COVER_WIDTH};
