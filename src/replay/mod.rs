//! Replay logs: the literal text format, the byte codec, playback and
//! on-disk storage.
//!
//! ## Usage
//!
//! ```rust
//! use word_battle::replay::{ReplayHeader, ReplayLog};
//!
//! let log = ReplayLog::new(ReplayHeader::new(1, 5));
//! let bytes = log.encode();
//! assert_eq!(ReplayLog::decode(&bytes).unwrap(), log);
//! ```

pub mod codec;
pub mod literal;
pub mod log;
pub mod store;

pub use codec::{decode, encode};
pub use literal::Literal;
pub use log::{Frame, ReplayHeader, ReplayLog, ZERO_DURATION};
pub use store::{replay_title, StoreError};
