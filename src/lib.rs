//! drivepost - Upload and delete Google Drive files with PIN-unlocked credentials.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── session       # Fetch, unlock, authenticate
//! │   ├── upload        # Upload + notify
//! │   ├── delete        # Delete by ID or link
//! │   ├── seal          # Produce an encrypted bundle
//! │   └── completions   # Shell completions
//! └── core/             # Library components
//!     ├── bundle        # PBKDF2 + AES-256-GCM secrets bundle
//!     ├── reference     # Drive ID / link normalization
//!     ├── config        # Layered settings
//!     ├── remote        # Remote bundle and chat ID fetch
//!     ├── drive/        # Drive v3 client and service-account auth
//!     ├── notify        # Telegram notifications
//!     └── format        # Sizes, links, timestamps
//! ```
//!
//! Credentials are never stored locally. Each run fetches a hex-framed
//! `salt || nonce || ciphertext` bundle, derives a key from the operator's
//! PIN, and decrypts it in memory.

pub mod cli;
pub mod core;
pub mod error;
