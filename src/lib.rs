//! Hoist - push TOML-declared environment values up to GitHub Actions secrets.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── sync          # The sync flow (plan, upsert, prune)
//! │   ├── output        # Styled terminal output helpers
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── repo          # Target repository resolution from git remotes
//!     ├── config        # TOML table loading
//!     ├── value         # TOML value -> secret string normalization
//!     ├── filter        # Key filtering and prefixing
//!     ├── store         # SecretStore trait + gh CLI backend
//!     └── sync          # Upsert/prune engine over an injected store
//! ```
//!
//! # Features
//!
//! - Repository auto-detection from the git origin remote
//! - Regex include/exclude filters and key prefixing
//! - Environment-scoped secrets
//! - Dry-run mode that never mutates the remote store
//! - Optional pruning of remote secrets missing from the local table

pub mod cli;
pub mod core;
pub mod error;
