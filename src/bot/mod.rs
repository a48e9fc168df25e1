//! Discord bot integration for automated roster and role management.
//!
//! The bot keeps the mirrored role table and employee records in sync with
//! the configured guild in real time. It handles gateway events for role
//! changes and member joins/updates/leaves, and runs a full roster
//! reconciliation when the guild becomes available after startup.
//!
//! The bot is initialized during server startup and runs in a separate tokio
//! task to avoid blocking the HTTP server. Its HTTP client is shared with
//! the scheduler so the periodic roster sync reuses the same connection.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild and role lifecycle events
//! - `GUILD_MEMBERS` - Member join/update/leave events (privileged intent,
//!   must be enabled in the Discord Developer Portal)

pub mod handler;
pub mod start;
