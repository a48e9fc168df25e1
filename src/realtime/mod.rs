//! Realtime fan-out over websockets.
//!
//! A process-local broadcast hub rebroadcasts entity create/update/delete
//! events to every connected socket and user-targeted notifications to the
//! sockets owned by the target user. Sockets authenticate with the same
//! session cookie as the REST API.

pub mod hub;
pub mod socket;
