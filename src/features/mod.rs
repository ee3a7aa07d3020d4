//! Domain-level frontend features and their shared logic. Routes import these
//! modules to keep view code focused on markup while API handling and state
//! transitions live in dedicated feature areas.

pub(crate) mod users;
