//! User route group re-exported by the top-level routing module.

mod list;

pub(crate) use list::UsersPage;
