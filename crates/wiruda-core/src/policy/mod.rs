//! Access policy - pure allow/deny decisions over the caller's profile
//!
//! Every mutation of protected state goes through one of these checks. They
//! perform no I/O; the caller's profile is resolved once per request and
//! passed in explicitly.

mod access;

pub use access::{
    can_manage, can_react, ensure_can_manage, ensure_can_react, is_admin, is_approved,
    require_approved_status, require_role, Denial,
};
