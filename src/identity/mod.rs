//! Identity and session management for the client core.
//! Keep the public surface thin and split implementation across sub-modules.

mod claims;
mod session;
mod user;

pub use claims::{decode_user, ROLE_CLAIM};
pub use session::{SessionStore, SubscriberId, TOKEN_KEY, USER_KEY};
pub use user::{LocalUser, Role, UserPatch, UserStatus};
