//! Authentication route handlers
//!
//! Registration, login, logout (refresh-token revocation), and access
//! token refresh.

pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;

pub use login::login;
pub use logout::logout;
pub use refresh::refresh;
pub use register::register;
