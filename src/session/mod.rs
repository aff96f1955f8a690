// file: src/session/mod.rs
// description: authenticated session access and the checks that gate an export
// reference: internal module structure

pub mod context;
pub mod host;
pub mod http;
pub mod login;

pub use context::SessionContext;
pub use host::ensure_target_page;
pub use http::HttpSession;
pub use login::{ensure_logged_in, has_login_marker};
