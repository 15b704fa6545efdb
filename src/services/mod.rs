//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the auth decisions and the Auth API conversations so
//! route handlers can stay focused on cookies, forms and redirects.

pub mod gate;
pub mod nav;
pub mod session;
pub mod survey;
