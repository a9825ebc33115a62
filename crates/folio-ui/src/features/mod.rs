//! Page features: DOM-free state next to wasm-only views.

pub mod contact;
pub mod projects;

#[cfg(target_arch = "wasm32")]
pub(crate) mod about;
#[cfg(target_arch = "wasm32")]
pub(crate) mod home;
