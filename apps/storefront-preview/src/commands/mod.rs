//! # Preview Commands
//!
//! The operations a storefront front-end invokes, expressed as plain
//! functions over injected state.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! └── cart.rs     ◄─── Cart drawer and line manipulation
//! ```
//!
//! Every command takes the state it needs as arguments and returns
//! `Result<T, ApiError>`, so responses and failures serialize the same way.

pub mod cart;
