//! Tributary Core Types and Definitions
//!
//! This crate provides the foundational types shared by every Tributary
//! crate. It includes:
//!
//! - **Diagram**: The normalized graph description handed to the layout
//!   library ([`diagram::Node`], [`diagram::Link`], [`diagram::Diagram`])
//! - **Colors**: CSS color handling and the ordinal category scale
//!   ([`color::Color`], [`color::ColorScale`])
//! - **Formatting**: Display formatting of flow values ([`format`] module)
//! - **Error codes**: Codes shared by all diagnostics ([`error_code::ErrorCode`])

pub mod color;
pub mod diagram;
pub mod error_code;
pub mod format;
