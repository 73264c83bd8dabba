//! HTTP infrastructure utilities.
//!
//! This module provides:
//! - Sending provider requests and decoding their JSON responses
//! - Form-urlencoded body encoding

mod request;

pub use request::{FORM_CONTENT_TYPE, encode_form, handle_request};
