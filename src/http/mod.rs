//! HTTP protocol layer module
//!
//! Response builders shared by all handlers, decoupled from the
//! binding and dispatch logic.

pub mod response;

pub use response::{
    build_400_response, build_404_response, build_405_response, build_413_response,
    build_415_response, build_html_response, build_options_response, build_text_response,
};
