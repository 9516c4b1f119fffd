// Binder module entry point
// Resolves handler inputs from query string, path segments, and
// structured bodies, honoring declared requiredness

mod body;
mod error;
mod params;
mod record;

pub use body::{form_params, json_body, media_type, FORM_CONTENT_TYPE};
pub use error::BindError;
pub use params::ParamMap;
pub use record::bind_record;
