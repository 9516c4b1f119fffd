//! Record route handlers
//!
//! The `@ResponseBody` analogues: bind request data into a flat record
//! (or individual values) and return the bound state as plain text.
//! The two record variants behave differently on purpose - `UserDto`
//! binds from parameters and JSON bodies, `UserVo` binds from nothing
//! and rejects bodies outright.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use super::router::BindContext;
use super::views::display_opt;
use crate::binding::{bind_record, json_body, media_type, BindError};
use crate::http;
use crate::model::{UserDto, UserVo};

type HandlerResult = Result<Response<Full<Bytes>>, BindError>;

fn user_text(ctx: &BindContext<'_>, name: Option<&str>, age: i32) -> Response<Full<Bytes>> {
    http::build_text_response(
        format!("name={}, age={age}", display_opt(name)),
        ctx.is_head,
    )
}

/// Reject any body aimed at a record without field mutators.
fn reject_vo_body(ctx: &BindContext<'_>) -> BindError {
    BindError::UnsupportedMediaType(
        media_type(ctx.content_type).unwrap_or_else(|| "(none)".to_string()),
    )
}

/// `POST /post/res3` - required form fields, text response
pub fn post_res3(ctx: &BindContext<'_>) -> HandlerResult {
    let name = ctx.params.required("name")?;
    let age: i32 = ctx.params.required_as("age")?;
    Ok(user_text(ctx, Some(name), age))
}

/// `POST /post/res4` - required name, optional age, text response
pub fn post_res4(ctx: &BindContext<'_>) -> HandlerResult {
    let name = ctx.params.required("name")?;
    let age: Option<i32> = ctx.params.optional_as("age")?;
    Ok(http::build_text_response(
        format!("name={name}, age={}", display_opt(age)),
        ctx.is_head,
    ))
}

/// `GET /dto/res1` - parameter binding into the accessor record
pub fn dto_res1(ctx: &BindContext<'_>) -> HandlerResult {
    let dto: UserDto = bind_record(&ctx.params)?;
    Ok(user_text(ctx, dto.name.as_deref(), dto.age))
}

/// `POST /dto/res2` - form binding into the accessor record
pub fn dto_res2(ctx: &BindContext<'_>) -> HandlerResult {
    let dto: UserDto = bind_record(&ctx.params)?;
    Ok(user_text(ctx, dto.name.as_deref(), dto.age))
}

/// `POST /dto/res3` - JSON body binding; form bodies are a 415
pub fn dto_res3(ctx: &BindContext<'_>) -> HandlerResult {
    let dto: UserDto = json_body(ctx.content_type, ctx.body)?;
    Ok(user_text(ctx, dto.name.as_deref(), dto.age))
}

/// `GET /vo/res1` - parameter binding cannot populate the record
pub fn vo_res1(ctx: &BindContext<'_>) -> HandlerResult {
    let vo: UserVo = bind_record(&ctx.params)?;
    Ok(user_text(ctx, vo.name(), vo.age()))
}

/// `POST /vo/res2` - same, from a form body
pub fn vo_res2(ctx: &BindContext<'_>) -> HandlerResult {
    let vo: UserVo = bind_record(&ctx.params)?;
    Ok(user_text(ctx, vo.name(), vo.age()))
}

/// `POST /vo/res3` - body binding into the mutator-less record: 415
pub fn vo_res3(ctx: &BindContext<'_>) -> HandlerResult {
    Err(reject_vo_body(ctx))
}

/// `GET /axios/res1` - required query parameters
pub fn axios_res1(ctx: &BindContext<'_>) -> HandlerResult {
    let name = ctx.params.required("name")?;
    let age: i32 = ctx.params.required_as("age")?;
    Ok(user_text(ctx, Some(name), age))
}

/// `GET /axios/res2` - parameter binding into the accessor record
pub fn axios_res2(ctx: &BindContext<'_>) -> HandlerResult {
    let dto: UserDto = bind_record(&ctx.params)?;
    Ok(user_text(ctx, dto.name.as_deref(), dto.age))
}

/// `POST /axios/res3` - requires parameters; a JSON client putting
/// them in the body gets a 400 because no parameter carries them
pub fn axios_res3(ctx: &BindContext<'_>) -> HandlerResult {
    let name = ctx.params.required("name")?;
    let age: i32 = ctx.params.required_as("age")?;
    Ok(user_text(ctx, Some(name), age))
}

/// `POST /axios/res4` - parameter binding; a JSON body contributes no
/// parameters, so the record stays at its defaults
pub fn axios_res4(ctx: &BindContext<'_>) -> HandlerResult {
    let dto: UserDto = bind_record(&ctx.params)?;
    Ok(user_text(ctx, dto.name.as_deref(), dto.age))
}

/// `POST /axios/res5` - JSON body binding into the accessor record
pub fn axios_res5(ctx: &BindContext<'_>) -> HandlerResult {
    let dto: UserDto = json_body(ctx.content_type, ctx.body)?;
    Ok(user_text(ctx, dto.name.as_deref(), dto.age))
}

/// `GET /axios/vo/res1` - required query parameters
pub fn axios_vo_res1(ctx: &BindContext<'_>) -> HandlerResult {
    let name = ctx.params.required("name")?;
    let age: i32 = ctx.params.required_as("age")?;
    Ok(user_text(ctx, Some(name), age))
}

/// `GET /axios/vo/res2` - parameter binding into the mutator-less record
pub fn axios_vo_res2(ctx: &BindContext<'_>) -> HandlerResult {
    let vo: UserVo = bind_record(&ctx.params)?;
    Ok(user_text(ctx, vo.name(), vo.age()))
}

/// `POST /axios/vo/res3` - required parameters, body-only clients get 400
pub fn axios_vo_res3(ctx: &BindContext<'_>) -> HandlerResult {
    let name = ctx.params.required("name")?;
    let age = ctx.params.required("age")?;
    Ok(http::build_text_response(
        format!("name={name}, age={age}"),
        ctx.is_head,
    ))
}

/// `POST /axios/vo/res4` - parameter binding, always defaults
pub fn axios_vo_res4(ctx: &BindContext<'_>) -> HandlerResult {
    let vo: UserVo = bind_record(&ctx.params)?;
    Ok(user_text(ctx, vo.name(), vo.age()))
}

/// `POST /axios/vo/res5` - body binding into the mutator-less record: 415
pub fn axios_vo_res5(ctx: &BindContext<'_>) -> HandlerResult {
    Err(reject_vo_body(ctx))
}
