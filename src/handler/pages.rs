//! View route handlers
//!
//! Routes that bind individual query/path/form values and render them
//! back as an HTML page. Each handler declares its inputs against the
//! request parameters or captured path segments; binding failures
//! bubble up to the dispatcher as error responses.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use super::router::BindContext;
use super::views;
use crate::binding::BindError;
use crate::http;
use crate::model::Person;

type HandlerResult = Result<Response<Full<Bytes>>, BindError>;

fn result_page(ctx: &BindContext<'_>, values: &[(&str, String)]) -> Response<Full<Bytes>> {
    http::build_html_response(views::render_result_page(values), ctx.is_head)
}

/// `GET /` - index page listing the demo endpoints
pub fn index(ctx: &BindContext<'_>) -> HandlerResult {
    Ok(http::build_html_response(
        views::render_index_page(),
        ctx.is_head,
    ))
}

/// `GET /people` - fixed set of person records
pub fn people(ctx: &BindContext<'_>) -> HandlerResult {
    let people = vec![
        Person::new("Hong Gildong", 10),
        Person::new("Kim Minji", 10),
        Person::new("Seong Chunhyang", 10),
    ];
    Ok(http::build_html_response(
        views::render_people_page(&people),
        ctx.is_head,
    ))
}

/// `GET /get/res1` - required query parameters
pub fn get_res1(ctx: &BindContext<'_>) -> HandlerResult {
    let name = ctx.params.required("name")?;
    let age: i32 = ctx.params.required_as("age")?;
    Ok(result_page(
        ctx,
        &[("name", name.to_string()), ("age", age.to_string())],
    ))
}

/// `GET /get/res2` - optional query parameter, absent renders as null
pub fn get_res2(ctx: &BindContext<'_>) -> HandlerResult {
    let name = ctx.params.get("name");
    Ok(result_page(ctx, &[("name", views::display_opt(name))]))
}

/// `GET /get/res3/{name}/{age}` - path segment binding
pub fn get_res3(ctx: &BindContext<'_>) -> HandlerResult {
    let name = ctx.path.required("name")?;
    let age: i32 = ctx.path.required_as("age")?;
    Ok(result_page(
        ctx,
        &[("name", name.to_string()), ("age", age.to_string())],
    ))
}

/// `GET /get/res4/{name}/{age}` - path binding with an optional typed
/// segment; a missing segment never reaches here (the template does
/// not match), so optionality only shows in the declared type
pub fn get_res4(ctx: &BindContext<'_>) -> HandlerResult {
    let name = ctx.path.required("name")?;
    let age: Option<i32> = ctx.path.optional_as("age")?;
    Ok(result_page(
        ctx,
        &[("name", name.to_string()), ("age", views::display_opt(age))],
    ))
}

/// `GET /get/res5/{name}` - path segment plus optional query parameter
pub fn get_res5(ctx: &BindContext<'_>) -> HandlerResult {
    let name = ctx.path.required("name")?;
    let age: Option<i32> = ctx.params.optional_as("age")?;
    Ok(result_page(
        ctx,
        &[("name", name.to_string()), ("age", views::display_opt(age))],
    ))
}

/// `GET /introduce/{name}` - single path segment
pub fn introduce_path(ctx: &BindContext<'_>) -> HandlerResult {
    let name = ctx.path.required("name")?;
    Ok(result_page(ctx, &[("name", name.to_string())]))
}

/// `GET /introduce` - required query parameters
pub fn introduce_query(ctx: &BindContext<'_>) -> HandlerResult {
    let name = ctx.params.required("name")?;
    let age: i32 = ctx.params.required_as("age")?;
    Ok(result_page(
        ctx,
        &[("name", name.to_string()), ("age", age.to_string())],
    ))
}

/// `POST /post/res1` - required form fields
pub fn post_res1(ctx: &BindContext<'_>) -> HandlerResult {
    let name = ctx.params.required("name")?;
    let age: i32 = ctx.params.required_as("age")?;
    Ok(result_page(
        ctx,
        &[("name", name.to_string()), ("age", age.to_string())],
    ))
}

/// `POST /post/res2` - required name, optional age
pub fn post_res2(ctx: &BindContext<'_>) -> HandlerResult {
    let name = ctx.params.required("name")?;
    let age: Option<i32> = ctx.params.optional_as("age")?;
    Ok(result_page(
        ctx,
        &[("name", name.to_string()), ("age", views::display_opt(age))],
    ))
}

/// `POST /post/res7` - several required form fields
pub fn post_res7(ctx: &BindContext<'_>) -> HandlerResult {
    let name = ctx.params.required("name")?;
    let gender = ctx.params.required("gender")?;
    let birth_date = ctx.params.required("birth_date")?;
    let interests = ctx.params.required("interests")?;
    Ok(result_page(
        ctx,
        &[
            ("name", name.to_string()),
            ("gender", gender.to_string()),
            ("birth_date", birth_date.to_string()),
            ("interests", interests.to_string()),
        ],
    ))
}
