use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;

use crate::error::{ApiError, ErrorBody};
use crate::models::{BlogList, BlogPost, CreateBlogPostReq, UpdateBlogPostReq};
use crate::{db, DbPool, DbPoolExt};

type ApiResult<T> = Result<T, ApiError>;

// ─── Routes ───

#[get("/health")]
pub fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok", "version": env!("CARGO_PKG_VERSION")}))
}

#[get("/blogs")]
pub fn list_blogs(db: &State<DbPool>) -> ApiResult<Json<BlogList>> {
    let conn = db.conn();
    let blogs = db::list_posts(&conn)?;
    tracing::debug!(count = blogs.len(), "listed blog posts");
    Ok(Json(BlogList { blogs }))
}

#[get("/blogs/<id>")]
pub fn get_blog(id: &str, db: &State<DbPool>) -> ApiResult<Json<BlogPost>> {
    let conn = db.conn();
    db::find_post(&conn, id)?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

#[post("/blogs", format = "json", data = "<req>")]
pub fn create_blog(req: Json<CreateBlogPostReq>, db: &State<DbPool>) -> ApiResult<(Status, Json<BlogPost>)> {
    let new_post = req.into_inner().validate().map_err(ApiError::Validation)?;

    let conn = db.conn();
    let post = db::insert_post(&conn, &new_post)?;
    tracing::info!(id = %post.id, title = %post.title, "created blog post");

    Ok((Status::Created, Json(post)))
}

#[put("/blogs/<id>", format = "json", data = "<req>")]
pub fn update_blog(id: &str, req: Json<UpdateBlogPostReq>, db: &State<DbPool>) -> ApiResult<Status> {
    if let Some(body_id) = req.id.as_deref() {
        if body_id != id {
            return Err(ApiError::IdMismatch { path: id.to_string(), body: body_id.to_string() });
        }
    }
    req.validate().map_err(ApiError::Validation)?;

    let conn = db.conn();
    let updated = db::update_post(&conn, id, &req)?.ok_or(ApiError::NotFound)?;
    tracing::info!(
        id = %updated.id,
        title = req.title.is_some(),
        content = req.content.is_some(),
        author = req.author.is_some(),
        "updated blog post"
    );

    Ok(Status::NoContent)
}

#[delete("/blogs/<id>")]
pub fn delete_blog(id: &str, db: &State<DbPool>) -> ApiResult<Status> {
    let conn = db.conn();
    if !db::delete_post(&conn, id)? {
        return Err(ApiError::NotFound);
    }
    tracing::info!(id, "deleted blog post");
    Ok(Status::NoContent)
}

// ─── Catchers ───

#[catch(400)]
pub fn bad_request() -> Json<ErrorBody> {
    Json(ErrorBody::new("Malformed request body", "BAD_REQUEST"))
}

#[catch(404)]
pub fn not_found() -> Json<ErrorBody> {
    Json(ErrorBody::new("Not found", "NOT_FOUND"))
}

#[catch(422)]
pub fn unprocessable_entity() -> Json<ErrorBody> {
    Json(ErrorBody::new("Request body could not be parsed", "UNPROCESSABLE_ENTITY"))
}

#[catch(500)]
pub fn internal_error() -> Json<ErrorBody> {
    Json(ErrorBody::new("Internal server error", "INTERNAL_ERROR"))
}
