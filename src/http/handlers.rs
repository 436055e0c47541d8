//! Request handlers.

use super::error::ApiError;
use super::models::{
    BoardQuery, BoardResponse, BulkDeleteResponse, CreateProjectRequest, CreateTaskRequest,
    MessageResponse, MoveRequest, ProjectDeletedResponse, ProjectQuery, UpdateProjectRequest,
    UpdateTaskRequest,
};
use super::state::AppState;
use crate::board::{compute_columns, suggest_next, summarize};
use crate::project::domain::ProjectId;
use crate::project::services::ProjectServiceError;
use crate::task::domain::TaskId;
use crate::task::services::TaskServiceError;
use actix_web::{HttpResponse, Responder, web};
use log::debug;

type ApiResult = Result<HttpResponse, ApiError>;

fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    raw.parse().map_err(ApiError::bad_request)
}

fn parse_project_id(raw: &str) -> Result<ProjectId, ApiError> {
    raw.parse().map_err(ApiError::bad_request)
}

/// Confirms a task's project exists before the task points at it.
async fn ensure_project(state: &AppState, project_id: ProjectId) -> Result<(), ApiError> {
    match state.projects.get(project_id).await {
        Ok(_) => Ok(()),
        Err(ProjectServiceError::NotFound(_)) => Err(ApiError::BadRequest(format!(
            "project {project_id} does not exist"
        ))),
        Err(err) => Err(err.into()),
    }
}

/// `GET /`
pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("API is running")
}

/// `GET /api/tasks`
pub async fn list_tasks(state: web::Data<AppState>) -> ApiResult {
    let tasks = state.tasks.list().await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// `GET /api/tasks/project/{project_id}`
pub async fn list_project_tasks(state: web::Data<AppState>, path: web::Path<String>) -> ApiResult {
    let project_id = parse_project_id(&path)?;
    let tasks = state.tasks.list_by_project(project_id).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// `GET /api/tasks/{id}`
pub async fn get_task(state: web::Data<AppState>, path: web::Path<String>) -> ApiResult {
    let task = state.tasks.get(parse_task_id(&path)?).await?;
    Ok(HttpResponse::Ok().json(task))
}

/// `POST /api/tasks`
pub async fn create_task(
    state: web::Data<AppState>,
    body: web::Json<CreateTaskRequest>,
) -> ApiResult {
    let draft = body
        .into_inner()
        .into_draft()
        .map_err(TaskServiceError::from)?;
    if let Some(project_id) = draft.project_id() {
        ensure_project(&state, project_id).await?;
    }
    let task = state.tasks.create(draft).await?;
    Ok(HttpResponse::Created().json(task))
}

/// `PUT /api/tasks/{id}`
pub async fn update_task(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateTaskRequest>,
) -> ApiResult {
    let id = parse_task_id(&path)?;
    let request = body.into_inner();
    let target_project = request.project_id.clone();
    let patch = request.into_patch().map_err(TaskServiceError::from)?;
    if let Some(raw) = target_project {
        ensure_project(&state, parse_project_id(&raw)?).await?;
    }
    let task = state.tasks.update(id, patch).await?;
    Ok(HttpResponse::Ok().json(task))
}

/// `DELETE /api/tasks/{id}`
pub async fn delete_task(state: web::Data<AppState>, path: web::Path<String>) -> ApiResult {
    state.tasks.delete(parse_task_id(&path)?).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Task deleted successfully")))
}

/// `DELETE /api/tasks/project/{project_id}`
pub async fn delete_project_tasks(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult {
    let deleted = state
        .tasks
        .delete_by_project(parse_project_id(&path)?)
        .await?;
    Ok(HttpResponse::Ok().json(BulkDeleteResponse {
        message: "All tasks for project deleted successfully".to_owned(),
        deleted,
    }))
}

/// `GET /api/projects`
pub async fn list_projects(
    state: web::Data<AppState>,
    query: web::Query<ProjectQuery>,
) -> ApiResult {
    let projects = match query.into_inner().search {
        Some(search) => state.projects.search(&search).await?,
        None => state.projects.list().await?,
    };
    Ok(HttpResponse::Ok().json(projects))
}

/// `GET /api/projects/{id}`
pub async fn get_project(state: web::Data<AppState>, path: web::Path<String>) -> ApiResult {
    let project = state.projects.get(parse_project_id(&path)?).await?;
    Ok(HttpResponse::Ok().json(project))
}

/// `POST /api/projects`
pub async fn create_project(
    state: web::Data<AppState>,
    body: web::Json<CreateProjectRequest>,
) -> ApiResult {
    let draft = body
        .into_inner()
        .into_draft()
        .map_err(ProjectServiceError::from)?;
    let project = state.projects.create(draft).await?;
    Ok(HttpResponse::Created().json(project))
}

/// `PUT /api/projects/{id}`
pub async fn update_project(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateProjectRequest>,
) -> ApiResult {
    let id = parse_project_id(&path)?;
    let patch = body
        .into_inner()
        .into_patch()
        .map_err(ProjectServiceError::from)?;
    let project = state.projects.update(id, patch).await?;
    Ok(HttpResponse::Ok().json(project))
}

/// `DELETE /api/projects/{id}`
pub async fn delete_project(state: web::Data<AppState>, path: web::Path<String>) -> ApiResult {
    let deletion = state.projects.delete(parse_project_id(&path)?).await?;
    Ok(HttpResponse::Ok().json(ProjectDeletedResponse {
        message: "Project deleted successfully".to_owned(),
        deleted_tasks: deletion.removed_tasks,
    }))
}

/// `GET /api/board`
pub async fn board(state: web::Data<AppState>, query: web::Query<BoardQuery>) -> ApiResult {
    let options = query
        .into_inner()
        .into_options()
        .map_err(ApiError::BadRequest)?;
    let tasks = match options.project_id {
        Some(project_id) => state.tasks.list_by_project(project_id).await?,
        None => state.tasks.list().await?,
    };
    let board = compute_columns(&tasks, options.group_by, &options.filters, options.sort_by);
    Ok(HttpResponse::Ok().json(BoardResponse {
        board,
        sort_by: options.sort_by,
        summary: summarize(&tasks, state.today()),
        suggested_next: suggest_next(&tasks).cloned(),
    }))
}

/// `POST /api/board/move`
pub async fn move_task(state: web::Data<AppState>, body: web::Json<MoveRequest>) -> ApiResult {
    let MoveRequest { event, group_by } = body.into_inner();
    let outcome = state.drag.handle_move(group_by, &event).await?;
    debug!("board move of task {} handled", event.task_id);
    Ok(HttpResponse::Ok().json(outcome))
}
