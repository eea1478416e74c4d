use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

/// Wire shape of a task record. Field names are the contract; the core crate
/// defines its own DTOs against the same names and integration tests catch
/// drift.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub content: String,
    pub completed_flg: bool,
    pub delete_flg: bool,
    pub sort: i64,
}

#[derive(Deserialize)]
pub struct CreateTask {
    pub content: String,
    #[serde(default)]
    pub completed_flg: bool,
    #[serde(default)]
    pub delete_flg: bool,
    #[serde(default)]
    pub sort: i64,
}

#[derive(Deserialize)]
pub struct UpdateTask {
    pub content: Option<String>,
    pub completed_flg: Option<bool>,
    pub delete_flg: Option<bool>,
    pub sort: Option<i64>,
}

/// Server state: the collection plus the id counter. Ids are sequential
/// integers assigned at creation, starting at 1, never reused.
#[derive(Default)]
pub struct Store {
    tasks: HashMap<i64, Task>,
    next_id: i64,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/v1/tasks", get(list_tasks).post(create_task))
        .route("/api/v1/tasks/{id}", patch(update_task).delete(delete_task))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// List order: rank ascending, ties newest-id first, so unranked
/// head-inserted records (`sort = 0`) lead in creation-descending order.
async fn list_tasks(State(db): State<Db>) -> Json<Vec<Task>> {
    let store = db.read().await;
    let mut tasks: Vec<Task> = store.tasks.values().cloned().collect();
    tasks.sort_by(|a, b| a.sort.cmp(&b.sort).then(b.id.cmp(&a.id)));
    Json(tasks)
}

async fn create_task(
    State(db): State<Db>,
    Json(input): Json<CreateTask>,
) -> (StatusCode, Json<Task>) {
    let mut store = db.write().await;
    store.next_id += 1;
    let task = Task {
        id: store.next_id,
        content: input.content,
        completed_flg: input.completed_flg,
        delete_flg: input.delete_flg,
        sort: input.sort,
    };
    store.tasks.insert(task.id, task.clone());
    (StatusCode::CREATED, Json(task))
}

async fn update_task(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateTask>,
) -> Result<Json<Task>, StatusCode> {
    let mut store = db.write().await;
    let task = store.tasks.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(content) = input.content {
        task.content = content;
    }
    if let Some(completed_flg) = input.completed_flg {
        task.completed_flg = completed_flg;
    }
    if let Some(delete_flg) = input.delete_flg {
        task.delete_flg = delete_flg;
    }
    if let Some(sort) = input.sort {
        task.sort = sort;
    }
    Ok(Json(task.clone()))
}

async fn delete_task(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .tasks
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}
