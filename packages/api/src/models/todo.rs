//! Todo records and the helpers the list view uses to keep its local copy
//! in step with the server without refetching.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task record in client casing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Todo {
    pub id: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub user_id: Option<u64>,
}

/// Body of `GET /todos`: normally `{Data: [...]}`, tolerated as a bare array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TodoList {
    Bare(Vec<Todo>),
    Wrapped {
        #[serde(rename = "Data", default)]
        data: Option<Vec<Todo>>,
    },
}

impl From<TodoList> for Vec<Todo> {
    fn from(list: TodoList) -> Self {
        match list {
            TodoList::Bare(todos) => todos,
            TodoList::Wrapped { data } => data.unwrap_or_default(),
        }
    }
}

/// Body of `POST /todos`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTodo {
    pub text: String,
    #[serde(rename = "userId")]
    pub user_id: u64,
}

/// Body of `PUT /todos/:id`; only the set field is sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl TodoPatch {
    pub fn done(done: bool) -> Self {
        Self {
            done: Some(done),
            ..Self::default()
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

/// Add a server-confirmed todo at the end of the list.
pub fn append(todos: &mut Vec<Todo>, todo: Todo) {
    todos.push(todo);
}

/// Set the done flag of the todo with `id`. Returns whether one matched.
pub fn set_done(todos: &mut [Todo], id: u64, done: bool) -> bool {
    match todos.iter_mut().find(|todo| todo.id == id) {
        Some(todo) => {
            todo.done = done;
            true
        }
        None => false,
    }
}

/// Remove the todo with `id`, keeping the order of the rest.
pub fn remove(todos: &mut Vec<Todo>, id: u64) -> Option<Todo> {
    let index = todos.iter().position(|todo| todo.id == id)?;
    Some(todos.remove(index))
}
