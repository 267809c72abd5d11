use api::models::todo;
use api::{NewTodo, Todo, TodoPatch};
use dioxus::prelude::*;
use ui::icons::FaTrash;
use ui::{use_auth, Alert, Icon, Spinner};

/// The signed-in user's todo list.
///
/// Every mutation goes to the server first; the local list is only
/// reconciled once the server has accepted it.
#[component]
pub fn Todos() -> Element {
    let auth = use_auth();
    let mut todos = use_signal(Vec::<Todo>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut new_text = use_signal(String::new);

    // Load todos from the server on mount
    let _loader = use_resource(move || async move {
        match auth.client().list_todos().await {
            Ok(list) => todos.set(list),
            Err(e) => error.set(Some(e.message_or("Failed to fetch todos."))),
        }
        loading.set(false);
    });

    let handle_add = move |evt: FormEvent| {
        evt.prevent_default();
        let text = new_text().trim().to_string();
        if text.is_empty() {
            return;
        }
        let Some(user) = auth.user() else {
            error.set(Some("User not authenticated".to_string()));
            return;
        };

        spawn(async move {
            let body = NewTodo {
                text,
                user_id: user.id,
            };
            match auth.client().create_todo(&body).await {
                Ok(created) => {
                    todo::append(&mut todos.write(), created);
                    new_text.set(String::new());
                }
                Err(e) => error.set(Some(e.message_or("Failed to add todo."))),
            }
        });
    };

    let toggle = move |id: u64, done: bool| {
        spawn(async move {
            match auth.client().update_todo(id, &TodoPatch::done(done)).await {
                Ok(()) => {
                    todo::set_done(&mut todos.write(), id, done);
                }
                Err(e) => error.set(Some(e.message_or("Failed to update todo."))),
            }
        });
    };

    let delete = move |id: u64| {
        spawn(async move {
            match auth.client().delete_todo(id).await {
                Ok(()) => {
                    todo::remove(&mut todos.write(), id);
                }
                Err(e) => error.set(Some(e.message_or("Failed to delete todo."))),
            }
        });
    };

    // Fire-and-forget; the input already shows the new text
    let update_text = move |id: u64, text: String| {
        spawn(async move {
            if let Err(e) = auth.client().update_todo(id, &TodoPatch::text(text)).await {
                error.set(Some(e.message_or("Failed to update todo text.")));
            }
        });
    };

    if loading() {
        return rsx! { Spinner {} };
    }

    rsx! {
        div {
            class: "page",
            div {
                class: "todos",

                h1 { "My Todos" }

                if let Some(err) = error() {
                    Alert { message: err }
                }

                form {
                    class: "todo-form form",
                    onsubmit: handle_add,
                    input {
                        r#type: "text",
                        placeholder: "New Todo",
                        value: new_text(),
                        oninput: move |evt: FormEvent| new_text.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        "Add Todo"
                    }
                }

                ul {
                    class: "todo-list",
                    for item in todos() {
                        li {
                            key: "{item.id}",
                            class: if item.done { "todo-item todo-item--done" } else { "todo-item" },
                            input {
                                r#type: "checkbox",
                                checked: item.done,
                                onchange: move |_| toggle(item.id, !item.done),
                            }
                            input {
                                r#type: "text",
                                initial_value: item.text.clone(),
                                onchange: move |evt: FormEvent| update_text(item.id, evt.value()),
                            }
                            button {
                                class: "todo-delete",
                                "aria-label": "delete",
                                onclick: move |_| delete(item.id),
                                Icon { icon: FaTrash, width: 16, height: 16 }
                            }
                        }
                    }
                }
            }
        }
    }
}
