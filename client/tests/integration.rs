//! Full lifecycle test against the live todo server.
//!
//! # Design
//! Starts the real server on a random port with the in-memory backend, then
//! exercises every client operation over real HTTP using ureq. Validates
//! that the client's request building and response parsing agree with the
//! actual server schema.

use std::sync::Arc;

use todo_client::{ApiError, CreateTodo, HttpMethod, HttpResponse, TodoClient};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses come back as data rather than `Err`, letting the client handle
/// status interpretation.
fn execute(req: todo_client::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Patch, _) => agent.patch(&req.path).send_empty(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

#[test]
fn crud_lifecycle() {
    // Step 1: start the server on a random port, in-memory backend.
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            let store = Arc::new(todo_server::MemoryStore::new());
            let origin = axum::http::HeaderValue::from_static("http://localhost:3000");
            todo_server::run(listener, store, origin).await
        })
        .unwrap();
    });

    let client = TodoClient::new(&format!("http://{addr}"));

    // Step 2: list — should be empty.
    let req = client.build_list_todos();
    let todos = client.parse_list_todos(execute(req)).unwrap();
    assert!(todos.is_empty(), "expected empty list");

    // Step 3: create a todo.
    let create_input = CreateTodo {
        body: "Integration test".to_string(),
    };
    let req = client.build_create_todo(&create_input).unwrap();
    let created = client.parse_create_todo(execute(req)).unwrap();
    assert_eq!(created.body, "Integration test");
    assert!(!created.completed);
    let id = created.id;

    // Step 4: creating with an empty body is rejected.
    let req = client
        .build_create_todo(&CreateTodo { body: String::new() })
        .unwrap();
    let err = client.parse_create_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::BadRequest { .. }));

    // Step 5: mark completed.
    let req = client.build_complete_todo(id);
    let updated = client.parse_complete_todo(execute(req)).unwrap();
    assert_eq!(updated.body, "Integration test");
    assert!(updated.completed);

    // Step 6: completing again lands on the same terminal state.
    let req = client.build_complete_todo(id);
    let updated = client.parse_complete_todo(execute(req)).unwrap();
    assert!(updated.completed);

    // Step 7: list — should have the one completed item.
    let req = client.build_list_todos();
    let todos = client.parse_list_todos(execute(req)).unwrap();
    assert_eq!(todos.len(), 1);
    assert!(todos[0].completed);

    // Step 8: delete.
    let req = client.build_delete_todo(id);
    let ack = client.parse_delete_todo(execute(req)).unwrap();
    assert!(ack.success);

    // Step 9: delete again — should be NotFound.
    let req = client.build_delete_todo(id);
    let err = client.parse_delete_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 10: completing a deleted todo — should be NotFound.
    let req = client.build_complete_todo(id);
    let err = client.parse_complete_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 11: list — should be empty again.
    let req = client.build_list_todos();
    let todos = client.parse_list_todos(execute(req)).unwrap();
    assert!(todos.is_empty(), "expected empty list after delete");
}
