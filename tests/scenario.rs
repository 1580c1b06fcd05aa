use anyhow::{anyhow, Result};
use serde_json::{json, Value};
use std::net::TcpListener;
use userdir::directory::{
    view, Answer, Banner, Deletion, DirectoryClient, Field, HttpUserApi, Saved, UserForm,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

async fn mount(server: &MockServer, verb: &str, route: &str, status: u16) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

async fn requests(server: &MockServer) -> Result<Vec<(String, String, Option<Value>)>> {
    let received = server
        .received_requests()
        .await
        .ok_or_else(|| anyhow!("wiremock request recording is disabled"))?;

    Ok(received
        .iter()
        .map(|request| {
            (
                request.method.as_str().to_string(),
                request.url.path().to_string(),
                serde_json::from_slice(&request.body).ok(),
            )
        })
        .collect())
}

#[tokio::test]
async fn list_create_update_delete() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/viewUser/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "A", "address": "X"}
        ])))
        .mount(&server)
        .await;
    mount(&server, "POST", "/api/viewUser/", 201).await;
    mount(&server, "PUT", "/api/viewUser/1/", 200).await;
    mount(&server, "DELETE", "/api/viewUser/2/", 204).await;

    let mut client = DirectoryClient::new(HttpUserApi::new(&server.uri(), None)?);

    client.list().await?;
    let table = view::table(client.users(), client.is_loading());
    assert_eq!(table.lines().count(), 3);
    assert_eq!(table.lines().last(), Some("1  | A    | X"));

    client.set_field(Field::Id, "2")?;
    client.set_field(Field::Name, "B")?;
    client.set_field(Field::Address, "Y")?;
    assert_eq!(client.submit().await?, Saved::Created);
    assert_eq!(client.form(), &UserForm::default());

    let target = client
        .find(1)
        .cloned()
        .ok_or_else(|| anyhow!("user 1 missing"))?;
    client.begin_edit(&target);
    client.set_field(Field::Address, "Z")?;
    assert_eq!(client.submit().await?, Saved::Updated);
    assert_eq!(client.editing(), None);

    assert_eq!(
        client.delete(2, &mut Answer::Yes).await?,
        Deletion::Deleted
    );
    assert_eq!(client.banner(), Some(Banner::Deleted));

    let user_b = json!({"id": 2, "name": "B", "address": "Y"});
    let user_a = json!({"id": 1, "name": "A", "address": "Z"});
    assert_eq!(
        requests(&server).await?,
        vec![
            ("GET".to_string(), "/api/viewUser/".to_string(), None),
            ("POST".to_string(), "/api/viewUser/".to_string(), Some(user_b)),
            ("GET".to_string(), "/api/viewUser/".to_string(), None),
            ("PUT".to_string(), "/api/viewUser/1/".to_string(), Some(user_a)),
            ("GET".to_string(), "/api/viewUser/".to_string(), None),
            ("DELETE".to_string(), "/api/viewUser/2/".to_string(), None),
            ("GET".to_string(), "/api/viewUser/".to_string(), None),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn server_errors_become_generic_messages() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    mount(&server, "GET", "/api/viewUser/", 503).await;
    mount(&server, "POST", "/api/viewUser/", 400).await;
    mount(&server, "DELETE", "/api/viewUser/5/", 404).await;

    let mut client = DirectoryClient::new(HttpUserApi::new(&server.uri(), None)?);

    assert!(client.list().await.is_err());
    assert_eq!(client.banner().map(Banner::text), Some("Failed to fetch users."));

    client.set_field(Field::Id, "5")?;
    client.set_field(Field::Name, "E")?;
    client.set_field(Field::Address, "F")?;
    assert!(client.submit().await.is_err());
    assert_eq!(client.banner().map(Banner::text), Some("Failed to save user."));
    assert_eq!(client.form().id, "5");

    assert!(client.delete(5, &mut Answer::Yes).await.is_err());
    assert_eq!(client.banner().map(Banner::text), Some("Failed to delete user."));

    assert!(client.delete(5, &mut Answer::No).await.is_ok());
    assert_eq!(requests(&server).await?.len(), 3);
    Ok(())
}

#[tokio::test]
async fn unreachable_service_is_a_fetch_failure() -> Result<()> {
    // nothing listens on the discard port
    let mut client = DirectoryClient::new(HttpUserApi::new("http://127.0.0.1:9", None)?);

    assert!(client.list().await.is_err());
    assert!(client.users().is_empty());
    assert_eq!(client.banner().map(Banner::text), Some("Failed to fetch users."));
    Ok(())
}
