use super::*;

#[test]
fn test_build_http_client_succeeds() {
    let client = build_http_client();
    assert!(client.is_ok());
}

#[tokio::test]
async fn test_check_response_status_passes_success_through() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/ok")
        .with_status(200)
        .with_body("fine")
        .create_async()
        .await;

    let response = build_http_client()
        .unwrap()
        .get(format!("{}/ok", server.url()))
        .send()
        .await
        .unwrap();

    let response = check_response_status(response).await.unwrap();
    assert_eq!(response.text().await.unwrap(), "fine");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_check_response_status_unauthorized() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/secret")
        .with_status(401)
        .with_body("bad key")
        .create_async()
        .await;

    let response = build_http_client()
        .unwrap()
        .get(format!("{}/secret", server.url()))
        .send()
        .await
        .unwrap();

    let err = check_response_status(response).await.unwrap_err();
    assert!(matches!(
        err,
        RecraftError::Authentication {
            status_code: Some(401),
            ..
        }
    ));
    assert!(err.to_string().contains("bad key"));
}

#[tokio::test]
async fn test_check_response_status_server_error_includes_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/boom")
        .with_status(500)
        .with_body("it broke")
        .create_async()
        .await;

    let response = build_http_client()
        .unwrap()
        .get(format!("{}/boom", server.url()))
        .send()
        .await
        .unwrap();

    let err = check_response_status(response).await.unwrap_err();
    assert!(matches!(err, RecraftError::Server { status_code: 500, .. }));
    assert!(err.to_string().contains("it broke"));
}

#[tokio::test]
async fn test_translate_reqwest_error_connect_failure() {
    // Port 9 (discard) is essentially guaranteed to refuse connections.
    let url = "http://127.0.0.1:9/unreachable";
    let error = build_http_client()
        .unwrap()
        .get(url)
        .send()
        .await
        .unwrap_err();

    let translated = translate_reqwest_error(error, url);
    assert!(matches!(translated, RecraftError::Network { .. }));
    assert!(translated.to_string().contains(url));
}
