use sesame_api_base::HttpClient;

/// Helper for testing the Sesame API using wiremock.
///
/// Warning: when using `Mock::expect` ensure `server` is not dropped before the test completes,
pub async fn start_api_mock(mocks: Vec<wiremock::Mock>) -> (wiremock::MockServer, HttpClient) {
    let server = wiremock::MockServer::start().await;

    for mock in mocks {
        server.register(mock).await;
    }

    let client = HttpClient::new(server.uri(), reqwest::Client::new());

    (server, client)
}

#[cfg(test)]
mod tests {
    use wiremock::{matchers, Mock, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn client_points_at_server() {
        let (_server, client) = start_api_mock(vec![Mock::given(matchers::path("/ping"))
            .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
            .expect(1)])
        .await;

        let response = client.get("/ping").await.unwrap();

        assert_eq!(response.data, serde_json::json!("pong"));
    }
}
