use pokeapi::errors::PokeError;
use pokeapi::types::ApiUrl;
use pokeapi::PokeClient;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

// ========================================
//                 HELPERS
// ========================================

/// Serve one canned HTTP response on a loopback port.
///
/// Returns the [ApiUrl] pointing at the listener and a handle resolving to
/// the raw request (request line + headers) that the client sent.
async fn serve_once(status_line: &'static str, body: String) -> (ApiUrl, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        // a GET request has no body, so read up to the header terminator
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();
        String::from_utf8_lossy(&request).into_owned()
    });
    let url: ApiUrl = format!("http://127.0.0.1:{}/api/v2/", port).parse().unwrap();
    (url, handle)
}

fn client_for(url: ApiUrl) -> PokeClient {
    PokeClient::build(url).unwrap().build()
}

fn page_of(results: serde_json::Value) -> String {
    serde_json::json!({
        "count": results.as_array().unwrap().len(),
        "next": null,
        "previous": null,
        "results": results
    })
    .to_string()
}

// ========================================
//                  TESTS
// ========================================

#[tokio::test]
async fn test_list_pokemon_preserves_response_order() {
    let body = page_of(serde_json::json!([
        {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
        {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"},
        {"name": "venusaur", "url": "https://pokeapi.co/api/v2/pokemon/3/"}
    ]));
    let (url, server) = serve_once("200 OK", body).await;

    let pokemon = client_for(url).list_pokemon(3).await.unwrap();

    let names: Vec<&str> = pokemon.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["bulbasaur", "ivysaur", "venusaur"]);

    let request = server.await.unwrap();
    assert!(
        request.starts_with("GET /api/v2/pokemon?limit=3 HTTP/1.1"),
        "unexpected request: {}",
        request.lines().next().unwrap_or("")
    );
}

#[tokio::test]
async fn test_list_pokemon_derives_identifier() {
    let body = page_of(serde_json::json!([
        {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"}
    ]));
    let (url, _server) = serve_once("200 OK", body).await;

    let pokemon = client_for(url).list_pokemon(1).await.unwrap();

    assert_eq!(pokemon.len(), 1);
    assert_eq!(pokemon[0].id().unwrap().as_str(), "1");
}

#[tokio::test]
async fn test_list_pokemon_server_caps_at_collection_size() {
    // asking for more than exists returns everything there is
    let body = page_of(serde_json::json!([
        {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
        {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
    ]));
    let (url, server) = serve_once("200 OK", body).await;

    let pokemon = client_for(url).list_pokemon(100).await.unwrap();

    assert_eq!(pokemon.len(), 2);
    let request = server.await.unwrap();
    assert!(request.starts_with("GET /api/v2/pokemon?limit=100 HTTP/1.1"));
}

#[tokio::test]
async fn test_server_error_is_surfaced() {
    let (url, _server) = serve_once("500 Internal Server Error", "oops".to_string()).await;

    let error = client_for(url).list_pokemon(10).await.unwrap_err();

    match error {
        PokeError::Error { status, text, .. } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(text, "oops");
        }
        other => panic!("expected PokeError::Error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_garbage_body_is_a_decode_error() {
    let (url, _server) = serve_once("200 OK", "not json".to_string()).await;

    let error = client_for(url).list_pokemon(10).await.unwrap_err();

    assert!(matches!(error, PokeError::Raw(_)), "got {:?}", error);
}
