//! Fetching through the real HTTP client against local servers.

use std::net::TcpListener;
use std::time::{Duration, Instant};

use feriados::config::{DEFAULT_USER_AGENT, Settings};
use feriados::data::{DatasetCache, FeriadosClient, HolidaySource, load};
use mockito::Server;

const BODY: &str = r#"[
    {"nombre": "Año Nuevo", "comentarios": null, "fecha": "2024-01-01", "irrenunciable": "1", "tipo": "Civil", "leyes": []},
    {"nombre": "Viernes Santo", "comentarios": null, "fecha": "2024-03-29", "irrenunciable": "0", "tipo": "Religioso", "leyes": []},
    {"nombre": "Año Nuevo", "comentarios": null, "fecha": "2025-01-01", "irrenunciable": "1", "tipo": "Civil", "leyes": []}
]"#;

fn settings(url: String, timeout: Duration) -> Settings {
    Settings {
        url,
        timeout,
        user_agent: DEFAULT_USER_AGENT.to_string(),
    }
}

#[test]
fn loads_json_array_with_client_header() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/fl/feriados")
        .match_header("user-agent", "Mozilla/5.0")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(BODY)
        .create();

    let client = FeriadosClient::new(&settings(format!("{}/fl/feriados", server.url()), Duration::from_secs(5))).unwrap();
    let outcome = load(&client);

    mock.assert();
    assert!(outcome.is_ok(), "{:?}", outcome.error);
    assert_eq!(outcome.dataset.len(), 3);
    assert_eq!(outcome.dataset.years(), vec![2024, 2025]);
}

#[test]
fn non_success_status_is_a_load_failure() {
    let mut server = Server::new();
    let _mock = server.mock("GET", "/fl/feriados").with_status(503).create();

    let client = FeriadosClient::new(&settings(format!("{}/fl/feriados", server.url()), Duration::from_secs(5))).unwrap();
    let outcome = load(&client);

    assert!(outcome.dataset.is_empty());
    let msg = outcome.error.expect("error message");
    assert!(msg.contains("503"), "{msg}");
}

#[test]
fn malformed_body_is_a_load_failure() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/fl/feriados")
        .with_status(200)
        .with_body("<html>mantenimiento</html>")
        .create();

    let client = FeriadosClient::new(&settings(format!("{}/fl/feriados", server.url()), Duration::from_secs(5))).unwrap();
    let err = client.fetch().unwrap_err();
    assert!(!err.is_network());

    let outcome = load(&client);
    assert!(outcome.dataset.is_empty());
    assert!(outcome.error.unwrap().contains("malformed JSON"));
}

#[test]
fn unresponsive_server_times_out_without_panicking() {
    // Bound but never accepted: the request is sent and no response ever comes.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/fl/feriados", listener.local_addr().unwrap());

    let client = FeriadosClient::new(&settings(url, Duration::from_secs(1))).unwrap();
    let started = Instant::now();
    let outcome = load(&client);

    assert!(started.elapsed() < Duration::from_secs(10));
    assert!(outcome.dataset.is_empty());
    let msg = outcome.error.expect("error message");
    assert!(!msg.is_empty());
    drop(listener);
}

#[test]
fn refused_connection_is_a_load_failure() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = FeriadosClient::new(&settings(format!("http://127.0.0.1:{port}/"), Duration::from_secs(2))).unwrap();
    let err = client.fetch().unwrap_err();
    assert!(err.is_network());
}

#[test]
fn cache_fetches_once_per_url() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/fl/feriados")
        .with_status(200)
        .with_body(BODY)
        .expect(1)
        .create();

    let client = FeriadosClient::new(&settings(format!("{}/fl/feriados", server.url()), Duration::from_secs(5))).unwrap();
    let mut cache = DatasetCache::new();
    assert_eq!(cache.get_or_load(&client).dataset.len(), 3);
    assert_eq!(cache.get_or_load(&client).dataset.len(), 3);

    mock.assert();
}
