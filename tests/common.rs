#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::thread;
use tiny_http::{Header, Method, Response, Server};

pub fn sleepy() -> Command {
    cargo_bin_cmd!("sleepy")
}

/// `sleepy` bound to a private config file and without colors.
pub fn sleepy_with(config: &Path) -> Command {
    let mut cmd = sleepy();
    cmd.env_remove("SLEEPY_CONFIG")
        .args(["--no-color", "--config"])
        .arg(config);
    cmd
}

pub fn config_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("sleepy.conf")
}

pub const STATS_JSON: &str = r#"{
  "longest_awake": [["2024-01-02T06:00:00", "18h 10m"]],
  "shortest_awake": [["2024-01-03T07:00:00", "14h 00m"]],
  "longest_asleep": [["2024-01-01T22:00:00Z", "8h 00m"], ["2024-01-02T23:00:00", "7h 30m"]],
  "shortest_asleep": [],
  "earliest_wake": [["2024-01-02T06:00:00", "06:00"]],
  "earliest_sleep": [["2024-01-01T22:00:00", "22:00"]],
  "latest_wake": [["2024-01-03T07:00:00", "07:00"]],
  "latest_sleep": [["2024-01-02T23:00:00", "23:00"]],
  "avg_awake": "16h 05m",
  "avg_asleep": "7h 45m"
}"#;

/// What the fake server has seen and stores.
#[derive(Default)]
pub struct ServerState {
    pub entries: Vec<String>,
    pub posted: Vec<String>,
    pub requests: Vec<String>,
}

/// In-process stand-in for the sleep API, served by tiny_http on a random
/// local port. Entries are kept in memory; POST appends, DELETE pops.
pub struct FakeServer {
    pub base_url: String,
    pub state: Arc<Mutex<ServerState>>,
}

impl FakeServer {
    pub fn start(initial: &[&str]) -> Self {
        let server = Server::http("127.0.0.1:0").expect("bind fake server");
        let addr = server.server_addr().to_ip().expect("ip listener");
        let state = Arc::new(Mutex::new(ServerState {
            entries: initial.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }));

        let shared = Arc::clone(&state);
        thread::spawn(move || {
            for mut request in server.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);

                let method = request.method().clone();
                let url = request.url().to_string();
                let mut st = shared.lock().expect("state lock");
                st.requests.push(format!("{:?} {}", method, url));

                let json = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                    .expect("header");

                let response = match (method, url.as_str()) {
                    (Method::Get, "/api/entries") => {
                        let payload = serde_json::to_string(&st.entries).expect("json");
                        Response::from_string(payload).with_header(json)
                    }
                    (Method::Get, "/api/stats") => {
                        Response::from_string(STATS_JSON).with_header(json)
                    }
                    (Method::Post, "/api/entry") => {
                        let value: serde_json::Value =
                            serde_json::from_str(&body).expect("json body");
                        let time = value["time"].as_str().unwrap_or_default().to_string();
                        st.posted.push(body.clone());
                        st.entries.push(time);
                        Response::from_string("").with_status_code(204)
                    }
                    (Method::Delete, "/api/entry") => {
                        if st.entries.pop().is_some() {
                            Response::from_string("").with_status_code(204)
                        } else {
                            Response::from_string("no entries").with_status_code(400)
                        }
                    }
                    _ => Response::from_string("not found").with_status_code(404),
                };
                drop(st);
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn entries(&self) -> Vec<String> {
        self.state.lock().expect("state lock").entries.clone()
    }

    pub fn posted(&self) -> Vec<String> {
        self.state.lock().expect("state lock").posted.clone()
    }

    pub fn requests(&self) -> Vec<String> {
        self.state.lock().expect("state lock").requests.clone()
    }
}
