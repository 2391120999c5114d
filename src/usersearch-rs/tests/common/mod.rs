use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

use usersearch_core::{Dataset, ServerConfig};
use usersearch_server::api::{self, AppState};

pub const TEST_TOKEN: &str = "test_token";

/// An actix-web server running on its own thread and ephemeral port
pub struct TestServer {
    pub url: String,
    system: actix_web::rt::System,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.system.stop();
    }
}

pub fn spawn_server<F>(configure: F) -> TestServer
where
    F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let url = format!("http://{}", listener.local_addr().expect("local addr"));

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let system = actix_web::rt::System::new();
        let _ = system.block_on(async move {
            let server = HttpServer::new(move || App::new().configure(configure.clone()))
                .workers(1)
                .listen(listener)
                .expect("listen on test listener")
                .run();
            tx.send(actix_web::rt::System::current())
                .expect("report test server system");
            server.await
        });
    });

    let system = rx.recv().expect("test server thread started");
    TestServer { url, system }
}

pub fn load_dataset() -> Dataset {
    Dataset::load(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../usersearch-server/data/dataset.json"
    ))
    .expect("load test dataset")
}

/// Start the reference search server over the bundled dataset
pub fn spawn_reference_server(dataset: Dataset) -> TestServer {
    let config = ServerConfig {
        access_token: Some(TEST_TOKEN.to_string()),
        ..Default::default()
    };
    let state = web::Data::new(AppState::new(dataset, config));
    spawn_server(move |cfg| {
        cfg.app_data(state.clone());
        api::configure(cfg);
    })
}
