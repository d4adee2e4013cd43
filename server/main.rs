/// boolnet server
///
/// Thin HTTP front for the training pipeline: accepts a boolean function
/// and a network architecture, trains a fresh model, and returns the
/// sampled decision surface as JSON. Served by a synchronous tiny_http
/// server; the bundled frontend is plain static files.
///
/// Run with:
///   cargo run --bin server --release
/// Then POST to http://127.0.0.1:5000/train
mod handlers;
mod routes;

use log::info;
use tiny_http::Server;

fn main() {
    // Process-lifecycle setup happens exactly once, here, not as a
    // module-level side effect.
    env_logger::init();

    let addr = "0.0.0.0:5000";
    let server = Server::http(addr).expect("Failed to bind HTTP server");
    info!("listening on http://{addr}");

    // Each request is dispatched on its own thread; a long training run
    // blocks only its own request, never the accept loop. All pipeline
    // state is request-scoped, so no locking is needed.
    for request in server.incoming_requests() {
        std::thread::spawn(move || {
            routes::dispatch(request);
        });
    }
}
