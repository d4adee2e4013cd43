use std::io::{Cursor, Read};

use log::{error, info};
use tiny_http::{Request, Response};

use boolnet::pipeline::{self, TrainRequest, TrainResponse};
use boolnet::Error;

use crate::routes::{error_response, json_response};

// ---------------------------------------------------------------------------
// POST /train
// ---------------------------------------------------------------------------

/// Deserializes the train request, runs the pipeline, and serializes the
/// scatter data. Every failure (malformed body, bad expression, unknown
/// activation/optimizer/loss) is logged and collapsed into a generic 500;
/// there is no error schema.
pub fn handle(request: &mut Request) -> Response<Cursor<Vec<u8>>> {
    let mut body = String::new();
    if request.as_reader().read_to_string(&mut body).is_err() {
        error!("failed to read /train request body");
        return error_response(500, "internal server error");
    }

    let train_request: TrainRequest = match serde_json::from_str(&body) {
        Ok(parsed) => parsed,
        Err(cause) => {
            let err = Error::BadRequest { message: cause.to_string() };
            error!("{err}");
            return error_response(500, "internal server error");
        }
    };

    info!(
        "training {:?} over {} variables ({} layers, {} epochs, {}/{})",
        train_request.boolean_function,
        train_request.num_variables,
        train_request.network_structure.len(),
        train_request.epochs,
        train_request.optimizer,
        train_request.loss_function,
    );

    match pipeline::run(&train_request) {
        Ok(scatter_plot) => {
            let response = TrainResponse { scatter_plot };
            match serde_json::to_string(&response) {
                Ok(json) => json_response(json),
                Err(cause) => {
                    error!("failed to serialize scatter data: {cause}");
                    error_response(500, "internal server error")
                }
            }
        }
        Err(err) => {
            error!("train request failed: {err}");
            error_response(500, "internal server error")
        }
    }
}
