mod config;
mod error;
mod handlers;
mod models;
mod routes;
#[cfg(test)]
mod tests;

use axum::{body::Body, extract::Request, response::Response, Router};
use http_body_util::BodyExt;
use lambda_http::{
    run, service_fn, Body as LambdaBody, Error, Request as LambdaRequest,
    Response as LambdaResponse,
};
use log::{debug, error, info, trace};
use once_cell::sync::OnceCell;
use tokio::sync::Mutex;
use tower::ServiceExt;

use crate::config::ServiceConfig;

// Router instance built once per Lambda container so the capture store survives between requests
static ROUTER: OnceCell<Mutex<Option<Router>>> = OnceCell::new();

// The Lambda handler function
async fn function_handler(event: LambdaRequest) -> Result<LambdaResponse<LambdaBody>, Error> {
    info!(
        "Received Lambda request: method={:?}, path={:?}",
        event.method(),
        event.uri().path()
    );

    let app = {
        let mut router_option = ROUTER.get_or_init(|| Mutex::new(None)).lock().await;
        router_option
            .get_or_insert_with(|| {
                info!("Initializing the Axum router");
                routes::create_router(&ServiceConfig::from_env())
            })
            .clone()
    };

    let (parts, body) = event.into_parts();
    let body = match body {
        LambdaBody::Empty => Body::empty(),
        LambdaBody::Text(text) => {
            debug!("Request body (text): {} bytes", text.len());
            Body::from(text)
        }
        LambdaBody::Binary(data) => {
            debug!("Request body (binary): {} bytes", data.len());
            Body::from(data)
        }
    };

    let http_request = Request::from_parts(parts, body);
    let response = match app.oneshot(http_request).await {
        Ok(response) => response,
        Err(infallible) => match infallible {},
    };
    info!("Received response from Axum: status={}", response.status());

    response_to_lambda(response).await
}

// Convert the Axum response to a format suitable for Lambda
async fn response_to_lambda(response: Response) -> Result<LambdaResponse<LambdaBody>, Error> {
    let (parts, body) = response.into_parts();

    let bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(err) => {
            error!("Failed to read response body: {:?}", err);
            return Err(Error::from(err));
        }
    };

    let builder = parts.headers.iter().fold(
        LambdaResponse::builder().status(parts.status),
        |builder, (name, value)| {
            trace!("Adding response header: {}={:?}", name, value);
            builder.header(name, value)
        },
    );

    let lambda_response = if bytes.is_empty() {
        builder.body(LambdaBody::Empty)?
    } else {
        match String::from_utf8(bytes.to_vec()) {
            Ok(s) => builder.body(LambdaBody::Text(s))?,
            Err(_) => builder.body(LambdaBody::Binary(bytes.to_vec()))?,
        }
    };

    Ok(lambda_response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize env_logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Logging initialized with env_logger");

    if let Ok(function_name) = std::env::var("AWS_LAMBDA_FUNCTION_NAME") {
        info!(
            "Running in AWS Lambda environment: {} (version: {})",
            function_name,
            std::env::var("AWS_LAMBDA_FUNCTION_VERSION").unwrap_or_else(|_| "unknown".into())
        );
        run(service_fn(function_handler)).await?;
    } else {
        let config = ServiceConfig::from_env();
        info!(
            "Starting link service on {} (share host {})",
            config.bind_addr, config.link_host
        );

        let app = routes::create_router(&config);
        let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
        axum::serve(listener, app.into_make_service()).await?;
    }

    info!("Service finished");
    Ok(())
}
