use std::process::ExitCode;

use anyhow::{anyhow, Context};
use apikey_auth::{get_api_key, AuthError};
use axum::http::{header, HeaderMap, HeaderName, HeaderValue};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "apikey-auth", about = "Extract the API key from Authorization headers")]
struct Config {
    /// Request header as `Name: value`, may be repeated
    #[arg(short = 'H', long = "header", value_name = "HEADER")]
    headers: Vec<String>,

    /// Value of the Authorization header, replaces any `-H Authorization`
    #[arg(long, env = "APIKEY_AUTH_AUTHORIZATION")]
    authorization: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Output {
    Key { api_key: String },
    Error { error: String },
}

fn parse_header(raw: &str) -> anyhow::Result<(HeaderName, HeaderValue)> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| anyhow!("header `{raw}` is not of the form `Name: value`"))?;

    let name = HeaderName::from_bytes(name.trim().as_bytes())
        .with_context(|| format!("invalid header name in `{raw}`"))?;
    let value = HeaderValue::from_bytes(value.trim_start().as_bytes())
        .with_context(|| format!("invalid header value in `{raw}`"))?;
    Ok((name, value))
}

fn build_headers(config: &Config) -> anyhow::Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for raw in &config.headers {
        let (name, value) = parse_header(raw)?;
        headers.append(name, value);
    }

    if let Some(authorization) = &config.authorization {
        let value = HeaderValue::from_bytes(authorization.as_bytes())
            .context("invalid Authorization value")?;
        headers.insert(header::AUTHORIZATION, value);
    }

    Ok(headers)
}

fn exit_code(result: &Result<String, AuthError>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(AuthError::NoAuthHeader) => ExitCode::from(1),
        Err(AuthError::MalformedAuthHeader) => ExitCode::from(2),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "apikey_auth=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::parse();
    let headers = build_headers(&config)?;

    tracing::debug!(count = headers.len(), "Headers collected");

    let result = get_api_key(&headers);
    let code = exit_code(&result);

    if config.json {
        let output = match result {
            Ok(api_key) => Output::Key { api_key },
            Err(err) => Output::Error { error: err.to_string() },
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        match result {
            Ok(api_key) => println!("{api_key}"),
            Err(err) => eprintln!("error: {err}"),
        }
    }

    Ok(code)
}
