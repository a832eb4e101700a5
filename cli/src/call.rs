use crate::cli::HttpMethod;
use crate::error::{CliError, Result};
use crate::ui::{self, TerminalNotifier};
use api_client::{
    ApiClient, ApiRequest, ApiResponse, ClientConfig, ErrorContext, InvokeOptions, Method,
};
use serde_json::Value;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct CallArgs {
    pub config_path: Option<String>,
    pub path: String,
    pub method: HttpMethod,
    pub data: Option<String>,
    pub query: Vec<String>,
    pub token: Option<String>,
    pub timeout: Option<f64>,
    pub operation: Option<String>,
    pub resource: Option<String>,
    pub silent: bool,
}

/// Returns whether the call succeeded
pub fn execute(args: CallArgs) -> Result<bool> {
    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;

    rt.block_on(execute_async(args))
}

async fn execute_async(args: CallArgs) -> Result<bool> {
    let config = ClientConfig::load(args.config_path.as_deref())?;
    debug!(backend_url = %config.backend_url, timeout = ?config.timeout_seconds, "configuration loaded");
    if config.backend_url.is_empty() {
        ui::warning_message("BACKEND_URL is not set; the call will fail to connect");
    }

    let client = ApiClient::from_config(&config)?.with_notifier(TerminalNotifier);
    let request = build_request(&args)?;
    let options = build_options(&args)?;

    let response: ApiResponse<Value> = client.invoke(request, &options).await;
    println!("{}", serde_json::to_string_pretty(&response)?);

    if response.is_success() {
        ui::success_message("Request succeeded");
    }
    Ok(response.is_success())
}

fn build_request(args: &CallArgs) -> Result<ApiRequest> {
    let mut request = ApiRequest::new(to_method(args.method), args.path.clone());

    for pair in &args.query {
        let (key, value) = parse_query_pair(pair)?;
        request = request.query(key, value);
    }

    if let Some(data) = &args.data {
        request = request.json(serde_json::from_str(data)?);
    }

    if let Some(token) = &args.token {
        request = request.bearer_token(token.clone());
    }

    Ok(request)
}

fn build_options(args: &CallArgs) -> Result<InvokeOptions> {
    let mut context = ErrorContext::new();
    context.operation = args.operation.clone();
    context.resource = args.resource.clone();
    context.silent = args.silent;

    let mut options = InvokeOptions::new().error_context(context);
    if let Some(seconds) = args.timeout {
        let timeout = Duration::try_from_secs_f64(seconds)
            .ok()
            .filter(|timeout| !timeout.is_zero())
            .ok_or_else(|| {
                CliError::InvalidArgument(format!("timeout must be a positive number of seconds, got {seconds}"))
            })?;
        options = options.timeout(timeout);
    }

    Ok(options)
}

fn parse_query_pair(pair: &str) -> Result<(&str, &str)> {
    pair.split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| CliError::InvalidArgument(format!("query '{pair}' must be key=value")))
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}
