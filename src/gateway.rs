use std::collections::HashMap;
use std::convert::TryFrom;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use failure::{Error as Failure, Fail};
use http::{header, method::Method, status::StatusCode};
use juniper::http::{GraphQLRequest, GraphQLResponse};
use juniper::InputValue;
use log::{debug, error, warn};
use maplit::hashmap;
use serde::Serialize;
use serde_derive::Deserialize;

use crate::context::Context;
use crate::types::Schema;

const QUERY_KEYS: &[&str] = &["query", "operationName", "operation_name", "variables"];

#[derive(Debug, Fail)]
enum RequestError {
    #[fail(display = "Unknown method {:?}", _0)]
    UnknownMethod(String),
    #[fail(display = "Method {} is not allowed", _0)]
    InvalidMethod(Method),
    #[fail(display = "Missing query argument")]
    MissingQuery,
    #[fail(display = "Missing post body")]
    MissingPostBody,
    #[fail(display = "Invalid body")]
    InvalidBody,
    #[fail(display = "Prohibit extra field {:?}", _0)]
    ProhibitExtraField(String),
    #[fail(display = "Query parameter must not occur more than once")]
    MultipleQueryParameter,
    #[fail(display = "Operation name parameter must not occur more than once")]
    MultipleOperationNameParameter,
    #[fail(display = "Variables parameter must not occur more than once")]
    MultipleVariablesParameter,
    #[fail(display = "Invalid variables parameter")]
    InvalidVariablesParameter,
}

///
/// The parts of an Api Gateway proxy request the handler reads
///
#[derive(Clone, Copy, Debug)]
pub struct ProxyRequest<'r> {
    pub http_method: Option<&'r str>,
    pub query_string_parameters: &'r HashMap<String, Vec<String>>,
    pub body: Option<&'r str>,
}

impl<'r> From<&'r ApiGatewayProxyRequest> for ProxyRequest<'r> {
    fn from(req: &'r ApiGatewayProxyRequest) -> Self {
        Self {
            http_method: req.http_method.as_deref(),
            query_string_parameters: &req.multi_value_query_string_parameters,
            body: req.body.as_deref(),
        }
    }
}

impl<'r> ProxyRequest<'r> {
    // a bare GET comes from a browser opening the endpoint
    fn wants_playground(&self) -> bool {
        self.query_string_parameters.is_empty() && self.http_method == Some("GET")
    }
}

///
/// GraphQL operations carried by one request, a POST body may hold a batch
///
#[derive(Debug, Deserialize, PartialEq)]
#[serde(untagged)]
enum Operations {
    One(GraphQLRequest),
    Many(Vec<GraphQLRequest>),
}

impl<'r> TryFrom<ProxyRequest<'r>> for Operations {
    type Error = Failure;

    fn try_from(req: ProxyRequest<'r>) -> Result<Self, Self::Error> {
        let raw_method = req.http_method.unwrap_or_default();
        let method = Method::try_from(raw_method)
            .map_err(|_| RequestError::UnknownMethod(raw_method.to_owned()))?;
        match method {
            Method::GET => Ok(Operations::One(from_query_string(
                req.query_string_parameters,
            )?)),
            Method::POST => Ok(from_body(req.body)?),
            other => Err(RequestError::InvalidMethod(other).into()),
        }
    }
}

impl Operations {
    fn names(&self) -> Vec<Option<&str>> {
        match self {
            Operations::One(op) => vec![op.operation_name()],
            Operations::Many(ops) => ops.iter().map(GraphQLRequest::operation_name).collect(),
        }
    }

    /// `200` only when every operation succeeded
    fn execute(&self, schema: &Schema, context: &Context) -> ApiGatewayProxyResponse {
        match self {
            Operations::One(op) => {
                let response = op.execute(schema, context);
                reply_json(status_for(response.is_ok()), &response)
            }
            Operations::Many(ops) => {
                let responses: Vec<GraphQLResponse> =
                    ops.iter().map(|op| op.execute(schema, context)).collect();
                let ok = responses.iter().all(GraphQLResponse::is_ok);
                reply_json(status_for(ok), &responses)
            }
        }
    }
}

fn status_for(ok: bool) -> StatusCode {
    if ok {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    }
}

fn from_query_string(params: &HashMap<String, Vec<String>>) -> Result<GraphQLRequest, Failure> {
    if let Some(unknown) = params.keys().find(|key| !QUERY_KEYS.contains(&key.as_str())) {
        return Err(RequestError::ProhibitExtraField(unknown.to_owned()).into());
    }
    let query = single_value(params, &["query"], RequestError::MultipleQueryParameter)?
        .ok_or(RequestError::MissingQuery)?;
    let operation_name = single_value(
        params,
        &["operationName", "operation_name"],
        RequestError::MultipleOperationNameParameter,
    )?;
    let variables = single_value(params, &["variables"], RequestError::MultipleVariablesParameter)?
        .map(|raw| {
            serde_json::from_str::<InputValue>(raw)
                .map_err(|_| RequestError::InvalidVariablesParameter)
        })
        .transpose()?;
    Ok(GraphQLRequest::new(
        query.to_owned(),
        operation_name.map(str::to_owned),
        variables,
    ))
}

// At most one value across all the given spellings of a parameter.
fn single_value<'p>(
    params: &'p HashMap<String, Vec<String>>,
    keys: &[&str],
    repeated: RequestError,
) -> Result<Option<&'p str>, RequestError> {
    let mut values = keys.iter().filter_map(|key| params.get(*key)).flatten();
    match (values.next(), values.next()) {
        (Some(_), Some(_)) => Err(repeated),
        (first, _) => Ok(first.map(String::as_str)),
    }
}

fn from_body(body: Option<&str>) -> Result<Operations, Failure> {
    let body = body.ok_or(RequestError::MissingPostBody)?;
    match serde_json::from_str::<Operations>(body) {
        Ok(Operations::Many(ref ops)) if ops.is_empty() => Err(RequestError::InvalidBody.into()),
        Ok(operations) => Ok(operations),
        Err(err) => {
            debug!("could not parse POST body: {}", err);
            Err(RequestError::InvalidBody.into())
        }
    }
}

fn reply(status_code: StatusCode, content_type: &str, body: String) -> ApiGatewayProxyResponse {
    ApiGatewayProxyResponse {
        status_code: i64::from(status_code.as_u16()),
        multi_value_headers: HashMap::with_capacity(0),
        headers: hashmap! {header::CONTENT_TYPE.to_string() => content_type.to_owned()},
        is_base64_encoded: Some(false),
        body: Some(body),
    }
}

fn reply_json<T: Serialize>(status_code: StatusCode, value: &T) -> ApiGatewayProxyResponse {
    match serde_json::to_string(value) {
        Ok(body) => reply(status_code, "application/json", body),
        Err(err) => {
            error!("could not serialize GraphQL response: {}", err);
            reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                "application/json",
                r#"{"errors":[{"message":"Internal Server Error"}]}"#.into(),
            )
        }
    }
}

/// Future returned by [`GraphQLHandler::call`]
pub type HandlerFuture = Pin<Box<dyn Future<Output = ApiGatewayProxyResponse> + Send>>;

///
/// Api Gateway handler serving the characters schema
///
/// GET takes `query`, `operationName` and `variables` from the query string, POST takes a
/// single request or a batch as JSON body. A bare GET gets the GraphQL Playground.
/// Requests that cannot be read are answered with `400`; in debug mode the body names the
/// cause, otherwise it only says `Bad Request`.
///
#[derive(Clone)]
pub struct GraphQLHandler {
    schema: Arc<Schema>,
    context: Arc<Context>,
    endpoint: Arc<str>,
    debug: bool,
}

impl GraphQLHandler {
    pub fn new(schema: Schema, context: Context) -> Self {
        Self {
            schema: Arc::new(schema),
            context: Arc::new(context),
            endpoint: Arc::from("/graphql"),
            debug: false,
        }
    }

    /// URL the Playground page posts its queries to
    pub fn endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = Arc::from(endpoint);
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn handle(&self, req: ApiGatewayProxyRequest) -> ApiGatewayProxyResponse {
        self.respond(ProxyRequest::from(&req))
    }

    pub fn respond(&self, req: ProxyRequest<'_>) -> ApiGatewayProxyResponse {
        if req.wants_playground() {
            return reply(
                StatusCode::OK,
                "text/html",
                juniper::http::playground::playground_source(&self.endpoint),
            );
        }
        match Operations::try_from(req) {
            Ok(operations) => {
                debug!("executing operations {:?}", operations.names());
                operations.execute(&self.schema, &self.context)
            }
            Err(err) => {
                warn!("rejected GraphQL request: {}", err);
                self.reject(&err)
            }
        }
    }

    fn reject(&self, err: &Failure) -> ApiGatewayProxyResponse {
        let message = if self.debug {
            err.to_string()
        } else {
            "Bad Request".to_string()
        };
        reply_json(
            StatusCode::BAD_REQUEST,
            &serde_json::json!({ "errors": [{ "message": message }] }),
        )
    }

    pub fn call(&self, req: ApiGatewayProxyRequest) -> HandlerFuture {
        let handler = self.clone();
        Box::pin(async move { handler.handle(req) })
    }
}
