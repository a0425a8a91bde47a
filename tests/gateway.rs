use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use characters_graphql::{schema, Characters, Context, GraphQLHandler};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn handler() -> GraphQLHandler {
    GraphQLHandler::new(schema(), Context::new(Characters::sample().unwrap()))
}

// Proxy integration event as Api Gateway delivers it to the function.
fn event(http_method: &str, query: Value, multi_value_query: Value, body: Value) -> ApiGatewayProxyRequest {
    serde_json::from_value(json!({
        "resource": "/graphql",
        "path": "/graphql",
        "httpMethod": http_method,
        "headers": {
            "Accept": "application/json",
            "Content-Type": "application/json",
            "Host": "abcdef1234.execute-api.eu-central-1.amazonaws.com",
            "User-Agent": "curl/7.68.0",
            "X-Forwarded-For": "203.0.113.7",
            "X-Forwarded-Port": "443",
            "X-Forwarded-Proto": "https"
        },
        "multiValueHeaders": {
            "Accept": ["application/json"],
            "Content-Type": ["application/json"],
            "Host": ["abcdef1234.execute-api.eu-central-1.amazonaws.com"],
            "User-Agent": ["curl/7.68.0"],
            "X-Forwarded-For": ["203.0.113.7"],
            "X-Forwarded-Port": ["443"],
            "X-Forwarded-Proto": ["https"]
        },
        "queryStringParameters": query,
        "multiValueQueryStringParameters": multi_value_query,
        "pathParameters": null,
        "stageVariables": null,
        "requestContext": {
            "accountId": "123456789012",
            "resourceId": "us4z18",
            "stage": "prod",
            "requestId": "41b45ea3-70b5-11e6-b7bd-69b5aaebc7d9",
            "requestTime": "19/Oct/2026:09:14:02 +0000",
            "requestTimeEpoch": 1792401242000i64,
            "identity": {
                "cognitoIdentityPoolId": null,
                "accountId": null,
                "cognitoIdentityId": null,
                "caller": null,
                "apiKey": null,
                "sourceIp": "203.0.113.7",
                "accessKey": null,
                "cognitoAuthenticationType": null,
                "cognitoAuthenticationProvider": null,
                "userArn": null,
                "userAgent": "curl/7.68.0",
                "user": null
            },
            "path": "/prod/graphql",
            "resourcePath": "/graphql",
            "httpMethod": http_method,
            "apiId": "abcdef1234",
            "protocol": "HTTP/1.1",
            "domainName": "abcdef1234.execute-api.eu-central-1.amazonaws.com",
            "authorizer": {}
        },
        "body": body,
        "isBase64Encoded": false
    }))
    .unwrap()
}

fn body(response: &ApiGatewayProxyResponse) -> Value {
    serde_json::from_str(response.body.as_deref().unwrap()).unwrap()
}

#[test]
fn post_event_is_answered() {
    let req = event(
        "POST",
        Value::Null,
        Value::Null,
        json!(r#"{"query": "{ characters(filter: {status: \"Dead\"}) { id } }"}"#),
    );
    let response = handler().handle(req);
    assert_eq!(200, response.status_code);
    assert_eq!(
        json!({"data": {"characters": [
            {"id": "8"}, {"id": "9"}, {"id": "10"},
            {"id": "11"}, {"id": "12"}, {"id": "16"},
        ]}}),
        body(&response)
    );
}

#[tokio::test]
async fn get_event_reads_multi_value_parameters() {
    let query = r#"{ characters(filter: {names: ["Morty", "Rick"], status: "Alive"}) { name } }"#;
    let req = event(
        "GET",
        json!({ "query": query }),
        json!({ "query": [query] }),
        Value::Null,
    );
    let response = handler().call(req).await;
    assert_eq!(200, response.status_code);
    assert_eq!(
        Some(&"application/json".to_string()),
        response.headers.get("content-type")
    );
    assert_eq!(
        json!({"data": {"characters": [
            {"name": "Rick Sanchez"},
            {"name": "Morty Smith"},
            {"name": "Antenna Morty"},
        ]}}),
        body(&response)
    );
}

#[tokio::test]
async fn bare_get_event_serves_playground() {
    let req = event("GET", Value::Null, Value::Null, Value::Null);
    let response = handler().endpoint("/prod/graphql").call(req).await;
    assert_eq!(200, response.status_code);
    assert_eq!(
        Some(&"text/html".to_string()),
        response.headers.get("content-type")
    );
    assert!(response.body.unwrap().contains("/prod/graphql"));
}

#[test]
fn put_event_is_rejected() {
    let req = event(
        "PUT",
        Value::Null,
        Value::Null,
        json!(r#"{"query": "{ characters { id } }"}"#),
    );
    let response = handler().debug(true).handle(req);
    assert_eq!(400, response.status_code);
    assert_eq!(
        json!({"errors": [{"message": "Method PUT is not allowed"}]}),
        body(&response)
    );
}
