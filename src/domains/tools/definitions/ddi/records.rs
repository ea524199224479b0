//! A-record listing tool.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::domains::infoblox::{ClientError, DnsRecord, InfobloxClient};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{
    error_result, parse_arguments, result_to_json, structured_result,
};

/// Parameters for the record listing.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListRecordsParams {
    /// Zone FQDN whose A records should be listed (e.g. "example.com").
    pub zone: String,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct RecordListing {
    pub records: Vec<RecordSummary>,
    pub total: usize,
    pub zone: String,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct RecordSummary {
    pub name: String,
    pub ipv4addr: String,
    #[serde(rename = "ref")]
    pub reference: String,
}

impl From<DnsRecord> for RecordSummary {
    fn from(record: DnsRecord) -> Self {
        Self {
            name: record.name,
            ipv4addr: record.ipv4addr,
            reference: record.reference,
        }
    }
}

/// List the A records of one zone.
pub struct ListRecordsTool;

impl ListRecordsTool {
    pub const NAME: &'static str = "list_records";

    pub const DESCRIPTION: &'static str = "List A records in a specific DNS zone";

    pub async fn list(client: &InfobloxClient, zone: &str) -> Result<RecordListing, ClientError> {
        let records: Vec<RecordSummary> = client
            .get_records(zone)
            .await?
            .into_iter()
            .map(RecordSummary::from)
            .collect();
        Ok(RecordListing {
            total: records.len(),
            records,
            zone: zone.to_string(),
        })
    }

    #[instrument(skip(client), fields(zone = %params.zone))]
    pub async fn execute(params: &ListRecordsParams, client: &InfobloxClient) -> CallToolResult {
        info!("List records tool called");
        match Self::list(client, &params.zone).await {
            Ok(listing) => {
                info!("Found {} record(s) in {}", listing.total, listing.zone);
                structured_result(&listing)
            }
            Err(e) => {
                error!("Record listing for {} failed: {}", params.zone, e);
                error_result(&e.to_string())
            }
        }
    }

    pub async fn http_handler(
        arguments: serde_json::Value,
        client: &InfobloxClient,
    ) -> Result<serde_json::Value, ToolError> {
        let params: ListRecordsParams = parse_arguments(arguments)?;
        Ok(result_to_json(Self::execute(&params, client).await))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListRecordsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn create_route<S>(client: Arc<InfobloxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params: ListRecordsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::ddi::test_support::{WAPI_PATH, client_for};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_records_filters_by_zone() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{WAPI_PATH}/record:a")))
            .and(query_param("zone", "example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"_ref": "record:a/www", "name": "www.example.com", "ipv4addr": "10.0.0.1", "view": "default"}
            ])))
            .mount(&server)
            .await;

        let params = ListRecordsParams {
            zone: "example.com".to_string(),
        };
        let result = ListRecordsTool::execute(&params, &client_for(&server)).await;

        assert_eq!(
            result.structured_content,
            Some(json!({
                "records": [{"name": "www.example.com", "ipv4addr": "10.0.0.1", "ref": "record:a/www"}],
                "total": 1,
                "zone": "example.com"
            }))
        );
    }

    #[tokio::test]
    async fn test_list_records_requires_zone() {
        let server = MockServer::start().await;
        let result = ListRecordsTool::http_handler(json!({}), &client_for(&server)).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));

        let result = ListRecordsTool::http_handler(json!({"zone": 7}), &client_for(&server)).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[tokio::test]
    async fn test_list_records_upstream_status_is_tool_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{WAPI_PATH}/record:a")))
            .respond_with(ResponseTemplate::new(401).set_body_string("Authorization Required"))
            .mount(&server)
            .await;

        let json = ListRecordsTool::http_handler(json!({"zone": "example.com"}), &client_for(&server))
            .await
            .unwrap();
        assert_eq!(json["isError"], true);
        assert!(json["content"][0]["text"]
            .as_str()
            .unwrap()
            .contains("401"));
    }
}
