// src/store/client.rs
//! HTTP client for the hosted table store.

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{debug, error, info};

use super::types::{CreateRecordRequest, CreatedRecord, ImportOutcome, StoreResponse};
use crate::config::StoreConfig;
use crate::convert::Conversion;
use crate::types::FieldMap;

pub struct TableStoreClient {
    client: reqwest::Client,
    base_url: String,
    app_token: String,
    access_token: String,
}

impl TableStoreClient {
    pub fn new(config: &StoreConfig) -> Result<Self> {
        if config.app_token.is_empty() || config.access_token.is_empty() {
            anyhow::bail!("Table store app token and access token must be configured");
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            app_token: config.app_token.clone(),
            access_token: config.access_token.clone(),
        })
    }

    pub fn records_url(&self, table_id: &str) -> String {
        format!(
            "{}/bitable/v1/apps/{}/tables/{}/records",
            self.base_url, self.app_token, table_id
        )
    }

    /// Creates one record and returns its id.
    pub async fn create_record(&self, table_id: &str, fields: &FieldMap) -> Result<String> {
        let url = self.records_url(table_id);
        info!("Creating record with {} fields in table {}", fields.len(), table_id);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&CreateRecordRequest { fields })
            .send()
            .await
            .with_context(|| format!("Failed to POST to {}", url))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .context("Failed to read response text")?;
        debug!("Table store response ({}): {}", status, response_text);

        if !status.is_success() {
            error!("Table store error response: {}", response_text);
            anyhow::bail!("Table store returned error status {}: {}", status, response_text)
        }

        parse_create_response(&response_text)
    }

    /// Sends a converted document to `table_id`.
    pub async fn import(&self, table_id: &str, conversion: &Conversion) -> Result<ImportOutcome> {
        let record_id = self
            .create_record(table_id, &conversion.record.to_fields())
            .await
            .with_context(|| format!("Failed to import {}", conversion.document_type))?;

        Ok(ImportOutcome {
            document_type: conversion.document_type,
            candidate_name: conversion.record.candidate_name().to_string(),
            table_id: table_id.to_string(),
            record_id,
            imported_at: Utc::now(),
        })
    }
}

/// Checks the response envelope of a create call and extracts the record id.
pub fn parse_create_response(response_text: &str) -> Result<String> {
    let response: StoreResponse<CreatedRecord> = serde_json::from_str(response_text)
        .with_context(|| format!("Failed to parse table store response: {}", response_text))?;

    if response.code != 0 {
        anyhow::bail!("Failed to create record: {} (code {})", response.msg, response.code)
    }

    response
        .data
        .map(|data| data.record.record_id)
        .context("Table store response has no record")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> StoreConfig {
        StoreConfig {
            base_url: "https://store.example.com/open-apis/".to_string(),
            app_token: "app123".to_string(),
            access_token: "token".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_records_url() {
        let client = TableStoreClient::new(&config()).unwrap();
        assert_eq!(
            client.records_url("tbl456"),
            "https://store.example.com/open-apis/bitable/v1/apps/app123/tables/tbl456/records"
        );
    }

    #[test]
    fn test_requires_tokens() {
        let config = StoreConfig {
            access_token: String::new(),
            ..config()
        };
        assert!(TableStoreClient::new(&config).is_err());
    }

    #[test]
    fn test_parse_success() {
        let text = r#"{"code":0,"msg":"success","data":{"record":{"record_id":"recABC","fields":{"候補者名":"山田太郎"}}}}"#;
        assert_eq!(parse_create_response(text).unwrap(), "recABC");

        // only the record id is read back
        let text = r#"{"code":0,"data":{"record":{"record_id":"recDEF"}}}"#;
        assert_eq!(parse_create_response(text).unwrap(), "recDEF");
    }

    #[test]
    fn test_parse_failures() {
        let err = parse_create_response(r#"{"code":1254045,"msg":"FieldNameNotFound"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("FieldNameNotFound"));

        assert!(parse_create_response(r#"{"code":0,"msg":"success"}"#).is_err());
        assert!(parse_create_response("<html>").is_err());
    }

    #[test]
    fn test_request_body_shape() {
        let mut fields = FieldMap::new();
        fields.insert("候補者名".to_string(), "山田太郎".into());
        fields.insert("会社数".to_string(), 2.into());
        let body = serde_json::to_value(CreateRecordRequest { fields: &fields }).unwrap();
        assert_eq!(body, serde_json::json!({"fields": {"候補者名": "山田太郎", "会社数": 2}}));
    }
}
