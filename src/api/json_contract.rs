use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::OverlayConfig;

pub const OVERLAY_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: OverlayConfig,
}

impl OverlayConfig {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = OverlayConfigJsonContractV1 {
            schema_version: OVERLAY_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize overlay config contract v1: {e}"))
        })
    }

    /// Parses either a bare config object or a versioned contract payload.
    ///
    /// The parsed config is validated before it is returned.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse overlay config json: {e}"))
        })?;

        // Every config field has a default, so an envelope would also parse as
        // a bare config; dispatch on the version key instead.
        let config = if value.get("schema_version").is_some() {
            let payload: OverlayConfigJsonContractV1 =
                serde_json::from_value(value).map_err(|e| {
                    ChartError::InvalidData(format!(
                        "failed to parse overlay config json payload: {e}"
                    ))
                })?;
            if payload.schema_version != OVERLAY_CONFIG_JSON_SCHEMA_V1 {
                return Err(ChartError::InvalidData(format!(
                    "unsupported overlay config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        } else {
            serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse overlay config json: {e}"))
            })?
        };

        config.validate()?;
        Ok(config)
    }
}
