//! Configuration for the remote CFMS endpoint.

use crate::error::{CfmsError, Result};
use crate::lookup::LookupValidator;
use serde::{Deserialize, Serialize};

/// Bill status page all lookups are issued against.
pub const DEFAULT_ENDPOINT: &str =
    "https://prdcfms.apcfss.in:44300/sap/bc/ui5_ui5/sap/zexp_billstatus/index.html";
/// SAP client number passed as `sap-client`.
pub const DEFAULT_SAP_CLIENT: &str = "350";
/// Bill used to probe a credential during login.
pub const DEFAULT_PROBE_BILL: &str = "2025-0000001";

/// Root of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CfmsConfig {
    /// Base URL of the bill status page, without query string.
    pub endpoint: String,
    pub sap_client: String,
    /// `year-billNo` of the bill requested by the login exchange.
    pub probe_bill: String,
}

impl Default for CfmsConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            sap_client: DEFAULT_SAP_CLIENT.to_string(),
            probe_bill: DEFAULT_PROBE_BILL.to_string(),
        }
    }
}

impl CfmsConfig {
    /// Overrides fields from `CFMS_ENDPOINT`, `CFMS_SAP_CLIENT` and
    /// `CFMS_PROBE_BILL`, looked up through `var`.
    pub fn apply_env_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = var("CFMS_ENDPOINT").filter(|v| !v.is_empty()) {
            self.endpoint = endpoint;
        }
        if let Some(client) = var("CFMS_SAP_CLIENT").filter(|v| !v.is_empty()) {
            self.sap_client = client;
        }
        if let Some(bill) = var("CFMS_PROBE_BILL").filter(|v| !v.is_empty()) {
            self.probe_bill = bill;
        }
    }

    /// Checks that the configuration can produce lookup URLs.
    ///
    /// # Errors
    ///
    /// Returns [`CfmsError::Config`] for a non-http(s) endpoint, an empty SAP
    /// client, or a probe bill that is not a valid `year-billNo`.
    pub fn validate(&self) -> Result<()> {
        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            return Err(CfmsError::config(format!(
                "endpoint must be an http(s) URL: {}",
                self.endpoint
            )));
        }
        if self.endpoint.contains('?') {
            return Err(CfmsError::config("endpoint must not carry a query string"));
        }
        if self.sap_client.is_empty() || !self.sap_client.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CfmsError::config(format!(
                "sap_client must be non-empty and alphanumeric: {:?}",
                self.sap_client
            )));
        }
        let probe = LookupValidator::parse_combined(&self.probe_bill)
            .ok_or_else(|| CfmsError::config(format!("invalid probe_bill: {}", self.probe_bill)))?;
        LookupValidator::validate(&probe.year, &probe.bill_no)
            .map_err(|e| CfmsError::config(format!("invalid probe_bill: {}", e)))?;
        Ok(())
    }
}
