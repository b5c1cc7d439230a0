use serde::Deserialize;

use crate::constants::map_storage;
use crate::device::DeviceIdentity;
use crate::types::{ClientError, Result};

/// `{tenant}/{mode}/{sn}/01-01-2022/map/temp/0046690461_{sn}_{channel}`
pub fn storage_path(tenant_id: &str, device: &DeviceIdentity, channel: u32) -> String {
    format!(
        "{}/{}/{}/{}/{}/{}_{}_{}",
        tenant_id,
        device.product_mode_code,
        device.serial,
        map_storage::DATE_SEGMENT,
        map_storage::TEMP_DIR,
        map_storage::FILE_PREFIX,
        device.serial,
        channel,
    )
}

/// Result of the access URL request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageAccess {
    pub url: String,
    pub cdn_domain: String,
    pub dir: String,
}

impl StorageAccess {
    /// A non-empty CDN domain wins over the literal URL. Domain and directory
    /// are joined verbatim as `https://{cdnDomain}/{dir}`.
    pub fn download_url(&self) -> Result<String> {
        if !self.cdn_domain.is_empty() {
            return Ok(format!("https://{}/{}", self.cdn_domain, self.dir));
        }
        if self.url.is_empty() {
            return Err(ClientError::MalformedResponse(
                "access response has neither url nor cdnDomain".into(),
            ));
        }
        Ok(self.url.clone())
    }
}
