//! constants.rs
//! Fixed protocol identifiers shared by the signer, the client and the map pipeline.

/// Tenant identifier sent with every request (`tenantId` header and body fields).
pub const TENANT_ID: &str = "1528983614213726208";

/// Product mode code announced during domain discovery and login.
pub const PROJECT_TYPE: &str = "android_iot.karcher";

/// Protocol version sent to domain discovery.
pub const PROTOCOL_VERSION: u32 = 1;

pub const APP_VERSION_CODE: u32 = 10001;
pub const APP_VERSION_NAME: &str = "1.0.1";

/// Phone brand announced on login (field-encrypted before sending).
pub const PHONE_BRAND: &str = "xiaomi_mi 9";
/// Phone OS discriminator: 1 = Android.
pub const PHONE_SYS: u32 = 1;

/// Prefix prepended to non e-mail usernames.
pub const PHONE_COUNTRY_PREFIX: &str = "86-";

/// Length of the client generated registration id.
pub const REGISTER_ID_LEN: usize = 19;

/// Length of the per-request nonce (hex characters).
pub const NONCE_LEN: usize = 32;

/// Fixed client identifier: `Android_` followed by the tenant id.
pub fn user_agent() -> String {
    format!("Android_{}", TENANT_ID)
}

/// Default API base URLs per region, used until domain discovery overrides them.
pub mod region_urls {
    pub const EU: &str = "https://eu-appaiot.karcher.com";
    pub const US: &str = "https://us-appaiot.karcher.com";
    pub const CN: &str = "https://api-aiot.karcher.com.cn";
}

/// Endpoint paths relative to the API base URL.
pub mod paths {
    pub const DOMAINS_LIST: &str = "/network-service/domains/list";
    pub const LOGIN: &str = "/user-center/auth/login";
    pub const LOGOUT: &str = "/user-center/auth/logout";
    pub const DEVICES_BY_USER: &str = "/smart-home-service/smartHome/user/getDeviceInfoByUserId/";
    pub const FAMILIES_BY_USER: &str = "/smart-home-service/smartHome/familyInfo/list/";
    pub const CONSUMABLES_BY_FAMILY: &str =
        "/smart-home-service/smartHome/consumablesInfo/getConsumablesInfoByFamilyId/";
    pub const MAP_ACCESS_URL: &str = "/storage-management/storage/aws/getAccessUrl";
}

/// Header names of the signed request envelope.
pub mod headers {
    pub const USER_AGENT: &str = "User-Agent";
    pub const TENANT_ID: &str = "tenantId";
    pub const AUTHORIZATION: &str = "authorization";
    pub const USER_ID: &str = "id";
    pub const SIGN: &str = "sign";
    pub const TS: &str = "ts";
    pub const NONCE: &str = "nonce";
}

/// Map storage layout.
/// `{tenant}/{mode}/{sn}/{DATE_SEGMENT}/map/temp/{PREFIX}_{sn}_{channel}`
pub mod map_storage {
    pub const DATE_SEGMENT: &str = "01-01-2022";
    pub const TEMP_DIR: &str = "map/temp";
    pub const FILE_PREFIX: &str = "0046690461";
    /// `serviceType` requested from the storage service.
    pub const SERVICE_TYPE: u32 = 2;
}

/// Service envelope codes.
pub mod service_codes {
    pub const OK: i64 = 0;
    /// Token missing, expired or rejected.
    pub const ACCESS_DENIED: i64 = 1001;
}
