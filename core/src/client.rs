//! client.rs
//! Kärcher Home cloud client.
//!
//! Flow per call: build `ApiRequest` -> sign -> `Transport::send` ->
//! envelope decode. Map retrieval continues with URL resolution, blob
//! download, device-key decryption and the channel-dependent decoder.
//!
//! The client holds no mutable state: endpoints are resolved once at
//! construction and sessions belong to the caller.

use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::config::{ClientConfig, Endpoints};
use crate::constants::{
    headers, map_storage, paths, user_agent, APP_VERSION_CODE, APP_VERSION_NAME, PHONE_BRAND,
    PHONE_SYS, PROJECT_TYPE, PROTOCOL_VERSION, REGISTER_ID_LEN,
};
use crate::crypto::{BlobCipher, FieldCipher, MapKeyDerivation, MapKeyInput, Md5MapKey};
use crate::device::{Device, DeviceIdentity};
use crate::envelope::{decode_field, decode_response, ErrorCodeTable};
use crate::map::{decode_map, storage_path, MapChannel, MapData, StorageAccess};
use crate::session::{Domains, Session};
use crate::signing::{sign, ApiRequest, Method, RequestBuilder, SigningContext};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Transport};
use crate::types::{ClientError, Result};
use crate::utils::{normalize_username, random_string};

pub struct KarcherHome<T: Transport = HttpTransport> {
    config: ClientConfig,
    endpoints: Endpoints,
    transport: T,
    cipher: FieldCipher,
    codes: ErrorCodeTable,
    map_keys: Box<dyn MapKeyDerivation>,
}

impl KarcherHome<HttpTransport> {
    /// Build the HTTP transport from `config` and run domain discovery.
    pub fn connect(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::from_config(&config)?;
        Self::connect_with(config, transport)
    }
}

impl<T: Transport> KarcherHome<T> {
    /// Resolve endpoints through domain discovery on `transport`.
    pub fn connect_with(config: ClientConfig, transport: T) -> Result<Self> {
        let initial = Endpoints::new(config.initial_base_url());
        let mut client = Self::with_endpoints(config, transport, initial)?;

        let domains = client.get_urls()?;
        if !domains.app_api.is_empty() {
            client.endpoints.api_base = domains.app_api.clone();
        }
        if !domains.mqtt.is_empty() {
            client.endpoints.mqtt = Some(domains.mqtt.clone());
        }
        debug!(api = %client.endpoints.api_base, "endpoints resolved");

        Ok(client)
    }

    /// Use fixed endpoints, skipping discovery.
    pub fn with_endpoints(config: ClientConfig, transport: T, endpoints: Endpoints) -> Result<Self> {
        let cipher = config.field_cipher()?;
        let codes = ErrorCodeTable::new(config.access_denied_codes.iter().copied());
        Ok(Self {
            config,
            endpoints,
            transport,
            cipher,
            codes,
            map_keys: Box::new(Md5MapKey),
        })
    }

    /// Replace the map key derivation.
    pub fn with_map_key_derivation(mut self, derivation: impl MapKeyDerivation + 'static) -> Self {
        self.map_keys = Box::new(derivation);
        self
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn field_cipher(&self) -> &FieldCipher {
        &self.cipher
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Assemble the full header set and send a signed request.
    fn send(&self, session: Option<&Session>, request: &ApiRequest) -> Result<HttpResponse> {
        if request.requires_auth() && !session.is_some_and(Session::is_authorized) {
            return Err(ClientError::not_authorized());
        }

        let auth_token = session.map(|s| s.auth_token.as_str()).unwrap_or("");
        let ctx = SigningContext::fresh(auth_token);
        let http = self.build_http_request(session, request, &ctx);

        debug!(method = %request.method(), path = request.path(), "api request");
        self.transport.send(&http)
    }

    /// Signed `HttpRequest` for a given signing context.
    pub fn build_http_request(
        &self,
        session: Option<&Session>,
        request: &ApiRequest,
        ctx: &SigningContext,
    ) -> HttpRequest {
        let mut hdrs: Vec<(String, String)> = vec![(headers::USER_AGENT.into(), user_agent())];
        if let Some(s) = session {
            if !s.auth_token.is_empty() {
                hdrs.push((headers::AUTHORIZATION.into(), s.auth_token.clone()));
            }
            if !s.user_id.is_empty() {
                hdrs.push((headers::USER_ID.into(), s.user_id.clone()));
            }
        }
        hdrs.push((headers::TENANT_ID.into(), self.config.tenant_id.clone()));

        let signed = sign(request, ctx);
        for (name, value) in signed.to_pairs() {
            hdrs.push((name.into(), value));
        }

        HttpRequest {
            method: request.method(),
            url: self.endpoints.url(request.path()),
            headers: hdrs,
            query: request.query().to_vec(),
            body: request.json_body(),
        }
    }

    /// Discover region API and MQTT domains. Unauthenticated.
    pub fn get_urls(&self) -> Result<Domains> {
        let req = RequestBuilder::get(paths::DOMAINS_LIST)
            .query("tenantId", &self.config.tenant_id)
            .query("productModeCode", PROJECT_TYPE)
            .query("version", PROTOCOL_VERSION)
            .build();

        let resp = self.send(None, &req)?;
        match decode_field(&resp, &self.codes, "domain", &self.cipher)? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Domains::default()),
        }
    }

    /// Log in. Usernames that are not e-mail addresses get the phone country prefix.
    pub fn login(&self, username: &str, password: &str, register_id: Option<&str>) -> Result<Session> {
        let register_id = match register_id {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => random_string(REGISTER_ID_LEN),
        };
        let username = normalize_username(username);

        let req = RequestBuilder::post(paths::LOGIN)
            .field("tenantId", self.config.tenant_id.as_str())
            .field("lang", self.config.language.to_string())
            .null_field("token")
            .null_field("userId")
            .field("password", self.cipher.encrypt(password))
            .field("username", self.cipher.encrypt(&username))
            .null_field("authcode")
            .field("projectType", PROJECT_TYPE)
            .field("versionCode", APP_VERSION_CODE)
            .field("versionName", APP_VERSION_NAME)
            .field("phoneBrand", self.cipher.encrypt(PHONE_BRAND))
            .field("phoneSys", PHONE_SYS)
            .field("noticeSetting", json!({
                "andIpad": register_id,
                "android": register_id,
            }))
            .build();

        let resp = self.send(None, &req)?;
        let result = decode_response(&resp, &self.codes)?
            .ok_or_else(|| ClientError::MalformedResponse("empty login result".into()))?;

        let mut session: Session = serde_json::from_value(result)?;
        session.register_id = register_id;
        debug!(user_id = %session.user_id, "logged in");
        Ok(session)
    }

    /// End the session and reset it. An unauthorized session is reset without
    /// any network call. On a failed logout call the session is left untouched.
    pub fn logout(&self, session: &mut Session) -> Result<()> {
        if !session.is_authorized() {
            session.reset();
            return Ok(());
        }

        let req = RequestBuilder::post(paths::LOGOUT).authenticated().build();
        let resp = self.send(Some(session), &req)?;
        decode_response(&resp, &self.codes)?;
        session.reset();
        Ok(())
    }

    pub fn get_devices(&self, session: &Session) -> Result<Vec<Device>> {
        let req = RequestBuilder::get(format!("{}{}", paths::DEVICES_BY_USER, session.user_id))
            .authenticated()
            .build();

        let resp = self.send(Some(session), &req)?;
        match decode_response(&resp, &self.codes)? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn get_families(&self, session: &Session) -> Result<Value> {
        let req = RequestBuilder::get(format!("{}{}", paths::FAMILIES_BY_USER, session.user_id))
            .authenticated()
            .build();

        let resp = self.send(Some(session), &req)?;
        Ok(decode_response(&resp, &self.codes)?.unwrap_or(Value::Null))
    }

    pub fn get_consumables(&self, session: &Session, family_id: &str) -> Result<Value> {
        let req = RequestBuilder::get(format!("{}{}", paths::CONSUMABLES_BY_FAMILY, family_id))
            .authenticated()
            .build();

        let resp = self.send(Some(session), &req)?;
        Ok(decode_response(&resp, &self.codes)?.unwrap_or(Value::Null))
    }

    /// Ask the storage service where the map for `channel` can be downloaded.
    pub fn resolve_map_url(&self, session: &Session, device: &DeviceIdentity, channel: u32) -> Result<String> {
        let dir = storage_path(&self.config.tenant_id, device, channel);

        let req = RequestBuilder::post(paths::MAP_ACCESS_URL)
            .field("dir", dir)
            .field("countryCode", session.country_code())
            .field("serviceType", map_storage::SERVICE_TYPE)
            .field("tenantId", self.config.tenant_id.as_str())
            .authenticated()
            .build();

        let resp = self.send(Some(session), &req)?;
        let result = decode_response(&resp, &self.codes)?
            .ok_or_else(|| ClientError::MalformedResponse("empty access url result".into()))?;
        let access: StorageAccess = serde_json::from_value(result)?;
        access.download_url()
    }

    /// Unauthenticated GET carrying only the client User-Agent.
    pub fn download(&self, url: &str) -> Result<Vec<u8>> {
        let http = HttpRequest {
            method: Method::Get,
            url: url.to_string(),
            headers: vec![(headers::USER_AGENT.into(), user_agent())],
            query: Vec::new(),
            body: None,
        };

        let resp = self.transport.send(&http)?;
        if resp.status != 200 {
            warn!(status = resp.status, "map download failed");
            return Err(ClientError::Transport { status: resp.status });
        }
        Ok(resp.body)
    }

    /// Decrypt a downloaded blob with the device key.
    pub fn decrypt_map(&self, device: &DeviceIdentity, blob: &[u8]) -> Result<Vec<u8>> {
        let key = self.map_keys.derive(&MapKeyInput {
            serial: &device.serial,
            mac: &device.mac,
            product_id: &device.product_id,
        });
        BlobCipher::new(key)
            .open(blob)
            .map_err(|e| ClientError::MapDecrypt(e.to_string()))
    }

    /// Fetch, decrypt and decode one map channel.
    pub fn get_map_data(&self, session: &Session, device: &DeviceIdentity, channel: u32) -> Result<MapData> {
        let url = self.resolve_map_url(session, device, channel)?;
        let blob = self.download(&url)?;
        debug!(channel, len = blob.len(), "map blob downloaded");

        let plain = self.decrypt_map(device, &blob)?;
        decode_map(MapChannel::from(channel), &plain)
    }
}
