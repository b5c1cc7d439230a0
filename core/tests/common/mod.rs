//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::Write;
use std::sync::Mutex;

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockEncryptMut, KeyIvInit};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use flate2::{write::ZlibEncoder, Compression};
use serde_json::{json, Value};

use karcher_core::client::KarcherHome;
use karcher_core::config::{ClientConfig, Endpoints};
use karcher_core::crypto::{MapKeyDerivation, MapKeyInput, Md5MapKey};
use karcher_core::device::DeviceIdentity;
use karcher_core::transport::{HttpRequest, HttpResponse, Transport};
use karcher_core::types::{ClientError, Result};

pub const TEST_KEY_HEX: &str = "00112233445566778899aabbccddeeff";
pub const TEST_BASE: &str = "https://api.test";

/// Transport replaying canned responses in order and recording every request.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(responses: impl IntoIterator<Item = HttpResponse>) -> Self {
        let mock = Self::new();
        for r in responses {
            mock.push(r);
        }
        mock
    }

    pub fn push(&self, response: HttpResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ClientError::Network("no canned response".into()))
    }
}

/// Route client logs to the test harness; `RUST_LOG=karcher_core=debug` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn test_config() -> ClientConfig {
    ClientConfig::default()
        .with_field_key(TEST_KEY_HEX)
        .with_base_url(TEST_BASE)
}

pub fn test_client(mock: MockTransport) -> KarcherHome<MockTransport> {
    KarcherHome::with_endpoints(test_config(), mock, Endpoints::new(TEST_BASE)).unwrap()
}

pub fn envelope(code: i64, msg: &str, result: Option<Value>) -> HttpResponse {
    let mut body = json!({ "code": code, "msg": msg });
    if let Some(r) = result {
        body["result"] = r;
    }
    HttpResponse::ok_json(&body)
}

pub fn ok(result: Value) -> HttpResponse {
    envelope(0, "success", Some(result))
}

pub fn test_device() -> DeviceIdentity {
    DeviceIdentity::new("SN0001", "aa:bb:cc:dd:ee:ff", "pid-42", "rc-7")
}

pub fn zlib(data: &[u8]) -> Vec<u8> {
    let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
    enc.write_all(data).unwrap();
    enc.finish().unwrap()
}

/// Produce a blob the way the storage service serves it for `device`.
pub fn seal_map_blob(device: &DeviceIdentity, plain: &[u8]) -> Vec<u8> {
    let key = Md5MapKey.derive(&MapKeyInput {
        serial: &device.serial,
        mac: &device.mac,
        product_id: &device.product_id,
    });
    let ct = cbc::Encryptor::<aes::Aes128>::new(&key.key.into(), &key.iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(&zlib(plain));
    STANDARD.encode(ct).into_bytes()
}

pub mod maps {
    use karcher_core::map::proto::*;
    use prost::Message;

    pub fn point(x: f32, y: f32) -> DevicePointInfo {
        DevicePointInfo { x, y }
    }

    /// 4x3 grid: border walls, floor inside, one room cell.
    pub fn sample_robot_map() -> RobotMap {
        #[rustfmt::skip]
        let cells = vec![
            255, 255, 255, 255,
            255, 127,  10, 255,
            255, 255, 255, 255,
        ];

        RobotMap {
            map_type: 1,
            map_ext_info: Some(MapExtInfo { task_begin_date: 1_700_000_000, map_upload_date: 1_700_000_100 }),
            map_head: Some(MapHeadInfo {
                map_head_id: 77,
                size_x: 4,
                size_y: 3,
                min_x: -1.0,
                min_y: -0.5,
                max_x: 1.0,
                max_y: 1.0,
                resolution: 0.5,
            }),
            map_data: Some(MapDataInfo { map_data: cells }),
            history_pose: Some(DeviceHistoryPoseInfo {
                pose_id: 3,
                points: vec![point(0.0, 0.0), point(0.25, 0.0), point(0.25, 0.25)],
            }),
            charge_station: Some(DevicePoseDataInfo { x: -0.75, y: 0.0, phi: 0.0 }),
            current_pose: Some(DeviceCurrentPoseInfo { pose_id: 3, update: 1, x: 0.25, y: 0.25, phi: 1.57 }),
            virtual_walls: vec![DeviceAreaDataInfo {
                status: 1,
                area_type: 2,
                area_index: 0,
                points: vec![point(0.0, -0.5), point(0.0, 1.0)],
            }],
            areas_info: vec![DeviceAreaDataInfo {
                status: 1,
                area_type: 3,
                area_index: 1,
                points: vec![point(0.0, 0.0), point(0.5, 0.0), point(0.5, 0.5), point(0.0, 0.5)],
            }],
            room_data_info: vec![RoomDataInfo {
                room_id: 10,
                room_name: "Kitchen".into(),
                room_type_id: 2,
                outline: vec![point(0.0, 0.0), point(0.5, 0.0), point(0.5, 0.5)],
                clean_state: 0,
            }],
            objects: vec![ObjectDataInfo {
                object_id: 5,
                object_type_id: 9,
                object_name: "sock".into(),
                confirm: 1,
                x: 0.1,
                y: 0.2,
            }],
        }
    }

    pub fn sample_map_bytes() -> Vec<u8> {
        sample_robot_map().encode_to_vec()
    }
}
