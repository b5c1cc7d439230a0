//! map/proto.rs
//! Protobuf messages of the robot map blob (channels 1 and 2).
//!
//! Tag numbers are the wire contract; field names are ours.

use prost::Message;

#[derive(Clone, PartialEq, Message)]
pub struct RobotMap {
    #[prost(uint32, tag = "1")]
    pub map_type: u32,
    #[prost(message, optional, tag = "2")]
    pub map_ext_info: Option<MapExtInfo>,
    #[prost(message, optional, tag = "3")]
    pub map_head: Option<MapHeadInfo>,
    #[prost(message, optional, tag = "4")]
    pub map_data: Option<MapDataInfo>,
    #[prost(message, optional, tag = "6")]
    pub history_pose: Option<DeviceHistoryPoseInfo>,
    #[prost(message, optional, tag = "7")]
    pub charge_station: Option<DevicePoseDataInfo>,
    #[prost(message, optional, tag = "8")]
    pub current_pose: Option<DeviceCurrentPoseInfo>,
    #[prost(message, repeated, tag = "9")]
    pub virtual_walls: Vec<DeviceAreaDataInfo>,
    #[prost(message, repeated, tag = "10")]
    pub areas_info: Vec<DeviceAreaDataInfo>,
    #[prost(message, repeated, tag = "12")]
    pub room_data_info: Vec<RoomDataInfo>,
    #[prost(message, repeated, tag = "15")]
    pub objects: Vec<ObjectDataInfo>,
}

#[derive(Clone, PartialEq, Message)]
pub struct MapExtInfo {
    #[prost(uint32, tag = "1")]
    pub task_begin_date: u32,
    #[prost(uint32, tag = "2")]
    pub map_upload_date: u32,
}

#[derive(Clone, PartialEq, Message)]
pub struct MapHeadInfo {
    #[prost(uint32, tag = "1")]
    pub map_head_id: u32,
    #[prost(uint32, tag = "2")]
    pub size_x: u32,
    #[prost(uint32, tag = "3")]
    pub size_y: u32,
    #[prost(float, tag = "4")]
    pub min_x: f32,
    #[prost(float, tag = "5")]
    pub min_y: f32,
    #[prost(float, tag = "6")]
    pub max_x: f32,
    #[prost(float, tag = "7")]
    pub max_y: f32,
    #[prost(float, tag = "8")]
    pub resolution: f32,
}

/// Row-major occupancy cells, `size_x * size_y` bytes.
#[derive(Clone, PartialEq, Message)]
pub struct MapDataInfo {
    #[prost(bytes = "vec", tag = "1")]
    pub map_data: Vec<u8>,
}

#[derive(Clone, PartialEq, Message)]
pub struct DevicePointInfo {
    #[prost(float, tag = "1")]
    pub x: f32,
    #[prost(float, tag = "2")]
    pub y: f32,
}

#[derive(Clone, PartialEq, Message)]
pub struct DeviceHistoryPoseInfo {
    #[prost(uint32, tag = "1")]
    pub pose_id: u32,
    #[prost(message, repeated, tag = "2")]
    pub points: Vec<DevicePointInfo>,
}

#[derive(Clone, PartialEq, Message)]
pub struct DevicePoseDataInfo {
    #[prost(float, tag = "1")]
    pub x: f32,
    #[prost(float, tag = "2")]
    pub y: f32,
    #[prost(float, tag = "3")]
    pub phi: f32,
}

#[derive(Clone, PartialEq, Message)]
pub struct DeviceCurrentPoseInfo {
    #[prost(uint32, tag = "1")]
    pub pose_id: u32,
    #[prost(uint32, tag = "2")]
    pub update: u32,
    #[prost(float, tag = "3")]
    pub x: f32,
    #[prost(float, tag = "4")]
    pub y: f32,
    #[prost(float, tag = "5")]
    pub phi: f32,
}

/// Virtual wall (two points) or zone (polygon).
#[derive(Clone, PartialEq, Message)]
pub struct DeviceAreaDataInfo {
    #[prost(uint32, tag = "1")]
    pub status: u32,
    #[prost(uint32, tag = "2")]
    pub area_type: u32,
    #[prost(uint32, tag = "3")]
    pub area_index: u32,
    #[prost(message, repeated, tag = "4")]
    pub points: Vec<DevicePointInfo>,
}

#[derive(Clone, PartialEq, Message)]
pub struct RoomDataInfo {
    #[prost(uint32, tag = "1")]
    pub room_id: u32,
    #[prost(string, tag = "2")]
    pub room_name: String,
    #[prost(uint32, tag = "3")]
    pub room_type_id: u32,
    #[prost(message, repeated, tag = "4")]
    pub outline: Vec<DevicePointInfo>,
    #[prost(uint32, tag = "5")]
    pub clean_state: u32,
}

#[derive(Clone, PartialEq, Message)]
pub struct ObjectDataInfo {
    #[prost(uint32, tag = "1")]
    pub object_id: u32,
    #[prost(uint32, tag = "2")]
    pub object_type_id: u32,
    #[prost(string, tag = "3")]
    pub object_name: String,
    #[prost(uint32, tag = "4")]
    pub confirm: u32,
    #[prost(float, tag = "5")]
    pub x: f32,
    #[prost(float, tag = "6")]
    pub y: f32,
}
