// ## 📂 File: `src/map/decode.rs`

//! map/decode.rs
//! Decrypted map bytes -> `MapData`.
//!
//! Design notes:
//! - The channel decides the format up front; a failed floor map decode is an
//!   error, never a fallback to JSON.
//! - The wire message is fully validated before a `FloorMap` is built, so a
//!   malformed blob never yields a partially populated map.

use prost::Message;
use tracing::debug;

use crate::map::proto::{DeviceAreaDataInfo, DevicePointInfo, MapHeadInfo, RobotMap};
use crate::map::types::{FloorMap, MapChannel, MapData, MapGeometry, Obstacle, Point, Pose, Room, Zone};
use crate::types::{ClientError, Result};

/// Upper bound on grid cells (4096 x 4096).
pub const MAX_MAP_CELLS: u64 = 4096 * 4096;

pub fn decode_map(channel: MapChannel, bytes: &[u8]) -> Result<MapData> {
    if channel.is_floor_map() {
        decode_floor_map(channel, bytes).map(MapData::Floor)
    } else {
        let value = serde_json::from_slice(bytes)
            .map_err(|e| ClientError::Decode(format!("{} map: {}", channel, e)))?;
        Ok(MapData::Raw(value))
    }
}

pub fn decode_floor_map(channel: MapChannel, bytes: &[u8]) -> Result<FloorMap> {
    if bytes.is_empty() {
        return Err(ClientError::MapDecode("empty map payload".into()));
    }

    let msg = RobotMap::decode(bytes).map_err(|e| ClientError::MapDecode(e.to_string()))?;

    let head = msg
        .map_head
        .as_ref()
        .ok_or_else(|| ClientError::MapDecode("missing map header".into()))?;
    let geometry = validate_head(head)?;

    let cells = msg
        .map_data
        .map(|d| d.map_data)
        .ok_or_else(|| ClientError::MapDecode("missing map data".into()))?;
    let expected = geometry.width as usize * geometry.height as usize;
    if cells.len() != expected {
        return Err(ClientError::MapDecode(format!(
            "cell buffer length {} != {}x{}",
            cells.len(),
            geometry.width,
            geometry.height
        )));
    }

    let path = match &msg.history_pose {
        Some(h) => points(&h.points)?,
        None => Vec::new(),
    };

    let robot = match &msg.current_pose {
        Some(p) => Some(pose(p.x, p.y, p.phi)?),
        None => None,
    };
    let charger = match &msg.charge_station {
        Some(p) => Some(pose(p.x, p.y, p.phi)?),
        None => None,
    };

    let mut rooms = Vec::with_capacity(msg.room_data_info.len());
    for r in &msg.room_data_info {
        rooms.push(Room {
            id: r.room_id,
            name: r.room_name.clone(),
            room_type: r.room_type_id,
            outline: points(&r.outline)?,
            clean_state: r.clean_state,
        });
    }

    let zones = areas(&msg.areas_info)?;
    let virtual_walls = areas(&msg.virtual_walls)?;

    let mut obstacles = Vec::with_capacity(msg.objects.len());
    for o in &msg.objects {
        obstacles.push(Obstacle {
            id: o.object_id,
            kind: o.object_type_id,
            name: o.object_name.clone(),
            confirmed: o.confirm != 0,
            position: point(o.x, o.y)?,
        });
    }

    debug!(
        %channel,
        width = geometry.width,
        height = geometry.height,
        rooms = rooms.len(),
        path = path.len(),
        "decoded floor map"
    );

    Ok(FloorMap {
        channel,
        map_id: head.map_head_id,
        map_type: msg.map_type,
        geometry,
        cells,
        path,
        robot,
        charger,
        rooms,
        zones,
        virtual_walls,
        obstacles,
    })
}

fn validate_head(head: &MapHeadInfo) -> Result<MapGeometry> {
    if head.size_x == 0 || head.size_y == 0 {
        return Err(ClientError::MapDecode(format!(
            "invalid map size {}x{}",
            head.size_x, head.size_y
        )));
    }
    if head.size_x as u64 * head.size_y as u64 > MAX_MAP_CELLS {
        return Err(ClientError::MapDecode(format!(
            "map size {}x{} exceeds limit",
            head.size_x, head.size_y
        )));
    }
    if !head.resolution.is_finite() || head.resolution <= 0.0 {
        return Err(ClientError::MapDecode(format!("invalid resolution {}", head.resolution)));
    }

    Ok(MapGeometry {
        width: head.size_x,
        height: head.size_y,
        resolution: head.resolution,
        min: point(head.min_x, head.min_y)?,
        max: point(head.max_x, head.max_y)?,
    })
}

fn point(x: f32, y: f32) -> Result<Point> {
    if !x.is_finite() || !y.is_finite() {
        return Err(ClientError::MapDecode(format!("non-finite point ({}, {})", x, y)));
    }
    Ok(Point::new(x, y))
}

fn pose(x: f32, y: f32, phi: f32) -> Result<Pose> {
    let p = point(x, y)?;
    if !phi.is_finite() {
        return Err(ClientError::MapDecode(format!("non-finite heading {}", phi)));
    }
    Ok(Pose { x: p.x, y: p.y, phi })
}

fn points(raw: &[DevicePointInfo]) -> Result<Vec<Point>> {
    raw.iter().map(|p| point(p.x, p.y)).collect()
}

fn areas(raw: &[DeviceAreaDataInfo]) -> Result<Vec<Zone>> {
    raw.iter()
        .map(|a| {
            Ok(Zone {
                index: a.area_index,
                kind: a.area_type,
                status: a.status,
                points: points(&a.points)?,
            })
        })
        .collect()
}
