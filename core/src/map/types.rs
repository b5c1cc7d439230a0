// ## 📂 File: `src/map/types.rs`

//! map/types.rs
//! Decoded floor map.
//!
//! Coordinates:
//! - World coordinates are metres in the robot frame, as carried on the wire.
//! - Grid coordinates are cell indices; (0, 0) is the cell at (min_x, min_y).
//! - Cells are stored row-major: index = y * width + x.

use std::fmt;

use num_enum::FromPrimitive;
use serde_json::Value;

/// Which map variant a channel index selects.
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum MapChannel {
    Primary = 1,
    Secondary = 2,
    /// Any other index: JSON payload, never a floor map.
    #[num_enum(catch_all)]
    Auxiliary(u32),
}

impl MapChannel {
    pub fn index(self) -> u32 {
        match self {
            MapChannel::Primary => 1,
            MapChannel::Secondary => 2,
            MapChannel::Auxiliary(n) => n,
        }
    }

    pub fn is_floor_map(self) -> bool {
        matches!(self, MapChannel::Primary | MapChannel::Secondary)
    }
}

impl fmt::Display for MapChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapChannel::Primary => write!(f, "primary"),
            MapChannel::Secondary => write!(f, "secondary"),
            MapChannel::Auxiliary(n) => write!(f, "auxiliary({})", n),
        }
    }
}

/// Occupancy cell classes.
pub mod cell_values {
    pub const UNKNOWN: u8 = 0;
    pub const FLOOR: u8 = 127;
    pub const WALL: u8 = 255;
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive)]
pub enum Cell {
    Unknown = cell_values::UNKNOWN,
    /// Floor assigned to a segmented room.
    #[num_enum(catch_all)]
    Room(u8),
    Floor = cell_values::FLOOR,
    Wall = cell_values::WALL,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Position plus heading (radians).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub phi: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Room {
    pub id: u32,
    pub name: String,
    pub room_type: u32,
    pub outline: Vec<Point>,
    pub clean_state: u32,
}

/// Restricted area or virtual wall.
#[derive(Clone, Debug, PartialEq)]
pub struct Zone {
    pub index: u32,
    pub kind: u32,
    pub status: u32,
    pub points: Vec<Point>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub id: u32,
    pub kind: u32,
    pub name: String,
    pub confirmed: bool,
    pub position: Point,
}

/// Grid geometry taken from the map header.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MapGeometry {
    pub width: u32,
    pub height: u32,
    /// Metres per cell.
    pub resolution: f32,
    pub min: Point,
    pub max: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloorMap {
    pub channel: MapChannel,
    pub map_id: u32,
    pub map_type: u32,
    pub geometry: MapGeometry,
    pub(crate) cells: Vec<u8>,
    /// Traveled path, oldest first.
    pub path: Vec<Point>,
    pub robot: Option<Pose>,
    pub charger: Option<Pose>,
    pub rooms: Vec<Room>,
    pub zones: Vec<Zone>,
    pub virtual_walls: Vec<Zone>,
    pub obstacles: Vec<Obstacle>,
}

impl FloorMap {
    pub fn width(&self) -> u32 {
        self.geometry.width
    }

    pub fn height(&self) -> u32 {
        self.geometry.height
    }

    /// Raw row-major cell bytes.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn raw_cell(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.geometry.width || y >= self.geometry.height {
            return None;
        }
        let idx = y as usize * self.geometry.width as usize + x as usize;
        self.cells.get(idx).copied()
    }

    pub fn cell(&self, x: u32, y: u32) -> Option<Cell> {
        self.raw_cell(x, y).map(Cell::from)
    }

    /// Cell containing a world point, if inside the grid.
    pub fn world_to_grid(&self, p: Point) -> Option<(u32, u32)> {
        let g = &self.geometry;
        let gx = ((p.x - g.min.x) / g.resolution).floor();
        let gy = ((p.y - g.min.y) / g.resolution).floor();
        if !gx.is_finite() || !gy.is_finite() || gx < 0.0 || gy < 0.0 {
            return None;
        }
        let (gx, gy) = (gx as u32, gy as u32);
        if gx >= g.width || gy >= g.height {
            return None;
        }
        Some((gx, gy))
    }

    /// World coordinates of a cell's lower-left corner.
    pub fn grid_to_world(&self, x: u32, y: u32) -> Point {
        let g = &self.geometry;
        Point::new(
            g.min.x + x as f32 * g.resolution,
            g.min.y + y as f32 * g.resolution,
        )
    }

    /// Number of cells per class: (floor incl. rooms, wall, unknown).
    pub fn cell_counts(&self) -> (usize, usize, usize) {
        let mut counts = (0, 0, 0);
        for &raw in &self.cells {
            match Cell::from(raw) {
                Cell::Floor | Cell::Room(_) => counts.0 += 1,
                Cell::Wall => counts.1 += 1,
                Cell::Unknown => counts.2 += 1,
            }
        }
        counts
    }

    pub fn room(&self, id: u32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }
}

/// Decoded map payload.
#[derive(Clone, Debug, PartialEq)]
pub enum MapData {
    Floor(FloorMap),
    /// Auxiliary channels: generic structured data.
    Raw(Value),
}

impl MapData {
    pub fn as_floor(&self) -> Option<&FloorMap> {
        match self {
            MapData::Floor(m) => Some(m),
            MapData::Raw(_) => None,
        }
    }

    pub fn as_raw(&self) -> Option<&Value> {
        match self {
            MapData::Raw(v) => Some(v),
            MapData::Floor(_) => None,
        }
    }
}
