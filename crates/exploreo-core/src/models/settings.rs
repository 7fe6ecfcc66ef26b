//! Local preference model and its enumerated values.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Base map rendering mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum MapDisplayMode {
    #[default]
    Normal,
    Satellite,
    Terrain,
}

impl MapDisplayMode {
    /// Stored and displayed name
    pub fn as_str(&self) -> &'static str {
        match self {
            MapDisplayMode::Normal => "Normal",
            MapDisplayMode::Satellite => "Satellite",
            MapDisplayMode::Terrain => "Terrain",
        }
    }
}

impl FromStr for MapDisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(MapDisplayMode::Normal),
            "satellite" => Ok(MapDisplayMode::Satellite),
            "terrain" => Ok(MapDisplayMode::Terrain),
            _ => Err(format!("Invalid map display mode: {s}")),
        }
    }
}

/// Image size tier used for remote imagery.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ImageQuality {
    #[default]
    High,
    Standard,
}

impl ImageQuality {
    /// Stored and displayed name
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageQuality::High => "High",
            ImageQuality::Standard => "Standard",
        }
    }

    /// Street view photo size for catalog attractions.
    pub fn street_view_size(&self) -> (u32, u32) {
        match self {
            ImageQuality::High => (800, 600),
            ImageQuality::Standard => (600, 400),
        }
    }

    /// Static map size used in bookmark lists.
    pub fn thumbnail_size(&self) -> (u32, u32) {
        match self {
            ImageQuality::High => (800, 400),
            ImageQuality::Standard => (600, 300),
        }
    }

    /// Static map size used on a bookmark's detail view.
    pub fn detail_size(&self) -> (u32, u32) {
        match self {
            ImageQuality::High => (1200, 600),
            ImageQuality::Standard => (800, 400),
        }
    }
}

impl FromStr for ImageQuality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(ImageQuality::High),
            "standard" => Ok(ImageQuality::Standard),
            _ => Err(format!("Invalid image quality: {s}")),
        }
    }
}

/// All local preferences with their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub dark_mode: bool,
    pub language: String,
    pub map_display_mode: MapDisplayMode,
    pub traffic_overlay: bool,
    pub image_quality: ImageQuality,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            language: "English".to_string(),
            map_display_mode: MapDisplayMode::Normal,
            traffic_overlay: true,
            image_quality: ImageQuality::High,
        }
    }
}
