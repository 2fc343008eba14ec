//! Photo catalog and layout-mode types for the album.
//! The catalog is embedded at build time as JSON.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::engine::InputMode;
use crate::error::AlbumError;

/// Width below which `Auto` picks the mobile layout.
pub const MOBILE_BREAKPOINT_PX: f64 = 900.0;

const CATALOG_JSON: &str = include_str!("../assets/photos.json");

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Stable key, also used as the image identity for view resets.
    pub id: String,
    pub title: String,
    pub url: String,
}

pub fn parse_catalog(raw: &str) -> Result<Vec<Photo>, AlbumError> {
    let photos: Vec<Photo> = serde_json::from_str(raw)?;
    if photos.is_empty() {
        return Err(AlbumError::EmptyCatalog);
    }
    let mut seen = HashSet::new();
    for p in &photos {
        if !seen.insert(p.id.as_str()) {
            return Err(AlbumError::DuplicateId(p.id.clone()));
        }
    }
    Ok(photos)
}

pub fn load_catalog() -> Result<Vec<Photo>, AlbumError> {
    parse_catalog(CATALOG_JSON)
}

/// Layout requested by the user: forced by URL prefix or the top-bar buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutMode {
    Auto,
    Mobile,
    Desktop,
}

/// Layout actually rendered after `Auto` is resolved against the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolvedLayout {
    Mobile,
    Desktop,
}

impl LayoutMode {
    pub fn from_path(path: &str) -> Self {
        if path.starts_with("/m") {
            LayoutMode::Mobile
        } else if path.starts_with("/d") {
            LayoutMode::Desktop
        } else {
            LayoutMode::Auto
        }
    }

    pub fn resolve(self, viewport_width: f64) -> ResolvedLayout {
        match self {
            LayoutMode::Mobile => ResolvedLayout::Mobile,
            LayoutMode::Desktop => ResolvedLayout::Desktop,
            LayoutMode::Auto if viewport_width < MOBILE_BREAKPOINT_PX => ResolvedLayout::Mobile,
            LayoutMode::Auto => ResolvedLayout::Desktop,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LayoutMode::Auto => "Auto",
            LayoutMode::Mobile => "Mobile",
            LayoutMode::Desktop => "Desktop",
        }
    }

    pub const ALL: [LayoutMode; 3] = [LayoutMode::Auto, LayoutMode::Mobile, LayoutMode::Desktop];
}

impl ResolvedLayout {
    pub fn label(self) -> &'static str {
        match self {
            ResolvedLayout::Mobile => "Mobile",
            ResolvedLayout::Desktop => "Desktop",
        }
    }

    pub fn input_mode(self) -> InputMode {
        match self {
            ResolvedLayout::Mobile => InputMode::Pointer,
            ResolvedLayout::Desktop => InputMode::Mouse,
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            ResolvedLayout::Mobile => "Drag with one finger, swipe to turn pages; pinch to zoom",
            ResolvedLayout::Desktop => "Wheel to zoom, drag to pan; shortcuts are faster",
        }
    }
}
