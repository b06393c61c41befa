//! Deck snapshots as JSON.
//!
//! A snapshot is a JSON array of slides, each with a flat `objects` list.
//! Objects are tagged with `"type": "rect" | "image" | "text"`; backgrounds
//! are plain `rect`/`image` objects carrying `"isBackground": true`. Image
//! bytes are embedded as base64 `data:` URLs.
//!
//! # Example
//!
//! ```no_run
//! use pptdeck::snapshot::{from_json, to_json, JsonFormat};
//!
//! let deck = pptdeck::parse_file("slides.pptx")?;
//! let json = to_json(&deck, JsonFormat::Pretty)?;
//! assert_eq!(from_json(&json)?, deck);
//! # Ok::<(), pptdeck::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::model::{
    Background, Color, Deck, Fill, ImageAsset, Picture, RectShape, Slide, TextBlock,
    VisualObject,
};
use serde::{Deserialize, Serialize};

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed with 2-space indentation
    #[default]
    Pretty,
}

#[derive(Debug, Serialize, Deserialize)]
struct SlideRecord {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    width: u32,
    height: u32,
    #[serde(default)]
    objects: Vec<ObjectRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ObjectRecord {
    Rect {
        id: String,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        #[serde(default = "default_rect_fill")]
        fill: String,
        #[serde(default)]
        rotation: f64,
        #[serde(default, rename = "isBackground", skip_serializing_if = "is_false")]
        is_background: bool,
    },
    Image {
        id: String,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        src: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default)]
        rotation: f64,
        #[serde(default, rename = "isBackground", skip_serializing_if = "is_false")]
        is_background: bool,
    },
    Text {
        id: String,
        x: f64,
        y: f64,
        text: String,
        #[serde(default = "default_font_size", rename = "fontSize")]
        font_size: f64,
        #[serde(default)]
        rotation: f64,
    },
}

fn default_rect_fill() -> String {
    "#DDDDDD".to_string()
}

fn default_font_size() -> f64 {
    20.0
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl From<&VisualObject> for ObjectRecord {
    fn from(object: &VisualObject) -> Self {
        match object {
            VisualObject::Background(bg) => match &bg.fill {
                Fill::Solid(color) => ObjectRecord::Rect {
                    id: bg.id.clone(),
                    x: bg.x,
                    y: bg.y,
                    width: bg.width,
                    height: bg.height,
                    fill: color.to_string(),
                    rotation: bg.rotation,
                    is_background: true,
                },
                Fill::Image(image) => ObjectRecord::Image {
                    id: bg.id.clone(),
                    x: bg.x,
                    y: bg.y,
                    width: bg.width,
                    height: bg.height,
                    src: image.to_data_url(),
                    name: image.name.clone(),
                    rotation: bg.rotation,
                    is_background: true,
                },
            },
            VisualObject::Text(t) => ObjectRecord::Text {
                id: t.id.clone(),
                x: t.x,
                y: t.y,
                text: t.text.clone(),
                font_size: t.font_size,
                rotation: t.rotation,
            },
            VisualObject::Picture(p) => ObjectRecord::Image {
                id: p.id.clone(),
                x: p.x,
                y: p.y,
                width: p.width,
                height: p.height,
                src: p.image.to_data_url(),
                name: p.image.name.clone(),
                rotation: p.rotation,
                is_background: false,
            },
            VisualObject::Rect(r) => ObjectRecord::Rect {
                id: r.id.clone(),
                x: r.x,
                y: r.y,
                width: r.width,
                height: r.height,
                fill: r.fill.to_string(),
                rotation: r.rotation,
                is_background: false,
            },
        }
    }
}

impl TryFrom<ObjectRecord> for VisualObject {
    type Error = Error;

    fn try_from(record: ObjectRecord) -> Result<Self> {
        let object = match record {
            ObjectRecord::Rect {
                id,
                x,
                y,
                width,
                height,
                fill,
                rotation,
                is_background,
            } => {
                let fill = parse_fill(&id, &fill)?;
                if is_background {
                    VisualObject::Background(Background {
                        id,
                        x,
                        y,
                        width,
                        height,
                        fill: Fill::Solid(fill),
                        rotation,
                    })
                } else {
                    VisualObject::Rect(RectShape {
                        id,
                        x,
                        y,
                        width,
                        height,
                        fill,
                        rotation,
                    })
                }
            }
            ObjectRecord::Image {
                id,
                x,
                y,
                width,
                height,
                src,
                name,
                rotation,
                is_background,
            } => {
                let image = ImageAsset::from_data_url(&src, name)?;
                if is_background {
                    VisualObject::Background(Background {
                        id,
                        x,
                        y,
                        width,
                        height,
                        fill: Fill::Image(image),
                        rotation,
                    })
                } else {
                    VisualObject::Picture(Picture {
                        id,
                        x,
                        y,
                        width,
                        height,
                        rotation,
                        image,
                    })
                }
            }
            ObjectRecord::Text {
                id,
                x,
                y,
                text,
                font_size,
                rotation,
            } => VisualObject::Text(TextBlock {
                id,
                x,
                y,
                text,
                font_size,
                rotation,
            }),
        };
        Ok(object)
    }
}

fn parse_fill(id: &str, fill: &str) -> Result<Color> {
    Color::from_hex(fill)
        .map_err(|_| Error::Snapshot(format!("object {} has invalid fill {:?}", id, fill)))
}

impl From<&Slide> for SlideRecord {
    fn from(slide: &Slide) -> Self {
        Self {
            id: slide.id.clone(),
            index: Some(slide.index),
            source: slide.source.clone(),
            width: slide.width,
            height: slide.height,
            objects: slide.objects.iter().map(ObjectRecord::from).collect(),
        }
    }
}

/// Convert a Deck to JSON.
pub fn to_json(deck: &Deck, format: JsonFormat) -> Result<String> {
    let records: Vec<SlideRecord> = deck.slides.iter().map(SlideRecord::from).collect();
    let json = match format {
        JsonFormat::Compact => serde_json::to_string(&records)?,
        JsonFormat::Pretty => serde_json::to_string_pretty(&records)?,
    };
    Ok(json)
}

/// Convert a Deck to JSON with default formatting.
pub fn to_json_default(deck: &Deck) -> Result<String> {
    to_json(deck, JsonFormat::Pretty)
}

/// Load a Deck from snapshot JSON.
///
/// Slides without an `index` are numbered by position, starting at 1.
pub fn from_json(json: &str) -> Result<Deck> {
    let records: Vec<SlideRecord> = serde_json::from_str(json)?;

    let slides = records
        .into_iter()
        .enumerate()
        .map(|(position, record)| {
            let objects = record
                .objects
                .into_iter()
                .map(VisualObject::try_from)
                .collect::<Result<Vec<_>>>()?;
            Ok(Slide {
                id: record.id,
                index: record.index.unwrap_or(position as u32 + 1),
                source: record.source,
                width: record.width,
                height: record.height,
                objects,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Deck { slides })
}
