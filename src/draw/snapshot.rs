//! Flat key-value snapshot of a [`DrawSession`], used to carry drawing state
//! across a host teardown and recreate.
//!
//! Layout:
//! - `has_active`, then `active_origin_x/y` and `active_current_x/y` when set
//! - `num_boxes`, then `box{i}_origin_x/y` and `box{i}_current_x/y`
//! - `num_colors`, then `color{i}` as packed `0xAARRGGBB`
//! - optional `gesture_run_count` and `completed_gestures`

use crate::draw::model::{Color, Point, Rect};
use crate::draw::state::DrawSession;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

const HAS_ACTIVE: &str = "has_active";
const ACTIVE_PREFIX: &str = "active";
const NUM_BOXES: &str = "num_boxes";
const BOX_PREFIX: &str = "box";
const NUM_COLORS: &str = "num_colors";
const COLOR_PREFIX: &str = "color";
const GESTURE_RUN_COUNT: &str = "gesture_run_count";
const COMPLETED_GESTURES: &str = "completed_gestures";
const FIELDS_PER_RECT: usize = 4;

#[derive(Debug, Error)]
pub enum CorruptSnapshotError {
    #[error("snapshot declares {declared} {what} ({expected_fields} fields) but holds {present_fields} fields")]
    CountMismatch {
        what: &'static str,
        declared: usize,
        expected_fields: usize,
        present_fields: usize,
    },
    #[error("snapshot holds {rectangles} rectangles but {colors} colors")]
    Misaligned { rectangles: usize, colors: usize },
    #[error("snapshot is missing field `{0}`")]
    MissingField(String),
    #[error("snapshot field `{key}` is not a {expected}")]
    WrongType { key: String, expected: &'static str },
    #[error("snapshot text could not be decoded")]
    Encoding(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SnapshotValue {
    Bool(bool),
    Int(u32),
    Float(f32),
    Color(u32),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    entries: BTreeMap<String, SnapshotValue>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<SnapshotValue> {
        self.entries.get(key).copied()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: SnapshotValue) {
        self.entries.insert(key.into(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<SnapshotValue> {
        self.entries.remove(key)
    }

    pub fn to_json(&self) -> Result<String, CorruptSnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, CorruptSnapshotError> {
        Ok(serde_json::from_str(text)?)
    }

    fn count_prefixed(&self, prefix: &str) -> usize {
        self.entries
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .count()
    }

    fn require(&self, key: &str) -> Result<SnapshotValue, CorruptSnapshotError> {
        self.get(key)
            .ok_or_else(|| CorruptSnapshotError::MissingField(key.to_string()))
    }

    fn bool(&self, key: &str) -> Result<bool, CorruptSnapshotError> {
        match self.require(key)? {
            SnapshotValue::Bool(value) => Ok(value),
            _ => Err(wrong_type(key, "bool")),
        }
    }

    fn int(&self, key: &str) -> Result<u32, CorruptSnapshotError> {
        match self.require(key)? {
            SnapshotValue::Int(value) => Ok(value),
            _ => Err(wrong_type(key, "int")),
        }
    }

    fn optional_int(&self, key: &str) -> Result<u32, CorruptSnapshotError> {
        match self.get(key) {
            None => Ok(0),
            Some(_) => self.int(key),
        }
    }

    fn float(&self, key: &str) -> Result<f32, CorruptSnapshotError> {
        match self.require(key)? {
            SnapshotValue::Float(value) => Ok(value),
            _ => Err(wrong_type(key, "float")),
        }
    }

    fn color(&self, key: &str) -> Result<Color, CorruptSnapshotError> {
        match self.require(key)? {
            SnapshotValue::Color(packed) => Ok(Color::argb(packed)),
            _ => Err(wrong_type(key, "color")),
        }
    }

    fn put_rect(&mut self, prefix: &str, rect: &Rect) {
        let (origin, current) = (rect.origin(), rect.current());
        self.insert(format!("{prefix}_origin_x"), SnapshotValue::Float(origin.x));
        self.insert(format!("{prefix}_origin_y"), SnapshotValue::Float(origin.y));
        self.insert(format!("{prefix}_current_x"), SnapshotValue::Float(current.x));
        self.insert(format!("{prefix}_current_y"), SnapshotValue::Float(current.y));
    }

    fn rect(&self, prefix: &str) -> Result<Rect, CorruptSnapshotError> {
        let origin = Point::new(
            self.float(&format!("{prefix}_origin_x"))?,
            self.float(&format!("{prefix}_origin_y"))?,
        );
        let current = Point::new(
            self.float(&format!("{prefix}_current_x"))?,
            self.float(&format!("{prefix}_current_y"))?,
        );
        Ok(Rect::spanning(origin, current))
    }

    fn check_count(
        &self,
        what: &'static str,
        prefix: &str,
        declared: usize,
        fields_per_item: usize,
    ) -> Result<(), CorruptSnapshotError> {
        let present_fields = self.count_prefixed(prefix);
        let expected_fields = declared * fields_per_item;
        if present_fields != expected_fields {
            return Err(CorruptSnapshotError::CountMismatch {
                what,
                declared,
                expected_fields,
                present_fields,
            });
        }
        Ok(())
    }
}

fn wrong_type(key: &str, expected: &'static str) -> CorruptSnapshotError {
    CorruptSnapshotError::WrongType {
        key: key.to_string(),
        expected,
    }
}

pub fn serialize(session: &DrawSession) -> Snapshot {
    let mut snapshot = Snapshot::new();

    match session.active_rect().or(session.restored_active()) {
        Some(active) => {
            snapshot.insert(HAS_ACTIVE, SnapshotValue::Bool(true));
            snapshot.put_rect(ACTIVE_PREFIX, active);
        }
        None => snapshot.insert(HAS_ACTIVE, SnapshotValue::Bool(false)),
    }

    snapshot.insert(NUM_BOXES, SnapshotValue::Int(session.len() as u32));
    for (index, rect) in session.rectangles().iter().enumerate() {
        snapshot.put_rect(&format!("{BOX_PREFIX}{index}"), rect);
    }

    snapshot.insert(NUM_COLORS, SnapshotValue::Int(session.colors().len() as u32));
    for (index, color) in session.colors().iter().enumerate() {
        snapshot.insert(
            format!("{COLOR_PREFIX}{index}"),
            SnapshotValue::Color(color.to_argb()),
        );
    }

    snapshot.insert(
        GESTURE_RUN_COUNT,
        SnapshotValue::Int(session.gesture_run_count() as u32),
    );
    snapshot.insert(
        COMPLETED_GESTURES,
        SnapshotValue::Int(session.completed_gestures()),
    );

    tracing::info!(
        boxes = session.len(),
        fields = snapshot.len(),
        "saved draw session snapshot"
    );
    snapshot
}

/// Rebuilds a session. The in-progress rectangle, if any, comes back as a
/// detached copy in [`DrawSession::restored_active`] and the session is idle.
pub fn deserialize(snapshot: &Snapshot) -> Result<DrawSession, CorruptSnapshotError> {
    let restored_active = if snapshot.bool(HAS_ACTIVE)? {
        Some(snapshot.rect(ACTIVE_PREFIX)?)
    } else {
        None
    };

    let num_boxes = snapshot.int(NUM_BOXES)? as usize;
    snapshot.check_count("rectangles", BOX_PREFIX, num_boxes, FIELDS_PER_RECT)?;
    let rectangles = (0..num_boxes)
        .map(|index| snapshot.rect(&format!("{BOX_PREFIX}{index}")))
        .collect::<Result<Vec<_>, _>>()?;

    let num_colors = snapshot.int(NUM_COLORS)? as usize;
    snapshot.check_count("colors", COLOR_PREFIX, num_colors, 1)?;
    let colors = (0..num_colors)
        .map(|index| snapshot.color(&format!("{COLOR_PREFIX}{index}")))
        .collect::<Result<Vec<_>, _>>()?;

    if rectangles.len() != colors.len() {
        return Err(CorruptSnapshotError::Misaligned {
            rectangles: rectangles.len(),
            colors: colors.len(),
        });
    }

    let gesture_run_count = snapshot.optional_int(GESTURE_RUN_COUNT)?.min(u8::MAX as u32) as u8;
    let completed_gestures = snapshot.optional_int(COMPLETED_GESTURES)?;

    tracing::info!(boxes = rectangles.len(), "restored draw session snapshot");
    Ok(DrawSession::from_parts(
        rectangles,
        colors,
        restored_active,
        gesture_run_count,
        completed_gestures,
    ))
}
