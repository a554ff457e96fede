use crate::{prelude::HashMap, traits::NativeBridge, BridgeError};

/// A call received by [`RecordingBridge`]
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeCall {
    AddAnnotationIcon {
        id: String,
        width: u32,
        height: u32,
        scale: f32,
        bytes: Vec<u8>,
    },
    TopOffsetQuery {
        id: String,
    },
}

/// Headless bridge that keeps every call in order.
///
/// Stands in for a renderer when running without a display. Top offsets come
/// from a table filled with [`RecordingBridge::with_top_offset`], unknown ids
/// report `0.0`.
#[derive(Debug, Clone)]
pub struct RecordingBridge {
    pixel_ratio: f32,
    calls: Vec<BridgeCall>,
    top_offsets: HashMap<String, f64>,
    failure: Option<BridgeError>,
    // calls still allowed to succeed before `failure` applies
    calls_before_failure: Option<usize>,
}

impl RecordingBridge {
    pub fn new() -> Self {
        Self::with_pixel_ratio(1.0)
    }

    pub fn with_pixel_ratio(pixel_ratio: f32) -> Self {
        Self {
            pixel_ratio,
            calls: Vec::new(),
            top_offsets: HashMap::default(),
            failure: None,
            calls_before_failure: None,
        }
    }

    pub fn with_top_offset(mut self, id: impl Into<String>, offset: f64) -> Self {
        self.top_offsets.insert(id.into(), offset);
        self
    }

    pub fn set_top_offset(&mut self, id: impl Into<String>, offset: f64) {
        self.top_offsets.insert(id.into(), offset);
    }

    /// Make every following call fail with `error`
    pub fn fail_with(&mut self, error: BridgeError) {
        self.failure = Some(error);
        self.calls_before_failure = None;
    }

    /// Let the next `calls` calls succeed, then fail every call with `error`
    pub fn fail_after(&mut self, calls: usize, error: BridgeError) {
        self.failure = Some(error);
        self.calls_before_failure = Some(calls);
    }

    pub fn recover(&mut self) {
        self.failure = None;
        self.calls_before_failure = None;
    }

    pub fn calls(&self) -> &[BridgeCall] {
        &self.calls
    }

    /// Ids passed to `add_annotation_icon`, in call order
    pub fn registered_ids(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                BridgeCall::AddAnnotationIcon { id, .. } => Some(id.as_str()),
                BridgeCall::TopOffsetQuery { .. } => None,
            })
            .collect()
    }

    pub fn top_offset_queries(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, BridgeCall::TopOffsetQuery { .. }))
            .count()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    fn check(&mut self) -> Result<(), BridgeError> {
        let Some(error) = &self.failure else {
            return Ok(());
        };
        match self.calls_before_failure {
            Some(remaining) if remaining > 0 => {
                self.calls_before_failure = Some(remaining - 1);
                Ok(())
            }
            _ => Err(error.clone()),
        }
    }
}

impl Default for RecordingBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeBridge for RecordingBridge {
    fn add_annotation_icon(
        &mut self,
        id: &str,
        width: u32,
        height: u32,
        scale: f32,
        bytes: &[u8],
    ) -> Result<(), BridgeError> {
        self.check()?;
        self.calls.push(BridgeCall::AddAnnotationIcon {
            id: id.to_string(),
            width,
            height,
            scale,
            bytes: bytes.to_vec(),
        });
        Ok(())
    }

    fn top_offset_pixels_for_annotation_symbol(&mut self, id: &str) -> Result<f64, BridgeError> {
        self.check()?;
        self.calls.push(BridgeCall::TopOffsetQuery { id: id.to_string() });
        Ok(self.top_offsets.get(id).copied().unwrap_or(0.0))
    }

    fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }
}
