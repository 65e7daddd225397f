use crate::config::CountdownConfig;
use crate::text::engine::{DrawText, TextEngine};
use crate::time::breakdown::DisplayField;

/// Draw commands for one group plus the cursor advance it consumes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupPlacement {
    /// The numeric value, centered over the label.
    pub value: DrawText,
    /// The unit label.
    pub label: DrawText,
    /// Horizontal distance to the next group's origin.
    pub advance: i32,
}

/// Place a value centered above its label, with the group anchored at `(x, y)`.
///
/// Half-widths are truncated before subtracting, so the value offset is
/// `label_w / 2 - value_w / 2` and goes negative when the value is wider. The advance is sized
/// from the label measured at the value size.
pub fn place_group(
    engine: &mut dyn TextEngine,
    cfg: &CountdownConfig,
    x: i32,
    y: i32,
    label: &str,
    value: &str,
) -> GroupPlacement {
    let value_pt = cfg.value_size_pt;
    let label_pt = cfg.label_size_pt;
    let value_baseline = y + value_pt as i32;

    let half_label = engine.measure(label, label_pt) / 2;
    let half_value = engine.measure(value, value_pt) / 2;
    let center_offset = half_label - half_value;

    let advance = engine.measure(label, value_pt) / 2 + cfg.group_padding;

    GroupPlacement {
        value: DrawText {
            text: value.to_string(),
            size_pt: value_pt,
            x: x + center_offset,
            y: value_baseline,
        },
        label: DrawText {
            text: label.to_string(),
            size_pt: label_pt,
            x,
            y: value_baseline + label_pt as i32 + cfg.value_label_padding,
        },
        advance,
    }
}

/// Left-to-right pen position threaded through the groups of a single frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutCursor {
    x: i32,
    y: i32,
}

impl LayoutCursor {
    /// Start at the configured left margin and top.
    pub fn start(cfg: &CountdownConfig) -> Self {
        Self {
            x: cfg.margin_left,
            y: cfg.top,
        }
    }

    /// Current pen x.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Place `field` at the cursor and advance past it.
    pub fn place(
        &mut self,
        engine: &mut dyn TextEngine,
        cfg: &CountdownConfig,
        field: &DisplayField,
    ) -> GroupPlacement {
        let placement = place_group(engine, cfg, self.x, self.y, field.label, &field.value);
        self.x += placement.advance;
        placement
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/group.rs"]
mod tests;
