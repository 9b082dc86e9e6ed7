//! Tunable constants of the layout.
//!
//! Defaults reproduce the classic engraving metrics; a host can
//! override any subset of them by deserializing partial settings.
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LayoutSettings {
    pub tick_context: TickContextSettings,
    pub tuplet: TupletSettings,
    pub time_signature: TimeSignatureSettings,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickContextSettings {
    /// pixels on each side of the slot
    pub padding: f64,
}
impl Default for TickContextSettings {
    fn default() -> Self {
        Self { padding: 3.0 }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TupletSettings {
    /// point size of digit glyphs
    pub point: f64,
    /// vertical distance between nested brackets
    pub nesting_offset: f64,
    /// horizontal gap between bracket and notes or number
    pub bracket_padding: f64,
    pub bracket_height: f64,
    /// distance from the top staff line, when tuplet is above
    pub stave_clearance_above: f64,
    /// distance from the bottom staff line, when tuplet is below
    pub stave_clearance_below: f64,
    /// distance from the stem tip
    pub stem_tip_clearance: f64,
    /// distance from the notehead side of the stem
    pub stem_base_clearance: f64,
}
impl Default for TupletSettings {
    fn default() -> Self {
        Self {
            point: 28.0,
            nesting_offset: 15.0,
            bracket_padding: 5.0,
            bracket_height: 10.0,
            stave_clearance_above: 15.0,
            stave_clearance_below: 20.0,
            stem_tip_clearance: 10.0,
            stem_base_clearance: 20.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeSignatureSettings {
    pub point: f64,
    pub padding: f64,
    pub top_line: f64,
    pub bottom_line: f64,
}
impl Default for TimeSignatureSettings {
    fn default() -> Self {
        Self {
            point: 40.0,
            padding: 15.0,
            top_line: 2.0,
            bottom_line: 4.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LayoutSettings, TupletSettings};

    #[test]
    fn partial_settings() {
        let settings: LayoutSettings = serde_json::from_str(
            r#"{"tick_context": {"padding": 5.0}, "tuplet": {"point": 20.0}}"#,
        )
        .expect("can not parse settings");
        assert_eq!(settings.tick_context.padding, 5.0);
        assert_eq!(settings.tuplet.point, 20.0);
        assert_eq!(
            settings.tuplet.nesting_offset,
            TupletSettings::default().nesting_offset
        );
        assert_eq!(settings.time_signature.point, 40.0);
    }

    #[test]
    fn round_trip_defaults() {
        let settings = LayoutSettings::default();
        let string = serde_json::to_string(&settings).unwrap();
        assert_eq!(
            serde_json::from_str::<LayoutSettings>(&string).unwrap(),
            settings
        );
        assert_eq!(
            serde_json::from_str::<LayoutSettings>("{}").unwrap(),
            settings
        );
    }
}
