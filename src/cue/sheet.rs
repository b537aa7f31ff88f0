use crate::cue::error::CueResult;
use crate::cue::models::LogicalCue;
use serde::{Deserialize, Serialize, Serializer};

/// The time-indexed JSON cue sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CueSheet {
    pub cues: Vec<SheetCue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetCue {
    /// Milliseconds
    #[serde(serialize_with = "serialize_millis")]
    pub time: f64,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i32>,
}

/// Whole milliseconds go out as JSON integers.
fn serialize_millis<S: Serializer>(time: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if time.fract() == 0.0 && time.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*time as i64)
    } else {
        serializer.serialize_f64(*time)
    }
}

impl CueSheet {
    /// Parses UTF-8 JSON. A missing `cues` array is an error.
    pub fn parse(data: &[u8]) -> CueResult<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    pub fn to_json(&self) -> CueResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Cues with times converted to seconds.
    pub fn logical_cues(&self) -> Vec<LogicalCue> {
        self.cues
            .iter()
            .map(|cue| LogicalCue {
                time: cue.time / 1000.0,
                name: cue.name.clone(),
                index: cue.index,
            })
            .collect()
    }

    pub fn from_logical_cues(cues: &[LogicalCue], source: Option<String>) -> Self {
        Self {
            cues: cues
                .iter()
                .map(|cue| SheetCue {
                    time: (cue.time * 1000.0).round(),
                    name: cue.name.clone(),
                    index: cue.index,
                })
                .collect(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cue::error::CueError;

    #[test]
    fn parses_cues_and_converts_to_seconds() {
        let json = br#"{"cues":[{"time":1500,"name":"Intro"},{"time":62250,"name":"Drop"}],"source":"Serato"}"#;
        let sheet = CueSheet::parse(json).unwrap();
        assert_eq!(sheet.source.as_deref(), Some("Serato"));

        let cues = sheet.logical_cues();
        assert_eq!(cues.len(), 2);
        assert_eq!(cues[0].time, 1.5);
        assert_eq!(cues[0].name, "Intro");
        assert_eq!(cues[1].time, 62.25);
        assert_eq!(cues[1].index, None);
    }

    #[test]
    fn source_index_and_name_are_optional() {
        let sheet = CueSheet::parse(br#"{"cues":[{"time":0,"index":4}]}"#).unwrap();
        assert_eq!(sheet.source, None);
        assert_eq!(sheet.cues[0].name, "");
        assert_eq!(sheet.cues[0].index, Some(4));
    }

    #[test]
    fn missing_cues_is_an_error() {
        assert!(matches!(
            CueSheet::parse(br#"{"source":"x"}"#),
            Err(CueError::Json(_))
        ));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            CueSheet::parse(b"{\"cues\": [ {\"time\": 1"),
            Err(CueError::Json(_))
        ));
        assert!(CueSheet::parse(b"").is_err());
    }

    #[test]
    fn serializes_back_to_milliseconds() {
        let cues = vec![LogicalCue {
            time: 1.234,
            name: "Hook".to_string(),
            index: None,
        }];
        let sheet = CueSheet::from_logical_cues(&cues, None);
        let json = sheet.to_json().unwrap();
        assert!(!json.contains("source"));
        let parsed = CueSheet::parse(json.as_bytes()).unwrap();
        assert_eq!(parsed.cues[0].time, 1234.0);
        assert_eq!(parsed.cues[0].name, "Hook");
    }

    #[test]
    fn whole_milliseconds_serialize_as_integers() {
        let sheet = CueSheet::parse(br#"{"cues":[{"time":1500,"name":"A"},{"time":2.5}]}"#).unwrap();
        let json = sheet.to_json().unwrap();
        assert!(json.contains(r#""time": 1500,"#));
        assert!(json.contains(r#""time": 2.5"#));
        assert!(!json.contains("1500.0"));
    }
}
