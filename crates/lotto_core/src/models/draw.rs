use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One real lottery outcome. Immutable once issued.
///
/// Historical records vary in completeness across data-format revisions, so
/// every payload field is optional at the serde level; the rule registry
/// degrades missing fields to empty sequences instead of erroring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Draw {
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub date: String,

    // Two-color-ball payload
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub red_balls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blue_ball: Option<String>,

    // 3D payload
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub digits: Vec<String>,
    /// Concatenated 3-digit string, e.g. "337". Legacy records may carry
    /// only this; the rule registry splits it back into digits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    // Derived 3D fields emitted by the history fetcher
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sum: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<u32>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
}

impl Draw {
    /// Draw date parsed as a calendar date, if well-formed ("%Y-%m-%d").
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// Next-draw metadata carried by the history document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NextDraw {
    #[serde(default)]
    pub next_period: String,
    #[serde(default)]
    pub next_date: Option<String>,
    #[serde(default)]
    pub next_date_display: Option<String>,
}

/// Draw-history boundary document, ordered newest-first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub data: Vec<Draw>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_draw: Option<NextDraw>,
}

impl HistoryDoc {
    /// Most recent draw, if any (documents are ordered newest-first).
    pub fn latest(&self) -> Option<&Draw> {
        self.data.first()
    }

    /// Find the draw for a period, or None when that period has not been
    /// drawn yet. The absent case is a valid state, not a failure.
    pub fn find_period(&self, period: &str) -> Option<&Draw> {
        self.data.iter().find(|d| d.period == period)
    }

    /// `last_updated` parsed as a UTC timestamp, if present and well-formed.
    pub fn last_updated_time(&self) -> Option<DateTime<Utc>> {
        let raw = self.last_updated.as_deref()?;
        DateTime::parse_from_rfc3339(raw).ok().map(|t| t.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_records_deserialize() {
        let draw: Draw = serde_json::from_str(r#"{"period": "2024001"}"#).unwrap();
        assert_eq!(draw.period, "2024001");
        assert!(draw.red_balls.is_empty());
        assert!(draw.blue_ball.is_none());
        assert!(draw.digits.is_empty());
    }

    #[test]
    fn find_period_reports_not_yet_drawn_as_none() {
        let doc: HistoryDoc = serde_json::from_str(
            r#"{"data": [{"period": "2024002"}, {"period": "2024001"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.latest().unwrap().period, "2024002");
        assert!(doc.find_period("2024001").is_some());
        assert!(doc.find_period("2024099").is_none());
    }

    #[test]
    fn dates_parse_leniently() {
        let draw = Draw { date: "2024-03-05".into(), ..Default::default() };
        assert!(draw.parsed_date().is_some());
        let bad = Draw { date: "03/05/2024".into(), ..Default::default() };
        assert!(bad.parsed_date().is_none());
    }
}
