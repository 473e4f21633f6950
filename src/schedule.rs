use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Debate role the user argues for.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, ValueEnum, strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Affirmative,
    Negative,
}

impl Side {
    pub fn toggled(self) -> Self {
        match self {
            Side::Affirmative => Side::Negative,
            Side::Negative => Side::Affirmative,
        }
    }
}

/// Selects the coaching prompt shown while a segment runs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SegmentKind {
    Opening,
    Crossfire,
    Rebuttal,
    Moderator,
    Closing,
}

impl SegmentKind {
    pub fn prompt(self) -> &'static str {
        match self {
            SegmentKind::Opening => {
                "Deliver a clear opening: state your thesis, outline your main points, and connect to the resolution."
            }
            SegmentKind::Crossfire => {
                "Ask concise, targeted questions; seek clear answers and challenge assumptions."
            }
            SegmentKind::Rebuttal => {
                "Address major arguments from opponent with logic, evidence, and examples."
            }
            SegmentKind::Moderator => "Answer moderator's question with clarity and civility.",
            SegmentKind::Closing => {
                "Summarize your case, reinforce impact, and end with a strong closing line."
            }
        }
    }
}

/// One fixed timed unit of the debate sequence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Segment {
    pub name: &'static str,
    pub minutes: u32,
    /// Absent means the segment belongs to both sides (e.g. crossfire).
    pub side: Option<Side>,
    pub kind: SegmentKind,
}

const DEFAULT_MINUTES: u32 = 2;

impl Segment {
    pub fn duration_secs(&self) -> u32 {
        let minutes = if self.minutes == 0 {
            DEFAULT_MINUTES
        } else {
            self.minutes
        };
        minutes * 60
    }

    /// Side label for log lines: "affirmative", "negative", or "both".
    pub fn side_label(&self) -> &'static str {
        match self.side {
            Some(Side::Affirmative) => "affirmative",
            Some(Side::Negative) => "negative",
            None => "both",
        }
    }
}

/// The practice sequence, in speaking order.
pub const SCHEDULE: [Segment; 8] = [
    Segment {
        name: "Affirmative Opening",
        minutes: 5,
        side: Some(Side::Affirmative),
        kind: SegmentKind::Opening,
    },
    Segment {
        name: "Negative Opening",
        minutes: 5,
        side: Some(Side::Negative),
        kind: SegmentKind::Opening,
    },
    Segment {
        name: "Crossfire",
        minutes: 3,
        side: None,
        kind: SegmentKind::Crossfire,
    },
    Segment {
        name: "Affirmative Rebuttal",
        minutes: 4,
        side: Some(Side::Affirmative),
        kind: SegmentKind::Rebuttal,
    },
    Segment {
        name: "Negative Rebuttal",
        minutes: 4,
        side: Some(Side::Negative),
        kind: SegmentKind::Rebuttal,
    },
    Segment {
        name: "Moderator Questions",
        minutes: 3,
        side: None,
        kind: SegmentKind::Moderator,
    },
    Segment {
        name: "Affirmative Closing",
        minutes: 3,
        side: Some(Side::Affirmative),
        kind: SegmentKind::Closing,
    },
    Segment {
        name: "Negative Closing",
        minutes: 3,
        side: Some(Side::Negative),
        kind: SegmentKind::Closing,
    },
];

pub fn segment(index: usize) -> Option<&'static Segment> {
    SCHEDULE.get(index)
}

/// Judging categories shown alongside the idle and completion screens.
pub const RUBRIC: [&str; 6] = [
    "Likeness to Reagan",
    "Organization and Clarity",
    "Knowledge of the Topic",
    "Persuasiveness",
    "Rebuttals",
    "Conduct and Civility",
];

pub const RUBRIC_SCALE: &str = "Excellent (5) / Good (4) / Fair (3) / Poor (2)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_toggled_round_trips() {
        assert_eq!(Side::Affirmative.toggled(), Side::Negative);
        assert_eq!(Side::Negative.toggled(), Side::Affirmative);
        assert_eq!(Side::Affirmative.toggled().toggled(), Side::Affirmative);
    }

    #[test]
    fn test_side_display_lowercase() {
        assert_eq!(Side::Affirmative.to_string(), "affirmative");
        assert_eq!(Side::Negative.to_string(), "negative");
    }

    #[test]
    fn test_schedule_has_eight_segments() {
        assert_eq!(SCHEDULE.len(), 8);
    }

    #[test]
    fn test_schedule_minutes_in_order() {
        let minutes: Vec<u32> = SCHEDULE.iter().map(|s| s.minutes).collect();
        assert_eq!(minutes, vec![5, 5, 3, 4, 4, 3, 3, 3]);
    }

    #[test]
    fn test_duration_secs_from_minutes() {
        assert_eq!(SCHEDULE[0].duration_secs(), 300);
        assert_eq!(SCHEDULE[2].duration_secs(), 180);
    }

    #[test]
    fn test_duration_secs_defaults_when_minutes_zero() {
        let seg = Segment {
            name: "Untimed",
            minutes: 0,
            side: None,
            kind: SegmentKind::Moderator,
        };
        assert_eq!(seg.duration_secs(), 120);
    }

    #[test]
    fn test_side_label() {
        assert_eq!(SCHEDULE[0].side_label(), "affirmative");
        assert_eq!(SCHEDULE[1].side_label(), "negative");
        assert_eq!(SCHEDULE[2].side_label(), "both");
    }

    #[test]
    fn test_segment_lookup() {
        assert_eq!(segment(0).unwrap().name, "Affirmative Opening");
        assert_eq!(segment(7).unwrap().name, "Negative Closing");
        assert!(segment(8).is_none());
    }

    #[test]
    fn test_every_kind_has_a_prompt() {
        let kinds = [
            SegmentKind::Opening,
            SegmentKind::Crossfire,
            SegmentKind::Rebuttal,
            SegmentKind::Moderator,
            SegmentKind::Closing,
        ];
        for kind in kinds {
            assert!(!kind.prompt().is_empty());
        }
    }

    #[test]
    fn test_crossfire_and_moderator_belong_to_both_sides() {
        assert!(SCHEDULE[2].side.is_none());
        assert!(SCHEDULE[5].side.is_none());
    }

    #[test]
    fn test_rubric_categories() {
        assert_eq!(RUBRIC.len(), 6);
        assert!(RUBRIC_SCALE.contains("Excellent (5)"));
    }
}
