use crate::event::model::{Day, EventData};
use std::collections::HashMap;
use tracing::trace;

/// Anchor ids for every session of both days, in schedule order.
///
/// Numbering is per base id and runs across both days, so the second
/// "open_ses" of the event is "open_ses2" even when it's on day 2. Positions
/// that get no anchor (breaks, meals, sessions without id) hold an empty id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionAnchors {
    ids: Vec<String>,
    day1_len: usize,
}

impl SessionAnchors {
    pub fn generate(event: &EventData) -> Self {
        let mut id_counts: HashMap<&str, usize> = HashMap::new();

        let ids = event
            .all_sessions()
            .map(|session| {
                if !session.is_talk() || session.id.is_empty() {
                    return String::new();
                }

                let count = id_counts.entry(session.id.as_str()).or_insert(0);
                *count += 1;

                format!("{}{}", session.id, count)
            })
            .collect::<Vec<String>>();

        trace!("Generated anchors {:?}", ids);

        Self {
            ids,
            day1_len: event.day1_sessions.len(),
        }
    }

    pub fn day(&self, day: Day) -> &[String] {
        match day {
            Day::One => &self.ids[..self.day1_len],
            Day::Two => &self.ids[self.day1_len..],
        }
    }

    pub fn all(&self) -> &[String] {
        &self.ids
    }
}
