use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

pub const COMMITTEE_AFFILIATION: &str = "WACATE実行委員会";

// Note: imported documents are only checked for `eventName`, so every field
// tolerates values of the wrong type and falls back instead of failing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventData {
    #[serde(deserialize_with = "deserialize_str")]
    pub event_name: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub organizer: String,
    #[serde(deserialize_with = "deserialize_or_default")]
    pub aster_sponsorship: Sponsorship,
    #[serde(deserialize_with = "deserialize_str")]
    pub start_date: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub start_time: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub reception_start_time: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub end_date: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub end_time: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub capacity: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub min_capacity: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub fee_under35: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub fee_over35: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub venue: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub venue_access: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub venue_url: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub description: String,
    #[serde(deserialize_with = "deserialize_registration_status")]
    pub registration_status: RegistrationStatus,
    #[serde(deserialize_with = "deserialize_str")]
    pub registration_deadline: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub registration_url: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub program_detail_url: String,
    #[serde(deserialize_with = "deserialize_sessions")]
    pub day1_sessions: Vec<Session>,
    #[serde(deserialize_with = "deserialize_sessions")]
    pub day2_sessions: Vec<Session>,
    #[serde(deserialize_with = "deserialize_str")]
    pub committee_chair: String,
    #[serde(deserialize_with = "deserialize_str_vec")]
    pub committee_members: Vec<String>,
}

impl EventData {
    /// State the editor starts with before anything is imported.
    pub fn example() -> Self {
        Self {
            event_name: "WACATE 2025 夏".to_string(),
            organizer: "WACATE実行委員会".to_string(),
            aster_sponsorship: Sponsorship::Absent,
            start_date: "2025年6月28日（土）".to_string(),
            start_time: "10:00".to_string(),
            reception_start_time: "09:30".to_string(),
            end_date: "2025年6月29日（日）".to_string(),
            end_time: "17:30".to_string(),
            capacity: "48名".to_string(),
            min_capacity: "24名".to_string(),
            fee_under35: "￥27,000".to_string(),
            fee_over35: "￥30,000".to_string(),
            venue: "トーセイホテル＆セミナー幕張".to_string(),
            venue_access: "JR京葉線 「新習志野駅」より徒歩2分".to_string(),
            venue_url: "https://tosei-hotelseminar.co.jp/makuhari/".to_string(),
            description: "この度「WACATE 2025 夏」の開催が決定いたしました！".to_string(),
            registration_status: RegistrationStatus::Closed,
            registration_deadline: "6/8まで".to_string(),
            registration_url: "https://wacate.jp/pre-entry/".to_string(),
            program_detail_url: "https://wacate.jp/workshops/2025summer/program/".to_string(),
            day1_sessions: vec![Session {
                id: "open_ses".to_string(),
                start_time: "10:00".to_string(),
                end_time: "10:20".to_string(),
                duration: "＜20分＞".to_string(),
                title: "オープニングセッション".to_string(),
                title_link: "#open_ses".to_string(),
                speaker: "山田　太郎".to_string(),
                speaker_affiliation: COMMITTEE_AFFILIATION.to_string(),
                description: "WACATE、そして、これから始まる2日間のソフトウェアテストワークショップイベントの全体像についてご紹介させていただきます。".to_string(),
                references: vec![],
                session_type: SessionType::Session,
            }],
            day2_sessions: vec![Session {
                id: "morning_ses".to_string(),
                start_time: "9:00".to_string(),
                end_time: "9:30".to_string(),
                duration: "＜30分＞".to_string(),
                title: "モーニングセッション".to_string(),
                title_link: "#morning_ses".to_string(),
                speaker: "佐藤　花子".to_string(),
                speaker_affiliation: COMMITTEE_AFFILIATION.to_string(),
                description: "（調整中）".to_string(),
                references: vec!["（調整中）".to_string()],
                session_type: SessionType::Session,
            }],
            committee_chair: "田中　一郎".to_string(),
            committee_members: vec!["鈴木　美咲".to_string(), "高橋　健太".to_string()],
        }
    }

    pub fn sessions(&self, day: Day) -> &[Session] {
        match day {
            Day::One => &self.day1_sessions,
            Day::Two => &self.day2_sessions,
        }
    }

    pub(crate) fn sessions_mut(&mut self, day: Day) -> &mut Vec<Session> {
        match day {
            Day::One => &mut self.day1_sessions,
            Day::Two => &mut self.day2_sessions,
        }
    }

    /// Day 1 followed by day 2, in schedule order
    pub fn all_sessions(&self) -> impl Iterator<Item = &Session> {
        self.day1_sessions.iter().chain(self.day2_sessions.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    #[serde(deserialize_with = "deserialize_str")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub start_time: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub end_time: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub duration: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub title: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub title_link: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub speaker: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub speaker_affiliation: String,
    #[serde(deserialize_with = "deserialize_str")]
    pub description: String,
    #[serde(deserialize_with = "deserialize_str_vec")]
    pub references: Vec<String>,
    #[serde(rename = "type", deserialize_with = "deserialize_or_default")]
    pub session_type: SessionType,
}

impl Session {
    /// Breaks and meals have no anchor, speaker or references
    pub fn is_talk(&self) -> bool {
        self.session_type == SessionType::Session
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SessionType {
    #[default]
    Session,
    Break,
    Meal,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::IntoStaticStr,
)]
pub enum Sponsorship {
    #[serde(rename = "あり")]
    #[strum(serialize = "あり")]
    Present,
    #[default]
    #[serde(rename = "なし")]
    #[strum(serialize = "なし")]
    Absent,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RegistrationStatus {
    Open,
    #[default]
    Closed,
    ComingSoon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Day {
    #[strum(to_string = "day1")]
    One,
    #[strum(to_string = "day2")]
    Two,
}

fn deserialize_str<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_string(Value::deserialize(d)?))
}

fn deserialize_str_vec<'de, D>(d: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Array(values) => values.into_iter().map(value_to_string).collect(),
        other => {
            warn!("Expected a list of texts, found {} (leaving it empty)", other);
            Vec::new()
        }
    })
}

fn deserialize_sessions<'de, D>(d: D) -> Result<Vec<Session>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Array(values) => values
            .into_iter()
            .map(|value| {
                serde_json::from_value(value).unwrap_or_else(|err| {
                    warn!("Unreadable session, using an empty one. Err: {err}");
                    Session::default()
                })
            })
            .collect(),
        other => {
            warn!("Expected a list of sessions, found {} (leaving it empty)", other);
            Vec::new()
        }
    })
}

fn deserialize_or_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(d)?;

    Ok(serde_json::from_value(value.clone()).unwrap_or_else(|_| {
        warn!("Unknown value {} (using the default)", value);
        T::default()
    }))
}

// anything but "open" or "closed" announces the registration as upcoming
fn deserialize_registration_status<'de, D>(d: D) -> Result<RegistrationStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(d)?;

    Ok(serde_json::from_value(value.clone()).unwrap_or_else(|_| {
        warn!("Unknown registration status {}", value);
        RegistrationStatus::ComingSoon
    }))
}

fn value_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => {
            warn!("Expected a text, found {} (leaving it empty)", other);
            String::new()
        }
    }
}
