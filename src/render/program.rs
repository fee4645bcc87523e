use crate::event::model::{Day, EventData, Session};
use crate::render::anchors::SessionAnchors;
use chrono::{Datelike, Days, Months, NaiveDate};
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, instrument, warn};

const MODERATOR_MARKER: &str = "モデレータ";
const MODERATOR_LABEL: &str = "モデレータ";
const SPEAKER_LABEL: &str = "講演者";
const WEEKDAY_OPENING: char = '（';

lazy_static! {
    static ref JAPANESE_DATE: Regex =
        Regex::new(r"([0-9]{4})年([0-9]{1,2})月([0-9]{1,2})日").expect("Failed to create date regex");
}

/// Renders the program page with one detail table per session, anchored so
/// the overview schedule can link into it.
#[instrument(skip_all, fields(event = %event.event_name))]
pub fn render_program(event: &EventData) -> String {
    let anchors = SessionAnchors::generate(event);

    debug!(
        "Rendering program for {} + {} sessions",
        event.day1_sessions.len(),
        event.day2_sessions.len()
    );

    format!(
        r#"<h2>{}　プログラム内容</h2>
<p>都合によりプログラムが変更される場合があります。ご了承ください。</p>
<h3>1日目　（{}）</h3>
{}
<h3>2日目　（{}）</h3>
{}"#,
        event.event_name,
        day_date_label(&event.start_date, 0),
        day_sessions(event, Day::One, &anchors),
        day_date_label(&event.start_date, 1),
        day_sessions(event, Day::Two, &anchors),
    )
}

/// "2025年6月28日（土）" with an offset of 1 gives "2025年6月29日". Month and
/// day overflow rolls forward like a calendar would ("2月30日" is 3月2日).
/// Input without a date falls back to whatever precedes the weekday.
pub fn day_date_label(start_date: &str, day_offset: u64) -> String {
    let parsed = JAPANESE_DATE.captures(start_date).and_then(|captures| {
        rolled_date(
            captures[1].parse().ok()?,
            captures[2].parse().ok()?,
            captures[3].parse().ok()?,
            day_offset,
        )
    });

    match parsed {
        Some(date) => format!("{}年{}月{}日", date.year(), date.month(), date.day()),
        None => {
            warn!("No date found in '{}'", start_date);

            start_date
                .split(WEEKDAY_OPENING)
                .next()
                .unwrap_or_default()
                .to_string()
        }
    }
}

// month 0 and day 0 step back into the previous month/day, as 1-based
// calendar arithmetic does
fn rolled_date(year: i32, month: u32, day: u32, day_offset: u64) -> Option<NaiveDate> {
    let first_of_year = NaiveDate::from_ymd_opt(year, 1, 1)?;

    let first_of_month = match month {
        0 => first_of_year.checked_sub_months(Months::new(1))?,
        _ => first_of_year.checked_add_months(Months::new(month - 1))?,
    };

    let date = match day {
        0 => first_of_month.checked_sub_days(Days::new(1))?,
        _ => first_of_month.checked_add_days(Days::new(u64::from(day) - 1))?,
    };

    date.checked_add_days(Days::new(day_offset))
}

fn day_sessions(event: &EventData, day: Day, anchors: &SessionAnchors) -> String {
    event
        .sessions(day)
        .iter()
        .zip(anchors.day(day))
        .map(|(session, anchor)| {
            if session.is_talk() {
                talk_table(session, anchor)
            } else {
                pause_table(session)
            }
        })
        .join("\n")
}

fn time_range(session: &Session) -> String {
    format!("{} - {}", session.start_time, session.end_time)
}

/// Breaks and meals: a header row and an optional summary
fn pause_table(session: &Session) -> String {
    let description_row = if session.description.is_empty() {
        String::new()
    } else {
        format!(
            r#"<tr style="height: 23px;"><td style="width: 16.459%; height: 10px;">概要</td><td style="width: 83.541%; height: 10px;">{}</td></tr>"#,
            session.description
        )
    };

    format!(
        r#"<table style="height: 10px; width: 100%; border-collapse: collapse; border-color: #007f00;" border="1">
    <tbody>
        <tr style="height: 23px;">
            <td style="width: 16.459%; height: 10px; background-color: #007f00;"><span style="color: #ffffff;"><strong>{}</strong></span></td>
            <td style="width: 83.541%; height: 10px; background-color: #007f00;"><strong><span style="color: #ffffff;">{}　{}</span></strong></td>
        </tr>
        {}
    </tbody>
</table>"#,
        time_range(session),
        session.title,
        session.duration,
        description_row
    )
}

fn talk_table(session: &Session, anchor: &str) -> String {
    let speaker_label = if session.speaker.contains(MODERATOR_MARKER) {
        MODERATOR_LABEL
    } else {
        SPEAKER_LABEL
    };

    let speaker = if session.speaker_affiliation.is_empty() {
        session.speaker.clone()
    } else {
        format!("{}（{}）", session.speaker, session.speaker_affiliation)
    };

    format!(
        r#"<table style="height: 92px; width: 100%; border-collapse: collapse; border-color: #007f00;" border="1">
    <tbody>
        <tr style="height: 23px;">
            <td id="{anchor}" style="width: 16.459%; height: 23px; background-color: #007f00;"><strong><span style="color: #ffffff;">{time_range}</span></strong></td>
            <td style="width: 83.541%; height: 23px; background-color: #007f00;"><strong><span style="color: #ffffff;">{title}　{duration}</span></strong></td>
        </tr>
        <tr style="height: 23px;">
            <td style="width: 16.459%; height: 23px;">タイトル</td>
            <td style="width: 83.541%; height: 23px;">{title}</td>
        </tr>
        <tr style="height: 23px;">
            <td style="width: 16.459%; height: 23px;">{speaker_label}</td>
            <td style="width: 83.541%; height: 23px;">{speaker}</td>
        </tr>
        <tr style="height: 23px;">
            <td style="width: 16.459%; height: 23px;">概要</td>
            <td style="width: 83.541%; height: 23px;">{description}</td>
        </tr>
        {references}
    </tbody>
</table>"#,
        time_range = time_range(session),
        title = session.title,
        duration = session.duration,
        description = session.description,
        references = references_row(&session.references),
    )
}

fn references_row(references: &[String]) -> String {
    if references.is_empty() {
        return String::new();
    }

    let items = references
        .iter()
        .map(|reference| format!("<li>{}</li>", reference))
        .join("\n                    ");

    format!(
        r#"<tr>
            <td style="width: 16.459%;">参考文献</td>
            <td style="width: 83.541%;">
                <ul>
                    {}
                </ul>
            </td>
        </tr>"#,
        items
    )
}
