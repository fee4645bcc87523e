use crate::event::model::{
    Day, EventData, RegistrationStatus, Session, Sponsorship, COMMITTEE_AFFILIATION,
};
use crate::render::anchors::SessionAnchors;
use itertools::Itertools;
use tracing::{debug, instrument};

const RULE: &str = r#"<hr width="100%" />"#;
const ASTER_NAME: &str = "ソフトウェアテスト技術振興協会（ASTER）";
const ASTER_URL: &str = "http://aster.or.jp/";

/// Renders the event overview page: the labelled fact blocks, registration
/// call-to-action, the two-day schedule and the committee.
#[instrument(skip_all, fields(event = %event.event_name))]
pub fn render_overview(event: &EventData) -> String {
    let anchors = SessionAnchors::generate(event);
    let registration = registration_block(event);
    let status: &'static str = event.registration_status.into();

    debug!("Rendering overview with registration {}", status);

    let date_time = format!(
        "{}{} （受付開始 {}） ～ {} {}",
        event.start_date,
        event.start_time,
        event.reception_start_time,
        event.end_date,
        event.end_time
    );

    format!(
        r#"{organizer}{date_time_block}{sponsorship}{capacity}{fees}{venue}<div class="col-sm-2"> </div>
<div class="col-sm-8">{description}</div>
{RULE}
<div class="col-sm-2"> </div>
<div class="col-sm-8">
    {RULE}
    {registration}
</div>
{RULE}
<div class="col-sm-2"> </div>
<div class="col-sm-8">
    <p><strong>プログラム</strong>　　※ <a href="{program_url}">セッション詳細・全スケジュールはこちらからご確認ください</a></p>
    <p>1日目</p>
    <table style="border-collapse: collapse; width: 100%;" border="1">
        <tbody>{day1_rows}
        </tbody>
    </table>
    <p>２日目</p>
    <table style="border-collapse: collapse; width: 100%;" border="1">
        <tbody>{day2_rows}
        </tbody>
    </table>
</div>
{RULE}
{registration}
{RULE}
{committee}"#,
        organizer = labelled_block("主催", &event.organizer),
        date_time_block = labelled_block("日時", &date_time),
        sponsorship = sponsorship_block(event.aster_sponsorship),
        capacity = labelled_block(
            "定員",
            &format!(
                "{}（定員となり次第、受付終了となります）<br />※最小催行人数：{}",
                event.capacity, event.min_capacity
            )
        ),
        fees = labelled_block(
            "参加費",
            &format!(
                "35歳以下　:{}<br />36歳以上　:{}<br />※会場費、印刷費、宿泊費、食費、その他運営にかかる事務費含む（キャンセル不可）<br />※参加費は当日受付時に会場でお支払いいただきます。（現金のみ）",
                event.fee_under35, event.fee_over35
            )
        ),
        venue = labelled_block(
            "会場",
            &format!(
                r#"{}<br />{}<br /><a href="{}" target="_blank" rel="noopener">{}</a>"#,
                event.venue, event.venue_access, event.venue_url, event.venue_url
            )
        ),
        description = event.description,
        program_url = event.program_detail_url,
        day1_rows = schedule_rows(event, Day::One, &anchors),
        day2_rows = schedule_rows(event, Day::Two, &anchors),
        committee = committee_block(event),
    )
}

/// The call-to-action shown twice on the overview page
pub fn registration_block(event: &EventData) -> String {
    match event.registration_status {
        RegistrationStatus::Closed => {
            r#"<div align="center"><span style="font-size: 36pt;">参加申し込みを締め切りました。</span></div>"#
                .to_string()
        }
        RegistrationStatus::Open => format!(
            r#"<div align="center"><a href="{}"><span style="font-size: 36pt;"><span style="text-decoration: underline;">参加申し込み({})</span></span></a></div>"#,
            event.registration_url, event.registration_deadline
        ),
        RegistrationStatus::ComingSoon => {
            r#"<div align="center"><span style="font-size: 36pt;"><span style="text-decoration: underline;">近日参加申し込み開始予定!</span></span></div>"#
                .to_string()
        }
    }
}

fn labelled_block(label: &str, content: &str) -> String {
    format!(
        r#"<div class="col-sm-2"> </div>
<div class="col-sm-2"><strong>{label}</strong></div>
<div class="col-sm-8">{content}</div>
{RULE}
"#
    )
}

fn sponsorship_block(sponsorship: Sponsorship) -> String {
    match sponsorship {
        Sponsorship::Present => labelled_block(
            "協賛",
            &format!(r#"<a href="{ASTER_URL}" target="_blank">{ASTER_NAME}</a>"#),
        ),
        Sponsorship::Absent => String::new(),
    }
}

fn schedule_rows(event: &EventData, day: Day, anchors: &SessionAnchors) -> String {
    event
        .sessions(day)
        .iter()
        .zip(anchors.day(day))
        .filter(|(session, _)| session.is_talk())
        .map(|(session, anchor)| schedule_row(session, &event.program_detail_url, anchor))
        .join("")
}

fn schedule_row(session: &Session, program_url: &str, anchor: &str) -> String {
    let anchor_link = if anchor.is_empty() {
        String::new()
    } else {
        format!("#{}", anchor)
    };

    format!(
        r#"
            <tr>
                <td style="width: 20%;">{} - {}</td>
                <td style="width: 55%;"><a href="{}{}">{}</a></td>
                <td style="width: 25%;">{}<br /><span style="font-size: small;">{}</span></td>
            </tr>"#,
        session.start_time,
        session.end_time,
        program_url,
        anchor_link,
        session.title,
        session.speaker,
        session.speaker_affiliation
    )
}

fn committee_block(event: &EventData) -> String {
    let members = event
        .committee_members
        .iter()
        .map(|member| format!("{}（{}）<br />", member, COMMITTEE_AFFILIATION))
        .join("");

    format!(
        r#"<div class="col-sm-2"> </div>
<div class="col-sm-8">
    <div align="center">
        <p style="text-align: center;"><strong>実行委員長</strong><br />{}（{}）</p>
        <p style="text-align: center;"><strong>実行委員</strong><br />{}</p>
    </div>
</div>"#,
        event.committee_chair, COMMITTEE_AFFILIATION, members
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn open_registration_should_link_with_deadline() {
        let event = EventData {
            registration_status: RegistrationStatus::Open,
            registration_url: "https://wacate.jp/pre-entry/".to_string(),
            registration_deadline: "6/8まで".to_string(),
            ..EventData::default()
        };

        assert_eq!(
            registration_block(&event),
            r#"<div align="center"><a href="https://wacate.jp/pre-entry/"><span style="font-size: 36pt;"><span style="text-decoration: underline;">参加申し込み(6/8まで)</span></span></a></div>"#
        );
    }

    #[test_log::test]
    fn closed_and_coming_soon_registration_should_ignore_link_fields() {
        let closed = EventData {
            registration_url: "https://example.com".to_string(),
            ..EventData::default()
        };
        let coming_soon = EventData {
            registration_status: RegistrationStatus::ComingSoon,
            ..closed.clone()
        };

        assert!(registration_block(&closed).contains("参加申し込みを締め切りました。"));
        assert!(!registration_block(&closed).contains("https://example.com"));
        assert!(registration_block(&coming_soon).contains("近日参加申し込み開始予定!"));
        assert!(!registration_block(&coming_soon).contains("https://example.com"));
    }

    #[test_log::test]
    fn schedule_row_without_anchor_should_link_to_program_page_only() {
        let session = Session {
            start_time: "10:00".to_string(),
            end_time: "10:20".to_string(),
            title: "オープニング".to_string(),
            ..Session::default()
        };

        let row = schedule_row(&session, "https://wacate.jp/program/", "");

        assert!(row.contains(r#"<a href="https://wacate.jp/program/">オープニング</a>"#));
    }

    #[test_log::test]
    fn sponsorship_block_should_only_exist_when_present() {
        assert!(sponsorship_block(Sponsorship::Present).contains("<strong>協賛</strong>"));
        assert_eq!(sponsorship_block(Sponsorship::Absent), "");
    }
}
