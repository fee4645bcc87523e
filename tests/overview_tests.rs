use eventgen::event::editor::{EventField, EventUpdate, SessionField};
use eventgen::event::model::{
    Day, EventData, RegistrationStatus, Session, SessionType, Sponsorship,
};
use eventgen::render::overview::{registration_block, render_overview};
use scraper::{Html, Selector};

const PROGRAM_URL: &str = "https://wacate.jp/workshops/2025summer/program/";

fn talk(id: &str, title: &str) -> Session {
    Session {
        id: id.to_string(),
        start_time: "10:00".to_string(),
        end_time: "11:00".to_string(),
        title: title.to_string(),
        speaker: "山田　太郎".to_string(),
        speaker_affiliation: "WACATE実行委員会".to_string(),
        session_type: SessionType::Session,
        ..Session::default()
    }
}

fn pause(title: &str, session_type: SessionType) -> Session {
    Session {
        title: title.to_string(),
        session_type,
        ..Session::default()
    }
}

fn schedule_links(html: &str) -> Vec<String> {
    let fragment = Html::parse_fragment(html);
    let selector = Selector::parse("table tr td a").unwrap();

    fragment
        .select(&selector)
        .filter_map(|el| el.value().attr("href").map(str::to_string))
        .collect()
}

#[test_log::test]
fn should_render_example_event() {
    let html = render_overview(&EventData::example());

    assert!(html.starts_with(
        "<div class=\"col-sm-2\"> </div>\n<div class=\"col-sm-2\"><strong>主催</strong></div>\n<div class=\"col-sm-8\">WACATE実行委員会</div>\n<hr width=\"100%\" />\n"
    ));
    assert!(html.contains(
        "2025年6月28日（土）10:00 （受付開始 09:30） ～ 2025年6月29日（日） 17:30"
    ));
    assert!(html.contains("48名（定員となり次第、受付終了となります）<br />※最小催行人数：24名"));
    assert!(html.contains("35歳以下　:￥27,000<br />36歳以上　:￥30,000"));
    assert!(html.contains(
        r#"<a href="https://tosei-hotelseminar.co.jp/makuhari/" target="_blank" rel="noopener">https://tosei-hotelseminar.co.jp/makuhari/</a>"#
    ));
    assert_eq!(
        schedule_links(&html),
        vec![
            format!("{}#open_ses1", PROGRAM_URL),
            format!("{}#morning_ses1", PROGRAM_URL)
        ]
    );
}

#[test_log::test]
fn breaks_and_meals_should_not_appear_in_schedule() {
    let event = EventData {
        program_detail_url: PROGRAM_URL.to_string(),
        day1_sessions: vec![
            talk("open_ses", "オープニング"),
            pause("休憩", SessionType::Break),
            pause("昼食", SessionType::Meal),
        ],
        day2_sessions: vec![pause("朝食", SessionType::Meal), talk("open_ses", "クロージング")],
        ..EventData::default()
    };

    let html = render_overview(&event);
    let fragment = Html::parse_fragment(&html);
    let rows = Selector::parse("table tr").unwrap();

    assert_eq!(fragment.select(&rows).count(), 2);
    assert!(!html.contains("休憩"));
    assert!(!html.contains("昼食"));
    assert!(!html.contains("朝食"));
    assert_eq!(
        schedule_links(&html),
        vec![
            format!("{}#open_ses1", PROGRAM_URL),
            format!("{}#open_ses2", PROGRAM_URL)
        ]
    );
}

#[test_log::test]
fn session_without_id_should_link_without_fragment() {
    let event = EventData {
        program_detail_url: PROGRAM_URL.to_string(),
        day1_sessions: vec![talk("", "ライトニングトーク")],
        ..EventData::default()
    };

    assert_eq!(schedule_links(&render_overview(&event)), vec![PROGRAM_URL.to_string()]);
}

#[test_log::test]
fn sponsorship_block_should_follow_sponsorship() {
    let without = EventData::example();
    let with = without
        .clone()
        .apply(EventUpdate::Field(EventField::AsterSponsorship(Sponsorship::Present)));

    assert!(!render_overview(&without).contains("協賛"));
    assert!(render_overview(&with).contains(
        r#"<div class="col-sm-2"><strong>協賛</strong></div>
<div class="col-sm-8"><a href="http://aster.or.jp/" target="_blank">ソフトウェアテスト技術振興協会（ASTER）</a></div>"#
    ));
}

#[test_log::test]
fn registration_block_should_be_rendered_twice_identically() {
    for status in [
        RegistrationStatus::Open,
        RegistrationStatus::Closed,
        RegistrationStatus::ComingSoon,
    ] {
        let event = EventData::example()
            .apply(EventUpdate::Field(EventField::RegistrationStatus(status)));
        let block = registration_block(&event);

        assert_eq!(render_overview(&event).matches(&block).count(), 2, "{:?}", status);
    }
}

#[test_log::test]
fn registration_blocks_should_differ_by_status() {
    let blocks: Vec<String> = [
        RegistrationStatus::Open,
        RegistrationStatus::Closed,
        RegistrationStatus::ComingSoon,
    ]
    .into_iter()
    .map(|status| {
        registration_block(
            &EventData::example()
                .apply(EventUpdate::Field(EventField::RegistrationStatus(status))),
        )
    })
    .collect();

    assert_ne!(blocks[0], blocks[1]);
    assert_ne!(blocks[1], blocks[2]);
    assert_ne!(blocks[0], blocks[2]);
}

#[test_log::test]
fn committee_should_list_chair_then_members() {
    let html = render_overview(&EventData::example());

    assert!(html.contains("<strong>実行委員長</strong><br />田中　一郎（WACATE実行委員会）</p>"));
    assert!(html.contains(
        "<strong>実行委員</strong><br />鈴木　美咲（WACATE実行委員会）<br />高橋　健太（WACATE実行委員会）<br /></p>"
    ));
}

#[test_log::test]
fn switching_to_break_should_remove_row() {
    let event = EventData::example().apply(EventUpdate::Session(
        Day::One,
        0,
        SessionField::Type(SessionType::Break),
    ));

    assert_eq!(
        schedule_links(&render_overview(&event)),
        vec![format!("{}#morning_ses1", PROGRAM_URL)]
    );
}
