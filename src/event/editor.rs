use crate::event::model::{
    Day, EventData, RegistrationStatus, Session, SessionType, Sponsorship, COMMITTEE_AFFILIATION,
};
use crate::event::time::calculate_duration;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// Speaker choice that switches a session to a free-typed speaker
pub const CUSTOM_SPEAKER_CHOICE: &str = "その他";

const NEW_SESSION_ID: &str = "session";

#[derive(Debug, Clone, PartialEq)]
pub enum EventUpdate {
    Field(EventField),
    AddSession(Day),
    RemoveSession(Day, usize),
    Session(Day, usize, SessionField),
    AddReference(Day, usize),
    UpdateReference(Day, usize, usize, String),
    RemoveReference(Day, usize, usize),
    AddCommitteeMember,
    UpdateCommitteeMember(usize, String),
    RemoveCommitteeMember(usize),
}

/// Whole-field replacement of a top-level field. Session lists are edited
/// through the other [EventUpdate] variants.
#[derive(Debug, Clone, PartialEq)]
pub enum EventField {
    EventName(String),
    Organizer(String),
    AsterSponsorship(Sponsorship),
    StartDate(String),
    StartTime(String),
    ReceptionStartTime(String),
    EndDate(String),
    EndTime(String),
    Capacity(String),
    MinCapacity(String),
    FeeUnder35(String),
    FeeOver35(String),
    Venue(String),
    VenueAccess(String),
    VenueUrl(String),
    Description(String),
    RegistrationStatus(RegistrationStatus),
    RegistrationDeadline(String),
    RegistrationUrl(String),
    ProgramDetailUrl(String),
    CommitteeChair(String),
    CommitteeMembers(Vec<String>),
}

/// Duration has no variant, it follows the times.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionField {
    Id(String),
    StartTime(String),
    EndTime(String),
    Title(String),
    TitleLink(String),
    Speaker(String),
    SpeakerAffiliation(String),
    Description(String),
    References(Vec<String>),
    Type(SessionType),
}

impl EventData {
    pub fn apply(mut self, update: EventUpdate) -> EventData {
        debug!("Applying {:?}", update);

        match update {
            EventUpdate::Field(field) => self.set_field(field),
            EventUpdate::AddSession(day) => {
                let session = self.new_session();
                self.sessions_mut(day).push(session);
            }
            EventUpdate::RemoveSession(day, index) => {
                let sessions = self.sessions_mut(day);

                if index < sessions.len() {
                    sessions.remove(index);
                } else {
                    warn!("No session {} on {} to remove", index, day);
                }
            }
            EventUpdate::Session(day, index, field) => {
                if let Some(session) = self.session_mut(day, index) {
                    session.set_field(field);
                }
            }
            EventUpdate::AddReference(day, index) => {
                if let Some(session) = self.session_mut(day, index) {
                    session.references.push(String::new());
                }
            }
            EventUpdate::UpdateReference(day, index, reference_index, text) => {
                if let Some(session) = self.session_mut(day, index) {
                    match session.references.get_mut(reference_index) {
                        Some(reference) => *reference = text,
                        None => warn!("No reference {} to update", reference_index),
                    }
                }
            }
            EventUpdate::RemoveReference(day, index, reference_index) => {
                if let Some(session) = self.session_mut(day, index) {
                    if reference_index < session.references.len() {
                        session.references.remove(reference_index);
                    } else {
                        warn!("No reference {} to remove", reference_index);
                    }
                }
            }
            EventUpdate::AddCommitteeMember => self.committee_members.push(String::new()),
            EventUpdate::UpdateCommitteeMember(index, name) => {
                match self.committee_members.get_mut(index) {
                    Some(member) => *member = name,
                    None => warn!("No committee member {} to update", index),
                }
            }
            EventUpdate::RemoveCommitteeMember(index) => {
                if index < self.committee_members.len() {
                    self.committee_members.remove(index);
                } else {
                    warn!("No committee member {} to remove", index);
                }
            }
        }

        self
    }

    /// Chair first, then every member with a name, as offered when picking a speaker
    pub fn committee_options(&self) -> Vec<String> {
        let chair = Some(&self.committee_chair).filter(|chair| !chair.is_empty());

        chair
            .into_iter()
            .chain(
                self.committee_members
                    .iter()
                    .filter(|member| !member.trim().is_empty()),
            )
            .cloned()
            .collect()
    }

    fn new_session(&self) -> Session {
        Session {
            id: NEW_SESSION_ID.to_string(),
            title_link: format!("#{}", NEW_SESSION_ID),
            speaker: self.committee_chair.clone(),
            speaker_affiliation: COMMITTEE_AFFILIATION.to_string(),
            session_type: SessionType::Session,
            ..Session::default()
        }
    }

    fn session_mut(&mut self, day: Day, index: usize) -> Option<&mut Session> {
        let session = self.sessions_mut(day).get_mut(index);

        if session.is_none() {
            warn!("No session {} on {}", index, day);
        }

        session
    }

    fn set_field(&mut self, field: EventField) {
        match field {
            EventField::EventName(value) => self.event_name = value,
            EventField::Organizer(value) => self.organizer = value,
            EventField::AsterSponsorship(value) => self.aster_sponsorship = value,
            EventField::StartDate(value) => self.start_date = value,
            EventField::StartTime(value) => self.start_time = value,
            EventField::ReceptionStartTime(value) => self.reception_start_time = value,
            EventField::EndDate(value) => self.end_date = value,
            EventField::EndTime(value) => self.end_time = value,
            EventField::Capacity(value) => self.capacity = value,
            EventField::MinCapacity(value) => self.min_capacity = value,
            EventField::FeeUnder35(value) => self.fee_under35 = value,
            EventField::FeeOver35(value) => self.fee_over35 = value,
            EventField::Venue(value) => self.venue = value,
            EventField::VenueAccess(value) => self.venue_access = value,
            EventField::VenueUrl(value) => self.venue_url = value,
            EventField::Description(value) => self.description = value,
            EventField::RegistrationStatus(value) => self.registration_status = value,
            EventField::RegistrationDeadline(value) => self.registration_deadline = value,
            EventField::RegistrationUrl(value) => self.registration_url = value,
            EventField::ProgramDetailUrl(value) => self.program_detail_url = value,
            EventField::CommitteeChair(value) => self.committee_chair = value,
            EventField::CommitteeMembers(value) => self.committee_members = value,
        }
    }
}

impl Session {
    fn set_field(&mut self, field: SessionField) {
        match field {
            SessionField::Id(value) => self.id = value,
            SessionField::StartTime(value) => {
                self.start_time = value;
                self.duration = calculate_duration(&self.start_time, &self.end_time);
            }
            SessionField::EndTime(value) => {
                self.end_time = value;
                self.duration = calculate_duration(&self.start_time, &self.end_time);
            }
            SessionField::Title(value) => self.title = value,
            SessionField::TitleLink(value) => self.title_link = value,
            SessionField::Speaker(value) => self.speaker = value,
            SessionField::SpeakerAffiliation(value) => self.speaker_affiliation = value,
            SessionField::Description(value) => self.description = value,
            SessionField::References(value) => self.references = value,
            SessionField::Type(value) => {
                self.session_type = value;

                if matches!(value, SessionType::Break | SessionType::Meal) {
                    self.id.clear();
                    self.title_link.clear();
                }
            }
        }
    }
}

/// Which sessions have a free-typed speaker instead of one picked from the
/// committee. Editor-only; never part of the exported document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeakerChoices {
    custom: HashMap<Day, BTreeMap<usize, bool>>,
}

impl SpeakerChoices {
    pub fn is_custom(&self, day: Day, index: usize) -> bool {
        self.custom
            .get(&day)
            .and_then(|sessions| sessions.get(&index))
            .copied()
            .unwrap_or(false)
    }

    fn set(mut self, day: Day, index: usize, is_custom: bool) -> Self {
        self.custom.entry(day).or_default().insert(index, is_custom);
        self
    }

    /// Keeps flags aligned with session positions after a removal
    fn session_removed(mut self, day: Day, removed: usize) -> Self {
        if let Some(sessions) = self.custom.get_mut(&day) {
            *sessions = sessions
                .iter()
                .filter(|(index, _)| **index != removed)
                .map(|(&index, &flag)| {
                    let index = if index > removed { index - 1 } else { index };
                    (index, flag)
                })
                .collect();
        }

        self
    }
}

/// Applies a choice from the speaker picker. [CUSTOM_SPEAKER_CHOICE] clears the
/// speaker so it can be typed freely; anything else is taken as the speaker.
pub fn select_speaker(
    event: EventData,
    choices: SpeakerChoices,
    day: Day,
    index: usize,
    choice: &str,
) -> (EventData, SpeakerChoices) {
    let is_custom = choice == CUSTOM_SPEAKER_CHOICE;
    let speaker = if is_custom {
        String::new()
    } else {
        choice.to_string()
    };

    (
        event.apply(EventUpdate::Session(day, index, SessionField::Speaker(speaker))),
        choices.set(day, index, is_custom),
    )
}

/// Removes a session together with its speaker flag; later flags of the
/// same day move down with their sessions.
pub fn remove_session(
    event: EventData,
    choices: SpeakerChoices,
    day: Day,
    index: usize,
) -> (EventData, SpeakerChoices) {
    if index >= event.sessions(day).len() {
        warn!("No session {} on {} to remove", index, day);
        return (event, choices);
    }

    (
        event.apply(EventUpdate::RemoveSession(day, index)),
        choices.session_removed(day, index),
    )
}
