//! State behind the Studio form.
//!
//! A submit is split in two halves so a UI can await the network in between:
//! [`StudioState::start`] marks a ticket as in flight, and
//! [`StudioState::resolve`] applies the outcome. Tickets increase with every
//! submit and only the latest one may touch the state, so the request issued
//! last wins no matter which response lands first.

use tracing::{debug, warn};

use crate::client::{self, GenerationBackend};
use crate::error::GenerationError;
use crate::models::{GenerationRequest, GenerationResponse, Mode, ResultSet};

pub const DEFAULT_PROMPT: &str = "a neon cyberpunk cityscape at dusk, cinematic, high detail";

pub const GENERATE_LABEL: &str = "Generate";
pub const GENERATING_LABEL: &str = "Generating…";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Hands out tickets in issuance order, starting at 1.
#[derive(Debug, Default)]
pub struct TicketSource {
    last: u64,
}

impl TicketSource {
    pub fn next(&mut self) -> Ticket {
        self.last += 1;
        Ticket(self.last)
    }
}

/// A request frozen at the moment the user hit Generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: Ticket,
    pub request: GenerationRequest,
}

#[derive(Debug)]
pub enum StudioAction {
    SetMode(Mode),
    SetPrompt(String),
    Started(Ticket),
    Resolved {
        ticket: Ticket,
        outcome: Result<GenerationResponse, GenerationError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioState {
    pub mode: Mode,
    pub prompt: String,
    pub result: ResultSet,
    pub loading: bool,
    pub note: String,
    latest: Option<Ticket>,
}

impl Default for StudioState {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            prompt: DEFAULT_PROMPT.to_string(),
            result: ResultSet::Empty,
            loading: false,
            note: String::new(),
            latest: None,
        }
    }
}

impl StudioState {
    /// Leaves results and note alone; they just stop being shown if they
    /// belong to the other mode.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Captures the current mode and prompt under `ticket`.
    pub fn prepare(&self, ticket: Ticket) -> Submission {
        Submission {
            ticket,
            request: GenerationRequest::new(self.mode, self.prompt.clone()),
        }
    }

    pub fn start(&mut self, ticket: Ticket) {
        self.latest = Some(ticket);
        self.loading = true;
        self.result = ResultSet::Empty;
        self.note.clear();
    }

    /// `prepare` followed by `start` with a fresh ticket.
    pub fn begin_submit(&mut self, tickets: &mut TicketSource) -> Submission {
        let submission = self.prepare(tickets.next());
        self.start(submission.ticket);
        submission
    }

    /// Applies an outcome if `ticket` is still the latest issued one.
    /// Returns whether the state changed.
    pub fn resolve(
        &mut self,
        ticket: Ticket,
        outcome: Result<GenerationResponse, GenerationError>,
    ) -> bool {
        if self.latest != Some(ticket) {
            debug!(
                ticket = ticket.value(),
                latest = ?self.latest.map(Ticket::value),
                "Discarding response for superseded request"
            );
            return false;
        }

        match outcome {
            Ok(response) => {
                if let Some(note) = response.note() {
                    self.note = note.to_string();
                }
                self.result = response.into_result_set();
            }
            Err(err) => {
                warn!(ticket = ticket.value(), error = %err, "Generation request failed");
                self.result = ResultSet::Empty;
                self.note = err.user_message().to_string();
            }
        }
        self.loading = false;
        true
    }

    pub fn apply(&mut self, action: StudioAction) {
        match action {
            StudioAction::SetMode(mode) => self.set_mode(mode),
            StudioAction::SetPrompt(prompt) => self.set_prompt(prompt),
            StudioAction::Started(ticket) => self.start(ticket),
            StudioAction::Resolved { ticket, outcome } => {
                self.resolve(ticket, outcome);
            }
        }
    }

    pub fn latest_ticket(&self) -> Option<Ticket> {
        self.latest
    }

    /// Images to render: only in image mode, only when there are some.
    pub fn visible_images(&self) -> &[String] {
        match (&self.result, self.mode) {
            (ResultSet::Images(urls), Mode::Image) => urls,
            _ => &[],
        }
    }

    pub fn visible_video(&self) -> Option<&str> {
        match (&self.result, self.mode) {
            (ResultSet::Video(url), Mode::Video) => Some(url),
            _ => None,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            GENERATING_LABEL
        } else {
            GENERATE_LABEL
        }
    }

    pub fn submit_disabled(&self) -> bool {
        self.loading
    }
}

/// Drives [`StudioState`] against a backend for callers that can hold the
/// state across the await, such as native tools and tests.
pub struct Studio<B> {
    backend: B,
    state: StudioState,
    tickets: TicketSource,
}

impl<B: GenerationBackend> Studio<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: StudioState::default(),
            tickets: TicketSource::default(),
        }
    }

    pub fn state(&self) -> &StudioState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.state.set_mode(mode);
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.state.set_prompt(prompt);
    }

    pub async fn warm_up(&self) {
        client::warm_up(&self.backend).await;
    }

    pub async fn submit(&mut self) -> &StudioState {
        let submission = self.state.begin_submit(&mut self.tickets);
        let outcome = client::generate(&self.backend, &submission.request).await;
        self.state.resolve(submission.ticket, outcome);
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::ScriptedBackend;
    use crate::error::FAILURE_NOTE;
    use crate::models::{ImageResponse, VideoResponse};

    fn images(urls: &[&str], note: Option<&str>) -> Result<GenerationResponse, GenerationError> {
        Ok(GenerationResponse::Image(ImageResponse {
            urls: Some(urls.iter().map(|u| u.to_string()).collect()),
            note: note.map(str::to_string),
        }))
    }

    fn video(url: &str) -> Result<GenerationResponse, GenerationError> {
        Ok(GenerationResponse::Video(VideoResponse {
            url: Some(url.to_string()),
            note: None,
        }))
    }

    #[test]
    fn starts_in_image_mode_with_sample_prompt() {
        let state = StudioState::default();
        assert_eq!(state.mode, Mode::Image);
        assert_eq!(state.prompt, DEFAULT_PROMPT);
        assert!(!state.loading);
        assert_eq!(state.submit_label(), "Generate");
        assert!(state.latest_ticket().is_none());
    }

    #[test]
    fn tickets_increase_from_one() {
        let mut tickets = TicketSource::default();
        assert_eq!(tickets.next().value(), 1);
        assert_eq!(tickets.next().value(), 2);
    }

    #[test]
    fn image_result_renders_in_order_without_video() {
        let mut state = StudioState::default();
        let mut tickets = TicketSource::default();
        let submission = state.begin_submit(&mut tickets);

        assert!(state.resolve(submission.ticket, images(&["a", "b"], None)));

        assert_eq!(state.visible_images(), ["a".to_string(), "b".to_string()]);
        assert_eq!(state.visible_video(), None);
    }

    #[test]
    fn video_result_renders_without_images() {
        let mut state = StudioState::default();
        let mut tickets = TicketSource::default();
        state.set_mode(Mode::Video);
        let submission = state.begin_submit(&mut tickets);
        assert_eq!(submission.request.mode(), Mode::Video);

        state.resolve(submission.ticket, video("x.mp4"));

        assert_eq!(state.visible_video(), Some("x.mp4"));
        assert!(state.visible_images().is_empty());
    }

    #[test]
    fn switching_mode_keeps_previous_images() {
        let mut state = StudioState::default();
        let mut tickets = TicketSource::default();
        let submission = state.begin_submit(&mut tickets);
        state.resolve(submission.ticket, images(&["a"], Some("placeholder")));

        state.set_mode(Mode::Video);
        assert_eq!(state.result, ResultSet::Images(vec!["a".to_string()]));
        assert_eq!(state.note, "placeholder");
        assert!(state.visible_images().is_empty());

        state.set_mode(Mode::Image);
        assert_eq!(state.visible_images(), ["a".to_string()]);

        state.set_mode(Mode::Video);
        state.begin_submit(&mut tickets);
        assert_eq!(state.result, ResultSet::Empty);
        assert!(state.note.is_empty());
    }

    #[test]
    fn failure_sets_fixed_note_and_no_media() {
        let mut state = StudioState::default();
        let mut tickets = TicketSource::default();
        let submission = state.begin_submit(&mut tickets);

        state.resolve(submission.ticket, Err(GenerationError::Status(500)));

        assert_eq!(state.note, FAILURE_NOTE);
        assert_eq!(state.result, ResultSet::Empty);
        assert!(!state.loading);
    }

    #[test]
    fn note_and_images_show_together() {
        let mut state = StudioState::default();
        let mut tickets = TicketSource::default();
        let submission = state.begin_submit(&mut tickets);

        state.resolve(submission.ticket, images(&["a", "b"], Some("Demo output")));

        assert_eq!(state.note, "Demo output");
        assert_eq!(state.visible_images().len(), 2);
    }

    #[test]
    fn label_follows_loading() {
        let mut state = StudioState::default();
        let mut tickets = TicketSource::default();
        let submission = state.begin_submit(&mut tickets);
        assert!(state.submit_disabled());
        assert_eq!(state.submit_label(), "Generating…");

        state.resolve(submission.ticket, Err(GenerationError::Transport("reset".into())));
        assert!(!state.submit_disabled());
        assert_eq!(state.submit_label(), "Generate");
    }

    #[test]
    fn resubmitting_replaces_instead_of_appending() {
        let mut state = StudioState::default();
        let mut tickets = TicketSource::default();

        let first = state.begin_submit(&mut tickets);
        state.resolve(first.ticket, images(&["a", "b"], None));
        let after_first = state.clone();

        let second = state.begin_submit(&mut tickets);
        assert_eq!(first.request, second.request);
        state.resolve(second.ticket, images(&["a", "b"], None));

        assert_eq!(state.visible_images(), after_first.visible_images());
        assert_eq!(state.note, after_first.note);
    }

    #[test]
    fn late_response_for_superseded_request_is_discarded() {
        let mut state = StudioState::default();
        let mut tickets = TicketSource::default();
        let first = state.begin_submit(&mut tickets);
        let second = state.begin_submit(&mut tickets);

        assert!(state.resolve(second.ticket, images(&["new"], None)));
        assert!(!state.resolve(first.ticket, images(&["old"], Some("stale"))));

        assert_eq!(state.visible_images(), ["new".to_string()]);
        assert!(state.note.is_empty());
    }

    #[test]
    fn early_stale_response_leaves_latest_in_flight() {
        let mut state = StudioState::default();
        let mut tickets = TicketSource::default();
        let first = state.begin_submit(&mut tickets);
        let second = state.begin_submit(&mut tickets);

        assert!(!state.resolve(first.ticket, Err(GenerationError::Status(500))));
        assert!(state.loading);
        assert!(state.note.is_empty());

        state.resolve(second.ticket, images(&["ok"], None));
        assert!(!state.loading);
    }

    #[test]
    fn response_is_read_with_mode_at_issuance() {
        let mut state = StudioState::default();
        let mut tickets = TicketSource::default();
        let submission = state.begin_submit(&mut tickets);
        state.set_mode(Mode::Video);

        state.resolve(submission.ticket, images(&["a"], None));

        assert_eq!(state.result, ResultSet::Images(vec!["a".to_string()]));
        assert_eq!(state.visible_video(), None);
    }

    #[test]
    fn actions_drive_the_same_transitions() {
        let mut state = StudioState::default();
        let mut tickets = TicketSource::default();
        state.apply(StudioAction::SetPrompt(String::new()));
        state.apply(StudioAction::SetMode(Mode::Video));
        let submission = state.prepare(tickets.next());
        assert_eq!(submission.request.prompt(), "");

        state.apply(StudioAction::Started(submission.ticket));
        assert!(state.loading);
        state.apply(StudioAction::Resolved {
            ticket: submission.ticket,
            outcome: video("clip.mp4"),
        });
        assert_eq!(state.visible_video(), Some("clip.mp4"));
    }

    #[tokio::test]
    async fn studio_submit_round_trip() {
        let backend = ScriptedBackend::with_replies(vec![
            Ok(r#"{"urls":["a","b"],"note":"Preview"}"#.to_string()),
            Ok("not json".to_string()),
        ]);
        let mut studio = Studio::new(backend);

        let state = studio.submit().await;
        assert_eq!(state.visible_images().len(), 2);
        assert_eq!(state.note, "Preview");

        let state = studio.submit().await;
        assert_eq!(state.note, FAILURE_NOTE);
        assert_eq!(state.result, ResultSet::Empty);
        assert!(!state.loading);
        assert_eq!(studio.backend().posts.borrow().len(), 2);
    }
}
