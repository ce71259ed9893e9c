//! End-to-end scenarios for plain and persistence-backed subjects.

use simple_state_machine::{
    impl_subject, state_enum, state_machine, IllegalTransition, Outcome, Persistent, StateField,
    StateMachine, Stateful, Subject, TransitionContext, TransitionError,
};
use std::fmt;

state_enum! {
    enum DocState {
        Draft = "draft",
        Active = "active",
        Archived = "archived",
    }
}

state_machine! {
    static DOCUMENT_MACHINE {
        "activate" => { "draft" => "active" },
        "archive" => { "draft" => "archived", "active" => "archived" },
        "refresh" => { "active" => "active" },
    }
}

#[derive(Default)]
struct Document {
    state: StateField,
}

impl_subject!(Document, state, machine = DOCUMENT_MACHINE);

fn document_in(state: DocState) -> Document {
    let mut document = Document::default();
    document.set_initial_state(state.as_str());
    document
}

#[test]
fn activate_moves_draft_to_active() {
    let mut document = document_in(DocState::Draft);

    document.fire("activate").unwrap();

    assert!(document.is_state(DocState::Active.as_str()));
    assert!(!document.is_state(DocState::Draft.as_str()));
}

#[test]
fn activate_from_active_is_illegal() {
    let mut document = document_in(DocState::Active);

    let error = document.fire("activate").unwrap_err();

    assert_eq!(
        error.as_illegal(),
        Some(&IllegalTransition::new("activate", Some("active")))
    );
    assert_eq!(error.to_string(), "cannot 'activate' when state is 'active'");
    assert!(document.is_state("active"));
}

#[test]
fn every_declared_state_has_a_predicate() {
    let states: Vec<&str> = DOCUMENT_MACHINE.states().into_iter().collect();
    let expected: Vec<&str> = DocState::ALL.iter().map(DocState::as_str).collect();

    let mut expected = expected;
    expected.sort_unstable();
    assert_eq!(states, expected);

    let document = document_in(DocState::Archived);
    for state in DocState::ALL {
        assert_eq!(document.is_state(state.as_str()), *state == DocState::Archived);
    }
}

#[test]
fn business_logic_result_is_returned() {
    let mut document = document_in(DocState::Draft);

    let outcome = document
        .fire_with("archive", |document, context| {
            Ok::<_, fmt::Error>(format!("{} from {:?}", context.to, document.state()))
        })
        .unwrap();

    assert_eq!(
        outcome,
        Outcome::Transitioned("archived from Some(\"draft\")".to_string())
    );
}

#[test]
fn available_events_follow_state() {
    let mut document = document_in(DocState::Draft);
    assert_eq!(document.available_events(), vec!["activate", "archive"]);

    document.fire("activate").unwrap();
    assert_eq!(document.available_events(), vec!["archive", "refresh"]);
    assert!(document.can_fire("refresh"));
    assert!(!document.can_fire("activate"));
}

/// A subject that records rejections and overrides one predicate.
#[derive(Default)]
struct Lenient {
    state: StateField,
    errors: Vec<String>,
    successes: usize,
}

impl Subject for Lenient {
    fn state(&self) -> Option<&str> {
        self.state.get()
    }

    fn set_state(&mut self, state: &str) {
        self.state.set(state);
    }

    // "live" is an alias the subject answers for itself.
    fn is_state(&self, name: &str) -> bool {
        match name {
            "live" => self.state.is("active"),
            other => self.state.is(other),
        }
    }

    fn on_transition_succeeded(&mut self, _context: &TransitionContext) {
        self.successes += 1;
    }

    fn on_illegal_transition(&mut self, illegal: IllegalTransition) -> Result<(), IllegalTransition> {
        self.errors.push(illegal.to_string());
        Ok(())
    }
}

fn lenient_machine() -> StateMachine {
    let mut machine = StateMachine::new();
    machine
        .event("activate", [("draft", "active")])
        .event("ping", [("active", "active")]);
    machine
}

#[test]
fn overridden_illegal_hook_records_instead_of_failing() {
    let machine = lenient_machine();
    let mut subject = Lenient::default();
    subject.set_initial_state("active");

    let outcome = machine.fire(&mut subject, "activate").unwrap();

    assert_eq!(
        outcome,
        Outcome::Rejected(IllegalTransition::new("activate", Some("active")))
    );
    assert_eq!(subject.errors, vec!["cannot 'activate' when state is 'active'"]);
    assert_eq!(subject.successes, 0);
    assert!(subject.is_state("active"));
}

#[test]
fn redeclaring_events_keeps_subject_overrides() {
    let mut machine = lenient_machine();
    machine.event("activate", [("draft", "active")]);
    machine.event("activate", [("draft", "active")]);

    let mut subject = Lenient::default();
    subject.set_initial_state("draft");
    machine.fire(&mut subject, "activate").unwrap();

    assert!(subject.is_state("live"));
    assert_eq!(machine.table().len(), 2);
}

#[test]
fn self_transition_fires_success_callback_once() {
    let machine = lenient_machine();
    let mut subject = Lenient::default();
    subject.set_initial_state("active");

    let outcome = machine.fire(&mut subject, "ping").unwrap();

    assert!(outcome.is_transitioned());
    assert_eq!(subject.successes, 1);
    assert!(subject.is_state("active"));
}

#[derive(Debug, thiserror::Error)]
#[error("database unavailable")]
struct SaveFailed;

state_machine! {
    static ACCOUNT_MACHINE {
        "suspend" => { "open" => "suspended" },
        "close" => { "open" => "closed", "suspended" => "closed" },
    }
}

/// A record whose state column is owned by a fake persistence layer.
#[derive(Default)]
struct Account {
    status: Option<String>,
    saved_status: Option<String>,
    fail_saves: bool,
    save_attempts: usize,
    persist_failures: Vec<String>,
}

impl Subject for Account {
    fn state(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn set_state(&mut self, state: &str) {
        self.status = Some(state.to_string());
    }
}

impl Persistent for Account {
    type Error = SaveFailed;

    fn persist(&mut self) -> Result<(), SaveFailed> {
        self.save_attempts += 1;
        if self.fail_saves {
            return Err(SaveFailed);
        }
        self.saved_status = self.status.clone();
        Ok(())
    }

    fn on_persist_failed(&mut self, error: &SaveFailed) {
        self.persist_failures.push(error.to_string());
    }
}

impl Stateful for Account {
    fn state_machine() -> &'static StateMachine {
        &ACCOUNT_MACHINE
    }
}

fn account(fail_saves: bool) -> Account {
    let mut account = Account {
        fail_saves,
        ..Account::default()
    };
    account.set_initial_state("open");
    account
}

#[test]
fn persisted_fire_saves_committed_state() {
    let mut account = account(false);

    account.fire_persisted("suspend", |_, _| Ok::<_, SaveFailed>(())).unwrap();

    assert_eq!(account.saved_status.as_deref(), Some("suspended"));
    assert_eq!(account.save_attempts, 1);
}

#[test]
fn plain_fire_commits_without_saving() {
    let mut account = account(false);

    account.fire("suspend").unwrap();
    account.fire_with("close", |_, _| Ok::<_, SaveFailed>(())).unwrap();

    assert!(account.is_state("closed"));
    assert_eq!(account.save_attempts, 0);
    assert_eq!(account.saved_status, None);
}

#[test]
fn persisted_fire_swallows_save_failures() {
    let mut account = account(true);

    let outcome = account
        .fire_persisted("suspend", |_, _| Ok::<_, SaveFailed>(7))
        .unwrap();

    assert_eq!(outcome.into_output(), Some(7));
    assert!(account.is_state("suspended"));
    assert_eq!(account.saved_status, None);
    assert_eq!(account.persist_failures, vec!["database unavailable"]);
}

#[test]
fn strict_persisted_fire_propagates_save_failures() {
    let mut account = account(true);

    let error = account
        .fire_persisted_strict("close", |_, _| Ok::<_, SaveFailed>(()))
        .unwrap_err();

    match &error {
        TransitionError::Persist { state, source } => {
            assert_eq!(state, "closed");
            assert_eq!(source.to_string(), "database unavailable");
        }
        other => panic!("expected persist failure, got {other:?}"),
    }
    assert_eq!(error.error_code(), "PERSIST_FAILED");
    assert!(account.persist_failures.is_empty());
}

#[test]
fn persisted_fire_skips_save_on_illegal_transition() {
    let mut account = account(false);
    account.fire_persisted_strict("close", |_, _| Ok::<_, SaveFailed>(())).unwrap();

    let error = account
        .fire_persisted_strict("suspend", |_, _| Ok::<_, SaveFailed>(()))
        .unwrap_err();

    assert!(error.is_illegal());
    assert_eq!(account.save_attempts, 1);
    assert!(account.is_state("closed"));
}

#[test]
fn persisted_fire_skips_save_when_action_fails() {
    let mut account = account(false);

    let error = account
        .fire_persisted("suspend", |_, _| Err::<(), _>(SaveFailed))
        .unwrap_err();

    assert!(matches!(error, TransitionError::Action(SaveFailed)));
    assert!(account.is_state("open"));
    assert_eq!(account.save_attempts, 0);
}

#[test]
fn machine_loads_from_json_definition() {
    let json = r#"{
        "version": 1,
        "events": {
            "activate": { "draft": "active" },
            "archive": { "draft": "archived", "active": "archived" }
        }
    }"#;
    let machine = StateMachine::from_json(json).unwrap();
    let mut document = document_in(DocState::Draft);

    machine.fire(&mut document, "activate").unwrap();
    machine.fire(&mut document, "archive").unwrap();

    assert!(document.is_state("archived"));
}
