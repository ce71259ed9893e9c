//! Document Approval Workflow
//!
//! This example demonstrates a plain, in-memory subject driven by a shared
//! state machine.
//!
//! Key concepts:
//! - Events declared once per type with `state_machine!`
//! - Business logic passed to `fire_with` runs before the state is committed
//! - A failing action leaves the document in its previous state
//! - Illegal events are reported as errors
//!
//! Run with: cargo run --example document_workflow

use simple_state_machine::{
    impl_subject, state_enum, state_machine, StateField, Stateful, Subject, TransitionError,
};

state_enum! {
    enum DocState {
        Draft = "draft",
        Review = "review",
        Published = "published",
    }
}

state_machine! {
    static DOCUMENT_MACHINE {
        "submit" => { "draft" => "review" },
        "reject" => { "review" => "draft" },
        "publish" => { "review" => "published" },
    }
}

#[derive(Default)]
struct Document {
    state: StateField,
    word_count: usize,
    audit: Vec<String>,
}

impl_subject!(Document, state, machine = DOCUMENT_MACHINE);

#[derive(Debug, thiserror::Error)]
#[error("document has only {0} words")]
struct TooShort(usize);

fn submit(document: &mut Document) -> Result<(), TransitionError<TooShort>> {
    document
        .fire_with("submit", |doc, context| {
            if doc.word_count < 100 {
                return Err(TooShort(doc.word_count));
            }
            doc.audit.push(format!("{} -> {}", context.from, context.to));
            Ok(())
        })
        .map(|_| ())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut document = Document::default();
    document.set_initial_state(DocState::Draft.as_str());

    println!("=== Document Workflow ===\n");

    match submit(&mut document) {
        Ok(()) => println!("Submitted"),
        Err(error) => println!("Submit failed: {error}"),
    }
    println!("State: {}\n", document.state);

    document.word_count = 450;
    if let Err(error) = submit(&mut document) {
        println!("Unexpected failure: {error}");
    }
    println!("State: {}", document.state);
    println!("Available events: {:?}\n", document.available_events());

    match document.fire("submit") {
        Ok(_) => println!("Submitted twice?"),
        Err(error) => println!("Second submit rejected: {error}"),
    }

    if document.fire("publish").is_ok() {
        println!("Published: {}", document.is_state(DocState::Published.as_str()));
    }

    println!("\nAudit trail:");
    for entry in &document.audit {
        println!("  {entry}");
    }
}
