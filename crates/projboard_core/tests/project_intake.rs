use projboard_core::{IntakeError, Project, ProjectDraft, ProjectIntake, ProjectStore};
use std::cell::RefCell;
use std::rc::Rc;

fn draft(title: &str, description: &str, people: &str) -> ProjectDraft {
    ProjectDraft {
        title: title.to_string(),
        description: description.to_string(),
        people: people.to_string(),
    }
}

#[test]
fn valid_draft_reaches_listeners_with_coerced_fields() {
    let store = ProjectStore::shared();
    let seen: Rc<RefCell<Vec<Project>>> = Rc::new(RefCell::new(Vec::new()));
    let seen_handle = Rc::clone(&seen);
    store
        .borrow_mut()
        .add_listener(move |snapshot| *seen_handle.borrow_mut() = snapshot.to_vec());

    let intake = ProjectIntake::new(Rc::clone(&store));
    let id = intake
        .submit(&draft("Build CLI", "A useful tool", "3"))
        .expect("valid draft should be accepted");

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].id, id);
    assert!(!seen[0].id.is_nil());
    assert_eq!(seen[0].title, "Build CLI");
    assert_eq!(seen[0].description, "A useful tool");
    assert_eq!(seen[0].people, 3);
}

#[test]
fn blank_title_is_rejected_without_mutation() {
    let store = ProjectStore::shared();
    let intake = ProjectIntake::new(Rc::clone(&store));

    let err = intake
        .submit(&draft("   ", "A useful tool", "3"))
        .expect_err("blank title must be rejected");

    assert_eq!(err, IntakeError::ValidationFailed);
    assert!(store.borrow().is_empty());
}

#[test]
fn description_at_minimum_length_is_rejected() {
    let store = ProjectStore::shared();
    let intake = ProjectIntake::new(Rc::clone(&store));

    // The five-character bound is exclusive.
    assert!(intake.submit(&draft("Build CLI", "tools", "3")).is_err());
    assert!(intake.submit(&draft("Build CLI", "tool", "3")).is_err());
    assert!(intake.submit(&draft("Build CLI", "toolbox", "3")).is_ok());
    assert_eq!(store.borrow().len(), 1);
}

#[test]
fn people_range_is_inclusive_at_both_ends() {
    let store = ProjectStore::shared();
    let intake = ProjectIntake::new(Rc::clone(&store));

    assert!(intake.submit(&draft("Edge low", "smallest crew", "1")).is_ok());
    assert!(intake.submit(&draft("Edge high", "largest crew", "5")).is_ok());
    assert!(intake.submit(&draft("Too low", "empty crew", "0")).is_err());
    assert!(intake.submit(&draft("Too high", "crowded crew", "6")).is_err());
    assert_eq!(store.borrow().len(), 2);
}

#[test]
fn non_numeric_people_is_rejected_like_a_range_violation() {
    let store = ProjectStore::shared();
    let intake = ProjectIntake::new(Rc::clone(&store));

    for raw in ["three", "", "2.5", "-1"] {
        let err = intake
            .submit(&draft("Build CLI", "A useful tool", raw))
            .expect_err("non-integer headcount must be rejected");
        assert_eq!(err, IntakeError::ValidationFailed);
    }
    assert!(store.borrow().is_empty());
}

#[test]
fn rejection_does_not_notify_listeners() {
    let store = ProjectStore::shared();
    let count = Rc::new(RefCell::new(0));
    let count_handle = Rc::clone(&count);
    store
        .borrow_mut()
        .add_listener(move |_| *count_handle.borrow_mut() += 1);

    let intake = ProjectIntake::new(Rc::clone(&store));
    assert!(intake.submit(&draft("", "", "")).is_err());
    assert_eq!(*count.borrow(), 0);

    assert!(intake.submit(&draft("Build CLI", "A useful tool", "3")).is_ok());
    assert_eq!(*count.borrow(), 1);
}
