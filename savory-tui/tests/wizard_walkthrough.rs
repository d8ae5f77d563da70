use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use savory_core::{Catalog, Reservation, Step};
use savory_tui::App;

fn key(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_str(app: &mut App, text: &str) {
    for ch in text.chars() {
        key(app, KeyCode::Char(ch));
    }
}

fn new_app() -> App {
    App::new(Catalog::builtin().expect("Failed to load builtin floor plan"))
}

/// Reserve table 4 two days out at 19:00 for Jane Doe and return the
/// confirmed reservation.
fn book_table_four(app: &mut App) -> Reservation {
    for _ in 0..3 {
        key(app, KeyCode::Right);
    }
    key(app, KeyCode::Enter);

    key(app, KeyCode::Right); // today
    key(app, KeyCode::Right);
    key(app, KeyCode::Right); // two days out
    key(app, KeyCode::Tab);
    for _ in 0..5 {
        key(app, KeyCode::Right); // 17:00 up to 19:00
    }
    key(app, KeyCode::Tab);
    key(app, KeyCode::Right);
    key(app, KeyCode::Right); // 2 guests
    key(app, KeyCode::Tab);
    type_str(app, "Jane Doe");
    key(app, KeyCode::Tab);
    type_str(app, "jane@example.com");
    key(app, KeyCode::Tab);
    type_str(app, "555-0100");
    key(app, KeyCode::Tab);
    key(app, KeyCode::Enter);

    let Step::Confirmation { reservation } = app.step() else {
        panic!("Expected confirmation step, got {:?}", app.step());
    };
    reservation.clone()
}

#[test]
fn test_complete_reservation_walkthrough() {
    let mut app = new_app();

    // 1. Wizard opens on the floor plan
    assert_eq!(app.step(), &Step::Selection);

    // 2. Move the cursor to table 4 and reserve it
    let today = Local::now().date_naive();
    for _ in 0..3 {
        key(&mut app, KeyCode::Right);
    }
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.step(), &Step::Form { table_id: "4".into() });

    // 3. Date two days out, 19:00, party of two
    for _ in 0..3 {
        key(&mut app, KeyCode::Right);
    }
    key(&mut app, KeyCode::Tab);
    for _ in 0..5 {
        key(&mut app, KeyCode::Right);
    }
    key(&mut app, KeyCode::Tab);
    key(&mut app, KeyCode::Right);
    key(&mut app, KeyCode::Right);

    // 4. Contact details
    key(&mut app, KeyCode::Tab);
    type_str(&mut app, "Jane Doe");
    key(&mut app, KeyCode::Tab);
    type_str(&mut app, "jane@example.com");
    key(&mut app, KeyCode::Tab);
    type_str(&mut app, "555-0100");

    // 5. Submit from the confirm control
    key(&mut app, KeyCode::Tab);
    key(&mut app, KeyCode::Enter);

    let Step::Confirmation { reservation } = app.step() else {
        panic!("Expected confirmation step, got {:?}", app.step());
    };
    let expected_date = today
        .succ_opt()
        .and_then(|d| d.succ_opt())
        .expect("date arithmetic overflow");
    assert_eq!(reservation.table_id, "4");
    assert_eq!(reservation.date, expected_date);
    assert_eq!(reservation.time, "19:00");
    assert_eq!(reservation.guests, 2);
    assert_eq!(reservation.name, "Jane Doe");
    assert_eq!(reservation.email, "jane@example.com");
    assert_eq!(reservation.phone, "555-0100");

    // 6. Start the next reservation; nothing is retained
    key(&mut app, KeyCode::Char('n'));
    assert_eq!(app.step(), &Step::Selection);
}

#[test]
fn test_rebooking_after_reset_yields_identical_reservation() {
    let mut app = new_app();

    // 1. First traversal
    let first = book_table_four(&mut app);

    // 2. Reset from the confirmation screen
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.step(), &Step::Selection);

    // 3. An identical second traversal produces a field-equal reservation
    let second = book_table_four(&mut app);
    assert_eq!(first, second);
}

#[test]
fn test_reserved_tables_stay_inert() {
    let mut app = new_app();

    // 1. Wrap the cursor backwards onto table 8
    key(&mut app, KeyCode::Left);
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.step(), &Step::Selection);

    // 2. Forward onto table 3
    for _ in 0..3 {
        key(&mut app, KeyCode::Right);
    }
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.step(), &Step::Selection);
}

#[test]
fn test_incomplete_form_never_reaches_confirmation() {
    let mut app = new_app();

    // 1. Into the form for table 1
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.step(), &Step::Form { table_id: "1".into() });

    // 2. Jump straight to the confirm control and press Enter
    key(&mut app, KeyCode::BackTab);
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.step().name(), "form");

    // 3. Esc discards the visit entirely
    key(&mut app, KeyCode::Esc);
    assert_eq!(app.step(), &Step::Selection);
}
