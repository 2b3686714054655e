mod common;
use common::{HEADER, ScriptedConsole, memory_store, rec};
use worklog::core::{EditOutcome, Session, replace_record};
use worklog::errors::AppError;
use worklog::store::{AuditLog, MemoryTable, Store};

const DESIGN: &str = "01/01/2024,Design,60,None";
const BUILD: &str = "02/01/2024,Build,30,None";

fn run_script(lines: &[&str], script: &[&str]) -> (Store<MemoryTable>, ScriptedConsole) {
    let mut session = Session::new(memory_store(lines), ScriptedConsole::new(script));
    session.run().expect("session ends with Quit");
    let (store, console) = session.into_parts();
    assert_eq!(console.remaining(), 0, "script fully consumed");
    (store, console)
}

fn table_text(store: &Store<MemoryTable>) -> String {
    store.table().content().unwrap_or_default().to_string()
}

#[test]
fn test_quit_right_away_leaves_table_untouched() {
    let (store, console) = run_script(&[DESIGN], &["4"]);
    assert_eq!(table_text(&store), format!("{HEADER}{DESIGN}\n"));
    assert!(console.transcript().contains("Main Menu"));
}

#[test]
fn test_missing_table_is_created_on_start() {
    let mut session = Session::new(Store::new(MemoryTable::new()), ScriptedConsole::new(&["4"]));
    session.run().expect("run");
    assert_eq!(session.store().table().content(), Some(HEADER));
}

#[test]
fn test_bad_header_stops_before_any_menu() {
    let store = Store::new(MemoryTable::with_content("date,title,duration\n"));
    let mut session = Session::new(store, ScriptedConsole::new(&["4"]));

    let err = session.run().expect_err("schema error");
    assert!(matches!(err, AppError::Schema { .. }));
    assert!(err.to_string().contains("is not formatted properly"));
    assert_eq!(session.console().remaining(), 1, "no input was read");
}

#[test]
fn test_log_work_appends_record() {
    let (store, console) = run_script(
        &[],
        &["1", "01/01/2024", "Design", "60", "", "", "4"],
    );

    assert_eq!(table_text(&store), format!("{HEADER}{DESIGN}\n"));
    let out = console.transcript();
    assert!(out.contains("New work log created:"));
    assert!(out.contains("Time Spent: 60 Minutes"));
    assert!(out.contains("Note: None"));
}

#[test]
fn test_log_work_reprompts_until_fields_are_valid() {
    let (store, console) = run_script(
        &[],
        &[
            "1",
            "32/01/2024",
            "1/1/2024",
            "01/01/2024",
            "",
            "\"Design\"",
            "Design",
            "sixty",
            "-5",
            "60",
            "<b>",
            "",
            "",
            "4",
        ],
    );

    assert_eq!(store.load_records().expect("load"), vec![rec("01/01/2024", "Design", "60", "")]);
    let out = console.transcript();
    assert!(out.contains("is not a valid date format"));
    assert!(out.contains("cannot be empty"));
    assert!(out.contains("surrounded by doublequotes"));
    assert!(out.contains("is not a whole number"));
    assert!(out.contains("invalid characters detected"));
}

#[test]
fn test_invalid_menu_choice_is_reported() {
    let (_, console) = run_script(&[], &["9", "abc", "4"]);
    let out = console.transcript();
    assert!(out.contains("'9' is not a valid option"));
    assert!(out.contains("'abc' is not a valid option"));
}

#[test]
fn test_delete_from_duration_search() {
    let (store, console) = run_script(
        &[DESIGN, BUILD],
        &["2", "3", "60", "d", "y", "6", "4"],
    );

    assert_eq!(table_text(&store), format!("{HEADER}{BUILD}\n"));
    assert!(console.transcript().contains("Change confirmed."));
}

#[test]
fn test_declined_delete_keeps_row() {
    let (store, console) = run_script(
        &[DESIGN, BUILD],
        &["2", "3", "60", "d", "n", "6", "4"],
    );

    assert_eq!(table_text(&store), format!("{HEADER}{DESIGN}\n{BUILD}\n"));
    assert!(console.transcript().contains("Change discarded."));
}

#[test]
fn test_edit_single_field_appends_new_and_removes_original() {
    let (store, console) = run_script(
        &[DESIGN, BUILD],
        &["2", "4", "design", "e", "3", "90", "y", "6", "4"],
    );

    assert_eq!(
        table_text(&store),
        format!("{HEADER}{BUILD}\n01/01/2024,Design,90,None\n")
    );
    let out = console.transcript();
    assert!(out.contains("Original Log:"));
    assert!(out.contains("Will Be Replaced With"));
}

#[test]
fn test_edit_with_identical_values_removes_the_record() {
    let (store, _) = run_script(
        &[DESIGN, BUILD],
        &[
            "2", "4", "design", "e", "5", "01/01/2024", "Design", "60", "", "y", "6", "4",
        ],
    );

    assert_eq!(table_text(&store), format!("{HEADER}{BUILD}\n"));
}

#[test]
fn test_edit_no_fields_changes_nothing() {
    let (store, _) = run_script(
        &[DESIGN, BUILD],
        &["2", "4", "design", "e", "6", "6", "4"],
    );
    assert_eq!(table_text(&store), format!("{HEADER}{DESIGN}\n{BUILD}\n"));
}

#[test]
fn test_edit_outcomes() {
    let original = rec("01/01/2024", "Design", "60", "None");

    let mut session = Session::new(
        memory_store(&[DESIGN, DESIGN]),
        ScriptedConsole::new(&["2", "Design review", "y"]),
    );
    let outcome = session.edit_record(&original).expect("edit");
    assert_eq!(
        outcome,
        EditOutcome::Replaced {
            record: rec("01/01/2024", "Design review", "60", "None"),
            removed: 2,
        }
    );

    let mut session = Session::new(
        memory_store(&[DESIGN]),
        ScriptedConsole::new(&["4", "later", "n"]),
    );
    assert_eq!(session.edit_record(&original).expect("edit"), EditOutcome::Declined);
    assert_eq!(
        session.store().table().content(),
        Some(format!("{HEADER}{DESIGN}\n").as_str())
    );

    let mut session = Session::new(memory_store(&[DESIGN]), ScriptedConsole::new(&["6"]));
    assert_eq!(session.edit_record(&original).expect("edit"), EditOutcome::Skipped);
}

#[test]
fn test_replace_record_of_missing_original_only_appends() {
    let mut store = memory_store(&[BUILD]);
    let ghost = rec("09/09/2024", "Ghost", "1", "None");
    let proposed = rec("10/09/2024", "Real", "2", "None");

    assert_eq!(replace_record(&mut store, &ghost, &proposed).expect("replace"), 0);
    assert_eq!(
        table_text(&store),
        format!("{HEADER}{BUILD}\n10/09/2024,Real,2,None\n")
    );
}

#[test]
fn test_clear_all_logs_with_token() {
    let (store, console) = run_script(&[DESIGN, BUILD], &["3", "clear", "", "4"]);
    assert_eq!(table_text(&store), HEADER);
    assert!(console.transcript().contains("All work logs have been cleared."));
}

#[test]
fn test_clear_all_logs_refused() {
    let (store, console) = run_script(&[DESIGN, BUILD], &["3", "nope", "", "4"]);
    assert_eq!(table_text(&store), format!("{HEADER}{DESIGN}\n{BUILD}\n"));
    assert!(console.transcript().contains("Work logs have been preserved."));
}

#[test]
fn test_invalid_pattern_is_reprompted() {
    let (_, console) = run_script(
        &[DESIGN, BUILD],
        &["2", "5", "(unclosed", "^Bu", "r", "6", "4"],
    );

    let out = console.transcript();
    assert!(out.contains("Please try again."));
    assert!(out.contains("Task Name: Build"));
    assert!(!out.contains("Task Name: Design"));
}

#[test]
fn test_date_search_lists_dates_in_chronological_order() {
    let (_, console) = run_script(
        &[BUILD, DESIGN],
        &["2", "1", "2", "r", "6", "4"],
    );

    let out = console.transcript();
    assert!(out.contains("1: 01/01/2024\n2: 02/01/2024"));
    assert!(out.contains("Task Name: Build"));
}

#[test]
fn test_date_range_search_results_are_sorted() {
    let (_, console) = run_script(
        &[BUILD, DESIGN, "15/02/2024,Later,5,None"],
        &["2", "2", "01/01/2024", "31/01/2024", "n", "r", "6", "4"],
    );

    let out = console.transcript();
    let design = out.find("Task Name: Design").expect("design shown");
    let build = out.find("Task Name: Build").expect("build shown");
    assert!(design < build);
    assert!(out.contains("Displaying result 2 of 2"));
    assert!(!out.contains("Task Name: Later"));
}

#[test]
fn test_paging_stops_at_both_ends() {
    let (_, console) = run_script(
        &[
            "01/01/2024,One,30,None",
            "02/01/2024,Two,30,None",
            "03/01/2024,Three,30,None",
        ],
        &["2", "3", "30", "p", "x", "n", "n", "n", "r", "6", "4"],
    );

    let out = console.transcript();
    assert_eq!(out.matches("Displaying result 1 of 3").count(), 3);
    assert_eq!(out.matches("Displaying result 2 of 3").count(), 1);
    assert_eq!(out.matches("Displaying result 3 of 3").count(), 2);
}

#[test]
fn test_no_results_message() {
    let (_, console) = run_script(&[DESIGN], &["2", "3", "999", "", "6", "4"]);
    assert!(
        console
            .transcript()
            .contains("Sorry, no results matched your search.")
    );
}

#[test]
fn test_date_search_on_empty_log_shows_no_results() {
    let (_, console) = run_script(&[], &["2", "1", "", "6", "4"]);
    assert!(
        console
            .transcript()
            .contains("Sorry, no results matched your search.")
    );
}

#[test]
fn test_malformed_row_is_reported_when_displayed() {
    let (store, console) = run_script(
        &["03/01/2024,Broken,15"],
        &["2", "1", "1", "", "6", "4"],
    );

    assert!(console.transcript().contains("is not formatted correctly"));
    assert_eq!(table_text(&store), format!("{HEADER}03/01/2024,Broken,15\n"));
}

#[test]
fn test_search_reloads_after_delete() {
    let (_, console) = run_script(
        &[DESIGN, BUILD],
        &["2", "3", "60", "d", "y", "3", "60", "", "6", "4"],
    );
    assert!(
        console
            .transcript()
            .contains("Sorry, no results matched your search.")
    );
}

#[test]
fn test_end_of_input_is_an_error() {
    let mut session = Session::new(memory_store(&[]), ScriptedConsole::new(&["1", "01/01/2024"]));
    let err = session.run().expect_err("input ran out");
    assert!(matches!(err, AppError::Io(ref e) if e.kind() == std::io::ErrorKind::UnexpectedEof));
}

#[test]
fn test_mutations_are_audited() {
    let dir = tempfile::tempdir().expect("tempdir");
    let audit = AuditLog::new(dir.path().join("work_log.audit.csv"));

    let mut session = Session::new(
        Store::new(MemoryTable::new()),
        ScriptedConsole::new(&[
            "1", "01/01/2024", "Design", "60", "", "",
            "2", "3", "60", "e", "3", "90", "y",
            "3", "90", "d", "y", "6",
            "3", "CLEAR", "",
            "4",
        ]),
    )
    .with_audit(audit.clone());
    session.run().expect("run");

    let entries = audit.read_all().expect("read audit");
    let ops: Vec<&str> = entries.iter().map(|e| e.operation.as_str()).collect();
    assert_eq!(ops, vec!["init", "add", "edit", "del", "clear"]);

    assert_eq!(entries[2].target, "01/01/2024 Design");
    assert_eq!(entries[2].message, "Replaced with 01/01/2024 Design (90 min)");
    assert_eq!(entries[3].message, "Deleted 1 row(s)");
}

#[test]
fn test_separator_underlines_menu_titles() {
    let mut session = Session::new(memory_store(&[]), ScriptedConsole::new(&["4"])).with_separator('=');
    session.run().expect("run");
    assert!(session.console().transcript().contains("Main Menu\n========="));
}
