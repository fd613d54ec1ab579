use super::*;

fn create_test_styling() -> StyleManager {
    StyleManager::new(false)
}

#[test]
fn test_status_message_formatting() {
    let styling = create_test_styling();
    let status = StatusDisplay::new(&styling);

    // Verify no panics across every line kind
    status.working("Resolving Serilog");
    status.success("Graph built", "3 packages");
    status.error("Serilog", "not found");
    status.warning("cycle truncated");
    status.info("using offline registry");
    status.message("Plain message");
    status.subtle("Secondary info");
    status.section("Load order");
    status.step(1, 3, "C");
}

#[test]
fn test_join_details() {
    assert_eq!(join_details("item", ""), "item");
    assert_eq!(join_details("item", "details"), "item: details");
}

#[test]
fn test_list_accepts_owned_and_borrowed() {
    let styling = create_test_styling();
    let status = StatusDisplay::new(&styling);

    status.list(&["a", "b"]);
    status.list(&["c".to_string()]);
    status.list::<&str>(&[]);
}

#[test]
fn test_verbatim_handles_missing_trailing_newline() {
    let styling = create_test_styling();
    let status = StatusDisplay::new(&styling);

    status.verbatim("diagram", "@startuml\n@enduml\n");
    status.verbatim("diagram", "no newline");
    status.verbatim("", "");
}
