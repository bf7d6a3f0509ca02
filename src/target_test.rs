use super::*;

#[test]
fn test_classifies_office_titles() {
    assert_eq!(
        TargetApp::from_window_title("Document1 - Word"),
        TargetApp::Word
    );
    assert_eq!(
        TargetApp::from_window_title("Book1 - Excel"),
        TargetApp::Excel
    );
    assert_eq!(
        TargetApp::from_window_title("Presentation1 - PowerPoint"),
        TargetApp::PowerPoint
    );
}

#[test]
fn test_unknown_title_is_other() {
    assert_eq!(TargetApp::from_window_title("Untitled - Notepad"), TargetApp::Other);
    assert_eq!(TargetApp::from_window_title(""), TargetApp::Other);
    assert!(!TargetApp::Other.is_office());
}

#[test]
fn test_first_match_wins() {
    // A workbook named after Word still routes to Word
    assert_eq!(
        TargetApp::from_window_title("Word list.xlsx - Excel"),
        TargetApp::Word
    );
}

#[test]
fn test_match_is_case_sensitive() {
    assert_eq!(TargetApp::from_window_title("password manager"), TargetApp::Other);
}

#[test]
fn test_target_app_serde_and_display() {
    assert_eq!(serde_json::to_string(&TargetApp::PowerPoint).unwrap(), "\"powerpoint\"");
    assert_eq!(TargetApp::Excel.to_string(), "Excel");
    assert!(TargetApp::Word.is_office());
}

#[test]
fn test_hotkey_constant() {
    assert_eq!(HOTKEY, "Control+K");
}
