use super::*;

#[test]
fn display_file_name_strips_fakepath() {
    assert_eq!(display_file_name(r"C:\fakepath\receipt.jpg"), "receipt.jpg");
}

#[test]
fn display_file_name_strips_unix_directories() {
    assert_eq!(display_file_name("/home/me/scans/receipt.png"), "receipt.png");
}

#[test]
fn display_file_name_keeps_bare_names() {
    assert_eq!(display_file_name("receipt.png"), "receipt.png");
}

#[test]
fn display_file_name_empty_input() {
    assert_eq!(display_file_name(""), "");
}
