use super::*;

#[test]
fn test_get_existing_doc() {
    let doc = ErrorDocs::get(ErrorCode::E0001);
    assert!(doc.starts_with("# E0001: Unterminated Block Comment"));
}

#[test]
fn test_every_doc_is_headed_by_its_code() {
    for &code in ErrorCode::ALL {
        let doc = ErrorDocs::get(code);
        assert!(doc.starts_with(&format!("# {code}")), "{code} doc heading");
    }
}
