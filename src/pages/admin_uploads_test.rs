use super::*;

fn pdf(size: f64) -> SelectedFile {
    SelectedFile { name: "sbc-jhs1.pdf".to_owned(), mime: PDF_MIME.to_owned(), size }
}

#[test]
fn pdf_within_limit_is_accepted() {
    assert_eq!(validate_upload(PDF_MIME, 1024.0), Ok(()));
    assert_eq!(validate_upload(PDF_MIME, MAX_UPLOAD_BYTES), Ok(()));
}

#[test]
fn non_pdf_is_rejected() {
    assert_eq!(validate_upload("image/png", 10.0), Err("Only PDF files are allowed."));
    assert_eq!(validate_upload("", 10.0), Err("Only PDF files are allowed."));
}

#[test]
fn oversized_pdf_is_rejected() {
    assert_eq!(validate_upload(PDF_MIME, MAX_UPLOAD_BYTES + 1.0), Err("File is too large. Maximum size is 25 MB."));
}

#[test]
fn file_sizes_are_humanized() {
    assert_eq!(format_file_size(512.0), "512 B");
    assert_eq!(format_file_size(2048.0), "2.0 KB");
    assert_eq!(format_file_size(1.5 * 1024.0 * 1024.0), "1.50 MB");
}

#[test]
fn precheck_requires_admin() {
    let file = pdf(100.0);
    let err = upload_precheck(Some(&file), Some(Role::Teacher)).unwrap_err();
    assert_eq!(err.title, "Access Denied");
    assert!(upload_precheck(Some(&file), None).is_err());
}

#[test]
fn precheck_requires_a_selection() {
    let err = upload_precheck(None, Some(Role::Admin)).unwrap_err();
    assert_eq!(err.title, "Please select a PDF file to upload.");
    assert_eq!(err.description, None);
}

#[test]
fn precheck_revalidates_the_file() {
    let err = upload_precheck(Some(&pdf(MAX_UPLOAD_BYTES * 2.0)), Some(Role::Admin)).unwrap_err();
    assert_eq!(err.title, "Invalid File");
    assert!(upload_precheck(Some(&pdf(100.0)), Some(Role::Admin)).is_ok());
}
