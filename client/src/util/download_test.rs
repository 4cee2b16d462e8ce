use super::*;

#[test]
fn plain_text_file_uses_text_plain_mime() {
    let file = TextFile::plain("a.txt", "hello");
    assert_eq!(file.mime, "text/plain");
    assert_eq!(file.name, "a.txt");
    assert_eq!(file.contents, "hello");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn save_is_unavailable_outside_the_browser() {
    let file = TextFile::plain("a.txt", "hello");
    assert_eq!(save_text_file(&file), Err(DownloadError::Unavailable));
}

#[test]
fn download_errors_render_readable_messages() {
    assert_eq!(
        DownloadError::Browser("quota".to_owned()).to_string(),
        "browser rejected the download: quota"
    );
}
