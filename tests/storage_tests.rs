use racun_server::storage::{ensure_writable, invoice_path, save_invoice};

fn scratch_dir(tag: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("racun-storage-test-{}-{}", tag, std::process::id()))
}

#[test]
fn test_ensure_writable_creates_directory() {
    let dir = scratch_dir("create").join("nested");
    assert!(!dir.exists());
    ensure_writable(&dir).unwrap();
    assert!(dir.is_dir());
    // No probe file left behind.
    assert!(!dir.join(".write-probe").exists());
    std::fs::remove_dir_all(dir.parent().unwrap()).ok();
}

#[test]
fn test_save_invoice_writes_bytes() {
    let dir = scratch_dir("save");
    ensure_writable(&dir).unwrap();

    let path = save_invoice(&dir, "Invoice_1_test.pdf", b"%PDF-1.3 fake").unwrap();
    assert_eq!(path, dir.join("Invoice_1_test.pdf"));
    assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.3 fake");
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_save_invoice_overwrites_same_name() {
    let dir = scratch_dir("overwrite");
    ensure_writable(&dir).unwrap();

    save_invoice(&dir, "Invoice_2_test.pdf", b"first").unwrap();
    save_invoice(&dir, "Invoice_2_test.pdf", b"second").unwrap();
    assert_eq!(
        std::fs::read(dir.join("Invoice_2_test.pdf")).unwrap(),
        b"second"
    );
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_invoice_path_accepts_plain_filenames() {
    let dir = scratch_dir("path");
    let path = invoice_path(&dir, "Invoice_3_podjetje-doo.pdf").unwrap();
    assert_eq!(path, dir.join("Invoice_3_podjetje-doo.pdf"));
}

#[test]
fn test_invoice_path_rejects_escapes() {
    let dir = scratch_dir("escape");
    assert!(invoice_path(&dir, "").is_none());
    assert!(invoice_path(&dir, "../secrets.pdf").is_none());
    assert!(invoice_path(&dir, "a/b.pdf").is_none());
    assert!(invoice_path(&dir, "a\\b.pdf").is_none());
    assert!(invoice_path(&dir, "..").is_none());
}
