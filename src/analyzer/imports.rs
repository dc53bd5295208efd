/// Isolate the leading contiguous import/blank-line header of a file.
///
/// Collects lines from the top while each is blank or starts with `import`;
/// stops at the first line that is neither. The header is returned raw,
/// blank lines included.
pub fn extract_import_header(text: &str) -> String {
    let mut header = String::new();
    for line in text.lines() {
        let t = line.trim_start();
        if t.is_empty() || t.starts_with("import") {
            header.push_str(line);
            header.push('\n');
        } else {
            break;
        }
    }
    header
}
