use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

pub fn append_toast_log(path: &Path, msg: &str) {
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = writeln!(file, "{} - {}", Local::now().to_rfc3339(), msg);
    }
}

#[cfg(test)]
mod tests {
    use super::append_toast_log;

    #[test]
    fn appends_timestamped_lines() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("toast.log");

        append_toast_log(&path, "There are 5 boxes");
        append_toast_log(&path, "There are 10 boxes");

        let contents = std::fs::read_to_string(&path).expect("read");
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" - There are 5 boxes"));
        assert!(lines[1].ends_with(" - There are 10 boxes"));
    }
}
