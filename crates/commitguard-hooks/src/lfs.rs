// Rust guideline compliant 2026-10-18

//! Large-file pointer detection and smudge filter invocation.

use commitguard_core::{Error, Result};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// First line of every large-file pointer record.
pub const POINTER_VERSION_LINE: &[u8] = b"version https://git-lfs.github.com/spec/v1";

/// Pointer records are always smaller than this.
const MAX_POINTER_SIZE: usize = 1024;

/// Returns whether `bytes` is a large-file pointer record.
pub fn is_pointer(bytes: &[u8]) -> bool {
    bytes.len() < MAX_POINTER_SIZE
        && bytes.starts_with(POINTER_VERSION_LINE)
        && matches!(bytes.get(POINTER_VERSION_LINE.len()).copied(), Some(b'\n' | b'\r'))
}

/// Decodes a pointer record by piping it through the smudge command.
///
/// The command runs in `workdir` with `-- <path>` appended and the pointer on
/// stdin; its stdout is the materialized content.
///
/// # Errors
///
/// Returns [`Error::Filter`] if the command is empty, cannot be spawned, or
/// exits unsuccessfully.
pub fn smudge(command: &[String], workdir: &Path, path: &str, pointer: &[u8]) -> Result<Vec<u8>> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| Error::Filter("smudge command is empty".to_string()))?;

    tracing::debug!(command = %command.join(" "), path, "running smudge filter");
    let mut child = Command::new(program)
        .args(args)
        .arg("--")
        .arg(path)
        .current_dir(workdir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| Error::Filter(format!("failed to run {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(pointer)?;
    }

    let output = child.wait_with_output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Filter(format!(
            "'{}' exited with {}: {}",
            command.join(" "),
            output.status,
            stderr.trim()
        )));
    }

    Ok(output.stdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    const POINTER: &str = "version https://git-lfs.github.com/spec/v1\noid sha256:4d7a214614ab2935c943f9e0ff69d22eadbb8f32b1258daaa5e2ca24d17e2393\nsize 12345\n";

    #[test]
    fn test_pointer_detected() {
        assert!(is_pointer(POINTER.as_bytes()));
    }

    #[test]
    fn test_plain_text_is_not_pointer() {
        assert!(!is_pointer(b"%YAML 1.1\nPlayerSettings:\n  cloudProjectId: \n"));
        assert!(!is_pointer(b""));
    }

    #[test]
    fn test_version_line_must_end() {
        assert!(!is_pointer(b"version https://git-lfs.github.com/spec/v10\n"));
    }

    #[test]
    fn test_oversized_content_is_not_pointer() {
        let mut content = POINTER.to_string();
        content.push_str(&"x".repeat(MAX_POINTER_SIZE));
        assert!(!is_pointer(content.as_bytes()));
    }

    #[test]
    fn test_empty_command_fails() {
        let result = smudge(&[], Path::new("."), "a", POINTER.as_bytes());
        assert!(matches!(result, Err(Error::Filter(_))));
    }

    #[test]
    fn test_missing_program_fails() {
        let command = vec!["commitguard-no-such-smudge-program".to_string()];
        let result = smudge(&command, Path::new("."), "a", POINTER.as_bytes());
        assert!(matches!(result, Err(Error::Filter(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_command_output_is_returned() {
        let command = vec![
            "sh".to_string(),
            "-c".to_string(),
            "cat >/dev/null; printf 'decoded'".to_string(),
        ];
        let output = smudge(&command, Path::new("."), "a", POINTER.as_bytes()).unwrap();
        assert_eq!(output, b"decoded");
    }

    #[cfg(unix)]
    #[test]
    fn test_command_failure_carries_stderr() {
        let command = vec![
            "sh".to_string(),
            "-c".to_string(),
            "cat >/dev/null; echo 'object missing' >&2; exit 2".to_string(),
        ];
        let result = smudge(&command, Path::new("."), "a", POINTER.as_bytes());
        match result {
            Err(Error::Filter(msg)) => assert!(msg.contains("object missing"), "{}", msg),
            other => panic!("expected filter error, got {:?}", other),
        }
    }
}
