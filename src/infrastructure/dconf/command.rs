use crate::domain::error::ApplyError;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Thin wrappers over the `dconf` and `gsettings` binaries. Output is treated
/// as opaque text; a non-zero exit is surfaced with the raw stderr so the
/// user sees exactly what the tool said.
pub struct DconfCommand;

impl DconfCommand {
    async fn run(args: &[&str]) -> Result<String, ApplyError> {
        tracing::debug!("Running: dconf {}", args.join(" "));
        let output = Command::new("dconf").args(args).output().await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::error!("dconf {} failed: {}", args.join(" "), stderr);
            return Err(ApplyError::ConfigTool { output: stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    /// `dconf dump <root>`, the whole subtree as one opaque blob.
    pub async fn dump(root: &str) -> Result<String, ApplyError> {
        let dump = Self::run(&["dump", root]).await?;
        tracing::debug!("dconf dump {} returned {} bytes", root, dump.len());
        Ok(dump)
    }

    /// `dconf load <root>` with stdin fed from `input`, bounded by `timeout`.
    /// The child is killed if the timeout elapses.
    pub async fn load(root: &str, input: &Path, timeout: Duration) -> Result<(), ApplyError> {
        tracing::debug!("Running: dconf load {} < {}", root, input.display());
        let stdin = std::fs::File::open(input)?;

        let child = Command::new("dconf")
            .args(["load", root])
            .stdin(Stdio::from(stdin))
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(result) => result?,
            Err(_) => {
                tracing::error!("dconf load {} timed out after {:?}", root, timeout);
                return Err(ApplyError::ConfigTool {
                    output: "Operation timed out".to_string(),
                });
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::error!("dconf load {} failed: {}", root, stderr);
            return Err(ApplyError::ConfigTool { output: stderr });
        }

        Ok(())
    }

    /// `dconf read <key>`. One value line; quoting is left to the caller.
    pub async fn read(key: &str) -> Result<String, ApplyError> {
        let value = Self::run(&["read", key]).await?;
        Ok(value.trim().to_string())
    }

    /// `dconf write <key> <value>`. The exit code is the only signal.
    pub async fn write(key: &str, value: &str) -> Result<(), ApplyError> {
        Self::run(&["write", key, value]).await.map(|_| ())
    }
}

pub struct GsettingsCommand;

impl GsettingsCommand {
    async fn run(args: &[&str]) -> Result<String, ApplyError> {
        tracing::debug!("Running: gsettings {}", args.join(" "));
        let output = Command::new("gsettings").args(args).output().await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::error!("gsettings {} failed: {}", args.join(" "), stderr);
            return Err(ApplyError::ConfigTool { output: stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    pub async fn get(schema: &str, key: &str) -> Result<String, ApplyError> {
        let value = Self::run(&["get", schema, key]).await?;
        Ok(value.trim().to_string())
    }

    pub async fn set(schema: &str, key: &str, value: &str) -> Result<(), ApplyError> {
        Self::run(&["set", schema, key, value]).await.map(|_| ())
    }
}

/// Strips the shell-style quoting dconf puts around string values.
pub fn strip_quotes(value: &str) -> &str {
    value.trim().trim_matches('\'').trim_matches('"')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_quotes_handles_both_styles() {
        assert_eq!(strip_quotes("'Adwaita-dark'"), "Adwaita-dark");
        assert_eq!(strip_quotes("\"Papirus\""), "Papirus");
        assert_eq!(strip_quotes("  'Yaru'  "), "Yaru");
        assert_eq!(strip_quotes("plain"), "plain");
    }
}
