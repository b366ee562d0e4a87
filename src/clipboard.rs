use anyhow::{Context, Result};
use crate::models::Recipe;

/// Clipboard text for a recipe's ingredient list, one ingredient per line.
pub fn ingredients_text(recipe: &Recipe) -> String {
    recipe.ingredients.join("\n")
}

/// Copies text to the system clipboard via wl-copy or xclip.
pub fn copy_text(text: &str) -> Result<()> {
    #[cfg(not(target_os = "linux"))]
    {
        let _ = text;
        return Err(anyhow::anyhow!("Clipboard copy is only supported on Linux"));
    }

    #[cfg(target_os = "linux")]
    {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let child = Command::new("wl-copy")
            .stdin(Stdio::piped())
            .spawn()
            .or_else(|_| {
                Command::new("xclip")
                    .args(["-selection", "clipboard"])
                    .stdin(Stdio::piped())
                    .spawn()
            });

        let mut child = child.map_err(|_| {
            anyhow::anyhow!("Clipboard tools not available (wl-copy or xclip)")
        })?;

        child
            .stdin
            .take()
            .context("Clipboard tool has no stdin")?
            .write_all(text.as_bytes())
            .context("Failed to write to clipboard")?;

        let status = child.wait().context("Clipboard tool did not finish")?;
        if !status.success() {
            return Err(anyhow::anyhow!("Clipboard tool exited with {status}"));
        }

        Ok(())
    }
}
