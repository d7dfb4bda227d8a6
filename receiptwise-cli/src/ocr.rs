use anyhow::{bail, Context, Result};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::OcrSection;

/// Run the configured OCR binary on an image and return its text.
///
/// Invocation is `<command> <image> stdout -l <lang> [args...]`, which is
/// tesseract's "print to stdout" form.
pub async fn extract_text(image: &Path, ocr: &OcrSection) -> Result<String> {
    if !image.exists() {
        bail!("image not found: {}", image.display());
    }

    let bin = which::which(&ocr.command).with_context(|| {
        format!(
            "OCR command {:?} not found on PATH.\n\
Install tesseract or set ocr.command in ~/.receiptwise/config.toml, \
or pass already extracted text with --text <file>.",
            ocr.command
        )
    })?;

    let args = build_args(image, ocr);
    info!(bin = %bin.display(), image = %image.display(), "running OCR");
    debug!(?args, "OCR arguments");

    let mut cmd = tokio::process::Command::new(&bin);
    cmd.args(&args)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .kill_on_drop(true);

    let output = match tokio::time::timeout(Duration::from_secs(ocr.timeout_secs), cmd.output()).await {
        Ok(res) => res.with_context(|| format!("running {}", bin.display()))?,
        Err(_) => bail!(
            "OCR timed out after {}s on {}",
            ocr.timeout_secs,
            image.display()
        ),
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("{} exited with {}. stderr: {}", bin.display(), output.status, stderr.trim());
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn build_args(image: &Path, ocr: &OcrSection) -> Vec<String> {
    let mut args = vec![image.display().to_string(), "stdout".to_string()];
    if !ocr.lang.trim().is_empty() {
        args.push("-l".to_string());
        args.push(ocr.lang.clone());
    }
    args.extend(ocr.args.iter().cloned());
    args
}
