//! Clipboard delivery
//!
//! Pipes text into whichever clipboard command the host provides.

use std::env;
use std::io::{self, Write};
use std::process::{Command, Stdio};

use thiserror::Error;

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("clipboard command failed: {0}")]
    CommandFailed(String),

    #[error("no clipboard command found (tried wl-copy, xsel, xclip, pbcopy, clip.exe, termux-clipboard-set)")]
    NoClipboardFound,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Clipboard commands, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardProvider {
    Tmux,
    Wayland,
    Xsel,
    Xclip,
    MacOS,
    Windows,
    Termux,
}

impl ClipboardProvider {
    /// Program that reads the clipboard text from stdin.
    pub fn program(self) -> &'static str {
        match self {
            Self::Tmux => "tmux",
            Self::Wayland => "wl-copy",
            Self::Xsel => "xsel",
            Self::Xclip => "xclip",
            Self::MacOS => "pbcopy",
            Self::Windows => "clip.exe",
            Self::Termux => "termux-clipboard-set",
        }
    }

    pub fn args(self) -> &'static [&'static str] {
        match self {
            Self::Tmux => &["load-buffer", "-w", "-"],
            Self::Xsel => &["-b", "-i"],
            Self::Xclip => &["-selection", "clipboard", "-in"],
            Self::Wayland | Self::MacOS | Self::Windows | Self::Termux => &[],
        }
    }

    pub fn copy(self, text: &str) -> Result<()> {
        pipe_to_command(self.program(), self.args(), text)
    }
}

/// Copy `text` using the first available provider.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let provider = detect_providers()
        .into_iter()
        .next()
        .ok_or(ClipboardError::NoClipboardFound)?;
    provider.copy(text)
}

/// Providers usable on this host, most preferred first.
pub fn detect_providers() -> Vec<ClipboardProvider> {
    let mut candidates = Vec::new();

    if env::var_os("TMUX").is_some() {
        candidates.push(ClipboardProvider::Tmux);
    }

    if cfg!(target_os = "macos") {
        candidates.push(ClipboardProvider::MacOS);
    } else if cfg!(target_os = "windows") || env::var_os("WSL_DISTRO_NAME").is_some() {
        candidates.push(ClipboardProvider::Windows);
    } else if cfg!(target_os = "android") {
        candidates.push(ClipboardProvider::Termux);
    } else {
        if env::var_os("WAYLAND_DISPLAY").is_some() {
            candidates.push(ClipboardProvider::Wayland);
        }
        candidates.push(ClipboardProvider::Xsel);
        candidates.push(ClipboardProvider::Xclip);
    }

    candidates
        .into_iter()
        .filter(|provider| command_exists(provider.program()))
        .collect()
}

/// Check whether `program` is an executable file somewhere on `PATH`.
pub fn command_exists(program: &str) -> bool {
    let Some(paths) = env::var_os("PATH") else {
        return false;
    };
    env::split_paths(&paths).any(|dir| {
        let candidate = dir.join(program);
        candidate.is_file() || candidate.with_extension("exe").is_file()
    })
}

fn pipe_to_command(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .spawn()
        .map_err(|e| ClipboardError::CommandFailed(format!("failed to spawn {}: {}", program, e)))?;

    {
        let stdin = child.stdin.as_mut().ok_or_else(|| {
            ClipboardError::CommandFailed(format!("failed to open stdin for {}", program))
        })?;
        // Early exit closes the pipe; the exit status below carries the failure
        if let Err(e) = stdin.write_all(text.as_bytes()) {
            if e.kind() != io::ErrorKind::BrokenPipe {
                return Err(e.into());
            }
        }
    }
    // Close stdin so the command sees EOF
    drop(child.stdin.take());

    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed(format!(
            "{} exited with status: {}",
            program, status
        )))
    }
}
