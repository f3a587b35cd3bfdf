// SPDX-License-Identifier: MPL-2.0
//! Launcher port for opening archived URLs.
//!
//! Activating a link item ends here: the application asks the launcher to
//! open the URL in the system browser and observes nothing back. The trait
//! keeps the OS boundary behind a seam so tests can record what would have
//! been opened instead of spawning anything.

use std::process::Command;

/// Fire-and-forget handoff to an external browsing context.
pub trait Launcher {
    /// Opens `url` in a new, unprivileged browsing context. Failures are the
    /// platform's concern; the application never observes them beyond a log
    /// line.
    fn open_url(&self, url: &str);
}

/// Production launcher shelling out to the platform opener.
#[derive(Debug, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn opener() -> (&'static str, &'static [&'static str]) {
        #[cfg(target_os = "macos")]
        {
            ("open", &[])
        }
        #[cfg(target_os = "windows")]
        {
            ("cmd", &["/C", "start", ""])
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            ("xdg-open", &[])
        }
    }
}

impl Launcher for SystemLauncher {
    fn open_url(&self, url: &str) {
        let (program, args) = Self::opener();
        if let Err(e) = Command::new(program).args(args).arg(url).spawn() {
            eprintln!("Failed to open URL {url}: {e}");
        }
    }
}

/// Test double that records every URL it was asked to open.
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    opened: std::cell::RefCell<Vec<String>>,
}

impl RecordingLauncher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl Launcher for RecordingLauncher {
    fn open_url(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_launcher_captures_urls_in_order() {
        let launcher = RecordingLauncher::new();
        launcher.open_url("https://example.org/a");
        launcher.open_url("https://example.org/b");

        assert_eq!(
            launcher.opened(),
            vec!["https://example.org/a", "https://example.org/b"]
        );
    }

    #[test]
    fn system_launcher_picks_a_platform_opener() {
        let (program, _) = SystemLauncher::opener();
        assert!(!program.is_empty());
    }
}
