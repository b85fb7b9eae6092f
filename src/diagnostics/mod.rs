// Copyright 2025 STARGA Inc.
// Licensed under the Apache License, Version 2.0 (the “License”);
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at:
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an “AS IS” BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Part of clc, the OpenCL offline compiler.

//! Program-name-prefixed diagnostics on stderr.
//!
//! `Diagnostics` carries the program name and verbosity explicitly. The
//! binary installs it once as the `log` backend; the library only uses the
//! `log` macros.

use std::io::{self, Write};
use std::path::Path;

use log::LevelFilter;

use crate::cli::Verbosity;

/// Environment variable overriding the verbosity-derived log filter.
pub const LOG_ENV: &str = "CLC_LOG";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostics {
    program: String,
    verbosity: Verbosity,
}

impl Diagnostics {
    pub fn new(program: impl Into<String>, verbosity: Verbosity) -> Self {
        Self {
            program: program.into(),
            verbosity,
        }
    }

    /// Installs the stderr logger. Later calls are ignored.
    pub fn install(&self) {
        let program = self.program.clone();
        let _ = env_logger::Builder::new()
            .filter_level(level_filter(self.verbosity))
            .parse_env(LOG_ENV)
            .target(env_logger::Target::Stderr)
            .format(move |buf, record| {
                writeln!(buf, "{}", prefixed(&program, &record.args().to_string()))
            })
            .try_init();
    }

    /// Writes a fatal message to stderr.
    pub fn report(&self, message: &dyn std::fmt::Display) {
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{}", prefixed(&self.program, &message.to_string()));
    }
}

/// Log filter for a verbosity level.
pub fn level_filter(verbosity: Verbosity) -> LevelFilter {
    match verbosity {
        // Warnings show even when quiet.
        Verbosity::Quiet | Verbosity::Normal => LevelFilter::Warn,
        Verbosity::Verbose => LevelFilter::Info,
        Verbosity::Debug => LevelFilter::Debug,
    }
}

/// `argv[0]` without directories or extension.
pub fn program_name(argv0: &str) -> String {
    Path::new(argv0)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .unwrap_or("clc")
        .to_string()
}

/// `PROGRAM: MESSAGE` without a trailing newline.
pub fn prefixed(program: &str, message: &str) -> String {
    format!("{program}: {}", message.trim_end_matches('\n'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_name_drops_directories_and_extension() {
        assert_eq!(program_name("/usr/local/bin/clc"), "clc");
        assert_eq!(program_name(""), "clc");
    }

    #[test]
    fn prefix_trims_trailing_newlines() {
        assert_eq!(prefixed("clc", "during build: log\n\n"), "clc: during build: log");
    }

    #[test]
    fn quiet_still_shows_warnings() {
        assert_eq!(level_filter(Verbosity::Quiet), LevelFilter::Warn);
        assert!(log::Level::Warn <= level_filter(Verbosity::Quiet));
        assert!(log::Level::Info > level_filter(Verbosity::Quiet));
    }

    #[test]
    fn verbosity_orders_filters() {
        assert_eq!(level_filter(Verbosity::Normal), LevelFilter::Warn);
        assert!(level_filter(Verbosity::Debug) > level_filter(Verbosity::Verbose));
    }
}
