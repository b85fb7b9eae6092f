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

//! Command-line flags.
//!
//! Flags use the `-x=VALUE` form (`-d=Intel`, `-b=-DTILE=32`), which is why
//! they are tokenized here rather than by a generic argument parser.

use std::fmt;

use crate::error::{ClcError, Result};
use crate::naming::STREAM_SENTINEL;

pub const USAGE: &str = "\
OpenCL Offline Compiler
usage: clc [OPTS] ARGS
where [OPTS]
 -h / --help     prints this message
 -h=d            lists devices (with -v, lists their properties too)
 -d=DEV          targets the device with DEV as a substring of its name
 -b=BUILD-OPT    adds a build option (e.g. -b=-DTILE=32); may be repeated
 -o=PATH         output path (- means stdout)
 -q/-v/-v2       quiet/verbose/debug (also -v=-1, -v=1, -v=2)
[ARGS]           list of compilation units (.cl files); - reads stdin

EXAMPLES:
 % clc foo.cl          saves foo.<vendor suffix> for the default device
 % clc -d=Intel ...    selects a device containing \"Intel\" in its CL_DEVICE_NAME
 % clc -h=d -v         lists every device with its properties

ENVIRONMENT:
 CLC_LOG               log filter overriding -q/-v (e.g. debug)
";

/// Diagnostic verbosity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet = -1,
    #[default]
    Normal = 0,
    Verbose = 1,
    Debug = 2,
}

impl Verbosity {
    pub fn level(self) -> i32 {
        self as i32
    }

    /// Maps the `-q`/`-v` spellings to a level.
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "-q" | "-v=-1" => Some(Verbosity::Quiet),
            "-v" | "-v=1" => Some(Verbosity::Verbose),
            "-v2" | "-v=2" => Some(Verbosity::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `-h` or `--help`; nothing else is looked at.
    Help,
    Run(Options),
}

/// What a run does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    ListDevices,
    #[default]
    Compile,
}

/// Options of a listing or compile run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,
    /// Positional source arguments; `-` reads stdin.
    pub inputs: Vec<String>,
    pub device: Option<String>,
    pub output: Option<String>,
    pub build_options: Vec<String>,
    pub verbosity: Verbosity,
}

/// Parses the arguments that follow the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut opts = Options::default();
    let mut verbosity_set = false;

    for arg in args {
        let arg = arg.as_ref();
        if arg == "-h" || arg == "--help" {
            return Ok(Command::Help);
        } else if let Some(topic) = arg.strip_prefix("-h=") {
            if topic != "d" {
                return Err(bad_arg(arg, "unknown listing (expected -h=d)"));
            }
            opts.mode = Mode::ListDevices;
        } else if arg == "-q" || arg.starts_with("-v") {
            let level = Verbosity::from_flag(arg)
                .ok_or_else(|| bad_arg(arg, "unexpected verbosity option"))?;
            // First occurrence wins.
            if !verbosity_set {
                opts.verbosity = level;
                verbosity_set = true;
            }
        } else if arg.starts_with("-b") {
            let value = flag_value(arg, "-b")?;
            opts.build_options.push(value.to_string());
        } else if arg.starts_with("-d") {
            let value = flag_value(arg, "-d")?;
            if opts.device.is_some() {
                return Err(bad_arg(arg, "argument respecified"));
            }
            opts.device = Some(value.to_string());
        } else if arg.starts_with("-o") {
            let value = flag_value(arg, "-o")?;
            if opts.output.is_some() {
                return Err(bad_arg(arg, "argument respecified"));
            }
            opts.output = Some(value.to_string());
        } else if arg != STREAM_SENTINEL && arg.starts_with('-') {
            return Err(bad_arg(arg, "unexpected option"));
        } else {
            opts.inputs.push(arg.to_string());
        }
    }

    if opts.mode == Mode::Compile && opts.inputs.is_empty() {
        return Err(ClcError::usage("expected input argument"));
    }
    Ok(Command::Run(opts))
}

/// The non-empty value of a `-x=VALUE` flag.
fn flag_value<'a>(arg: &'a str, flag: &str) -> Result<&'a str> {
    match arg.strip_prefix(flag).and_then(|rest| rest.strip_prefix('=')) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(bad_arg(arg, &format!("must be of the form {flag}=..."))),
    }
}

fn bad_arg(arg: &str, message: &str) -> ClcError {
    ClcError::usage(format!("{arg}: {message}"))
}
