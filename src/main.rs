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

//! `clc` command-line entry point.

use std::io;
use std::process::ExitCode;

use clc::cli::{self, Command, USAGE};
use clc::diagnostics::{program_name, Diagnostics};
use clc::runtime::opencl::OpenClRuntime;
use clc::{ClcError, Options};

fn main() -> ExitCode {
    let mut argv = std::env::args();
    let program = argv
        .next()
        .map(|argv0| program_name(&argv0))
        .unwrap_or_else(|| "clc".to_string());

    let options = match cli::parse_args(argv) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => return fail(&Diagnostics::new(program, Default::default()), &err),
    };

    let diagnostics = Diagnostics::new(program, options.verbosity);
    diagnostics.install();
    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&diagnostics, &err),
    }
}

fn run(options: &Options) -> clc::Result<()> {
    let runtime = OpenClRuntime::load()?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    clc::execute(&runtime, options, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

fn fail(diagnostics: &Diagnostics, err: &ClcError) -> ExitCode {
    diagnostics.report(err);
    if err.is_usage() {
        eprint!("{USAGE}");
    }
    ExitCode::FAILURE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_mentions_every_flag() {
        for flag in ["-h=d", "-d=", "-b=", "-o=", "-q", "-v2"] {
            assert!(USAGE.contains(flag), "usage is missing {flag}");
        }
    }
}
