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

//! Source loading and binary output.

use std::fs::{self, File};
use std::io::{Read, Write};

use crate::error::{ClcError, Result};
use crate::naming::{OutputTarget, STDIN_BASE_NAME, STREAM_SENTINEL};
use crate::pipeline::SourceUnit;

/// Reads `arg` as a source file, or `stdin` when it is `-`.
pub fn read_source<R: Read + ?Sized>(arg: &str, stdin: &mut R) -> Result<SourceUnit> {
    if arg == STREAM_SENTINEL {
        let mut text = String::new();
        stdin
            .read_to_string(&mut text)
            .map_err(|err| ClcError::io(STDIN_BASE_NAME, err))?;
        return Ok(SourceUnit::new(STDIN_BASE_NAME, text));
    }
    let text = fs::read_to_string(arg).map_err(|err| ClcError::io(arg, err))?;
    Ok(SourceUnit::new(arg, text))
}

/// Writes the binary to a truncated file or raw to `stdout`.
pub fn write_binary<W: Write + ?Sized>(
    target: &OutputTarget,
    bytes: &[u8],
    stdout: &mut W,
) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            stdout
                .write_all(bytes)
                .and_then(|()| stdout.flush())
                .map_err(|err| ClcError::io("stdout", err))
        }
        OutputTarget::File(path) => {
            let name = path.display().to_string();
            let mut file = File::create(path).map_err(|err| ClcError::io(name.clone(), err))?;
            file.write_all(bytes)
                .and_then(|()| file.flush())
                .map_err(|err| ClcError::io(name, err))
        }
    }
}
