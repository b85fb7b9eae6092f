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

//! One `clc` run, from parsed options to the written binary.

use std::io::{Read, Write};

use log::info;

use crate::cli::{Mode, Options, Verbosity};
use crate::error::{ClcError, Result};
use crate::inspect;
use crate::io::{read_source, write_binary};
use crate::naming::{output_target, OutputTarget};
use crate::pipeline::{build_binary, BuildRequest};
use crate::resolve::{resolve_device, SelectionCriterion};
use crate::runtime::{DeviceInfo, ProgramCompiler};

/// What a successful run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Number of devices listed.
    Listed(usize),
    /// Where the binary went and how large it was.
    Saved { target: OutputTarget, bytes: usize },
}

/// Runs listing or compile mode against `api`.
pub fn execute<C, R, W>(api: &C, options: &Options, stdin: &mut R, stdout: &mut W) -> Result<Outcome>
where
    C: ProgramCompiler,
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    match options.mode {
        Mode::ListDevices => list(api, options, stdout),
        Mode::Compile => compile(api, options, stdin, stdout),
    }
}

fn list<C, W>(api: &C, options: &Options, stdout: &mut W) -> Result<Outcome>
where
    C: ProgramCompiler,
    W: Write + ?Sized,
{
    let detailed = options.verbosity >= Verbosity::Verbose;
    let listed = inspect::list_devices(api, stdout, options.device.as_deref(), detailed)?;
    // Positional arguments are reported only after the listing is printed.
    if !options.inputs.is_empty() {
        return Err(ClcError::usage(format!(
            "{}: unexpected arguments in device-listing mode",
            options.inputs.join(" ")
        )));
    }
    Ok(Outcome::Listed(listed))
}

fn compile<C, R, W>(api: &C, options: &Options, stdin: &mut R, stdout: &mut W) -> Result<Outcome>
where
    C: ProgramCompiler,
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let first_input = options
        .inputs
        .first()
        .ok_or_else(|| ClcError::usage("expected input argument"))?;

    let criterion = SelectionCriterion::from_option(options.device.as_deref());
    let selected = resolve_device(api, &criterion)?;

    let sources = options
        .inputs
        .iter()
        .map(|arg| read_source(arg, &mut *stdin))
        .collect::<Result<Vec<_>>>()?;
    let request = BuildRequest::new(sources, &options.build_options);
    let products = build_binary(api, selected.device, &request)?;

    let vendor_id = api.device_uint(selected.device, DeviceInfo::VendorId)? as u32;
    let target = output_target(options.output.as_deref(), first_input, vendor_id);
    info!("saving binary to {target}");
    write_binary(&target, &products.binary, stdout)?;
    Ok(Outcome::Saved {
        target,
        bytes: products.binary.len(),
    })
}
