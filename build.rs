// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Git details are optional; vergen emits defaults outside a checkout.
    EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .cargo_target_triple()
        .emit()?;
    Ok(())
}
