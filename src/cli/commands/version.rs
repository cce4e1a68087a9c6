//! Version command implementation

use crate::cli::Output;
use crate::{PKG_NAME, VERSION};
use anyhow::Result;

/// Execute the version command
pub async fn execute(output: &Output) -> Result<()> {
    let version = VERSION;
    let name = PKG_NAME;
    let description = env!("CARGO_PKG_DESCRIPTION");
    let repository = env!("CARGO_PKG_REPOSITORY");

    if output.is_quiet() {
        println!("{name} {version}");
        return Ok(());
    }

    output.header(&format!("{name} v{version}"));
    output.key_value("Description:", description, false);
    output.key_value("Repository:", repository, false);

    output.category("Build Information");
    output.key_value("Target:", std::env::consts::ARCH, false);
    output.key_value(
        "Profile:",
        if cfg!(debug_assertions) { "debug" } else { "release" },
        false,
    );
    output.blank_line();

    Ok(())
}
