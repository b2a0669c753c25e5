//! Profile listing command

use crate::error::CliResult;
use crate::output::{print_single, OutputFormat};
use aastest_profiles::ProfileRegistry;

/// Print every profile name, sorted
pub fn execute(registry: &ProfileRegistry, format: OutputFormat) -> CliResult<()> {
    let names = registry.profile_names();
    match format {
        OutputFormat::Text => {
            for name in names {
                println!("{name}");
            }
            Ok(())
        }
        _ => print_single(&names, format),
    }
}
