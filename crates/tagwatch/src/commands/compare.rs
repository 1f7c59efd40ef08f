//! Compare command

use anyhow::Result;
use tagwatch_update::is_version_greater_than;

use crate::cli::CompareArgs;

pub fn run(args: CompareArgs) -> Result<()> {
    let greater = is_version_greater_than(&args.first, &args.second)?;
    println!("{}", greater);
    Ok(())
}
